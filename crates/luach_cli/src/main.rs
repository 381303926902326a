mod logging;

use clap::{ArgAction, Parser, Subcommand};
use luach_calendar::{
    HebrewDate, HebrewMonth, MoladDate, months_in_year, resolve_rosh_hashana,
    rosh_hashana_absolute, year_info,
};
use luach_daf::{bavli_cycle_number, bavli_daf, yerushalmi_cycle_number, yerushalmi_daf};
use luach_observance::{KiddushLevanaTimes, ObservanceContext, parsha_year_type};
use luach_time::{GregorianDate, julian_day_number};
use tracing::debug;

#[derive(Parser)]
#[command(name = "luach", about = "Hebrew calendar CLI")]
struct Cli {
    /// Use Israel festival rules instead of the diaspora's
    #[arg(long, global = true)]
    israel: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hebrew date and observances for a civil date
    Hebrew {
        /// Civil date (YYYY-MM-DD)
        date: String,
    },
    /// Civil date for a Hebrew date
    Gregorian {
        /// Hebrew year (1 = Anno Mundi 1)
        year: i64,
        /// Month name or number (Nissan = 1, Adar II = 13)
        month: String,
        /// Day of month (1-30)
        day: u32,
    },
    /// Summary of a Hebrew year
    Year {
        /// Hebrew year
        year: i64,
    },
    /// Every holiday and fast of a Hebrew year
    Holidays {
        /// Hebrew year
        year: i64,
    },
    /// Molad and Kiddush Levana windows for a month
    Molad {
        /// Hebrew year
        year: i64,
        /// Month name or number
        month: String,
    },
    /// Bavli and Yerushalmi Daf Yomi for a civil date
    Daf {
        /// Civil date (YYYY-MM-DD)
        date: String,
    },
}

fn parse_date(s: &str) -> GregorianDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date {s}: {e}");
        std::process::exit(1);
    })
}

fn parse_month(s: &str) -> HebrewMonth {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid month {s}: {e}");
        eprintln!("Valid: Nissan..Adar, Adar II, or 1-13");
        std::process::exit(1);
    })
}

fn require_year(year: i64) {
    if year < 1 {
        eprintln!("Invalid Hebrew year: {year} (must be 1 or later)");
        std::process::exit(1);
    }
}

fn print_observances(ctx: &ObservanceContext) {
    if let Some(holiday) = ctx.current_holiday() {
        println!("Holiday:      {holiday}");
    }
    if ctx.is_yom_tov() {
        println!("Yom tov:      yes");
    }
    if ctx.is_taanis() {
        println!("Fast day:     yes");
    }
    if let Some(day) = ctx.day_of_omer() {
        println!("Omer:         day {day}");
    }
    if let Some(day) = ctx.day_of_chanukah() {
        println!("Chanukah:     day {day}");
    }
    if let Some(day) = ctx.chol_hamoed_day() {
        println!("Chol hamoed:  day {day}");
    }
    if let Some(parsha) = ctx.parsha() {
        println!("Parsha:       {parsha}");
    } else if let Some(parsha) = ctx.upcoming_parsha() {
        println!("Next parsha:  {parsha}");
    }
    if let Some(special) = ctx.special_shabbos() {
        println!("Shabbos:      {special}");
    }
    if ctx.is_shabbos_mevorchim() {
        println!("Shabbos:      Mevorchim");
    }
    if ctx.is_birkas_hachama() {
        println!("Birkas Hachama");
    }
    let rain = if ctx.is_vesein_tal_umatar_recited() {
        "Vesein tal umatar"
    } else {
        "Vesein beracha"
    };
    let wind = if ctx.is_mashiv_haruach_recited() {
        "Mashiv haruach"
    } else {
        "Morid hatal"
    };
    println!("Amidah:       {wind}; {rain}");
    if ctx.is_yaaleh_veyavo_recited() {
        println!("Amidah:       Yaaleh veyavo");
    }
    if ctx.is_al_hanissim_recited() {
        println!("Amidah:       Al hanissim");
    }
    if ctx.is_hallel_shalem_recited() {
        println!("Hallel:       whole");
    } else if ctx.is_hallel_recited() {
        println!("Hallel:       partial");
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Hebrew { date } => {
            let civil = parse_date(&date);
            let ctx = ObservanceContext::from_gregorian(&civil, cli.israel);
            debug!(%civil, absolute = civil.to_absolute(), "hebrew query");
            println!("{civil} ({})", civil.weekday());
            println!("Hebrew date:  {}", ctx.date());
            print_observances(&ctx);
        }

        Commands::Gregorian { year, month, day } => {
            require_year(year);
            let month = parse_month(&month);
            let date = HebrewDate::new(year, month, day).unwrap_or_else(|e| {
                eprintln!("Invalid Hebrew date: {e}");
                std::process::exit(1);
            });
            let civil = date.to_gregorian();
            println!("{date} = {civil} ({})", civil.weekday());
        }

        Commands::Year { year } => {
            require_year(year);
            let info = year_info(year);
            let resolution = resolve_rosh_hashana(year);
            let rosh_hashana = GregorianDate::from_absolute(info.rosh_hashana);
            println!("Year {year}");
            println!(
                "Leap:         {} ({} months)",
                if info.is_leap { "yes" } else { "no" },
                months_in_year(year)
            );
            println!("Days:         {} ({})", info.days, info.length);
            println!(
                "Rosh Hashana: {rosh_hashana} ({})",
                info.rosh_hashana_weekday
            );
            if info.dechiyos.is_empty() {
                println!("Dechiyos:     none");
            } else {
                let names: Vec<&str> = info.dechiyos.iter().map(|d| d.name()).collect();
                println!(
                    "Dechiyos:     {} (+{} days)",
                    names.join(", "),
                    resolution.total_delay()
                );
            }
            match parsha_year_type(year, cli.israel) {
                Some(ty) => println!("Parsha table: {ty}"),
                None => println!("Parsha table: none"),
            }
        }

        Commands::Holidays { year } => {
            require_year(year);
            let first = HebrewDate::from_absolute(rosh_hashana_absolute(year));
            let mut ctx = ObservanceContext::new(first, cli.israel);
            while ctx.date().year() == year {
                if let Some(holiday) = ctx.current_holiday() {
                    let hebrew = ctx.date().to_string();
                    println!("{}  {hebrew:<24} {holiday}", ctx.date().to_gregorian());
                }
                ctx = ctx.tomorrow();
            }
        }

        Commands::Molad { year, month } => {
            require_year(year);
            let month = parse_month(&month);
            if !month.occurs_in(year) {
                eprintln!("{} does not occur in {year}", month.name());
                std::process::exit(1);
            }
            let molad = MoladDate::for_month(year, month);
            let times = KiddushLevanaTimes::for_month(year, month);
            println!("Molad {} {year}", month.name_in_year(year));
            println!("Jerusalem:    {} {}", molad.date, molad.molad);
            println!("Standard:     {}", times.molad);
            println!("Kiddush Levana");
            println!("  earliest (3 days):      {}", times.earliest_3_days);
            println!("  earliest (7 days):      {}", times.earliest_7_days);
            println!("  latest (halfway):       {}", times.latest_between_moldos);
            println!("  latest (15 days):       {}", times.latest_15_days);
        }

        Commands::Daf { date } => {
            let civil = parse_date(&date);
            let jd = civil.to_jd();
            debug!(%civil, jdn = julian_day_number(jd), "daf query");
            match (bavli_daf(&civil), bavli_cycle_number(jd)) {
                (Some(daf), Some(cycle)) => println!("Bavli:        {daf} (cycle {cycle})"),
                _ => println!("Bavli:        none"),
            }
            match (yerushalmi_daf(&civil), yerushalmi_cycle_number(jd)) {
                (Some(daf), Some(cycle)) => println!("Yerushalmi:   {daf} (cycle {cycle})"),
                _ => println!("Yerushalmi:   none"),
            }
        }
    }
}
