use criterion::{Criterion, black_box, criterion_group, criterion_main};
use luach_calendar::{
    HebrewDate, HebrewMonth, MoladDate, absolute_to_hebrew, days_in_year, elapsed_days,
    hebrew_to_absolute,
};

fn year_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("year");
    group.bench_function("elapsed_days", |b| b.iter(|| elapsed_days(black_box(5784))));
    group.bench_function("days_in_year", |b| b.iter(|| days_in_year(black_box(5784))));
    group.finish();
}

fn conversion_bench(c: &mut Criterion) {
    let abs = 738_880;

    let mut group = c.benchmark_group("conversion");
    group.bench_function("absolute_to_hebrew", |b| {
        b.iter(|| absolute_to_hebrew(black_box(abs)))
    });
    group.bench_function("hebrew_to_absolute_elul", |b| {
        b.iter(|| hebrew_to_absolute(black_box(5784), HebrewMonth::Elul, black_box(29)))
    });
    group.bench_function("hebrew_date_from_absolute", |b| {
        b.iter(|| HebrewDate::from_absolute(black_box(abs)))
    });
    group.finish();
}

fn molad_bench(c: &mut Criterion) {
    c.bench_function("molad_for_month", |b| {
        b.iter(|| MoladDate::for_month(black_box(5784), HebrewMonth::Teves))
    });
}

criterion_group!(benches, year_bench, conversion_bench, molad_bench);
criterion_main!(benches);
