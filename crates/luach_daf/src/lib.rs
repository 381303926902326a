//! Daf Yomi study cycles.
//!
//! Both calculators take a Julian Date (or a civil date, converted at 0h)
//! and return `None` when no page is studied: before a cycle's first day,
//! or on a Yerushalmi rest day.

pub mod bavli;
pub mod daf;
pub mod tractate;
pub mod yerushalmi;

pub use bavli::{
    BAVLI_CYCLE_DAYS, BAVLI_CYCLE_START_JDN, EARLY_BAVLI_CYCLE_DAYS, SHEKALIM_CHANGE_JDN,
    bavli_cycle_number, bavli_daf, bavli_daf_for_jd,
};
pub use daf::{Daf, DafCycle};
pub use tractate::{
    ALL_BAVLI_TRACTATES, ALL_YERUSHALMI_TRACTATES, BAVLI_PAGES, BavliTractate,
    LAST_EARLY_SHEKALIM_CYCLE, SHEKALIM_PAGES_EARLY_CYCLES, YERUSHALMI_CYCLE_PAGES,
    YERUSHALMI_PAGES, YerushalmiTractate,
};
pub use yerushalmi::{
    MAX_YERUSHALMI_CYCLES, YERUSHALMI_CYCLE_START_JDN, is_excluded_day, yerushalmi_cycle_number,
    yerushalmi_daf, yerushalmi_daf_for_jd,
};
