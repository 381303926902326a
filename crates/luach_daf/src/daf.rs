//! The daf value returned by both calculators.

use crate::tractate::{BavliTractate, YerushalmiTractate};

/// Which Talmud a [`Daf`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DafCycle {
    Bavli,
    Yerushalmi,
}

impl DafCycle {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bavli => "Bavli",
            Self::Yerushalmi => "Yerushalmi",
        }
    }
}

impl std::fmt::Display for DafCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One day's page in a Daf Yomi cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Daf {
    /// 0-based tractate position within the cycle's table.
    pub tractate_index: usize,
    /// Printed daf number.
    pub page: u32,
    pub cycle: DafCycle,
}

impl Daf {
    /// Transliterated tractate name, or `""` for an index outside the table.
    pub fn tractate_name(&self) -> &'static str {
        let name = match self.cycle {
            DafCycle::Bavli => BavliTractate::from_index(self.tractate_index).map(BavliTractate::name),
            DafCycle::Yerushalmi => {
                YerushalmiTractate::from_index(self.tractate_index).map(YerushalmiTractate::name)
            }
        };
        name.unwrap_or("")
    }

    pub fn bavli_tractate(&self) -> Option<BavliTractate> {
        match self.cycle {
            DafCycle::Bavli => BavliTractate::from_index(self.tractate_index),
            DafCycle::Yerushalmi => None,
        }
    }

    pub fn yerushalmi_tractate(&self) -> Option<YerushalmiTractate> {
        match self.cycle {
            DafCycle::Yerushalmi => YerushalmiTractate::from_index(self.tractate_index),
            DafCycle::Bavli => None,
        }
    }
}

impl std::fmt::Display for Daf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.tractate_name(), self.page)
    }
}
