//! Tractate orderings and page counts for the two Daf Yomi cycles.
//!
//! Page counts are the number of the last daf (pages start at 2 in the
//! Bavli), so a tractate of `n` blatt contributes `n - 1` days.

/// Tractates of the Babylonian Talmud in Daf Yomi order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum BavliTractate {
    Berachos,
    Shabbos,
    Eruvin,
    Pesachim,
    Shekalim,
    Yoma,
    Sukkah,
    Beitzah,
    RoshHashana,
    Taanis,
    Megillah,
    MoedKatan,
    Chagigah,
    Yevamos,
    Kesubos,
    Nedarim,
    Nazir,
    Sotah,
    Gitin,
    Kiddushin,
    BavaKamma,
    BavaMetzia,
    BavaBasra,
    Sanhedrin,
    Makkos,
    Shevuos,
    AvodahZarah,
    Horiyos,
    Zevachim,
    Menachos,
    Chullin,
    Bechoros,
    Arachin,
    Temurah,
    Kerisos,
    Meilah,
    Kinnim,
    Tamid,
    Midos,
    Niddah,
}

/// All 40 Bavli tractates in cycle order.
pub const ALL_BAVLI_TRACTATES: [BavliTractate; 40] = [
    BavliTractate::Berachos,
    BavliTractate::Shabbos,
    BavliTractate::Eruvin,
    BavliTractate::Pesachim,
    BavliTractate::Shekalim,
    BavliTractate::Yoma,
    BavliTractate::Sukkah,
    BavliTractate::Beitzah,
    BavliTractate::RoshHashana,
    BavliTractate::Taanis,
    BavliTractate::Megillah,
    BavliTractate::MoedKatan,
    BavliTractate::Chagigah,
    BavliTractate::Yevamos,
    BavliTractate::Kesubos,
    BavliTractate::Nedarim,
    BavliTractate::Nazir,
    BavliTractate::Sotah,
    BavliTractate::Gitin,
    BavliTractate::Kiddushin,
    BavliTractate::BavaKamma,
    BavliTractate::BavaMetzia,
    BavliTractate::BavaBasra,
    BavliTractate::Sanhedrin,
    BavliTractate::Makkos,
    BavliTractate::Shevuos,
    BavliTractate::AvodahZarah,
    BavliTractate::Horiyos,
    BavliTractate::Zevachim,
    BavliTractate::Menachos,
    BavliTractate::Chullin,
    BavliTractate::Bechoros,
    BavliTractate::Arachin,
    BavliTractate::Temurah,
    BavliTractate::Kerisos,
    BavliTractate::Meilah,
    BavliTractate::Kinnim,
    BavliTractate::Tamid,
    BavliTractate::Midos,
    BavliTractate::Niddah,
];

/// Last daf of each Bavli tractate, with Shekalim at its current 22.
pub const BAVLI_PAGES: [u32; 40] = [
    64, 157, 105, 121, 22, 88, 56, 40, 35, 31, 32, 29, 27, 122, 112, 91, 66, 49, 90, 82, 119, 119,
    176, 113, 24, 49, 76, 14, 120, 110, 142, 61, 34, 34, 28, 22, 4, 9, 5, 73,
];

/// Shekalim's page count in cycles 1 through 7.
pub const SHEKALIM_PAGES_EARLY_CYCLES: u32 = 13;

/// Last cycle that studied the 13-page Shekalim.
pub const LAST_EARLY_SHEKALIM_CYCLE: u32 = 7;

const BAVLI_NAMES: [&str; 40] = [
    "Berachos",
    "Shabbos",
    "Eruvin",
    "Pesachim",
    "Shekalim",
    "Yoma",
    "Sukkah",
    "Beitzah",
    "Rosh Hashana",
    "Taanis",
    "Megillah",
    "Moed Katan",
    "Chagigah",
    "Yevamos",
    "Kesubos",
    "Nedarim",
    "Nazir",
    "Sotah",
    "Gitin",
    "Kiddushin",
    "Bava Kamma",
    "Bava Metzia",
    "Bava Basra",
    "Sanhedrin",
    "Makkos",
    "Shevuos",
    "Avodah Zarah",
    "Horiyos",
    "Zevachim",
    "Menachos",
    "Chullin",
    "Bechoros",
    "Arachin",
    "Temurah",
    "Kerisos",
    "Meilah",
    "Kinnim",
    "Tamid",
    "Midos",
    "Niddah",
];

impl BavliTractate {
    /// 0-based position in the cycle (Berachos = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        ALL_BAVLI_TRACTATES.get(index).copied()
    }

    /// Transliterated name.
    pub fn name(self) -> &'static str {
        BAVLI_NAMES[self.index()]
    }

    /// Last daf of the tractate as studied in `cycle`.
    pub fn pages(self, cycle: u32) -> u32 {
        if self == Self::Shekalim && cycle <= LAST_EARLY_SHEKALIM_CYCLE {
            SHEKALIM_PAGES_EARLY_CYCLES
        } else {
            BAVLI_PAGES[self.index()]
        }
    }

    /// Amount added to the in-tractate offset to get the printed daf.
    ///
    /// Kinnim, Tamid and Midos are printed continuing the pagination of
    /// the tractate they are bound with.
    pub const fn first_page_offset(self) -> u32 {
        match self {
            Self::Kinnim => 21,
            Self::Tamid => 24,
            Self::Midos => 32,
            _ => 0,
        }
    }
}

impl std::fmt::Display for BavliTractate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Yerushalmi
// ---------------------------------------------------------------------------

/// Tractates of the Jerusalem Talmud (Vilna edition) in Daf Yomi order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum YerushalmiTractate {
    Berachos,
    Peah,
    Demai,
    Kilayim,
    Sheviis,
    Terumos,
    Maasros,
    MaaserSheni,
    Chalah,
    Orlah,
    Bikurim,
    Shabbos,
    Eruvin,
    Pesachim,
    Beitzah,
    RoshHashanah,
    Yoma,
    Sukah,
    Taanis,
    Shekalim,
    Megilah,
    Chagigah,
    MoedKatan,
    Yevamos,
    Kesuvos,
    Sotah,
    Nedarim,
    Nazir,
    Gitin,
    Kidushin,
    BavaKama,
    BavaMetzia,
    BavaBasra,
    Sanhedrin,
    Makos,
    Shevuos,
    AvodahZarah,
    Horayos,
    Nidah,
}

/// All 39 Yerushalmi tractates in cycle order.
pub const ALL_YERUSHALMI_TRACTATES: [YerushalmiTractate; 39] = [
    YerushalmiTractate::Berachos,
    YerushalmiTractate::Peah,
    YerushalmiTractate::Demai,
    YerushalmiTractate::Kilayim,
    YerushalmiTractate::Sheviis,
    YerushalmiTractate::Terumos,
    YerushalmiTractate::Maasros,
    YerushalmiTractate::MaaserSheni,
    YerushalmiTractate::Chalah,
    YerushalmiTractate::Orlah,
    YerushalmiTractate::Bikurim,
    YerushalmiTractate::Shabbos,
    YerushalmiTractate::Eruvin,
    YerushalmiTractate::Pesachim,
    YerushalmiTractate::Beitzah,
    YerushalmiTractate::RoshHashanah,
    YerushalmiTractate::Yoma,
    YerushalmiTractate::Sukah,
    YerushalmiTractate::Taanis,
    YerushalmiTractate::Shekalim,
    YerushalmiTractate::Megilah,
    YerushalmiTractate::Chagigah,
    YerushalmiTractate::MoedKatan,
    YerushalmiTractate::Yevamos,
    YerushalmiTractate::Kesuvos,
    YerushalmiTractate::Sotah,
    YerushalmiTractate::Nedarim,
    YerushalmiTractate::Nazir,
    YerushalmiTractate::Gitin,
    YerushalmiTractate::Kidushin,
    YerushalmiTractate::BavaKama,
    YerushalmiTractate::BavaMetzia,
    YerushalmiTractate::BavaBasra,
    YerushalmiTractate::Sanhedrin,
    YerushalmiTractate::Makos,
    YerushalmiTractate::Shevuos,
    YerushalmiTractate::AvodahZarah,
    YerushalmiTractate::Horayos,
    YerushalmiTractate::Nidah,
];

/// Pages of each Yerushalmi tractate; one page per day.
pub const YERUSHALMI_PAGES: [u32; 39] = [
    68, 37, 34, 44, 31, 59, 26, 33, 28, 20, 13, 92, 65, 71, 22, 22, 42, 26, 26, 33, 34, 22, 19, 85,
    72, 47, 40, 47, 54, 48, 44, 37, 34, 44, 9, 57, 37, 19, 13,
];

/// Study days in one Yerushalmi cycle, excluded days not counted.
pub const YERUSHALMI_CYCLE_PAGES: i64 = 1554;

const YERUSHALMI_NAMES: [&str; 39] = [
    "Berachos",
    "Pe'ah",
    "Demai",
    "Kilayim",
    "Shevi'is",
    "Terumos",
    "Ma'asros",
    "Ma'aser Sheni",
    "Chalah",
    "Orlah",
    "Bikurim",
    "Shabbos",
    "Eruvin",
    "Pesachim",
    "Beitzah",
    "Rosh Hashanah",
    "Yoma",
    "Sukah",
    "Ta'anis",
    "Shekalim",
    "Megilah",
    "Chagigah",
    "Moed Katan",
    "Yevamos",
    "Kesuvos",
    "Sotah",
    "Nedarim",
    "Nazir",
    "Gitin",
    "Kidushin",
    "Bava Kama",
    "Bava Metzia",
    "Bava Basra",
    "Sanhedrin",
    "Makos",
    "Shevuos",
    "Avodah Zarah",
    "Horayos",
    "Nidah",
];

impl YerushalmiTractate {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        ALL_YERUSHALMI_TRACTATES.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        YERUSHALMI_NAMES[self.index()]
    }

    pub fn pages(self) -> u32 {
        YERUSHALMI_PAGES[self.index()]
    }
}

impl std::fmt::Display for YerushalmiTractate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
