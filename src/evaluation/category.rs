/// Coarse hand class, weakest first.
///
/// The derived `Ord` follows hand strength. [`Category::all`] is also the
/// order of the per-category breakdown stored alongside cached equities.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
}

const LABELS: [&str; 9] = [
    "high card",
    "pair",
    "two pair",
    "trips",
    "straight",
    "flush",
    "full house",
    "quads",
    "straight flush",
];

impl Category {
    pub const fn all() -> [Self; 9] {
        [
            Self::HighCard,
            Self::OnePair,
            Self::TwoPair,
            Self::ThreeOAK,
            Self::Straight,
            Self::Flush,
            Self::FullHouse,
            Self::FourOAK,
            Self::StraightFlush,
        ]
    }
    /// Category names in [`Category::all`] order.
    pub const fn labels() -> &'static [&'static str; 9] {
        &LABELS
    }
    pub const fn label(&self) -> &'static str {
        LABELS[*self as usize]
    }
    /// Column names of a cached value: the equity, then one per category.
    pub fn value_keys() -> Vec<&'static str> {
        std::iter::once("best_value")
            .chain(LABELS.iter().copied())
            .collect()
    }
}

impl From<Category> for usize {
    fn from(c: Category) -> Self {
        c as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
