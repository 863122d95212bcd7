/// Result of comparing hands at showdown.
///
/// Ties are reported, not settled: splitting the pot is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Showdown {
    /// index of the single best hand
    Winner(usize),
    /// indices of every hand sharing the best rank
    Unresolved { tied: Vec<usize> },
}

impl std::fmt::Display for Showdown {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Showdown::Winner(i) => write!(f, "hand {} wins", i),
            Showdown::Unresolved { tied } => write!(f, "unresolved between {:?}", tied),
        }
    }
}
