use crate::error::HoldemError;

/// Numeric hand strength in the standard 7462-class convention.
///
/// Every distinct five-card hand value gets one integer: 1 is a royal flush,
/// 7462 is seven-high. Lower is stronger, so the best of several hands is the
/// `min()`.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "client", serde(try_from = "u16", into = "u16"))]
pub struct HandRank(u16);

impl HandRank {
    pub const BEST: Self = Self(1);
    pub const WORST: Self = Self(7462);
    /// Number of distinct five-card hand values.
    pub const COUNT: usize = 7462;

    pub fn beats(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl TryFrom<u16> for HandRank {
    type Error = HoldemError;
    fn try_from(n: u16) -> Result<Self, Self::Error> {
        match n {
            1..=7462 => Ok(Self(n)),
            _ => Err(HoldemError::InvalidRank(n)),
        }
    }
}
impl From<HandRank> for u16 {
    fn from(r: HandRank) -> Self {
        r.0
    }
}
impl From<HandRank> for usize {
    fn from(r: HandRank) -> Self {
        r.0 as usize
    }
}

impl std::fmt::Display for HandRank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
