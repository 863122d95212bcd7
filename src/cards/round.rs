use crate::error::HoldemError;

/// The four betting rounds in Texas Hold'em.
///
/// Each round is named for the community cards already visible. Rounds are
/// totally ordered, and each one corresponds to a fixed number of streets
/// still to come (3, 2, 1, 0) and a fixed board shape.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Round {
    #[default]
    Preflop = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    River = 3isize,
}

impl Round {
    /// All four rounds in order.
    pub const fn all() -> [Self; 4] {
        [Self::Preflop, Self::Flop, Self::Turn, Self::River]
    }
    /// Streets still to be dealt.
    pub const fn n_remaining(&self) -> usize {
        match self {
            Self::Preflop => 3,
            Self::Flop => 2,
            Self::Turn => 1,
            Self::River => 0,
        }
    }
    /// Cards dealt to advance out of this round.
    pub const fn n_dealt(&self) -> usize {
        match self {
            Self::Preflop => 3,
            Self::Flop => 1,
            Self::Turn => 1,
            Self::River => 0,
        }
    }
}

/// (flop, turn, river) lengths -> Round
///
/// Only four board shapes exist. Anything else means someone dealt out of
/// order, and there is no sensible round to report.
impl TryFrom<(usize, usize, usize)> for Round {
    type Error = HoldemError;
    fn try_from((flop, turn, river): (usize, usize, usize)) -> Result<Self, Self::Error> {
        match (flop, turn, river) {
            (0, 0, 0) => Ok(Self::Preflop),
            (3, 0, 0) => Ok(Self::Flop),
            (3, 1, 0) => Ok(Self::Turn),
            (3, 1, 1) => Ok(Self::River),
            _ => Err(HoldemError::IllegalCommunityState { flop, turn, river }),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Preflop => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::River => write!(f, "river"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_are_ordered() {
        assert!(Round::Preflop < Round::Flop);
        assert!(Round::Flop < Round::Turn);
        assert!(Round::Turn < Round::River);
    }

    #[test]
    fn remaining_streets() {
        let remaining = Round::all().map(|r| r.n_remaining());
        assert_eq!(remaining, [3, 2, 1, 0]);
    }

    #[test]
    fn legal_shapes() {
        for round in Round::all() {
            let shape = match round {
                Round::Preflop => (0, 0, 0),
                Round::Flop => (3, 0, 0),
                Round::Turn => (3, 1, 0),
                Round::River => (3, 1, 1),
            };
            assert_eq!(Round::try_from(shape).unwrap(), round);
        }
    }

    #[test]
    fn illegal_shapes() {
        for shape in [(0, 1, 0), (3, 0, 1), (2, 0, 0), (0, 0, 1), (3, 2, 0), (4, 1, 1)] {
            assert!(matches!(
                Round::try_from(shape),
                Err(HoldemError::IllegalCommunityState { .. })
            ));
        }
    }

    #[test]
    fn streets_fill_the_board() {
        let dealt = Round::all().map(|r| r.n_dealt());
        assert_eq!(dealt, [3, 1, 1, 0]);
        assert_eq!(dealt.iter().sum::<usize>(), 5);
    }
}
