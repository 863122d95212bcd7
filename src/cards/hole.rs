use super::card::Card;
use super::hand::Hand;
use crate::error::HoldemError;

/// A player's two private hole cards.
///
/// Unlike [`Hand`], the cards keep the order they were dealt in: the equity
/// cache keys on literal card order, so `AsKd` and `KdAs` stay distinct.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Hole([Card; 2]);

impl Hole {
    pub fn cards(&self) -> &[Card; 2] {
        &self.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        debug_assert!(a != b);
        Self([a, b])
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        Hand::from(hole.0.as_slice())
    }
}

impl TryFrom<&[Card]> for Hole {
    type Error = HoldemError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            [a, b] if a == b => Err(HoldemError::DuplicateCard(*a)),
            [a, b] => Ok(Self([*a, *b])),
            _ => Err(HoldemError::HoleSize(cards.len())),
        }
    }
}
impl TryFrom<&str> for Hole {
    type Error = HoldemError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", Card::join(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_dealt_order() {
        let hole = Hole::try_from("Kd,As").unwrap();
        assert_eq!(hole.to_string(), "[Kd,As]");
        assert_ne!(hole, Hole::try_from("As,Kd").unwrap());
    }

    #[test]
    fn exactly_two_cards() {
        assert!(matches!(
            Hole::try_from("As,Kd,Qh"),
            Err(HoldemError::HoleSize(3))
        ));
        assert!(matches!(
            Hole::try_from("As,As"),
            Err(HoldemError::DuplicateCard(_))
        ));
    }
}
