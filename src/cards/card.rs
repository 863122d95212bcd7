use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use crate::error::HoldemError;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. Equality is structural: two cards are the same card
/// exactly when rank and suit agree.
///
/// # Text
///
/// Two characters, rank then suit: `"As"`, `"Td"`. Lists of cards are
/// comma-separated and may be wrapped in brackets, `"[As,Kd,Qh]"`; see
/// [`Card::parse`] and [`Card::join`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = HoldemError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => Ok(Card::from((Rank::try_from(r)?, Suit::try_from(s)?))),
            _ => Err(HoldemError::InvalidCard(s.to_string())),
        }
    }
}

impl Card {
    /// Parses a list of cards such as `"As,Kd,Qh"` or `"[As, Kd, Qh]"`.
    ///
    /// Commas and whitespace both separate cards; the enclosing brackets are
    /// cosmetic. An empty list (`""` or `"[]"`) parses to no cards.
    pub fn parse(s: &str) -> Result<Vec<Self>, HoldemError> {
        s.trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(Self::try_from)
            .collect()
    }
    /// Renders cards in the order given, `[As,Kd,Qh]`.
    pub fn join(cards: &[Self]) -> String {
        format!(
            "[{}]",
            cards
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(",")
        )
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(0..52))
    }
}
