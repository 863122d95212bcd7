use super::card::Card;
use crate::error::HoldemError;

/// Anything the board can draw community cards from and give them back to.
///
/// [`CommunityHand`](super::community::CommunityHand) only ever needs these
/// two operations, so shuffling and card removal stay with the implementor.
pub trait Dealer {
    /// Remove and return the next `n` cards.
    fn deal(&mut self, n: usize) -> Result<Vec<Card>, HoldemError>;
    /// Put previously dealt cards back. With `shuffle == false` the very
    /// same cards come out of the next `deal`, in the same order.
    fn return_cards(&mut self, cards: Vec<Card>, shuffle: bool);
}
