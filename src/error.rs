use crate::cards::Card;
use thiserror::Error;

/// Everything that can go wrong inside a hand.
///
/// None of these are transient. They all point at a sequencing or input
/// defect on the caller's side, so nothing here is ever retried: the caller
/// abandons the current hand (or simulation step) and moves on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HoldemError {
    #[error("illegal community state: flop {flop}, turn {turn}, river {river} cards")]
    IllegalCommunityState {
        flop: usize,
        turn: usize,
        river: usize,
    },

    #[error("hole cards already dealt")]
    AlreadyDealt,

    #[error("hold'em needs exactly 2 hole cards, got {0}")]
    HoleSize(usize),

    #[error("card {0} appears twice")]
    DuplicateCard(Card),

    #[error("deck exhausted: wanted {wanted}, {remaining} remaining")]
    DeckExhausted { wanted: usize, remaining: usize },

    #[error("invalid card: {0}")]
    InvalidCard(String),

    #[error("hand rank {0} outside 1..=7462")]
    InvalidRank(u16),

    #[error("showdown needs at least one hand")]
    EmptyShowdown,

    #[error("hand {0} cannot be scored before the flop")]
    Unscored(usize),
}
