use super::card::Card;
use super::dealer::Dealer;
use super::hand::Hand;
use super::round::Round;
use crate::error::HoldemError;

/// The community cards, kept street by street.
///
/// The board only ever takes one of four shapes, `(0,0,0)`, `(3,0,0)`,
/// `(3,1,0)` and `(3,1,1)`, and [`Round`] is derived from that shape after
/// every mutation. Dealing moves forward one street at a time; undealing hands
/// the most recent street back to the [`Dealer`] unshuffled, so a simulation
/// can run a board out and rewind it to exactly where it started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommunityHand {
    flop: Vec<Card>,
    turn: Vec<Card>,
    river: Vec<Card>,
    round: Round,
}

impl CommunityHand {
    /// Creates an empty board (preflop state).
    pub fn new() -> Self {
        Self::default()
    }
    /// A hard-wired board, validated against the legal shapes.
    pub fn try_from_streets(
        flop: Vec<Card>,
        turn: Vec<Card>,
        river: Vec<Card>,
    ) -> Result<Self, HoldemError> {
        let mut board = Self {
            flop,
            turn,
            river,
            round: Round::Preflop,
        };
        board.update_round()?;
        Hand::disjoint(&board.cards())?;
        Ok(board)
    }

    pub fn round(&self) -> Round {
        self.round
    }
    pub fn flop(&self) -> &[Card] {
        &self.flop
    }
    pub fn turn(&self) -> &[Card] {
        &self.turn
    }
    pub fn river(&self) -> &[Card] {
        &self.river
    }
    /// All community cards, flop then turn then river.
    pub fn cards(&self) -> Vec<Card> {
        self.flop
            .iter()
            .chain(self.turn.iter())
            .chain(self.river.iter())
            .copied()
            .collect()
    }
    pub fn len(&self) -> usize {
        self.flop.len() + self.turn.len() + self.river.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-derive the round from the street shapes.
    pub fn update_round(&mut self) -> Result<Round, HoldemError> {
        self.round = Round::try_from((self.flop.len(), self.turn.len(), self.river.len()))?;
        Ok(self.round)
    }

    /// Deal the next street, or with `runway` every remaining street.
    ///
    /// Dealing on the river is a no-op. If the dealer runs dry the board is
    /// left on the last street that was fully dealt.
    pub fn deal<D: Dealer>(&mut self, deck: &mut D, runway: bool) -> Result<Round, HoldemError> {
        for _ in 0..Round::Preflop.n_remaining() {
            let round = self.update_round()?;
            let street = match round {
                Round::Preflop => &mut self.flop,
                Round::Flop => &mut self.turn,
                Round::Turn => &mut self.river,
                Round::River => break,
            };
            *street = deck.deal(round.n_dealt())?;
            let round = self.update_round()?;
            log::debug!("{:<32}{}", format!("dealt {}", round), self);
            if !runway {
                break;
            }
        }
        Ok(self.round)
    }

    /// Hand the latest street back to the dealer, unshuffled.
    ///
    /// Undealing preflop is a no-op.
    pub fn undeal<D: Dealer>(&mut self, deck: &mut D) -> Result<Round, HoldemError> {
        let cards = match self.update_round()? {
            Round::Preflop => return Ok(Round::Preflop),
            Round::Flop => std::mem::take(&mut self.flop),
            Round::Turn => std::mem::take(&mut self.turn),
            Round::River => std::mem::take(&mut self.river),
        };
        log::debug!("{:<32}{}", "returning", Card::join(&cards));
        deck.return_cards(cards, false);
        self.update_round()
    }

    /// Undeal until the board is back at `target` (or preflop).
    pub fn rewind<D: Dealer>(&mut self, deck: &mut D, target: Round) -> Result<Round, HoldemError> {
        while self.update_round()? > target && self.round != Round::Preflop {
            self.undeal(deck)?;
        }
        Ok(self.round)
    }

    /// The board as an unordered set, e.g. to tell two boards apart.
    pub fn hand(&self) -> Hand {
        Hand::from(self.cards().as_slice())
    }
}

impl std::fmt::Display for CommunityHand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            Card::join(&self.flop),
            Card::join(&self.turn),
            Card::join(&self.river)
        )
    }
}

/// A board read off in dealing order: three flop cards, then turn, then river.
impl TryFrom<&[Card]> for CommunityHand {
    type Error = HoldemError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let (flop, rest) = cards.split_at(cards.len().min(3));
        let (turn, river) = rest.split_at(rest.len().min(1));
        Self::try_from_streets(flop.to_vec(), turn.to_vec(), river.to_vec())
    }
}
impl TryFrom<&str> for CommunityHand {
    type Error = HoldemError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}
