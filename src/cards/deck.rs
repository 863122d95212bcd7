use super::card::Card;
use super::dealer::Dealer;
use super::hand::Hand;
use super::hole::Hole;
use crate::error::HoldemError;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// A stack of remaining cards with its own random source.
///
/// Cards are dealt off the top of the stack. Returning cards without a
/// shuffle pushes them back on top, so a deal/return pair is an exact undo,
/// which is what lets a simulation explore a runout and roll it back.
#[derive(Debug, Clone)]
pub struct Deck {
    stack: Vec<Card>,
    live: Hand,
    rng: SmallRng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A full 52-card deck, freshly shuffled from OS entropy.
    pub fn new() -> Self {
        Self::from(SmallRng::from_os_rng())
    }
    /// A full 52-card deck whose shuffles are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::from(SmallRng::seed_from_u64(seed))
    }
    pub fn len(&self) -> usize {
        self.stack.len()
    }
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.live.contains(card)
    }
    pub fn shuffle(&mut self) {
        self.stack.shuffle(&mut self.rng);
    }
    /// Withhold specific cards, e.g. hole cards already in players' hands.
    pub fn remove(&mut self, cards: &[Card]) {
        let gone = Hand::from(cards);
        self.stack.retain(|c| !gone.contains(c));
        cards.iter().for_each(|c| self.live.remove(*c));
    }
    /// Deals two cards as a player's hole cards.
    pub fn hole(&mut self) -> Result<Hole, HoldemError> {
        let cards = self.deal(2)?;
        Hole::try_from(cards.as_slice())
    }
}

impl From<SmallRng> for Deck {
    fn from(mut rng: SmallRng) -> Self {
        let mut stack = (0..52u8).map(Card::from).collect::<Vec<Card>>();
        stack.shuffle(&mut rng);
        Self {
            stack,
            live: Hand::from(Hand::mask()),
            rng,
        }
    }
}

impl Dealer for Deck {
    fn deal(&mut self, n: usize) -> Result<Vec<Card>, HoldemError> {
        if n > self.stack.len() {
            return Err(HoldemError::DeckExhausted {
                wanted: n,
                remaining: self.stack.len(),
            });
        }
        let cards = (0..n)
            .filter_map(|_| self.stack.pop())
            .collect::<Vec<Card>>();
        cards.iter().for_each(|c| self.live.remove(*c));
        Ok(cards)
    }
    fn return_cards(&mut self, cards: Vec<Card>, shuffle: bool) {
        debug_assert!(cards.iter().all(|c| !self.live.contains(c)));
        cards
            .iter()
            .for_each(|c| self.live = Hand::add(self.live, Hand::from(*c)));
        self.stack.extend(cards.into_iter().rev());
        if shuffle {
            self.shuffle();
        }
    }
}
