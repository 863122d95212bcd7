use crate::Probability;
use crate::Utility;
use crate::cache::CachedValue;
use crate::cache::ValuesCache;
use crate::cards::CommunityHand;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::config::Config;
use crate::error::HoldemError;
use crate::evaluation::Category;
use crate::showdown::Cashier;
use crate::showdown::HoldemHand;
use crate::showdown::Showdown;
use std::cell::RefCell;

/// Monte Carlo all-in equity for one matchup.
///
/// Each sample runs the board out from wherever it stands, settles a
/// heads-up showdown, and rewinds. Results go through a [`ValuesCache`] so
/// asking twice about the same spot costs one simulation.
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    samples: usize,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(crate::EQUITY_SAMPLES)
    }
}

impl From<&Config> for Simulator {
    fn from(config: &Config) -> Self {
        Self::new(config.samples)
    }
}

impl Simulator {
    pub fn new(samples: usize) -> Self {
        Self {
            samples: samples.max(1),
        }
    }
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Hero's equity against villain on `board`, from the cache when we can.
    ///
    /// Hole and board cards must all be different, and are withheld from
    /// `deck`. The board is handed back exactly as it came in, even when a
    /// sample fails.
    pub fn equity(
        &self,
        cache: &mut ValuesCache,
        deck: &mut Deck,
        board: &RefCell<CommunityHand>,
        hero: &Hole,
        villain: &Hole,
    ) -> Result<CachedValue, HoldemError> {
        let (start, flop, turn, river) = {
            let b = board.borrow();
            (b.round(), b.flop().to_vec(), b.turn().to_vec(), b.river().to_vec())
        };
        let in_play = hero
            .cards()
            .iter()
            .chain(villain.cards())
            .chain(&flop)
            .chain(&turn)
            .chain(&river)
            .copied()
            .collect::<Vec<Card>>();
        Hand::disjoint(&in_play)?;
        if let Some(hit) = cache.lookup(hero.cards(), villain.cards(), &flop, &turn, &river) {
            return Ok(hit.clone());
        }
        deck.remove(hero.cards());
        deck.remove(villain.cards());
        deck.remove(&board.borrow().cards());

        let mut hands = [HoldemHand::with_community(board), HoldemHand::with_community(board)];
        hands[0].deal(hero.cards())?;
        hands[1].deal(villain.cards())?;

        let start_time = std::time::Instant::now();
        let mut outcomes = Vec::with_capacity(self.samples);
        let mut counts = [0usize; 9];
        for _ in 0..self.samples {
            deck.shuffle();
            let sample = Self::sample(deck, board, &mut hands);
            board.borrow_mut().rewind(deck, start)?;
            let (outcome, category) = sample?;
            outcomes.push(outcome);
            counts[usize::from(category)] += 1;
        }

        let n = outcomes.len() as Utility;
        let value = outcomes.iter().sum::<Utility>() / n;
        let variance = outcomes.iter().map(|x| (x - value).powi(2)).sum::<Utility>() / n;
        let categories = counts
            .iter()
            .map(|c| *c as Probability / n)
            .collect::<Vec<Probability>>();
        let result = CachedValue::new(value, variance.sqrt(), categories);
        log::info!(
            "{:<32}{:.4} ± {:.4} in {:?}",
            format!("{} v {} {}", hero, villain, start),
            result.value,
            result.stdev,
            start_time.elapsed()
        );
        cache.insert(hero.cards(), villain.cards(), &flop, &turn, &river, result.clone());
        Ok(result)
    }

    /// One runout: hero's share of the pot and the category hero made.
    fn sample(
        deck: &mut Deck,
        board: &RefCell<CommunityHand>,
        hands: &mut [HoldemHand; 2],
    ) -> Result<(Utility, Category), HoldemError> {
        board.borrow_mut().deal(deck, true)?;
        let outcome = match Cashier::showdown(hands)? {
            Showdown::Winner(0) => 1.,
            Showdown::Winner(_) => 0.,
            Showdown::Unresolved { .. } => 0.5,
        };
        let category = hands[0].category().ok_or(HoldemError::Unscored(0))?;
        Ok((outcome, category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Dealer;
    use crate::cards::Round;

    fn hole(s: &str) -> Hole {
        Hole::try_from(s).unwrap()
    }

    fn streets(flop: &str, turn: &str, river: &str) -> RefCell<CommunityHand> {
        RefCell::new(
            CommunityHand::try_from_streets(
                Card::parse(flop).unwrap(),
                Card::parse(turn).unwrap(),
                Card::parse(river).unwrap(),
            )
            .unwrap(),
        )
    }

    #[test]
    fn decided_river_is_certain() {
        let mut cache = ValuesCache::default();
        let mut deck = Deck::seeded(1);
        let board = streets("Kd,Qd,Jd", "Tc", "2h");
        let value = Simulator::new(20)
            .equity(&mut cache, &mut deck, &board, &hole("As,Ad"), &hole("3c,3s"))
            .unwrap();
        assert_eq!(value.value, 1.);
        assert_eq!(value.stdev, 0.);
        assert_eq!(value.probability(Category::Straight), 1.);
    }

    #[test]
    fn chopped_board_is_half() {
        let mut cache = ValuesCache::default();
        let mut deck = Deck::seeded(1);
        let board = streets("Ad,Kd,Qd", "Jd", "Td");
        let value = Simulator::new(10)
            .equity(&mut cache, &mut deck, &board, &hole("2c,3c"), &hole("4h,5h"))
            .unwrap();
        assert_eq!(value.value, 0.5);
        assert_eq!(value.probability(Category::StraightFlush), 1.);
    }

    #[test]
    fn aces_are_favourites_preflop() {
        let mut cache = ValuesCache::default();
        let mut deck = Deck::seeded(7);
        let board = RefCell::new(CommunityHand::new());
        let value = Simulator::new(2000)
            .equity(&mut cache, &mut deck, &board, &hole("As,Ah"), &hole("7c,2d"))
            .unwrap();
        assert!(value.value > 0.8, "{}", value.value);
        assert!(value.stdev > 0.);
        let total = value.categories.iter().sum::<Probability>();
        assert!((total - 1.).abs() < 1e-3);
        assert_eq!(value.probability(Category::HighCard), 0.);
    }

    #[test]
    fn board_and_deck_come_back_untouched() {
        let mut cache = ValuesCache::default();
        let mut deck = Deck::seeded(11);
        let board = streets("Kd,Qd,Jd", "", "");
        let before = board.borrow().clone();
        Simulator::new(50)
            .equity(&mut cache, &mut deck, &board, &hole("As,Ad"), &hole("3c,3s"))
            .unwrap();
        assert_eq!(*board.borrow(), before);
        assert_eq!(board.borrow().round(), Round::Flop);
        assert_eq!(deck.len(), 52 - 4 - 3);
    }

    #[test]
    fn second_call_is_a_cache_hit() {
        let mut cache = ValuesCache::default();
        let mut deck = Deck::seeded(5);
        let board = streets("Kd,Qd,Jd", "", "");
        let simulator = Simulator::new(200);
        let first = simulator
            .equity(&mut cache, &mut deck, &board, &hole("As,Ad"), &hole("3c,3s"))
            .unwrap();
        assert_eq!(cache.len(), 1);
        let mut other = Deck::seeded(99);
        let second = simulator
            .equity(&mut cache, &mut other, &board, &hole("As,Ad"), &hole("3c,3s"))
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(other.len(), 52);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn shared_cards_are_refused() {
        let mut cache = ValuesCache::default();
        let mut deck = Deck::seeded(3);
        let board = streets("Kd,Qd,Jd", "", "");
        let ace = Card::try_from("As").unwrap();
        assert_eq!(
            Simulator::new(10).equity(&mut cache, &mut deck, &board, &hole("As,Ah"), &hole("As,Kd")),
            Err(HoldemError::DuplicateCard(ace))
        );
        let king = Card::try_from("Kd").unwrap();
        assert_eq!(
            Simulator::new(10).equity(&mut cache, &mut deck, &board, &hole("As,Ah"), &hole("Kd,Kc")),
            Err(HoldemError::DuplicateCard(king))
        );
        assert!(cache.is_empty());
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn exhausted_deck_leaves_board_as_it_was() {
        let mut cache = ValuesCache::default();
        let mut deck = Deck::seeded(13);
        let hero = hole("As,Ad");
        let villain = hole("3c,3s");
        deck.remove(hero.cards());
        deck.remove(villain.cards());
        deck.deal(45).unwrap();
        let board = RefCell::new(CommunityHand::new());
        assert_eq!(
            Simulator::new(10).equity(&mut cache, &mut deck, &board, &hero, &villain),
            Err(HoldemError::DeckExhausted {
                wanted: 1,
                remaining: 0
            })
        );
        assert_eq!(*board.borrow(), CommunityHand::new());
        assert_eq!(deck.len(), 3);
        assert!(cache.is_empty());
    }
}
