use super::category::Category;
use super::hand_rank::HandRank;
use super::strength::Strength;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Suit;
use itertools::Itertools;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Read-only rank and category data for five-card hands.
///
/// This is the seam between hand scoring and whatever precomputed structure
/// backs it. [`LookupTable`] is the implementation used everywhere in this
/// crate, but [`best_rank`](super::best::best_rank) and the showdown code only
/// ever see the trait.
pub trait RankTable {
    /// Rank of exactly five distinct cards. Duplicate cards are a caller
    /// defect and produce an unspecified rank.
    fn rank_of_five(&self, cards: &[Card; 5]) -> HandRank;
    fn category_of(&self, rank: HandRank) -> Category;
    /// Category names, weakest first.
    fn category_names(&self) -> &'static [&'static str] {
        Category::labels()
    }
}

static TABLE: LazyLock<LookupTable> = LazyLock::new(LookupTable::build);

/// Cactus-Kev-style perfect lookup for five-card hands.
///
/// Flushes are keyed by their 13-bit rank mask; every other hand by its rank
/// multiplicities (one nibble per rank). Both tables are filled once by
/// enumerating the 7462 distinct hand values, scoring a representative of
/// each with the [`Evaluator`](super::evaluator::Evaluator), and numbering
/// them strongest first.
#[derive(Debug, Clone)]
pub struct LookupTable {
    flushes: Vec<u16>,
    others: HashMap<u64, u16>,
    categories: Vec<Category>,
}

impl LookupTable {
    /// The process-wide table, built on first use.
    pub fn global() -> &'static Self {
        &TABLE
    }

    pub fn build() -> Self {
        let start = std::time::Instant::now();
        let mut classes = Self::classes();
        classes.sort_by(|(a, _), (b, _)| b.cmp(a));
        let mut table = Self {
            flushes: vec![0; 1 << 13],
            others: HashMap::with_capacity(classes.len()),
            categories: Vec::with_capacity(classes.len()),
        };
        for (i, (strength, key)) in classes.into_iter().enumerate() {
            let rank = i as u16 + 1;
            match key {
                Key::Flush(mask) => table.flushes[mask as usize] = rank,
                Key::Other(counts) => {
                    table.others.insert(counts, rank);
                }
            }
            table.categories.push(Category::from(strength.ranking()));
        }
        debug_assert!(table.categories.len() == HandRank::COUNT);
        log::debug!("{:<32}{:?}", "built rank lookup table", start.elapsed());
        table
    }

    /// One representative per distinct five-card hand value.
    ///
    /// Rank multisets come from the 6175 multisets of five ranks with no rank
    /// repeated five times. Suits are assigned by occurrence, so paired
    /// multisets can never be flushes; unpaired ones appear twice, once offsuit
    /// and once suited.
    fn classes() -> Vec<(Strength, Key)> {
        Rank::all()
            .into_iter()
            .combinations_with_replacement(5)
            .filter(|ranks| ranks[0] != ranks[4])
            .flat_map(|ranks| {
                let paired = ranks.windows(2).any(|w| w[0] == w[1]);
                let offsuit = ranks
                    .iter()
                    .enumerate()
                    .map(|(i, r)| {
                        let seen = ranks[..i].iter().filter(|x| *x == r).count() as u8;
                        let suit = if paired { seen } else { u8::from(i == 0) };
                        Card::from((*r, Suit::from(suit)))
                    })
                    .collect::<Vec<Card>>();
                let suited = ranks
                    .iter()
                    .map(|r| Card::from((*r, Suit::Club)))
                    .collect::<Vec<Card>>();
                let mut reps = vec![(offsuit, Key::Other(Self::counts(&ranks)))];
                if !paired {
                    reps.push((suited, Key::Flush(Self::bits(&ranks))));
                }
                reps
            })
            .map(|(cards, key)| (Strength::from(Hand::from(cards.as_slice())), key))
            .collect()
    }

    /// one nibble per rank holding its multiplicity
    fn counts(ranks: &[Rank]) -> u64 {
        ranks.iter().map(|r| 1u64 << (u8::from(*r) * 4)).sum()
    }
    /// 13-bit rank mask
    fn bits(ranks: &[Rank]) -> u16 {
        ranks.iter().map(|r| u16::from(*r)).fold(0, |a, b| a | b)
    }
}

impl RankTable for LookupTable {
    fn rank_of_five(&self, cards: &[Card; 5]) -> HandRank {
        debug_assert!(Hand::from(cards.as_slice()).size() == 5);
        let ranks = cards.map(|c| c.rank());
        let suited = cards.iter().all(|c| c.suit() == cards[0].suit());
        let rank = match suited {
            true => self.flushes[Self::bits(&ranks) as usize],
            false => self.others.get(&Self::counts(&ranks)).copied().unwrap_or(0),
        };
        HandRank::try_from(rank).unwrap_or(HandRank::WORST)
    }
    /// `categories[i]` holds the category of rank `i + 1`.
    fn category_of(&self, rank: HandRank) -> Category {
        self.categories[usize::from(rank) - 1]
    }
}

#[derive(Debug, Clone, Copy)]
enum Key {
    Flush(u16),
    Other(u64),
}
