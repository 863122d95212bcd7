use super::hand_rank::HandRank;
use super::lookup::LookupTable;
use super::lookup::RankTable;
use super::subsets;
use crate::cards::Card;
use crate::cards::Hole;

/// Best five-card rank reachable from two hole cards and the shared board.
///
/// Fewer than five or more than seven cards in total is not a hand we can
/// score and yields `None`. Six and seven cards take the minimum over every
/// five-card subset.
pub fn best_rank<T>(table: &T, hole: &Hole, shared: &[Card]) -> Option<HandRank>
where
    T: RankTable + ?Sized,
{
    let cards = hole
        .cards()
        .iter()
        .chain(shared.iter())
        .copied()
        .collect::<Vec<Card>>();
    subsets::exclusions(cards.len())
        .iter()
        .map(|excluded| subsets::induce(&cards, excluded))
        .map(|five| table.rank_of_five(&five))
        .min()
}

/// [`best_rank`] against the process-wide [`LookupTable`].
pub fn rank(hole: &Hole, shared: &[Card]) -> Option<HandRank> {
    best_rank(LookupTable::global(), hole, shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Dealer;
    use crate::cards::Deck;
    use crate::cards::Hand;
    use crate::evaluation::Category;
    use crate::evaluation::Strength;
    use itertools::Itertools;

    fn hole(s: &str) -> Hole {
        Hole::try_from(s).unwrap()
    }
    fn board(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }

    #[test]
    fn too_few_or_too_many() {
        assert_eq!(rank(&hole("As,Ad"), &[]), None);
        assert_eq!(rank(&hole("As,Ad"), &board("Kd,Qd")), None);
        assert_eq!(rank(&hole("As,Ad"), &board("Kd,Qd,Jd,Tc,2h,3h")), None);
    }

    #[test]
    fn flop_is_a_single_lookup() {
        let table = LookupTable::global();
        let hole = hole("As,Ad");
        let flop = board("Kd,Qd,Jd");
        let five = [hole.cards()[0], hole.cards()[1], flop[0], flop[1], flop[2]];
        assert_eq!(rank(&hole, &flop), Some(table.rank_of_five(&five)));
    }

    #[test]
    fn river_is_the_minimum_over_all_subsets() {
        let table = LookupTable::global();
        for seed in 0..200 {
            let mut deck = Deck::seeded(seed);
            let hole = deck.hole().unwrap();
            let shared = deck.deal(5).unwrap();
            let brute = hole
                .cards()
                .iter()
                .chain(shared.iter())
                .copied()
                .combinations(5)
                .map(|five| table.rank_of_five(&[five[0], five[1], five[2], five[3], five[4]]))
                .min();
            assert_eq!(rank(&hole, &shared), brute);
        }
    }

    #[test]
    fn agrees_with_seven_card_evaluator() {
        for seed in 0..500 {
            let mut deck = Deck::seeded(seed);
            let a = deck.hole().unwrap();
            let b = deck.hole().unwrap();
            let shared = deck.deal(5).unwrap();
            let strength = |h: Hole| Strength::from(Hand::add(Hand::from(h), Hand::from(shared.as_slice())));
            let by_rank = rank(&b, &shared).cmp(&rank(&a, &shared));
            let by_strength = strength(a).cmp(&strength(b));
            assert_eq!(by_rank, by_strength, "{} {} {}", a, b, Card::join(&shared));
        }
    }

    #[test]
    fn broadway_beats_pocket_threes() {
        let shared = board("Kd,Qd,Jd,Tc,2h");
        let straight = rank(&hole("As,Ad"), &shared).unwrap();
        let threes = rank(&hole("3c,3s"), &shared).unwrap();
        assert!(straight.beats(&threes));
        let table = LookupTable::global();
        assert_eq!(table.category_of(straight), Category::Straight);
        assert_eq!(table.category_of(threes), Category::OnePair);
    }

    #[test]
    fn six_cards() {
        let shared = board("Kd,Qd,Jd,9d");
        let flush = rank(&hole("2d,3c"), &shared).unwrap();
        assert_eq!(LookupTable::global().category_of(flush), Category::Flush);
    }
}
