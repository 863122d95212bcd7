use super::holdem::HoldemHand;
use super::outcome::Showdown;
use crate::error::HoldemError;
use crate::evaluation::LookupTable;
use crate::evaluation::RankTable;

/// Compares hands at showdown.
///
/// Every hand is evaluated against its board first, so stale scores never
/// decide a pot. The lowest rank wins; if it is shared the outcome is
/// [`Showdown::Unresolved`] whatever order the hands came in.
pub struct Cashier;

impl Cashier {
    pub fn showdown(hands: &mut [HoldemHand]) -> Result<Showdown, HoldemError> {
        Self::showdown_with(LookupTable::global(), hands)
    }

    pub fn showdown_with<T>(table: &T, hands: &mut [HoldemHand]) -> Result<Showdown, HoldemError>
    where
        T: RankTable + ?Sized,
    {
        if hands.is_empty() {
            return Err(HoldemError::EmptyShowdown);
        }
        let ranks = hands
            .iter_mut()
            .enumerate()
            .map(|(i, hand)| {
                hand.evaluate_with(table);
                match hand.is_stale() {
                    true => Err(HoldemError::Unscored(i)),
                    false => hand.rank().ok_or(HoldemError::Unscored(i)),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        let best = ranks.iter().min().copied().ok_or(HoldemError::EmptyShowdown)?;
        let tied = ranks
            .iter()
            .enumerate()
            .filter(|(_, rank)| **rank == best)
            .map(|(i, _)| i)
            .collect::<Vec<usize>>();
        let outcome = match tied.as_slice() {
            [winner] => Showdown::Winner(*winner),
            _ => Showdown::Unresolved { tied },
        };
        log::trace!("{:<32}{}", format!("showdown at rank {}", best), outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::cards::CommunityHand;
    use crate::cards::Deck;
    use crate::cards::Round;
    use std::cell::RefCell;

    fn river(s: &str) -> RefCell<CommunityHand> {
        let cards = Card::parse(s).unwrap();
        RefCell::new(
            CommunityHand::try_from_streets(cards[..3].to_vec(), cards[3..4].to_vec(), cards[4..].to_vec())
                .unwrap(),
        )
    }

    fn seat<'a>(community: &'a RefCell<CommunityHand>, holes: &[&str]) -> Vec<HoldemHand<'a>> {
        holes
            .iter()
            .map(|hole| {
                let mut hand = HoldemHand::with_community(community);
                hand.deal(&Card::parse(hole).unwrap()).unwrap();
                hand
            })
            .collect()
    }

    #[test]
    fn straight_beats_pocket_pair() {
        let community = river("Kd,Qd,Jd,Tc,2h");
        let mut hands = seat(&community, &["As,Ad", "3c,3s"]);
        assert_eq!(Cashier::showdown(&mut hands), Ok(Showdown::Winner(0)));
        let mut hands = seat(&community, &["3c,3s", "As,Ad"]);
        assert_eq!(Cashier::showdown(&mut hands), Ok(Showdown::Winner(1)));
    }

    #[test]
    fn playing_the_board_is_a_tie() {
        let community = river("Ad,Kd,Qd,Jd,Td");
        let mut hands = seat(&community, &["2c,3c", "4h,5h"]);
        assert_eq!(
            Cashier::showdown(&mut hands),
            Ok(Showdown::Unresolved { tied: vec![0, 1] })
        );
    }

    #[test]
    fn a_later_better_hand_still_wins_after_a_tie() {
        let community = river("Kd,Qd,Jd,7c,2h");
        let mut hands = seat(&community, &["3c,4c", "3h,4h", "As,Ts"]);
        assert_eq!(Cashier::showdown(&mut hands), Ok(Showdown::Winner(2)));
    }

    #[test]
    fn ties_list_only_the_best() {
        let community = river("Kd,Qd,Jd,7c,2h");
        let mut hands = seat(&community, &["As,Ts", "3c,4c", "Ah,Th"]);
        assert_eq!(
            Cashier::showdown(&mut hands),
            Ok(Showdown::Unresolved { tied: vec![0, 2] })
        );
    }

    #[test]
    fn nothing_to_compare() {
        assert_eq!(Cashier::showdown(&mut []), Err(HoldemError::EmptyShowdown));
        let community = RefCell::new(CommunityHand::new());
        let mut hands = seat(&community, &["As,Ad", "3c,3s"]);
        assert_eq!(Cashier::showdown(&mut hands), Err(HoldemError::Unscored(0)));
    }

    #[test]
    fn rewound_board_cannot_decide_a_pot() {
        let community = RefCell::new(CommunityHand::new());
        let mut deck = Deck::seeded(11);
        deck.remove(&Card::parse("As,Ad,3c,3s").unwrap());
        let mut hands = seat(&community, &["As,Ad", "3c,3s"]);
        community.borrow_mut().deal(&mut deck, true).unwrap();
        assert!(Cashier::showdown(&mut hands).is_ok());
        community.borrow_mut().rewind(&mut deck, Round::Preflop).unwrap();
        assert_eq!(Cashier::showdown(&mut hands), Err(HoldemError::Unscored(0)));
        assert!(hands[0].rank().is_some());
    }
}
