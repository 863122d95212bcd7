use crate::cards::Card;
use crate::cards::CommunityHand;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Round;
use crate::error::HoldemError;
use crate::evaluation::Category;
use crate::evaluation::HandRank;
use crate::evaluation::LookupTable;
use crate::evaluation::RankTable;
use crate::evaluation::best_rank;
use std::cell::RefCell;

/// What we learned the last time the hand was evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Score {
    rank: HandRank,
    category: Category,
    name: &'static str,
    /// board at evaluation time
    seen: Hand,
}

/// A player's hold'em hand: two hole cards read against a shared board.
///
/// Several hands look at the same [`CommunityHand`] without owning it. The
/// board lives in a `RefCell` owned by whoever runs the hand, which keeps
/// dealing it while the hands hold on to their reference.
///
/// Scoring is lazy. Until [`HoldemHand::evaluate`] runs there is no rank, and
/// once the board moves on the stored score is stale until it runs again.
#[derive(Debug, Clone, Default)]
pub struct HoldemHand<'a> {
    hole: Option<Hole>,
    community: Option<&'a RefCell<CommunityHand>>,
    score: Option<Score>,
}

impl<'a> HoldemHand<'a> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_community(community: &'a RefCell<CommunityHand>) -> Self {
        Self {
            community: Some(community),
            ..Self::default()
        }
    }
    pub fn attach(&mut self, community: &'a RefCell<CommunityHand>) {
        self.community = Some(community);
    }

    /// Takes the hole cards. A hand is dealt exactly once.
    pub fn deal(&mut self, cards: &[Card]) -> Result<(), HoldemError> {
        if self.hole.is_some() {
            return Err(HoldemError::AlreadyDealt);
        }
        self.hole = Some(Hole::try_from(cards)?);
        Ok(())
    }

    pub fn evaluate(&mut self) {
        self.evaluate_with(LookupTable::global())
    }
    /// Scores the hand against the board as it stands now.
    ///
    /// Without hole cards, without a board, or before the flop there is
    /// nothing to score and any previous score is left untouched.
    pub fn evaluate_with<T: RankTable + ?Sized>(&mut self, table: &T) {
        let Some(hole) = self.hole else { return };
        let Some(community) = self.community else { return };
        let board = community.borrow();
        if board.round() == Round::Preflop {
            return;
        }
        let shared = board.cards();
        if let Some(rank) = best_rank(table, &hole, &shared) {
            let category = table.category_of(rank);
            self.score = Some(Score {
                rank,
                category,
                name: table
                    .category_names()
                    .get(usize::from(category))
                    .copied()
                    .unwrap_or("none"),
                seen: board.hand(),
            });
        }
    }

    pub fn hole(&self) -> Option<Hole> {
        self.hole
    }
    pub fn rank(&self) -> Option<HandRank> {
        self.score.map(|s| s.rank)
    }
    pub fn category(&self) -> Option<Category> {
        self.score.map(|s| s.category)
    }
    pub fn category_name(&self) -> &'static str {
        self.score.map(|s| s.name).unwrap_or("none")
    }
    /// Whether the board holds different cards than at the last evaluation.
    pub fn is_stale(&self) -> bool {
        match (self.score, self.community) {
            (Some(score), Some(community)) => community.borrow().hand() != score.seen,
            (None, _) => true,
            (Some(_), None) => false,
        }
    }
}

impl std::fmt::Display for HoldemHand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let hole = self.hole.map(|h| h.to_string()).unwrap_or_else(|| "[]".into());
        let board = self
            .community
            .map(|c| c.borrow().to_string())
            .unwrap_or_else(|| "none".into());
        let rank = self
            .rank()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "none".into());
        write!(
            f,
            "Holdem hand: {} Community {} (rank: {}, category: {})",
            hole,
            board,
            rank,
            self.category_name()
        )
    }
}
