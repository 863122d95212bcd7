pub mod best;
pub use best::*;

pub mod category;
pub use category::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand_rank;
pub use hand_rank::*;

pub mod kicks;
pub use kicks::*;

pub mod lookup;
pub use lookup::*;

pub mod ranking;
pub use ranking::*;

pub mod strength;
pub use strength::*;

pub mod subsets;
