pub mod card;
pub use card::*;

pub mod community;
pub use community::*;

pub mod dealer;
pub use dealer::*;

pub mod deck;
pub use deck::*;

pub mod hand;
pub use hand::*;

pub mod hole;
pub use hole::*;

pub mod rank;
pub use rank::*;

pub mod round;
pub use round::*;

pub mod suit;
pub use suit::*;
