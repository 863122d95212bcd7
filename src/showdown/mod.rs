pub mod cashier;
pub use cashier::*;

pub mod holdem;
pub use holdem::*;

pub mod outcome;
pub use outcome::*;
