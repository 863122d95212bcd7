//! Texas Hold'em hand ranking, community board, and equity memoization.
//!
//! Cards are dealt onto a [`cards::CommunityHand`] one street at a time,
//! hands are scored with a 7462-class lookup table, and simulated all-in
//! equities are memoized in a [`cache::ValuesCache`].
pub mod cache;
pub mod cards;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod showdown;
pub mod simulation;

/// Expected values and pot shares.
pub type Utility = f32;
/// Frequencies and sampling weights.
pub type Probability = f32;

/// Entries the equity cache holds before it is cleared between hands.
pub const VALUES_CACHE_MAX: usize = 1000;
/// Monte Carlo runouts per equity estimate.
pub const EQUITY_SAMPLES: usize = 1000;

/// Random instance generation for tests and sampling.
pub trait Arbitrary {
    fn random() -> Self;
}

/// Terminal logger for the binary.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
