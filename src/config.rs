use std::str::FromStr;

/// Runtime knobs for a session.
///
/// Defaults come from the crate constants. [`Config::from_env`] lets
/// `HOLDEM_CACHE_MAX`, `HOLDEM_SAMPLES` and `HOLDEM_SEED` override them;
/// a value that does not parse is reported and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// entries the equity cache may hold before it is cleared
    pub cache_max: usize,
    /// Monte Carlo runouts per equity estimate
    pub samples: usize,
    /// fixed deck seed, or OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_max: crate::VALUES_CACHE_MAX,
            samples: crate::EQUITY_SAMPLES,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        Self {
            cache_max: parse(&var, "HOLDEM_CACHE_MAX").unwrap_or(default.cache_max),
            samples: parse(&var, "HOLDEM_SAMPLES").unwrap_or(default.samples),
            seed: parse(&var, "HOLDEM_SEED").or(default.seed),
        }
    }

    pub fn deck(&self) -> crate::cards::Deck {
        match self.seed {
            Some(seed) => crate::cards::Deck::seeded(seed),
            None => crate::cards::Deck::new(),
        }
    }
}

fn parse<F, T>(var: &F, name: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = var(name)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {}={:?}, not a number", name, raw);
            None
        }
    }
}
