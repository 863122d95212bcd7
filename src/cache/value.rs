use crate::Probability;
use crate::Utility;
use crate::evaluation::Category;

/// A simulated all-in equity and what it was made of.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct CachedValue {
    pub value: Utility,
    pub stdev: Utility,
    /// how often each [`Category`] was made, in [`Category::all`] order
    pub categories: Vec<Probability>,
}

impl CachedValue {
    pub fn new(value: Utility, stdev: Utility, categories: Vec<Probability>) -> Self {
        Self {
            value,
            stdev,
            categories,
        }
    }
    pub fn probability(&self, category: Category) -> Probability {
        self.categories
            .get(usize::from(category))
            .copied()
            .unwrap_or_default()
    }
    /// Values aligned with [`Category::value_keys`]: equity first.
    pub fn values(&self) -> Vec<Utility> {
        std::iter::once(self.value)
            .chain(self.categories.iter().copied())
            .collect()
    }
}

impl std::fmt::Display for CachedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<16}{:.4} ± {:.4}", "best_value", self.value, self.stdev)?;
        for category in Category::all() {
            let p = self.probability(category);
            if p > 0. {
                writeln!(f, "{:<16}{:.4}", category.label(), p)?;
            }
        }
        Ok(())
    }
}
