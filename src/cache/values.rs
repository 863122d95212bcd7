use super::value::CachedValue;
use crate::cards::Card;
use std::collections::HashMap;

/// Memo of simulated equities, keyed by the literal cards of a matchup.
///
/// Keys are built from the cards in the order given, so `[As,Kd]` and
/// `[Kd,As]` are different entries. The cache is bounded only loosely:
/// callers check [`ValuesCache::clear_cache_if_full`] between hands and the
/// whole map is dropped once it outgrows `cache_max`.
#[derive(Debug, Clone)]
pub struct ValuesCache {
    cache_max: usize,
    values: HashMap<String, CachedValue>,
}

impl Default for ValuesCache {
    fn default() -> Self {
        Self::new(crate::VALUES_CACHE_MAX)
    }
}

impl ValuesCache {
    pub fn new(cache_max: usize) -> Self {
        Self {
            cache_max,
            values: HashMap::new(),
        }
    }

    /// `[our]/[oppn]:[flop]/[turn]/[river]`
    pub fn key(our: &[Card], oppn: &[Card], flop: &[Card], turn: &[Card], river: &[Card]) -> String {
        format!(
            "{}/{}:{}/{}/{}",
            Card::join(our),
            Card::join(oppn),
            Card::join(flop),
            Card::join(turn),
            Card::join(river)
        )
    }

    /// Stores a value, replacing whatever was there.
    pub fn insert(
        &mut self,
        our: &[Card],
        oppn: &[Card],
        flop: &[Card],
        turn: &[Card],
        river: &[Card],
        value: CachedValue,
    ) {
        let key = Self::key(our, oppn, flop, turn, river);
        self.values.insert(key, value);
    }

    pub fn lookup(
        &self,
        our: &[Card],
        oppn: &[Card],
        flop: &[Card],
        turn: &[Card],
        river: &[Card],
    ) -> Option<&CachedValue> {
        let key = Self::key(our, oppn, flop, turn, river);
        let hit = self.values.get(&key);
        if hit.is_some() {
            log::trace!("{:<32}{}", "cache hit", key);
        }
        hit
    }

    /// Drops every entry once there are more than `cache_max` of them.
    pub fn clear_cache_if_full(&mut self) -> bool {
        if self.values.len() > self.cache_max {
            log::info!("{:<32}{}", "clearing values cache", self.values.len());
            self.values.clear();
            true
        } else {
            false
        }
    }

    pub fn cache_max(&self) -> usize {
        self.cache_max
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
