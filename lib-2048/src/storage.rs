//! Best-score persistence over a string key-value store.

use std::collections::HashMap;

use log::{debug, warn};

use crate::error::Result;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The best score seen, stored as a JSON number under a single key.
#[derive(Debug)]
pub struct HighScore<S> {
    store: S,
    key: String,
    best: u32,
}

impl<S> HighScore<S>
where
    S: KeyValueStore,
{
    /// Reads the stored value. A missing key counts as 0; so does an
    /// unreadable or malformed one, after a warning.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();

        let best = match store.get(&key) {
            Ok(Some(raw)) => serde_json::from_str::<u32>(&raw).unwrap_or_else(|err| {
                warn!("ignoring stored high score {raw:?} under {key:?}: {err}");
                0
            }),
            Ok(None) => 0,
            Err(err) => {
                warn!("could not read high score under {key:?}: {err}");
                0
            }
        };

        debug!("loaded high score {best}");

        Self { store, key, best }
    }

    pub const fn best(&self) -> u32 {
        self.best
    }

    /// Records `score`, persisting it if it beats the best so far. Returns
    /// whether it did.
    pub fn observe(&mut self, score: u32) -> Result<bool> {
        if score <= self.best {
            return Ok(false);
        }

        let raw = serde_json::to_string(&score)?;
        self.store.set(&self.key, &raw)?;
        self.best = score;

        Ok(true)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "2048-high-score";

    #[test]
    fn missing_key_starts_at_zero() {
        let high = HighScore::load(MemoryStore::new(), KEY);

        assert_eq!(high.best(), 0);
    }

    #[test]
    fn better_score_is_written_as_json() {
        let mut store = MemoryStore::new();
        store.set(KEY, "100").unwrap();

        let mut high = HighScore::load(store, KEY);
        assert_eq!(high.best(), 100);

        assert!(high.observe(150).unwrap());
        assert_eq!(high.best(), 150);
        assert_eq!(high.store().get(KEY).unwrap().as_deref(), Some("150"));
    }

    #[test]
    fn lower_or_equal_score_is_not_written() {
        let mut store = MemoryStore::new();
        store.set(KEY, "100").unwrap();

        let mut high = HighScore::load(store, KEY);

        assert!(!high.observe(100).unwrap());
        assert!(!high.observe(20).unwrap());
        assert_eq!(high.store().get(KEY).unwrap().as_deref(), Some("100"));
    }

    #[test]
    fn garbage_counts_as_zero() {
        let mut store = MemoryStore::new();
        store.set(KEY, "\"lots\"").unwrap();

        let mut high = HighScore::load(store, KEY);

        assert_eq!(high.best(), 0);
        assert!(high.observe(4).unwrap());
        assert_eq!(high.store().get(KEY).unwrap().as_deref(), Some("4"));
    }
}
