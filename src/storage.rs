use lib_2048::{Error, KeyValueStore, MemoryStore, Result};
use log::warn;
use web_sys::Storage;

use crate::describe;

/// `window.localStorage`, or process memory when the browser refuses it
/// (private windows, disabled storage).
pub enum PageStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl PageStore {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .ok_or_else(|| "no window".to_string())
            .and_then(|window| window.local_storage().map_err(|err| describe(&err)))
            .and_then(|storage| storage.ok_or_else(|| "localStorage unavailable".to_string()));

        match storage {
            Ok(storage) => Self::Local(storage),
            Err(reason) => {
                warn!("high score will not persist: {reason}");
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for PageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::Local(storage) => storage
                .get_item(key)
                .map_err(|err| Error::Storage(describe(&err))),
            Self::Memory(memory) => memory.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|err| Error::Storage(describe(&err))),
            Self::Memory(memory) => memory.set(key, value),
        }
    }
}
