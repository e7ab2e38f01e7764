use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::mirror::state::{MediaKind, MediaRef};

pub const HISTORY_KEY: &str = "imperioHistory";
pub const HISTORY_LIMIT: usize = 5;

/// One past transformation, shown to returning visitors. Created only after
/// a lead-gated reveal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub original: MediaRef,
    pub generated: MediaRef,
    pub kind: MediaKind,
}

impl HistoryEntry {
    pub fn new(original: MediaRef, generated: MediaRef) -> Self {
        let kind = generated.kind;
        Self { original, generated, kind }
    }
}

/// Where the serialized history lives. The real backend is `localStorage`;
/// tests use an in-memory map.
pub trait HistoryBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
}

impl<B: HistoryBackend> HistoryBackend for std::rc::Rc<B> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).write(key, value)
    }
}

/// `localStorage`-backed persistence. Every operation is best-effort: a
/// missing window or storage object behaves like an empty store.
pub struct LocalStorageBackend;

impl HistoryBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| "localStorage indisponível".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|_| "falha ao gravar no localStorage".to_string())
    }
}

/// Rolling list of the last [`HISTORY_LIMIT`] successful transformations,
/// newest first. Persistence problems are logged and swallowed; history is
/// never on the critical path.
pub struct HistoryStore<B: HistoryBackend> {
    backend: B,
    entries: Vec<HistoryEntry>,
}

impl<B: HistoryBackend> HistoryStore<B> {
    /// Reads the persisted list. Absent or corrupt data yields an empty
    /// history; corruption is discarded, not surfaced.
    pub fn load(backend: B) -> Self {
        let entries = match backend.read(HISTORY_KEY) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(mut list) => {
                    list.truncate(HISTORY_LIMIT);
                    list
                }
                Err(e) => {
                    warn!("histórico persistido ilegível, descartando: {}", e);
                    Vec::new()
                }
            },
        };
        Self { backend, entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepends, truncates to the cap, persists.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
        match serde_json::to_string(&self.entries) {
            Ok(serialized) => {
                if let Err(e) = self.backend.write(HISTORY_KEY, &serialized) {
                    error!("falha ao persistir o histórico: {}", e);
                }
            }
            Err(e) => error!("falha ao serializar o histórico: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryBackend {
        slots: RefCell<HashMap<String, String>>,
    }

    impl HistoryBackend for MemoryBackend {
        fn read(&self, key: &str) -> Option<String> {
            self.slots.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) -> Result<(), String> {
            self.slots.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenBackend;

    impl HistoryBackend for BrokenBackend {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("storage cheio".to_string())
        }
    }

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry::new(
            MediaRef::image(format!("data:image/png;base64,before{}", n)),
            MediaRef::image(format!("data:image/png;base64,after{}", n)),
        )
    }

    #[test]
    fn load_tolerates_absent_data() {
        let store = HistoryStore::load(MemoryBackend::default());
        assert!(store.is_empty());
    }

    #[test]
    fn load_discards_corrupt_data() {
        let backend = MemoryBackend::default();
        backend.write(HISTORY_KEY, "{not json at all").unwrap();
        let store = HistoryStore::load(backend);
        assert!(store.is_empty());
    }

    #[test]
    fn append_caps_at_five_newest_first() {
        let mut store = HistoryStore::load(MemoryBackend::default());
        for n in 1..=6 {
            store.append(entry(n));
        }
        assert_eq!(store.entries().len(), HISTORY_LIMIT);
        // Newest first: 6..2 survive, 1 was evicted.
        assert_eq!(store.entries()[0], entry(6));
        assert_eq!(store.entries()[4], entry(2));
        assert!(!store.entries().contains(&entry(1)));
    }

    #[test]
    fn append_round_trips_through_backend() {
        let backend = std::rc::Rc::new(MemoryBackend::default());
        let mut store = HistoryStore::load(backend.clone());
        store.append(entry(1));
        drop(store);
        let reloaded = HistoryStore::load(backend);
        assert_eq!(reloaded.entries(), &[entry(1)]);
    }

    #[test]
    fn persistence_failure_keeps_in_memory_entries() {
        let mut store = HistoryStore::load(BrokenBackend);
        store.append(entry(1));
        assert_eq!(store.entries().len(), 1);
    }
}
