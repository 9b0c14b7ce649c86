//! Persisted preference flags.
//!
//! One key-value pair per flag, stored as the literal strings `"true"` /
//! `"false"`. Reads never fail: anything other than the exact string
//! `"true"` — a missing key, a malformed value, an unavailable backend —
//! reads as `false`, and writes that cannot be persisted are dropped.

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key for the dark-mode flag, shared by every page of the origin.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Boolean preference storage.
pub trait PrefStore {
    fn read(&self, key: &str) -> bool;
    fn write(&self, key: &str, value: bool);
}

impl<S: PrefStore + ?Sized> PrefStore for &S {
    fn read(&self, key: &str) -> bool {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: bool) {
        (**self).write(key, value);
    }
}

/// In-memory store, used in tests and when browser storage is disabled.
#[derive(Default)]
pub struct MemoryPrefs {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw stored string, for asserting the persisted layout.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Seed a raw value, bypassing `write`. Simulates a pre-existing entry.
    pub fn seed(&self, key: &str, raw: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), raw.to_owned());
    }
}

impl PrefStore for MemoryPrefs {
    fn read(&self, key: &str) -> bool {
        self.values.borrow().get(key).map(String::as_str) == Some("true")
    }

    fn write(&self, key: &str, value: bool) {
        let raw = if value { "true" } else { "false" };
        self.values.borrow_mut().insert(key.to_owned(), raw.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_both_values() {
        let store = MemoryPrefs::new();
        store.write(DARK_MODE_KEY, true);
        assert!(store.read(DARK_MODE_KEY));
        store.write(DARK_MODE_KEY, false);
        assert!(!store.read(DARK_MODE_KEY));
    }

    #[test]
    fn absent_key_reads_false() {
        let store = MemoryPrefs::new();
        assert!(!store.read(DARK_MODE_KEY));
    }

    #[test]
    fn only_the_literal_true_counts() {
        let store = MemoryPrefs::new();
        for raw in ["TRUE", "True", "1", "yes", "", " true"] {
            store.seed(DARK_MODE_KEY, raw);
            assert!(!store.read(DARK_MODE_KEY), "{raw:?} must read as false");
        }
        store.seed(DARK_MODE_KEY, "true");
        assert!(store.read(DARK_MODE_KEY));
    }

    #[test]
    fn persisted_layout_is_the_literal_string() {
        let store = MemoryPrefs::new();
        store.write(DARK_MODE_KEY, true);
        assert_eq!(store.raw(DARK_MODE_KEY).as_deref(), Some("true"));
        store.write(DARK_MODE_KEY, false);
        assert_eq!(store.raw(DARK_MODE_KEY).as_deref(), Some("false"));
    }
}
