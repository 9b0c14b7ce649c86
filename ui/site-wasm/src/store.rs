//! Browser-backed preference store.

use px_ui_core::PrefStore;
use web_sys::Storage;

fn storage() -> Option<Storage> {
    crate::dom::window().local_storage().ok()?
}

/// `localStorage`-backed [`PrefStore`]. Reads degrade to `false` and writes
/// are dropped when storage is unavailable, so the session-local state keeps
/// working without persistence.
#[derive(Clone, Copy, Default)]
pub struct LocalPrefs;

impl PrefStore for LocalPrefs {
    fn read(&self, key: &str) -> bool {
        let value = storage().and_then(|s| s.get_item(key).ok().flatten());
        value.as_deref() == Some("true")
    }

    fn write(&self, key: &str, value: bool) {
        if let Some(s) = storage() {
            let _ = s.set_item(key, if value { "true" } else { "false" });
        }
    }
}
