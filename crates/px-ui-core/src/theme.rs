//! Dark-mode toggle state.
//!
//! The flag lives here, not in the DOM: the persisted value is read once at
//! construction, before any interaction is possible, and every flip writes
//! the store exactly once. [`ThemeVisual`] is a pure projection of the flag,
//! so applying it twice is indistinguishable from applying it once.

use crate::prefs::{DARK_MODE_KEY, PrefStore};
use serde::Serialize;

/// Marker class on the page root while dark mode is on.
pub const ROOT_CLASS: &str = "dark-mode";
/// Switch track color while on.
pub const SWITCH_ON_BACKGROUND: &str = "#F59D00";
/// Track color while off, resolved against the page palette.
pub const SWITCH_OFF_BACKGROUND: &str = "var(--color-border)";
pub const THUMB_ON_TRANSFORM: &str = "translateX(20px)";
pub const THUMB_OFF_TRANSFORM: &str = "translateX(0)";

/// What the toggle control should look like for a given flag value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeVisual {
    pub dark: bool,
    pub thumb_transform: &'static str,
    pub switch_background: &'static str,
}

impl ThemeVisual {
    pub fn of(dark: bool) -> Self {
        if dark {
            Self {
                dark,
                thumb_transform: THUMB_ON_TRANSFORM,
                switch_background: SWITCH_ON_BACKGROUND,
            }
        } else {
            Self {
                dark,
                thumb_transform: THUMB_OFF_TRANSFORM,
                switch_background: SWITCH_OFF_BACKGROUND,
            }
        }
    }
}

pub struct ThemeToggle<S> {
    store: S,
    dark: bool,
}

impl<S: PrefStore> ThemeToggle<S> {
    /// Read the persisted flag. Run this before any listener is wired so the
    /// first paint already matches the stored preference.
    pub fn restore(store: S) -> Self {
        let dark = store.read(DARK_MODE_KEY);
        Self { store, dark }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn visual(&self) -> ThemeVisual {
        ThemeVisual::of(self.dark)
    }

    /// Flip the flag, persist it, and return the new projection.
    pub fn toggle(&mut self) -> ThemeVisual {
        self.dark = !self.dark;
        self.store.write(DARK_MODE_KEY, self.dark);
        ThemeVisual::of(self.dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPrefs;

    #[test]
    fn restores_light_from_an_empty_store() {
        let store = MemoryPrefs::new();
        let theme = ThemeToggle::restore(&store);
        assert!(!theme.is_dark());
        assert_eq!(theme.visual().thumb_transform, THUMB_OFF_TRANSFORM);
    }

    #[test]
    fn projection_is_idempotent() {
        for dark in [false, true] {
            assert_eq!(ThemeVisual::of(dark), ThemeVisual::of(dark));
        }
    }

    #[test]
    fn toggle_persists_and_survives_reload() {
        let store = MemoryPrefs::new();
        assert!(!store.read(DARK_MODE_KEY));

        let mut theme = ThemeToggle::restore(&store);
        let visual = theme.toggle();
        assert!(visual.dark);
        assert_eq!(store.raw(DARK_MODE_KEY).as_deref(), Some("true"));

        // A fresh page load sees the persisted value and lands on the same
        // projection.
        let reloaded = ThemeToggle::restore(&store);
        assert!(reloaded.is_dark());
        assert_eq!(reloaded.visual().thumb_transform, THUMB_ON_TRANSFORM);
        assert_eq!(reloaded.visual().switch_background, SWITCH_ON_BACKGROUND);
    }

    #[test]
    fn toggle_flips_back_to_light() {
        let store = MemoryPrefs::new();
        store.seed(DARK_MODE_KEY, "true");

        let mut theme = ThemeToggle::restore(&store);
        assert!(theme.is_dark());

        let visual = theme.toggle();
        assert!(!visual.dark);
        assert_eq!(visual.thumb_transform, THUMB_OFF_TRANSFORM);
        assert_eq!(visual.switch_background, SWITCH_OFF_BACKGROUND);
        assert_eq!(store.raw(DARK_MODE_KEY).as_deref(), Some("false"));
    }
}
