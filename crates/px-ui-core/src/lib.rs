//! DOM-free state core for the Proximy web client.
//!
//! Each page of the site owns a [`theme::ThemeToggle`] and, where it has
//! mutually exclusive panes, a [`tabs::TabSet`]; the browser layer projects
//! the values these return into class lists and inline styles. Nothing here
//! touches `web-sys`, so every state transition is testable natively.

pub mod prefs;
pub mod tabs;
pub mod theme;
pub mod validate;

pub use prefs::{DARK_MODE_KEY, MemoryPrefs, PrefStore};
pub use tabs::{Activation, AuxChange, AuxRule, AuxVisibility, Flags, TabSet};
pub use theme::{ThemeToggle, ThemeVisual};
