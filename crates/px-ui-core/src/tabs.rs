//! Mutually exclusive option/tab switching.
//!
//! The active key is the state; class toggling in the DOM is a projection of
//! the [`Activation`] returned by [`TabSet::activate`]. Panels outside the
//! tab set (history card, results placeholder, results section) are driven
//! by a declarative visibility table instead of per-handler conditionals, so
//! the coupling is visible in one place and testable without a DOM.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Visibility rule for one auxiliary panel, evaluated against the key being
/// activated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AuxVisibility {
    /// Visible only while one of these keys is active.
    ForKeys(Vec<String>),
    /// Hidden while one of these keys is active, visible otherwise.
    ExceptKeys(Vec<String>),
    /// Visible while one of these keys is active *and* the named flag is set
    /// at the moment of activation.
    ForKeysWhenFlag { keys: Vec<String>, flag: String },
}

impl AuxVisibility {
    fn visible(&self, key: &str, flags: &Flags) -> bool {
        match self {
            AuxVisibility::ForKeys(keys) => keys.iter().any(|k| k == key),
            AuxVisibility::ExceptKeys(keys) => !keys.iter().any(|k| k == key),
            AuxVisibility::ForKeysWhenFlag { keys, flag } => {
                keys.iter().any(|k| k == key) && flags.get(flag)
            }
        }
    }
}

/// One auxiliary panel and the rule deciding its visibility. `target` is an
/// identifier the page layer maps to a concrete element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuxRule {
    pub target: String,
    pub visibility: AuxVisibility,
}

impl AuxRule {
    pub fn new(target: &str, visibility: AuxVisibility) -> Self {
        Self {
            target: target.to_owned(),
            visibility,
        }
    }
}

/// Named boolean flags sampled at activation time. Absent flags read false.
#[derive(Clone, Debug, Default)]
pub struct Flags {
    values: HashMap<String, bool>,
}

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: bool) {
        self.values.insert(name.to_owned(), value);
    }

    pub fn get(&self, name: &str) -> bool {
        self.values.get(name).copied().unwrap_or(false)
    }
}

/// Effect of one activation on one auxiliary panel.
#[derive(Clone, Debug, PartialEq)]
pub struct AuxChange {
    pub target: String,
    pub visible: bool,
}

/// Result of activating a key: the single active trigger/pane pair plus the
/// derived auxiliary visibility. The full deactivate/activate cycle runs on
/// every activation, self-transitions included.
#[derive(Clone, Debug, PartialEq)]
pub struct Activation {
    pub key: String,
    pub aux: Vec<AuxChange>,
}

pub struct TabSet {
    keys: Vec<String>,
    active: Option<String>,
    rules: Vec<AuxRule>,
}

impl TabSet {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            active: None,
            rules: Vec::new(),
        }
    }

    pub fn with_rules(mut self, rules: Vec<AuxRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Seed the active key from whichever trigger carries the active marker
    /// in the initial markup. Unknown keys leave the set cold.
    pub fn with_active(mut self, key: &str) -> Self {
        if self.keys.iter().any(|k| k == key) {
            self.active = Some(key.to_owned());
        }
        self
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Activate `key`. Unknown keys are a no-op returning `None`; the caller
    /// may log and must leave the page untouched.
    pub fn activate(&mut self, key: &str, flags: &Flags) -> Option<Activation> {
        if !self.keys.iter().any(|k| k == key) {
            return None;
        }
        self.active = Some(key.to_owned());
        let aux = self
            .rules
            .iter()
            .map(|rule| AuxChange {
                target: rule.target.clone(),
                visible: rule.visibility.visible(key, flags),
            })
            .collect();
        Some(Activation {
            key: key.to_owned(),
            aux,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HISTORY: &str = "history-card";
    const PLACEHOLDER: &str = "results-placeholder";
    const RESULTS: &str = "results-section";
    const KEY_FLAG: &str = "api-key-generated";

    fn dashboard_tabs() -> TabSet {
        let keys = ["bulk", "single-email", "api", "integrations"];
        let rules = vec![
            AuxRule::new(
                HISTORY,
                AuxVisibility::ExceptKeys(vec![
                    "single-email".into(),
                    "api".into(),
                    "integrations".into(),
                ]),
            ),
            AuxRule::new(PLACEHOLDER, AuxVisibility::ForKeys(vec!["single-email".into()])),
            AuxRule::new(
                RESULTS,
                AuxVisibility::ForKeysWhenFlag {
                    keys: vec!["api".into()],
                    flag: KEY_FLAG.into(),
                },
            ),
        ];
        TabSet::new(keys).with_rules(rules).with_active("bulk")
    }

    fn visible(activation: &Activation, target: &str) -> bool {
        activation
            .aux
            .iter()
            .find(|change| change.target == target)
            .map(|change| change.visible)
            .expect("target has a rule")
    }

    #[test]
    fn every_key_activates_exactly_itself() {
        let mut tabs = dashboard_tabs();
        let flags = Flags::new();
        for key in ["bulk", "single-email", "api", "integrations"] {
            let activation = tabs.activate(key, &flags).expect("known key");
            assert_eq!(activation.key, key);
            assert_eq!(tabs.active(), Some(key));
        }
    }

    #[test]
    fn unknown_key_leaves_state_unchanged() {
        let mut tabs = dashboard_tabs();
        let flags = Flags::new();
        assert!(tabs.activate("sms", &flags).is_none());
        assert_eq!(tabs.active(), Some("bulk"));
    }

    #[test]
    fn self_transition_reruns_the_full_cycle() {
        let mut tabs = dashboard_tabs();
        let flags = Flags::new();
        let first = tabs.activate("bulk", &flags).unwrap();
        let second = tabs.activate("bulk", &flags).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn history_card_hides_for_the_three_keys() {
        let mut tabs = dashboard_tabs();
        let flags = Flags::new();
        for key in ["single-email", "api", "integrations"] {
            let activation = tabs.activate(key, &flags).unwrap();
            assert!(!visible(&activation, HISTORY), "{key} must hide history");
        }
        let activation = tabs.activate("bulk", &flags).unwrap();
        assert!(visible(&activation, HISTORY));
    }

    #[test]
    fn results_section_requires_api_and_the_flag() {
        let mut tabs = dashboard_tabs();
        let mut flags = Flags::new();

        let activation = tabs.activate("api", &flags).unwrap();
        assert!(!visible(&activation, RESULTS), "flag unset keeps it hidden");

        flags.set(KEY_FLAG, true);
        let activation = tabs.activate("api", &flags).unwrap();
        assert!(visible(&activation, RESULTS));

        // Any other key hides it regardless of the flag.
        let activation = tabs.activate("bulk", &flags).unwrap();
        assert!(!visible(&activation, RESULTS));
    }

    #[test]
    fn walkthrough_matches_the_dashboard() {
        let mut tabs = dashboard_tabs();
        let mut flags = Flags::new();
        assert_eq!(tabs.active(), Some("bulk"));

        let activation = tabs.activate("single-email", &flags).unwrap();
        assert!(!visible(&activation, HISTORY));
        assert!(visible(&activation, PLACEHOLDER));
        assert!(!visible(&activation, RESULTS));

        let activation = tabs.activate("api", &flags).unwrap();
        assert!(!visible(&activation, RESULTS), "no key generated yet");

        flags.set(KEY_FLAG, true);
        let activation = tabs.activate("api", &flags).unwrap();
        assert!(visible(&activation, RESULTS));
        assert!(!visible(&activation, PLACEHOLDER));
    }

    #[test]
    fn rule_table_loads_from_json() {
        let raw = r#"[
            {"target": "history-card",
             "visibility": {"ExceptKeys": ["api"]}},
            {"target": "results-section",
             "visibility": {"ForKeysWhenFlag": {"keys": ["api"],
                                                "flag": "api-key-generated"}}}
        ]"#;
        let rules: Vec<AuxRule> = serde_json::from_str(raw).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].target, HISTORY);
    }
}
