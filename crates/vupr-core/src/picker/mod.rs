//! Interactive profile selection.
//!
//! The router only depends on the [`ProfilePicker`] trait; the terminal
//! prompt and the external chooser command are interchangeable behind it.

mod command;
mod terminal;

pub use command::CommandPicker;
pub use terminal::TerminalPicker;

use std::collections::BTreeMap;
use std::io;

use crate::routing::RoutingTable;

/// Display name of the synthetic entry for the browser's default profile.
pub const DEFAULT_CHOICE: &str = "Default";

/// What the user did with the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Folder of the chosen profile. An empty string means "use the default".
    Chosen(String),
    /// The user backed out; nothing is launched.
    Cancelled,
}

/// Shows the profile choices for `url` and waits for the user.
pub trait ProfilePicker {
    fn choose(
        &self,
        url: &str,
        current_default: &str,
        choices: &ProfileChoices,
    ) -> io::Result<PickOutcome>;
}

/// Profile names offered to the user, mapped to their folders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChoices {
    entries: BTreeMap<String, String>,
}

impl ProfileChoices {
    /// Every rule name plus a `Default` entry for the default folder.
    ///
    /// A rule literally named `Default` replaces the synthetic entry.
    pub fn from_table(table: &RoutingTable) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(DEFAULT_CHOICE.to_string(), table.default_folder().to_string());
        for rule in table.rules() {
            entries.insert(rule.name.clone(), rule.folder.clone());
        }
        Self { entries }
    }

    pub fn insert(&mut self, name: impl Into<String>, folder: impl Into<String>) {
        self.entries.insert(name.into(), folder.into());
    }

    pub fn folder_for(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains_folder(&self, folder: &str) -> bool {
        self.entries.values().any(|f| f == folder)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, folder)` pairs in presentation order.
    ///
    /// The entry pointing at `current_default` comes first (falling back to
    /// the `Default` entry), the rest follow sorted by name.
    pub fn ordered(&self, current_default: &str) -> Vec<(&str, &str)> {
        let default_key = self
            .entries
            .iter()
            .find(|(_, folder)| !current_default.is_empty() && folder.as_str() == current_default)
            .map(|(name, _)| name.as_str())
            .or_else(|| self.entries.contains_key(DEFAULT_CHOICE).then_some(DEFAULT_CHOICE));

        let mut out = Vec::with_capacity(self.entries.len());
        if let Some(key) = default_key {
            if let Some(folder) = self.entries.get(key) {
                out.push((key, folder.as_str()));
            }
        }
        for (name, folder) in &self.entries {
            if Some(name.as_str()) != default_key {
                out.push((name.as_str(), folder.as_str()));
            }
        }
        out
    }
}

/// Shortens `s` to at most `max` characters, appending `...` when cut.
pub(crate) fn truncate_text(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}
