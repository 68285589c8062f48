//! Section Identifier
//!
//! The three fixed board columns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three fixed board columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Todo,
    InProgress,
    Done,
}

impl Section {
    /// All sections in presentation order
    pub const ALL: [Section; 3] = [Section::Todo, Section::InProgress, Section::Done];

    /// Storage key, also used as the CSS class prefix
    pub fn key(&self) -> &'static str {
        match self {
            Section::Todo => "todo",
            Section::InProgress => "in-progress",
            Section::Done => "done",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Todo => "To Do",
            Section::InProgress => "In Progress",
            Section::Done => "Done",
        }
    }

    /// Digit that moves a hovered task here when pressed with ALT
    pub fn shortcut(&self) -> char {
        match self {
            Section::Todo => '1',
            Section::InProgress => '2',
            Section::Done => '3',
        }
    }

    /// Map a pressed key ("1", "2", "3") to its section
    pub fn from_shortcut(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::ALL.into_iter().find(|s| s.shortcut() == c),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keys() {
        assert_eq!(Section::Todo.key(), "todo");
        assert_eq!(Section::InProgress.key(), "in-progress");
        assert_eq!(Section::Done.key(), "done");
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(Section::from_shortcut("1"), Some(Section::Todo));
        assert_eq!(Section::from_shortcut("2"), Some(Section::InProgress));
        assert_eq!(Section::from_shortcut("3"), Some(Section::Done));
        assert_eq!(Section::from_shortcut("4"), None);
        assert_eq!(Section::from_shortcut("12"), None);
        assert_eq!(Section::from_shortcut(""), None);
    }

    #[test]
    fn test_serde_uses_keys() {
        assert_eq!(serde_json::to_string(&Section::InProgress).unwrap(), "\"in-progress\"");
        let parsed: Section = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(parsed, Section::Done);
    }
}
