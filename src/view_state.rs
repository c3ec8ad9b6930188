//! View State
//!
//! User-chosen display preferences, persisted to browser local storage.

use serde::{Deserialize, Serialize};

/// Local storage key for the persisted view state
pub const STORAGE_KEY: &str = "viewedState";

/// Partition key for organizing tickets into columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    #[default]
    Status,
    User,
    Priority,
}

impl Grouping {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::User => "user",
            Self::Priority => "priority",
        }
    }

    /// Parse a select-option value back into a variant
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "status" => Some(Self::Status),
            "user" => Some(Self::User),
            "priority" => Some(Self::Priority),
            _ => None,
        }
    }
}

/// Within-column ordering rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sorting {
    #[default]
    Priority,
    Title,
}

impl Sorting {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Title => "title",
        }
    }

    /// Parse a select-option value back into a variant
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "priority" => Some(Self::Priority),
            "title" => Some(Self::Title),
            _ => None,
        }
    }
}

/// Persisted display preferences.
///
/// Fields missing from a stored blob fall back to their defaults
/// individually, so older blobs keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewState {
    pub grouping: Grouping,
    pub sorting: Sorting,
    pub display_options_visible: bool,
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted view state; absent or malformed blobs yield defaults
pub fn load() -> ViewState {
    let Some(storage) = local_storage() else {
        return ViewState::default();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
        _ => ViewState::default(),
    }
}

/// Persist the full view state under the fixed key; write errors are ignored
pub fn save(state: &ViewState) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(raw) = serde_json::to_string(state) {
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
}
