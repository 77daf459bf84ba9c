use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct User {
    pub(crate) username: String,
    pub(crate) password_hash: String,
    pub(crate) role: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct ConfigEntry {
    pub(crate) id: String,
    pub(crate) payload: serde_json::Value,
}

/// Static dataset loaded once at process start. There is no reload path;
/// both collections are read-only for the lifetime of the process.
#[derive(Debug, Deserialize)]
pub(crate) struct Dataset {
    pub(crate) users: Vec<User>,
    pub(crate) configs: Vec<ConfigEntry>,
}

impl Dataset {
    pub(crate) fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read(path)?;

        Ok(serde_json::from_slice(&raw)?)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct UserStore {
    users: Arc<Vec<User>>,
}

impl UserStore {
    pub(crate) fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(users),
        }
    }

    /// Case-sensitive exact match on username.
    pub(crate) fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username == username)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ConfigStore {
    entries: Arc<Vec<ConfigEntry>>,
}

impl ConfigStore {
    pub(crate) fn new(entries: Vec<ConfigEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    pub(crate) fn find_by_id(&self, id: &str) -> Option<&ConfigEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}
