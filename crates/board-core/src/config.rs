//! Application Configuration
//!
//! Defaults point at the board's JSON bin. Any subset of fields can be
//! overridden with a JSON object stored under `StorageConfig::config_key`.

use serde::{Deserialize, Serialize};

use crate::error::BoardResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub remote: RemoteConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_json(json: &str) -> BoardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Remote document store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL of the bin service, without trailing slash
    pub endpoint: String,
    pub bin_id: String,
    pub owner: String,
    /// Written verbatim on every save
    pub created_at: String,
    pub updated_at: String,
}

impl RemoteConfig {
    pub fn url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), self.bin_id)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://json-bins.herokuapp.com/bin".to_string(),
            bin_id: "614aea974021ac0e6c080c61".to_string(),
            owner: "Ido".to_string(),
            created_at: "2021-09-22T08:34:31.333Z".to_string(),
            updated_at: "2021-09-22T08:34:31.333Z".to_string(),
        }
    }
}

/// Local storage keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub tasks_key: String,
    pub config_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            tasks_key: "tasks".to_string(),
            config_key: "kanban-config".to_string(),
        }
    }
}
