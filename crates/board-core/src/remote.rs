//! Remote Document
//!
//! The single JSON object kept in the bin: the whole board plus metadata.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::RemoteConfig;

/// Metadata fields are optional on read; only `tasks` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteDocument {
    #[serde(default, rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub tasks: Board,
    #[serde(default, rename = "createdAt")]
    pub created_at: String,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: String,
}

impl RemoteDocument {
    /// Wrap a board for upload. Timestamps come from config unchanged.
    pub fn new(config: &RemoteConfig, tasks: Board) -> Self {
        Self {
            id: config.bin_id.clone(),
            name: config.owner.clone(),
            tasks,
            created_at: config.created_at.clone(),
            updated_at: config.updated_at.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Section;

    #[test]
    fn test_body_shape() {
        let mut board = Board::new();
        board.create(Section::Todo, "buy milk").unwrap();
        let doc = RemoteDocument::new(&RemoteConfig::default(), board);

        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["_id"], "614aea974021ac0e6c080c61");
        assert_eq!(value["name"], "Ido");
        assert_eq!(value["tasks"]["todo"][0], "buy milk");
        assert_eq!(value["tasks"]["in-progress"], serde_json::json!([]));
        assert_eq!(value["createdAt"], "2021-09-22T08:34:31.333Z");
        assert_eq!(value["updatedAt"], "2021-09-22T08:34:31.333Z");
    }

    #[test]
    fn test_parse_server_response() {
        let json = r#"{
            "_id": "614aea974021ac0e6c080c61",
            "name": "Ido",
            "tasks": {"todo": [], "in-progress": ["deploy"], "done": []},
            "createdAt": "2021-09-22T08:34:31.333Z",
            "updatedAt": "2021-09-23T10:00:00.000Z",
            "__v": 0
        }"#;
        let doc: RemoteDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.tasks.tasks(Section::InProgress), ["deploy"]);
        assert_eq!(doc.updated_at, "2021-09-23T10:00:00.000Z");
    }

    #[test]
    fn test_parse_tasks_only() {
        let doc: RemoteDocument =
            serde_json::from_str(r#"{"tasks": {"todo": ["a"], "done": ["b"]}}"#).unwrap();
        assert_eq!(doc.tasks.tasks(Section::Todo), ["a"]);
        assert_eq!(doc.tasks.tasks(Section::Done), ["b"]);
        assert!(doc.id.is_empty());
        assert!(doc.created_at.is_empty());
    }

    #[test]
    fn test_missing_tasks_is_error() {
        assert!(serde_json::from_str::<RemoteDocument>(r#"{"_id": "x"}"#).is_err());
    }
}
