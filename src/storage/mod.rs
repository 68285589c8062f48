//! Persistence Adapters
//!
//! Browser local storage (synchronous) and the remote JSON bin (async fetch).

mod local;
mod remote;

use thiserror::Error;
use wasm_bindgen::JsValue;

use board_core::BoardError;

pub use local::{load_board, load_config, save_board};
pub use remote::{fetch_document, push_document};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0} is not available")]
    Unavailable(&'static str),
    /// A thrown JS value or rejected promise
    #[error("javascript error: {0}")]
    Js(String),
    #[error("request failed with status {0}")]
    Http(u16),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("invalid json: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_wasm_bindgen::Error),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::Js(format!("{:?}", value))
    }
}
