//! Board Domain Layer
//!
//! Contains the board model and the reducer that drives it.
//! This crate has NO web dependencies so it can be tested natively.

mod action;
mod board;
mod config;
mod error;
mod filter;
mod remote;
mod section;

pub use action::{Action, BoardState, Effect};
pub use board::{Board, TaskRef};
pub use config::{AppConfig, RemoteConfig, StorageConfig};
pub use error::{BoardError, BoardResult};
pub use remote::RemoteDocument;
pub use section::Section;
