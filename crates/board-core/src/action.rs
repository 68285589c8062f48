//! Board Actions
//!
//! Every user interaction becomes an [`Action`]. [`BoardState::apply`] mutates
//! the in-memory state and returns the side effects the caller must run.

use log::{debug, warn};

use crate::board::{Board, TaskRef};
use crate::error::BoardResult;
use crate::filter;
use crate::section::Section;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddTask { section: Section, text: String },
    EditTask { at: TaskRef, text: String },
    MoveTask { from: TaskRef, to: Section },
    Filter(String),
    /// Request a remote load
    Load,
    /// Request a remote save
    Save,
    /// Replace the whole board (remote load finished)
    Replace(Board),
}

/// Side effect requested by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write the board to local storage
    Persist,
    /// Fetch the remote document
    Fetch,
    /// Upload this board snapshot
    Push(Board),
}

/// Board plus the active filter query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub board: Board,
    pub query: String,
}

impl BoardState {
    pub fn new(board: Board) -> Self {
        Self { board, query: String::new() }
    }

    pub fn is_visible(&self, text: &str) -> bool {
        filter::matches(text, &self.query)
    }

    /// Text at `at`, unless the task is gone or hidden by the filter
    pub fn visible_task(&self, at: TaskRef) -> Option<&str> {
        self.board.read(at).filter(|text| self.is_visible(text))
    }

    pub fn apply(&mut self, action: Action) -> BoardResult<Vec<Effect>> {
        debug!("apply {:?}", action);
        match action {
            Action::AddTask { section, text } => {
                if let Err(e) = self.board.create(section, text) {
                    warn!("rejected task for {}: {}", section, e);
                    return Err(e);
                }
                Ok(vec![Effect::Persist])
            }
            Action::EditTask { at, text } => {
                if self.board.read(at) == Some(text.as_str()) {
                    return Ok(Vec::new());
                }
                self.board.edit(at, text)?;
                Ok(vec![Effect::Persist])
            }
            Action::MoveTask { from, to } => {
                self.board.move_task(from, to)?;
                Ok(vec![Effect::Persist])
            }
            Action::Filter(query) => {
                self.query = query;
                Ok(Vec::new())
            }
            Action::Load => Ok(vec![Effect::Fetch]),
            Action::Save => Ok(vec![Effect::Persist, Effect::Push(self.board.clone())]),
            Action::Replace(board) => {
                self.board.restore(&board);
                Ok(vec![Effect::Persist])
            }
        }
    }
}
