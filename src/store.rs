//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use board_core::{Action, Board, BoardResult, BoardState, Effect};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Board contents and active filter
    pub board: BoardState,
    /// Remote requests in flight (loader shown while > 0)
    pub pending_requests: u32,
}

impl AppState {
    pub fn new(board: Board) -> Self {
        Self {
            board: BoardState::new(board),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Run an action through the reducer, returning the effects to perform
pub fn store_apply(store: &AppStore, action: Action) -> BoardResult<Vec<Effect>> {
    let binding = store.board();
    let mut state = binding.write();
    state.apply(action)
}

/// Current board without subscribing
pub fn store_board_snapshot(store: &AppStore) -> Board {
    store.board().with_untracked(|state| state.board.clone())
}

pub fn store_begin_request(store: &AppStore) {
    store.pending_requests().update(|n| *n += 1);
}

pub fn store_end_request(store: &AppStore) {
    store.pending_requests().update(|n| *n = n.saturating_sub(1));
}
