//! Application Context
//!
//! Shared state provided via Leptos Context API. All user actions go through
//! [`AppContext::dispatch`], which runs the reducer and then its effects.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info, warn};
use wasm_bindgen::JsCast;

use board_core::{Action, AppConfig, Board, BoardResult, Effect, Section, TaskRef};
use leptos_dragdrop::{create_dnd_signals, DndSignals};

use crate::storage;
use crate::store::{self, AppStateStoreFields, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<AppConfig>,
    /// Task under the pointer (target of ALT+digit shortcuts)
    pub hovered: RwSignal<Option<TaskRef>>,
    /// Task whose text is being edited inline
    pub editing: RwSignal<Option<TaskRef>>,
    pub dnd: DndSignals<TaskRef, Section>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            hovered: RwSignal::new(None),
            editing: RwSignal::new(None),
            dnd: create_dnd_signals(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.store.pending_requests().get() > 0
    }

    /// Apply an action and run the effects it requests
    pub fn dispatch(&self, action: Action) -> BoardResult<()> {
        let effects = store::store_apply(&self.store, action)?;
        for effect in effects {
            self.run(effect);
        }
        Ok(())
    }

    /// Dispatch where the caller has nothing to show the user on failure
    pub fn send(&self, action: Action) {
        if let Err(e) = self.dispatch(action) {
            warn!("action failed: {}", e);
        }
    }

    pub fn move_task(&self, from: TaskRef, to: Section) {
        if self.editing.get_untracked() == Some(from) {
            self.commit_focused_edit(from);
        }
        // positions shift after a move
        self.hovered.set(None);
        self.editing.set(None);
        self.send(Action::MoveTask { from, to });
    }

    /// Commit the text of the focused edit box before its task changes position
    fn commit_focused_edit(&self, at: TaskRef) {
        let Some(el) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.active_element())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        self.finish_edit(at, el.text_content().unwrap_or_default());
        // editing is already cleared, so the focusout this triggers is a no-op
        let _ = el.blur();
    }

    /// Leave inline edit mode, committing the edited text
    pub fn finish_edit(&self, at: TaskRef, text: String) {
        if self.editing.get_untracked() != Some(at) {
            return;
        }
        self.editing.set(None);
        self.send(Action::EditTask { at, text });
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::Persist => self.capture(),
            Effect::Fetch => self.spawn_remote_load(),
            Effect::Push(board) => self.spawn_remote_save(board),
        }
    }

    fn capture(&self) {
        let board = store::store_board_snapshot(&self.store);
        let result = self.config.with_value(|config| storage::save_board(&config.storage, &board));
        if let Err(e) = result {
            error!("failed to store board locally: {}", e);
        }
    }

    fn spawn_remote_load(&self) {
        let ctx = *self;
        let remote = self.config.with_value(|config| config.remote.clone());
        store::store_begin_request(&self.store);
        spawn_local(async move {
            match storage::fetch_document(&remote).await {
                Ok(document) => {
                    info!("loaded {} tasks from {}", document.tasks.len(), remote.url());
                    ctx.hovered.set(None);
                    ctx.editing.set(None);
                    ctx.send(Action::Replace(document.tasks));
                }
                Err(e) => error!("remote load failed: {}", e),
            }
            store::store_end_request(&ctx.store);
        });
    }

    fn spawn_remote_save(&self, board: Board) {
        let app_store = self.store;
        let remote = self.config.with_value(|config| config.remote.clone());
        store::store_begin_request(&app_store);
        spawn_local(async move {
            let count = board.len();
            match storage::push_document(&remote, board).await {
                Ok(()) => info!("saved {} tasks to {}", count, remote.url()),
                Err(e) => error!("remote save failed: {}", e),
            }
            store::store_end_request(&app_store);
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
