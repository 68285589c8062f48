//! Kanban Board App
//!
//! Main application component with three-column layout.

use leptos::prelude::*;
use reactive_stores::Store;

use board_core::Section;
use leptos_dragdrop::bind_global_drop_guard;

use crate::components::{Loader, OptionBox, SearchBar, SectionColumn};
use crate::context::AppContext;
use crate::keyboard::bind_global_keydown;
use crate::storage;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = storage::load_config();
    let board = storage::load_board(&config.storage);
    log::info!("board loaded with {} tasks", board.len());

    let store = Store::new(AppState::new(board));
    let ctx = AppContext::new(store, config);
    provide_context(ctx);

    bind_global_keydown(ctx);
    bind_global_drop_guard();

    // children ignore pointer events mid-drag so the section receives the drop
    let container_class = move || {
        if ctx.dnd.drag_state_read.get().is_dragging() {
            "main-container drag-active"
        } else {
            "main-container"
        }
    };

    view! {
        <div class="app-layout">
            <header class="board-header">
                <h1>"Kanban Board"</h1>
                <SearchBar />
                <OptionBox />
                <Loader />
            </header>

            <main class=container_class>
                {Section::ALL
                    .into_iter()
                    .map(|section| view! { <SectionColumn section=section /> })
                    .collect_view()}
            </main>
        </div>
    }
}
