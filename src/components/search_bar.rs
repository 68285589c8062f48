//! Search Bar Component
//!
//! Live filter: every keystroke re-filters the whole board.

use leptos::prelude::*;

use board_core::Action;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <input
            id="search"
            type="search"
            placeholder="Search tasks..."
            prop:value=move || ctx.store.board().with(|state| state.query.clone())
            on:input=move |ev| ctx.send(Action::Filter(event_target_value(&ev)))
        />
    }
}
