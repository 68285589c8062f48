//! Option Box Component
//!
//! Remote load/save buttons and the loading indicator.

use leptos::prelude::*;

use board_core::Action;

use crate::context::use_app_context;

#[component]
pub fn OptionBox() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="option-box">
            <button class="load" title="Replace the board with the remote copy" on:click=move |_| ctx.send(Action::Load)>
                "Load"
            </button>
            <button class="save" title="Upload the board" on:click=move |_| ctx.send(Action::Save)>
                "Save"
            </button>
        </div>
    }
}

/// Shown while a remote request is in flight
#[component]
pub fn Loader() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.is_loading()>
            <div class="loader"></div>
        </Show>
    }
}
