//! Task Card Component
//!
//! A single draggable task. Double-click edits the text in place; leaving the
//! field (or pressing Enter) commits it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use board_core::TaskRef;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart};

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

fn event_element(ev: &web_sys::Event) -> Option<web_sys::HtmlElement> {
    ev.target().and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
}

#[component]
pub fn TaskCard(at: TaskRef, text: String) -> impl IntoView {
    let ctx = use_app_context();

    let is_editing = move || ctx.editing.get() == Some(at);
    let is_dragged = move || ctx.dnd.drag_state_read.get().dragged() == Some(at);
    let is_hidden = {
        let text = text.clone();
        move || !ctx.store.board().with(|state| state.is_visible(&text))
    };

    let on_dblclick = move |ev: web_sys::MouseEvent| {
        ctx.editing.set(Some(at));
        if let Some(el) = event_element(&ev) {
            el.set_content_editable("true");
            let _ = el.focus();
        }
    };

    let on_focusout = move |ev: web_sys::FocusEvent| {
        if let Some(el) = event_element(&ev) {
            ctx.finish_edit(at, el.text_content().unwrap_or_default());
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && ctx.editing.get_untracked() == Some(at) {
            ev.prevent_default();
            if let Some(el) = event_element(&ev) {
                let _ = el.blur();
            }
        }
    };

    view! {
        <li
            class=move || if is_dragged() { "task dragging" } else { "task" }
            draggable="true"
            hidden=is_hidden
            on:dragstart=make_on_dragstart(ctx.dnd, at)
            on:dragend=make_on_dragend(ctx.dnd)
            on:mouseenter=move |_| ctx.hovered.set(Some(at))
            on:mouseleave=move |_| ctx.hovered.set(None)
        >
            <div
                class="task-box"
                contenteditable=move || if is_editing() { "true" } else { "false" }
                on:dblclick=on_dblclick
                on:focusout=on_focusout
                on:keydown=on_keydown
            >
                {text}
            </div>
        </li>
    }
}
