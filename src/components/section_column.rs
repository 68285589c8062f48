//! Section Column Component
//!
//! One board column: title, add-task form, and the task list. The column
//! element itself is the drop zone.

use leptos::prelude::*;

use board_core::{Action, Section, TaskRef};
use leptos_dragdrop::{make_on_dragenter, make_on_dragleave, make_on_drop};

use crate::components::TaskCard;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn SectionColumn(section: Section) -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());
    let (input_error, set_input_error) = signal(None::<String>);

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        match ctx.dispatch(Action::AddTask { section, text }) {
            Ok(()) => {
                set_new_text.set(String::new());
                set_input_error.set(None);
            }
            Err(e) => set_input_error.set(Some(e.to_string())),
        }
    };

    let tasks = move || {
        ctx.store.board().with(|state| {
            state.board.tasks(section).iter().cloned().enumerate().collect::<Vec<_>>()
        })
    };

    let section_class = move || {
        let mut c = format!("section {}-section", section.key());
        if ctx.dnd.drop_target_read.get() == Some(section) {
            c.push_str(" drag-over");
        }
        c
    };

    view! {
        <section
            class=section_class
            on:dragenter=make_on_dragenter(ctx.dnd, section)
            on:dragleave=make_on_dragleave(ctx.dnd, section)
            on:drop=make_on_drop(ctx.dnd, section, move |from: TaskRef, to: Section| ctx.move_task(from, to))
        >
            <h2 class="section-title">
                {section.title()}
                <span class="shortcut-hint">{format!("Alt+{}", section.shortcut())}</span>
            </h2>

            <form class="add-task-form" on:submit=add_task>
                <input
                    type="text"
                    placeholder="Add new task..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit" class="submit-task">"Add"</button>
            </form>

            {move || input_error.get().map(|msg| view! { <p class="input-error">{msg}</p> })}

            <ul class=format!("{}-tasks", section.key())>
                <For
                    each=tasks
                    key=|(index, text)| (*index, text.clone())
                    children=move |(index, text)| {
                        view! { <TaskCard at=TaskRef::new(section, index) text=text /> }
                    }
                />
            </ul>
        </section>
    }
}
