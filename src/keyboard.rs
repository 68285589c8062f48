//! Keyboard Shortcuts
//!
//! ALT+1 / ALT+2 / ALT+3 moves the hovered task to To Do / In Progress / Done.
//! Tasks hidden by the filter are never moved.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use board_core::Section;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

/// Resolve the target section from `KeyboardEvent.key`, falling back to
/// `KeyboardEvent.code` for layouts where ALT changes the produced character.
pub fn shortcut_target(key: &str, code: &str) -> Option<Section> {
    Section::from_shortcut(key).or_else(|| code.strip_prefix("Digit").and_then(Section::from_shortcut))
}

/// Bind the window keydown handler
pub fn bind_global_keydown(ctx: AppContext) {
    use wasm_bindgen::closure::Closure;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if !ev.alt_key() {
            return;
        }
        let Some(hovered) = ctx.hovered.get_untracked() else {
            return;
        };
        if ctx.store.board().with_untracked(|state| state.visible_task(hovered).is_none()) {
            return;
        }
        if let Some(section) = shortcut_target(&ev.key(), &ev.code()) {
            ev.prevent_default();
            ctx.move_task(hovered, section);
        }
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_keydown.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_from_key() {
        assert_eq!(shortcut_target("1", "Digit1"), Some(Section::Todo));
        assert_eq!(shortcut_target("3", "Numpad3"), Some(Section::Done));
    }

    #[test]
    fn test_shortcut_falls_back_to_code() {
        // ALT+2 on a macOS US layout yields "™"
        assert_eq!(shortcut_target("™", "Digit2"), Some(Section::InProgress));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(shortcut_target("4", "Digit4"), None);
        assert_eq!(shortcut_target("a", "KeyA"), None);
    }
}
