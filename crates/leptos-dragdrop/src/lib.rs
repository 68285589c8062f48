//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for Leptos.
//! Items are dragged onto zones; a drop only counts when it lands on the zone
//! element itself, never on one of its children.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drag lifecycle of a single item
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState<T> {
    Idle,
    Dragging(T),
}

impl<T> Default for DragState<T> {
    fn default() -> Self {
        DragState::Idle
    }
}

impl<T: Copy> DragState<T> {
    /// Idle -> Dragging. A new drag replaces a stale one.
    pub fn start(&mut self, item: T) {
        *self = DragState::Dragging(item);
    }

    /// Back to Idle, yielding the dragged item if there was one
    pub fn finish(&mut self) -> Option<T> {
        match std::mem::take(self) {
            DragState::Dragging(item) => Some(item),
            DragState::Idle => None,
        }
    }

    pub fn dragged(&self) -> Option<T> {
        match self {
            DragState::Dragging(item) => Some(*item),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}

/// DnD state signals
///
/// `T` identifies the dragged item, `Z` the drop zone.
pub struct DndSignals<T: Send + Sync + 'static, Z: Send + Sync + 'static> {
    pub drag_state_read: ReadSignal<DragState<T>>,
    pub drag_state_write: WriteSignal<DragState<T>>,
    /// Zone currently under the pointer (for highlighting)
    pub drop_target_read: ReadSignal<Option<Z>>,
    pub drop_target_write: WriteSignal<Option<Z>>,
}

impl<T: Send + Sync + 'static, Z: Send + Sync + 'static> Clone for DndSignals<T, Z> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static, Z: Send + Sync + 'static> Copy for DndSignals<T, Z> {}

pub fn create_dnd_signals<T, Z>() -> DndSignals<T, Z>
where
    T: Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    let (drag_state_read, drag_state_write) = signal(DragState::<T>::Idle);
    let (drop_target_read, drop_target_write) = signal(None::<Z>);
    DndSignals {
        drag_state_read,
        drag_state_write,
        drop_target_read,
        drop_target_write,
    }
}

/// True when the event fired on the element the handler is attached to
pub fn is_direct_target(ev: &web_sys::Event) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

/// Create dragstart handler for draggable items
pub fn make_on_dragstart<T, Z>(dnd: DndSignals<T, Z>, item: T) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    T: Copy + Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    move |ev: web_sys::DragEvent| {
        // Firefox refuses to start a drag without payload
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", "");
            dt.set_effect_allowed("move");
        }
        dnd.drag_state_write.update(|state| state.start(item));
    }
}

/// Create dragend handler for draggable items
pub fn make_on_dragend<T, Z>(dnd: DndSignals<T, Z>) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    T: Copy + Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    move |_ev: web_sys::DragEvent| end_drag(&dnd)
}

/// End drag operation
pub fn end_drag<T, Z>(dnd: &DndSignals<T, Z>)
where
    T: Copy + Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    dnd.drag_state_write.set(DragState::Idle);
    dnd.drop_target_write.set(None);
}

/// Create dragenter handler for zones
pub fn make_on_dragenter<T, Z>(dnd: DndSignals<T, Z>, zone: Z) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    T: Copy + Send + Sync + 'static,
    Z: Copy + Send + Sync + 'static,
{
    move |ev: web_sys::DragEvent| {
        if is_direct_target(&ev) && dnd.drag_state_read.get_untracked().is_dragging() {
            dnd.drop_target_write.set(Some(zone));
        }
    }
}

/// Create dragleave handler for zones
pub fn make_on_dragleave<T, Z>(dnd: DndSignals<T, Z>, zone: Z) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    T: Copy + Send + Sync + 'static,
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::DragEvent| {
        if is_direct_target(&ev) && dnd.drop_target_read.get_untracked() == Some(zone) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Create drop handler for zones
///
/// Drops landing on a child element are swallowed without calling `on_drop`.
pub fn make_on_drop<T, Z, F>(dnd: DndSignals<T, Z>, zone: Z, on_drop: F) -> impl Fn(web_sys::DragEvent) + 'static
where
    T: Copy + Send + Sync + 'static,
    Z: Copy + Send + Sync + 'static,
    F: Fn(T, Z) + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if !is_direct_target(&ev) {
            return;
        }
        dnd.drop_target_write.set(None);
        let mut dragged = None;
        dnd.drag_state_write.update(|state| dragged = state.finish());
        if let Some(item) = dragged {
            on_drop(item, zone);
        }
    }
}

/// Bind document-level dragover/drop handlers
///
/// Prevents the browser default (navigating to dropped content) everywhere,
/// and makes every element a valid dragover target so zone handlers fire.
pub fn bind_global_drop_guard() {
    use wasm_bindgen::closure::Closure;

    let prevent = Closure::<dyn FnMut(web_sys::DragEvent)>::new(move |ev: web_sys::DragEvent| {
        ev.prevent_default();
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("dragover", prevent.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("drop", prevent.as_ref().unchecked_ref());
        }
    }
    prevent.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_then_finish() {
        let mut state = DragState::Idle;
        state.start(7u32);
        assert!(state.is_dragging());
        assert_eq!(state.dragged(), Some(7));

        assert_eq!(state.finish(), Some(7));
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn test_finish_when_idle() {
        let mut state = DragState::<u32>::default();
        assert_eq!(state.finish(), None);
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_restart_replaces_item() {
        let mut state = DragState::Idle;
        state.start(1u32);
        state.start(2u32);
        assert_eq!(state.dragged(), Some(2));
    }
}
