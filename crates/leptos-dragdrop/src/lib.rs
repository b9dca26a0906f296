//! Leptos DragDrop Utilities
//!
//! Touch reordering for Leptos lists. A press is armed after a short hold,
//! the row under the finger is found with `elementFromPoint`, and the release
//! is turned into a `(from, to)` pair by `todo_core::DragGesture`.
//! Desktop browsers use native HTML5 drag events; see [`set_drag_payload`].

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use todo_core::config::DRAG_ARM_DELAY_MS;
use todo_core::{DragGesture, HitTest, Point};

pub use todo_core::{DragFeedback, NeighborShift, ReorderIntent, Shift};

/// Attribute carrying a row's index in the active list
pub const TASK_INDEX_ATTR: &str = "data-task-index";

/// MIME type used for the dragged task id
const DRAG_PAYLOAD_TYPE: &str = "text/plain";

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Visual state of the current drag, `None` when idle or only armed
    pub feedback_read: ReadSignal<Option<DragFeedback>>,
    feedback_write: WriteSignal<Option<DragFeedback>>,
    gesture: StoredValue<DragGesture>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (feedback_read, feedback_write) = signal(None::<DragFeedback>);
    DndSignals {
        feedback_read,
        feedback_write,
        gesture: StoredValue::new(DragGesture::new()),
    }
}

impl DndSignals {
    /// Whether row `index` is the one being dragged
    pub fn is_dragging(&self, index: usize) -> bool {
        self.feedback_read.get().map(|f| f.source) == Some(index)
    }

    /// Inline style for row `index` under the current feedback
    pub fn row_style(&self, index: usize) -> String {
        row_style(self.feedback_read.get(), index)
    }

    fn reset(&self) {
        self.feedback_write.set(None);
    }
}

/// Transform for a row given the drag feedback
pub fn row_style(feedback: Option<DragFeedback>, index: usize) -> String {
    match feedback {
        Some(f) if f.source == index => format!(
            "transform: translateY({}px) scale(1.05) rotate(2deg); z-index: 1000; opacity: 0.9; pointer-events: none;",
            f.offset_y
        ),
        Some(DragFeedback { neighbor: Some(n), .. }) if n.index == index => {
            format!("transform: translateY({}px);", n.shift.offset_px())
        }
        _ => String::new(),
    }
}

/// Hit-testing against rendered rows
pub struct DomHitTest;

fn row_index(element: &web_sys::Element) -> Option<usize> {
    let row = element.closest(&format!("[{}]", TASK_INDEX_ATTR)).ok()??;
    row.get_attribute(TASK_INDEX_ATTR)?.parse().ok()
}

impl HitTest for DomHitTest {
    fn indices_at(&self, point: Point) -> Vec<usize> {
        let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
            return Vec::new();
        };
        let mut indices = Vec::new();
        for value in doc.elements_from_point(point.x as f32, point.y as f32).iter() {
            let Ok(element) = value.dyn_into::<web_sys::Element>() else { continue };
            if let Some(index) = row_index(&element) {
                if !indices.contains(&index) {
                    indices.push(index);
                }
            }
        }
        indices
    }
}

fn touch_point(touch: &web_sys::Touch) -> Point {
    Point::new(touch.client_x() as f64, touch.client_y() as f64)
}

/// Presses on controls inside a row never start a drag
fn is_control(target: Option<web_sys::EventTarget>) -> bool {
    match target {
        Some(t) => {
            t.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || t.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
                || t.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
        }
        None => false,
    }
}

/// Create touchstart handler for a row
///
/// Arms the gesture and schedules the switch to dragging after the hold delay.
pub fn make_on_touchstart(
    dnd: DndSignals,
    index: usize,
    completed: bool,
    active_len: usize,
) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if is_control(ev.target()) {
            return;
        }
        let Some(touch) = ev.touches().get(0) else { return };
        let origin = touch_point(&touch);
        let ticket = dnd
            .gesture
            .try_update_value(|g| g.press(index, completed, origin, active_len))
            .flatten();
        let Some(ticket) = ticket else { return };

        Timeout::new(DRAG_ARM_DELAY_MS, move || {
            let armed = dnd.gesture.try_update_value(|g| g.arm_elapsed(ticket)).unwrap_or(false);
            if armed {
                log::debug!("[DND] dragging row {}", index);
                dnd.feedback_write.set(Some(DragFeedback {
                    source: index,
                    offset_y: 0.0,
                    neighbor: None,
                }));
            }
        })
        .forget();
    }
}

/// Bind document-level touch handlers
///
/// `on_reorder` runs once per committed gesture.
pub fn bind_global_touch<F>(dnd: DndSignals, on_reorder: F)
where
    F: Fn(ReorderIntent) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        log::warn!("[DND] no document, touch reordering disabled");
        return;
    };

    let on_touchmove = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        if !dnd.gesture.with_value(|g| g.is_dragging()) {
            return;
        }
        // Keep the page from scrolling under the dragged row
        ev.prevent_default();
        let Some(touch) = ev.touches().get(0) else { return };
        let point = touch_point(&touch);
        if let Some(feedback) = dnd.gesture.try_update_value(|g| g.pointer_move_over(point, &DomHitTest)).flatten() {
            dnd.feedback_write.set(Some(feedback));
        }
    });

    let on_touchend = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        let point = ev.changed_touches().get(0).map(|touch| touch_point(&touch));
        let intent = dnd
            .gesture
            .try_update_value(|g| match point {
                Some(point) => g.release_over(point, &DomHitTest),
                None => g.release(None),
            })
            .flatten();
        dnd.reset();
        if let Some(intent) = intent {
            log::info!("[DND] reorder {} -> {}", intent.from, intent.to);
            on_reorder(intent);
        }
    });

    let on_touchcancel = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
        dnd.gesture.update_value(|g| g.cancel());
        dnd.reset();
    });

    let move_options = web_sys::AddEventListenerOptions::new();
    move_options.set_passive(false);
    let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        on_touchmove.as_ref().unchecked_ref(),
        &move_options,
    );
    let _ = doc.add_event_listener_with_callback("touchend", on_touchend.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("touchcancel", on_touchcancel.as_ref().unchecked_ref());

    on_touchmove.forget();
    on_touchend.forget();
    on_touchcancel.forget();
}

/// Store the dragged task id on an HTML5 dragstart
pub fn set_drag_payload(ev: &web_sys::DragEvent, id: &str) {
    if let Some(data) = ev.data_transfer() {
        let _ = data.set_data(DRAG_PAYLOAD_TYPE, id);
        data.set_effect_allowed("move");
    }
}

/// Read the dragged task id back on drop
pub fn drag_payload(ev: &web_sys::DragEvent) -> Option<String> {
    let data = ev.data_transfer()?;
    data.get_data(DRAG_PAYLOAD_TYPE).ok().filter(|id| !id.is_empty())
}

/// Accept drops on a row (dragover must be cancelled for drop to fire)
pub fn allow_drop(ev: &web_sys::DragEvent) {
    ev.prevent_default();
    if let Some(data) = ev.data_transfer() {
        data.set_drop_effect("move");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(source: usize, neighbor: Option<NeighborShift>) -> Option<DragFeedback> {
        Some(DragFeedback { source, offset_y: -42.0, neighbor })
    }

    #[test]
    fn test_idle_rows_have_no_style() {
        assert_eq!(row_style(None, 0), "");
    }

    #[test]
    fn test_dragged_row_follows_pointer() {
        let style = row_style(feedback(1, None), 1);
        assert!(style.starts_with("transform: translateY(-42px) scale(1.05)"));
        assert!(style.contains("z-index: 1000"));
    }

    #[test]
    fn test_dragged_row_lets_hits_through() {
        assert!(row_style(feedback(1, None), 1).contains("pointer-events: none"));
        assert!(!row_style(feedback(1, None), 0).contains("pointer-events"));
    }

    #[test]
    fn test_neighbor_is_nudged() {
        let neighbor = Some(NeighborShift { index: 0, shift: Shift::Down });
        assert_eq!(row_style(feedback(2, neighbor), 0), "transform: translateY(10px);");
        assert_eq!(row_style(feedback(2, neighbor), 1), "");
    }
}
