use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use crate::core::models::DragItem;
use super::sensor::{DragEvent, DragGesture, OverlayFrame, Point, PointerSensor, Rect};

pub const KIND_ATTR: &str = "data-dnd-kind";
pub const ID_ATTR: &str = "data-dnd-id";
const DROPPABLE_SELECTOR: &str = "[data-dnd-id]";

/// Shared handle to the drag layer. Draggables call [`DndHandle::press`] from
/// their `pointerdown`; the window listeners installed by
/// [`provide_dnd_context`] do the rest.
#[derive(Clone, Copy)]
pub struct DndHandle {
    gesture: StoredValue<DragGesture>,
    active: RwSignal<Option<DragItem>>,
    frame: RwSignal<Option<OverlayFrame>>,
    on_event: Callback<DragEvent>,
}

impl DndHandle {
    pub fn press(&self, item: DragItem, ev: &ev::PointerEvent) {
        // Primary button only
        if ev.button() != 0 {
            return;
        }
        let rect = source_rect(ev);
        self.gesture.update_value(|g| {
            g.press(item, point_of(ev), rect);
        });
    }

    /// Reactive: the item being dragged, if a drag is running.
    pub fn active(&self) -> Option<DragItem> {
        self.active.get()
    }

    pub fn is_active(&self, item: DragItem) -> bool {
        self.active.with(|active| *active == Some(item))
    }

    pub fn frame(&self) -> Option<OverlayFrame> {
        self.frame.get()
    }

    /// True once after a drag ended, so the click the browser fires on
    /// release does not toggle edit mode.
    pub fn take_click_suppression(&self) -> bool {
        self.gesture
            .try_update_value(DragGesture::take_click_suppression)
            .unwrap_or(false)
    }

    fn pointer_moved(&self, ev: &ev::PointerEvent) {
        if !self.gesture.with_value(DragGesture::is_tracking) {
            return;
        }
        let at = point_of(ev);
        let hit = hit_test(at);
        let events = self
            .gesture
            .try_update_value(|g| g.pointer_move(at, hit))
            .unwrap_or_default();

        let frame = self.gesture.with_value(DragGesture::overlay_frame);
        if frame.is_some() || self.frame.with_untracked(Option::is_some) {
            self.frame.set(frame);
        }
        self.dispatch(events);
    }

    fn released(&self) {
        let event = self.gesture.try_update_value(|g| g.release()).flatten();
        self.finish(event);
    }

    fn cancelled(&self) {
        let event = self.gesture.try_update_value(|g| g.cancel()).flatten();
        self.finish(event);
    }

    fn finish(&self, event: Option<DragEvent>) {
        if self.frame.with_untracked(Option::is_some) {
            self.frame.set(None);
        }
        self.dispatch(event);
    }

    // `active` is updated before the board hears about the events.
    fn dispatch(&self, events: impl IntoIterator<Item = DragEvent>) {
        let active = self.gesture.with_value(DragGesture::active);
        if self.active.with_untracked(|current| *current != active) {
            self.active.set(active);
        }
        for event in events {
            self.on_event.run(event);
        }
    }
}

/// Installs the drag layer for the current component subtree.
pub fn provide_dnd_context(activation_distance: f64, on_event: Callback<DragEvent>) -> DndHandle {
    let handle = DndHandle {
        gesture: StoredValue::new(DragGesture::new(PointerSensor::new(activation_distance))),
        active: RwSignal::new(None),
        frame: RwSignal::new(None),
        on_event,
    };
    provide_context(handle);

    let moves = window_event_listener(ev::pointermove, move |ev| handle.pointer_moved(&ev));
    let ups = window_event_listener(ev::pointerup, move |_| handle.released());
    let cancels = window_event_listener(ev::pointercancel, move |_| handle.cancelled());
    let keys = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            handle.cancelled();
        }
    });
    on_cleanup(move || {
        moves.remove();
        ups.remove();
        cancels.remove();
        keys.remove();
    });

    handle
}

pub fn use_dnd() -> DndHandle {
    use_context::<DndHandle>().expect("DndHandle context")
}

fn point_of(ev: &ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

// The browser does the hit-testing; the overlay is `pointer-events: none`
// so it never shadows a droppable.
fn hit_test(at: Point) -> Option<DragItem> {
    let document = web_sys::window()?.document()?;
    let element = document.element_from_point(at.x as f32, at.y as f32)?;
    let target = element.closest(DROPPABLE_SELECTOR).ok().flatten()?;
    let kind = target.get_attribute(KIND_ATTR)?;
    let id = target.get_attribute(ID_ATTR)?;
    match DragItem::from_attributes(&kind, &id) {
        Ok(item) => Some(item),
        Err(e) => {
            web_sys::console::warn_1(&format!("[Dnd] ignoring droppable: {}", e).into());
            None
        }
    }
}

fn source_rect(ev: &ev::PointerEvent) -> Option<Rect> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let source = target.closest(DROPPABLE_SELECTOR).ok().flatten()?;
    let r = source.get_bounding_client_rect();
    Some(Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    })
}
