//! Leptos DragDrop Utilities
//!
//! Browser side of the startpage drag engine: pointer and touch handlers for
//! draggable elements, DOM hit testing, the floating ghost and session-scoped
//! global listeners. All decisions are made by `startpage_core`; this crate
//! only translates events in and effects out.

mod engine;
mod ghost;
mod listeners;
mod probe;

use leptos::prelude::*;
use startpage_core::{DragEntity, DropIndicator, DropTarget, Point, PressSource};
use wasm_bindgen::JsCast;

pub use engine::DragDropEngine;
pub use probe::{element_rect, DomProbe};
pub use startpage_core::hit_test::{ATTR_COLUMN_ID, ATTR_DROP_ZONE, ATTR_GROUP_ID, ATTR_ITEM_ID};

use listeners::{changed_touch_ids, mouse_point, touch_point};

/// Class set on `<html>` while a drag is in progress
pub const DRAG_ACTIVE_CLASS: &str = "dnd-active";

/// Marks the element a press should ghost (column, group or item box)
pub const ATTR_DRAG_SOURCE: &str = "data-drag-source";

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Entity currently in flight
    pub dragging: RwSignal<Option<DragEntity>>,
    /// Drop target under the pointer and whether it would be accepted
    pub indicator: RwSignal<Option<DropIndicator>>,
    /// True for a moment after a drag ends so the trailing click is ignored
    pub drag_just_ended: RwSignal<bool>,
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        dragging: RwSignal::new(None),
        indicator: RwSignal::new(None),
        drag_just_ended: RwSignal::new(false),
    }
}

impl DndSignals {
    pub fn is_dragging(&self, entity: &DragEntity) -> bool {
        self.dragging.with(|d| d.as_ref() == Some(entity))
    }

    /// Highlight state of a drop zone: `Some(accepted)` when the pointer is
    /// over it at the level being dragged, `None` otherwise. Tracked.
    pub fn zone_state(&self, zone: &DropTarget) -> Option<bool> {
        let level = self.dragging.with(|d| d.as_ref().map(DragEntity::level))?;
        self.indicator.with(|indicator| {
            indicator
                .as_ref()
                .filter(|i| &i.target.narrowed_to(level) == zone)
                .map(|i| i.accepted)
        })
    }

    /// CSS classes for a drop zone
    pub fn zone_class(&self, zone: &DropTarget) -> &'static str {
        match self.zone_state(zone) {
            Some(true) => " drop-target",
            Some(false) => " drop-rejected",
            None => "",
        }
    }
}

/// Engine plus signals, shareable through Leptos context
#[derive(Clone, Copy)]
pub struct DndContext {
    engine: StoredValue<DragDropEngine, LocalStorage>,
    pub signals: DndSignals,
}

impl DndContext {
    pub fn new(engine: DragDropEngine) -> Self {
        let signals = engine.signals();
        Self {
            engine: StoredValue::new_local(engine),
            signals,
        }
    }

    pub fn engine(&self) -> DragDropEngine {
        self.engine.get_value()
    }
}

/// Presses on form controls never start a drag
fn is_interactive(target: Option<web_sys::EventTarget>) -> bool {
    let Some(target) = target else { return false };
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
}

/// Element to ghost for a press on `handle`: nearest marked drag source
fn drag_source(handle: Option<web_sys::EventTarget>) -> Option<web_sys::Element> {
    let handle = handle?.dyn_into::<web_sys::Element>().ok()?;
    let selector = format!("[{}]", ATTR_DRAG_SOURCE);
    handle.closest(&selector).ok().flatten().or(Some(handle))
}

/// Create mousedown handler for a drag handle. Mouse drags start immediately.
pub fn make_on_mousedown(dnd: DndContext, entity: DragEntity) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_interactive(ev.target()) {
            return;
        }
        let Some(source) = drag_source(ev.current_target()) else { return };

        let engine = dnd.engine();
        engine.press(entity.clone(), PressSource::Mouse, mouse_point(&ev), source);
        if engine.is_dragging() {
            // Keep the browser from starting native link/image drags or selections
            ev.prevent_default();
            ev.stop_propagation();
        }
    }
}

/// Create touchstart handler for a drag handle. Touch drags need a long press;
/// the default is not prevented so the page can still scroll.
pub fn make_on_touchstart(dnd: DndContext, entity: DragEntity) -> impl Fn(web_sys::TouchEvent) + Clone + 'static {
    move |ev: web_sys::TouchEvent| {
        if ev.touches().length() != 1 || is_interactive(ev.target()) {
            return;
        }
        let Some(touch) = ev.touches().get(0) else { return };
        let Some(source) = drag_source(ev.current_target()) else { return };
        let point = Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()));
        let press = PressSource::Touch { id: touch.identifier() };
        dnd.engine().press(entity.clone(), press, point, source);
        ev.stop_propagation();
    }
}

/// Element-level touchmove while a press is pending (global listeners are
/// only attached once dragging)
pub fn make_on_touchmove(dnd: DndContext) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        let engine = dnd.engine();
        if engine.is_pending() {
            if let Some(point) = touch_point(&ev, engine.touch_id()) {
                engine.pointer_move(point);
            }
        }
    }
}

/// Element-level touchend while pending: a tap
pub fn make_on_touchend(dnd: DndContext) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        let engine = dnd.engine();
        if engine.is_pending() {
            engine.touch_end(&changed_touch_ids(&ev));
        }
    }
}

/// Element-level touchcancel while pending
pub fn make_on_touchcancel(dnd: DndContext) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        let engine = dnd.engine();
        if engine.is_pending() {
            engine.touch_cancel(&changed_touch_ids(&ev));
        }
    }
}

/// Click guard for links inside draggable rows
pub fn make_on_click_guard(dnd: DndContext) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if dnd.signals.drag_just_ended.get_untracked() {
            ev.prevent_default();
            ev.stop_propagation();
        }
    }
}
