//! Session-scoped global listeners.
//!
//! Attached when a drag starts and removed when the value is dropped, so a
//! finished session can never leave move/up handlers behind.

use startpage_core::{InputModality, Point};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::engine::WeakEngine;

type Handler = Closure<dyn FnMut(web_sys::Event)>;

pub(crate) struct GlobalListeners {
    registered: Vec<(web_sys::EventTarget, &'static str, Handler)>,
}

impl GlobalListeners {
    pub(crate) fn attach(engine: WeakEngine, modality: InputModality) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let doc_target: web_sys::EventTarget = document.into();
        let win_target: web_sys::EventTarget = window.into();

        let mut listeners = Self {
            registered: Vec::with_capacity(5),
        };

        match modality {
            InputModality::Mouse => {
                let e = engine.clone();
                listeners.add(&doc_target, "mousemove", false, move |ev| {
                    if let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() {
                        with_engine(&e, |engine| engine.pointer_move(mouse_point(ev)));
                    }
                });
                let e = engine.clone();
                listeners.add(&doc_target, "mouseup", false, move |_ev| {
                    with_engine(&e, |engine| engine.release());
                });
            }
            InputModality::Touch => {
                let e = engine.clone();
                // Non-passive so the page does not scroll under the drag
                listeners.add(&doc_target, "touchmove", true, move |ev| {
                    ev.prevent_default();
                    if let Some(ev) = ev.dyn_ref::<web_sys::TouchEvent>() {
                        with_engine(&e, |engine| {
                            if let Some(point) = touch_point(ev, engine.touch_id()) {
                                engine.pointer_move(point);
                            }
                        });
                    }
                });
                let e = engine.clone();
                listeners.add(&doc_target, "touchend", false, move |ev| {
                    if let Some(ev) = ev.dyn_ref::<web_sys::TouchEvent>() {
                        with_engine(&e, |engine| engine.touch_end(&changed_touch_ids(ev)));
                    }
                });
                let e = engine.clone();
                listeners.add(&doc_target, "touchcancel", false, move |ev| {
                    if let Some(ev) = ev.dyn_ref::<web_sys::TouchEvent>() {
                        with_engine(&e, |engine| engine.touch_cancel(&changed_touch_ids(ev)));
                    }
                });
            }
        }

        let e = engine.clone();
        listeners.add(&win_target, "blur", false, move |_ev| {
            with_engine(&e, |engine| engine.cancel());
        });
        let e = engine;
        listeners.add(&doc_target, "keydown", false, move |ev| {
            if let Some(key) = ev.dyn_ref::<web_sys::KeyboardEvent>() {
                if key.key() == "Escape" {
                    with_engine(&e, |engine| engine.escape());
                }
            }
        });

        Some(listeners)
    }

    /// Window blur listener for a pending touch press; the long-press timer
    /// must not turn a press into a drag after focus is gone.
    pub(crate) fn blur_guard(engine: WeakEngine) -> Option<Self> {
        let window: web_sys::EventTarget = web_sys::window()?.into();
        let mut listeners = Self {
            registered: Vec::with_capacity(1),
        };
        listeners.add(&window, "blur", false, move |_ev| {
            with_engine(&engine, |engine| engine.cancel());
        });
        Some(listeners)
    }

    fn add<F>(&mut self, target: &web_sys::EventTarget, event: &'static str, non_passive: bool, f: F)
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let handler = Handler::new(f);
        let result = if non_passive {
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(false);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                handler.as_ref().unchecked_ref(),
                &options,
            )
        } else {
            target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
        };

        match result {
            Ok(()) => self.registered.push((target.clone(), event, handler)),
            Err(err) => log::warn!("[DND] failed to attach {} listener: {:?}", event, err),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.registered.len()
    }
}

impl Drop for GlobalListeners {
    fn drop(&mut self) {
        for (target, event, handler) in self.registered.drain(..) {
            let _ = target.remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        }
    }
}

fn with_engine(engine: &WeakEngine, f: impl FnOnce(&crate::DragDropEngine)) {
    if let Some(engine) = engine.upgrade() {
        f(&engine);
    }
}

pub(crate) fn mouse_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

fn find_touch(list: &web_sys::TouchList, id: i32) -> Option<web_sys::Touch> {
    (0..list.length()).filter_map(|i| list.get(i)).find(|t| t.identifier() == id)
}

/// Position of the tracked touch (the first one when none is tracked);
/// falls back to the changed touches on touchend
pub(crate) fn touch_point(ev: &web_sys::TouchEvent, id: Option<i32>) -> Option<Point> {
    let touch = match id {
        Some(id) => find_touch(&ev.touches(), id).or_else(|| find_touch(&ev.changed_touches(), id)),
        None => ev.touches().get(0).or_else(|| ev.changed_touches().get(0)),
    }?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Identifiers of the touches that started, moved or ended in this event
pub(crate) fn changed_touch_ids(ev: &web_sys::TouchEvent) -> Vec<i32> {
    let list = ev.changed_touches();
    (0..list.length()).filter_map(|i| list.get(i)).map(|t| t.identifier()).collect()
}
