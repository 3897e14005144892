//! Browser drag engine
//!
//! Feeds DOM input into the [`GestureController`] and executes the effects it
//! returns. Reactive output (highlight, dragged entity, commits) is pushed
//! through Leptos signals and callbacks only after the engine's own borrow is
//! released, so downstream effects never re-enter it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use startpage_core::domain::Dashboard;
use startpage_core::{
    DragConfig, DragEntity, DropIndicator, GestureController, GestureEffect, HitTester, Point, PressSource,
    SessionId,
};

use crate::ghost::{haptic_pulse, set_drag_marker, Ghost};
use crate::listeners::GlobalListeners;
use crate::probe::{element_rect, DomProbe};
use crate::DndSignals;

/// How long clicks are swallowed after a drag that actually travelled
const CLICK_SUPPRESS_MS: u32 = 100;

struct Inner {
    controller: GestureController,
    hit_tester: HitTester<DomProbe>,
    /// Element the current session was started from; cloned into the ghost
    source: Option<web_sys::Element>,
    origin: Point,
    travelled: bool,
    long_press: Option<Timeout>,
    /// Window blur listener alive only while a touch press is pending
    blur_guard: Option<GlobalListeners>,
    listeners: Option<GlobalListeners>,
    ghost: Option<Ghost>,
}

/// Reactive output collected while the engine is borrowed
enum Deferred {
    Dragging(Option<DragEntity>),
    Highlight(Option<DropIndicator>),
    Commit(Dashboard),
    SuppressClicks,
}

/// Cheap handle to one drag engine
#[derive(Clone)]
pub struct DragDropEngine {
    inner: Rc<RefCell<Inner>>,
    tree: Signal<Option<Arc<Dashboard>>>,
    on_commit: Callback<Dashboard>,
    signals: DndSignals,
}

#[derive(Clone)]
pub(crate) struct WeakEngine {
    inner: Weak<RefCell<Inner>>,
    tree: Signal<Option<Arc<Dashboard>>>,
    on_commit: Callback<Dashboard>,
    signals: DndSignals,
}

impl WeakEngine {
    pub(crate) fn upgrade(&self) -> Option<DragDropEngine> {
        Some(DragDropEngine {
            inner: self.inner.upgrade()?,
            tree: self.tree,
            on_commit: self.on_commit,
            signals: self.signals,
        })
    }
}

impl DragDropEngine {
    /// `tree` is read at move and release time; `on_commit` receives every
    /// replaced tree.
    pub fn new(
        config: DragConfig,
        tree: Signal<Option<Arc<Dashboard>>>,
        on_commit: Callback<Dashboard>,
        signals: DndSignals,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                controller: GestureController::new(config),
                hit_tester: HitTester::new(DomProbe),
                source: None,
                origin: Point::default(),
                travelled: false,
                long_press: None,
                blur_guard: None,
                listeners: None,
                ghost: None,
            })),
            tree,
            on_commit,
            signals,
        }
    }

    pub fn signals(&self) -> DndSignals {
        self.signals
    }

    fn downgrade(&self) -> WeakEngine {
        WeakEngine {
            inner: Rc::downgrade(&self.inner),
            tree: self.tree,
            on_commit: self.on_commit,
            signals: self.signals,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.borrow().controller.is_pending()
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().controller.is_dragging()
    }

    /// Press on a draggable element. `source` is the element to ghost.
    pub fn press(&self, entity: DragEntity, press: PressSource, point: Point, source: web_sys::Element) {
        let effects = {
            let mut inner = self.inner.borrow_mut();
            if !inner.controller.is_idle() {
                return;
            }
            let rect = element_rect(&source);
            inner.source = Some(source);
            inner.origin = point;
            inner.travelled = false;
            inner.controller.press(entity, press, point, rect)
        };
        self.run(effects);
    }

    pub fn pointer_move(&self, point: Point) {
        let Some(tree) = self.tree.get_untracked() else {
            self.cancel();
            return;
        };
        let effects = {
            let mut inner = self.inner.borrow_mut();
            let slop = inner.controller.config().touch_slop_px;
            if inner.controller.is_dragging() && inner.origin.moved_beyond(point, slop) {
                inner.travelled = true;
            }
            let Inner {
                controller, hit_tester, ..
            } = &mut *inner;
            controller.pointer_move(point, &*hit_tester, &tree)
        };
        self.run(effects);
    }

    pub fn release(&self) {
        let Some(tree) = self.tree.get_untracked() else {
            self.cancel();
            return;
        };
        let effects = self.inner.borrow_mut().controller.release(&tree);
        self.run(effects);
    }

    /// Finger the current session follows
    pub fn touch_id(&self) -> Option<i32> {
        self.inner.borrow().controller.touch_id()
    }

    /// Touchend carrying the identifiers of the lifted touches
    pub fn touch_end(&self, changed: &[i32]) {
        let Some(tree) = self.tree.get_untracked() else {
            self.cancel();
            return;
        };
        let effects = self.inner.borrow_mut().controller.touch_end(changed, &tree);
        self.run(effects);
    }

    pub fn touch_cancel(&self, changed: &[i32]) {
        let effects = self.inner.borrow_mut().controller.touch_cancel(changed);
        self.run(effects);
    }

    pub fn cancel(&self) {
        let effects = self.inner.borrow_mut().controller.cancel();
        self.run(effects);
    }

    pub fn escape(&self) {
        let effects = self.inner.borrow_mut().controller.escape();
        self.run(effects);
    }

    fn long_press_elapsed(&self, session: SessionId) {
        let effects = self.inner.borrow_mut().controller.long_press_elapsed(session);
        self.run(effects);
    }

    fn run(&self, effects: Vec<GestureEffect>) {
        if effects.is_empty() {
            return;
        }
        let mut deferred = Vec::new();
        {
            let mut inner = self.inner.borrow_mut();
            for effect in effects {
                self.apply(&mut *inner, effect, &mut deferred);
            }
        }

        for output in deferred {
            match output {
                Deferred::Dragging(entity) => self.signals.dragging.set(entity),
                Deferred::Highlight(indicator) => self.signals.indicator.set(indicator),
                Deferred::Commit(tree) => self.on_commit.run(tree),
                Deferred::SuppressClicks => suppress_clicks(self.signals),
            }
        }
    }

    fn apply(&self, inner: &mut Inner, effect: GestureEffect, deferred: &mut Vec<Deferred>) {
        match effect {
            GestureEffect::ScheduleLongPress { session, delay_ms } => {
                let engine = self.downgrade();
                inner.long_press = Some(Timeout::new(delay_ms, move || {
                    if let Some(engine) = engine.upgrade() {
                        engine.long_press_elapsed(session);
                    }
                }));
            }
            GestureEffect::CancelLongPress => {
                inner.long_press = None;
                inner.source = None;
            }
            GestureEffect::AttachBlurGuard => inner.blur_guard = GlobalListeners::blur_guard(self.downgrade()),
            GestureEffect::DetachBlurGuard => inner.blur_guard = None,
            GestureEffect::AttachGlobalListeners(modality) => {
                inner.listeners = GlobalListeners::attach(self.downgrade(), modality);
                if let Some(listeners) = &inner.listeners {
                    log::debug!("[DND] attached {} global listeners", listeners.len());
                }
                deferred.push(Deferred::Dragging(inner.controller.entity().cloned()));
            }
            GestureEffect::DetachGlobalListeners => {
                inner.listeners = None;
                inner.blur_guard = None;
                inner.long_press = None;
                inner.source = None;
                deferred.push(Deferred::Dragging(None));
                if inner.travelled {
                    deferred.push(Deferred::SuppressClicks);
                }
            }
            GestureEffect::HapticPulse { duration_ms } => haptic_pulse(duration_ms),
            GestureEffect::ShowGhost { origin, width, height } => {
                let opacity = inner.controller.config().ghost_opacity;
                inner.ghost = inner
                    .source
                    .as_ref()
                    .and_then(|source| Ghost::spawn(source, origin, width, height, opacity));
            }
            GestureEffect::MoveGhost { origin } => {
                if let Some(ghost) = &inner.ghost {
                    ghost.move_to(origin);
                }
            }
            GestureEffect::HideGhost => inner.ghost = None,
            GestureEffect::SetDragMarker(active) => set_drag_marker(active),
            GestureEffect::Highlight(indicator) => deferred.push(Deferred::Highlight(indicator)),
            GestureEffect::Commit(tree) => deferred.push(Deferred::Commit(tree)),
        }
    }
}

/// Swallow the click that follows a drag that actually travelled
fn suppress_clicks(signals: DndSignals) {
    signals.drag_just_ended.set(true);
    Timeout::new(CLICK_SUPPRESS_MS, move || signals.drag_just_ended.set(false)).forget();
}
