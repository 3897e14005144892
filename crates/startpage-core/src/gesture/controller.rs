use std::mem;

use super::effect::GestureEffect;
use super::session::{DragSession, GesturePhase, InputModality, PendingPress, PressSource, SessionId};
use crate::config::DragConfig;
use crate::domain::Dashboard;
use crate::drag::{DragEntity, DropIndicator};
use crate::geometry::{Point, Rect};
use crate::hit_test::DropTargetResolver;
use crate::tree::{check_move, try_move};

/// Owns the single drag session of one engine instance.
///
/// Every input method returns the effects the host must run, in order.
/// Input that does not apply to the current phase returns no effects.
#[derive(Debug, Default)]
pub struct GestureController {
    config: DragConfig,
    phase: GesturePhase,
    next_session: u64,
}

impl GestureController {
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            phase: GesturePhase::Idle,
            next_session: 0,
        }
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, GesturePhase::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, GesturePhase::PendingPress(_))
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging(_))
    }

    /// Entity of the pending press or active drag
    pub fn entity(&self) -> Option<&DragEntity> {
        match &self.phase {
            GesturePhase::Idle => None,
            GesturePhase::PendingPress(p) => Some(&p.entity),
            GesturePhase::Dragging(s) => Some(&s.entity),
        }
    }

    /// Finger the current session follows, if it was started by touch
    pub fn touch_id(&self) -> Option<i32> {
        match &self.phase {
            GesturePhase::Idle => None,
            GesturePhase::PendingPress(p) => p.touch_id,
            GesturePhase::Dragging(s) => s.touch_id,
        }
    }

    pub fn indicator(&self) -> Option<&DropIndicator> {
        match &self.phase {
            GesturePhase::Dragging(s) => s.indicator.as_ref(),
            _ => None,
        }
    }

    /// Mousedown or touchstart on a draggable element. Only accepted when idle.
    pub fn press(&mut self, entity: DragEntity, source: PressSource, origin: Point, element: Rect) -> Vec<GestureEffect> {
        if !self.is_idle() {
            log::debug!("[DND] press ignored while {}", self.phase.name());
            return Vec::new();
        }

        self.next_session += 1;
        let press = PendingPress {
            session: SessionId(self.next_session),
            entity,
            touch_id: source.touch_id(),
            origin,
            element,
        };

        match source.modality() {
            InputModality::Mouse => self.begin_drag(press, InputModality::Mouse),
            InputModality::Touch => {
                let effects = vec![
                    GestureEffect::ScheduleLongPress {
                        session: press.session,
                        delay_ms: self.config.long_press_ms,
                    },
                    GestureEffect::AttachBlurGuard,
                ];
                log::debug!("[DND] pending press {:?}", press.entity);
                self.phase = GesturePhase::PendingPress(press);
                effects
            }
        }
    }

    /// The long-press timer fired
    pub fn long_press_elapsed(&mut self, session: SessionId) -> Vec<GestureEffect> {
        match mem::take(&mut self.phase) {
            GesturePhase::PendingPress(press) if press.session == session => {
                let mut effects = vec![GestureEffect::DetachBlurGuard];
                effects.extend(self.begin_drag(press, InputModality::Touch));
                effects
            }
            other => {
                log::debug!("[DND] stale long-press timer {:?} ignored", session);
                self.phase = other;
                Vec::new()
            }
        }
    }

    fn begin_drag(&mut self, press: PendingPress, modality: InputModality) -> Vec<GestureEffect> {
        let mut effects = Vec::with_capacity(4);
        if modality == InputModality::Touch && self.config.haptic_pulse_ms > 0 {
            effects.push(GestureEffect::HapticPulse {
                duration_ms: self.config.haptic_pulse_ms,
            });
        }

        let session = DragSession {
            session: press.session,
            entity: press.entity,
            modality,
            touch_id: press.touch_id,
            grab_offset: press.origin.offset_from(press.element.origin()),
            pointer: press.origin,
            indicator: None,
        };
        effects.push(GestureEffect::ShowGhost {
            origin: session.ghost_origin(),
            width: press.element.width,
            height: press.element.height,
        });
        effects.push(GestureEffect::SetDragMarker(true));
        effects.push(GestureEffect::AttachGlobalListeners(modality));

        log::debug!("[DND] drag started: {:?} via {:?}", session.entity, modality);
        self.phase = GesturePhase::Dragging(session);
        effects
    }

    /// Mousemove or touchmove
    pub fn pointer_move(&mut self, point: Point, resolver: &dyn DropTargetResolver, tree: &Dashboard) -> Vec<GestureEffect> {
        match &mut self.phase {
            GesturePhase::Idle => Vec::new(),
            GesturePhase::PendingPress(press) => {
                if press.origin.moved_beyond(point, self.config.touch_slop_px) {
                    log::debug!("[DND] movement before long press, treating as scroll");
                    self.phase = GesturePhase::Idle;
                    Self::abandon_press()
                } else {
                    Vec::new()
                }
            }
            GesturePhase::Dragging(session) => {
                session.pointer = point;
                let mut effects = vec![GestureEffect::MoveGhost {
                    origin: session.ghost_origin(),
                }];

                let indicator = resolver.resolve_drop_target(point.x, point.y).map(|target| DropIndicator {
                    accepted: check_move(tree, &session.entity, &target).is_ok(),
                    target,
                });
                if indicator != session.indicator {
                    session.indicator = indicator.clone();
                    effects.push(GestureEffect::Highlight(indicator));
                }
                effects
            }
        }
    }

    /// Mouseup or touchend: drop onto the current target, if any
    pub fn release(&mut self, tree: &Dashboard) -> Vec<GestureEffect> {
        match mem::take(&mut self.phase) {
            GesturePhase::Idle => Vec::new(),
            GesturePhase::PendingPress(_) => Self::abandon_press(),
            GesturePhase::Dragging(session) => {
                let mut effects = Self::teardown();
                match &session.indicator {
                    Some(indicator) => match try_move(tree, &session.entity, &indicator.target) {
                        Ok(next) => {
                            log::info!("[DND] moved {:?} to {:?}", session.entity, indicator.target);
                            effects.push(GestureEffect::Commit(next));
                        }
                        Err(rejection) => log::debug!("[DND] drop rejected: {}", rejection),
                    },
                    None => log::debug!("[DND] released outside any drop zone"),
                }
                effects
            }
        }
    }

    /// Touchcancel, window blur or Escape: end the session without moving anything
    pub fn cancel(&mut self) -> Vec<GestureEffect> {
        match mem::take(&mut self.phase) {
            GesturePhase::Idle => Vec::new(),
            GesturePhase::PendingPress(_) => Self::abandon_press(),
            GesturePhase::Dragging(session) => {
                log::debug!("[DND] drag of {:?} cancelled", session.entity);
                Self::teardown()
            }
        }
    }

    /// Touchend: only the finger that started the session releases it
    pub fn touch_end(&mut self, changed: &[i32], tree: &Dashboard) -> Vec<GestureEffect> {
        if self.follows_any(changed) {
            self.release(tree)
        } else {
            Vec::new()
        }
    }

    /// Touchcancel, filtered like [`touch_end`](Self::touch_end)
    pub fn touch_cancel(&mut self, changed: &[i32]) -> Vec<GestureEffect> {
        if self.follows_any(changed) {
            self.cancel()
        } else {
            Vec::new()
        }
    }

    fn follows_any(&self, changed: &[i32]) -> bool {
        self.touch_id().map_or(true, |id| changed.contains(&id))
    }

    /// Escape key while a drag is in progress
    pub fn escape(&mut self) -> Vec<GestureEffect> {
        if self.config.cancel_on_escape && self.is_dragging() {
            self.cancel()
        } else {
            Vec::new()
        }
    }

    fn abandon_press() -> Vec<GestureEffect> {
        vec![GestureEffect::CancelLongPress, GestureEffect::DetachBlurGuard]
    }

    fn teardown() -> Vec<GestureEffect> {
        vec![
            GestureEffect::Highlight(None),
            GestureEffect::HideGhost,
            GestureEffect::SetDragMarker(false),
            GestureEffect::DetachGlobalListeners,
        ]
    }
}
