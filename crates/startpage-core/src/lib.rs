//! Startpage Core
//!
//! Dashboard tree model and the drag-and-reorder engine that rearranges it:
//! - domain: columns, groups and items
//! - tree: queries and the structural-sharing move algorithm
//! - policy: which item kinds may land in which groups
//! - hit_test: pointer position to drop target resolution
//! - gesture: the press/long-press/drag/release state machine
//!
//! Nothing here touches the DOM; the browser adapter lives in `leptos-dragdrop`.

pub mod config;
pub mod domain;
pub mod drag;
pub mod geometry;
pub mod gesture;
pub mod hit_test;
pub mod policy;
pub mod tree;

#[cfg(test)]
mod fixtures;

pub use config::DragConfig;
pub use drag::{DragEntity, DragLevel, DropIndicator, DropTarget};
pub use geometry::{Point, Rect};
pub use gesture::{GestureController, GestureEffect, GesturePhase, InputModality, PressSource, SessionId};
pub use hit_test::{DropTargetResolver, ElementProbe, HitTester};
pub use tree::{move_entity, try_move, MoveRejection};
