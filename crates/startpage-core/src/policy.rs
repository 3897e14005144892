//! Compatibility Policy
//!
//! Decides whether a dragged entity may land in a candidate container.
//! Groups are typed containers: widget renderers assume they only ever see
//! the item kinds they were built for.

use crate::domain::{Group, GroupId, ItemKind};

/// What is being dragged, as far as the policy cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraggedKind {
    Column,
    Group,
    Item(ItemKind),
}

/// May an item of `kind` live in `target`?
///
/// Adding an [`ItemKind`] variant forces a decision here.
pub fn item_fits_group(kind: ItemKind, target: &Group) -> bool {
    match kind {
        ItemKind::Separator => true,
        ItemKind::Link => target.accepts_links(),
        ItemKind::HomeyCapability
        | ItemKind::HomeyFlow
        | ItemKind::Text
        | ItemKind::ButtonHolder => target.is_homey_custom(),
    }
}

/// Full drop predicate.
///
/// `source_group` is the group the dragged item currently lives in; moves
/// within the same group are pure reorders and always legal. Columns and
/// groups may land anywhere. An item needs a target group.
pub fn can_drop(dragged: DraggedKind, source_group: Option<&GroupId>, target_group: Option<&Group>) -> bool {
    match dragged {
        DraggedKind::Column | DraggedKind::Group => true,
        DraggedKind::Item(kind) => match target_group {
            None => false,
            Some(target) if source_group == Some(&target.id) => true,
            Some(target) => item_fits_group(kind, target),
        },
    }
}
