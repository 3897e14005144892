//! Tree Mutator
//!
//! Moves a dragged entity to a drop target. A move is evaluated in two steps:
//! [`plan_move`] resolves positions and applies the compatibility policy
//! without touching the tree, then [`apply_plan`] builds the new tree.
//! Rejection therefore can never leave a half-applied move behind.
//!
//! The new tree copies only the paths from the root to the containers it
//! changes; every untouched column, group and item is shared with the old one.

use std::sync::Arc;

use thiserror::Error;

use super::query::{position_of, GroupPath, ItemPath};
use crate::domain::{ColumnId, Dashboard, Entity, Group, GroupId, ItemId, ItemKind};
use crate::drag::{DragEntity, DropTarget};
use crate::policy::{can_drop, DraggedKind};

/// Why a move was not applied. None of these are user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("dragged {0} no longer exists")]
    StaleSource(String),
    #[error("drop target {0} no longer exists")]
    StaleTarget(String),
    #[error("a group needs a column to land in")]
    MissingTargetColumn,
    #[error("an item needs a group to land in")]
    MissingTargetGroup,
    #[error("{kind} items cannot be dropped into group {group}")]
    Incompatible { kind: ItemKind, group: GroupId },
    #[error("entity dropped onto itself")]
    SelfDrop,
    #[error("entity already sits at the drop position")]
    Unchanged,
}

/// Resolved move, ready to apply to the tree it was planned against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovePlan {
    Column {
        from: usize,
        before: Option<ColumnId>,
    },
    Group {
        from: GroupPath,
        to_column: usize,
        before: Option<GroupId>,
    },
    Item {
        from: ItemPath,
        to: GroupPath,
        before: Option<ItemId>,
    },
}

/// Resolve a move against `tree` without building anything
pub fn plan_move(tree: &Dashboard, entity: &DragEntity, target: &DropTarget) -> Result<MovePlan, MoveRejection> {
    match entity {
        DragEntity::Column { column_id } => plan_column(tree, column_id, target),
        DragEntity::Group { column_id, group_id } => plan_group(tree, column_id, group_id, target),
        DragEntity::Item {
            column_id,
            group_id,
            item_id,
        } => plan_item(tree, column_id, group_id, item_id, target),
    }
}

fn plan_column(tree: &Dashboard, column_id: &ColumnId, target: &DropTarget) -> Result<MovePlan, MoveRejection> {
    let from = tree
        .column_index(column_id)
        .ok_or_else(|| MoveRejection::StaleSource(format!("column {column_id}")))?;
    let before = match &target.column_id {
        Some(sibling) if sibling == column_id => return Err(MoveRejection::SelfDrop),
        Some(sibling) => {
            if tree.column_index(sibling).is_none() {
                return Err(MoveRejection::StaleTarget(format!("column {sibling}")));
            }
            Some(sibling)
        }
        None => None,
    };
    if lands_in_place(&tree.columns, from, before) {
        return Err(MoveRejection::Unchanged);
    }
    // Column reorders are always admitted by the policy.
    Ok(MovePlan::Column {
        from,
        before: before.cloned(),
    })
}

fn plan_group(
    tree: &Dashboard,
    column_id: &ColumnId,
    group_id: &GroupId,
    target: &DropTarget,
) -> Result<MovePlan, MoveRejection> {
    let from = tree
        .group_path(column_id, group_id)
        .or_else(|| tree.locate_group(group_id))
        .ok_or_else(|| MoveRejection::StaleSource(format!("group {group_id}")))?;
    let target_column_id = target.column_id.as_ref().ok_or(MoveRejection::MissingTargetColumn)?;
    let to_column = tree
        .column_index(target_column_id)
        .ok_or_else(|| MoveRejection::StaleTarget(format!("column {target_column_id}")))?;

    let before = match &target.group_id {
        Some(sibling) if sibling == group_id => return Err(MoveRejection::SelfDrop),
        Some(sibling) => {
            if position_of(&tree.columns[to_column].groups, sibling).is_none() {
                return Err(MoveRejection::StaleTarget(format!("group {sibling}")));
            }
            Some(sibling.clone())
        }
        None => None,
    };
    if from.column == to_column && lands_in_place(&tree.columns[to_column].groups, from.group, before.as_ref()) {
        return Err(MoveRejection::Unchanged);
    }

    Ok(MovePlan::Group { from, to_column, before })
}

fn plan_item(
    tree: &Dashboard,
    column_id: &ColumnId,
    group_id: &GroupId,
    item_id: &ItemId,
    target: &DropTarget,
) -> Result<MovePlan, MoveRejection> {
    let from = tree
        .item_path(column_id, group_id, item_id)
        .or_else(|| tree.locate_item(item_id))
        .ok_or_else(|| MoveRejection::StaleSource(format!("item {item_id}")))?;

    let (Some(target_column_id), Some(target_group_id)) = (&target.column_id, &target.group_id) else {
        return Err(MoveRejection::MissingTargetGroup);
    };
    let to = tree
        .group_path(target_column_id, target_group_id)
        .ok_or_else(|| MoveRejection::StaleTarget(format!("group {target_group_id}")))?;
    let target_group = tree.group_at(to);

    let before = match &target.item_id {
        Some(sibling) if sibling == item_id => return Err(MoveRejection::SelfDrop),
        Some(sibling) => {
            if position_of(&target_group.items, sibling).is_none() {
                return Err(MoveRejection::StaleTarget(format!("item {sibling}")));
            }
            Some(sibling.clone())
        }
        None => None,
    };

    let kind = tree.item_at(from).kind();
    let source_group_id = &tree.group_at(from.group_path()).id;
    if !can_drop(DraggedKind::Item(kind), Some(source_group_id), Some(target_group)) {
        return Err(MoveRejection::Incompatible {
            kind,
            group: target_group.id.clone(),
        });
    }

    if from.group_path() == to && lands_in_place(&target_group.items, from.item, before.as_ref()) {
        return Err(MoveRejection::Unchanged);
    }

    Ok(MovePlan::Item { from, to, before })
}

/// Whether moving `list[from]` in front of `before` (or to the end) would
/// leave the order as it is
fn lands_in_place<T: Entity>(list: &[Arc<T>], from: usize, before: Option<&T::Id>) -> bool {
    match before {
        Some(id) => list.get(from + 1).is_some_and(|next| next.id() == id),
        None => from + 1 == list.len(),
    }
}

/// Insert before `before` when it is present, append otherwise
fn insert_before<T: Entity>(list: &mut Vec<Arc<T>>, entry: Arc<T>, before: Option<&T::Id>) {
    let idx = before
        .and_then(|id| position_of(list, id))
        .unwrap_or(list.len());
    list.insert(idx, entry);
}

fn group_mut(tree: &mut Dashboard, path: GroupPath) -> &mut Group {
    let column = Arc::make_mut(&mut tree.columns[path.column]);
    Arc::make_mut(&mut column.groups[path.group])
}

/// Build the new tree for a plan produced against `tree`
pub fn apply_plan(tree: &Dashboard, plan: &MovePlan) -> Dashboard {
    let mut next = tree.clone();

    match plan {
        MovePlan::Column { from, before } => {
            let column = next.columns.remove(*from);
            insert_before(&mut next.columns, column, before.as_ref());
        }
        MovePlan::Group { from, to_column, before } => {
            let group = Arc::make_mut(&mut next.columns[from.column]).groups.remove(from.group);
            let target = Arc::make_mut(&mut next.columns[*to_column]);
            insert_before(&mut target.groups, group, before.as_ref());
        }
        MovePlan::Item { from, to, before } => {
            let item = group_mut(&mut next, from.group_path()).items.remove(from.item);
            insert_before(&mut group_mut(&mut next, *to).items, item, before.as_ref());
        }
    }
    next
}

/// Plan and apply a move
pub fn try_move(tree: &Dashboard, entity: &DragEntity, target: &DropTarget) -> Result<Dashboard, MoveRejection> {
    let plan = plan_move(tree, entity, target)?;
    Ok(apply_plan(tree, &plan))
}

/// Dry run used for live drop feedback
pub fn check_move(tree: &Dashboard, entity: &DragEntity, target: &DropTarget) -> Result<(), MoveRejection> {
    plan_move(tree, entity, target).map(|_| ())
}

/// Move `entity` to `target`, returning the tree unchanged when the move is rejected
pub fn move_entity(tree: &Dashboard, entity: &DragEntity, target: &DropTarget) -> Dashboard {
    match try_move(tree, entity, target) {
        Ok(next) => next,
        Err(rejection) => {
            log::debug!("[DND] move of {:?} to {:?} rejected: {}", entity, target, rejection);
            tree.clone()
        }
    }
}
