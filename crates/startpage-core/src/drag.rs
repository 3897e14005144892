//! Drag descriptors shared by the gesture controller, hit tester and mutator.

use serde::{Deserialize, Serialize};

use crate::domain::{ColumnId, GroupId, ItemId};

/// The entity in flight during a drag session.
///
/// Only identities are recorded at press time; kinds and positions are
/// resolved against whatever tree is current when the drop happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "lowercase")]
pub enum DragEntity {
    Column {
        column_id: ColumnId,
    },
    Group {
        column_id: ColumnId,
        group_id: GroupId,
    },
    Item {
        column_id: ColumnId,
        group_id: GroupId,
        item_id: ItemId,
    },
}

impl DragEntity {
    pub fn column(column_id: impl Into<ColumnId>) -> Self {
        DragEntity::Column {
            column_id: column_id.into(),
        }
    }

    pub fn group(column_id: impl Into<ColumnId>, group_id: impl Into<GroupId>) -> Self {
        DragEntity::Group {
            column_id: column_id.into(),
            group_id: group_id.into(),
        }
    }

    pub fn item(
        column_id: impl Into<ColumnId>,
        group_id: impl Into<GroupId>,
        item_id: impl Into<ItemId>,
    ) -> Self {
        DragEntity::Item {
            column_id: column_id.into(),
            group_id: group_id.into(),
            item_id: item_id.into(),
        }
    }

    /// Which level of the tree is being reordered
    pub fn level(&self) -> DragLevel {
        match self {
            DragEntity::Column { .. } => DragLevel::Column,
            DragEntity::Group { .. } => DragLevel::Group,
            DragEntity::Item { .. } => DragLevel::Item,
        }
    }

    pub fn column_id(&self) -> &ColumnId {
        match self {
            DragEntity::Column { column_id }
            | DragEntity::Group { column_id, .. }
            | DragEntity::Item { column_id, .. } => column_id,
        }
    }
}

/// Granularity of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragLevel {
    Column,
    Group,
    Item,
}

/// Where a release would land the dragged entity.
///
/// The most specific id present wins: an item id means "insert before this
/// item", a group id alone means "append to this group". A target without a
/// column is the space after the last column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<ColumnId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<ItemId>,
}

impl DropTarget {
    pub fn column(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: Some(column_id.into()),
            group_id: None,
            item_id: None,
        }
    }

    /// Trailing zone: columns dropped here are appended
    pub fn after_last_column() -> Self {
        Self {
            column_id: None,
            group_id: None,
            item_id: None,
        }
    }

    pub fn group(column_id: impl Into<ColumnId>, group_id: impl Into<GroupId>) -> Self {
        Self {
            column_id: Some(column_id.into()),
            group_id: Some(group_id.into()),
            item_id: None,
        }
    }

    pub fn item(
        column_id: impl Into<ColumnId>,
        group_id: impl Into<GroupId>,
        item_id: impl Into<ItemId>,
    ) -> Self {
        Self {
            column_id: Some(column_id.into()),
            group_id: Some(group_id.into()),
            item_id: Some(item_id.into()),
        }
    }

    /// The part of this target a drag at `level` actually uses. A group
    /// dragged over an item lands before that item's group, so only the
    /// group zone should light up.
    pub fn narrowed_to(&self, level: DragLevel) -> DropTarget {
        match level {
            DragLevel::Column => DropTarget {
                column_id: self.column_id.clone(),
                group_id: None,
                item_id: None,
            },
            DragLevel::Group => DropTarget {
                column_id: self.column_id.clone(),
                group_id: self.group_id.clone(),
                item_id: None,
            },
            DragLevel::Item => self.clone(),
        }
    }

    /// Most specific level this target names
    pub fn level(&self) -> DragLevel {
        match (&self.group_id, &self.item_id) {
            (Some(_), Some(_)) => DragLevel::Item,
            (Some(_), None) => DragLevel::Group,
            _ => DragLevel::Column,
        }
    }
}

/// Live drop feedback: the target under the pointer and whether a release
/// there would be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropIndicator {
    pub target: DropTarget,
    pub accepted: bool,
}
