//! Tree Queries
//!
//! Read-only lookups over a dashboard. Every lookup reports absence with
//! `None`; callers treat that as a no-op signal.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{
    Column, ColumnId, Dashboard, DomainError, DomainResult, Entity, Group, GroupId, Item, ItemId,
};

/// Index of the entity with `id` in an ordered collection
pub fn position_of<T: Entity>(list: &[Arc<T>], id: &T::Id) -> Option<usize> {
    list.iter().position(|e| e.id() == id)
}

/// Column/group indices of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPath {
    pub column: usize,
    pub group: usize,
}

/// Column/group/item indices of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPath {
    pub column: usize,
    pub group: usize,
    pub item: usize,
}

impl ItemPath {
    pub fn group_path(&self) -> GroupPath {
        GroupPath {
            column: self.column,
            group: self.group,
        }
    }
}

impl Dashboard {
    pub fn column_index(&self, column_id: &ColumnId) -> Option<usize> {
        position_of(&self.columns, column_id)
    }

    pub fn find_column(&self, column_id: &ColumnId) -> Option<&Arc<Column>> {
        self.columns.iter().find(|c| &c.id == column_id)
    }

    pub fn find_group(&self, column_id: &ColumnId, group_id: &GroupId) -> Option<&Arc<Group>> {
        self.find_column(column_id)?.groups.iter().find(|g| &g.id == group_id)
    }

    pub fn find_item(&self, column_id: &ColumnId, group_id: &GroupId, item_id: &ItemId) -> Option<&Arc<Item>> {
        self.find_group(column_id, group_id)?.items.iter().find(|i| &i.id == item_id)
    }

    /// Path of a group within a known column
    pub fn group_path(&self, column_id: &ColumnId, group_id: &GroupId) -> Option<GroupPath> {
        let column = self.column_index(column_id)?;
        let group = position_of(&self.columns[column].groups, group_id)?;
        Some(GroupPath { column, group })
    }

    /// Path of an item within a known column and group
    pub fn item_path(&self, column_id: &ColumnId, group_id: &GroupId, item_id: &ItemId) -> Option<ItemPath> {
        let gp = self.group_path(column_id, group_id)?;
        let item = position_of(&self.group_at(gp).items, item_id)?;
        Some(ItemPath {
            column: gp.column,
            group: gp.group,
            item,
        })
    }

    /// Find a group anywhere in the dashboard
    pub fn locate_group(&self, group_id: &GroupId) -> Option<GroupPath> {
        self.columns.iter().enumerate().find_map(|(column, c)| {
            position_of(&c.groups, group_id).map(|group| GroupPath { column, group })
        })
    }

    /// Find an item anywhere in the dashboard
    pub fn locate_item(&self, item_id: &ItemId) -> Option<ItemPath> {
        self.columns.iter().enumerate().find_map(|(column, c)| {
            c.groups.iter().enumerate().find_map(|(group, g)| {
                position_of(&g.items, item_id).map(|item| ItemPath { column, group, item })
            })
        })
    }

    pub fn group_at(&self, path: GroupPath) -> &Arc<Group> {
        &self.columns[path.column].groups[path.group]
    }

    pub fn item_at(&self, path: ItemPath) -> &Arc<Item> {
        &self.group_at(path.group_path()).items[path.item]
    }

    pub fn group_count(&self) -> usize {
        self.columns.iter().map(|c| c.groups.len()).sum()
    }

    pub fn item_count(&self) -> usize {
        self.columns
            .iter()
            .flat_map(|c| c.groups.iter())
            .map(|g| g.items.len())
            .sum()
    }

    /// Check that every id (columns, groups, items, nested buttons) is unique
    pub fn validate(&self) -> DomainResult<()> {
        let mut seen = HashSet::new();
        let mut check = |id: &str| {
            if seen.insert(id.to_string()) {
                Ok(())
            } else {
                Err(DomainError::DuplicateId(id.to_string()))
            }
        };

        for column in &self.columns {
            check(column.id.as_str())?;
            for group in &column.groups {
                check(group.id.as_str())?;
                for item in &group.items {
                    check(item.id.as_str())?;
                    for button in item.buttons() {
                        check(button.id.as_str())?;
                    }
                }
            }
        }
        Ok(())
    }
}
