//! Group Entity
//!
//! A group is a typed container of items inside a column.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::entity::{Entity, GroupId};
use super::item::Item;

/// Coarse group type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// Plain bookmark group
    #[default]
    Links,
    /// Group rendered by a widget
    Widget,
}

/// Widget that renders a widget group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetType {
    HomeyCustom,
    Homey,
    Weather,
    Clock,
    Calculator,
    Rss,
    Radio,
    Notes,
    /// Widget types this build does not know about
    #[serde(other)]
    Unknown,
}

/// A group of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub kind: GroupKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_type: Option<WidgetType>,
    #[serde(default)]
    pub items: Vec<Arc<Item>>,
}

impl Group {
    /// Create an empty links group
    pub fn links(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: GroupKind::Links,
            widget_type: None,
            items: Vec::new(),
        }
    }

    /// Create an empty widget group
    pub fn widget(id: impl Into<GroupId>, name: impl Into<String>, widget_type: WidgetType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: GroupKind::Widget,
            widget_type: Some(widget_type),
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items = items.into_iter().map(Arc::new).collect();
        self
    }

    /// A group without a widget type is treated as a links group
    pub fn accepts_links(&self) -> bool {
        self.kind == GroupKind::Links || self.widget_type.is_none()
    }

    pub fn is_homey_custom(&self) -> bool {
        self.widget_type == Some(WidgetType::HomeyCustom)
    }
}

impl Entity for Group {
    type Id = GroupId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
