//! Item Entity
//!
//! Items are the leaves of the dashboard tree. Each item is a tagged variant;
//! the variant decides which groups the item may live in.

use serde::{Deserialize, Serialize};

use super::entity::{ButtonId, Entity, ItemId};

/// Discriminant of an item variant, used by the compatibility policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Link,
    Separator,
    Text,
    ButtonHolder,
    HomeyCapability,
    HomeyFlow,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Link => "link",
            ItemKind::Separator => "separator",
            ItemKind::Text => "text",
            ItemKind::ButtonHolder => "button_holder",
            ItemKind::HomeyCapability => "homey_capability",
            ItemKind::HomeyFlow => "homey_flow",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A button that triggers a Homey flow, nested inside a button holder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowButton {
    pub id: ButtonId,
    pub label: String,
    pub flow_id: String,
}

/// Variant payload of an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemBody {
    #[serde(rename_all = "camelCase")]
    Link {
        title: String,
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
    Separator,
    Text {
        text: String,
    },
    ButtonHolder {
        #[serde(default)]
        buttons: Vec<FlowButton>,
    },
    #[serde(rename_all = "camelCase")]
    HomeyCapability {
        device_id: String,
        capability_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    HomeyFlow {
        flow_id: String,
        name: String,
    },
}

/// A dashboard item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Variant payload
    #[serde(flatten)]
    pub body: ItemBody,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, body: ItemBody) -> Self {
        Self { id: id.into(), body }
    }

    pub fn link(id: impl Into<ItemId>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(
            id,
            ItemBody::Link {
                title: title.into(),
                url: url.into(),
                icon: None,
            },
        )
    }

    pub fn separator(id: impl Into<ItemId>) -> Self {
        Self::new(id, ItemBody::Separator)
    }

    pub fn text(id: impl Into<ItemId>, text: impl Into<String>) -> Self {
        Self::new(id, ItemBody::Text { text: text.into() })
    }

    pub fn kind(&self) -> ItemKind {
        match &self.body {
            ItemBody::Link { .. } => ItemKind::Link,
            ItemBody::Separator => ItemKind::Separator,
            ItemBody::Text { .. } => ItemKind::Text,
            ItemBody::ButtonHolder { .. } => ItemKind::ButtonHolder,
            ItemBody::HomeyCapability { .. } => ItemKind::HomeyCapability,
            ItemBody::HomeyFlow { .. } => ItemKind::HomeyFlow,
        }
    }

    /// Nested flow buttons (empty for every variant but button holders)
    pub fn buttons(&self) -> &[FlowButton] {
        match &self.body {
            ItemBody::ButtonHolder { buttons } => buttons,
            _ => &[],
        }
    }

    /// Short human-readable label for rendering and ghosts
    pub fn label(&self) -> &str {
        match &self.body {
            ItemBody::Link { title, .. } => title,
            ItemBody::Separator => "",
            ItemBody::Text { text } => text,
            ItemBody::ButtonHolder { .. } => "Buttons",
            ItemBody::HomeyCapability { label, capability_id, .. } => {
                label.as_deref().unwrap_or(capability_id)
            }
            ItemBody::HomeyFlow { name, .. } => name,
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
