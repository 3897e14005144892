//! Domain Layer
//!
//! Contains the dashboard tree entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod column;
mod dashboard;
mod entity;
mod group;
mod item;

pub use column::Column;
pub use dashboard::{Dashboard, Startpage};
pub use entity::{
    ButtonId, ColumnId, DashboardId, DomainError, DomainResult, Entity, GroupId, ItemId,
};
pub use group::{Group, GroupKind, WidgetType};
pub use item::{FlowButton, Item, ItemBody, ItemKind};
