//! Column Entity

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::entity::{ColumnId, Entity};
use super::group::Group;

fn default_width() -> u32 {
    320
}

/// A dashboard column; columns are laid out left to right in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    /// Width in CSS pixels
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default)]
    pub groups: Vec<Arc<Group>>,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width: default_width(),
            groups: Vec::new(),
        }
    }

    pub fn with_groups(mut self, groups: impl IntoIterator<Item = Group>) -> Self {
        self.groups = groups.into_iter().map(Arc::new).collect();
        self
    }
}

impl Entity for Column {
    type Id = ColumnId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
