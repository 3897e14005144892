//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for every node of the dashboard tree.
//! All entities have a unique ID and are shareable across threads.

use thiserror::Error;

/// Core trait for all tree entities (dashboards, columns, groups, items)
pub trait Entity: Clone + Send + Sync {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + std::fmt::Debug + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
}

/// Declares a string-backed identifier newtype.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(
    /// Identifier of a dashboard
    DashboardId
);
define_id!(
    /// Identifier of a column
    ColumnId
);
define_id!(
    /// Identifier of a group
    GroupId
);
define_id!(
    /// Identifier of an item
    ItemId
);
define_id!(
    /// Identifier of a flow button nested in a button holder
    ButtonId
);
