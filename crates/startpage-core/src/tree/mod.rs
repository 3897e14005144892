//! Tree Model and Mutations
//!
//! Read-only queries over a dashboard plus the move algorithm shared by the
//! column, group and item levels.

mod mutator;
mod query;

#[cfg(test)]
mod tests;

pub use mutator::{apply_plan, check_move, move_entity, plan_move, try_move, MovePlan, MoveRejection};
pub use query::{position_of, GroupPath, ItemPath};
