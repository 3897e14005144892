//! Shared test trees.

use crate::domain::{Column, Dashboard, Group, Item, ItemBody, WidgetType};

/// Column A: G1 (links) [L1, L2]; column B: G2 (links, empty) and
/// H (Homey custom) [C1]; column C is empty.
pub fn scenario() -> Dashboard {
    Dashboard::new("home", "Home").with_columns([
        Column::new("A", "Left").with_groups([Group::links("G1", "Dev").with_items([
            Item::link("L1", "Rust", "https://rust-lang.org"),
            Item::link("L2", "Crates", "https://crates.io"),
        ])]),
        Column::new("B", "Right").with_groups([
            Group::links("G2", "Empty"),
            Group::widget("H", "Living room", WidgetType::HomeyCustom).with_items([Item::new(
                "C1",
                ItemBody::HomeyCapability {
                    device_id: "lamp".to_string(),
                    capability_id: "onoff".to_string(),
                    label: None,
                },
            )]),
        ]),
        Column::new("C", "Extra"),
    ])
}

pub fn item_ids(tree: &Dashboard, column: &str, group: &str) -> Vec<String> {
    tree.find_group(&column.into(), &group.into())
        .map(|g| g.items.iter().map(|i| i.id.to_string()).collect())
        .unwrap_or_default()
}
