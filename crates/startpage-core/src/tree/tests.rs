//! Move scenarios across all three granularities.

use std::sync::Arc;

use proptest::prelude::*;

use super::*;
use crate::domain::{Column, Dashboard, Group, Item, ItemKind};
use crate::drag::{DragEntity, DropTarget};
use crate::fixtures::{item_ids, scenario};

fn group_ids(tree: &Dashboard, column: &str) -> Vec<String> {
    tree.find_column(&column.into())
        .map(|c| c.groups.iter().map(|g| g.id.to_string()).collect())
        .unwrap_or_default()
}

fn column_ids(tree: &Dashboard) -> Vec<String> {
    tree.columns.iter().map(|c| c.id.to_string()).collect()
}

#[test]
fn test_cross_group_move_and_back() {
    let tree = scenario();

    let moved = try_move(&tree, &DragEntity::item("A", "G1", "L1"), &DropTarget::group("B", "G2")).unwrap();
    assert_eq!(item_ids(&moved, "A", "G1"), vec!["L2"]);
    assert_eq!(item_ids(&moved, "B", "G2"), vec!["L1"]);

    let back = try_move(&moved, &DragEntity::item("B", "G2", "L1"), &DropTarget::item("A", "G1", "L2")).unwrap();
    assert_eq!(item_ids(&back, "A", "G1"), vec!["L1", "L2"]);
    assert!(item_ids(&back, "B", "G2").is_empty());
    assert_eq!(back, tree);
    assert!(back.validate().is_ok());
}

#[test]
fn test_self_drop_is_true_noop() {
    let tree = scenario();
    let entity = DragEntity::item("A", "G1", "L1");

    assert_eq!(
        try_move(&tree, &entity, &DropTarget::item("A", "G1", "L1")),
        Err(MoveRejection::SelfDrop)
    );
    let same = move_entity(&tree, &entity, &DropTarget::item("A", "G1", "L1"));
    assert_eq!(same, tree);
    assert!(Arc::ptr_eq(&same.columns[0], &tree.columns[0]));

    assert_eq!(
        try_move(&tree, &DragEntity::group("B", "G2"), &DropTarget::group("B", "G2")),
        Err(MoveRejection::SelfDrop)
    );
    assert_eq!(
        try_move(&tree, &DragEntity::column("A"), &DropTarget::item("A", "G1", "L2")),
        Err(MoveRejection::SelfDrop)
    );
}

#[test]
fn test_drop_in_front_of_next_sibling_keeps_order() {
    let tree = scenario();
    let entity = DragEntity::item("A", "G1", "L1");
    assert_eq!(
        try_move(&tree, &entity, &DropTarget::item("A", "G1", "L2")),
        Err(MoveRejection::Unchanged)
    );
    let next = move_entity(&tree, &entity, &DropTarget::item("A", "G1", "L2"));
    assert_eq!(next, tree);
    assert!(Arc::ptr_eq(&next.columns[0], &tree.columns[0]));
}

#[test]
fn test_drop_at_current_position_is_unchanged_at_every_level() {
    let tree = scenario();
    // Already last in its group / column / dashboard
    assert_eq!(
        try_move(&tree, &DragEntity::item("A", "G1", "L2"), &DropTarget::group("A", "G1")),
        Err(MoveRejection::Unchanged)
    );
    assert_eq!(
        try_move(&tree, &DragEntity::group("B", "H"), &DropTarget::column("B")),
        Err(MoveRejection::Unchanged)
    );
    assert_eq!(
        try_move(&tree, &DragEntity::group("B", "G2"), &DropTarget::item("B", "H", "C1")),
        Err(MoveRejection::Unchanged)
    );
    assert_eq!(
        try_move(&tree, &DragEntity::column("A"), &DropTarget::column("B")),
        Err(MoveRejection::Unchanged)
    );
    assert_eq!(
        try_move(&tree, &DragEntity::column("C"), &DropTarget::after_last_column()),
        Err(MoveRejection::Unchanged)
    );
}

#[test]
fn test_append_within_same_group() {
    let tree = scenario();
    let next = try_move(&tree, &DragEntity::item("A", "G1", "L1"), &DropTarget::group("A", "G1")).unwrap();
    assert_eq!(item_ids(&next, "A", "G1"), vec!["L2", "L1"]);
}

#[test]
fn test_incompatible_move_leaves_tree_untouched() {
    let tree = scenario();

    let link_into_homey = try_move(&tree, &DragEntity::item("A", "G1", "L1"), &DropTarget::group("B", "H"));
    assert_eq!(
        link_into_homey,
        Err(MoveRejection::Incompatible {
            kind: ItemKind::Link,
            group: "H".into()
        })
    );

    let capability_into_links = move_entity(&tree, &DragEntity::item("B", "H", "C1"), &DropTarget::group("A", "G1"));
    assert_eq!(capability_into_links, tree);
    for (before, after) in tree.columns.iter().zip(&capability_into_links.columns) {
        assert!(Arc::ptr_eq(before, after));
    }
}

#[test]
fn test_separator_goes_anywhere() {
    let mut tree = scenario();
    let col = Arc::make_mut(&mut tree.columns[0]);
    Arc::make_mut(&mut col.groups[0]).items.push(Arc::new(Item::separator("S1")));

    let next = try_move(&tree, &DragEntity::item("A", "G1", "S1"), &DropTarget::item("B", "H", "C1")).unwrap();
    assert_eq!(item_ids(&next, "B", "H"), vec!["S1", "C1"]);
}

#[test]
fn test_untouched_subtrees_are_shared() {
    let tree = scenario();
    let next = try_move(&tree, &DragEntity::item("A", "G1", "L2"), &DropTarget::item("A", "G1", "L1")).unwrap();

    assert_eq!(item_ids(&next, "A", "G1"), vec!["L2", "L1"]);
    assert!(!Arc::ptr_eq(&next.columns[0], &tree.columns[0]));
    assert!(Arc::ptr_eq(&next.columns[1], &tree.columns[1]));
    assert!(Arc::ptr_eq(&next.columns[2], &tree.columns[2]));
    // Items themselves are never copied
    let moved = &next.columns[0].groups[0].items[0];
    assert!(Arc::ptr_eq(moved, &tree.columns[0].groups[0].items[1]));
    // Old tree still intact
    assert_eq!(item_ids(&tree, "A", "G1"), vec!["L1", "L2"]);
}

#[test]
fn test_item_needs_group_level_target() {
    let tree = scenario();
    assert_eq!(
        try_move(&tree, &DragEntity::item("A", "G1", "L1"), &DropTarget::column("C")),
        Err(MoveRejection::MissingTargetGroup)
    );
}

#[test]
fn test_stale_references() {
    let tree = scenario();

    assert!(matches!(
        try_move(&tree, &DragEntity::item("A", "G1", "gone"), &DropTarget::group("B", "G2")),
        Err(MoveRejection::StaleSource(_))
    ));
    assert!(matches!(
        try_move(&tree, &DragEntity::item("A", "G1", "L1"), &DropTarget::group("B", "gone")),
        Err(MoveRejection::StaleTarget(_))
    ));
    assert!(matches!(
        try_move(&tree, &DragEntity::item("A", "G1", "L1"), &DropTarget::item("B", "G2", "L2")),
        Err(MoveRejection::StaleTarget(_))
    ));
    assert!(matches!(
        try_move(&tree, &DragEntity::column("Z"), &DropTarget::column("A")),
        Err(MoveRejection::StaleSource(_))
    ));
    assert!(matches!(
        try_move(&tree, &DragEntity::group("A", "G1"), &DropTarget::column("Z")),
        Err(MoveRejection::StaleTarget(_))
    ));
}

#[test]
fn test_dragged_item_found_after_concurrent_relocation() {
    let tree = scenario();
    // Recorded path says G1, but L1 has since moved to G2
    let relocated = try_move(&tree, &DragEntity::item("A", "G1", "L1"), &DropTarget::group("B", "G2")).unwrap();
    let next = try_move(&relocated, &DragEntity::item("A", "G1", "L1"), &DropTarget::item("A", "G1", "L2")).unwrap();
    assert_eq!(item_ids(&next, "A", "G1"), vec!["L1", "L2"]);
}

#[test]
fn test_group_moves() {
    let tree = scenario();

    let across = try_move(&tree, &DragEntity::group("B", "H"), &DropTarget::column("C")).unwrap();
    assert_eq!(group_ids(&across, "B"), vec!["G2"]);
    assert_eq!(group_ids(&across, "C"), vec!["H"]);

    let before = try_move(&tree, &DragEntity::group("A", "G1"), &DropTarget::item("B", "H", "C1")).unwrap();
    assert_eq!(group_ids(&before, "B"), vec!["G2", "G1", "H"]);
    assert!(group_ids(&before, "A").is_empty());

    let within = try_move(&tree, &DragEntity::group("B", "H"), &DropTarget::group("B", "G2")).unwrap();
    assert_eq!(group_ids(&within, "B"), vec!["H", "G2"]);
    assert!(Arc::ptr_eq(&within.columns[0], &tree.columns[0]));
}

#[test]
fn test_column_moves() {
    let tree = scenario();

    let next = try_move(&tree, &DragEntity::column("C"), &DropTarget::group("A", "G1")).unwrap();
    assert_eq!(column_ids(&next), vec!["C", "A", "B"]);

    let right = try_move(&tree, &DragEntity::column("A"), &DropTarget::column("C")).unwrap();
    assert_eq!(column_ids(&right), vec!["B", "A", "C"]);
    // Columns are moved, not copied
    assert!(Arc::ptr_eq(&right.columns[1], &tree.columns[0]));
}

#[test]
fn test_column_appended_after_last() {
    let tree = scenario();

    let last = try_move(&tree, &DragEntity::column("A"), &DropTarget::after_last_column()).unwrap();
    assert_eq!(column_ids(&last), vec!["B", "C", "A"]);
    assert!(Arc::ptr_eq(&last.columns[2], &tree.columns[0]));

    let middle = try_move(&tree, &DragEntity::column("B"), &DropTarget::after_last_column()).unwrap();
    assert_eq!(column_ids(&middle), vec!["A", "C", "B"]);
}

#[test]
fn test_trailing_zone_only_takes_columns() {
    let tree = scenario();
    assert_eq!(
        try_move(&tree, &DragEntity::group("A", "G1"), &DropTarget::after_last_column()),
        Err(MoveRejection::MissingTargetColumn)
    );
    assert_eq!(
        try_move(&tree, &DragEntity::item("A", "G1", "L1"), &DropTarget::after_last_column()),
        Err(MoveRejection::MissingTargetGroup)
    );
}

#[test]
fn test_check_move_matches_try_move() {
    let tree = scenario();
    let entity = DragEntity::item("A", "G1", "L1");
    assert!(check_move(&tree, &entity, &DropTarget::group("B", "G2")).is_ok());
    assert!(check_move(&tree, &entity, &DropTarget::group("B", "H")).is_err());
}

/// Simulated splice model of one ordered container
fn model_move(order: &mut Vec<String>, dragged: usize, before: Option<usize>) {
    if before == Some(dragged) {
        return;
    }
    let before_id = before.map(|b| order[b].clone());
    let id = order.remove(dragged);
    let idx = before_id
        .and_then(|b| order.iter().position(|x| *x == b))
        .unwrap_or(order.len());
    order.insert(idx, id);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn same_group_reorders_match_splice_model(
        len in 2usize..8,
        ops in proptest::collection::vec((0usize..8, proptest::option::of(0usize..8)), 1..16),
    ) {
        let items: Vec<Item> = (0..len).map(|i| Item::separator(format!("i{i}"))).collect();
        let mut tree = Dashboard::new("d", "D")
            .with_columns([Column::new("A", "A").with_groups([Group::links("G", "G").with_items(items)])]);
        let mut expected: Vec<String> = (0..len).map(|i| format!("i{i}")).collect();

        for (from, before) in ops {
            let from = from % len;
            let before = before.map(|b| b % len);

            let dragged = expected[from].clone();
            let target = match before {
                Some(b) => DropTarget::item("A", "G", expected[b].as_str()),
                None => DropTarget::group("A", "G"),
            };
            tree = move_entity(&tree, &DragEntity::item("A", "G", dragged.as_str()), &target);
            model_move(&mut expected, from, before);
        }

        prop_assert_eq!(item_ids(&tree, "A", "G"), expected);
        prop_assert!(tree.validate().is_ok());
    }
}
