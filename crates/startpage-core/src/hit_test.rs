//! Hit Testing
//!
//! Resolves screen coordinates to a logical drop location. The element tree
//! is abstracted behind [`ElementProbe`] so the same resolution runs against
//! the real DOM in the browser and against a canned layout in tests.

use crate::domain::{ColumnId, GroupId, ItemId};
use crate::drag::DropTarget;

/// Marks an element as a drop zone; value is `column`, `group`, `item`, or
/// `end` for the space after the last column
pub const ATTR_DROP_ZONE: &str = "data-drop-zone";
pub const ATTR_COLUMN_ID: &str = "data-column-id";
pub const ATTR_GROUP_ID: &str = "data-group-id";
pub const ATTR_ITEM_ID: &str = "data-item-id";

/// Ancestor walks stop here; real documents are far shallower.
const MAX_ANCESTOR_DEPTH: usize = 128;

/// Anything that can turn a pointer position into a drop target
pub trait DropTargetResolver {
    fn resolve_drop_target(&self, x: f64, y: f64) -> Option<DropTarget>;
}

impl<F> DropTargetResolver for F
where
    F: Fn(f64, f64) -> Option<DropTarget>,
{
    fn resolve_drop_target(&self, x: f64, y: f64) -> Option<DropTarget> {
        self(x, y)
    }
}

/// Minimal read-only view of a rendered element tree
pub trait ElementProbe {
    type Element;

    /// Topmost rendered element at the given client coordinates
    fn element_at(&self, x: f64, y: f64) -> Option<Self::Element>;

    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
}

/// Granularity a drop zone is marked with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneLevel {
    End,
    Column,
    Group,
    Item,
}

impl ZoneLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "end" => Some(ZoneLevel::End),
            "column" => Some(ZoneLevel::Column),
            "group" => Some(ZoneLevel::Group),
            "item" => Some(ZoneLevel::Item),
            _ => None,
        }
    }
}

/// Ancestor-walking resolver.
///
/// The first marked ancestor is the innermost one, so item zones win over
/// group zones, which win over column zones.
pub struct HitTester<P> {
    probe: P,
}

impl<P: ElementProbe> HitTester<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Read the descriptor off a marked element. Malformed zones yield None.
    fn read_zone(&self, element: &P::Element, level: ZoneLevel) -> Option<DropTarget> {
        let attr = |name: &str| self.probe.attribute(element, name).filter(|v| !v.is_empty());

        let column_id = || attr(ATTR_COLUMN_ID).map(ColumnId::from);
        let group_id = || attr(ATTR_GROUP_ID).map(GroupId::from);
        match level {
            ZoneLevel::End => Some(DropTarget::after_last_column()),
            ZoneLevel::Column => Some(DropTarget::column(column_id()?)),
            ZoneLevel::Group => Some(DropTarget::group(column_id()?, group_id()?)),
            ZoneLevel::Item => Some(DropTarget::item(
                column_id()?,
                group_id()?,
                ItemId::from(attr(ATTR_ITEM_ID)?),
            )),
        }
    }
}

impl<P: ElementProbe> DropTargetResolver for HitTester<P> {
    fn resolve_drop_target(&self, x: f64, y: f64) -> Option<DropTarget> {
        let mut current = self.probe.element_at(x, y);
        let mut depth = 0;

        while let Some(element) = current {
            if depth >= MAX_ANCESTOR_DEPTH {
                break;
            }
            if let Some(marker) = self.probe.attribute(&element, ATTR_DROP_ZONE) {
                match ZoneLevel::parse(&marker).and_then(|level| self.read_zone(&element, level)) {
                    Some(target) => return Some(target),
                    None => log::debug!("[DND] ignoring malformed drop zone marker {:?}", marker),
                }
            }
            current = self.probe.parent(&element);
            depth += 1;
        }
        None
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Canned layout used by hit-test and gesture tests.

    use super::*;
    use crate::geometry::{Point, Rect};

    pub struct FakeNode {
        pub rect: Rect,
        pub parent: Option<usize>,
        pub attrs: Vec<(&'static str, String)>,
    }

    /// Nodes are painted in insertion order; later nodes are on top.
    #[derive(Default)]
    pub struct FakeLayout {
        pub nodes: Vec<FakeNode>,
    }

    impl FakeLayout {
        pub fn add(&mut self, rect: Rect, parent: Option<usize>, attrs: &[(&'static str, &str)]) -> usize {
            self.nodes.push(FakeNode {
                rect,
                parent,
                attrs: attrs.iter().map(|(k, v)| (*k, v.to_string())).collect(),
            });
            self.nodes.len() - 1
        }
    }

    impl ElementProbe for FakeLayout {
        type Element = usize;

        fn element_at(&self, x: f64, y: f64) -> Option<usize> {
            let p = Point::new(x, y);
            self.nodes.iter().rposition(|n| n.rect.contains(p))
        }

        fn parent(&self, element: &usize) -> Option<usize> {
            self.nodes.get(*element)?.parent
        }

        fn attribute(&self, element: &usize, name: &str) -> Option<String> {
            self.nodes
                .get(*element)?
                .attrs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.clone())
        }
    }

    /// Column A (x 0..300) holding group G1 with items L1, L2;
    /// column B (x 300..600) holding empty group G2; trailing zone at x 600..700.
    pub fn two_column_layout() -> FakeLayout {
        let mut layout = FakeLayout::default();
        let root = layout.add(Rect::new(0.0, 0.0, 1000.0, 1000.0), None, &[]);

        let col_a = layout.add(
            Rect::new(0.0, 0.0, 300.0, 800.0),
            Some(root),
            &[(ATTR_DROP_ZONE, "column"), (ATTR_COLUMN_ID, "A")],
        );
        let g1 = layout.add(
            Rect::new(0.0, 40.0, 300.0, 200.0),
            Some(col_a),
            &[(ATTR_DROP_ZONE, "group"), (ATTR_COLUMN_ID, "A"), (ATTR_GROUP_ID, "G1")],
        );
        for (i, id) in ["L1", "L2"].iter().enumerate() {
            let row = layout.add(
                Rect::new(0.0, 80.0 + 40.0 * i as f64, 300.0, 40.0),
                Some(g1),
                &[
                    (ATTR_DROP_ZONE, "item"),
                    (ATTR_COLUMN_ID, "A"),
                    (ATTR_GROUP_ID, "G1"),
                    (ATTR_ITEM_ID, id),
                ],
            );
            // Unmarked label inside the row, on top of it
            layout.add(Rect::new(10.0, 85.0 + 40.0 * i as f64, 100.0, 20.0), Some(row), &[]);
        }

        let col_b = layout.add(
            Rect::new(300.0, 0.0, 300.0, 800.0),
            Some(root),
            &[(ATTR_DROP_ZONE, "column"), (ATTR_COLUMN_ID, "B")],
        );
        layout.add(
            Rect::new(300.0, 40.0, 300.0, 200.0),
            Some(col_b),
            &[(ATTR_DROP_ZONE, "group"), (ATTR_COLUMN_ID, "B"), (ATTR_GROUP_ID, "G2")],
        );
        layout.add(Rect::new(600.0, 0.0, 100.0, 800.0), Some(root), &[(ATTR_DROP_ZONE, "end")]);
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::fake::*;
    use super::*;
    use crate::geometry::Rect;

    #[test]
    fn test_most_specific_zone_wins() {
        let hit = HitTester::new(two_column_layout());

        // On the label inside L2's row
        assert_eq!(hit.resolve_drop_target(20.0, 130.0), Some(DropTarget::item("A", "G1", "L2")));
        // Empty space inside G2
        assert_eq!(hit.resolve_drop_target(400.0, 100.0), Some(DropTarget::group("B", "G2")));
        // Column space below every group
        assert_eq!(hit.resolve_drop_target(400.0, 500.0), Some(DropTarget::column("B")));
        // Trailing zone after the last column
        assert_eq!(hit.resolve_drop_target(650.0, 100.0), Some(DropTarget::after_last_column()));
    }

    #[test]
    fn test_no_droppable_ancestor() {
        let hit = HitTester::new(two_column_layout());
        assert_eq!(hit.resolve_drop_target(800.0, 900.0), None);
        assert_eq!(hit.resolve_drop_target(-5.0, -5.0), None);
    }

    #[test]
    fn test_malformed_zone_falls_through_to_ancestor() {
        let mut layout = FakeLayout::default();
        let col = layout.add(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            None,
            &[(ATTR_DROP_ZONE, "column"), (ATTR_COLUMN_ID, "C")],
        );
        // Item zone missing its group id
        layout.add(
            Rect::new(0.0, 0.0, 50.0, 50.0),
            Some(col),
            &[(ATTR_DROP_ZONE, "item"), (ATTR_COLUMN_ID, "C"), (ATTR_ITEM_ID, "x")],
        );
        let hit = HitTester::new(layout);
        assert_eq!(hit.resolve_drop_target(10.0, 10.0), Some(DropTarget::column("C")));
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |x: f64, _y: f64| (x > 0.0).then(|| DropTarget::column("A"));
        assert!(resolver.resolve_drop_target(1.0, 0.0).is_some());
        assert!(resolver.resolve_drop_target(-1.0, 0.0).is_none());
    }
}
