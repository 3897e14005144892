//! Floating drag ghost.

use startpage_core::Point;
use wasm_bindgen::JsCast;

/// A detached clone of the dragged element that follows the pointer.
/// Removed from the document when dropped.
pub(crate) struct Ghost {
    node: web_sys::HtmlElement,
}

impl Ghost {
    pub(crate) fn spawn(source: &web_sys::Element, origin: Point, width: f64, height: f64, opacity: f64) -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        let node = source
            .clone_node_with_deep(true)
            .ok()?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;

        // The clone must never be hit-tested as a drop zone
        let _ = node.remove_attribute("data-drop-zone");
        let _ = node.remove_attribute("id");
        let _ = node.class_list().add_1("drag-ghost");

        let style = node.style();
        for (prop, value) in [
            ("position", "fixed".to_string()),
            ("margin", "0".to_string()),
            ("box-sizing", "border-box".to_string()),
            ("pointer-events", "none".to_string()),
            ("z-index", "10000".to_string()),
            ("width", format!("{}px", width)),
            ("height", format!("{}px", height)),
            ("opacity", opacity.to_string()),
        ] {
            let _ = style.set_property(prop, &value);
        }

        body.append_child(&node).ok()?;
        let ghost = Self { node };
        ghost.move_to(origin);
        Some(ghost)
    }

    pub(crate) fn move_to(&self, origin: Point) {
        let style = self.node.style();
        let _ = style.set_property("left", &format!("{}px", origin.x));
        let _ = style.set_property("top", &format!("{}px", origin.y));
    }
}

impl Drop for Ghost {
    fn drop(&mut self) {
        self.node.remove();
    }
}

/// Document-wide "drag in progress" marker: suppresses text selection and
/// shows a grabbing cursor everywhere.
pub(crate) fn set_drag_marker(active: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let _ = if active {
        classes.add_1(crate::DRAG_ACTIVE_CLASS)
    } else {
        classes.remove_1(crate::DRAG_ACTIVE_CLASS)
    };

    if let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() {
        let style = root.style();
        if active {
            let _ = style.set_property("user-select", "none");
            let _ = style.set_property("-webkit-user-select", "none");
            let _ = style.set_property("cursor", "grabbing");
        } else {
            let _ = style.remove_property("user-select");
            let _ = style.remove_property("-webkit-user-select");
            let _ = style.remove_property("cursor");
        }
    }
}

pub(crate) fn haptic_pulse(duration_ms: u32) {
    if let Some(win) = web_sys::window() {
        let _ = win.navigator().vibrate_with_duration(duration_ms);
    }
}
