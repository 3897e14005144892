//! DOM-backed element probe for the hit tester.

use startpage_core::hit_test::ElementProbe;
use startpage_core::Rect;

/// Reads the live document through `elementFromPoint`
#[derive(Clone, Copy, Debug, Default)]
pub struct DomProbe;

impl ElementProbe for DomProbe {
    type Element = web_sys::Element;

    fn element_at(&self, x: f64, y: f64) -> Option<web_sys::Element> {
        web_sys::window()?.document()?.element_from_point(x as f32, y as f32)
    }

    fn parent(&self, element: &web_sys::Element) -> Option<web_sys::Element> {
        element.parent_element()
    }

    fn attribute(&self, element: &web_sys::Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }
}

/// Bounding box of an element in client coordinates
pub fn element_rect(element: &web_sys::Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}
