use scroll_restoration::ScrollBehavior;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollIntoViewOptions};

/// Finds the element a fragment refers to: `id` first, then `<a name>`.
///
/// The percent-decoded fragment is tried before the raw one, so both `#caf%C3%A9` and
/// `#café` reach `id="café"`.
pub fn locate_fragment(document: &Document, fragment: &str) -> Option<Element> {
    let decoded = js_sys::decode_uri_component(fragment)
        .ok()
        .map(String::from)
        .filter(|decoded| decoded != fragment);
    decoded
        .iter()
        .map(String::as_str)
        .chain(core::iter::once(fragment))
        .find_map(|candidate| find_by_id_or_name(document, candidate))
}

fn find_by_id_or_name(document: &Document, name: &str) -> Option<Element> {
    if name.is_empty() {
        return None;
    }
    if let Some(element) = document.get_element_by_id(name) {
        return Some(element);
    }
    let named = document.get_elements_by_name(name);
    (0..named.length())
        .filter_map(|i| named.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .find(|element| element.tag_name().eq_ignore_ascii_case("a"))
}

/// Scrolls the fragment target into view. Returns `false` for a dangling fragment.
pub fn scroll_fragment_into_view(
    document: &Document,
    fragment: &str,
    behavior: ScrollBehavior,
) -> bool {
    let Some(element) = locate_fragment(document, fragment) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(match behavior {
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
