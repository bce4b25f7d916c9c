use scroll_restoration::{ScrollPosition, ScrollTarget};
use web_sys::{Element, Window};

/// The browser window, or `None` outside a browser.
///
/// On non-wasm targets `web-sys` bindings cannot be called at all, so this never touches
/// them there.
pub fn browser_window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// `window.scrollX` / `window.scrollY`.
#[derive(Clone, Debug)]
pub struct WindowTarget {
    window: Window,
}

impl WindowTarget {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// The current browser window, if there is one.
    pub fn current() -> Option<Self> {
        browser_window().map(Self::new)
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl ScrollTarget for WindowTarget {
    fn scroll_position(&self) -> Option<ScrollPosition> {
        let x = self.window.scroll_x().ok()?;
        let y = self.window.scroll_y().ok()?;
        Some(ScrollPosition::new(x, y))
    }

    fn scroll_to(&mut self, position: ScrollPosition) -> bool {
        self.window.scroll_to_with_x_and_y(position.x, position.y);
        true
    }
}

/// `element.scrollLeft` / `element.scrollTop` of a scrollable element.
///
/// A disconnected element counts as unavailable.
#[derive(Clone, Debug)]
pub struct ElementTarget {
    element: Element,
}

impl ElementTarget {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn into_element(self) -> Element {
        self.element
    }
}

impl ScrollTarget for ElementTarget {
    fn scroll_position(&self) -> Option<ScrollPosition> {
        if !self.element.is_connected() {
            return None;
        }
        Some(ScrollPosition::new(
            f64::from(self.element.scroll_left()),
            f64::from(self.element.scroll_top()),
        ))
    }

    fn scroll_to(&mut self, position: ScrollPosition) -> bool {
        if !self.element.is_connected() {
            return false;
        }
        self.element.scroll_to_with_x_and_y(position.x, position.y);
        true
    }
}
