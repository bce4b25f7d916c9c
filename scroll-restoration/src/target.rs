use crate::{ContainerId, ScrollBehavior, ScrollPosition};

/// Something with a scroll offset: the window, or a scrollable element.
pub trait ScrollTarget {
    /// The current offset, or `None` when the target is not available.
    fn scroll_position(&self) -> Option<ScrollPosition>;

    /// Jumps to `position` without animation.
    ///
    /// Returns `false` when the target is not available.
    fn scroll_to(&mut self, position: ScrollPosition) -> bool;
}

impl<T: ScrollTarget + ?Sized> ScrollTarget for &mut T {
    fn scroll_position(&self) -> Option<ScrollPosition> {
        (**self).scroll_position()
    }

    fn scroll_to(&mut self, position: ScrollPosition) -> bool {
        (**self).scroll_to(position)
    }
}

/// The rendering context the manager operates on.
///
/// Every accessor may come back empty (server rendering, a ref not attached yet, a
/// fragment with no matching element); the manager treats that as a no-op.
pub trait ScrollEnvironment {
    fn window(&mut self) -> Option<&mut dyn ScrollTarget>;

    fn container(&mut self, id: &ContainerId) -> Option<&mut dyn ScrollTarget>;

    /// Brings the element identified by `fragment` into view.
    ///
    /// Returns `false` if no such element exists.
    fn scroll_to_fragment(&mut self, fragment: &str, behavior: ScrollBehavior) -> bool;
}

/// An environment with nothing to scroll, e.g. a non-browser execution context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Headless;

impl ScrollEnvironment for Headless {
    fn window(&mut self) -> Option<&mut dyn ScrollTarget> {
        None
    }

    fn container(&mut self, _id: &ContainerId) -> Option<&mut dyn ScrollTarget> {
        None
    }

    fn scroll_to_fragment(&mut self, _fragment: &str, _behavior: ScrollBehavior) -> bool {
        false
    }
}

/// Stand-in for a target the environment could not provide.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Unattached;

impl ScrollTarget for Unattached {
    fn scroll_position(&self) -> Option<ScrollPosition> {
        None
    }

    fn scroll_to(&mut self, _position: ScrollPosition) -> bool {
        false
    }
}
