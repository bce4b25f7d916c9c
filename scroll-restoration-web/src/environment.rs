use scroll_restoration::{ContainerId, ScrollBehavior, ScrollEnvironment, ScrollTarget};
use web_sys::Element;

use crate::{ElementTarget, WindowTarget, scroll_fragment_into_view};

/// [`ScrollEnvironment`] over the live DOM.
///
/// Container elements are attached by the components that render them and detached when
/// those components unmount.
#[derive(Clone, Debug, Default)]
pub struct DomEnvironment {
    window: Option<WindowTarget>,
    containers: Vec<(ContainerId, ElementTarget)>,
}

impl DomEnvironment {
    /// An environment over the current browser window (empty outside a browser).
    pub fn current() -> Self {
        Self {
            window: WindowTarget::current(),
            containers: Vec::new(),
        }
    }

    /// An environment with nothing attached.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn is_browser(&self) -> bool {
        self.window.is_some()
    }

    /// Attaches the element backing container `id`, returning the one it replaces.
    pub fn attach(&mut self, id: impl Into<ContainerId>, element: Element) -> Option<Element> {
        let id = id.into();
        let target = ElementTarget::new(element);
        match self.containers.iter_mut().find(|(cid, _)| *cid == id) {
            Some((_, slot)) => Some(core::mem::replace(slot, target).into_element()),
            None => {
                self.containers.push((id, target));
                None
            }
        }
    }

    pub fn detach(&mut self, id: &ContainerId) -> Option<Element> {
        let index = self.containers.iter().position(|(cid, _)| cid == id)?;
        Some(self.containers.remove(index).1.into_element())
    }

    pub fn is_attached(&self, id: &ContainerId) -> bool {
        self.containers.iter().any(|(cid, _)| cid == id)
    }
}

impl ScrollEnvironment for DomEnvironment {
    fn window(&mut self) -> Option<&mut dyn ScrollTarget> {
        self.window.as_mut().map(|w| w as &mut dyn ScrollTarget)
    }

    fn container(&mut self, id: &ContainerId) -> Option<&mut dyn ScrollTarget> {
        self.containers
            .iter_mut()
            .find(|(cid, _)| cid == id)
            .map(|(_, target)| target as &mut dyn ScrollTarget)
    }

    fn scroll_to_fragment(&mut self, fragment: &str, behavior: ScrollBehavior) -> bool {
        let Some(window) = self.window.as_ref() else {
            return false;
        };
        let Some(document) = window.window().document() else {
            return false;
        };
        scroll_fragment_into_view(&document, fragment, behavior)
    }
}
