use crate::{Navigation, ScrollBehavior, ScrollEnvironment};

/// Result of fragment resolution for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FragmentResolution {
    /// The navigation had no fragment.
    NoFragment,
    /// The fragment names no element; the restored offset stands.
    Dangling,
    /// The fragment target was scrolled into view, overriding the restored offset.
    Scrolled,
}

/// Scrolls the element named by a navigation's fragment into view.
///
/// Runs after offset restoration. A dangling fragment is a content problem, not a
/// runtime fault: it is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FragmentResolver {
    behavior: ScrollBehavior,
}

impl FragmentResolver {
    pub fn new(behavior: ScrollBehavior) -> Self {
        Self { behavior }
    }

    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    pub fn resolve<E: ScrollEnvironment + ?Sized>(
        &self,
        navigation: &Navigation,
        env: &mut E,
    ) -> FragmentResolution {
        let Some(fragment) = navigation.fragment.as_deref() else {
            return FragmentResolution::NoFragment;
        };
        if env.scroll_to_fragment(fragment, self.behavior) {
            rtrace!(fragment, "fragment target scrolled into view");
            FragmentResolution::Scrolled
        } else {
            rdebug!(fragment, "dangling fragment");
            FragmentResolution::Dangling
        }
    }
}
