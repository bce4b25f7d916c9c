use alloc::string::{String, ToString};

use crate::EntryKey;

/// The raw navigation signal reported by a router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavigationType {
    /// A new history entry was pushed.
    Push,
    /// The current history entry was replaced.
    Replace,
    /// The history pointer moved (back/forward) without creating an entry.
    Pop,
}

/// The logical outcome of a navigation, used to pick a restoration strategy.
///
/// `Fresh` and `Replaced` are handled identically; they stay distinct because routers
/// report them distinctly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavigationOutcome {
    Fresh,
    Replaced,
    Traversed,
}

impl NavigationOutcome {
    pub const fn classify(kind: NavigationType) -> Self {
        match kind {
            NavigationType::Push => Self::Fresh,
            NavigationType::Replace => Self::Replaced,
            NavigationType::Pop => Self::Traversed,
        }
    }

    /// Whether a saved offset is meaningful for this outcome.
    pub const fn restores_saved(self) -> bool {
        matches!(self, Self::Traversed)
    }
}

impl From<NavigationType> for NavigationOutcome {
    fn from(kind: NavigationType) -> Self {
        Self::classify(kind)
    }
}

/// A navigation committed by the router.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Navigation {
    pub entry: EntryKey,
    pub kind: NavigationType,
    /// Pathname of the new location (no query, no fragment).
    pub path: String,
    /// Fragment identifier without the leading `#`. Never empty.
    pub fragment: Option<String>,
    /// Keeps the current offset on fresh/replaced navigations instead of resetting to top.
    pub prevent_scroll_reset: bool,
}

impl Navigation {
    pub fn new(entry: impl Into<EntryKey>, kind: NavigationType) -> Self {
        Self {
            entry: entry.into(),
            kind,
            path: String::from("/"),
            fragment: None,
            prevent_scroll_reset: false,
        }
    }

    /// Builds a navigation from an href such as `/docs/hooks?tab=api#use-effect`.
    ///
    /// Scheme and authority, if present, are ignored; so is the authority of a
    /// protocol-relative href (`//cdn.example.com/x`).
    pub fn from_href(entry: impl Into<EntryKey>, kind: NavigationType, href: &str) -> Self {
        let (path, fragment) = split_href(href);
        Self::new(entry, kind)
            .with_path(path)
            .with_fragment(fragment)
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.path = if path.is_empty() {
            String::from("/")
        } else {
            path
        };
        self
    }

    pub fn with_fragment(mut self, fragment: Option<&str>) -> Self {
        self.fragment = fragment
            .map(|f| f.strip_prefix('#').unwrap_or(f))
            .filter(|f| !f.is_empty())
            .map(ToString::to_string);
        self
    }

    pub fn with_prevent_scroll_reset(mut self, prevent_scroll_reset: bool) -> Self {
        self.prevent_scroll_reset = prevent_scroll_reset;
        self
    }

    pub fn outcome(&self) -> NavigationOutcome {
        NavigationOutcome::classify(self.kind)
    }
}

/// Splits an href into `(pathname, fragment)`.
fn split_href(href: &str) -> (&str, Option<&str>) {
    let (rest, fragment) = match href.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (href, None),
    };
    let rest = rest.split_once('?').map_or(rest, |(path, _query)| path);
    let authority_and_path = match rest.split_once("://") {
        Some((_scheme, tail)) => Some(tail),
        None => rest.strip_prefix("//"),
    };
    let path = match authority_and_path {
        Some(tail) => tail.find('/').map_or("/", |i| &tail[i..]),
        None => rest,
    };
    (path, fragment)
}
