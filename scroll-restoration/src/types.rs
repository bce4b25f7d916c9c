use alloc::string::String;
use core::fmt;

/// A scroll offset pair in CSS pixels.
///
/// For the window this is `(scrollX, scrollY)`; for an element it is
/// `(scrollLeft, scrollTop)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

impl ScrollPosition {
    /// The origin: what fresh navigations scroll to.
    pub const TOP: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_top(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Replaces non-finite components with `0`.
    ///
    /// Adapters occasionally report `NaN` while a document is being torn down.
    pub(crate) fn sanitized(self) -> Self {
        if self.x.is_finite() && self.y.is_finite() {
            return self;
        }
        rwarn!(x = self.x, y = self.y, "non-finite scroll position reported");
        Self {
            x: if self.x.is_finite() { self.x } else { 0.0 },
            y: if self.y.is_finite() { self.y } else { 0.0 },
        }
    }
}

/// How a fragment target is brought into view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Instant,
    Smooth,
}

/// Router-issued identifier of a history entry.
///
/// Distinct for every entry, even when two entries share a URL.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryKey(String);

impl EntryKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for EntryKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-chosen identity of an inner scroll region (sidebar, chat panel, ...).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContainerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ContainerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the arrival phase did to a scroll target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Restoration {
    /// Scrolled to [`ScrollPosition::TOP`].
    Reset,
    /// Scrolled to a previously saved position.
    Restored(ScrollPosition),
    /// Left the current offset untouched.
    Preserved,
    /// The target was not available (no window, ref not attached).
    Unavailable,
}

impl Restoration {
    /// The offset that was applied, if any.
    pub fn applied(&self) -> Option<ScrollPosition> {
        match self {
            Self::Reset => Some(ScrollPosition::TOP),
            Self::Restored(pos) => Some(*pos),
            Self::Preserved | Self::Unavailable => None,
        }
    }
}
