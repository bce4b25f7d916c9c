#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::{ContainerId, EntryKey, Navigation};

#[cfg(feature = "std")]
pub(crate) type KeyMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyMap<K, V> = BTreeMap<K, V>;

/// How window records are keyed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyStrategy {
    /// One record per history entry (revisits of a URL are distinct).
    #[default]
    Entry,
    /// One record per pathname, shared by every entry that shows it.
    Path,
}

impl KeyStrategy {
    pub fn route_key(self, navigation: &Navigation) -> RouteKey {
        match self {
            Self::Entry => RouteKey::Entry(navigation.entry.clone()),
            Self::Path => RouteKey::Path(navigation.path.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteKey {
    Entry(EntryKey),
    Path(String),
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry(entry) => write!(f, "entry:{entry}"),
            Self::Path(path) => write!(f, "path:{path}"),
        }
    }
}

/// A key in the [`crate::PositionStore`].
///
/// Window and container records live in separate variants, so a container id can never
/// alias a navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StoreKey {
    Window(RouteKey),
    Container {
        id: ContainerId,
        /// `None` for containers whose offset is shared across entries.
        route: Option<RouteKey>,
    },
}

impl StoreKey {
    pub fn window(route: RouteKey) -> Self {
        Self::Window(route)
    }

    pub fn container(id: ContainerId, route: Option<RouteKey>) -> Self {
        Self::Container { id, route }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window(route) => write!(f, "window@{route}"),
            Self::Container { id, route: None } => write!(f, "container:{id}"),
            Self::Container {
                id,
                route: Some(route),
            } => write!(f, "container:{id}@{route}"),
        }
    }
}
