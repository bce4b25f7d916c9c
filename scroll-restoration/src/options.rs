use core::num::NonZeroUsize;

use crate::{KeyStrategy, ScrollBehavior};

/// Configuration shared by the window and container restorers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestorerOptions {
    /// Scroll to top on fresh and replaced navigations.
    ///
    /// When disabled, those navigations leave the current offset untouched.
    pub force_top_on_fresh: bool,
}

impl Default for RestorerOptions {
    fn default() -> Self {
        Self {
            force_top_on_fresh: true,
        }
    }
}

impl RestorerOptions {
    pub fn with_force_top_on_fresh(mut self, force_top_on_fresh: bool) -> Self {
        self.force_top_on_fresh = force_top_on_fresh;
        self
    }
}

/// Which records a container restorer reads and writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainerScope {
    /// One record per container per route key: back/forward restores the offset the
    /// container had on that entry.
    #[default]
    PerEntry,
    /// One record per container, whatever entry is showing.
    Shared,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerOptions {
    pub scope: ContainerScope,
    pub restorer: RestorerOptions,
}

impl ContainerOptions {
    pub fn with_scope(mut self, scope: ContainerScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_force_top_on_fresh(mut self, force_top_on_fresh: bool) -> Self {
        self.restorer.force_top_on_fresh = force_top_on_fresh;
        self
    }
}

/// Configuration for [`crate::ScrollManager`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManagerOptions {
    pub key_strategy: KeyStrategy,
    pub window: RestorerOptions,
    /// Behavior used when scrolling a fragment target into view.
    pub fragment_behavior: ScrollBehavior,
    /// Optional LRU cap on the position store. Only bounds memory.
    pub store_capacity: Option<NonZeroUsize>,
}

impl ManagerOptions {
    pub fn with_key_strategy(mut self, key_strategy: KeyStrategy) -> Self {
        self.key_strategy = key_strategy;
        self
    }

    pub fn with_window(mut self, window: RestorerOptions) -> Self {
        self.window = window;
        self
    }

    pub fn with_force_top_on_fresh(mut self, force_top_on_fresh: bool) -> Self {
        self.window.force_top_on_fresh = force_top_on_fresh;
        self
    }

    pub fn with_fragment_behavior(mut self, fragment_behavior: ScrollBehavior) -> Self {
        self.fragment_behavior = fragment_behavior;
        self
    }

    pub fn with_store_capacity(mut self, store_capacity: Option<NonZeroUsize>) -> Self {
        self.store_capacity = store_capacity;
        self
    }
}
