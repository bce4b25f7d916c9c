use crate::restorer::Phases;
use crate::{
    KeyStrategy, Navigation, PositionStore, Restoration, RestorerOptions, ScrollPosition,
    ScrollTarget, StoreKey,
};

/// Saves and restores the document (window) scroll offset across navigations.
///
/// Drive it once per committed navigation:
/// 1. [`WindowRestorer::depart`] while the outgoing view is still on screen;
/// 2. [`WindowRestorer::arrive`] after the new view is in the DOM and before the browser
///    paints it.
///
/// Running arrival after paint makes the old offset flash for a frame; adapters must call
/// it from the earliest synchronous point after the DOM mutation.
#[derive(Clone, Debug, Default)]
pub struct WindowRestorer {
    phases: Phases,
    key_strategy: KeyStrategy,
}

impl WindowRestorer {
    pub fn new(options: RestorerOptions) -> Self {
        Self {
            phases: Phases::new(options),
            key_strategy: KeyStrategy::default(),
        }
    }

    pub fn with_key_strategy(mut self, key_strategy: KeyStrategy) -> Self {
        self.key_strategy = key_strategy;
        self
    }

    pub fn options(&self) -> RestorerOptions {
        self.phases.options()
    }

    pub fn set_options(&mut self, options: RestorerOptions) {
        self.phases.set_options(options);
    }

    pub fn key_strategy(&self) -> KeyStrategy {
        self.key_strategy
    }

    /// The store key for `navigation` under this restorer's key strategy.
    pub fn key_for(&self, navigation: &Navigation) -> StoreKey {
        StoreKey::window(self.key_strategy.route_key(navigation))
    }

    /// The key of the entry currently on screen, if any arrival has happened.
    pub fn current_key(&self) -> Option<&StoreKey> {
        self.phases.current()
    }

    /// Departure phase: records the outgoing offset.
    ///
    /// Returns the saved position, or `None` when there is no outgoing entry or the
    /// target is unavailable.
    pub fn depart<T: ScrollTarget + ?Sized>(
        &self,
        store: &mut PositionStore,
        target: &T,
    ) -> Option<ScrollPosition> {
        self.phases.depart(store, target)
    }

    /// Arrival phase: applies the offset for `navigation`.
    pub fn arrive<T: ScrollTarget + ?Sized>(
        &mut self,
        store: &PositionStore,
        navigation: &Navigation,
        target: &mut T,
    ) -> Restoration {
        let key = self.key_for(navigation);
        self.phases.arrive(store, key, navigation, target)
    }

    /// Runs both phases back to back.
    pub fn navigate<T: ScrollTarget + ?Sized>(
        &mut self,
        store: &mut PositionStore,
        navigation: &Navigation,
        target: &mut T,
    ) -> Restoration {
        self.depart(store, &*target);
        self.arrive(store, navigation, target)
    }
}
