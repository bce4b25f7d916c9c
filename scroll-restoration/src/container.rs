use crate::restorer::Phases;
use crate::{
    ContainerId, ContainerOptions, ContainerScope, KeyStrategy, Navigation, PositionStore,
    Restoration, ScrollPosition, ScrollTarget, StoreKey,
};

/// [`crate::WindowRestorer`] for an inner scroll region.
///
/// A container has no navigation identity of its own, so it is keyed by a caller-chosen
/// [`ContainerId`]. Several containers can be restored on the same route, each with its
/// own id.
#[derive(Clone, Debug)]
pub struct ContainerRestorer {
    id: ContainerId,
    scope: ContainerScope,
    key_strategy: KeyStrategy,
    phases: Phases,
}

impl ContainerRestorer {
    pub fn new(id: impl Into<ContainerId>, options: ContainerOptions) -> Self {
        Self {
            id: id.into(),
            scope: options.scope,
            key_strategy: KeyStrategy::default(),
            phases: Phases::new(options.restorer),
        }
    }

    pub fn with_key_strategy(mut self, key_strategy: KeyStrategy) -> Self {
        self.key_strategy = key_strategy;
        self
    }

    pub fn id(&self) -> &ContainerId {
        &self.id
    }

    pub fn options(&self) -> ContainerOptions {
        ContainerOptions {
            scope: self.scope,
            restorer: self.phases.options(),
        }
    }

    pub fn key_for(&self, navigation: &Navigation) -> StoreKey {
        let route = match self.scope {
            ContainerScope::PerEntry => Some(self.key_strategy.route_key(navigation)),
            ContainerScope::Shared => None,
        };
        StoreKey::container(self.id.clone(), route)
    }

    pub fn current_key(&self) -> Option<&StoreKey> {
        self.phases.current()
    }

    pub fn depart<T: ScrollTarget + ?Sized>(
        &self,
        store: &mut PositionStore,
        target: &T,
    ) -> Option<ScrollPosition> {
        self.phases.depart(store, target)
    }

    pub fn arrive<T: ScrollTarget + ?Sized>(
        &mut self,
        store: &PositionStore,
        navigation: &Navigation,
        target: &mut T,
    ) -> Restoration {
        let key = self.key_for(navigation);
        self.phases.arrive(store, key, navigation, target)
    }

    pub fn navigate<T: ScrollTarget + ?Sized>(
        &mut self,
        store: &mut PositionStore,
        navigation: &Navigation,
        target: &mut T,
    ) -> Restoration {
        self.depart(store, &*target);
        self.arrive(store, navigation, target)
    }

    /// Marks the container as not showing anything, e.g. after its element unmounted.
    pub(crate) fn detach(&mut self) {
        self.phases.forget_current();
    }
}
