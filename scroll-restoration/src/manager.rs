use alloc::vec::Vec;

use crate::target::Unattached;
use crate::{
    ContainerId, ContainerOptions, ContainerRestorer, FragmentResolution, FragmentResolver,
    ManagerOptions, Navigation, NavigationOutcome, PositionStore, Restoration, ScrollEnvironment,
    ScrollPosition, WindowRestorer,
};

/// What [`ScrollManager::arrive`] did for one navigation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationReport {
    pub outcome: NavigationOutcome,
    pub window: Restoration,
    /// One entry per registered container, in registration order.
    pub containers: Vec<(ContainerId, Restoration)>,
    pub fragment: FragmentResolution,
}

/// Navigation-aware scroll restoration for one application session.
///
/// This is the unit an application wires once at its root layout. It owns the session's
/// [`PositionStore`], a [`WindowRestorer`], any number of [`ContainerRestorer`]s and a
/// [`FragmentResolver`], and runs them in a fixed order for every navigation:
///
/// 1. `depart`: window and containers record their outgoing offsets;
/// 2. `arrive`: window, then containers, apply their offsets; finally the fragment target
///    (if any) is scrolled into view and overrides them.
///
/// The manager never fails. Missing environment pieces turn the affected step into a
/// no-op.
#[derive(Clone, Debug)]
pub struct ScrollManager {
    options: ManagerOptions,
    store: PositionStore,
    window: WindowRestorer,
    containers: Vec<ContainerRestorer>,
    fragments: FragmentResolver,
    current: Option<Navigation>,
}

impl Default for ScrollManager {
    fn default() -> Self {
        Self::new(ManagerOptions::default())
    }
}

impl ScrollManager {
    pub fn new(options: ManagerOptions) -> Self {
        let store = match options.store_capacity {
            Some(capacity) => PositionStore::with_capacity(capacity),
            None => PositionStore::new(),
        };
        Self::with_store(store, options)
    }

    /// Creates a manager around an existing store.
    ///
    /// `options.store_capacity` is ignored; the store keeps its own capacity.
    pub fn with_store(store: PositionStore, options: ManagerOptions) -> Self {
        rdebug!(
            key_strategy = ?options.key_strategy,
            force_top_on_fresh = options.window.force_top_on_fresh,
            records = store.len(),
            "ScrollManager::new"
        );
        Self {
            window: WindowRestorer::new(options.window).with_key_strategy(options.key_strategy),
            fragments: FragmentResolver::new(options.fragment_behavior),
            containers: Vec::new(),
            current: None,
            store,
            options,
        }
    }

    pub fn options(&self) -> &ManagerOptions {
        &self.options
    }

    pub fn store(&self) -> &PositionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PositionStore {
        &mut self.store
    }

    pub fn into_store(self) -> PositionStore {
        self.store
    }

    pub fn window(&self) -> &WindowRestorer {
        &self.window
    }

    /// The last navigation passed to [`ScrollManager::arrive`].
    pub fn current_navigation(&self) -> Option<&Navigation> {
        self.current.as_ref()
    }

    pub fn containers(&self) -> impl Iterator<Item = &ContainerRestorer> {
        self.containers.iter()
    }

    pub fn is_container_registered(&self, id: &ContainerId) -> bool {
        self.container_index(id).is_some()
    }

    /// Starts managing the container `id`.
    ///
    /// Returns `false` if it is already registered (its options are left unchanged).
    pub fn register_container(
        &mut self,
        id: impl Into<ContainerId>,
        options: ContainerOptions,
    ) -> bool {
        let id = id.into();
        if self.is_container_registered(&id) {
            rwarn!(container = %id, "container registered twice");
            return false;
        }
        rdebug!(container = %id, scope = ?options.scope, "register_container");
        self.containers.push(
            ContainerRestorer::new(id, options).with_key_strategy(self.options.key_strategy),
        );
        true
    }

    /// Stops managing the container `id`. Its saved records stay in the store.
    pub fn unregister_container(&mut self, id: &ContainerId) -> bool {
        let Some(index) = self.container_index(id) else {
            return false;
        };
        self.containers.remove(index);
        true
    }

    /// Registers a container whose element attached after the navigation committed and
    /// restores it against the current navigation.
    ///
    /// Returns `None` if no navigation has arrived yet, or if `id` is already mounted; an
    /// already mounted container keeps its offset and options.
    pub fn mount_container<E: ScrollEnvironment + ?Sized>(
        &mut self,
        id: impl Into<ContainerId>,
        options: ContainerOptions,
        env: &mut E,
    ) -> Option<Restoration> {
        let id = id.into();
        if !self.register_container(id.clone(), options) {
            return None;
        }
        let navigation = self.current.as_ref()?;
        let index = self.container_index(&id)?;
        let restorer = &mut self.containers[index];
        let restoration = match env.container(&id) {
            Some(target) => restorer.arrive(&self.store, navigation, target),
            None => restorer.arrive(&self.store, navigation, &mut Unattached),
        };
        rtrace!(container = %id, ?restoration, "mount_container");
        Some(restoration)
    }

    /// Records the container's offset and stops managing it.
    ///
    /// Call this while the element is still attached.
    pub fn unmount_container<E: ScrollEnvironment + ?Sized>(
        &mut self,
        id: &ContainerId,
        env: &mut E,
    ) -> Option<ScrollPosition> {
        let index = self.container_index(id)?;
        let mut restorer = self.containers.remove(index);
        let saved = env
            .container(id)
            .and_then(|target| restorer.depart(&mut self.store, &*target));
        restorer.detach();
        saved
    }

    /// Departure phase for the window and every registered container.
    pub fn depart<E: ScrollEnvironment + ?Sized>(&mut self, env: &mut E) {
        if let Some(window) = env.window() {
            self.window.depart(&mut self.store, &*window);
        }
        for restorer in &self.containers {
            if let Some(target) = env.container(restorer.id()) {
                restorer.depart(&mut self.store, &*target);
            }
        }
    }

    /// Arrival phase for `navigation`.
    ///
    /// Must run after the new view is in the DOM and before the browser paints it.
    pub fn arrive<E: ScrollEnvironment + ?Sized>(
        &mut self,
        navigation: &Navigation,
        env: &mut E,
    ) -> NavigationReport {
        let outcome = navigation.outcome();

        let window = match env.window() {
            Some(target) => self.window.arrive(&self.store, navigation, target),
            None => self.window.arrive(&self.store, navigation, &mut Unattached),
        };

        let mut containers = Vec::with_capacity(self.containers.len());
        for restorer in &mut self.containers {
            let restoration = match env.container(restorer.id()) {
                Some(target) => restorer.arrive(&self.store, navigation, target),
                None => restorer.arrive(&self.store, navigation, &mut Unattached),
            };
            containers.push((restorer.id().clone(), restoration));
        }

        let fragment = self.fragments.resolve(navigation, env);

        rdebug!(
            entry = %navigation.entry,
            path = %navigation.path,
            ?outcome,
            ?window,
            ?fragment,
            "ScrollManager::arrive"
        );
        self.current = Some(navigation.clone());

        NavigationReport {
            outcome,
            window,
            containers,
            fragment,
        }
    }

    /// Runs departure then arrival, for routers that only report committed navigations
    /// while the outgoing offsets are still readable.
    pub fn navigate<E: ScrollEnvironment + ?Sized>(
        &mut self,
        navigation: &Navigation,
        env: &mut E,
    ) -> NavigationReport {
        self.depart(env);
        self.arrive(navigation, env)
    }

    fn container_index(&self, id: &ContainerId) -> Option<usize> {
        self.containers.iter().position(|c| c.id() == id)
    }
}
