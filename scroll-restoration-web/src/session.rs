use std::cell::{Ref, RefCell};
use std::rc::Rc;

use scroll_restoration::{
    ContainerId, ContainerOptions, EntryKey, ManagerOptions, Navigation, NavigationReport,
    NavigationType, Restoration, ScrollManager, ScrollPosition,
};
use web_sys::Element;

use crate::{DomEnvironment, current_navigation, enable_manual_scroll_restoration};

/// The scroll manager of a UI thread together with the DOM it drives.
///
/// Both live behind one handle so a container attached by one component is visible to
/// the router hooks of another.
#[derive(Debug)]
pub struct ScrollSession {
    manager: ScrollManager,
    env: DomEnvironment,
}

impl ScrollSession {
    pub fn new(manager: ScrollManager) -> Self {
        Self {
            manager,
            env: DomEnvironment::current(),
        }
    }

    pub fn manager(&self) -> &ScrollManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut ScrollManager {
        &mut self.manager
    }

    pub fn environment(&self) -> &DomEnvironment {
        &self.env
    }
}

/// A [`ScrollSession`] shared between the pieces of a UI thread.
pub type SharedScrollSession = Rc<RefCell<ScrollSession>>;

thread_local! {
    static SESSION: SharedScrollSession =
        Rc::new(RefCell::new(ScrollSession::new(ScrollManager::default())));
}

/// Browser-side scroll restoration, mounted once at the application root.
///
/// Router integration:
/// - [`WebScrollRestoration::before_navigate`] while the outgoing view is still rendered;
/// - [`WebScrollRestoration::after_commit`] synchronously after the new view has been
///   written to the DOM, in the same task, before yielding to the event loop. Deferring it
///   to a later task or animation frame lets the browser paint the wrong offset first.
///
/// Handles are cheap to clone and share one [`ScrollSession`]: containers attached through
/// any handle are saved and restored by the router hooks of every other.
///
/// Every method is a no-op outside a browser, and none of them panic: a session that is
/// already borrowed (re-entrant call from a scroll handler) is skipped.
#[derive(Clone, Debug)]
pub struct WebScrollRestoration {
    shared: SharedScrollSession,
}

impl WebScrollRestoration {
    /// A handle on this thread's session.
    pub fn session() -> Self {
        Self::from_shared(SESSION.with(Rc::clone))
    }

    /// Reconfigures this thread's session and returns a handle on it.
    ///
    /// The session gets a fresh manager built from `options`: saved offsets and registered
    /// containers are dropped, attached elements are kept. Call it once at startup, before
    /// the first navigation.
    pub fn configure_session(options: ManagerOptions) -> Self {
        let handle = Self::session();
        match handle.shared.try_borrow_mut() {
            Ok(mut session) => session.manager = ScrollManager::new(options),
            Err(_) => {
                wwarn!("configure_session skipped: scroll session is busy");
            }
        }
        handle
    }

    /// A handle on an injected session.
    pub fn from_shared(shared: SharedScrollSession) -> Self {
        Self { shared }
    }

    /// A handle on a fresh, unshared session around `manager`.
    pub fn new(manager: ScrollManager) -> Self {
        Self::from_shared(Rc::new(RefCell::new(ScrollSession::new(manager))))
    }

    /// A handle on a fresh, unshared session.
    pub fn with_options(options: ManagerOptions) -> Self {
        Self::new(ScrollManager::new(options))
    }

    pub fn shared(&self) -> &SharedScrollSession {
        &self.shared
    }

    /// Borrows the manager, or `None` while the session is busy.
    pub fn manager(&self) -> Option<Ref<'_, ScrollManager>> {
        let session = self.shared.try_borrow().ok()?;
        Some(Ref::map(session, |s| &s.manager))
    }

    pub fn is_attached(&self, id: &ContainerId) -> bool {
        self.shared
            .try_borrow()
            .is_ok_and(|session| session.env.is_attached(id))
    }

    /// Takes over scroll restoration from the browser.
    pub fn mount(&self) -> bool {
        let manual = enable_manual_scroll_restoration();
        wdebug!(manual, "WebScrollRestoration::mount");
        manual
    }

    pub fn before_navigate(&self) {
        let Ok(mut session) = self.shared.try_borrow_mut() else {
            wwarn!("before_navigate skipped: scroll session is busy");
            return;
        };
        let ScrollSession { manager, env } = &mut *session;
        manager.depart(env);
    }

    pub fn after_commit(&self, navigation: &Navigation) -> Option<NavigationReport> {
        let Ok(mut session) = self.shared.try_borrow_mut() else {
            wwarn!("after_commit skipped: scroll session is busy");
            return None;
        };
        let ScrollSession { manager, env } = &mut *session;
        Some(manager.arrive(navigation, env))
    }

    /// [`WebScrollRestoration::after_commit`] for the navigation `window.location` now
    /// shows. Returns `None` outside a browser.
    pub fn after_commit_location(
        &self,
        entry: impl Into<EntryKey>,
        kind: NavigationType,
    ) -> Option<NavigationReport> {
        let navigation = current_navigation(entry, kind)?;
        self.after_commit(&navigation)
    }

    /// Starts managing a scrollable element and restores it for the current navigation.
    pub fn attach_container(
        &self,
        id: impl Into<ContainerId>,
        element: Element,
        options: ContainerOptions,
    ) -> Option<Restoration> {
        let id = id.into();
        let Ok(mut session) = self.shared.try_borrow_mut() else {
            wwarn!(container = %id, "attach_container skipped: scroll session is busy");
            return None;
        };
        let ScrollSession { manager, env } = &mut *session;
        env.attach(id.clone(), element);
        manager.mount_container(id, options, env)
    }

    /// Records the element's offset, then stops managing it.
    ///
    /// Call this before the element leaves the DOM.
    pub fn detach_container(&self, id: &ContainerId) -> Option<ScrollPosition> {
        let Ok(mut session) = self.shared.try_borrow_mut() else {
            wwarn!(container = %id, "detach_container skipped: scroll session is busy");
            return None;
        };
        let ScrollSession { manager, env } = &mut *session;
        let saved = manager.unmount_container(id, env);
        env.detach(id);
        saved
    }
}
