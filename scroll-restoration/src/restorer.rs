use crate::{
    Navigation, PositionStore, Restoration, RestorerOptions, ScrollPosition, ScrollTarget,
    StoreKey,
};

/// The two-phase save/restore cycle shared by window and container restorers.
///
/// `current` is the key of whatever is on screen; it is set by arrival and read by the
/// next departure, so a navigation that is superseded before commit never touches the
/// store.
#[derive(Clone, Debug, Default)]
pub(crate) struct Phases {
    options: RestorerOptions,
    current: Option<StoreKey>,
}

impl Phases {
    pub(crate) fn new(options: RestorerOptions) -> Self {
        Self {
            options,
            current: None,
        }
    }

    pub(crate) fn options(&self) -> RestorerOptions {
        self.options
    }

    pub(crate) fn set_options(&mut self, options: RestorerOptions) {
        self.options = options;
    }

    pub(crate) fn current(&self) -> Option<&StoreKey> {
        self.current.as_ref()
    }

    pub(crate) fn depart<T: ScrollTarget + ?Sized>(
        &self,
        store: &mut PositionStore,
        target: &T,
    ) -> Option<ScrollPosition> {
        let key = self.current.as_ref()?;
        let position = target.scroll_position()?;
        store.save(key.clone(), position);
        Some(position)
    }

    pub(crate) fn arrive<T: ScrollTarget + ?Sized>(
        &mut self,
        store: &PositionStore,
        key: StoreKey,
        navigation: &Navigation,
        target: &mut T,
    ) -> Restoration {
        let outcome = navigation.outcome();
        let saved = if outcome.restores_saved() {
            store.read(&key)
        } else {
            None
        };
        rtrace!(
            key = %key,
            ?outcome,
            restored = saved.is_some(),
            "restorer arrival"
        );
        self.current = Some(key);

        let (position, restoration) = match saved {
            Some(position) => (position, Restoration::Restored(position)),
            // Traversal without a record behaves like a fresh visit, minus the
            // router's reset opt-out which only concerns push/replace.
            None if outcome.restores_saved() && self.options.force_top_on_fresh => {
                (ScrollPosition::TOP, Restoration::Reset)
            }
            None if navigation.prevent_scroll_reset || !self.options.force_top_on_fresh => {
                return match target.scroll_position() {
                    Some(_) => Restoration::Preserved,
                    None => Restoration::Unavailable,
                };
            }
            None => (ScrollPosition::TOP, Restoration::Reset),
        };

        if target.scroll_to(position) {
            restoration
        } else {
            Restoration::Unavailable
        }
    }

    pub(crate) fn forget_current(&mut self) {
        self.current = None;
    }
}
