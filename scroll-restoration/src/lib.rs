//! A headless, navigation-aware scroll position manager.
//!
//! For browser bindings (`web-sys` window/element targets, DOM fragment lookup), see the
//! `scroll-restoration-web` crate.
//!
//! On every committed route change the manager decides whether a scroll target jumps to
//! the top, gets a previously recorded offset back, or scrolls a fragment target into
//! view:
//!
//! - push / replace: top (unless the router opted out of the reset)
//! - back / forward: the offset recorded when that entry was left, or top if none
//! - `#fragment`: the fragment target, overriding both
//!
//! It is UI-agnostic. A router/UI layer is expected to provide:
//! - a stable key per history entry and the navigation type ([`Navigation`])
//! - the scroll targets and fragment lookup ([`ScrollEnvironment`])
//! - the timing: departure before the old view is torn down, arrival after the new view
//!   is in the DOM and before paint
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod container;
mod fragment;
mod key;
mod manager;
mod navigation;
mod options;
mod restorer;
mod store;
mod target;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use container::ContainerRestorer;
pub use fragment::{FragmentResolution, FragmentResolver};
pub use key::{KeyStrategy, RouteKey, StoreKey};
pub use manager::{NavigationReport, ScrollManager};
pub use navigation::{Navigation, NavigationOutcome, NavigationType};
pub use options::{ContainerOptions, ContainerScope, ManagerOptions, RestorerOptions};
pub use store::PositionStore;
pub use target::{Headless, ScrollEnvironment, ScrollTarget};
pub use types::{ContainerId, EntryKey, Restoration, ScrollBehavior, ScrollPosition};
pub use window::WindowRestorer;
