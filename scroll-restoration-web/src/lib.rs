//! Browser bindings for the `scroll-restoration` crate.
//!
//! `scroll-restoration` decides *what* offset a scroll target gets on each navigation.
//! This crate supplies the DOM side over `web-sys`:
//!
//! - [`WindowTarget`] / [`ElementTarget`]: window and element scroll offsets
//! - [`DomEnvironment`]: the live document, with container elements attached by id
//! - fragment lookup by `id` and `<a name>` ([`locate_fragment`])
//! - `history.scrollRestoration = "manual"` ([`enable_manual_scroll_restoration`])
//! - [`WebScrollRestoration`]: the handle a router calls around each navigation
//!
//! Outside a browser (including every non-wasm target) all of it degrades to no-ops.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod dom;
mod environment;
mod fragment;
mod history;
mod session;



pub use dom::{ElementTarget, WindowTarget, browser_window};
pub use environment::DomEnvironment;
pub use fragment::{locate_fragment, scroll_fragment_into_view};
pub use history::{current_fragment, current_navigation, enable_manual_scroll_restoration};
pub use session::{ScrollSession, SharedScrollSession, WebScrollRestoration};
