use scroll_restoration::{EntryKey, Navigation, NavigationType};
use web_sys::ScrollRestoration;

use crate::browser_window;

/// Sets `history.scrollRestoration = "manual"`.
///
/// Without it the browser restores offsets on its own for popstate navigations and races
/// the manager. Returns `false` outside a browser or if the history API refused.
pub fn enable_manual_scroll_restoration() -> bool {
    let Some(window) = browser_window() else {
        return false;
    };
    let Ok(history) = window.history() else {
        return false;
    };
    match history.set_scroll_restoration(ScrollRestoration::Manual) {
        Ok(()) => true,
        Err(_) => {
            wwarn!("history.scrollRestoration could not be set to manual");
            false
        }
    }
}

/// The fragment of the current location, without `#`. `None` when empty.
pub fn current_fragment() -> Option<String> {
    let window = browser_window()?;
    let hash = window.location().hash().ok()?;
    let fragment = hash.strip_prefix('#').unwrap_or(&hash);
    (!fragment.is_empty()).then(|| fragment.to_string())
}

/// Builds a [`Navigation`] for the current location.
///
/// `entry` and `kind` come from the router; path and fragment are read from
/// `window.location`. Returns `None` outside a browser.
pub fn current_navigation(
    entry: impl Into<EntryKey>,
    kind: NavigationType,
) -> Option<Navigation> {
    let window = browser_window()?;
    let path = window.location().pathname().ok()?;
    Some(
        Navigation::new(entry, kind)
            .with_path(path)
            .with_fragment(current_fragment().as_deref()),
    )
}
