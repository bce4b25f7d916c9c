#[cfg(feature = "tracing")]
macro_rules! rtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scroll_restoration", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! rdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scroll_restoration", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! rwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "scroll_restoration", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rwarn {
    ($($tt:tt)*) => {};
}
