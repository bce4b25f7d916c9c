#[cfg(feature = "tracing")]
macro_rules! wdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scroll_restoration_web", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! wdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! wwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "scroll_restoration_web", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! wwarn {
    ($($tt:tt)*) => {};
}
