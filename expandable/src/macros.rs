#[cfg(feature = "tracing")]
macro_rules! etrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "expandable", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! etrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! edebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "expandable", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! edebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! ewarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "expandable", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ewarn {
    ($($tt:tt)*) => {};
}
