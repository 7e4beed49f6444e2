#[cfg(feature = "tracing")]
macro_rules! etrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "expandable_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! etrace {
    ($($tt:tt)*) => {};
}
