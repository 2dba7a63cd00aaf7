#[cfg(feature = "tracing")]
macro_rules! sptrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "anchorspy", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sptrace {
    ($($tt:tt)*) => {};
}
