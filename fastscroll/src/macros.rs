#[cfg(feature = "tracing")]
macro_rules! fstrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "fastscroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fstrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! fsdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "fastscroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fsdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! fswarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "fastscroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fswarn {
    ($($tt:tt)*) => {};
}
