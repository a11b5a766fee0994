#[cfg(feature = "tracing")]
macro_rules! rwtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "rowwindow", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rwtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! rwdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "rowwindow", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rwdebug {
    ($($tt:tt)*) => {};
}
