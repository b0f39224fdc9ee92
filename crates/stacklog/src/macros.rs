// Leveled macros pass `module_path!()`, `file!()` and `line!()` of the
// invocation, so lines are attributed to the caller without walking the
// stack and can be filtered per module.

/// Logs at DEBUG through the process-wide logger. Dropped unless debug
/// output was enabled.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::__emit(
            $crate::Level::Debug,
            ::core::module_path!(),
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Logs at INFO through the process-wide logger.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__emit(
            $crate::Level::Info,
            ::core::module_path!(),
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Logs at ERROR through the process-wide logger.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::__emit(
            $crate::Level::Error,
            ::core::module_path!(),
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Writes the formatted message as-is, with no location or level prefix.
#[macro_export]
macro_rules! error_custom {
    ($($arg:tt)+) => {
        $crate::__emit_custom(::core::format_args!($($arg)+))
    };
}
