//! The `print!` call-site macro.
//!
//! `printly::print!` accepts zero or more positional expressions plus the
//! keyword tokens `sep = …`, `end = …`, `file = …`, and `flush = …`, in any
//! relative order, and expands to a [`crate::print_args`] call over the
//! equivalent [`crate::Arg`] list. Keyword identity is fixed at expansion
//! time; ordering and uniqueness are checked by the analyzer before any
//! write.
//!
//! ```
//! use printly::MemorySink;
//!
//! let sink = MemorySink::new();
//! printly::print!(1, 2, sep = " - ", file = sink).unwrap();
//! assert_eq!(sink.contents(), "1 - 2\n");
//! ```

/// Python-style print.
///
/// Returns `Result<(), PrintError>`: `Err` for a malformed argument list or
/// a destination failure, before and after the write phase respectively.
#[macro_export]
macro_rules! print {
    ($($args:tt)*) => {
        $crate::__print_args!([] $($args)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __print_args {
    // Keyword arguments. These arms come first so `sep = …` is claimed as a
    // keyword rather than parsed as an assignment expression.
    ([$($acc:expr,)*] sep = $v:expr, $($rest:tt)*) => {
        $crate::__print_args!([$($acc,)* $crate::Arg::sep(&$v),] $($rest)*)
    };
    ([$($acc:expr,)*] sep = $v:expr) => {
        $crate::print_args(&[$($acc,)* $crate::Arg::sep(&$v)])
    };
    ([$($acc:expr,)*] end = $v:expr, $($rest:tt)*) => {
        $crate::__print_args!([$($acc,)* $crate::Arg::end(&$v),] $($rest)*)
    };
    ([$($acc:expr,)*] end = $v:expr) => {
        $crate::print_args(&[$($acc,)* $crate::Arg::end(&$v)])
    };
    ([$($acc:expr,)*] file = $v:expr, $($rest:tt)*) => {
        $crate::__print_args!([$($acc,)* $crate::Arg::file(&$v),] $($rest)*)
    };
    ([$($acc:expr,)*] file = $v:expr) => {
        $crate::print_args(&[$($acc,)* $crate::Arg::file(&$v)])
    };
    ([$($acc:expr,)*] flush = $v:expr, $($rest:tt)*) => {
        $crate::__print_args!([$($acc,)* $crate::Arg::flush($v),] $($rest)*)
    };
    ([$($acc:expr,)*] flush = $v:expr) => {
        $crate::print_args(&[$($acc,)* $crate::Arg::flush($v)])
    };
    // Positional objects.
    ([$($acc:expr,)*] $v:expr, $($rest:tt)*) => {
        $crate::__print_args!([$($acc,)* $crate::Arg::value(&$v),] $($rest)*)
    };
    ([$($acc:expr,)*] $v:expr) => {
        $crate::print_args(&[$($acc,)* $crate::Arg::value(&$v)])
    };
    // End of input (also reached for `print!()` and trailing commas).
    ([$($acc:expr,)*]) => {
        $crate::print_args(&[$($acc,)*])
    };
}
