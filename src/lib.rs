//! Python-style `print` for Rust values.
//!
//! Renders arbitrarily nested values — scalars, sequences, sets, maps, and
//! tuples — into a canonical human-readable text form, and exposes a
//! Python-like call surface with optional `sep`, `end`, `file`, and `flush`
//! keyword arguments:
//!
//! ```
//! use printly::MemorySink;
//!
//! let sink = MemorySink::new();
//!
//! printly::print!(42, 3.5, "Hello, world!", file = sink).unwrap();
//! printly::print!(
//!     vec![vec!["foo", "bar"], vec![], vec!["baz", "qux"]],
//!     file = sink,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     sink.contents(),
//!     "42 3.5 Hello, world!\n[[foo, bar], [], [baz, qux]]\n"
//! );
//! ```
//!
//! Only types implementing [`Render`] can be printed, so an unprintable
//! argument is a compile error, not a runtime surprise. Malformed argument
//! lists (a positional value after a keyword, or a keyword supplied twice)
//! are rejected by the analyzer before anything is written.

pub mod args;
pub mod errors;
mod macros;
pub mod print;
pub mod render;
pub mod sink;

pub use crate::args::{analyze, AnalyzedArgs, Arg, Slot};
pub use crate::errors::PrintError;
pub use crate::print::print_args;
pub use crate::render::{Render, Shape};
pub use crate::sink::{FileSink, MemorySink, Sink, StderrSink, StdoutSink};
