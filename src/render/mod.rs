//! Value classification and recursive rendering.
//!
//! Every printable type implements [`Render`], which pairs a [`Shape`]
//! verdict with the rendering strategy that verdict selects:
//!
//! - `Streamable` values go straight to the sink's primitive write.
//! - `SetLike` collections render as `{a, b, c}`.
//! - `MapLike` collections render as `{k: v, k: v}`.
//! - `SequenceLike` collections render as `[a, b, c]`.
//! - `TupleLike` values render as `(a, b, c)`.
//!
//! Nested values compose by recursion: a `Vec<BTreeMap<String, (i32, i32)>>`
//! renders each map inside brackets, each tuple inside its entry, and so on,
//! left to right in a single pass with no intermediate whole-value buffer.
//!
//! A type with no `Render` impl is not printable at all; passing one to a
//! print call is a compile error, so a call that type-checks cannot fail at
//! the write phase for shape reasons.

mod collections;
mod scalar;
mod tuple;

use crate::errors::PrintError;
use crate::sink::Sink;

/// The rendering strategy selected for a type.
///
/// The verdict is a property of the type, never of the value: `shape()`
/// returns the same variant for every value of a given type. The variants
/// are mutually exclusive; Rust's trait coherence guarantees each type
/// carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// The sink writes this type natively (numbers, bool, char, strings).
    Streamable,
    /// Iterable with no distinct payload per element (`HashSet`, `BTreeSet`).
    SetLike,
    /// Iterable over key/value entries (`HashMap`, `BTreeMap`).
    MapLike,
    /// Iterable, element type uniform (`Vec`, slices, arrays, deques).
    SequenceLike,
    /// Fixed arity, heterogeneous, accessed by position (tuples).
    TupleLike,
}

/// A value the engine can produce a text form for.
pub trait Render {
    /// The strategy this type renders with. Constant per type.
    fn shape(&self) -> Shape;

    /// Write this value's text form into the sink.
    fn render(&self, sink: &dyn Sink) -> Result<(), PrintError>;
}

impl<T: Render + ?Sized> Render for &T {
    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn render(&self, sink: &dyn Sink) -> Result<(), PrintError> {
        (**self).render(sink)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn render(&self, sink: &dyn Sink) -> Result<(), PrintError> {
        (**self).render(sink)
    }
}
