//! Sequence, set, and map rendering.
//!
//! All three strategies stream elements in the collection's own iteration
//! order, separated by `", "`. The engine imposes no sort of its own: a
//! `BTreeSet` comes out ascending because that is how a `BTreeSet` iterates,
//! while `HashSet` and `HashMap` order is whatever the hasher produced.

use crate::errors::PrintError;
use crate::render::{Render, Shape};
use crate::sink::Sink;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

fn render_items<'a, T, I>(
    sink: &dyn Sink,
    open: &str,
    close: &str,
    items: I,
) -> Result<(), PrintError>
where
    T: Render + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    sink.write_str(open)?;
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            sink.write_str(", ")?;
        }
        item.render(sink)?;
    }
    sink.write_str(close)
}

fn render_entries<'a, K, V, I>(sink: &dyn Sink, entries: I) -> Result<(), PrintError>
where
    K: Render + 'a,
    V: Render + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    sink.write_str("{")?;
    for (index, (key, value)) in entries.into_iter().enumerate() {
        if index > 0 {
            sink.write_str(", ")?;
        }
        key.render(sink)?;
        sink.write_str(": ")?;
        value.render(sink)?;
    }
    sink.write_str("}")
}

macro_rules! impl_sequence {
    ($($ty:ty),* $(,)?) => {$(
        impl<T: Render> Render for $ty {
            fn shape(&self) -> Shape {
                Shape::SequenceLike
            }

            fn render(&self, sink: &dyn Sink) -> Result<(), PrintError> {
                render_items(sink, "[", "]", self)
            }
        }
    )*};
}

impl_sequence!(Vec<T>, VecDeque<T>, LinkedList<T>);

impl<T: Render> Render for [T] {
    fn shape(&self) -> Shape {
        Shape::SequenceLike
    }

    fn render(&self, sink: &dyn Sink) -> Result<(), PrintError> {
        render_items(sink, "[", "]", self)
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn shape(&self) -> Shape {
        Shape::SequenceLike
    }

    fn render(&self, sink: &dyn Sink) -> Result<(), PrintError> {
        render_items(sink, "[", "]", self)
    }
}

impl<T: Render> Render for BTreeSet<T> {
    fn shape(&self) -> Shape {
        Shape::SetLike
    }

    fn render(&self, sink: &dyn Sink) -> Result<(), PrintError> {
        render_items(sink, "{", "}", self)
    }
}

impl<T: Render, S> Render for HashSet<T, S> {
    fn shape(&self) -> Shape {
        Shape::SetLike
    }

    fn render(&self, sink: &dyn Sink) -> Result<(), PrintError> {
        render_items(sink, "{", "}", self)
    }
}

impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn shape(&self) -> Shape {
        Shape::MapLike
    }

    fn render(&self, sink: &dyn Sink) -> Result<(), PrintError> {
        render_entries(sink, self)
    }
}

impl<K: Render, V: Render, S> Render for HashMap<K, V, S> {
    fn shape(&self) -> Shape {
        Shape::MapLike
    }

    fn render(&self, sink: &dyn Sink) -> Result<(), PrintError> {
        render_entries(sink, self)
    }
}
