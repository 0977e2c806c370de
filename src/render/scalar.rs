//! Streamable scalars: types the sink writes natively.

use crate::errors::PrintError;
use crate::render::{Render, Shape};
use crate::sink::Sink;

macro_rules! impl_streamable {
    ($($ty:ty),* $(,)?) => {$(
        impl Render for $ty {
            fn shape(&self) -> Shape {
                Shape::Streamable
            }

            fn render(&self, sink: &dyn Sink) -> Result<(), PrintError> {
                sink.write_fmt(format_args!("{}", self))
            }
        }
    )*};
}

impl_streamable!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

// String types bypass the formatter entirely. Text renders as itself, never
// as a sequence of characters.
impl Render for str {
    fn shape(&self) -> Shape {
        Shape::Streamable
    }

    fn render(&self, sink: &dyn Sink) -> Result<(), PrintError> {
        sink.write_str(self)
    }
}

impl Render for String {
    fn shape(&self) -> Shape {
        Shape::Streamable
    }

    fn render(&self, sink: &dyn Sink) -> Result<(), PrintError> {
        sink.write_str(self)
    }
}
