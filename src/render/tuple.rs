//! Tuple rendering: fixed arity, heterogeneous components, positional order.

use crate::errors::PrintError;
use crate::render::{Render, Shape};
use crate::sink::Sink;

impl Render for () {
    fn shape(&self) -> Shape {
        Shape::TupleLike
    }

    fn render(&self, sink: &dyn Sink) -> Result<(), PrintError> {
        sink.write_str("()")
    }
}

macro_rules! impl_tuple {
    ($(($name:ident, $idx:tt)),+ $(,)?) => {
        impl<$($name: Render),+> Render for ($($name,)+) {
            fn shape(&self) -> Shape {
                Shape::TupleLike
            }

            fn render(&self, sink: &dyn Sink) -> Result<(), PrintError> {
                sink.write_str("(")?;
                let mut index = 0usize;
                $(
                    if index > 0 {
                        sink.write_str(", ")?;
                    }
                    index += 1;
                    self.$idx.render(sink)?;
                )+
                let _ = index;
                sink.write_str(")")
            }
        }
    };
}

impl_tuple!((A, 0));
impl_tuple!((A, 0), (B, 1));
impl_tuple!((A, 0), (B, 1), (C, 2));
impl_tuple!((A, 0), (B, 1), (C, 2), (D, 3));
impl_tuple!((A, 0), (B, 1), (C, 2), (D, 3), (E, 4));
impl_tuple!((A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5));
impl_tuple!((A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5), (G, 6));
impl_tuple!((A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5), (G, 6), (H, 7));
impl_tuple!(
    (A, 0),
    (B, 1),
    (C, 2),
    (D, 3),
    (E, 4),
    (F, 5),
    (G, 6),
    (H, 7),
    (I, 8)
);
impl_tuple!(
    (A, 0),
    (B, 1),
    (C, 2),
    (D, 3),
    (E, 4),
    (F, 5),
    (G, 6),
    (H, 7),
    (I, 8),
    (J, 9)
);
impl_tuple!(
    (A, 0),
    (B, 1),
    (C, 2),
    (D, 3),
    (E, 4),
    (F, 5),
    (G, 6),
    (H, 7),
    (I, 8),
    (J, 9),
    (K, 10)
);
impl_tuple!(
    (A, 0),
    (B, 1),
    (C, 2),
    (D, 3),
    (E, 4),
    (F, 5),
    (G, 6),
    (H, 7),
    (I, 8),
    (J, 9),
    (K, 10),
    (L, 11)
);
