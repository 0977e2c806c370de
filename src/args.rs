//! Argument analysis for print calls.
//!
//! A print call is a flat, ordered list of [`Arg`]s: plain values to render
//! plus up to four keyword arguments (`sep`, `end`, `file`, `flush`).
//! [`analyze`] walks the list once and partitions it into object positions
//! and slot positions, rejecting malformed lists before anything is written:
//!
//! - a plain value after any keyword argument is an error
//!   ("positional argument after keyword argument"),
//! - the same keyword supplied twice is an error
//!   ("keyword argument repeated").
//!
//! Once a keyword appears, nothing after it can be misread as a positional
//! object, so resolution stays unambiguous and linear-time.

use crate::errors::PrintError;
use crate::render::Render;
use crate::sink::Sink;
use std::fmt;

/// One of the four keyword argument slots of a print call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Token placed between consecutive objects. Default: a single space.
    Sep,
    /// Token appended after the last object. Default: newline.
    End,
    /// The destination sink. Default: stdout.
    File,
    /// Whether to flush the destination after the terminator. Default: false.
    Flush,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Sep => "sep",
            Slot::End => "end",
            Slot::File => "file",
            Slot::Flush => "flush",
        };
        f.write_str(name)
    }
}

/// A single call-site argument: a plain value or a keyword wrapper.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    /// A positional object to render.
    Value(&'a dyn Render),
    /// `sep = …`
    Sep(&'a dyn Render),
    /// `end = …`
    End(&'a dyn Render),
    /// `file = …`
    File(&'a dyn Sink),
    /// `flush = …`
    Flush(bool),
}

impl<'a> Arg<'a> {
    /// Wrap a positional object.
    pub fn value(object: &'a dyn Render) -> Self {
        Arg::Value(object)
    }

    /// Wrap a separator keyword argument.
    pub fn sep(separator: &'a dyn Render) -> Self {
        Arg::Sep(separator)
    }

    /// Wrap a terminator keyword argument.
    pub fn end(terminator: &'a dyn Render) -> Self {
        Arg::End(terminator)
    }

    /// Wrap a destination keyword argument.
    pub fn file(sink: &'a dyn Sink) -> Self {
        Arg::File(sink)
    }

    /// Wrap a flush keyword argument.
    pub fn flush(flush: bool) -> Self {
        Arg::Flush(flush)
    }

    pub(crate) fn as_render(&self) -> Option<&'a dyn Render> {
        match self {
            Arg::Value(v) | Arg::Sep(v) | Arg::End(v) => Some(*v),
            Arg::File(_) | Arg::Flush(_) => None,
        }
    }

    pub(crate) fn as_sink(&self) -> Option<&'a dyn Sink> {
        match self {
            Arg::File(sink) => Some(*sink),
            _ => None,
        }
    }

    pub(crate) fn as_flush(&self) -> Option<bool> {
        match self {
            Arg::Flush(flush) => Some(*flush),
            _ => None,
        }
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Value(_) => f.write_str("Value(..)"),
            Arg::Sep(_) => f.write_str("Sep(..)"),
            Arg::End(_) => f.write_str("End(..)"),
            Arg::File(_) => f.write_str("File(..)"),
            Arg::Flush(flush) => write!(f, "Flush({})", flush),
        }
    }
}

/// The analyzer's verdict on an argument list.
///
/// Object indices preserve encounter order; each slot holds the index of the
/// argument that supplied it, or `None` for a defaulted slot. All recorded
/// indices are pairwise distinct by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzedArgs {
    /// Indices of positional objects, in encounter order.
    pub objects: Vec<usize>,
    /// Index of the `sep` argument, if supplied.
    pub sep: Option<usize>,
    /// Index of the `end` argument, if supplied.
    pub end: Option<usize>,
    /// Index of the `file` argument, if supplied.
    pub file: Option<usize>,
    /// Index of the `flush` argument, if supplied.
    pub flush: Option<usize>,
}

impl AnalyzedArgs {
    fn keyword_seen(&self) -> bool {
        self.sep.is_some() || self.end.is_some() || self.file.is_some() || self.flush.is_some()
    }
}

/// Partition an argument list into objects and keyword slots.
///
/// Walks the list once, in order. Fails fast on the first violation; no
/// malformed list reaches the write phase.
pub fn analyze(args: &[Arg<'_>]) -> Result<AnalyzedArgs, PrintError> {
    let mut analyzed = AnalyzedArgs::default();
    for (index, arg) in args.iter().enumerate() {
        match arg {
            Arg::Value(_) => {
                if analyzed.keyword_seen() {
                    return Err(PrintError::PositionalAfterKeyword { index });
                }
                analyzed.objects.push(index);
            }
            Arg::Sep(_) => claim(&mut analyzed.sep, Slot::Sep, index)?,
            Arg::End(_) => claim(&mut analyzed.end, Slot::End, index)?,
            Arg::File(_) => claim(&mut analyzed.file, Slot::File, index)?,
            Arg::Flush(_) => claim(&mut analyzed.flush, Slot::Flush, index)?,
        }
    }
    log::trace!(
        "analyzed {} arguments: {} objects",
        args.len(),
        analyzed.objects.len()
    );
    Ok(analyzed)
}

fn claim(slot_index: &mut Option<usize>, slot: Slot, index: usize) -> Result<(), PrintError> {
    if slot_index.is_some() {
        return Err(PrintError::RepeatedKeyword { slot, index });
    }
    *slot_index = Some(index);
    Ok(())
}
