//! The print orchestrator: defaults, separator interleaving, terminator,
//! flush.

use crate::args::{analyze, Arg};
use crate::errors::PrintError;
use crate::render::Render;
use crate::sink::{Sink, StdoutSink};

const DEFAULT_SEP: &str = " ";
const DEFAULT_END: &str = "\n";

// Process-wide default destination, shared by every call that does not
// supply `file`.
static DEFAULT_FILE: StdoutSink = StdoutSink;

/// Execute a print call over an analyzed argument list.
///
/// Objects render in encounter order, the separator between each consecutive
/// pair, the terminator after the last (or alone, for an empty call). Writes
/// are strictly sequential; an argument-list violation surfaces before any
/// write happens.
///
/// # Example
///
/// ```
/// use printly::{print_args, Arg, MemorySink};
///
/// let sink = MemorySink::new();
/// print_args(&[
///     Arg::value(&1),
///     Arg::value(&2),
///     Arg::sep(&" - "),
///     Arg::file(&sink),
/// ])
/// .unwrap();
/// assert_eq!(sink.contents(), "1 - 2\n");
/// ```
pub fn print_args(args: &[Arg<'_>]) -> Result<(), PrintError> {
    let analyzed = analyze(args)?;

    let sep = resolve_render(args, analyzed.sep, &DEFAULT_SEP);
    let end = resolve_render(args, analyzed.end, &DEFAULT_END);
    let file: &dyn Sink = analyzed
        .file
        .and_then(|index| args[index].as_sink())
        .unwrap_or(&DEFAULT_FILE);
    let flush = analyzed
        .flush
        .and_then(|index| args[index].as_flush())
        .unwrap_or(false);

    log::debug!(
        "printing {} objects to {}",
        analyzed.objects.len(),
        file.description()
    );

    for (position, &index) in analyzed.objects.iter().enumerate() {
        if position > 0 {
            sep.render(file)?;
        }
        if let Some(object) = args[index].as_render() {
            object.render(file)?;
        }
    }
    end.render(file)?;

    if flush {
        file.flush()?;
    }
    Ok(())
}

fn resolve_render<'a>(
    args: &[Arg<'a>],
    index: Option<usize>,
    default: &'a dyn Render,
) -> &'a dyn Render {
    index
        .and_then(|index| args[index].as_render())
        .unwrap_or(default)
}
