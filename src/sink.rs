//! Output destination abstractions for print calls.
//!
//! This module provides the `Sink` trait and implementations for the common
//! destinations (stdout, stderr, file, memory). A sink is an append-only text
//! target: the engine only ever writes and optionally flushes, never seeks or
//! closes. The in-memory sink exists so rendered output can be inspected in
//! tests without touching the file system.
//!
//! # Example
//!
//! ```
//! use printly::{MemorySink, Sink};
//!
//! let sink = MemorySink::new();
//! sink.write_str("hello").unwrap();
//! assert_eq!(sink.contents(), "hello");
//! ```

use crate::errors::PrintError;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, RwLock};

/// Trait for output destinations that receive rendered text.
///
/// Implementations take `&self` and are expected to use interior mutability
/// or OS-level handles, so a single sink can be shared across call sites.
pub trait Sink: Send + Sync {
    /// Append literal text to the destination.
    fn write_str(&self, text: &str) -> Result<(), PrintError>;

    /// Append a formatted scalar to the destination.
    ///
    /// The default implementation takes the zero-allocation path when the
    /// arguments are a plain literal and falls back to formatting into a
    /// temporary otherwise. Destinations backed by an `io::Write` handle
    /// should override this to stream directly.
    fn write_fmt(&self, args: fmt::Arguments<'_>) -> Result<(), PrintError> {
        match args.as_str() {
            Some(text) => self.write_str(text),
            None => self.write_str(&args.to_string()),
        }
    }

    /// Flush any buffered content.
    fn flush(&self) -> Result<(), PrintError>;

    /// Get a description of the destination for error messages.
    fn description(&self) -> String;
}

// Lets a `&dyn Sink` itself be passed wherever a sink is expected.
impl<S: Sink + ?Sized> Sink for &S {
    fn write_str(&self, text: &str) -> Result<(), PrintError> {
        (**self).write_str(text)
    }

    fn write_fmt(&self, args: fmt::Arguments<'_>) -> Result<(), PrintError> {
        (**self).write_fmt(args)
    }

    fn flush(&self) -> Result<(), PrintError> {
        (**self).flush()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Standard output destination. This is the default destination of a print
/// call when no `file` keyword is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Create a new stdout sink.
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write_str(&self, text: &str) -> Result<(), PrintError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(text.as_bytes())
            .map_err(|e| PrintError::sink("stdout", e))
    }

    fn write_fmt(&self, args: fmt::Arguments<'_>) -> Result<(), PrintError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_fmt(args)
            .map_err(|e| PrintError::sink("stdout", e))
    }

    fn flush(&self) -> Result<(), PrintError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.flush().map_err(|e| PrintError::sink("stdout", e))
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }
}

/// Standard error destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl StderrSink {
    /// Create a new stderr sink.
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StderrSink {
    fn write_str(&self, text: &str) -> Result<(), PrintError> {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        handle
            .write_all(text.as_bytes())
            .map_err(|e| PrintError::sink("stderr", e))
    }

    fn write_fmt(&self, args: fmt::Arguments<'_>) -> Result<(), PrintError> {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        handle
            .write_fmt(args)
            .map_err(|e| PrintError::sink("stderr", e))
    }

    fn flush(&self) -> Result<(), PrintError> {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        handle.flush().map_err(|e| PrintError::sink("stderr", e))
    }

    fn description(&self) -> String {
        "stderr".to_string()
    }
}

/// In-memory destination.
///
/// Captures all output in a thread-safe buffer that can be inspected after
/// writing. Primarily useful for testing rendering without touching the file
/// system.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<RwLock<String>>,
}

impl MemorySink {
    /// Create a new in-memory sink with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content of the buffer.
    pub fn contents(&self) -> String {
        self.buffer.read().expect("RwLock poisoned").clone()
    }

    /// Clear the buffer.
    pub fn clear(&self) {
        self.buffer.write().expect("RwLock poisoned").clear();
    }

    /// Get the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.read().expect("RwLock poisoned").len()
    }

    /// Check if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.read().expect("RwLock poisoned").is_empty()
    }
}

impl Sink for MemorySink {
    fn write_str(&self, text: &str) -> Result<(), PrintError> {
        self.buffer.write().expect("RwLock poisoned").push_str(text);
        Ok(())
    }

    fn flush(&self) -> Result<(), PrintError> {
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}

/// File system destination.
///
/// Writes are buffered and appended in call order; `flush` pushes the buffer
/// through to the OS.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileSink {
    /// Create the file (truncating any existing content) and return a sink
    /// appending to it.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, PrintError> {
        let path = path.into();
        let file = File::create(&path)
            .map_err(|e| PrintError::sink(format!("file:{}", path.display()), e))?;
        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Open an existing file for appending, creating it if absent.
    pub fn append(path: impl Into<PathBuf>) -> Result<Self, PrintError> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| PrintError::sink(format!("file:{}", path.display()), e))?;
        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Get the path this sink writes to.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_str(&self, text: &str) -> Result<(), PrintError> {
        let mut writer = self.writer.lock().expect("Mutex poisoned");
        writer
            .write_all(text.as_bytes())
            .map_err(|e| PrintError::sink(self.description(), e))
    }

    fn write_fmt(&self, args: fmt::Arguments<'_>) -> Result<(), PrintError> {
        let mut writer = self.writer.lock().expect("Mutex poisoned");
        writer
            .write_fmt(args)
            .map_err(|e| PrintError::sink(self.description(), e))
    }

    fn flush(&self) -> Result<(), PrintError> {
        let mut writer = self.writer.lock().expect("Mutex poisoned");
        writer
            .flush()
            .map_err(|e| PrintError::sink(self.description(), e))
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
