//! Streaming JSON writer.
//!
//! Low-level emission only: objects, arrays, keys and already-classified
//! scalars go straight to the sink as they are written, nothing is
//! accumulated. The nesting stack exists to decide where commas go and, in
//! pretty mode, how deep to indent.
//!
//! # Layout
//!
//! Both modes put one space after each colon. Compact mode keeps everything
//! on one line with a space after each comma:
//!
//! ```text
//! {"a": 1, "b": [true, null]}
//! ```
//!
//! Pretty mode breaks the line after every opening bracket and after every
//! comma, and indents two spaces per level:
//!
//! ```text
//! {
//!   "a": 1,
//!   "b": [
//!     true,
//!     null
//!   ]
//! }
//! ```

use std::io::{self, Write};

use crate::dispatch;
use crate::error::Result;
use crate::format::{self, Numeric};
use crate::value::Value;

const INDENT: &[u8] = b"  ";

/// A primitive that is ready to be written as a single JSON literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Null,
    Bool(bool),
    Str(&'a str),
    /// A single character, written as a one-character string.
    Char(char),
    Number(Numeric),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Object,
    Array,
}

#[derive(Debug)]
struct Frame {
    container: Container,
    entries: usize,
}

/// Sink wrapper that counts bytes handed to the underlying writer.
struct CountingSink<'s> {
    inner: &'s mut dyn Write,
    count: u64,
}

impl Write for CountingSink<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Writes JSON tokens to a sink.
///
/// One writer serves one render pass. Its nesting state is mutable and it
/// must not be shared between concurrent renders.
pub struct JsonWriter<'s> {
    sink: CountingSink<'s>,
    pretty: bool,
    stack: Vec<Frame>,
    /// A key has been written and its value has not.
    pending_key: bool,
}

impl<'s> JsonWriter<'s> {
    /// Create a writer over `sink`.
    pub fn new(sink: &'s mut dyn Write, pretty: bool) -> Self {
        Self {
            sink: CountingSink { inner: sink, count: 0 },
            pretty,
            stack: Vec::with_capacity(16),
            pending_key: false,
        }
    }

    /// Whether this writer produces indented output.
    #[inline]
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Number of currently open objects and arrays.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Total bytes handed to the sink so far.
    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.sink.count
    }

    pub fn begin_object(&mut self) -> Result<()> {
        self.before_value()?;
        self.raw(b"{")?;
        self.stack.push(Frame { container: Container::Object, entries: 0 });
        Ok(())
    }

    pub fn end_object(&mut self) -> Result<()> {
        self.close(Container::Object, b"}")
    }

    pub fn begin_array(&mut self) -> Result<()> {
        self.before_value()?;
        self.raw(b"[")?;
        self.stack.push(Frame { container: Container::Array, entries: 0 });
        Ok(())
    }

    pub fn end_array(&mut self) -> Result<()> {
        self.close(Container::Array, b"]")
    }

    /// Write an object key. The next write must be its value.
    pub fn write_key(&mut self, name: &str) -> Result<()> {
        debug_assert!(!self.pending_key, "key written while another key awaits its value");
        let preceding = match self.stack.last_mut() {
            Some(frame) if frame.container == Container::Object => {
                frame.entries += 1;
                frame.entries - 1
            }
            _ => {
                debug_assert!(false, "key written outside of an object");
                0
            }
        };

        self.separate(preceding)?;
        self.raw(b"\"")?;
        format::write_escaped(&mut self.sink, name)?;
        self.raw(b"\": ")?;
        self.pending_key = true;
        Ok(())
    }

    /// Write one scalar literal.
    pub fn write_scalar(&mut self, scalar: Scalar<'_>) -> Result<()> {
        self.before_value()?;
        match scalar {
            Scalar::Null => self.raw(b"null")?,
            Scalar::Bool(true) => self.raw(b"true")?,
            Scalar::Bool(false) => self.raw(b"false")?,
            Scalar::Str(s) => self.string(s)?,
            Scalar::Char(c) => {
                let mut buf = [0u8; 4];
                self.string(c.encode_utf8(&mut buf))?;
            }
            Scalar::Number(n) => format::write_numeric(&mut self.sink, n)?,
        }
        Ok(())
    }

    /// Write a `[begin, end]` pair. Laid out like any other array.
    pub fn write_span(&mut self, begin: Numeric, end: Numeric) -> Result<()> {
        self.begin_array()?;
        self.write_scalar(Scalar::Number(begin))?;
        self.write_scalar(Scalar::Number(end))?;
        self.end_array()
    }

    /// Open an object, let `populate` fill it, and close it.
    pub fn object<F>(&mut self, populate: F) -> Result<()>
    where
        F: FnOnce(&mut ObjectWriter<'_, 's>) -> Result<()>,
    {
        self.begin_object()?;
        populate(&mut ObjectWriter { writer: self })?;
        self.end_object()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    #[inline]
    fn raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.sink.write_all(bytes)
    }

    fn string(&mut self, s: &str) -> io::Result<()> {
        self.raw(b"\"")?;
        format::write_escaped(&mut self.sink, s)?;
        self.raw(b"\"")
    }

    fn newline_indent(&mut self, level: usize) -> io::Result<()> {
        if !self.pretty {
            return Ok(());
        }
        self.raw(b"\n")?;
        for _ in 0..level {
            self.raw(INDENT)?;
        }
        Ok(())
    }

    /// Separator and indentation owed before a value at the current position.
    fn before_value(&mut self) -> io::Result<()> {
        let preceding = match self.stack.last_mut() {
            Some(frame) if frame.container == Container::Array => {
                frame.entries += 1;
                frame.entries - 1
            }
            Some(_) => {
                debug_assert!(self.pending_key, "object value written without a key");
                self.pending_key = false;
                return Ok(());
            }
            None => return Ok(()),
        };

        self.separate(preceding)
    }

    /// Comma after earlier entries, then a line break (pretty) or a space
    /// (compact, only after a comma).
    fn separate(&mut self, preceding: usize) -> io::Result<()> {
        if preceding > 0 {
            self.raw(b",")?;
            if !self.pretty {
                return self.raw(b" ");
            }
        }
        self.newline_indent(self.stack.len())
    }

    fn close(&mut self, expected: Container, bracket: &[u8]) -> Result<()> {
        let frame = self.stack.pop();
        debug_assert_eq!(frame.map(|f| f.container), Some(expected), "mismatched close");
        debug_assert!(!self.pending_key, "container closed while a key awaits its value");
        self.newline_indent(self.stack.len())?;
        self.raw(bracket)?;
        Ok(())
    }
}

/// Key/value sink bound to one open object.
///
/// Handed to nested-object callbacks. Pairs with a missing key or a null
/// value are dropped without writing anything.
pub struct ObjectWriter<'w, 's> {
    writer: &'w mut JsonWriter<'s>,
}

impl<'s> ObjectWriter<'_, 's> {
    /// Write `key: value`, unless the key is missing or the value is null.
    pub fn set<'k, 'v>(
        &mut self,
        key: impl Into<Option<&'k str>>,
        value: impl Into<Value<'v>>,
    ) -> Result<()> {
        let Some(key) = key.into() else {
            return Ok(());
        };
        let value = value.into();
        if value.is_null() {
            return Ok(());
        }
        self.writer.write_key(key)?;
        dispatch::write_value(self.writer, value)
    }

    /// Write `key: null` explicitly.
    ///
    /// Only for fields whose absence and explicit null mean different things.
    pub fn set_null<'k>(&mut self, key: impl Into<Option<&'k str>>) -> Result<()> {
        let Some(key) = key.into() else {
            return Ok(());
        };
        self.writer.write_key(key)?;
        self.writer.write_scalar(Scalar::Null)
    }

    /// Whether the underlying writer is in pretty mode.
    pub fn is_pretty(&self) -> bool {
        self.writer.is_pretty()
    }
}
