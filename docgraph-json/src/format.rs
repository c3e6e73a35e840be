//! String escaping and numeric formatting.
//!
//! Every literal the writer emits goes through here. Text is passed through
//! as UTF-8 except for the characters JSON forbids raw inside a string.
//! Numbers are formatted by `lexical-core`, which never consults the process
//! locale, so the decimal point is always `.`.

use std::io::{self, Write};

use phf::phf_map;

/// Two-character escape forms. Any other control byte below 0x20 is
/// written as `\u00XX`.
static ESCAPES: phf::Map<u8, &'static str> = phf_map! {
    b'\\' => "\\\\",
    b'"' => "\\\"",
    b'\n' => "\\n",
    b'\t' => "\\t",
    b'\r' => "\\r",
    b'\x08' => "\\b",
    b'\x0c' => "\\f",
};

#[inline]
fn needs_escape(b: u8) -> bool {
    b < 0x20 || b == b'"' || b == b'\\'
}

/// Write `s` escaped for use inside a JSON string literal (without quotes).
///
/// Multi-byte UTF-8 sequences never contain bytes below 0x80, so scanning
/// bytes is safe and leaves non-ASCII text untouched.
pub fn write_escaped(out: &mut dyn Write, s: &str) -> io::Result<()> {
    let bytes = s.as_bytes();
    let mut start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        if !needs_escape(b) {
            continue;
        }
        if start < i {
            out.write_all(&bytes[start..i])?;
        }
        match ESCAPES.get(&b) {
            Some(escaped) => out.write_all(escaped.as_bytes())?,
            None => write!(out, "\\u{:04x}", b)?,
        }
        start = i + 1;
    }

    if start < bytes.len() {
        out.write_all(&bytes[start..])?;
    }
    Ok(())
}

/// A classified numeric scalar.
///
/// `Float32` keeps single-precision values apart so they format with the
/// shortest `f32` representation (`0.1`, not `0.10000000149011612`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    UInt(u64),
    Float(f64),
    Float32(f32),
}

impl Numeric {
    /// Whether this value has a JSON number form. NaN and infinities do not.
    pub fn is_finite(self) -> bool {
        match self {
            Numeric::Int(_) | Numeric::UInt(_) => true,
            Numeric::Float(v) => v.is_finite(),
            Numeric::Float32(v) => v.is_finite(),
        }
    }
}

macro_rules! numeric_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Numeric {
                #[inline]
                fn from(v: $source) -> Self {
                    Numeric::$variant(v as $target)
                }
            }
        )*
    };
}

numeric_from!(Int as i64: i8, i16, i32, i64, isize);
numeric_from!(UInt as u64: u8, u16, u32, u64, usize);
numeric_from!(Float as f64: f64);
numeric_from!(Float32 as f32: f32);

/// Write a number. Non-finite floats are written as `null`.
pub fn write_numeric(out: &mut dyn Write, n: Numeric) -> io::Result<()> {
    if !n.is_finite() {
        return out.write_all(b"null");
    }
    let mut buf = [0u8; lexical_core::BUFFER_SIZE];
    let digits: &[u8] = match n {
        Numeric::Int(v) => lexical_core::write(v, &mut buf),
        Numeric::UInt(v) => lexical_core::write(v, &mut buf),
        Numeric::Float(v) => lexical_core::write(v, &mut buf),
        Numeric::Float32(v) => lexical_core::write(v, &mut buf),
    };
    out.write_all(digits)
}
