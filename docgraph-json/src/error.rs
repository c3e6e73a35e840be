//! Fatal render errors.
//!
//! A render pass either completes or stops at the first error. Missing,
//! null, or empty inputs never produce an error; they are absorbed by the
//! omission rules of the renderers.

use thiserror::Error;

/// Error returned when a render pass cannot complete.
#[derive(Debug, Error)]
pub enum Error {
    /// A value matched none of the renderable shapes.
    #[error("Unknown object to serialize: {type_name}")]
    UnknownShape { type_name: &'static str },

    /// A homogeneous primitive array whose element kind has no JSON form.
    #[error("Unhandled primitive type: {kind}")]
    UnhandledPrimitive { kind: &'static str },

    /// The configured output encoding is not supported.
    #[error("unsupported output encoding: {0}")]
    UnsupportedEncoding(String),

    /// Configuration text could not be turned into render options.
    #[error("invalid render options: {0}")]
    InvalidOptions(String),

    /// The underlying sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
