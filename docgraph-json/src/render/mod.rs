//! Domain renderers and the document walker.
//!
//! Each renderer turns one model type into a [`Value`] whose object callback
//! writes that type's keys in canonical order. Absent fields are simply not
//! set; the [`ObjectWriter`] drops them.

mod coref;
mod dependencies;
mod document;
mod mention;
mod quote;
mod section;
mod sentence;
mod timex;
mod token;

use std::io::{self, BufWriter, Write};

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::options::RenderOptions;
use crate::value::Value;
use crate::writer::{JsonWriter, ObjectWriter};

pub use coref::coref_chain_value;

/// Render `document` and return the JSON text.
pub fn render_to_string(document: &Document, options: &RenderOptions) -> Result<String> {
    let mut buf = Vec::with_capacity(4096);
    render_to_sink(document, &mut buf, options)?;
    into_string(buf)
}

/// Render `document` into `sink`.
///
/// Output is buffered and flushed before returning. On error the sink may
/// hold a partial document.
pub fn render_to_sink(
    document: &Document,
    sink: &mut dyn Write,
    options: &RenderOptions,
) -> Result<()> {
    options.check_encoding()?;

    let mut out = BufWriter::new(sink);
    let mut writer = JsonWriter::new(&mut out, options.pretty);
    writer.object(|o| document::write_document(o, document, options))?;
    writer.flush()?;

    debug!(
        doc_id = document.id.as_deref().unwrap_or(""),
        sentences = document.sentence_count(),
        pretty = options.pretty,
        bytes = writer.bytes_written(),
        "rendered document"
    );
    Ok(())
}

/// Render a single object filled by `populate`.
///
/// Useful for partial structures such as one coreference chain:
///
/// ```
/// use docgraph_json::{build_object, coref_chain_value, CorefChain, RenderOptions};
///
/// let chain = CorefChain::new(1, Vec::new());
/// let json = build_object(&RenderOptions::default(), |o| {
///     o.set("chain", coref_chain_value(&chain))
/// })
/// .unwrap();
/// assert_eq!(json, r#"{"chain": {"id": 1, "mentions": []}}"#);
/// ```
pub fn build_object<F>(options: &RenderOptions, populate: F) -> Result<String>
where
    F: FnOnce(&mut ObjectWriter<'_, '_>) -> Result<()>,
{
    options.check_encoding()?;

    let mut buf = Vec::new();
    let mut writer = JsonWriter::new(&mut buf, options.pretty);
    writer.object(populate)?;
    writer.flush()?;
    drop(writer);
    into_string(buf)
}

fn into_string(buf: Vec<u8>) -> Result<String> {
    String::from_utf8(buf).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Write a field that distinguishes unset (omitted) from explicit null.
pub(crate) fn set_tri_state<'v, T>(
    o: &mut ObjectWriter<'_, '_>,
    key: &str,
    field: &'v Option<Option<T>>,
    render: impl FnOnce(&'v T) -> Value<'v>,
) -> Result<()> {
    match field {
        None => Ok(()),
        Some(None) => o.set_null(key),
        Some(Some(value)) => o.set(key, render(value)),
    }
}
