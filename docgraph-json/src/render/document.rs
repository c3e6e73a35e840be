use crate::model::Document;
use crate::options::RenderOptions;
use crate::writer::ObjectWriter;
use crate::Result;

use super::{coref, quote, section, sentence, token};

/// Top-level document fields in canonical order.
pub(crate) fn write_document(
    o: &mut ObjectWriter<'_, '_>,
    doc: &Document,
    options: &RenderOptions,
) -> Result<()> {
    o.set("docId", doc.id.as_deref())?;
    o.set("docDate", doc.date.as_deref())?;
    o.set("docSourceType", doc.source_type.as_deref())?;
    o.set("docType", doc.doc_type.as_deref())?;
    o.set("author", doc.author.as_deref())?;
    o.set("location", doc.location.as_deref())?;
    if options.include_text {
        o.set("text", doc.text.as_deref())?;
    }
    o.set(
        "sentences",
        doc.sentences.as_deref().map(|ss| sentence::sentences_value(ss, options)),
    )?;
    o.set("sections", doc.sections.as_deref().map(section::sections_value))?;
    if doc.sentences.is_none() {
        o.set("tokens", doc.tokens.as_deref().map(token::tokens_value))?;
    }
    o.set("quotes", doc.quotes.as_deref().map(quote::quotes_value))?;
    o.set("corefs", doc.coref_chains.as_deref().map(coref::corefs_value))
}
