use crate::model::{Quotation, Span, UNKNOWN_SPEAKER};
use crate::value::Value;
use crate::writer::ObjectWriter;
use crate::Result;

pub(crate) fn quotes_value(quotes: &[Quotation]) -> Value<'_> {
    Value::seq(quotes.iter().map(|q| Value::object(move |o| write_quote(o, q))))
}

fn set_bounds(
    o: &mut ObjectWriter<'_, '_>,
    begin_key: &str,
    end_key: &str,
    span: Option<Span>,
) -> Result<()> {
    o.set(begin_key, span.and_then(|s| s.begin))?;
    o.set(end_key, span.and_then(|s| s.end))
}

fn write_quote(o: &mut ObjectWriter<'_, '_>, q: &Quotation) -> Result<()> {
    o.set("id", q.index)?;
    o.set("text", q.text.as_deref())?;
    set_bounds(o, "characterOffsetBegin", "characterOffsetEnd", q.char_span)?;
    set_bounds(o, "beginToken", "endToken", q.token_span)?;
    set_bounds(o, "beginSentence", "endSentence", q.sentence_span)?;
    o.set("speaker", q.speaker.as_deref().unwrap_or(UNKNOWN_SPEAKER))?;
    o.set("canonicalSpeaker", q.canonical_speaker.as_deref().unwrap_or(UNKNOWN_SPEAKER))?;
    o.set("mention", q.mention.as_deref())?;
    set_bounds(o, "mentionBegin", "mentionEnd", q.mention_span)?;
    o.set("mentionType", q.mention_type.as_deref())?;
    o.set("mentionSieve", q.mention_sieve.as_deref())?;
    o.set("speakerSieve", q.speaker_sieve.as_deref())?;
    o.set("canonicalMention", q.canonical_mention.as_deref())?;
    set_bounds(o, "canonicalMentionBegin", "canonicalMentionEnd", q.canonical_mention_span)
}
