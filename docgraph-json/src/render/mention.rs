use tracing::trace;

use crate::model::{EntityMention, NerConfidences, RelationTriple, Sentence, NO_ENTITY};
use crate::value::Value;

use super::timex;

/// Confidence table without the no-entity label, or `None` when nothing
/// else is left.
pub(crate) fn confidences_value(table: &NerConfidences) -> Option<Value<'_>> {
    if !table.keys().any(|label| label != NO_ENTITY) {
        if !table.is_empty() {
            trace!(entries = table.len(), "dropping NER confidences with only the no-entity label");
        }
        return None;
    }
    Some(Value::object(move |o| {
        for (label, p) in table.iter().filter(|(label, _)| label.as_str() != NO_ENTITY) {
            o.set(label.as_str(), *p)?;
        }
        Ok(())
    }))
}

pub(crate) fn entity_mentions_value<'d>(
    mentions: &'d [EntityMention],
    sentence: &'d Sentence,
) -> Value<'d> {
    Value::seq(mentions.iter().map(move |m| entity_mention_value(m, sentence)))
}

fn entity_mention_value<'d>(mention: &'d EntityMention, sentence: &'d Sentence) -> Value<'d> {
    Value::object(move |o| {
        let doc_span = mention.token_span;
        o.set("docTokenBegin", doc_span.and_then(|s| s.begin))?;
        o.set("docTokenEnd", doc_span.and_then(|s| s.end))?;
        if let (Some(span), Some(offset)) = (doc_span, sentence.token_offset) {
            let relative = span.relative_to(offset);
            o.set("tokenBegin", relative.begin)?;
            o.set("tokenEnd", relative.end)?;
        }
        o.set("text", mention.text.as_deref())?;
        o.set("characterOffsetBegin", mention.char_span.and_then(|s| s.begin))?;
        o.set("characterOffsetEnd", mention.char_span.and_then(|s| s.end))?;
        o.set("ner", mention.ner.as_deref())?;
        o.set("normalizedNER", mention.normalized_ner.as_deref())?;
        o.set("entitylink", mention.entity_link.as_deref())?;
        o.set(
            "nerConfidences",
            mention.ner_confidences.as_ref().and_then(confidences_value),
        )?;
        o.set("timex", mention.timex.as_ref().map(timex::timex_value))
    })
}

/// Open IE or KBP relation triples.
pub(crate) fn triples_value(triples: &[RelationTriple]) -> Value<'_> {
    Value::seq(triples.iter().map(|triple| {
        Value::object(move |o| {
            let spans = triple.spans;
            o.set("subject", triple.subject.as_deref())?;
            o.set("subjectSpan", spans.map(|s| s.subject))?;
            o.set("relation", triple.relation.as_deref())?;
            o.set("relationSpan", spans.map(|s| s.relation))?;
            o.set("object", triple.object.as_deref())?;
            o.set("objectSpan", spans.map(|s| s.object))
        })
    }))
}
