use crate::model::Token;
use crate::value::Value;
use crate::writer::ObjectWriter;
use crate::Result;

use super::{mention, set_tri_state, timex};

pub(crate) fn tokens_value(tokens: &[Token]) -> Value<'_> {
    Value::seq(tokens.iter().map(token_value))
}

pub(crate) fn token_value(token: &Token) -> Value<'_> {
    Value::object(move |o| write_token(o, token))
}

fn write_token(o: &mut ObjectWriter<'_, '_>, token: &Token) -> Result<()> {
    o.set("index", token.index)?;
    o.set("word", token.word.as_deref())?;
    o.set("originalText", token.original_text.as_deref())?;
    o.set("lemma", token.lemma.as_deref())?;
    o.set("characterOffsetBegin", token.char_begin)?;
    o.set("characterOffsetEnd", token.char_end)?;
    if let (Some(begin), Some(end)) = (token.codepoint_begin, token.codepoint_end) {
        o.set("codepointOffsetBegin", begin)?;
        o.set("codepointOffsetEnd", end)?;
    }
    o.set("pos", token.pos.as_deref())?;
    o.set("ner", token.ner.as_deref())?;
    o.set("normalizedNER", token.normalized_ner.as_deref())?;
    o.set(
        "nerConfidences",
        token.ner_confidences.as_ref().and_then(mention::confidences_value),
    )?;
    o.set("speaker", token.speaker.as_deref())?;
    o.set("speakerType", token.speaker_type.as_deref())?;
    o.set("truecase", token.truecase.as_deref())?;
    o.set("truecaseText", token.truecase_text.as_deref())?;
    o.set("before", token.before.as_deref())?;
    o.set("after", token.after.as_deref())?;
    o.set("entitylink", token.entity_link.as_deref())?;
    set_tri_state(o, "timex", &token.timex, timex::timex_value)
}
