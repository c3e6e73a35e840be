use crate::model::Section;
use crate::value::Value;

pub(crate) fn sections_value(sections: &[Section]) -> Value<'_> {
    Value::seq(sections.iter().map(|section| {
        Value::object(move |o| {
            o.set("charBegin", section.char_begin)?;
            o.set("charEnd", section.char_end)?;
            o.set("author", section.author.as_deref())?;
            o.set("dateTime", section.date_time.as_deref())?;
            o.set("sentenceIndexes", Value::seq(section.sentence_indexes.iter().copied()))
        })
    }))
}
