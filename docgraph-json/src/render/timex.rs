use crate::model::{Timex, TimexRange};
use crate::value::Value;

pub(crate) fn timex_value(timex: &Timex) -> Value<'_> {
    Value::object(move |o| {
        o.set("tid", timex.tid.as_deref())?;
        o.set("type", timex.timex_type.as_deref())?;
        o.set("value", timex.value.as_deref())?;
        o.set("altValue", timex.alt_value.as_deref())?;
        o.set("range", timex.range.as_ref().map(range_value))
    })
}

fn range_value(range: &TimexRange) -> Value<'_> {
    Value::object(move |o| {
        o.set("begin", range.begin.as_deref())?;
        o.set("end", range.end.as_deref())?;
        o.set("duration", range.duration.as_deref())
    })
}
