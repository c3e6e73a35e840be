//! Value dispatch.
//!
//! Classifies one [`Value`] and writes it through the [`JsonWriter`],
//! recursing into pairs, arrays, sequences, and nested objects. The
//! classification order is fixed:
//!
//! 1. null
//! 2. text
//! 3. boolean
//! 4. number / single character
//! 5. enumeration member
//! 6. pair
//! 7. span
//! 8. primitive array
//! 9. array / ordered collection
//! 10. lazy sequence
//! 11. nested-object callback
//! 12. anything else: error
//!
//! Null object fields never reach this module (the [`ObjectWriter`] drops
//! them), so a null seen here is an array element or pair component and is
//! written as `null`.
//!
//! [`ObjectWriter`]: crate::writer::ObjectWriter

use crate::error::{Error, Result};
use crate::format::Numeric;
use crate::value::{Primitives, Value};
use crate::writer::{JsonWriter, Scalar};

/// Write `value` at the writer's current position.
pub fn write_value(writer: &mut JsonWriter<'_>, value: Value<'_>) -> Result<()> {
    match value {
        Value::Null => writer.write_scalar(Scalar::Null),
        Value::Text(text) => writer.write_scalar(Scalar::Str(&text)),
        Value::Bool(b) => writer.write_scalar(Scalar::Bool(b)),
        Value::Number(n) => writer.write_scalar(Scalar::Number(n)),
        Value::Char(c) => writer.write_scalar(Scalar::Char(c)),
        Value::Enum(name) => writer.write_scalar(Scalar::Str(name)),
        Value::Pair(pair) => {
            let (first, second) = *pair;
            writer.begin_array()?;
            write_value(writer, first)?;
            write_value(writer, second)?;
            writer.end_array()
        }
        Value::Span(span) => writer.write_span(
            Numeric::from(span.begin_or_zero()),
            Numeric::from(span.end_or_zero()),
        ),
        Value::Primitives(items) => write_primitives(writer, items),
        Value::Array(items) => write_items(writer, items),
        Value::Seq(seq) => write_items(writer, seq),
        Value::Object(populate) => writer.object(|fields| populate.populate(fields)),
        Value::Opaque(type_name) => Err(Error::UnknownShape { type_name }),
    }
}

fn write_items<'a, I>(writer: &mut JsonWriter<'_>, items: I) -> Result<()>
where
    I: IntoIterator<Item = Value<'a>>,
{
    writer.begin_array()?;
    for item in items {
        write_value(writer, item)?;
    }
    writer.end_array()
}

fn write_numbers<T>(writer: &mut JsonWriter<'_>, items: &[T]) -> Result<()>
where
    T: Copy + Into<Numeric>,
{
    for &n in items {
        writer.write_scalar(Scalar::Number(n.into()))?;
    }
    Ok(())
}

fn write_primitives(writer: &mut JsonWriter<'_>, items: Primitives<'_>) -> Result<()> {
    // Reject before the opening bracket so no partial array is written.
    if let Primitives::Unsupported { kind } = items {
        return Err(Error::UnhandledPrimitive { kind });
    }

    writer.begin_array()?;
    match items {
        Primitives::Bool(v) => {
            for &b in v {
                writer.write_scalar(Scalar::Bool(b))?;
            }
        }
        Primitives::Char(v) => {
            for &c in v {
                writer.write_scalar(Scalar::Char(c))?;
            }
        }
        Primitives::Byte(v) => write_numbers(writer, v)?,
        Primitives::Short(v) => write_numbers(writer, v)?,
        Primitives::Int(v) => write_numbers(writer, v)?,
        Primitives::Long(v) => write_numbers(writer, v)?,
        Primitives::Float(v) => write_numbers(writer, v)?,
        Primitives::Double(v) => write_numbers(writer, v)?,
        Primitives::Unsupported { .. } => {}
    }
    writer.end_array()
}
