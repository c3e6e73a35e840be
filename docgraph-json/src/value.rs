//! Renderable value shapes.
//!
//! `Value` is a closed set: every shape the dispatcher knows how to write
//! has a variant, and anything else is carried as [`Value::Opaque`] so it
//! can be rejected at render time with its type name. Values are consumed
//! by rendering, which is what makes lazy sequences and object callbacks
//! single-use.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::Result;
use crate::format::Numeric;
use crate::model::Span;
use crate::writer::ObjectWriter;

/// A value waiting to be written.
pub enum Value<'a> {
    /// Absent. Dropped as an object field, written as `null` inside arrays.
    Null,
    Text(Cow<'a, str>),
    Bool(bool),
    Number(Numeric),
    /// A single character, written as a one-character string.
    Char(char),
    /// An enumeration member, written as its symbolic name.
    Enum(&'static str),
    /// Two components, always written as a two-element array.
    Pair(Box<(Value<'a>, Value<'a>)>),
    /// A `[begin, end]` interval.
    Span(Span),
    /// A homogeneous array of primitives.
    Primitives(Primitives<'a>),
    /// An array or ordered collection of values.
    Array(Vec<Value<'a>>),
    /// A lazy sequence, pulled exactly once while rendering.
    Seq(LazySeq<'a>),
    /// A callback that fills a nested object.
    Object(ObjectFn<'a>),
    /// A value of a type with no JSON shape. Rendering it is an error.
    Opaque(&'static str),
}

impl<'a> Value<'a> {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn text(s: impl Into<Cow<'a, str>>) -> Self {
        Value::Text(s.into())
    }

    pub fn pair(first: impl Into<Value<'a>>, second: impl Into<Value<'a>>) -> Self {
        Value::Pair(Box::new((first.into(), second.into())))
    }

    /// A nested object filled by `populate` when rendered.
    pub fn object<F>(populate: F) -> Self
    where
        F: FnOnce(&mut ObjectWriter<'_, '_>) -> Result<()> + 'a,
    {
        Value::Object(ObjectFn::new(populate))
    }

    /// A lazy sequence over `items`.
    pub fn seq<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: Into<Value<'a>> + 'a,
    {
        Value::Seq(LazySeq::new(items))
    }

    /// Stand-in for a value of type `T`, which has no JSON shape.
    pub fn opaque<T: ?Sized>() -> Self {
        Value::Opaque(std::any::type_name::<T>())
    }

    /// Variant name, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Text(_) => "text",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Char(_) => "char",
            Value::Enum(_) => "enum",
            Value::Pair(_) => "pair",
            Value::Span(_) => "span",
            Value::Primitives(_) => "primitives",
            Value::Array(_) => "array",
            Value::Seq(_) => "seq",
            Value::Object(_) => "object",
            Value::Opaque(_) => "opaque",
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Value::Enum(name) => f.debug_tuple("Enum").field(name).finish(),
            Value::Pair(pair) => f.debug_tuple("Pair").field(&pair.0).field(&pair.1).finish(),
            Value::Span(span) => f.debug_tuple("Span").field(span).finish(),
            Value::Primitives(p) => f.debug_tuple("Primitives").field(p).finish(),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Seq(_) => f.write_str("Seq(..)"),
            Value::Object(_) => f.write_str("Object(..)"),
            Value::Opaque(name) => f.debug_tuple("Opaque").field(name).finish(),
        }
    }
}

// ============================================================================
// Primitive arrays
// ============================================================================

/// A borrowed homogeneous array of one primitive kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitives<'a> {
    Bool(&'a [bool]),
    Byte(&'a [u8]),
    Short(&'a [i16]),
    Int(&'a [i32]),
    Long(&'a [i64]),
    Float(&'a [f32]),
    Double(&'a [f64]),
    Char(&'a [char]),
    /// An element kind without a JSON form.
    Unsupported { kind: &'static str },
}

impl Primitives<'_> {
    /// Number of elements, or `None` for an unsupported kind.
    pub fn len(&self) -> Option<usize> {
        match self {
            Primitives::Bool(v) => Some(v.len()),
            Primitives::Byte(v) => Some(v.len()),
            Primitives::Short(v) => Some(v.len()),
            Primitives::Int(v) => Some(v.len()),
            Primitives::Long(v) => Some(v.len()),
            Primitives::Float(v) => Some(v.len()),
            Primitives::Double(v) => Some(v.len()),
            Primitives::Char(v) => Some(v.len()),
            Primitives::Unsupported { .. } => None,
        }
    }
}

macro_rules! primitives_from {
    ($($variant:ident => $elem:ty),* $(,)?) => {
        $(
            impl<'a> From<&'a [$elem]> for Primitives<'a> {
                fn from(v: &'a [$elem]) -> Self {
                    Primitives::$variant(v)
                }
            }

            impl<'a> From<&'a [$elem]> for Value<'a> {
                fn from(v: &'a [$elem]) -> Self {
                    Value::Primitives(Primitives::$variant(v))
                }
            }
        )*
    };
}

primitives_from! {
    Bool => bool,
    Byte => u8,
    Short => i16,
    Int => i32,
    Long => i64,
    Float => f32,
    Double => f64,
    Char => char,
}

macro_rules! primitives_unsupported {
    ($($elem:ty),*) => {
        $(
            impl<'a> From<&'a [$elem]> for Value<'a> {
                fn from(_: &'a [$elem]) -> Self {
                    Value::Primitives(Primitives::Unsupported { kind: stringify!($elem) })
                }
            }
        )*
    };
}

primitives_unsupported!(i128, u128);

// ============================================================================
// Lazy sequences and object callbacks
// ============================================================================

/// A sequence pulled once, in order, while it is rendered.
pub struct LazySeq<'a> {
    items: Box<dyn Iterator<Item = Value<'a>> + 'a>,
}

impl<'a> LazySeq<'a> {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: Into<Value<'a>> + 'a,
    {
        Self { items: Box::new(items.into_iter().map(Into::into)) }
    }
}

impl<'a> Iterator for LazySeq<'a> {
    type Item = Value<'a>;

    fn next(&mut self) -> Option<Value<'a>> {
        self.items.next()
    }
}

type Populate<'a> = dyn FnOnce(&mut ObjectWriter<'_, '_>) -> Result<()> + 'a;

/// Callback that fills one nested object when it is rendered.
pub struct ObjectFn<'a> {
    populate: Box<Populate<'a>>,
}

impl<'a> ObjectFn<'a> {
    pub fn new<F>(populate: F) -> Self
    where
        F: FnOnce(&mut ObjectWriter<'_, '_>) -> Result<()> + 'a,
    {
        Self { populate: Box::new(populate) }
    }

    pub fn populate(self, writer: &mut ObjectWriter<'_, '_>) -> Result<()> {
        (self.populate)(writer)
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Enumerations written by their symbolic name.
pub trait Symbol {
    fn symbol(&self) -> &'static str;
}

/// Implement `From<T> for Value` for enums that implement [`Symbol`].
macro_rules! symbol_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> From<$ty> for $crate::value::Value<'a> {
                fn from(v: $ty) -> Self {
                    $crate::value::Value::Enum($crate::value::Symbol::symbol(&v))
                }
            }

            impl<'a> From<&'a $ty> for $crate::value::Value<'a> {
                fn from(v: &'a $ty) -> Self {
                    $crate::value::Value::Enum($crate::value::Symbol::symbol(v))
                }
            }
        )*
    };
}
pub(crate) use symbol_value;

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Text(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value<'_> {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

macro_rules! number_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(n: $ty) -> Self {
                    Value::Number(Numeric::from(n))
                }
            }
        )*
    };
}

number_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Numeric> for Value<'_> {
    fn from(n: Numeric) -> Self {
        Value::Number(n)
    }
}

impl From<Span> for Value<'_> {
    fn from(span: Span) -> Self {
        Value::Span(span)
    }
}

impl<'a> From<Primitives<'a>> for Value<'a> {
    fn from(p: Primitives<'a>) -> Self {
        Value::Primitives(p)
    }
}

impl<'a> From<LazySeq<'a>> for Value<'a> {
    fn from(seq: LazySeq<'a>) -> Self {
        Value::Seq(seq)
    }
}

impl<'a> From<ObjectFn<'a>> for Value<'a> {
    fn from(populate: ObjectFn<'a>) -> Self {
        Value::Object(populate)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<'a, T: Into<Value<'a>>> From<Vec<T>> for Value<'a> {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<'a, A, B> From<(A, B)> for Value<'a>
where
    A: Into<Value<'a>>,
    B: Into<Value<'a>>,
{
    fn from((first, second): (A, B)) -> Self {
        Value::pair(first, second)
    }
}

// Maps have no generic rendering; only dedicated renderers write map-like
// tables. Converting one yields an opaque value so the mistake surfaces.

impl<'a, K, V, S> From<&'a HashMap<K, V, S>> for Value<'a> {
    fn from(_: &'a HashMap<K, V, S>) -> Self {
        Value::opaque::<HashMap<K, V, S>>()
    }
}

impl<'a, K, V> From<&'a BTreeMap<K, V>> for Value<'a> {
    fn from(_: &'a BTreeMap<K, V>) -> Self {
        Value::opaque::<BTreeMap<K, V>>()
    }
}
