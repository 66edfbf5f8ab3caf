//! The Tagwire value model.

use std::borrow::Cow;

use crate::types::TypeTag;

/// A value representable in the Tagwire wire format.
///
/// The set of cases is closed: every value has exactly one wire form and
/// encoding is total, with no fallback branch. The lifetime parameter
/// carries zero-copy blob views: a `Value` produced by decoding may hold
/// `Blob(Cow::Borrowed(..))` slices into the input buffer, which must
/// outlive the value. Every other case owns its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// No payload.
    Null,
    /// Boolean.
    Bool(bool),
    /// IEEE-754 double-precision float.
    Number(f64),
    /// Signed 64-bit integer. Carries a distinct wire tag from `Number`
    /// and is never implicitly converted to or from it.
    Int64(i64),
    /// UTF-8 text.
    String(String),
    /// Opaque bytes. Decoding borrows the input buffer instead of copying.
    Blob(Cow<'a, [u8]>),
    /// Ordered sequence, dense and 0-based.
    List(Vec<Value<'a>>),
    /// Ordered key/value pairs. Iteration and encode order is insertion
    /// order and survives a round trip. Keys must be unique; the encoder
    /// does not check this, it is the caller's contract.
    Map(Vec<(String, Value<'a>)>),
}

impl<'a> Value<'a> {
    /// Returns the wire tag for this value.
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Bool,
            Value::Number(_) => TypeTag::Number,
            Value::Int64(_) => TypeTag::Int64,
            Value::String(_) => TypeTag::String,
            Value::Blob(_) => TypeTag::Blob,
            Value::List(_) => TypeTag::List,
            Value::Map(_) => TypeTag::Map,
        }
    }

    /// Returns true if this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the float payload, if this is a `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an `Int64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text payload, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the byte payload, if this is a `Blob`.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Blob(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the elements, if this is a `List`.
    pub fn as_list(&self) -> Option<&[Value<'a>]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the pairs in insertion order, if this is a `Map`.
    pub fn as_map(&self) -> Option<&[(String, Value<'a>)]> {
        match self {
            Value::Map(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Detaches the value from any borrowed input buffer by copying
    /// blob views into owned storage.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(b),
            Value::Number(n) => Value::Number(n),
            Value::Int64(n) => Value::Int64(n),
            Value::String(s) => Value::String(s),
            Value::Blob(b) => Value::Blob(Cow::Owned(b.into_owned())),
            Value::List(items) => {
                Value::List(items.into_iter().map(Value::into_owned).collect())
            }
            Value::Map(pairs) => Value::Map(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k, v.into_owned()))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Int64(n)
    }
}

impl From<&str> for Value<'_> {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<u8>> for Value<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Blob(Cow::Owned(bytes))
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Value::Blob(Cow::Borrowed(bytes))
    }
}

impl<'a> From<Vec<Value<'a>>> for Value<'a> {
    fn from(items: Vec<Value<'a>>) -> Self {
        Value::List(items)
    }
}

impl<'a> From<Vec<(String, Value<'a>)>> for Value<'a> {
    fn from(pairs: Vec<(String, Value<'a>)>) -> Self {
        Value::Map(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_per_case() {
        assert_eq!(Value::Null.tag(), TypeTag::Null);
        assert_eq!(Value::Bool(true).tag(), TypeTag::Bool);
        assert_eq!(Value::Number(1.5).tag(), TypeTag::Number);
        assert_eq!(Value::Int64(-3).tag(), TypeTag::Int64);
        assert_eq!(Value::from("x").tag(), TypeTag::String);
        assert_eq!(Value::from(vec![0u8]).tag(), TypeTag::Blob);
        assert_eq!(Value::List(vec![]).tag(), TypeTag::List);
        assert_eq!(Value::Map(vec![]).tag(), TypeTag::Map);
    }

    #[test]
    fn test_accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Number(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::Int64(7).as_i64(), Some(7));
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
        assert_eq!(Value::from(vec![1u8, 2]).as_bytes(), Some(&[1u8, 2][..]));
        assert_eq!(Value::Int64(7).as_f64(), None);
        assert_eq!(Value::Number(2.5).as_i64(), None);
    }

    #[test]
    fn test_into_owned_detaches_blob_views() {
        let input = [1u8, 2, 3];
        let borrowed = Value::List(vec![Value::Blob(Cow::Borrowed(&input))]);
        let owned: Value<'static> = borrowed.into_owned();
        assert_eq!(owned.as_list().unwrap()[0].as_bytes(), Some(&[1u8, 2, 3][..]));
    }
}
