//! Tagwire - deterministic binary codec for tagged values
//!
//! Encodes a closed set of value kinds (null, bool, float, 64-bit integer,
//! string, blob, list, map) into a byte-exact big-endian wire format and
//! back. Blob payloads decode as zero-copy views into the input buffer.
//!
//! # Example
//!
//! ```rust
//! use tagwire::{decode, encode, Result, Value};
//!
//! fn main() -> Result<()> {
//!     let value = Value::Map(vec![
//!         ("name".to_owned(), Value::from("hermes")),
//!         ("retries".to_owned(), Value::Int64(3)),
//!     ]);
//!
//!     let data = encode(&value)?;
//!     let decoded = decode(&data)?;
//!     assert_eq!(decoded, value);
//!
//!     let pairs = decoded.as_map().unwrap();
//!     assert_eq!(pairs[0].0, "name");
//!     assert_eq!(pairs[1].1.as_i64(), Some(3));
//!     Ok(())
//! }
//! ```

mod error;
mod reader;
mod types;
mod value;
mod writer;

pub use error::{Error, Result};
pub use reader::Reader;
pub use types::{TypeTag, MAX_KEY_LEN, MAX_LEN32};
pub use value::Value;
pub use writer::Writer;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encodes a value into an independently-owned byte sequence.
///
/// Fails only with [`Error::LengthOverflow`] when a string, blob, list,
/// map, or map key is too large for its fixed-width length field; in that
/// case no bytes are produced.
pub fn encode(value: &Value<'_>) -> Result<Vec<u8>> {
    let mut writer = Writer::new();
    writer.write_value(value)?;
    Ok(writer.into_bytes())
}

/// Decodes one value from the front of `data`.
///
/// Trailing bytes after the first complete value are tolerated and left
/// untouched; use [`decode_at`] to decode a sequence of values from one
/// buffer. Blob values in the result borrow `data`.
///
/// Recursion depth equals the nesting depth of the input, with no guard:
/// deeply nested input consumes call stack proportionally.
pub fn decode(data: &[u8]) -> Result<Value<'_>> {
    let (value, _) = decode_at(data, 0)?;
    Ok(value)
}

/// Decodes one value starting at `offset`, returning it together with the
/// offset of the first unconsumed byte.
///
/// Calling again with the returned offset decodes the next value in the
/// buffer, which is how a framing layer walks a buffer holding several
/// encoded values back to back.
pub fn decode_at(data: &[u8], offset: usize) -> Result<(Value<'_>, usize)> {
    let mut reader = Reader::at_offset(data, offset)?;
    let value = reader.read_value()?;
    // Unreachable unless an inner bounds check were bypassed.
    if reader.position() > data.len() {
        return Err(Error::corrupt_data(reader.position(), data.len()));
    }
    Ok((value, reader.position()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_smoke() {
        let value = Value::List(vec![Value::Int64(1), Value::from("two")]);
        let data = encode(&value).unwrap();
        assert_eq!(decode(&data).unwrap(), value);
    }

    #[test]
    fn test_decode_at_walks_concatenated_values() {
        let mut data = encode(&Value::Number(5.0)).unwrap();
        data.extend_from_slice(&encode(&Value::Number(6.0)).unwrap());

        let (first, next) = decode_at(&data, 0).unwrap();
        assert_eq!(first, Value::Number(5.0));
        assert_eq!(next, 9);

        let (second, end) = decode_at(&data, next).unwrap();
        assert_eq!(second, Value::Number(6.0));
        assert_eq!(end, data.len());
    }

    #[test]
    fn test_decode_at_past_end() {
        let data = encode(&Value::Null).unwrap();
        assert!(decode_at(&data, data.len() + 1).is_err());
    }
}
