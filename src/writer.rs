//! Tagwire encoder.

use crate::error::{Error, Result};
use crate::types::{TypeTag, MAX_KEY_LEN, MAX_LEN32};
use crate::value::Value;

const INITIAL_CAPACITY: usize = 256;

/// Writer encodes Tagwire values into a binary buffer.
pub struct Writer {
    buffer: Vec<u8>,
}

impl Writer {
    /// Creates a new writer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a new writer with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Returns the current length of the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the encoded bytes as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the writer and returns the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Resets the writer for reuse.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Writes a type tag byte.
    pub fn write_tag(&mut self, tag: TypeTag) {
        self.buffer.push(tag as u8);
    }

    /// Writes a raw byte.
    pub fn write_byte(&mut self, value: u8) {
        self.buffer.push(value);
    }

    /// Writes raw bytes.
    pub fn write_bytes(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Writes a 16-bit unsigned integer (big-endian).
    pub fn write_u16(&mut self, value: u16) {
        self.buffer.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a 32-bit unsigned integer (big-endian).
    pub fn write_u32(&mut self, value: u32) {
        self.buffer.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a 64-bit signed integer (big-endian).
    pub fn write_i64(&mut self, value: i64) {
        self.buffer.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a 64-bit float (IEEE 754, big-endian).
    pub fn write_f64(&mut self, value: f64) {
        self.buffer.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a 32-bit length field, rejecting lengths that do not fit.
    pub fn write_len32(&mut self, len: usize) -> Result<()> {
        let value =
            u32::try_from(len).map_err(|_| Error::length_overflow(len, MAX_LEN32))?;
        self.write_u32(value);
        Ok(())
    }

    /// Writes a length-prefixed map key, rejecting keys longer than the
    /// 16-bit length field allows.
    pub fn write_key(&mut self, key: &str) -> Result<()> {
        let len = key.len();
        if len > MAX_KEY_LEN {
            return Err(Error::length_overflow(len, MAX_KEY_LEN as u64));
        }
        self.write_u16(len as u16);
        self.write_bytes(key.as_bytes());
        Ok(())
    }

    /// Writes one value, recursing into lists and maps.
    ///
    /// All length checks run before the field they guard is emitted, so a
    /// `LengthOverflow` from a nested value can leave a partial prefix in
    /// the buffer; the top-level [`encode`](crate::encode) entry point
    /// discards the buffer on error, so no caller observes it.
    pub fn write_value(&mut self, value: &Value<'_>) -> Result<()> {
        self.write_tag(value.tag());
        match value {
            Value::Null => {}
            Value::Bool(b) => self.write_byte(u8::from(*b)),
            Value::Number(n) => self.write_f64(*n),
            Value::Int64(n) => self.write_i64(*n),
            Value::String(s) => {
                self.write_len32(s.len())?;
                self.write_bytes(s.as_bytes());
            }
            Value::Blob(b) => {
                self.write_len32(b.len())?;
                self.write_bytes(b);
            }
            Value::List(items) => {
                self.write_len32(items.len())?;
                for item in items {
                    self.write_value(item)?;
                }
            }
            Value::Map(pairs) => {
                self.write_len32(pairs.len())?;
                for (key, item) in pairs {
                    self.write_key(key)?;
                    self.write_value(item)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_null() {
        let mut writer = Writer::new();
        writer.write_value(&Value::Null).unwrap();
        assert_eq!(writer.as_bytes(), &[7]);
    }

    #[test]
    fn test_write_bool() {
        let mut writer = Writer::new();
        writer.write_value(&Value::Bool(true)).unwrap();
        writer.write_value(&Value::Bool(false)).unwrap();
        assert_eq!(writer.as_bytes(), &[3, 1, 3, 0]);
    }

    #[test]
    fn test_write_number_big_endian() {
        let mut writer = Writer::new();
        writer.write_value(&Value::Number(1.0)).unwrap();
        assert_eq!(writer.as_bytes(), &[2, 0x3f, 0xf0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_write_int64_big_endian() {
        let mut writer = Writer::new();
        writer.write_value(&Value::Int64(-2)).unwrap();
        assert_eq!(
            writer.as_bytes(),
            &[6, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe]
        );
    }

    #[test]
    fn test_write_string() {
        let mut writer = Writer::new();
        writer.write_value(&Value::from("hi")).unwrap();
        assert_eq!(writer.as_bytes(), &[1, 0, 0, 0, 2, b'h', b'i']);
    }

    #[test]
    fn test_write_blob() {
        let mut writer = Writer::new();
        writer.write_value(&Value::from(vec![0xde, 0xad])).unwrap();
        assert_eq!(writer.as_bytes(), &[0, 0, 0, 0, 2, 0xde, 0xad]);
    }

    #[test]
    fn test_write_list() {
        let mut writer = Writer::new();
        writer
            .write_value(&Value::List(vec![Value::Null, Value::Bool(true)]))
            .unwrap();
        assert_eq!(writer.as_bytes(), &[5, 0, 0, 0, 2, 7, 3, 1]);
    }

    #[test]
    fn test_write_map_pair_layout() {
        let mut writer = Writer::new();
        writer
            .write_value(&Value::Map(vec![("a".to_owned(), Value::Null)]))
            .unwrap();
        assert_eq!(writer.as_bytes(), &[4, 0, 0, 0, 1, 0, 1, b'a', 7]);
    }

    #[test]
    fn test_oversized_map_key_rejected() {
        let mut writer = Writer::new();
        let key = "k".repeat(u16::MAX as usize + 1);
        let value = Value::Map(vec![(key, Value::Null)]);
        let err = writer.write_value(&value).unwrap_err();
        assert_eq!(
            err,
            Error::length_overflow(u16::MAX as usize + 1, u16::MAX as u64)
        );
    }

    #[test]
    fn test_reset_for_reuse() {
        let mut writer = Writer::new();
        writer.write_value(&Value::Null).unwrap();
        writer.reset();
        assert!(writer.is_empty());
        writer.write_value(&Value::Bool(false)).unwrap();
        assert_eq!(writer.as_bytes(), &[3, 0]);
    }
}
