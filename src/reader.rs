//! Tagwire decoder.

use std::borrow::Cow;

use byteorder::{BigEndian, ByteOrder};

use crate::error::{Error, Result};
use crate::types::TypeTag;
use crate::value::Value;

/// Reader decodes Tagwire values from a binary buffer.
///
/// The reader is the decode cursor: it holds the input slice and the
/// current position, advancing monotonically as fields are consumed. The
/// cursor lives in this value, never on the buffer, so any number of
/// readers may decode the same buffer concurrently.
#[derive(Debug)]
pub struct Reader<'a> {
    buffer: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            buffer: data,
            pos: 0,
        }
    }

    /// Creates a new reader positioned at `offset`.
    pub fn at_offset(data: &'a [u8], offset: usize) -> Result<Self> {
        if offset > data.len() {
            return Err(Error::out_of_bounds(offset, data.len()));
        }
        Ok(Self {
            buffer: data,
            pos: offset,
        })
    }

    /// Returns the current position in the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes remaining.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.pos
    }

    /// Returns true if there is more data to read.
    pub fn has_more(&self) -> bool {
        self.pos < self.buffer.len()
    }

    /// Checks if there are enough bytes available.
    fn check_available(&self, needed: usize) -> Result<()> {
        if needed > self.remaining() {
            return Err(Error::out_of_bounds(needed, self.remaining()));
        }
        Ok(())
    }

    /// Reads a raw byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        self.check_available(1)?;
        let value = self.buffer[self.pos];
        self.pos += 1;
        Ok(value)
    }

    /// Reads raw bytes, borrowing the input buffer.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        self.check_available(length)?;
        let bytes = &self.buffer[self.pos..self.pos + length];
        self.pos += length;
        Ok(bytes)
    }

    /// Reads a 16-bit unsigned integer (big-endian).
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.read_bytes(2)?))
    }

    /// Reads a 32-bit unsigned integer (big-endian).
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(BigEndian::read_u32(self.read_bytes(4)?))
    }

    /// Reads a 64-bit signed integer (big-endian).
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.read_bytes(8)?))
    }

    /// Reads a 64-bit float (IEEE 754, big-endian).
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(BigEndian::read_f64(self.read_bytes(8)?))
    }

    /// Reads a type tag byte.
    pub fn read_tag(&mut self) -> Result<TypeTag> {
        let byte = self.read_byte()?;
        TypeTag::from_u8(byte).ok_or(Error::UnknownTypeTag(byte))
    }

    /// Reads a length-prefixed UTF-8 payload into an owned string.
    fn read_text(&mut self, length: usize) -> Result<String> {
        let bytes = self.read_bytes(length)?;
        let text = std::str::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)?;
        Ok(text.to_owned())
    }

    /// Reads one value, recursing into lists and maps.
    ///
    /// Blobs borrow the input buffer rather than copying. Recursion depth
    /// equals the nesting depth of the input; there is no depth guard.
    pub fn read_value(&mut self) -> Result<Value<'a>> {
        match self.read_tag()? {
            TypeTag::Null => Ok(Value::Null),
            TypeTag::Bool => Ok(Value::Bool(self.read_byte()? != 0)),
            TypeTag::Number => Ok(Value::Number(self.read_f64()?)),
            TypeTag::Int64 => Ok(Value::Int64(self.read_i64()?)),
            TypeTag::String => {
                let length = self.read_u32()? as usize;
                Ok(Value::String(self.read_text(length)?))
            }
            TypeTag::Blob => {
                let length = self.read_u32()? as usize;
                Ok(Value::Blob(Cow::Borrowed(self.read_bytes(length)?)))
            }
            TypeTag::List => {
                let count = self.read_u32()?;
                // The count comes from the wire; do not preallocate from it.
                let mut items = Vec::new();
                for _ in 0..count {
                    items.push(self.read_value()?);
                }
                Ok(Value::List(items))
            }
            TypeTag::Map => {
                let count = self.read_u32()?;
                let mut pairs = Vec::new();
                for _ in 0..count {
                    let key_length = self.read_u16()? as usize;
                    let key = self.read_text(key_length)?;
                    let item = self.read_value()?;
                    pairs.push((key, item));
                }
                Ok(Value::Map(pairs))
            }
        }
    }
}
