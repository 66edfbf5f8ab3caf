//! Wire format types.

/// Type tags used in the Tagwire encoding format.
///
/// The numeric assignment is part of wire compatibility: encoders and
/// decoders on both sides of a transport must agree on it bit-for-bit,
/// so these values must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TypeTag {
    /// Opaque byte sequence, length-prefixed.
    Blob = 0,
    /// UTF-8 text, length-prefixed.
    String = 1,
    /// IEEE-754 double-precision float (big-endian).
    Number = 2,
    /// Boolean, stored as one byte.
    Bool = 3,
    /// Ordered key/value pairs with string keys.
    Map = 4,
    /// Ordered sequence of values.
    List = 5,
    /// Signed 64-bit integer (big-endian).
    Int64 = 6,
    /// No payload.
    Null = 7,
}

impl TypeTag {
    /// Converts a tag byte to a TypeTag.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(TypeTag::Blob),
            1 => Some(TypeTag::String),
            2 => Some(TypeTag::Number),
            3 => Some(TypeTag::Bool),
            4 => Some(TypeTag::Map),
            5 => Some(TypeTag::List),
            6 => Some(TypeTag::Int64),
            7 => Some(TypeTag::Null),
            _ => None,
        }
    }
}

/// Maximum byte length of a map key (16-bit length field).
pub const MAX_KEY_LEN: usize = u16::MAX as usize;

/// Maximum value of the 32-bit length fields: string/blob byte length,
/// list element count, map pair count.
pub const MAX_LEN32: u64 = u32::MAX as u64;
