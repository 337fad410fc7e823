//! Typed attribute values for the ZCL wire format

use crate::datatypes::eui64::Eui64;
use crate::error::{ZclError, ZclResult};
use crate::wire::{ZclDecoder, ZclEncoder};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Container holding an attribute value sent to or received from a device
///
/// Stores every payload shape an implemented ZCL data type can carry:
/// booleans, fixed-width general data, integers of 8 to 64 bits, floats,
/// length-prefixed strings, extended addresses, and security keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ZclValue {
    /// Boolean value
    Bool(bool),
    /// Fixed-width general data, 1 to 8 bytes wide
    Data(#[serde(with = "serde_bytes")] Vec<u8>),
    /// Unsigned integer 8-bit
    Uint8(u8),
    /// Unsigned integer 16-bit
    Uint16(u16),
    /// Unsigned integer 24-bit
    Uint24(u32),
    /// Unsigned integer 32-bit
    Uint32(u32),
    /// Unsigned integer 40-bit
    Uint40(u64),
    /// Unsigned integer 48-bit
    Uint48(u64),
    /// Unsigned integer 56-bit
    Uint56(u64),
    /// Unsigned integer 64-bit
    Uint64(u64),
    /// Signed integer 8-bit
    Int8(i8),
    /// Signed integer 16-bit
    Int16(i16),
    /// Signed integer 24-bit
    Int24(i32),
    /// Signed integer 32-bit
    Int32(i32),
    /// Signed integer 40-bit
    Int40(i64),
    /// Signed integer 48-bit
    Int48(i64),
    /// Signed integer 56-bit
    Int56(i64),
    /// Signed integer 64-bit
    Int64(i64),
    /// Float 32-bit
    Float32(f32),
    /// Float 64-bit
    Float64(f64),
    /// Octet string or character string, up to 255 bytes
    OctetString(#[serde(with = "serde_bytes")] Vec<u8>),
    /// IEEE EUI-64 extended address
    Eui64(Eui64),
    /// 128-bit security key, 16 16-bit words
    SecurityKey([u16; 16]),
}

/// Identity of a primitive payload codec
///
/// Each variant names one way of putting a value on the wire. The data type
/// registry assigns one codec to every implemented type tag; several tags may
/// share a codec (bitmaps, enumerations and unsigned integers of the same
/// width all encode identically).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Data8,
    Data16,
    Data24,
    Data32,
    Data40,
    Data48,
    Data56,
    Data64,
    Uint8,
    Uint16,
    Uint24,
    Uint32,
    Uint40,
    Uint48,
    Uint56,
    Uint64,
    Int8,
    Int16,
    Int24,
    Int32,
    Int40,
    Int48,
    Int56,
    Int64,
    Float32,
    Float64,
    OctetString,
    Eui64,
    SecurityKey,
}

impl PrimitiveKind {
    /// Encode a value with this codec
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if the value's shape does not match the codec
    pub fn encode(self, value: &ZclValue, encoder: &mut ZclEncoder) -> ZclResult<()> {
        match (self, value) {
            (PrimitiveKind::Bool, ZclValue::Bool(v)) => encoder.encode_bool(*v),
            (PrimitiveKind::Data8, ZclValue::Data(b)) => encode_fixed_data(b, 1, encoder),
            (PrimitiveKind::Data16, ZclValue::Data(b)) => encode_fixed_data(b, 2, encoder),
            (PrimitiveKind::Data24, ZclValue::Data(b)) => encode_fixed_data(b, 3, encoder),
            (PrimitiveKind::Data32, ZclValue::Data(b)) => encode_fixed_data(b, 4, encoder),
            (PrimitiveKind::Data40, ZclValue::Data(b)) => encode_fixed_data(b, 5, encoder),
            (PrimitiveKind::Data48, ZclValue::Data(b)) => encode_fixed_data(b, 6, encoder),
            (PrimitiveKind::Data56, ZclValue::Data(b)) => encode_fixed_data(b, 7, encoder),
            (PrimitiveKind::Data64, ZclValue::Data(b)) => encode_fixed_data(b, 8, encoder),
            (PrimitiveKind::Uint8, ZclValue::Uint8(v)) => encoder.encode_u8(*v),
            (PrimitiveKind::Uint16, ZclValue::Uint16(v)) => encoder.encode_u16(*v),
            (PrimitiveKind::Uint24, ZclValue::Uint24(v)) => encoder.encode_u24(*v),
            (PrimitiveKind::Uint32, ZclValue::Uint32(v)) => encoder.encode_u32(*v),
            (PrimitiveKind::Uint40, ZclValue::Uint40(v)) => encoder.encode_u40(*v),
            (PrimitiveKind::Uint48, ZclValue::Uint48(v)) => encoder.encode_u48(*v),
            (PrimitiveKind::Uint56, ZclValue::Uint56(v)) => encoder.encode_u56(*v),
            (PrimitiveKind::Uint64, ZclValue::Uint64(v)) => encoder.encode_u64(*v),
            (PrimitiveKind::Int8, ZclValue::Int8(v)) => encoder.encode_i8(*v),
            (PrimitiveKind::Int16, ZclValue::Int16(v)) => encoder.encode_i16(*v),
            (PrimitiveKind::Int24, ZclValue::Int24(v)) => encoder.encode_i24(*v),
            (PrimitiveKind::Int32, ZclValue::Int32(v)) => encoder.encode_i32(*v),
            (PrimitiveKind::Int40, ZclValue::Int40(v)) => encoder.encode_i40(*v),
            (PrimitiveKind::Int48, ZclValue::Int48(v)) => encoder.encode_i48(*v),
            (PrimitiveKind::Int56, ZclValue::Int56(v)) => encoder.encode_i56(*v),
            (PrimitiveKind::Int64, ZclValue::Int64(v)) => encoder.encode_i64(*v),
            (PrimitiveKind::Float32, ZclValue::Float32(v)) => encoder.encode_f32(*v),
            (PrimitiveKind::Float64, ZclValue::Float64(v)) => encoder.encode_f64(*v),
            (PrimitiveKind::OctetString, ZclValue::OctetString(b)) => {
                encoder.encode_octet_string(b)
            }
            (PrimitiveKind::Eui64, ZclValue::Eui64(addr)) => encoder.encode_bytes(addr.as_bytes()),
            (PrimitiveKind::SecurityKey, ZclValue::SecurityKey(key)) => {
                for word in key {
                    encoder.encode_u16(*word)?;
                }
                Ok(())
            }
            (kind, value) => Err(ZclError::InvalidData(format!(
                "Value {} does not match codec {:?}",
                value, kind
            ))),
        }
    }

    /// Decode a value with this codec, consuming exactly its bytes
    pub fn decode(self, decoder: &mut ZclDecoder<'_>) -> ZclResult<ZclValue> {
        let value = match self {
            PrimitiveKind::Bool => ZclValue::Bool(decoder.decode_bool()?),
            PrimitiveKind::Data8 => ZclValue::Data(decoder.decode_fixed_bytes(1)?),
            PrimitiveKind::Data16 => ZclValue::Data(decoder.decode_fixed_bytes(2)?),
            PrimitiveKind::Data24 => ZclValue::Data(decoder.decode_fixed_bytes(3)?),
            PrimitiveKind::Data32 => ZclValue::Data(decoder.decode_fixed_bytes(4)?),
            PrimitiveKind::Data40 => ZclValue::Data(decoder.decode_fixed_bytes(5)?),
            PrimitiveKind::Data48 => ZclValue::Data(decoder.decode_fixed_bytes(6)?),
            PrimitiveKind::Data56 => ZclValue::Data(decoder.decode_fixed_bytes(7)?),
            PrimitiveKind::Data64 => ZclValue::Data(decoder.decode_fixed_bytes(8)?),
            PrimitiveKind::Uint8 => ZclValue::Uint8(decoder.decode_u8()?),
            PrimitiveKind::Uint16 => ZclValue::Uint16(decoder.decode_u16()?),
            PrimitiveKind::Uint24 => ZclValue::Uint24(decoder.decode_u24()?),
            PrimitiveKind::Uint32 => ZclValue::Uint32(decoder.decode_u32()?),
            PrimitiveKind::Uint40 => ZclValue::Uint40(decoder.decode_u40()?),
            PrimitiveKind::Uint48 => ZclValue::Uint48(decoder.decode_u48()?),
            PrimitiveKind::Uint56 => ZclValue::Uint56(decoder.decode_u56()?),
            PrimitiveKind::Uint64 => ZclValue::Uint64(decoder.decode_u64()?),
            PrimitiveKind::Int8 => ZclValue::Int8(decoder.decode_i8()?),
            PrimitiveKind::Int16 => ZclValue::Int16(decoder.decode_i16()?),
            PrimitiveKind::Int24 => ZclValue::Int24(decoder.decode_i24()?),
            PrimitiveKind::Int32 => ZclValue::Int32(decoder.decode_i32()?),
            PrimitiveKind::Int40 => ZclValue::Int40(decoder.decode_i40()?),
            PrimitiveKind::Int48 => ZclValue::Int48(decoder.decode_i48()?),
            PrimitiveKind::Int56 => ZclValue::Int56(decoder.decode_i56()?),
            PrimitiveKind::Int64 => ZclValue::Int64(decoder.decode_i64()?),
            PrimitiveKind::Float32 => ZclValue::Float32(decoder.decode_f32()?),
            PrimitiveKind::Float64 => ZclValue::Float64(decoder.decode_f64()?),
            PrimitiveKind::OctetString => ZclValue::OctetString(decoder.decode_octet_string()?),
            PrimitiveKind::Eui64 => {
                let bytes = decoder.decode_fixed_bytes(8)?;
                ZclValue::Eui64(Eui64::from_bytes(&bytes)?)
            }
            PrimitiveKind::SecurityKey => {
                let mut key = [0u16; 16];
                for word in key.iter_mut() {
                    *word = decoder.decode_u16()?;
                }
                ZclValue::SecurityKey(key)
            }
        };
        Ok(value)
    }
}

/// Write fixed-width general data, validating the width
fn encode_fixed_data(bytes: &[u8], len: usize, encoder: &mut ZclEncoder) -> ZclResult<()> {
    if bytes.len() != len {
        return Err(ZclError::InvalidData(format!(
            "General data must be {} byte(s), got {}",
            len,
            bytes.len()
        )));
    }
    encoder.encode_bytes(bytes)
}

impl ZclValue {
    /// Constructs a boolean value
    pub fn new_bool(value: bool) -> Self {
        ZclValue::Bool(value)
    }

    /// Constructs a fixed-width general data value
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not 1 to 8 bytes wide
    pub fn new_data(bytes: Vec<u8>) -> ZclResult<Self> {
        if bytes.is_empty() || bytes.len() > 8 {
            return Err(ZclError::InvalidData(format!(
                "General data must be 1 to 8 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(ZclValue::Data(bytes))
    }

    /// Constructs an unsigned integer 8-bit value
    pub fn new_uint8(value: u8) -> Self {
        ZclValue::Uint8(value)
    }

    /// Constructs an unsigned integer 16-bit value
    pub fn new_uint16(value: u16) -> Self {
        ZclValue::Uint16(value)
    }

    /// Constructs an unsigned integer 32-bit value
    pub fn new_uint32(value: u32) -> Self {
        ZclValue::Uint32(value)
    }

    /// Constructs an unsigned integer 64-bit value
    pub fn new_uint64(value: u64) -> Self {
        ZclValue::Uint64(value)
    }

    /// Constructs a signed integer 8-bit value
    pub fn new_int8(value: i8) -> Self {
        ZclValue::Int8(value)
    }

    /// Constructs a signed integer 16-bit value
    pub fn new_int16(value: i16) -> Self {
        ZclValue::Int16(value)
    }

    /// Constructs a signed integer 32-bit value
    pub fn new_int32(value: i32) -> Self {
        ZclValue::Int32(value)
    }

    /// Constructs a signed integer 64-bit value
    pub fn new_int64(value: i64) -> Self {
        ZclValue::Int64(value)
    }

    /// Constructs a float 32-bit value
    pub fn new_float32(value: f32) -> Self {
        ZclValue::Float32(value)
    }

    /// Constructs a float 64-bit value
    pub fn new_float64(value: f64) -> Self {
        ZclValue::Float64(value)
    }

    /// Constructs an octet string value
    pub fn new_octet_string(bytes: Vec<u8>) -> Self {
        ZclValue::OctetString(bytes)
    }

    /// Constructs an extended address value
    pub fn new_eui64(addr: Eui64) -> Self {
        ZclValue::Eui64(addr)
    }

    /// Constructs a security key value
    pub fn new_security_key(key: [u16; 16]) -> Self {
        ZclValue::SecurityKey(key)
    }

    /// Get the codec this value naturally encodes with
    ///
    /// # Errors
    ///
    /// Returns an error for general data whose width is outside 1 to 8 bytes
    pub fn kind(&self) -> ZclResult<PrimitiveKind> {
        let kind = match self {
            ZclValue::Bool(_) => PrimitiveKind::Bool,
            ZclValue::Data(bytes) => match bytes.len() {
                1 => PrimitiveKind::Data8,
                2 => PrimitiveKind::Data16,
                3 => PrimitiveKind::Data24,
                4 => PrimitiveKind::Data32,
                5 => PrimitiveKind::Data40,
                6 => PrimitiveKind::Data48,
                7 => PrimitiveKind::Data56,
                8 => PrimitiveKind::Data64,
                other => {
                    return Err(ZclError::InvalidData(format!(
                        "General data must be 1 to 8 bytes, got {}",
                        other
                    )));
                }
            },
            ZclValue::Uint8(_) => PrimitiveKind::Uint8,
            ZclValue::Uint16(_) => PrimitiveKind::Uint16,
            ZclValue::Uint24(_) => PrimitiveKind::Uint24,
            ZclValue::Uint32(_) => PrimitiveKind::Uint32,
            ZclValue::Uint40(_) => PrimitiveKind::Uint40,
            ZclValue::Uint48(_) => PrimitiveKind::Uint48,
            ZclValue::Uint56(_) => PrimitiveKind::Uint56,
            ZclValue::Uint64(_) => PrimitiveKind::Uint64,
            ZclValue::Int8(_) => PrimitiveKind::Int8,
            ZclValue::Int16(_) => PrimitiveKind::Int16,
            ZclValue::Int24(_) => PrimitiveKind::Int24,
            ZclValue::Int32(_) => PrimitiveKind::Int32,
            ZclValue::Int40(_) => PrimitiveKind::Int40,
            ZclValue::Int48(_) => PrimitiveKind::Int48,
            ZclValue::Int56(_) => PrimitiveKind::Int56,
            ZclValue::Int64(_) => PrimitiveKind::Int64,
            ZclValue::Float32(_) => PrimitiveKind::Float32,
            ZclValue::Float64(_) => PrimitiveKind::Float64,
            ZclValue::OctetString(_) => PrimitiveKind::OctetString,
            ZclValue::Eui64(_) => PrimitiveKind::Eui64,
            ZclValue::SecurityKey(_) => PrimitiveKind::SecurityKey,
        };
        Ok(kind)
    }

    /// Check if this value is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ZclValue::Uint8(_)
                | ZclValue::Uint16(_)
                | ZclValue::Uint24(_)
                | ZclValue::Uint32(_)
                | ZclValue::Uint40(_)
                | ZclValue::Uint48(_)
                | ZclValue::Uint56(_)
                | ZclValue::Uint64(_)
                | ZclValue::Int8(_)
                | ZclValue::Int16(_)
                | ZclValue::Int24(_)
                | ZclValue::Int32(_)
                | ZclValue::Int40(_)
                | ZclValue::Int48(_)
                | ZclValue::Int56(_)
                | ZclValue::Int64(_)
                | ZclValue::Float32(_)
                | ZclValue::Float64(_)
        )
    }

    /// Get the value as a boolean
    pub fn as_bool(&self) -> ZclResult<bool> {
        match self {
            ZclValue::Bool(v) => Ok(*v),
            _ => Err(ZclError::InvalidData(format!("Expected Bool, got {}", self))),
        }
    }

    /// Get the value as an unsigned integer 16
    pub fn as_u16(&self) -> ZclResult<u16> {
        match self {
            ZclValue::Uint16(v) => Ok(*v),
            _ => Err(ZclError::InvalidData(format!(
                "Expected Uint16, got {}",
                self
            ))),
        }
    }

    /// Get the value as an unsigned integer 32
    pub fn as_u32(&self) -> ZclResult<u32> {
        match self {
            ZclValue::Uint32(v) => Ok(*v),
            _ => Err(ZclError::InvalidData(format!(
                "Expected Uint32, got {}",
                self
            ))),
        }
    }

    /// Get the value as an octet string
    pub fn as_octet_string(&self) -> ZclResult<&Vec<u8>> {
        match self {
            ZclValue::OctetString(bytes) => Ok(bytes),
            _ => Err(ZclError::InvalidData(format!(
                "Expected OctetString, got {}",
                self
            ))),
        }
    }

    /// Get the value as an extended address
    pub fn as_eui64(&self) -> ZclResult<Eui64> {
        match self {
            ZclValue::Eui64(addr) => Ok(*addr),
            _ => Err(ZclError::InvalidData(format!(
                "Expected Eui64, got {}",
                self
            ))),
        }
    }
}

impl fmt::Display for ZclValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZclValue::Bool(v) => write!(f, "BOOLEAN: {}", v),
            ZclValue::Data(bytes) => {
                write!(f, "DATA:")?;
                for byte in bytes {
                    write!(f, " {:02X}", byte)?;
                }
                Ok(())
            }
            ZclValue::Uint8(v) => write!(f, "UNSIGNED8: {}", v),
            ZclValue::Uint16(v) => write!(f, "UNSIGNED16: {}", v),
            ZclValue::Uint24(v) => write!(f, "UNSIGNED24: {}", v),
            ZclValue::Uint32(v) => write!(f, "UNSIGNED32: {}", v),
            ZclValue::Uint40(v) => write!(f, "UNSIGNED40: {}", v),
            ZclValue::Uint48(v) => write!(f, "UNSIGNED48: {}", v),
            ZclValue::Uint56(v) => write!(f, "UNSIGNED56: {}", v),
            ZclValue::Uint64(v) => write!(f, "UNSIGNED64: {}", v),
            ZclValue::Int8(v) => write!(f, "SIGNED8: {}", v),
            ZclValue::Int16(v) => write!(f, "SIGNED16: {}", v),
            ZclValue::Int24(v) => write!(f, "SIGNED24: {}", v),
            ZclValue::Int32(v) => write!(f, "SIGNED32: {}", v),
            ZclValue::Int40(v) => write!(f, "SIGNED40: {}", v),
            ZclValue::Int48(v) => write!(f, "SIGNED48: {}", v),
            ZclValue::Int56(v) => write!(f, "SIGNED56: {}", v),
            ZclValue::Int64(v) => write!(f, "SIGNED64: {}", v),
            ZclValue::Float32(v) => write!(f, "FLOAT32: {}", v),
            ZclValue::Float64(v) => write!(f, "FLOAT64: {}", v),
            ZclValue::OctetString(bytes) => {
                write!(f, "OCTET_STRING:")?;
                for byte in bytes {
                    write!(f, " {:02X}", byte)?;
                }
                Ok(())
            }
            ZclValue::Eui64(addr) => write!(f, "EUI64: {}", addr),
            ZclValue::SecurityKey(key) => {
                write!(f, "SECURITY_KEY:")?;
                for word in key {
                    write!(f, " {:04X}", word)?;
                }
                Ok(())
            }
        }
    }
}
