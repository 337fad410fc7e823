//! Wire encoder for ZCL payloads

use crate::error::{ZclError, ZclResult};

/// Encoder for the ZCL wire format
///
/// All multi-byte integers are encoded little-endian. The encoder appends to
/// an internal buffer; fields are written back-to-back with no framing.
pub struct ZclEncoder {
    buffer: Vec<u8>,
}

impl ZclEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Create a new encoder with initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Encode a boolean as a single byte (0x00 or 0x01)
    pub fn encode_bool(&mut self, value: bool) -> ZclResult<()> {
        self.buffer.push(if value { 0x01 } else { 0x00 });
        Ok(())
    }

    /// Encode a u8
    pub fn encode_u8(&mut self, value: u8) -> ZclResult<()> {
        self.buffer.push(value);
        Ok(())
    }

    /// Encode a u16 (little-endian)
    pub fn encode_u16(&mut self, value: u16) -> ZclResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Encode a u24 (little-endian, 3 bytes)
    pub fn encode_u24(&mut self, value: u32) -> ZclResult<()> {
        self.write_uint_le(value as u64, 3)
    }

    /// Encode a u32 (little-endian)
    pub fn encode_u32(&mut self, value: u32) -> ZclResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Encode a u40 (little-endian, 5 bytes)
    pub fn encode_u40(&mut self, value: u64) -> ZclResult<()> {
        self.write_uint_le(value, 5)
    }

    /// Encode a u48 (little-endian, 6 bytes)
    pub fn encode_u48(&mut self, value: u64) -> ZclResult<()> {
        self.write_uint_le(value, 6)
    }

    /// Encode a u56 (little-endian, 7 bytes)
    pub fn encode_u56(&mut self, value: u64) -> ZclResult<()> {
        self.write_uint_le(value, 7)
    }

    /// Encode a u64 (little-endian)
    pub fn encode_u64(&mut self, value: u64) -> ZclResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Encode an i8
    pub fn encode_i8(&mut self, value: i8) -> ZclResult<()> {
        self.buffer.push(value as u8);
        Ok(())
    }

    /// Encode an i16 (little-endian)
    pub fn encode_i16(&mut self, value: i16) -> ZclResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Encode an i24 (little-endian, 3 bytes, two's complement)
    pub fn encode_i24(&mut self, value: i32) -> ZclResult<()> {
        self.write_int_le(value as i64, 3)
    }

    /// Encode an i32 (little-endian)
    pub fn encode_i32(&mut self, value: i32) -> ZclResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Encode an i40 (little-endian, 5 bytes, two's complement)
    pub fn encode_i40(&mut self, value: i64) -> ZclResult<()> {
        self.write_int_le(value, 5)
    }

    /// Encode an i48 (little-endian, 6 bytes, two's complement)
    pub fn encode_i48(&mut self, value: i64) -> ZclResult<()> {
        self.write_int_le(value, 6)
    }

    /// Encode an i56 (little-endian, 7 bytes, two's complement)
    pub fn encode_i56(&mut self, value: i64) -> ZclResult<()> {
        self.write_int_le(value, 7)
    }

    /// Encode an i64 (little-endian)
    pub fn encode_i64(&mut self, value: i64) -> ZclResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Encode an f32 (IEEE 754 little-endian)
    pub fn encode_f32(&mut self, value: f32) -> ZclResult<()> {
        self.buffer.extend_from_slice(&value.to_bits().to_le_bytes());
        Ok(())
    }

    /// Encode an f64 (IEEE 754 little-endian)
    pub fn encode_f64(&mut self, value: f64) -> ZclResult<()> {
        self.buffer.extend_from_slice(&value.to_bits().to_le_bytes());
        Ok(())
    }

    /// Encode an octet string with a 1-byte length prefix
    ///
    /// The string may hold at most 255 bytes.
    pub fn encode_octet_string(&mut self, value: &[u8]) -> ZclResult<()> {
        if value.len() > 0xff {
            return Err(ZclError::InvalidData(format!(
                "Octet string too long: {} bytes, maximum is 255",
                value.len()
            )));
        }
        self.buffer.push(value.len() as u8);
        self.buffer.extend_from_slice(value);
        Ok(())
    }

    /// Encode raw bytes with no prefix
    pub fn encode_bytes(&mut self, bytes: &[u8]) -> ZclResult<()> {
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    /// Write the low `len` bytes of an unsigned value, little-endian
    fn write_uint_le(&mut self, value: u64, len: usize) -> ZclResult<()> {
        if len < 8 && value >= 1u64 << (8 * len) {
            return Err(ZclError::InvalidData(format!(
                "Value {} does not fit in {} byte(s)",
                value, len
            )));
        }
        self.buffer.extend_from_slice(&value.to_le_bytes()[..len]);
        Ok(())
    }

    /// Write the low `len` bytes of a signed value, little-endian two's complement
    fn write_int_le(&mut self, value: i64, len: usize) -> ZclResult<()> {
        if len < 8 {
            let bound = 1i64 << (8 * len - 1);
            if value < -bound || value >= bound {
                return Err(ZclError::InvalidData(format!(
                    "Value {} does not fit in {} signed byte(s)",
                    value, len
                )));
            }
        }
        self.buffer.extend_from_slice(&value.to_le_bytes()[..len]);
        Ok(())
    }

    /// Get the encoded bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Get a reference to the encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the encoder buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for ZclEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_u16_little_endian() {
        let mut encoder = ZclEncoder::new();
        encoder.encode_u16(0x1234).unwrap();
        assert_eq!(encoder.as_bytes(), &[0x34, 0x12]);
    }

    #[test]
    fn test_encode_u24() {
        let mut encoder = ZclEncoder::new();
        encoder.encode_u24(0x123456).unwrap();
        assert_eq!(encoder.as_bytes(), &[0x56, 0x34, 0x12]);
    }

    #[test]
    fn test_encode_u24_out_of_range() {
        let mut encoder = ZclEncoder::new();
        assert!(encoder.encode_u24(0x0100_0000).is_err());
    }

    #[test]
    fn test_encode_i24_negative() {
        let mut encoder = ZclEncoder::new();
        encoder.encode_i24(-1).unwrap();
        assert_eq!(encoder.as_bytes(), &[0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_encode_i24_out_of_range() {
        let mut encoder = ZclEncoder::new();
        assert!(encoder.encode_i24(1 << 23).is_err());
        assert!(encoder.encode_i24(-(1 << 23) - 1).is_err());
    }

    #[test]
    fn test_encode_bool() {
        let mut encoder = ZclEncoder::new();
        encoder.encode_bool(true).unwrap();
        encoder.encode_bool(false).unwrap();
        assert_eq!(encoder.as_bytes(), &[0x01, 0x00]);
    }

    #[test]
    fn test_encode_octet_string() {
        let mut encoder = ZclEncoder::new();
        encoder.encode_octet_string(b"abc").unwrap();
        assert_eq!(encoder.as_bytes(), &[0x03, b'a', b'b', b'c']);
    }

    #[test]
    fn test_encode_octet_string_too_long() {
        let mut encoder = ZclEncoder::new();
        assert!(encoder.encode_octet_string(&[0u8; 256]).is_err());
    }
}
