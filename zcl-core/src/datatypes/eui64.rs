use crate::error::{ZclError, ZclResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// IEEE EUI-64 extended address identifying a device on the mesh network
///
/// The address is stored in wire order (least-significant byte first) and
/// displayed in the conventional most-significant-first colon notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Eui64 {
    bytes: [u8; 8],
}

impl Eui64 {
    /// Create a new EUI-64 from wire-order bytes
    pub fn new(bytes: [u8; 8]) -> Self {
        Self { bytes }
    }

    /// Create an EUI-64 from a wire-order byte slice
    ///
    /// # Returns
    ///
    /// Returns `Ok(Eui64)` if the slice holds exactly 8 bytes, `Err` otherwise
    pub fn from_bytes(bytes: &[u8]) -> ZclResult<Self> {
        if bytes.len() != 8 {
            return Err(ZclError::InvalidData(format!(
                "EUI-64 must be 8 bytes, got {}",
                bytes.len()
            )));
        }
        let mut out = [0u8; 8];
        out.copy_from_slice(bytes);
        Ok(Self { bytes: out })
    }

    /// Parse an EUI-64 from colon-separated hex, most-significant byte first
    ///
    /// Supports formats like "00:0d:6f:00:0a:bb:cc:dd".
    pub fn from_string(s: &str) -> ZclResult<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 8 {
            return Err(ZclError::InvalidData(format!(
                "Invalid EUI-64 format: {}",
                s
            )));
        }
        let mut bytes = [0u8; 8];
        for (i, part) in parts.iter().enumerate() {
            // Display order is the reverse of wire order
            bytes[7 - i] = u8::from_str_radix(part, 16)
                .map_err(|_| ZclError::InvalidData(format!("Invalid hex byte: {}", part)))?;
        }
        Ok(Self { bytes })
    }

    /// Get the address as a wire-order byte array
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.bytes
    }

    /// Get the address as a copied wire-order byte array
    pub fn to_bytes(&self) -> [u8; 8] {
        self.bytes
    }
}

impl fmt::Display for Eui64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().rev().enumerate() {
            if i > 0 {
                write!(f, ":")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eui64_new() {
        let addr = Eui64::new([0xdd, 0xcc, 0xbb, 0x0a, 0x00, 0x6f, 0x0d, 0x00]);
        assert_eq!(addr.to_bytes()[0], 0xdd);
    }

    #[test]
    fn test_eui64_from_bytes_wrong_length() {
        assert!(Eui64::from_bytes(&[0x00; 7]).is_err());
    }

    #[test]
    fn test_eui64_display() {
        let addr = Eui64::new([0xdd, 0xcc, 0xbb, 0x0a, 0x00, 0x6f, 0x0d, 0x00]);
        assert_eq!(format!("{}", addr), "00:0d:6f:00:0a:bb:cc:dd");
    }

    #[test]
    fn test_eui64_from_string() {
        let addr = Eui64::from_string("00:0d:6f:00:0a:bb:cc:dd").unwrap();
        assert_eq!(
            addr,
            Eui64::new([0xdd, 0xcc, 0xbb, 0x0a, 0x00, 0x6f, 0x0d, 0x00])
        );
    }

    #[test]
    fn test_eui64_display_round_trip() {
        let addr = Eui64::new([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(Eui64::from_string(&format!("{}", addr)).unwrap(), addr);
    }
}
