//! ZCL command status codes

use serde::{Deserialize, Serialize};
use std::fmt;
use zcl_core::wire::{ZclDecoder, ZclEncoder};
use zcl_core::ZclResult;

/// Status code carried by attribute records and default responses
///
/// Device firmware may use reserved status values, so decoding never fails:
/// a byte outside the named set is preserved as `Unknown` and re-encodes to
/// the same byte. Callers must not assume the named set is exhaustive when
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Operation was successful.
    Success,
    /// Operation was not successful.
    Failure,
    /// The sender of the command does not have authorization to carry it out.
    NotAuthorized,
    /// A reserved field/subfield/bit contains a non-zero value.
    ReservedFieldNotZero,
    /// The command appears to contain the wrong fields, or fields are missing.
    MalformedCommand,
    /// The specified cluster command is not supported on the device.
    UnsupClusterCommand,
    /// The specified general command is not supported on the device.
    UnsupGeneralCommand,
    /// A manufacturer-specific cluster command was received with an unknown
    /// manufacturer code.
    UnsupManufClusterCommand,
    /// A manufacturer-specific general command was received with an unknown
    /// manufacturer code.
    UnsupManufGeneralCommand,
    /// At least one field of the command contains an incorrect value.
    InvalidField,
    /// The specified attribute does not exist on the device.
    UnsupportedAttribute,
    /// Out of range error, or set to a reserved value.
    InvalidValue,
    /// Attempt to write a read-only attribute.
    ReadOnly,
    /// An operation failed due to an insufficient amount of free space.
    InsufficientSpace,
    /// An attempt to create an entry in a table failed because a matching
    /// entry already exists.
    DuplicateExists,
    /// The requested information (e.g. table entry) could not be found.
    NotFound,
    /// Periodic reports cannot be issued for this attribute.
    UnreportableAttribute,
    /// The data type given for an attribute is incorrect.
    InvalidDataType,
    /// The selector for an attribute is incorrect.
    InvalidSelector,
    /// A request has been made to read an attribute the requestor may only
    /// write.
    WriteOnly,
    /// Setting the requested values would put the device in an inconsistent
    /// state on startup.
    InconsistentStartupState,
    /// An attempt has been made to write an attribute that can only be
    /// written out of band.
    DefinedOutOfBand,
    /// An operation was unsuccessful due to a hardware failure.
    HardwareFailure,
    /// An operation was unsuccessful due to a software failure.
    SoftwareFailure,
    /// An error occurred during calibration.
    CalibrationError,
    /// A reserved or manufacturer-specific status byte
    Unknown(u8),
}

impl Status {
    /// Get a status from its byte value
    pub fn from_u8(value: u8) -> Self {
        match value {
            0x00 => Status::Success,
            0x01 => Status::Failure,
            0x7e => Status::NotAuthorized,
            0x7f => Status::ReservedFieldNotZero,
            0x80 => Status::MalformedCommand,
            0x81 => Status::UnsupClusterCommand,
            0x82 => Status::UnsupGeneralCommand,
            0x83 => Status::UnsupManufClusterCommand,
            0x84 => Status::UnsupManufGeneralCommand,
            0x85 => Status::InvalidField,
            0x86 => Status::UnsupportedAttribute,
            0x87 => Status::InvalidValue,
            0x88 => Status::ReadOnly,
            0x89 => Status::InsufficientSpace,
            0x8a => Status::DuplicateExists,
            0x8b => Status::NotFound,
            0x8c => Status::UnreportableAttribute,
            0x8d => Status::InvalidDataType,
            0x8e => Status::InvalidSelector,
            0x8f => Status::WriteOnly,
            0x90 => Status::InconsistentStartupState,
            0x91 => Status::DefinedOutOfBand,
            0xc0 => Status::HardwareFailure,
            0xc1 => Status::SoftwareFailure,
            0xc2 => Status::CalibrationError,
            other => Status::Unknown(other),
        }
    }

    /// Convert the status to its byte value
    pub fn to_u8(self) -> u8 {
        match self {
            Status::Success => 0x00,
            Status::Failure => 0x01,
            Status::NotAuthorized => 0x7e,
            Status::ReservedFieldNotZero => 0x7f,
            Status::MalformedCommand => 0x80,
            Status::UnsupClusterCommand => 0x81,
            Status::UnsupGeneralCommand => 0x82,
            Status::UnsupManufClusterCommand => 0x83,
            Status::UnsupManufGeneralCommand => 0x84,
            Status::InvalidField => 0x85,
            Status::UnsupportedAttribute => 0x86,
            Status::InvalidValue => 0x87,
            Status::ReadOnly => 0x88,
            Status::InsufficientSpace => 0x89,
            Status::DuplicateExists => 0x8a,
            Status::NotFound => 0x8b,
            Status::UnreportableAttribute => 0x8c,
            Status::InvalidDataType => 0x8d,
            Status::InvalidSelector => 0x8e,
            Status::WriteOnly => 0x8f,
            Status::InconsistentStartupState => 0x90,
            Status::DefinedOutOfBand => 0x91,
            Status::HardwareFailure => 0xc0,
            Status::SoftwareFailure => 0xc1,
            Status::CalibrationError => 0xc2,
            Status::Unknown(other) => other,
        }
    }

    /// Check if this is the success status
    pub fn is_success(self) -> bool {
        self == Status::Success
    }

    /// Encode the status as a single byte
    pub fn encode(self, encoder: &mut ZclEncoder) -> ZclResult<()> {
        encoder.encode_u8(self.to_u8())
    }

    /// Decode a status from a single byte
    pub fn decode(decoder: &mut ZclDecoder<'_>) -> ZclResult<Self> {
        Ok(Self::from_u8(decoder.decode_u8()?))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Unknown(value) => write!(f, "UNKNOWN(0x{:02x})", value),
            other => write!(f, "{:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_u8() {
        assert_eq!(Status::from_u8(0x00), Status::Success);
        assert_eq!(Status::from_u8(0x86), Status::UnsupportedAttribute);
        assert_eq!(Status::from_u8(0xc2), Status::CalibrationError);
    }

    #[test]
    fn test_status_reserved_byte_preserved() {
        let status = Status::from_u8(0x42);
        assert_eq!(status, Status::Unknown(0x42));
        assert_eq!(status.to_u8(), 0x42);
    }

    #[test]
    fn test_status_round_trip_all_named() {
        for byte in 0x00..=0xff {
            assert_eq!(Status::from_u8(byte).to_u8(), byte);
        }
    }

    #[test]
    fn test_status_is_success() {
        assert!(Status::Success.is_success());
        assert!(!Status::Failure.is_success());
        assert!(!Status::Unknown(0x55).is_success());
    }
}
