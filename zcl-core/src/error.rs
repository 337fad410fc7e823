use thiserror::Error;

use crate::datatypes::PrimitiveKind;

/// Main error type for ZCL codec operations
#[derive(Error, Debug)]
pub enum ZclError {
    #[error("Unknown data type tag: 0x{0:02x}")]
    UnknownTypeTag(u8),

    #[error("Data type 0x{0:02x} carries no value payload")]
    NoCodecForTag(u8),

    #[error("No type tag is registered for codec {0:?}")]
    NoReverseMapping(PrimitiveKind),

    #[error("Unsupported general command: 0x{0:02x}")]
    UnsupportedCommand(u8),

    #[error("Truncated buffer: need {needed} byte(s), {available} remaining")]
    TruncatedBuffer { needed: usize, available: usize },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for ZCL codec operations
pub type ZclResult<T> = Result<T, ZclError>;
