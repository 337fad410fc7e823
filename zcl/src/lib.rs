//! zcl_rs - Rust implementation of the ZigBee Cluster Library foundation
//!
//! This library provides the binary codec for the ZCL attribute-value model:
//! the self-describing tagged-value wire format, the records carried by the
//! general attribute commands, and the general command table.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `zcl-core`: Primitive wire codec, typed values, error handling
//! - `zcl-foundation`: Data type registry, attribute records, reporting
//!   configurations, general command table
//!
//! # Usage
//!
//! ```
//! use zcl::{ZclDecoder, ZclValue};
//! use zcl::foundation::ReadAttributeRecord;
//!
//! let bytes = [0x20, 0x00, 0x00, 0x21, 0x2c, 0x01];
//! let mut decoder = ZclDecoder::new(&bytes);
//! let record = ReadAttributeRecord::decode(&mut decoder).unwrap();
//! assert_eq!(record.value.unwrap().value, ZclValue::Uint16(300));
//! ```

// Re-export core types
pub use zcl_core::datatypes::{Eui64, PrimitiveKind, ZclValue};
pub use zcl_core::wire::{ZclDecoder, ZclEncoder};
pub use zcl_core::{ZclError, ZclResult};

// Re-export the foundation layer
pub mod foundation {
    pub use zcl_foundation::*;
}
