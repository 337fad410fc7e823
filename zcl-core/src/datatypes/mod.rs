//! Data types carried by ZCL attribute payloads

pub mod eui64;
pub mod value;

// Re-export types
pub use eui64::Eui64;
pub use value::{PrimitiveKind, ZclValue};
