//! Little-endian wire encoding/decoding primitives

pub mod decoder;
pub mod encoder;

pub use decoder::ZclDecoder;
pub use encoder::ZclEncoder;
