//! Core types and utilities for the ZigBee Cluster Library codec
//!
//! This crate provides the primitive wire codec, typed attribute values,
//! and error handling used throughout the ZCL implementation.

pub mod datatypes;
pub mod error;
pub mod wire;

pub use datatypes::{Eui64, PrimitiveKind, ZclValue};
pub use error::{ZclError, ZclResult};
pub use wire::{ZclDecoder, ZclEncoder};
