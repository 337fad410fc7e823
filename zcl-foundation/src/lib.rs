//! Foundation layer of the ZigBee Cluster Library
//!
//! This crate implements the attribute-value model shared by every cluster:
//! the data type registry, the self-describing tagged-value codec, status
//! codes, the attribute records exchanged by the general read/write/report/
//! discover commands, reporting configurations, and the general command
//! table.
//!
//! All codecs are pure functions over byte buffers. The registry and the
//! command table are static literal tables, immutable for the process
//! lifetime, so decoding different buffers concurrently needs no
//! coordination.

pub mod attribute;
pub mod command;
pub mod datatype;
pub mod reporting;
pub mod status;

pub use attribute::{
    Attribute, DiscoverAttributesResponseRecord, ReadAttributeRecord, TaggedValue,
    WriteAttributesStatusRecord,
};
pub use command::{command_for, CommandDescriptor, CommandParam, ParamValue};
pub use datatype::{descriptor_for, tag_for_kind, DataTypeDescriptor, TypeClass};
pub use reporting::{
    AttributeReportingConfig, ConfigureReportingResponseRecord, ReadReportingConfigRecord,
};
pub use status::Status;
