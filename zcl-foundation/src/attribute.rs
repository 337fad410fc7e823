//! Attribute records for the general read/write/report/discover commands

use crate::datatype::{descriptor_for, tag_for_kind};
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::fmt;
use zcl_core::datatypes::ZclValue;
use zcl_core::error::{ZclError, ZclResult};
use zcl_core::wire::{ZclDecoder, ZclEncoder};

/// A value preceded by its wire type tag
///
/// The tag selects the payload codec, so the encoded form is self-describing:
/// `[tag:1][payload]`. The payload's shape must match the codec registered
/// for the tag; pairing a tag with a foreign value is a construction bug and
/// is rejected when encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedValue {
    /// Wire type tag
    pub datatype: u8,
    /// Payload value
    pub value: ZclValue,
}

impl TaggedValue {
    /// Create a tagged value from an explicit type tag
    pub fn new(datatype: u8, value: ZclValue) -> Self {
        Self { datatype, value }
    }

    /// Create a tagged value, deriving the tag from the value's own codec
    ///
    /// # Errors
    ///
    /// Returns `NoReverseMapping` if the value's codec has no canonical tag
    /// (strings, general data, security keys); those values need an explicit
    /// tag via [`TaggedValue::new`]
    pub fn for_value(value: ZclValue) -> ZclResult<Self> {
        let datatype = tag_for_kind(value.kind()?)?;
        Ok(Self { datatype, value })
    }

    /// Encode the tag byte followed by the payload
    ///
    /// # Errors
    ///
    /// Returns `NoCodecForTag` for the payload-less tags 0x00 and 0xff
    pub fn encode(&self, encoder: &mut ZclEncoder) -> ZclResult<()> {
        let descriptor = descriptor_for(self.datatype)?;
        let codec = descriptor
            .codec
            .ok_or(ZclError::NoCodecForTag(self.datatype))?;
        encoder.encode_u8(self.datatype)?;
        codec.encode(&self.value, encoder)
    }

    /// Decode a tag byte and the payload it selects
    ///
    /// # Errors
    ///
    /// Returns `UnknownTypeTag` if the tag is not implemented, before any
    /// payload byte is consumed
    pub fn decode(decoder: &mut ZclDecoder<'_>) -> ZclResult<Self> {
        let datatype = decoder.decode_u8()?;
        let descriptor = descriptor_for(datatype)?;
        let codec = descriptor.codec.ok_or(ZclError::NoCodecForTag(datatype))?;
        let value = codec.decode(decoder)?;
        Ok(Self { datatype, value })
    }
}

impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x} {}", self.datatype, self.value)
    }
}

/// An attribute identifier paired with its tagged value
///
/// Wire form: `[id:2][TaggedValue]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute identifier
    pub attrid: u16,
    /// Attribute value with its type tag
    pub value: TaggedValue,
}

impl Attribute {
    /// Create a new attribute
    pub fn new(attrid: u16, value: TaggedValue) -> Self {
        Self { attrid, value }
    }

    /// Encode the attribute
    pub fn encode(&self, encoder: &mut ZclEncoder) -> ZclResult<()> {
        encoder.encode_u16(self.attrid)?;
        self.value.encode(encoder)
    }

    /// Decode an attribute, leaving unconsumed bytes in the decoder
    pub fn decode(decoder: &mut ZclDecoder<'_>) -> ZclResult<Self> {
        let attrid = decoder.decode_u16()?;
        let value = TaggedValue::decode(decoder)?;
        Ok(Self { attrid, value })
    }
}

/// One record of a "Read attributes response" command
///
/// Wire form: `[id:2][status:1][TaggedValue iff status == SUCCESS]`. A value
/// is present exactly when the status is `Success`; for any other status the
/// value bytes are absent from the wire, and an in-memory value is ignored
/// when encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadAttributeRecord {
    /// Attribute identifier
    pub attrid: u16,
    /// Outcome of the read
    pub status: Status,
    /// The value, present iff `status == Status::Success`
    pub value: Option<TaggedValue>,
}

impl ReadAttributeRecord {
    /// Encode the record
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if the status is `Success` but no value is set
    pub fn encode(&self, encoder: &mut ZclEncoder) -> ZclResult<()> {
        encoder.encode_u16(self.attrid)?;
        self.status.encode(encoder)?;
        if self.status.is_success() {
            let value = self.value.as_ref().ok_or_else(|| {
                ZclError::InvalidData(format!(
                    "Read record for attribute 0x{:04x} has SUCCESS status but no value",
                    self.attrid
                ))
            })?;
            value.encode(encoder)?;
        }
        Ok(())
    }

    /// Decode a record, reading a value only on success status
    pub fn decode(decoder: &mut ZclDecoder<'_>) -> ZclResult<Self> {
        let attrid = decoder.decode_u16()?;
        let status = Status::decode(decoder)?;
        let value = if status.is_success() {
            Some(TaggedValue::decode(decoder)?)
        } else {
            None
        };
        Ok(Self {
            attrid,
            status,
            value,
        })
    }
}

impl fmt::Display for ReadAttributeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attribute 0x{:04x}: {}", self.attrid, self.status)?;
        if let Some(value) = &self.value {
            write!(f, " = {}", value.value)?;
        }
        Ok(())
    }
}

/// One record of a "Write attributes response" command
///
/// Wire form: `[status:1][id:2]`, unconditional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WriteAttributesStatusRecord {
    /// Outcome of the write
    pub status: Status,
    /// Attribute identifier
    pub attrid: u16,
}

impl WriteAttributesStatusRecord {
    /// Encode the record
    pub fn encode(&self, encoder: &mut ZclEncoder) -> ZclResult<()> {
        self.status.encode(encoder)?;
        encoder.encode_u16(self.attrid)
    }

    /// Decode the record
    pub fn decode(decoder: &mut ZclDecoder<'_>) -> ZclResult<Self> {
        let status = Status::decode(decoder)?;
        let attrid = decoder.decode_u16()?;
        Ok(Self { status, attrid })
    }
}

/// One record of a "Discover attributes response" command
///
/// Wire form: `[id:2][datatype:1]`, unconditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoverAttributesResponseRecord {
    /// Attribute identifier
    pub attrid: u16,
    /// Wire type tag of the attribute
    pub datatype: u8,
}

impl DiscoverAttributesResponseRecord {
    /// Encode the record
    pub fn encode(&self, encoder: &mut ZclEncoder) -> ZclResult<()> {
        encoder.encode_u16(self.attrid)?;
        encoder.encode_u8(self.datatype)
    }

    /// Decode the record
    pub fn decode(decoder: &mut ZclDecoder<'_>) -> ZclResult<Self> {
        let attrid = decoder.decode_u16()?;
        let datatype = decoder.decode_u8()?;
        Ok(Self { attrid, datatype })
    }
}
