//! Data type registry mapping wire type tags to payload codecs

use zcl_core::datatypes::PrimitiveKind;
use zcl_core::error::{ZclError, ZclResult};

/// Classification of a data type's value space
///
/// Analog values vary continuously (integers, floats, time) and support a
/// reportable-change threshold in reporting configurations; Discrete values
/// take enumerated states (bitmaps, strings, identifiers) and do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    Analog,
    Discrete,
}

/// One entry of the data type registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataTypeDescriptor {
    /// Wire type tag
    pub tag: u8,
    /// Display name from the cluster library specification
    pub name: &'static str,
    /// Payload codec; `None` for the absence-of-value markers 0x00 and 0xff
    pub codec: Option<PrimitiveKind>,
    /// Analog/Discrete classification; `None` for the markers
    pub class: Option<TypeClass>,
}

impl DataTypeDescriptor {
    /// Check if this type is classified Analog
    pub fn is_analog(&self) -> bool {
        matches!(self.class, Some(TypeClass::Analog))
    }
}

const fn analog(tag: u8, name: &'static str, codec: PrimitiveKind) -> DataTypeDescriptor {
    DataTypeDescriptor {
        tag,
        name,
        codec: Some(codec),
        class: Some(TypeClass::Analog),
    }
}

const fn discrete(tag: u8, name: &'static str, codec: PrimitiveKind) -> DataTypeDescriptor {
    DataTypeDescriptor {
        tag,
        name,
        codec: Some(codec),
        class: Some(TypeClass::Discrete),
    }
}

const fn marker(tag: u8, name: &'static str) -> DataTypeDescriptor {
    DataTypeDescriptor {
        tag,
        name,
        codec: None,
        class: None,
    }
}

/// Registry of implemented data types, sorted by tag
///
/// Long strings (0x43/0x44), arrays (0x48), structures (0x4c), sets (0x50),
/// bags (0x51) and the 16-bit float (0x38) are not implemented; their tags
/// are absent and fail lookup.
static DATA_TYPES: [DataTypeDescriptor; 49] = [
    marker(0x00, "No data"),
    discrete(0x08, "General", PrimitiveKind::Data8),
    discrete(0x09, "General", PrimitiveKind::Data16),
    discrete(0x0a, "General", PrimitiveKind::Data24),
    discrete(0x0b, "General", PrimitiveKind::Data32),
    discrete(0x0c, "General", PrimitiveKind::Data40),
    discrete(0x0d, "General", PrimitiveKind::Data48),
    discrete(0x0e, "General", PrimitiveKind::Data56),
    discrete(0x0f, "General", PrimitiveKind::Data64),
    discrete(0x10, "Boolean", PrimitiveKind::Bool),
    discrete(0x18, "Bitmap", PrimitiveKind::Uint8),
    discrete(0x19, "Bitmap", PrimitiveKind::Uint16),
    discrete(0x1a, "Bitmap", PrimitiveKind::Uint24),
    discrete(0x1b, "Bitmap", PrimitiveKind::Uint32),
    discrete(0x1c, "Bitmap", PrimitiveKind::Uint40),
    discrete(0x1d, "Bitmap", PrimitiveKind::Uint48),
    discrete(0x1e, "Bitmap", PrimitiveKind::Uint56),
    discrete(0x1f, "Bitmap", PrimitiveKind::Uint64),
    analog(0x20, "Unsigned Integer", PrimitiveKind::Uint8),
    analog(0x21, "Unsigned Integer", PrimitiveKind::Uint16),
    analog(0x22, "Unsigned Integer", PrimitiveKind::Uint24),
    analog(0x23, "Unsigned Integer", PrimitiveKind::Uint32),
    analog(0x24, "Unsigned Integer", PrimitiveKind::Uint40),
    analog(0x25, "Unsigned Integer", PrimitiveKind::Uint48),
    analog(0x26, "Unsigned Integer", PrimitiveKind::Uint56),
    analog(0x27, "Unsigned Integer", PrimitiveKind::Uint64),
    analog(0x28, "Signed Integer", PrimitiveKind::Int8),
    analog(0x29, "Signed Integer", PrimitiveKind::Int16),
    analog(0x2a, "Signed Integer", PrimitiveKind::Int24),
    analog(0x2b, "Signed Integer", PrimitiveKind::Int32),
    analog(0x2c, "Signed Integer", PrimitiveKind::Int40),
    analog(0x2d, "Signed Integer", PrimitiveKind::Int48),
    analog(0x2e, "Signed Integer", PrimitiveKind::Int56),
    analog(0x2f, "Signed Integer", PrimitiveKind::Int64),
    discrete(0x30, "Enumeration", PrimitiveKind::Uint8),
    discrete(0x31, "Enumeration", PrimitiveKind::Uint16),
    analog(0x39, "Floating point", PrimitiveKind::Float32),
    analog(0x3a, "Floating point", PrimitiveKind::Float64),
    discrete(0x41, "Octet string", PrimitiveKind::OctetString),
    discrete(0x42, "Character string", PrimitiveKind::OctetString),
    analog(0xe0, "Time of day", PrimitiveKind::Uint32),
    analog(0xe1, "Date", PrimitiveKind::Uint32),
    analog(0xe2, "UTCTime", PrimitiveKind::Uint32),
    discrete(0xe8, "Cluster ID", PrimitiveKind::Uint16),
    discrete(0xe9, "Attribute ID", PrimitiveKind::Uint16),
    discrete(0xea, "BACNet OID", PrimitiveKind::Uint32),
    discrete(0xf0, "IEEE address", PrimitiveKind::Eui64),
    discrete(0xf1, "128-bit security key", PrimitiveKind::SecurityKey),
    marker(0xff, "Unknown"),
];

/// Look up the descriptor for a wire type tag
///
/// # Errors
///
/// Returns `UnknownTypeTag` if the tag is not an implemented data type
pub fn descriptor_for(tag: u8) -> ZclResult<&'static DataTypeDescriptor> {
    DATA_TYPES
        .binary_search_by_key(&tag, |descriptor| descriptor.tag)
        .map(|index| &DATA_TYPES[index])
        .map_err(|_| ZclError::UnknownTypeTag(tag))
}

/// Look up the wire type tag for a payload codec
///
/// This is the reverse of [`descriptor_for`] and is deliberately partial:
/// only analog codecs are reverse-mapped, plus the boolean and IEEE address
/// exceptions. Where several tags share an analog codec, the unsigned
/// integer tag wins (Uint32 resolves to 0x23, not the u32 time tags).
///
/// # Errors
///
/// Returns `NoReverseMapping` for any other codec, even one present in the
/// forward table
pub fn tag_for_kind(kind: PrimitiveKind) -> ZclResult<u8> {
    match kind {
        PrimitiveKind::Bool => Ok(0x10),
        PrimitiveKind::Uint8 => Ok(0x20),
        PrimitiveKind::Uint16 => Ok(0x21),
        PrimitiveKind::Uint24 => Ok(0x22),
        PrimitiveKind::Uint32 => Ok(0x23),
        PrimitiveKind::Uint40 => Ok(0x24),
        PrimitiveKind::Uint48 => Ok(0x25),
        PrimitiveKind::Uint56 => Ok(0x26),
        PrimitiveKind::Uint64 => Ok(0x27),
        PrimitiveKind::Int8 => Ok(0x28),
        PrimitiveKind::Int16 => Ok(0x29),
        PrimitiveKind::Int24 => Ok(0x2a),
        PrimitiveKind::Int32 => Ok(0x2b),
        PrimitiveKind::Int40 => Ok(0x2c),
        PrimitiveKind::Int48 => Ok(0x2d),
        PrimitiveKind::Int56 => Ok(0x2e),
        PrimitiveKind::Int64 => Ok(0x2f),
        PrimitiveKind::Float32 => Ok(0x39),
        PrimitiveKind::Float64 => Ok(0x3a),
        PrimitiveKind::Eui64 => Ok(0xf0),
        other => Err(ZclError::NoReverseMapping(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_types_sorted_by_tag() {
        for pair in DATA_TYPES.windows(2) {
            assert!(pair[0].tag < pair[1].tag);
        }
    }

    #[test]
    fn test_descriptor_for_known_tag() {
        let descriptor = descriptor_for(0x21).unwrap();
        assert_eq!(descriptor.name, "Unsigned Integer");
        assert_eq!(descriptor.codec, Some(PrimitiveKind::Uint16));
        assert!(descriptor.is_analog());
    }

    #[test]
    fn test_descriptor_for_unknown_tag() {
        assert!(matches!(
            descriptor_for(0x43),
            Err(ZclError::UnknownTypeTag(0x43))
        ));
        assert!(matches!(
            descriptor_for(0x38),
            Err(ZclError::UnknownTypeTag(0x38))
        ));
    }

    #[test]
    fn test_markers_have_no_codec() {
        for tag in [0x00, 0xff] {
            let descriptor = descriptor_for(tag).unwrap();
            assert!(descriptor.codec.is_none());
            assert!(descriptor.class.is_none());
        }
    }

    #[test]
    fn test_reverse_map_analog_codecs() {
        assert_eq!(tag_for_kind(PrimitiveKind::Uint16).unwrap(), 0x21);
        assert_eq!(tag_for_kind(PrimitiveKind::Int48).unwrap(), 0x2d);
        assert_eq!(tag_for_kind(PrimitiveKind::Float32).unwrap(), 0x39);
    }

    #[test]
    fn test_reverse_map_exceptions() {
        assert_eq!(tag_for_kind(PrimitiveKind::Bool).unwrap(), 0x10);
        assert_eq!(tag_for_kind(PrimitiveKind::Uint32).unwrap(), 0x23);
        assert_eq!(tag_for_kind(PrimitiveKind::Eui64).unwrap(), 0xf0);
    }

    #[test]
    fn test_reverse_map_rejects_discrete_codecs() {
        assert!(matches!(
            tag_for_kind(PrimitiveKind::OctetString),
            Err(ZclError::NoReverseMapping(PrimitiveKind::OctetString))
        ));
        assert!(tag_for_kind(PrimitiveKind::Data32).is_err());
        assert!(tag_for_kind(PrimitiveKind::SecurityKey).is_err());
    }

    #[test]
    fn test_forward_and_reverse_agree_for_analog() {
        for descriptor in DATA_TYPES.iter().filter(|d| d.is_analog()) {
            let codec = descriptor.codec.unwrap();
            let tag = tag_for_kind(codec).unwrap();
            // Shared analog codecs resolve to a single canonical tag
            assert!(descriptor_for(tag).unwrap().codec == Some(codec));
        }
    }
}
