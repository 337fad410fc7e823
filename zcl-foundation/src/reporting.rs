//! Attribute reporting configuration records

use crate::datatype::descriptor_for;
use crate::status::Status;
use zcl_core::datatypes::ZclValue;
use zcl_core::error::{ZclError, ZclResult};
use zcl_core::wire::{ZclDecoder, ZclEncoder};

/// Configuration of automatic attribute reporting
///
/// The wire shape is selected by a leading direction byte, and within the
/// send shape a further field is conditional on the classification of the
/// referenced data type:
///
/// - `Receive` (direction 0x01): `[01][id:2][timeout:2]`
/// - `Send` (direction 0x00):
///   `[00][id:2][datatype:1][min:2][max:2][reportable_change?]`
///
/// `reportable_change` is on the wire exactly when the referenced datatype is
/// classified Analog, and is encoded with that datatype's own payload codec,
/// with no repeated tag byte.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeReportingConfig {
    /// Requesting reports to be received for the attribute
    Receive {
        /// Attribute identifier
        attrid: u16,
        /// Timeout period in seconds, 0 for none
        timeout: u16,
    },
    /// Notifying that reports for the attribute will be sent
    Send {
        /// Attribute identifier
        attrid: u16,
        /// Wire type tag of the attribute
        datatype: u8,
        /// Minimum reporting interval in seconds
        min_interval: u16,
        /// Maximum reporting interval in seconds
        max_interval: u16,
        /// Change threshold; meaningful only for Analog datatypes
        reportable_change: Option<ZclValue>,
    },
}

impl AttributeReportingConfig {
    /// Get the attribute identifier
    pub fn attrid(&self) -> u16 {
        match self {
            AttributeReportingConfig::Receive { attrid, .. } => *attrid,
            AttributeReportingConfig::Send { attrid, .. } => *attrid,
        }
    }

    /// Get the direction flag as it appears on the wire
    pub fn direction(&self) -> bool {
        matches!(self, AttributeReportingConfig::Receive { .. })
    }

    /// Encode the configuration
    ///
    /// # Errors
    ///
    /// Returns `UnknownTypeTag` if the send shape references an unimplemented
    /// datatype, and `InvalidData` if the datatype is Analog but no change
    /// threshold is set
    pub fn encode(&self, encoder: &mut ZclEncoder) -> ZclResult<()> {
        match self {
            AttributeReportingConfig::Receive { attrid, timeout } => {
                encoder.encode_bool(true)?;
                encoder.encode_u16(*attrid)?;
                encoder.encode_u16(*timeout)
            }
            AttributeReportingConfig::Send {
                attrid,
                datatype,
                min_interval,
                max_interval,
                reportable_change,
            } => {
                encoder.encode_bool(false)?;
                encoder.encode_u16(*attrid)?;
                encoder.encode_u8(*datatype)?;
                encoder.encode_u16(*min_interval)?;
                encoder.encode_u16(*max_interval)?;
                let descriptor = descriptor_for(*datatype)?;
                if descriptor.is_analog() {
                    let codec = descriptor
                        .codec
                        .ok_or(ZclError::NoCodecForTag(*datatype))?;
                    let change = reportable_change.as_ref().ok_or_else(|| {
                        ZclError::InvalidData(format!(
                            "Analog datatype 0x{:02x} requires a reportable change threshold",
                            datatype
                        ))
                    })?;
                    codec.encode(change, encoder)?;
                }
                // A discrete datatype has no change field, even if one is set
                Ok(())
            }
        }
    }

    /// Decode a configuration, selecting the shape from the direction byte
    ///
    /// # Errors
    ///
    /// Returns `UnknownTypeTag` for an unimplemented datatype in the send
    /// shape, before the classification is consulted
    pub fn decode(decoder: &mut ZclDecoder<'_>) -> ZclResult<Self> {
        let direction = decoder.decode_bool()?;
        let attrid = decoder.decode_u16()?;
        if direction {
            // Requesting reports to be received by us
            let timeout = decoder.decode_u16()?;
            Ok(AttributeReportingConfig::Receive { attrid, timeout })
        } else {
            // Notifying that we will send reports
            let datatype = decoder.decode_u8()?;
            let min_interval = decoder.decode_u16()?;
            let max_interval = decoder.decode_u16()?;
            let descriptor = descriptor_for(datatype)?;
            let reportable_change = if descriptor.is_analog() {
                let codec = descriptor.codec.ok_or(ZclError::NoCodecForTag(datatype))?;
                Some(codec.decode(decoder)?)
            } else {
                None
            };
            Ok(AttributeReportingConfig::Send {
                attrid,
                datatype,
                min_interval,
                max_interval,
                reportable_change,
            })
        }
    }
}

/// One record of a "Configure reporting response" command
///
/// Wire form: `[status:1][direction:1][id:2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigureReportingResponseRecord {
    /// Outcome of the configuration
    pub status: Status,
    /// Direction byte echoed from the request
    pub direction: u8,
    /// Attribute identifier
    pub attrid: u16,
}

impl ConfigureReportingResponseRecord {
    /// Encode the record
    pub fn encode(&self, encoder: &mut ZclEncoder) -> ZclResult<()> {
        self.status.encode(encoder)?;
        encoder.encode_u8(self.direction)?;
        encoder.encode_u16(self.attrid)
    }

    /// Decode the record
    pub fn decode(decoder: &mut ZclDecoder<'_>) -> ZclResult<Self> {
        let status = Status::decode(decoder)?;
        let direction = decoder.decode_u8()?;
        let attrid = decoder.decode_u16()?;
        Ok(Self {
            status,
            direction,
            attrid,
        })
    }
}

/// One record of a "Read reporting configuration" command
///
/// Wire form: `[direction:1][id:2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadReportingConfigRecord {
    /// Direction of the configuration being queried
    pub direction: u8,
    /// Attribute identifier
    pub attrid: u16,
}

impl ReadReportingConfigRecord {
    /// Encode the record
    pub fn encode(&self, encoder: &mut ZclEncoder) -> ZclResult<()> {
        encoder.encode_u8(self.direction)?;
        encoder.encode_u16(self.attrid)
    }

    /// Decode the record
    pub fn decode(decoder: &mut ZclDecoder<'_>) -> ZclResult<Self> {
        let direction = decoder.decode_u8()?;
        let attrid = decoder.decode_u16()?;
        Ok(Self { direction, attrid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receive_shape_round_trip() {
        let config = AttributeReportingConfig::Receive {
            attrid: 0x1234,
            timeout: 0x0050,
        };
        let mut encoder = ZclEncoder::new();
        config.encode(&mut encoder).unwrap();
        assert_eq!(encoder.as_bytes(), &[0x01, 0x34, 0x12, 0x50, 0x00]);

        let bytes = encoder.into_bytes();
        let mut decoder = ZclDecoder::new(&bytes);
        assert_eq!(
            AttributeReportingConfig::decode(&mut decoder).unwrap(),
            config
        );
        assert!(decoder.is_empty());
    }

    #[test]
    fn test_send_shape_discrete_vector() {
        let config = AttributeReportingConfig::Send {
            attrid: 0x0000,
            datatype: 0x10, // Boolean, Discrete
            min_interval: 10,
            max_interval: 60,
            reportable_change: None,
        };
        let mut encoder = ZclEncoder::new();
        config.encode(&mut encoder).unwrap();
        assert_eq!(
            encoder.as_bytes(),
            &[0x00, 0x00, 0x00, 0x10, 0x0a, 0x00, 0x3c, 0x00]
        );
    }

    #[test]
    fn test_send_shape_discrete_never_writes_change() {
        let config = AttributeReportingConfig::Send {
            attrid: 0x0000,
            datatype: 0x10,
            min_interval: 10,
            max_interval: 60,
            reportable_change: Some(ZclValue::Bool(true)),
        };
        let mut encoder = ZclEncoder::new();
        config.encode(&mut encoder).unwrap();
        // Still 8 bytes: the in-memory change threshold is not encoded
        assert_eq!(encoder.as_bytes().len(), 8);
    }

    #[test]
    fn test_send_shape_discrete_never_reads_change() {
        let bytes = [0x00, 0x00, 0x00, 0x10, 0x0a, 0x00, 0x3c, 0x00, 0xaa, 0xbb];
        let mut decoder = ZclDecoder::new(&bytes);
        let config = AttributeReportingConfig::decode(&mut decoder).unwrap();
        match config {
            AttributeReportingConfig::Send {
                reportable_change, ..
            } => assert_eq!(reportable_change, None),
            other => panic!("Expected Send shape, got {:?}", other),
        }
        // Trailing bytes belong to the next record
        assert_eq!(decoder.remaining(), 2);
    }

    #[test]
    fn test_send_shape_analog_round_trip() {
        let config = AttributeReportingConfig::Send {
            attrid: 0x0402,
            datatype: 0x29, // Signed Integer 16-bit, Analog
            min_interval: 1,
            max_interval: 300,
            reportable_change: Some(ZclValue::Int16(50)),
        };
        let mut encoder = ZclEncoder::new();
        config.encode(&mut encoder).unwrap();
        // No tag byte before the change threshold, only its payload
        assert_eq!(
            encoder.as_bytes(),
            &[0x00, 0x02, 0x04, 0x29, 0x01, 0x00, 0x2c, 0x01, 0x32, 0x00]
        );

        let bytes = encoder.into_bytes();
        let mut decoder = ZclDecoder::new(&bytes);
        assert_eq!(
            AttributeReportingConfig::decode(&mut decoder).unwrap(),
            config
        );
        assert!(decoder.is_empty());
    }

    #[test]
    fn test_send_shape_analog_requires_change() {
        let config = AttributeReportingConfig::Send {
            attrid: 0x0000,
            datatype: 0x21,
            min_interval: 0,
            max_interval: 0,
            reportable_change: None,
        };
        let mut encoder = ZclEncoder::new();
        assert!(matches!(
            config.encode(&mut encoder),
            Err(ZclError::InvalidData(_))
        ));
    }

    #[test]
    fn test_send_shape_unknown_datatype() {
        let bytes = [0x00, 0x00, 0x00, 0x43, 0x0a, 0x00, 0x3c, 0x00];
        let mut decoder = ZclDecoder::new(&bytes);
        assert!(matches!(
            AttributeReportingConfig::decode(&mut decoder),
            Err(ZclError::UnknownTypeTag(0x43))
        ));
    }

    #[test]
    fn test_direction_accessors() {
        let receive = AttributeReportingConfig::Receive {
            attrid: 7,
            timeout: 0,
        };
        assert!(receive.direction());
        assert_eq!(receive.attrid(), 7);

        let send = AttributeReportingConfig::Send {
            attrid: 9,
            datatype: 0x10,
            min_interval: 0,
            max_interval: 0,
            reportable_change: None,
        };
        assert!(!send.direction());
        assert_eq!(send.attrid(), 9);
    }

    #[test]
    fn test_configure_reporting_response_record() {
        let record = ConfigureReportingResponseRecord {
            status: Status::UnreportableAttribute,
            direction: 0x00,
            attrid: 0x0021,
        };
        let mut encoder = ZclEncoder::new();
        record.encode(&mut encoder).unwrap();
        assert_eq!(encoder.as_bytes(), &[0x8c, 0x00, 0x21, 0x00]);

        let bytes = encoder.into_bytes();
        let mut decoder = ZclDecoder::new(&bytes);
        assert_eq!(
            ConfigureReportingResponseRecord::decode(&mut decoder).unwrap(),
            record
        );
    }

    #[test]
    fn test_read_reporting_config_record() {
        let record = ReadReportingConfigRecord {
            direction: 0x01,
            attrid: 0x0a00,
        };
        let mut encoder = ZclEncoder::new();
        record.encode(&mut encoder).unwrap();
        assert_eq!(encoder.as_bytes(), &[0x01, 0x00, 0x0a]);

        let bytes = encoder.into_bytes();
        let mut decoder = ZclDecoder::new(&bytes);
        assert_eq!(
            ReadReportingConfigRecord::decode(&mut decoder).unwrap(),
            record
        );
    }
}
