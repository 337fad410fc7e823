//! General command table for the cluster library foundation

use crate::attribute::{
    Attribute, DiscoverAttributesResponseRecord, ReadAttributeRecord, WriteAttributesStatusRecord,
};
use crate::reporting::{
    AttributeReportingConfig, ConfigureReportingResponseRecord, ReadReportingConfigRecord,
};
use crate::status::Status;
use zcl_core::error::{ZclError, ZclResult};
use zcl_core::wire::{ZclDecoder, ZclEncoder};

/// Codec reference for one command parameter slot
///
/// List parameters are unbounded: elements are packed back-to-back and
/// decoded until the buffer is exhausted, so a list is only ever the final
/// parameter of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandParam {
    Uint8,
    Uint16,
    Status,
    AttributeIdList,
    AttributeList,
    ReadAttributeRecordList,
    WriteAttributesStatusRecordList,
    AttributeReportingConfigList,
    ConfigureReportingResponseRecordList,
    ReadReportingConfigRecordList,
    DiscoverAttributesResponseRecordList,
}

/// Decoded value of one command parameter slot
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Uint8(u8),
    Uint16(u16),
    Status(Status),
    AttributeIds(Vec<u16>),
    Attributes(Vec<Attribute>),
    ReadAttributeRecords(Vec<ReadAttributeRecord>),
    WriteAttributesStatusRecords(Vec<WriteAttributesStatusRecord>),
    AttributeReportingConfigs(Vec<AttributeReportingConfig>),
    ConfigureReportingResponseRecords(Vec<ConfigureReportingResponseRecord>),
    ReadReportingConfigRecords(Vec<ReadReportingConfigRecord>),
    DiscoverAttributesResponseRecords(Vec<DiscoverAttributesResponseRecord>),
}

/// Decode list elements until the buffer is exhausted
fn decode_list<T>(
    decoder: &mut ZclDecoder<'_>,
    decode_one: impl Fn(&mut ZclDecoder<'_>) -> ZclResult<T>,
) -> ZclResult<Vec<T>> {
    let mut records = Vec::new();
    while !decoder.is_empty() {
        records.push(decode_one(decoder)?);
    }
    Ok(records)
}

impl CommandParam {
    /// Decode one parameter with this codec
    pub fn decode(self, decoder: &mut ZclDecoder<'_>) -> ZclResult<ParamValue> {
        let value = match self {
            CommandParam::Uint8 => ParamValue::Uint8(decoder.decode_u8()?),
            CommandParam::Uint16 => ParamValue::Uint16(decoder.decode_u16()?),
            CommandParam::Status => ParamValue::Status(Status::decode(decoder)?),
            CommandParam::AttributeIdList => {
                ParamValue::AttributeIds(decode_list(decoder, |d| d.decode_u16())?)
            }
            CommandParam::AttributeList => {
                ParamValue::Attributes(decode_list(decoder, Attribute::decode)?)
            }
            CommandParam::ReadAttributeRecordList => ParamValue::ReadAttributeRecords(
                decode_list(decoder, ReadAttributeRecord::decode)?,
            ),
            CommandParam::WriteAttributesStatusRecordList => {
                ParamValue::WriteAttributesStatusRecords(decode_list(
                    decoder,
                    WriteAttributesStatusRecord::decode,
                )?)
            }
            CommandParam::AttributeReportingConfigList => {
                ParamValue::AttributeReportingConfigs(decode_list(
                    decoder,
                    AttributeReportingConfig::decode,
                )?)
            }
            CommandParam::ConfigureReportingResponseRecordList => {
                ParamValue::ConfigureReportingResponseRecords(decode_list(
                    decoder,
                    ConfigureReportingResponseRecord::decode,
                )?)
            }
            CommandParam::ReadReportingConfigRecordList => {
                ParamValue::ReadReportingConfigRecords(decode_list(
                    decoder,
                    ReadReportingConfigRecord::decode,
                )?)
            }
            CommandParam::DiscoverAttributesResponseRecordList => {
                ParamValue::DiscoverAttributesResponseRecords(decode_list(
                    decoder,
                    DiscoverAttributesResponseRecord::decode,
                )?)
            }
        };
        Ok(value)
    }
}

impl ParamValue {
    /// Get the codec reference this value belongs to
    pub fn param(&self) -> CommandParam {
        match self {
            ParamValue::Uint8(_) => CommandParam::Uint8,
            ParamValue::Uint16(_) => CommandParam::Uint16,
            ParamValue::Status(_) => CommandParam::Status,
            ParamValue::AttributeIds(_) => CommandParam::AttributeIdList,
            ParamValue::Attributes(_) => CommandParam::AttributeList,
            ParamValue::ReadAttributeRecords(_) => CommandParam::ReadAttributeRecordList,
            ParamValue::WriteAttributesStatusRecords(_) => {
                CommandParam::WriteAttributesStatusRecordList
            }
            ParamValue::AttributeReportingConfigs(_) => CommandParam::AttributeReportingConfigList,
            ParamValue::ConfigureReportingResponseRecords(_) => {
                CommandParam::ConfigureReportingResponseRecordList
            }
            ParamValue::ReadReportingConfigRecords(_) => CommandParam::ReadReportingConfigRecordList,
            ParamValue::DiscoverAttributesResponseRecords(_) => {
                CommandParam::DiscoverAttributesResponseRecordList
            }
        }
    }

    /// Encode this parameter value
    pub fn encode(&self, encoder: &mut ZclEncoder) -> ZclResult<()> {
        match self {
            ParamValue::Uint8(v) => encoder.encode_u8(*v),
            ParamValue::Uint16(v) => encoder.encode_u16(*v),
            ParamValue::Status(status) => status.encode(encoder),
            ParamValue::AttributeIds(ids) => {
                for id in ids {
                    encoder.encode_u16(*id)?;
                }
                Ok(())
            }
            ParamValue::Attributes(records) => {
                for record in records {
                    record.encode(encoder)?;
                }
                Ok(())
            }
            ParamValue::ReadAttributeRecords(records) => {
                for record in records {
                    record.encode(encoder)?;
                }
                Ok(())
            }
            ParamValue::WriteAttributesStatusRecords(records) => {
                for record in records {
                    record.encode(encoder)?;
                }
                Ok(())
            }
            ParamValue::AttributeReportingConfigs(records) => {
                for record in records {
                    record.encode(encoder)?;
                }
                Ok(())
            }
            ParamValue::ConfigureReportingResponseRecords(records) => {
                for record in records {
                    record.encode(encoder)?;
                }
                Ok(())
            }
            ParamValue::ReadReportingConfigRecords(records) => {
                for record in records {
                    record.encode(encoder)?;
                }
                Ok(())
            }
            ParamValue::DiscoverAttributesResponseRecords(records) => {
                for record in records {
                    record.encode(encoder)?;
                }
                Ok(())
            }
        }
    }
}

/// One entry of the general command table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Command identifier
    pub id: u8,
    /// Display name from the cluster library specification
    pub name: &'static str,
    /// Ordered parameter codec references
    pub params: &'static [CommandParam],
    /// Whether this command is a reply, used by callers to route messages
    pub is_response: bool,
}

impl CommandDescriptor {
    /// Decode this command's parameters in table order
    pub fn decode_params(&self, decoder: &mut ZclDecoder<'_>) -> ZclResult<Vec<ParamValue>> {
        log::trace!(
            "Decoding {} parameter(s) for {} (0x{:02x})",
            self.params.len(),
            self.name,
            self.id
        );
        self.params
            .iter()
            .map(|param| param.decode(decoder))
            .collect()
    }

    /// Encode parameter values against this command's layout
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if the values do not match the table's parameter
    /// count or codecs
    pub fn encode_params(
        &self,
        values: &[ParamValue],
        encoder: &mut ZclEncoder,
    ) -> ZclResult<()> {
        if values.len() != self.params.len() {
            return Err(ZclError::InvalidData(format!(
                "{} takes {} parameter(s), got {}",
                self.name,
                self.params.len(),
                values.len()
            )));
        }
        for (param, value) in self.params.iter().zip(values) {
            if value.param() != *param {
                return Err(ZclError::InvalidData(format!(
                    "{} expects {:?}, got {:?}",
                    self.name,
                    param,
                    value.param()
                )));
            }
            value.encode(encoder)?;
        }
        Ok(())
    }
}

const fn request(id: u8, name: &'static str, params: &'static [CommandParam]) -> CommandDescriptor {
    CommandDescriptor {
        id,
        name,
        params,
        is_response: false,
    }
}

const fn response(
    id: u8,
    name: &'static str,
    params: &'static [CommandParam],
) -> CommandDescriptor {
    CommandDescriptor {
        id,
        name,
        params,
        is_response: true,
    }
}

/// General command table, sorted by id
///
/// The structured attribute operations 0x0e (Read attributes structured),
/// 0x0f (Write attributes structured) and 0x10 (Write attributes structured
/// response) are not implemented; looking them up fails.
static GENERAL_COMMANDS: [CommandDescriptor; 14] = [
    request(0x00, "Read attributes", &[CommandParam::AttributeIdList]),
    response(0x01, "Read attributes response", &[CommandParam::ReadAttributeRecordList]),
    request(0x02, "Write attributes", &[CommandParam::AttributeList]),
    request(0x03, "Write attributes undivided", &[CommandParam::AttributeList]),
    response(0x04, "Write attributes response", &[CommandParam::WriteAttributesStatusRecordList]),
    request(0x05, "Write attributes no response", &[CommandParam::AttributeList]),
    request(0x06, "Configure reporting", &[CommandParam::AttributeReportingConfigList]),
    response(0x07, "Configure reporting response", &[CommandParam::ConfigureReportingResponseRecordList]),
    request(0x08, "Read reporting configuration", &[CommandParam::ReadReportingConfigRecordList]),
    response(0x09, "Read reporting configuration response", &[CommandParam::AttributeReportingConfigList]),
    request(0x0a, "Report attributes", &[CommandParam::AttributeList]),
    response(0x0b, "Default response", &[CommandParam::Uint16, CommandParam::Status]),
    request(0x0c, "Discover attributes", &[CommandParam::Uint16, CommandParam::Uint8]),
    response(0x0d, "Discover attributes response", &[CommandParam::DiscoverAttributesResponseRecordList]),
];

/// Look up the descriptor for a general command id
///
/// # Errors
///
/// Returns `UnsupportedCommand` for the structured attribute ids 0x0e to
/// 0x10 and for any id outside the table
pub fn command_for(id: u8) -> ZclResult<&'static CommandDescriptor> {
    GENERAL_COMMANDS
        .binary_search_by_key(&id, |command| command.id)
        .map(|index| &GENERAL_COMMANDS[index])
        .map_err(|_| ZclError::UnsupportedCommand(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::TaggedValue;
    use zcl_core::datatypes::ZclValue;

    #[test]
    fn test_command_table_sorted_by_id() {
        for pair in GENERAL_COMMANDS.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    #[test]
    fn test_command_for_default_response() {
        let command = command_for(0x0b).unwrap();
        assert_eq!(command.name, "Default response");
        assert_eq!(command.params, &[CommandParam::Uint16, CommandParam::Status]);
        assert!(command.is_response);
    }

    #[test]
    fn test_command_for_structured_ids_unsupported() {
        for id in [0x0e, 0x0f, 0x10] {
            assert!(matches!(
                command_for(id),
                Err(ZclError::UnsupportedCommand(got)) if got == id
            ));
        }
    }

    #[test]
    fn test_command_for_absent_id_unsupported() {
        assert!(matches!(
            command_for(0x42),
            Err(ZclError::UnsupportedCommand(0x42))
        ));
    }

    #[test]
    fn test_read_attributes_params_round_trip() {
        let command = command_for(0x00).unwrap();
        let values = vec![ParamValue::AttributeIds(vec![0x0001, 0x0002, 0x0300])];

        let mut encoder = ZclEncoder::new();
        command.encode_params(&values, &mut encoder).unwrap();
        assert_eq!(encoder.as_bytes(), &[0x01, 0x00, 0x02, 0x00, 0x00, 0x03]);

        let bytes = encoder.into_bytes();
        let mut decoder = ZclDecoder::new(&bytes);
        assert_eq!(command.decode_params(&mut decoder).unwrap(), values);
    }

    #[test]
    fn test_default_response_params_round_trip() {
        let command = command_for(0x0b).unwrap();
        let values = vec![
            ParamValue::Uint16(0x0006),
            ParamValue::Status(Status::UnsupClusterCommand),
        ];

        let mut encoder = ZclEncoder::new();
        command.encode_params(&values, &mut encoder).unwrap();
        assert_eq!(encoder.as_bytes(), &[0x06, 0x00, 0x81]);

        let bytes = encoder.into_bytes();
        let mut decoder = ZclDecoder::new(&bytes);
        assert_eq!(command.decode_params(&mut decoder).unwrap(), values);
        assert!(decoder.is_empty());
    }

    #[test]
    fn test_report_attributes_params_round_trip() {
        let command = command_for(0x0a).unwrap();
        let values = vec![ParamValue::Attributes(vec![
            Attribute::new(0x0000, TaggedValue::new(0x20, ZclValue::Uint8(42))),
            Attribute::new(0x0001, TaggedValue::new(0x10, ZclValue::Bool(true))),
        ])];

        let mut encoder = ZclEncoder::new();
        command.encode_params(&values, &mut encoder).unwrap();

        let bytes = encoder.into_bytes();
        let mut decoder = ZclDecoder::new(&bytes);
        assert_eq!(command.decode_params(&mut decoder).unwrap(), values);
    }

    #[test]
    fn test_encode_params_wrong_arity() {
        let command = command_for(0x0b).unwrap();
        let mut encoder = ZclEncoder::new();
        assert!(command
            .encode_params(&[ParamValue::Uint16(0)], &mut encoder)
            .is_err());
    }

    #[test]
    fn test_encode_params_wrong_codec() {
        let command = command_for(0x0b).unwrap();
        let mut encoder = ZclEncoder::new();
        let values = [ParamValue::Uint8(0), ParamValue::Status(Status::Success)];
        assert!(matches!(
            command.encode_params(&values, &mut encoder),
            Err(ZclError::InvalidData(_))
        ));
    }

    #[test]
    fn test_scalar_params_leave_remainder() {
        let command = command_for(0x0c).unwrap();
        let bytes = [0x00, 0x00, 0x10, 0xee];
        let mut decoder = ZclDecoder::new(&bytes);
        let values = command.decode_params(&mut decoder).unwrap();
        assert_eq!(
            values,
            vec![ParamValue::Uint16(0x0000), ParamValue::Uint8(0x10)]
        );
        // A following field is left for the caller
        assert_eq!(decoder.remaining(), 1);
    }

    #[test]
    fn test_empty_list_param_decodes_empty() {
        let command = command_for(0x01).unwrap();
        let mut decoder = ZclDecoder::new(&[]);
        assert_eq!(
            command.decode_params(&mut decoder).unwrap(),
            vec![ParamValue::ReadAttributeRecords(vec![])]
        );
    }
}
