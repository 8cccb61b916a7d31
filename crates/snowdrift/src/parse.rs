use core::time::Duration;

use crate::{codec, epoch_millis};

/// The decoded fields of a one-discriminator ID.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedId {
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub sequence: u64,
    pub discriminator: u64,
}

/// The decoded fields of a two-discriminator ID.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedId2 {
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub sequence: u64,
    pub discriminator1: u64,
    pub discriminator2: u64,
}

/// Decodes a one-discriminator ID.
///
/// The timestamp is reconstructed from the epoch configured *now*, not the one
/// in effect when the ID was minted.
///
/// ```
/// use snowdrift::parse;
///
/// let parsed = parse(1_292_053_924_173_320_192);
/// assert_eq!(parsed.timestamp, 1_640_942_460_724);
/// assert_eq!(parsed.discriminator, 1);
/// assert_eq!(parsed.sequence, 0);
/// ```
pub fn parse(id: u64) -> ParsedId {
    parse_millis(id, epoch_millis())
}

/// Decodes a two-discriminator ID.
///
/// The timestamp is reconstructed from the epoch configured *now*, not the one
/// in effect when the ID was minted.
///
/// ```
/// use snowdrift::parse2;
///
/// let parsed = parse2(1_292_065_108_376_162_304);
/// assert_eq!(parsed.timestamp, 1_640_945_127_245);
/// assert_eq!(parsed.discriminator1, 1);
/// assert_eq!(parsed.discriminator2, 24);
/// assert_eq!(parsed.sequence, 0);
/// ```
pub fn parse2(id: u64) -> ParsedId2 {
    parse2_millis(id, epoch_millis())
}

/// Decodes a one-discriminator ID against an explicit epoch, for IDs minted
/// before the process-wide epoch was changed.
///
/// An epoch too large for the timestamp saturates it at `u64::MAX`.
pub fn parse_at(id: u64, epoch: Duration) -> ParsedId {
    parse_millis(id, saturating_millis(epoch))
}

/// Decodes a two-discriminator ID against an explicit epoch.
///
/// An epoch too large for the timestamp saturates it at `u64::MAX`.
pub fn parse2_at(id: u64, epoch: Duration) -> ParsedId2 {
    parse2_millis(id, saturating_millis(epoch))
}

fn saturating_millis(epoch: Duration) -> u64 {
    u64::try_from(epoch.as_millis()).unwrap_or(u64::MAX)
}

const fn parse_millis(id: u64, epoch_millis: u64) -> ParsedId {
    ParsedId {
        timestamp: codec::decode_timestamp_at(id, epoch_millis),
        sequence: codec::decode_sequence(id),
        discriminator: codec::decode_discriminator(id),
    }
}

const fn parse2_millis(id: u64, epoch_millis: u64) -> ParsedId2 {
    ParsedId2 {
        timestamp: codec::decode_timestamp_at(id, epoch_millis),
        sequence: codec::decode_sequence(id),
        discriminator1: codec::decode_discriminator1(id),
        discriminator2: codec::decode_discriminator2(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_EPOCH, DualFieldId, SingleFieldId, SnowflakeId};

    #[test]
    fn parse_known_vector() {
        let parsed = parse(1_292_053_924_173_320_192);
        assert_eq!(
            parsed,
            ParsedId {
                timestamp: 1_640_942_460_724,
                sequence: 0,
                discriminator: 1,
            }
        );
    }

    #[test]
    fn parse2_known_vector() {
        let parsed = parse2(1_292_065_108_376_162_304);
        assert_eq!(
            parsed,
            ParsedId2 {
                timestamp: 1_640_945_127_245,
                sequence: 0,
                discriminator1: 1,
                discriminator2: 24,
            }
        );
    }

    #[test]
    fn parse_matches_id_accessors() {
        let id = SingleFieldId::from_components(123_456, 777, 4095);
        let parsed = parse_at(id.to_raw(), DEFAULT_EPOCH);
        assert_eq!(parsed.timestamp, DEFAULT_EPOCH.as_millis() as u64 + 123_456);
        assert_eq!(parsed.discriminator, id.discriminator());
        assert_eq!(parsed.sequence, id.sequence());
    }

    #[test]
    fn parse2_matches_id_accessors() {
        let id = DualFieldId::from_components(99, (17, 30), 12);
        let parsed = parse2_at(id.to_raw(), Duration::from_millis(1));
        assert_eq!(parsed.timestamp, 100);
        assert_eq!(parsed.discriminator1, 17);
        assert_eq!(parsed.discriminator2, 30);
        assert_eq!(parsed.sequence, 12);
    }

    #[test]
    fn every_input_decodes() {
        let parsed = parse_at(u64::MAX, Duration::ZERO);
        assert_eq!(parsed.timestamp, u64::MAX >> 22);
        assert_eq!(parsed.discriminator, 1023);
        assert_eq!(parsed.sequence, 4095);

        let parsed = parse2_at(0, Duration::ZERO);
        assert_eq!(parsed.timestamp, 0);
        assert_eq!(parsed.discriminator1, 0);
        assert_eq!(parsed.discriminator2, 0);
    }

    #[test]
    fn oversized_epoch_saturates_timestamp() {
        let parsed = parse_at(1 << 22, Duration::MAX);
        assert_eq!(parsed.timestamp, u64::MAX);
        assert_eq!(parsed.sequence, 0);

        let parsed = parse2_at(1 << 22, Duration::from_millis(u64::MAX));
        assert_eq!(parsed.timestamp, u64::MAX);

        let parsed = parse_at(1 << 22, Duration::from_millis(u64::MAX - 1));
        assert_eq!(parsed.timestamp, u64::MAX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parsed_id_serializes_as_struct() {
        let parsed = parse2(1_292_065_108_376_162_304);
        let json = serde_json::to_value(parsed).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "timestamp": 1_640_945_127_245u64,
                "sequence": 0,
                "discriminator1": 1,
                "discriminator2": 24,
            })
        );
        let back: ParsedId2 = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, parsed);
    }
}
