use core::fmt;

use crate::{SnowflakeId, codec};

/// A 64-bit Snowflake ID with one 10-bit discriminator.
///
/// - 42 bits timestamp (ms since the configured epoch)
/// - 10 bits discriminator (e.g. machine ID), `0` if the input exceeded 1023
/// - 12 bits sequence
///
/// ```text
///  Bit Index:  63             22 21                12 11             0
///              +----------------+--------------------+---------------+
///  Field:      | timestamp (42) | discriminator (10) | sequence (12) |
///              +----------------+--------------------+---------------+
///              |<------ MSB ----------- 64 bits ---------- LSB ----->|
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SingleFieldId {
    id: u64,
}

impl SingleFieldId {
    /// Bitmask for the timestamp field once shifted down.
    pub const TIMESTAMP_MASK: u64 = codec::TIMESTAMP_MASK;

    /// Bitmask for the 10-bit discriminator once shifted down.
    pub const DISCRIMINATOR_MASK: u64 = codec::MAX_DISCRIMINATOR;

    /// Bitmask for the 12-bit sequence field.
    pub const SEQUENCE_MASK: u64 = codec::MAX_SEQUENCE;

    /// Packs the fields into an ID. A discriminator greater than 1023 is
    /// stored as `0`; the sequence is masked to 12 bits.
    pub const fn from(timestamp: u64, discriminator: u64, sequence: u64) -> Self {
        Self {
            id: codec::encode_single(timestamp, discriminator, sequence),
        }
    }

    /// Extracts the timestamp (ms since the epoch) from the packed ID.
    pub const fn timestamp(&self) -> u64 {
        codec::decode_elapsed(self.id)
    }

    /// Extracts the discriminator from the packed ID.
    pub const fn discriminator(&self) -> u64 {
        codec::decode_discriminator(self.id)
    }

    /// Extracts the sequence number from the packed ID.
    pub const fn sequence(&self) -> u64 {
        codec::decode_sequence(self.id)
    }
}

impl SnowflakeId for SingleFieldId {
    type Discriminator = u64;

    fn timestamp(&self) -> u64 {
        self.timestamp()
    }

    fn max_timestamp() -> u64 {
        Self::TIMESTAMP_MASK
    }

    fn discriminator(&self) -> u64 {
        self.discriminator()
    }

    fn sequence(&self) -> u64 {
        self.sequence()
    }

    fn max_sequence() -> u64 {
        Self::SEQUENCE_MASK
    }

    fn from_components(timestamp: u64, discriminator: u64, sequence: u64) -> Self {
        debug_assert!(sequence <= Self::SEQUENCE_MASK, "sequence overflow");
        Self::from(timestamp, discriminator, sequence)
    }

    fn to_raw(&self) -> u64 {
        self.id
    }

    fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }
}

impl From<SingleFieldId> for u64 {
    fn from(id: SingleFieldId) -> Self {
        id.id
    }
}

impl fmt::Display for SingleFieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for SingleFieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleFieldId")
            .field("raw", &format_args!("0x{:016x}", self.id))
            .field("timestamp", &self.timestamp())
            .field("discriminator", &self.discriminator())
            .field("sequence", &self.sequence())
            .finish()
    }
}
