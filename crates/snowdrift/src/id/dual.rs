use core::fmt;

use crate::{SnowflakeId, codec};

/// A 64-bit Snowflake ID with two 5-bit discriminators, e.g. machine and
/// process.
///
/// - 42 bits timestamp (ms since the configured epoch)
/// - 5 bits discriminator #2, `0` if the input exceeded 31
/// - 5 bits discriminator #1, `0` if the input exceeded 31
/// - 12 bits sequence
///
/// ```text
///  Bit Index:  63             22 21       17 16       12 11             0
///              +----------------+-----------+-----------+---------------+
///  Field:      | timestamp (42) | disc2 (5) | disc1 (5) | sequence (12) |
///              +----------------+-----------+-----------+---------------+
///              |<------ MSB ------------ 64 bits ----------- LSB ------>|
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DualFieldId {
    id: u64,
}

impl DualFieldId {
    /// Bitmask for the timestamp field once shifted down.
    pub const TIMESTAMP_MASK: u64 = codec::TIMESTAMP_MASK;

    /// Bitmask for each 5-bit discriminator once shifted down.
    pub const DISCRIMINATOR_MASK: u64 = codec::MAX_HALF_DISCRIMINATOR;

    /// Bitmask for the 12-bit sequence field.
    pub const SEQUENCE_MASK: u64 = codec::MAX_SEQUENCE;

    /// Packs the fields into an ID. Each discriminator greater than 31 is
    /// stored as `0`; the sequence is masked to 12 bits.
    pub const fn from(
        timestamp: u64,
        discriminator1: u64,
        discriminator2: u64,
        sequence: u64,
    ) -> Self {
        Self {
            id: codec::encode_dual(timestamp, discriminator1, discriminator2, sequence),
        }
    }

    /// Extracts the timestamp (ms since the epoch) from the packed ID.
    pub const fn timestamp(&self) -> u64 {
        codec::decode_elapsed(self.id)
    }

    /// Extracts discriminator #1 (bits 12..=16).
    pub const fn discriminator1(&self) -> u64 {
        codec::decode_discriminator1(self.id)
    }

    /// Extracts discriminator #2 (bits 17..=21).
    pub const fn discriminator2(&self) -> u64 {
        codec::decode_discriminator2(self.id)
    }

    /// Extracts the sequence number from the packed ID.
    pub const fn sequence(&self) -> u64 {
        codec::decode_sequence(self.id)
    }
}

impl SnowflakeId for DualFieldId {
    type Discriminator = (u64, u64);

    fn timestamp(&self) -> u64 {
        self.timestamp()
    }

    fn max_timestamp() -> u64 {
        Self::TIMESTAMP_MASK
    }

    fn discriminator(&self) -> (u64, u64) {
        (self.discriminator1(), self.discriminator2())
    }

    fn sequence(&self) -> u64 {
        self.sequence()
    }

    fn max_sequence() -> u64 {
        Self::SEQUENCE_MASK
    }

    fn from_components(timestamp: u64, discriminator: (u64, u64), sequence: u64) -> Self {
        debug_assert!(sequence <= Self::SEQUENCE_MASK, "sequence overflow");
        let (discriminator1, discriminator2) = discriminator;
        Self::from(timestamp, discriminator1, discriminator2, sequence)
    }

    fn to_raw(&self) -> u64 {
        self.id
    }

    fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }
}

impl From<DualFieldId> for u64 {
    fn from(id: DualFieldId) -> Self {
        id.id
    }
}

impl fmt::Display for DualFieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for DualFieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DualFieldId")
            .field("raw", &format_args!("0x{:016x}", self.id))
            .field("timestamp", &self.timestamp())
            .field("discriminator1", &self.discriminator1())
            .field("discriminator2", &self.discriminator2())
            .field("sequence", &self.sequence())
            .finish()
    }
}
