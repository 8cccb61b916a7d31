use core::fmt;
use core::hash::Hash;

/// A packed 64-bit Snowflake layout: timestamp, discriminator(s), sequence.
///
/// The generators are written once against this trait. Each layout decides
/// how its discriminator is shaped and packed; timestamp and sequence handling
/// is shared.
///
/// # Example
///
/// ```
/// use snowdrift::{SingleFieldId, SnowflakeId};
///
/// let id = SingleFieldId::from_components(1000, 2, 1);
/// assert_eq!(id.timestamp(), 1000);
/// assert_eq!(id.discriminator(), 2);
/// assert_eq!(id.sequence(), 1);
/// ```
pub trait SnowflakeId:
    Copy + Clone + fmt::Display + fmt::Debug + PartialOrd + Ord + PartialEq + Eq + Hash
{
    /// The caller-supplied discriminator(s) embedded in every ID.
    type Discriminator: Copy + fmt::Debug + PartialEq;

    /// Returns the timestamp portion of the ID (ms since the epoch).
    fn timestamp(&self) -> u64;

    /// Returns the maximum possible value for the timestamp field.
    fn max_timestamp() -> u64;

    /// Returns the discriminator portion of the ID.
    fn discriminator(&self) -> Self::Discriminator;

    /// Returns the sequence portion of the ID.
    fn sequence(&self) -> u64;

    /// Returns the maximum possible value for the sequence field.
    fn max_sequence() -> u64;

    /// Constructs a new ID from its components.
    ///
    /// Out-of-range discriminators are packed as `0`.
    fn from_components(timestamp: u64, discriminator: Self::Discriminator, sequence: u64)
    -> Self;

    /// Converts this type into its raw representation
    fn to_raw(&self) -> u64;

    /// Converts a raw value into this type
    fn from_raw(raw: u64) -> Self;

    /// Returns true if the current sequence value can be incremented.
    fn has_sequence_room(&self) -> bool {
        self.sequence() < Self::max_sequence()
    }

    /// Returns a new ID with the sequence incremented.
    fn increment_sequence(&self) -> Self {
        Self::from_components(self.timestamp(), self.discriminator(), self.sequence() + 1)
    }

    /// Returns a new ID for a newer timestamp with sequence reset to zero.
    fn rollover_to_timestamp(&self, ts: u64) -> Self {
        Self::from_components(ts, self.discriminator(), 0)
    }

    /// Returns the ID as a zero-padded 20-digit string, which sorts the same
    /// way the numbers do.
    fn to_padded_string(&self) -> String {
        format!("{:020}", self.to_raw())
    }
}
