//! Pure packing and unpacking of the four logical fields of an ID.
//!
//! The generators encode through these functions and [`parse`]/[`parse2`]
//! decode through them, so both directions share one bit layout.
//!
//! Discriminators larger than their field are encoded as `0` in that field.
//! They are neither truncated nor rejected.
//!
//! [`parse`]: crate::parse
//! [`parse2`]: crate::parse2

use crate::epoch_millis;

/// Width of the sequence field.
pub const SEQUENCE_BITS: u32 = 12;

/// Width of the discriminator area (one 10-bit field, or two 5-bit fields).
pub const DISCRIMINATOR_BITS: u32 = 10;

/// Width of each field in the two-discriminator layout.
pub const HALF_DISCRIMINATOR_BITS: u32 = DISCRIMINATOR_BITS / 2;

/// Position of the timestamp field (bit 22).
pub const TIMESTAMP_SHIFT: u32 = SEQUENCE_BITS + DISCRIMINATOR_BITS;

/// Position of the single discriminator and of discriminator #1 (bit 12).
pub const DISCRIMINATOR_SHIFT: u32 = SEQUENCE_BITS;

/// Position of discriminator #2 (bit 17).
pub const DISCRIMINATOR2_SHIFT: u32 = SEQUENCE_BITS + HALF_DISCRIMINATOR_BITS;

/// Everything above the discriminator area. Timestamp bits past bit 63 are
/// shifted out.
pub const TIMESTAMP_MASK: u64 = u64::MAX >> TIMESTAMP_SHIFT;

/// Largest single discriminator (1023).
pub const MAX_DISCRIMINATOR: u64 = (1 << DISCRIMINATOR_BITS) - 1;

/// Largest value of each half discriminator (31).
pub const MAX_HALF_DISCRIMINATOR: u64 = (1 << HALF_DISCRIMINATOR_BITS) - 1;

/// Largest sequence value (4095).
pub const MAX_SEQUENCE: u64 = (1 << SEQUENCE_BITS) - 1;

const fn field(value: u64, max: u64, shift: u32) -> u64 {
    if value > max { 0 } else { value << shift }
}

/// Packs a one-discriminator ID.
///
/// `timestamp` is milliseconds since the configured epoch.
///
/// ```
/// use snowdrift::codec::{decode_discriminator, encode_single};
///
/// assert_eq!(decode_discriminator(encode_single(7, 1023, 0)), 1023);
/// assert_eq!(decode_discriminator(encode_single(7, 1024, 0)), 0);
/// ```
pub const fn encode_single(timestamp: u64, discriminator: u64, sequence: u64) -> u64 {
    (timestamp << TIMESTAMP_SHIFT)
        | field(discriminator, MAX_DISCRIMINATOR, DISCRIMINATOR_SHIFT)
        | (sequence & MAX_SEQUENCE)
}

/// Packs a two-discriminator ID. Each discriminator greater than 31 encodes
/// as `0`.
pub const fn encode_dual(
    timestamp: u64,
    discriminator1: u64,
    discriminator2: u64,
    sequence: u64,
) -> u64 {
    (timestamp << TIMESTAMP_SHIFT)
        | field(discriminator2, MAX_HALF_DISCRIMINATOR, DISCRIMINATOR2_SHIFT)
        | field(discriminator1, MAX_HALF_DISCRIMINATOR, DISCRIMINATOR_SHIFT)
        | (sequence & MAX_SEQUENCE)
}

/// Milliseconds between the configured epoch and the ID's timestamp.
pub const fn decode_elapsed(id: u64) -> u64 {
    id >> TIMESTAMP_SHIFT
}

/// Absolute timestamp in milliseconds since the Unix epoch, given the epoch
/// (also in milliseconds since the Unix epoch) the ID is measured from.
///
/// Saturates at `u64::MAX` instead of overflowing.
pub const fn decode_timestamp_at(id: u64, epoch_millis: u64) -> u64 {
    decode_elapsed(id).saturating_add(epoch_millis)
}

/// Absolute timestamp in milliseconds since the Unix epoch, measured from the
/// epoch configured *now*.
pub fn decode_timestamp(id: u64) -> u64 {
    decode_timestamp_at(id, epoch_millis())
}

pub const fn decode_sequence(id: u64) -> u64 {
    id & MAX_SEQUENCE
}

pub const fn decode_discriminator(id: u64) -> u64 {
    (id >> DISCRIMINATOR_SHIFT) & MAX_DISCRIMINATOR
}

pub const fn decode_discriminator1(id: u64) -> u64 {
    (id >> DISCRIMINATOR_SHIFT) & MAX_HALF_DISCRIMINATOR
}

pub const fn decode_discriminator2(id: u64) -> u64 {
    (id >> DISCRIMINATOR2_SHIFT) & MAX_HALF_DISCRIMINATOR
}
