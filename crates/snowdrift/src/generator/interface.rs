use crate::{IdGenStatus, SnowflakeId, TimeSource};

/// A minimal interface for generating Snowflake IDs.
pub trait SnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource<u64>,
{
    /// Creates a new generator bound to `discriminator`, sampling `time`.
    fn with_clock(discriminator: ID::Discriminator, time: T) -> Self;

    /// Performs one generation step without blocking.
    fn poll_id(&self) -> IdGenStatus<ID>;

    /// Generates the next ID, spinning until the clock advances if the
    /// current millisecond is exhausted.
    fn generate(&self) -> ID;

    /// Generates the next ID as a raw `u64`.
    fn next_id(&self) -> u64;
}
