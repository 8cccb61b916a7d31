use crate::SnowflakeId;

/// Represents the result of one non-blocking generation step.
///
/// - [`IdGenStatus::Ready`] indicates a new ID was successfully generated.
/// - [`IdGenStatus::Pending`] means every sequence value of the current
///   millisecond is spent, and the generator cannot produce a new ID until
///   the clock reaches `yield_until`.
///
/// # Example
///
/// ```
/// use snowdrift::{IdGenStatus, SingleFieldGenerator, SingleFieldId, SnowflakeId, TimeSource};
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1
///     }
/// }
///
/// let generator = SingleFieldGenerator::<_>::from_components(1, 1, SingleFieldId::max_sequence(), FixedTime);
/// match generator.poll_id() {
///     IdGenStatus::Ready { id } => println!("ID: {}", id.timestamp()),
///     IdGenStatus::Pending { yield_until } => println!("Back off until: {yield_until}"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdGenStatus<T: SnowflakeId> {
    /// A unique ID was generated and is ready to use.
    Ready {
        /// The generated Snowflake ID.
        id: T,
    },
    /// No ID could be generated because the sequence has been exhausted for the
    /// current millisecond.
    Pending {
        /// The first millisecond (since the epoch) at which generation may
        /// resume.
        yield_until: u64,
    },
}
