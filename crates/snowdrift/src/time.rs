use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::epoch;

/// A trait for time sources that return milliseconds since the configured
/// epoch.
///
/// This abstraction allows you to plug in the real wall clock or a mocked time
/// source in tests.
///
/// # Example
///
/// ```
/// use snowdrift::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in milliseconds since the configured epoch.
    fn current_millis(&self) -> T;
}

/// The wall clock, measured from the process-wide epoch.
///
/// The epoch is re-read on every sample, so a call to [`set_epoch`] is seen by
/// all generators built on this clock from their next sample on. A wall clock
/// that reads earlier than the epoch samples as `0`.
///
/// [`set_epoch`]: crate::set_epoch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EpochClock;

impl TimeSource<u64> for EpochClock {
    fn current_millis(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO);
        now.saturating_sub(epoch()).as_millis() as u64
    }
}
