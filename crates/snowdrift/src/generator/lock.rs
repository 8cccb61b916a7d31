use core::cmp::Ordering;

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::mutex::{Mutex, lock};
use crate::{
    DualFieldId, EpochClock, IdGenStatus, SingleFieldId, SnowflakeGenerator, SnowflakeId,
    TimeSource,
};

/// Generator for [`SingleFieldId`]s: one 10-bit discriminator.
pub type SingleFieldGenerator<T = EpochClock> = LockSnowflakeGenerator<SingleFieldId, T>;

/// Generator for [`DualFieldId`]s: two 5-bit discriminators, passed as
/// `(discriminator1, discriminator2)`.
pub type DualFieldGenerator<T = EpochClock> = LockSnowflakeGenerator<DualFieldId, T>;

/// A lock-based Snowflake ID generator suitable for multi-threaded
/// environments.
///
/// The last emitted ID is kept behind a [`Mutex`]; every generation step reads
/// the clock, advances the state, and packs the ID while holding it, so
/// concurrent callers on one instance are fully serialized. Separate instances
/// share nothing.
///
/// ## Clock behavior
/// - A clock reading later than the last emitted millisecond resets the
///   sequence to `0`.
/// - A reading equal to the last emitted millisecond increments the sequence.
///   Once all 4096 sequence values are spent, [`Self::poll_id`] reports
///   [`IdGenStatus::Pending`] and [`Self::generate`] spins until the clock
///   passes it.
/// - A reading earlier than the last emitted millisecond keeps counting in
///   that millisecond, and moves on to the next one when its sequence is
///   spent, so timestamps never go backward and generation never waits out a
///   rollback. During a rollback the emitted timestamp runs ahead of the wall
///   clock.
///
/// [`Mutex`]: std::sync::Mutex
pub struct LockSnowflakeGenerator<ID, T = EpochClock>
where
    ID: SnowflakeId,
    T: TimeSource<u64>,
{
    discriminator: ID::Discriminator,
    #[cfg(feature = "cache-padded")]
    state: crossbeam_utils::CachePadded<Mutex<Option<ID>>>,
    #[cfg(not(feature = "cache-padded"))]
    state: Mutex<Option<ID>>,
    time: T,
}

impl<ID> LockSnowflakeGenerator<ID, EpochClock>
where
    ID: SnowflakeId,
{
    /// Creates a generator on the wall clock, measured from the process-wide
    /// epoch.
    ///
    /// # Example
    /// ```
    /// use snowdrift::{DualFieldGenerator, SingleFieldGenerator};
    ///
    /// let machine = SingleFieldGenerator::new(1);
    /// let process = DualFieldGenerator::new((1, 24));
    ///
    /// assert!(machine.next_id() < machine.next_id());
    /// assert_ne!(process.next_id(), 0);
    /// ```
    pub fn new(discriminator: ID::Discriminator) -> Self {
        Self::with_clock(discriminator, EpochClock)
    }
}

impl<ID, T> LockSnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource<u64>,
{
    /// Creates a new generator bound to `discriminator`, sampling `time`.
    ///
    /// The first ID is stamped with whatever the clock reads on that call,
    /// with sequence `0`.
    pub fn with_clock(discriminator: ID::Discriminator, time: T) -> Self {
        Self::from_state(discriminator, None, time)
    }

    /// Creates a new generator preloaded with an explicit last-emitted state.
    ///
    /// This constructor is primarily useful for tests or for controlling the
    /// starting point of the generator manually. The next ID is generated as
    /// if `(timestamp, sequence)` had just been emitted.
    pub fn from_components(
        timestamp: u64,
        discriminator: ID::Discriminator,
        sequence: u64,
        time: T,
    ) -> Self {
        let id = ID::from_components(timestamp, discriminator, sequence);
        Self::from_state(discriminator, Some(id), time)
    }

    fn from_state(discriminator: ID::Discriminator, last: Option<ID>, time: T) -> Self {
        Self {
            discriminator,
            #[cfg(feature = "cache-padded")]
            state: crossbeam_utils::CachePadded::new(Mutex::new(last)),
            #[cfg(not(feature = "cache-padded"))]
            state: Mutex::new(last),
            time,
        }
    }

    /// The discriminator(s) this generator was built with, as supplied.
    pub fn discriminator(&self) -> ID::Discriminator {
        self.discriminator
    }

    /// Attempts to generate the next available ID.
    ///
    /// Returns a new, time-ordered, unique ID if generation succeeds. If every
    /// sequence value of the last emitted millisecond is spent and the clock
    /// has not passed it, returns [`IdGenStatus::Pending`] instead.
    ///
    /// # Example
    /// ```
    /// use snowdrift::{IdGenStatus, SingleFieldGenerator, SingleFieldId};
    ///
    /// let generator = SingleFieldGenerator::new(0);
    ///
    /// let id: SingleFieldId = loop {
    ///     match generator.poll_id() {
    ///         IdGenStatus::Ready { id } => break id,
    ///         IdGenStatus::Pending { .. } => std::thread::yield_now(),
    ///     }
    /// };
    /// assert_eq!(id.discriminator(), 0);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn poll_id(&self) -> IdGenStatus<ID> {
        let mut state = lock(&self.state);
        let now = self.time.current_millis();

        let Some(last) = *state else {
            let id = ID::from_components(now, self.discriminator, 0);
            *state = Some(id);
            return IdGenStatus::Ready { id };
        };

        let current_ts = last.timestamp();
        let id = match now.cmp(&current_ts) {
            Ordering::Greater => last.rollover_to_timestamp(now),
            Ordering::Equal => {
                if !last.has_sequence_room() {
                    return Self::cold_sequence_exhausted(current_ts);
                }
                last.increment_sequence()
            }
            Ordering::Less => {
                if last.has_sequence_room() {
                    last.increment_sequence()
                } else {
                    Self::cold_clock_behind(last, current_ts)
                }
            }
        };
        *state = Some(id);
        IdGenStatus::Ready { id }
    }

    /// Generates the next ID, spinning until the clock advances when the
    /// current millisecond is exhausted.
    ///
    /// The wait is bounded by roughly one millisecond. It cannot be
    /// cancelled.
    pub fn generate(&self) -> ID {
        loop {
            match self.poll_id() {
                IdGenStatus::Ready { id } => break id,
                IdGenStatus::Pending { .. } => core::hint::spin_loop(),
            }
        }
    }

    /// Generates the next ID as a raw `u64`.
    pub fn next_id(&self) -> u64 {
        self.generate().to_raw()
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_behind(last: ID, current_ts: u64) -> ID {
        #[cfg(feature = "tracing")]
        tracing::debug!(current_ts, "clock behind last id, advancing to next millisecond");
        last.rollover_to_timestamp(current_ts + 1)
    }

    #[cold]
    #[inline(never)]
    fn cold_sequence_exhausted(current_ts: u64) -> IdGenStatus<ID> {
        #[cfg(feature = "tracing")]
        tracing::trace!(current_ts, "sequence exhausted, waiting for next millisecond");
        IdGenStatus::Pending {
            yield_until: current_ts + 1,
        }
    }
}

impl<ID, T> SnowflakeGenerator<ID, T> for LockSnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource<u64>,
{
    fn with_clock(discriminator: ID::Discriminator, time: T) -> Self {
        Self::with_clock(discriminator, time)
    }

    fn poll_id(&self) -> IdGenStatus<ID> {
        self.poll_id()
    }

    fn generate(&self) -> ID {
        self.generate()
    }

    fn next_id(&self) -> u64 {
        self.next_id()
    }
}
