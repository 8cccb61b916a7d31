use core::time::Duration;
use portable_atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{Error, Result};

/// Default epoch: Wednesday, March 28, 2012 00:00:00 UTC
pub const DEFAULT_EPOCH: Duration = Duration::from_millis(1_332_892_800_000);

// Nanoseconds since the Unix epoch. One word, so readers never see a torn
// value.
static EPOCH_NANOS: AtomicU64 = AtomicU64::new(DEFAULT_EPOCH.as_nanos() as u64);

/// Returns the process-wide epoch, as a [`Duration`] since 1970-01-01 UTC.
///
/// Every clock read, generation, and parse call measures timestamps from this
/// instant. It starts out as [`DEFAULT_EPOCH`].
///
/// # Example
///
/// ```
/// use snowdrift::{DEFAULT_EPOCH, epoch};
///
/// assert_eq!(epoch(), DEFAULT_EPOCH);
/// ```
pub fn epoch() -> Duration {
    Duration::from_nanos(EPOCH_NANOS.load(Ordering::Acquire))
}

/// Returns the process-wide epoch in whole milliseconds since 1970-01-01 UTC.
pub fn epoch_millis() -> u64 {
    EPOCH_NANOS.load(Ordering::Acquire) / 1_000_000
}

/// Replaces the process-wide epoch.
///
/// The new epoch applies to every generator and parse call from the next
/// clock sample on. Generators never cache an epoch of their own, so changing
/// it while IDs are being minted shifts the timestamps of everything produced
/// afterwards, and decoding an older ID yields a timestamp relative to the new
/// epoch. Set it once at startup.
///
/// # Errors
///
/// - [`Error::EpochIsZero`] if `candidate` is [`Duration::ZERO`].
/// - [`Error::EpochInFuture`] if `candidate` is later than the current
///   wall-clock time.
///
/// On error the configured epoch is left unchanged.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use snowdrift::{Error, epoch, set_epoch};
///
/// // Friday, January 1, 2010 00:00:00 UTC
/// let twenty_ten = Duration::from_secs(1_262_304_000);
/// set_epoch(twenty_ten).unwrap();
/// assert_eq!(epoch(), twenty_ten);
///
/// assert_eq!(set_epoch(Duration::ZERO), Err(Error::EpochIsZero));
/// assert_eq!(epoch(), twenty_ten);
/// ```
pub fn set_epoch(candidate: Duration) -> Result<()> {
    if candidate.is_zero() {
        #[cfg(feature = "tracing")]
        tracing::warn!("rejected zero epoch");
        return Err(Error::EpochIsZero);
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO);
    if candidate > now {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            candidate_ms = candidate.as_millis() as u64,
            now_ms = now.as_millis() as u64,
            "rejected epoch in the future"
        );
        return Err(Error::EpochInFuture);
    }

    // `candidate <= now` keeps this well inside u64 nanoseconds.
    let nanos = u64::try_from(candidate.as_nanos()).map_err(|_| Error::EpochInFuture)?;
    EPOCH_NANOS.store(nanos, Ordering::Release);

    #[cfg(feature = "tracing")]
    tracing::debug!(epoch_ms = nanos / 1_000_000, "epoch updated");
    Ok(())
}

/// Replaces the process-wide epoch from a [`SystemTime`].
///
/// # Errors
///
/// Same as [`set_epoch`]. A time at or before the Unix epoch is rejected with
/// [`Error::EpochIsZero`].
pub fn set_epoch_from(candidate: SystemTime) -> Result<()> {
    let since_unix = candidate
        .duration_since(UNIX_EPOCH)
        .map_err(|_| Error::EpochIsZero)?;
    set_epoch(since_unix)
}
