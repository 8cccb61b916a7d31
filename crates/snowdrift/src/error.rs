/// A result type defaulting to this crate's [`Error`].
///
/// Only epoch configuration is fallible. Generation and parsing are total.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `snowdrift` can emit.
///
/// Both are raised by [`set_epoch`] and leave the configured epoch untouched.
///
/// [`set_epoch`]: crate::set_epoch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The candidate epoch is the zero instant (the Unix epoch itself).
    #[error("epoch is zero")]
    EpochIsZero,

    /// The candidate epoch is later than the current wall-clock time.
    #[error("epoch is in the future")]
    EpochInFuture,
}
