use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Epoch origin: Wednesday, January 1, 2020 00:00:00 UTC.
///
/// All duration fields count seconds from this instant. With a 28-bit
/// duration field the encoding is valid for `2^28` seconds (about 8.5 years)
/// past the origin; beyond that the duration field wraps modulo `2^28`.
/// Every process that needs to decode another process's IDs must share this
/// constant.
pub const HOSTFLAKE_EPOCH: Duration = Duration::from_secs(1_577_836_800);

/// A trait for time sources that return elapsed time since a configured
/// epoch.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests.
///
/// The timestamp type `T` is generic (typically `u64`), and the unit is
/// **seconds** relative to the configured origin.
///
/// # Example
///
/// ```
/// use hostflake::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_seconds(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_seconds(), 1234);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in seconds since the configured epoch.
    fn current_seconds(&self) -> T;
}

/// A wall-clock time source that reads `SystemTime::now()` on every call.
///
/// Generation works at second resolution, so a syscall per call is the
/// intended behavior; there is no cached tick. Clock adjustments (NTP steps)
/// are observable, which matches the contract that IDs are only *roughly*
/// monotonic over time.
#[derive(Clone, Debug)]
pub struct WallClock {
    epoch: Duration,
}

impl Default for WallClock {
    /// Constructs a wall clock aligned to the default [`HOSTFLAKE_EPOCH`].
    fn default() -> Self {
        Self::with_epoch(HOSTFLAKE_EPOCH)
    }
}

impl WallClock {
    /// Constructs a wall clock using a custom epoch as the origin (t = 0),
    /// specified as a [`Duration`] since 1970-01-01 UTC.
    pub const fn with_epoch(epoch: Duration) -> Self {
        Self { epoch }
    }
}

impl TimeSource<u64> for WallClock {
    /// Returns whole seconds elapsed since the configured epoch.
    ///
    /// Saturates to zero if the system clock reads earlier than the epoch
    /// origin; a clock that far behind would otherwise underflow, and zero
    /// keeps generation infallible.
    fn current_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .and_then(|now| now.checked_sub(self.epoch))
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()
    }
}

/// Converts a decoded duration field back into the wall-clock instant
/// (second resolution) at which the ID was issued.
///
/// Only meaningful within the epoch's valid (non-wrapped) range; a wrapped
/// duration maps to the corresponding instant in the first window.
pub fn to_timestamp(duration: u64) -> SystemTime {
    UNIX_EPOCH + HOSTFLAKE_EPOCH + Duration::from_secs(duration)
}

/// Converts a wall-clock instant into a duration field value.
///
/// This is the inverse of [`to_timestamp`], used at generation time only.
/// Instants before the epoch origin map to zero.
pub fn from_timestamp(t: SystemTime) -> u64 {
    t.duration_since(UNIX_EPOCH + HOSTFLAKE_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_round_trip() {
        let now = SystemTime::now();
        let duration = from_timestamp(now);
        let recovered = to_timestamp(duration);

        // Equal after truncation to the second.
        let delta = now
            .duration_since(recovered)
            .expect("recovered timestamp should not be in the future");
        assert!(delta < Duration::from_secs(1));
    }

    #[test]
    fn test_zero_duration_is_epoch_origin() {
        assert_eq!(to_timestamp(0), UNIX_EPOCH + HOSTFLAKE_EPOCH);
    }

    #[test]
    fn test_wall_clock_matches_system_time() {
        let clock = WallClock::default();
        let expected = from_timestamp(SystemTime::now());
        let got = clock.current_seconds();
        // Allow one second of skew in case the test straddles a boundary.
        assert!(got.abs_diff(expected) <= 1);
    }

    #[test]
    fn test_wall_clock_saturates_on_future_epoch() {
        // An epoch far in the future reads as zero, not an underflow.
        let clock = WallClock::with_epoch(Duration::from_secs(u32::MAX as u64 * 1000));
        assert_eq!(clock.current_seconds(), 0);
    }
}
