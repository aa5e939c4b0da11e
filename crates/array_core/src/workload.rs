//! Blocking workload stage that stands in for heavy computation.

use std::time::Duration;

/// Default delay applied after allocation.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

/// Work performed between filling an array and returning it.
///
/// The delay is unconditional and independent of the array size.
///
/// # Examples
///
/// ```rust
/// use array_core::workload::Workload;
/// use std::time::Duration;
///
/// assert_eq!(Workload::from_millis(0), Workload::Idle);
/// assert_eq!(Workload::from_millis(250).duration(), Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    /// Return immediately.
    Idle,
    /// Block the calling thread for the given duration.
    Sleep(Duration),
}

impl Default for Workload {
    fn default() -> Self {
        Workload::Sleep(DEFAULT_DELAY)
    }
}

impl Workload {
    /// Builds a workload from a millisecond count; zero maps to [`Workload::Idle`].
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            Workload::Idle
        } else {
            Workload::Sleep(Duration::from_millis(ms))
        }
    }

    /// Time this workload blocks for.
    pub fn duration(&self) -> Duration {
        match self {
            Workload::Idle => Duration::ZERO,
            Workload::Sleep(duration) => *duration,
        }
    }

    /// Blocks the calling thread for [`duration`](Self::duration).
    pub fn run(&self) {
        match self {
            Workload::Idle => {}
            Workload::Sleep(duration) => std::thread::sleep(*duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_default_is_five_seconds() {
        assert_eq!(Workload::default(), Workload::Sleep(Duration::from_secs(5)));
        assert_eq!(Workload::default().duration(), DEFAULT_DELAY);
    }

    #[test]
    fn test_from_millis() {
        assert_eq!(Workload::from_millis(0), Workload::Idle);
        assert_eq!(
            Workload::from_millis(5000),
            Workload::Sleep(Duration::from_secs(5))
        );
    }

    #[test]
    fn test_idle_duration() {
        assert_eq!(Workload::Idle.duration(), Duration::ZERO);
    }

    #[test]
    fn test_sleep_blocks_at_least_duration() {
        let workload = Workload::Sleep(Duration::from_millis(30));
        let start = Instant::now();
        workload.run();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
