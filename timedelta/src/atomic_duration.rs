use core::sync::atomic::{AtomicI64, Ordering};

use crate::Duration;

/// An atomic duration measured in microseconds.
///
/// An `AtomicDuration` holds a [`Duration`] in a signed 64bit atomic, which
/// allows a duration to be shared and updated between threads without a lock.
/// The infinities are stored as-is, and the arithmetic operations follow the
/// same saturating rules as the operators on `Duration`.
#[repr(transparent)]
#[derive(Default, Debug)]
pub struct AtomicDuration {
    us: AtomicI64,
}

impl AtomicDuration {
    /// Create a new atomic duration.
    pub const fn new(value: Duration) -> Self {
        Self {
            us: AtomicI64::new(value.us),
        }
    }

    /// Loads the value of the duration.
    ///
    /// See: [`core::sync::atomic::AtomicI64::load`] for a description of the
    /// memory orderings.
    ///
    /// # Panics
    /// Panics if `ordering` is `Release` or `AcqRel`.
    pub fn load(&self, ordering: Ordering) -> Duration {
        Duration {
            us: self.us.load(ordering),
        }
    }

    /// Stores a new value for the duration.
    ///
    /// See: [`core::sync::atomic::AtomicI64::store`] for a description of the
    /// memory orderings.
    ///
    /// # Panics
    /// Panics if `ordering` is `Acquire` or `AcqRel`.
    pub fn store(&self, value: Duration, ordering: Ordering) {
        self.us.store(value.us, ordering)
    }

    /// Replaces the value of the duration and returns the previous value.
    pub fn swap(&self, value: Duration, ordering: Ordering) -> Duration {
        Duration {
            us: self.us.swap(value.us, ordering),
        }
    }

    /// Stores a new value for the duration if the current duration is the same
    /// as the `current` duration.
    ///
    /// See: [`core::sync::atomic::AtomicI64::compare_exchange`] for a
    /// description of the memory orderings.
    pub fn compare_exchange(
        &self,
        current: Duration,
        new: Duration,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Duration, Duration> {
        self.us
            .compare_exchange(current.us, new.us, success, failure)
            .map(|us| Duration { us })
            .map_err(|us| Duration { us })
    }

    /// Stores a new value for the duration if the current duration is the same
    /// as the `current` duration.
    ///
    /// Unlike `AtomicDuration::compare_exchange`, this function is allowed to
    /// spuriously fail. This allows for more efficient code on some platforms.
    pub fn compare_exchange_weak(
        &self,
        current: Duration,
        new: Duration,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Duration, Duration> {
        self.us
            .compare_exchange_weak(current.us, new.us, success, failure)
            .map(|us| Duration { us })
            .map_err(|us| Duration { us })
    }

    /// Adds to the current duration, returning the previous duration.
    ///
    /// Unlike the integer atomics this saturates rather than wrapping, with
    /// the same handling of infinities as `Duration + Duration`.
    ///
    /// The `ordering` applies to the successful update. The loads which
    /// precede it use `Relaxed`.
    pub fn fetch_add(&self, value: Duration, ordering: Ordering) -> Duration {
        self.fetch_update(ordering, |current| current + value)
    }

    /// Subtracts from the current duration, returning the previous duration.
    ///
    /// Saturates with the same handling of infinities as
    /// `Duration - Duration`.
    pub fn fetch_sub(&self, value: Duration, ordering: Ordering) -> Duration {
        self.fetch_update(ordering, |current| current - value)
    }

    /// Maximum with the current duration.
    ///
    /// Finds the maximum of the current duration and the argument `value`, and
    /// sets the new duration to the result.
    ///
    /// Returns the previous duration.
    pub fn fetch_max(&self, value: Duration, ordering: Ordering) -> Duration {
        Duration {
            us: self.us.fetch_max(value.us, ordering),
        }
    }

    /// Minimum with the current duration.
    ///
    /// Finds the minimum of the current duration and the argument `value`, and
    /// sets the new duration to the result.
    ///
    /// Returns the previous duration.
    pub fn fetch_min(&self, value: Duration, ordering: Ordering) -> Duration {
        Duration {
            us: self.us.fetch_min(value.us, ordering),
        }
    }

    fn fetch_update<F: Fn(Duration) -> Duration>(&self, ordering: Ordering, f: F) -> Duration {
        let mut current = self.us.load(Ordering::Relaxed);

        loop {
            let new = f(Duration { us: current });

            match self
                .us
                .compare_exchange_weak(current, new.us, ordering, Ordering::Relaxed)
            {
                Ok(previous) => return Duration { us: previous },
                Err(actual) => current = actual,
            }
        }
    }
}

impl From<Duration> for AtomicDuration {
    fn from(other: Duration) -> Self {
        Self::new(other)
    }
}
