//! Timer-based coalescing of bursts of events.
//!
//! A [`Debounce`] holds at most one pending value. Scheduling a new value
//! cancels the previous one and restarts the quiet period; [`Debounce::poll`]
//! hands the value out once the quiet period has fully elapsed. The clock is
//! passed in by the caller (usually the [`Time`](crate::Time) state), which
//! keeps the behaviour deterministic under test.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use log::trace;

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    due: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Debounce<T> {
    quiet: TimeDelta,
    pending: Option<Pending<T>>,
}

impl<T> Debounce<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet: TimeDelta::from_std(quiet).unwrap_or(TimeDelta::MAX),
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet.to_std().unwrap_or(Duration::MAX)
    }

    /// Replaces any pending value and restarts the quiet period at `now`.
    pub fn schedule(&mut self, value: T, now: DateTime<Utc>) {
        let due = now
            .checked_add_signed(self.quiet)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        if self.pending.is_some() {
            trace!("Debounce rescheduled, due at {due}");
        }
        self.pending = Some(Pending { value, due });
    }

    /// Returns the pending value if its quiet period has elapsed by `now`.
    ///
    /// The value is handed out exactly once.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.due);
        if due {
            self.pending.take().map(|pending| pending.value)
        } else {
            None
        }
    }

    /// Drops the pending value. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending value fires, zero if already due.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|pending| (pending.due - now).to_std().unwrap_or(Duration::ZERO))
    }
}

impl<T> Drop for Debounce<T> {
    fn drop(&mut self) {
        if self.cancel() {
            trace!("Debounce dropped with a pending value; cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
    }

    fn ms(value: i64) -> TimeDelta {
        TimeDelta::milliseconds(value)
    }

    #[test]
    fn fires_once_after_quiet_period() {
        let mut debounce = Debounce::new(Duration::from_millis(500));
        debounce.schedule("abc", start());

        assert_eq!(debounce.poll(start() + ms(499)), None);
        assert_eq!(debounce.poll(start() + ms(500)), Some("abc"));
        assert_eq!(debounce.poll(start() + ms(2000)), None);
    }

    #[test]
    fn reschedule_cancels_previous_value() {
        let mut debounce = Debounce::new(Duration::from_millis(500));
        debounce.schedule("t", start());
        debounce.schedule("te", start() + ms(200));
        debounce.schedule("tes", start() + ms(400));

        // The first schedule would have been due at 500ms.
        assert_eq!(debounce.poll(start() + ms(600)), None);
        assert_eq!(debounce.poll(start() + ms(900)), Some("tes"));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn cancel_discards_pending_value() {
        let mut debounce = Debounce::new(Duration::from_millis(500));
        debounce.schedule(1, start());

        assert!(debounce.cancel());
        assert!(!debounce.cancel());
        assert_eq!(debounce.poll(start() + ms(1000)), None);
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let mut debounce = Debounce::new(Duration::from_millis(500));
        assert_eq!(debounce.remaining(start()), None);

        debounce.schedule((), start());

        assert_eq!(
            debounce.remaining(start() + ms(200)),
            Some(Duration::from_millis(300))
        );
        assert_eq!(debounce.remaining(start() + ms(800)), Some(Duration::ZERO));
    }

    #[test]
    fn quiet_period_round_trips() {
        let debounce = Debounce::<()>::new(Duration::from_millis(750));
        assert_eq!(debounce.quiet_period(), Duration::from_millis(750));
    }
}
