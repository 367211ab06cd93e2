use chrono::{DateTime, Duration, Utc};

/// Source of the start and finish stamps recorded on a `QuizSession`.
///
/// `System` reads the wall clock. `Fixed` returns a pinned instant that only
/// moves through `advance`, which keeps elapsed-time labels reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }

    /// Move a pinned clock forward, e.g. to simulate time spent on a
    /// question. The system clock ignores this.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(at) = self {
            *at += delta;
        }
    }
}

/// Unix seconds of the pinned instant used by quiz timing tests.
pub const PINNED_QUIZ_START: i64 = 1_700_000_000;

/// The pinned quiz start as a timestamp.
///
/// # Panics
///
/// Panics if `PINNED_QUIZ_START` is outside chrono's range.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(PINNED_QUIZ_START, 0)
        .expect("pinned quiz start is a valid timestamp")
}

/// A `Clock::Fixed` at the pinned quiz start.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

/// Formats an elapsed duration as `m:ss`; negative spans render as `0:00`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}
