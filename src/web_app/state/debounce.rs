// web_app/state/debounce.rs - Keystroke debouncing
//
// The page schedules one timer per keystroke. Each keystroke gets a ticket;
// when a timer fires it hands its ticket back and only the newest ticket is
// allowed to settle. Every older timer therefore saw a keystroke within its
// quiet period and stays silent.

use std::time::Duration;

/// Quiet period between the last keystroke and the search request
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(700);

#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    latest: u64,
    pending: Option<String>,
    settled: String,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            latest: 0,
            pending: None,
            settled: String::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Last value that was emitted
    pub fn settled(&self) -> &str {
        &self.settled
    }

    /// Record a keystroke and return the ticket its timer must present
    pub fn push(&mut self, value: impl Into<String>) -> u64 {
        self.latest += 1;
        self.pending = Some(value.into());
        self.latest
    }

    /// Called when the timer for `ticket` fires
    ///
    /// Emits the pending value only if no newer keystroke arrived and the
    /// value differs from what was last emitted.
    pub fn settle(&mut self, ticket: u64) -> Option<String> {
        if ticket != self.latest {
            return None;
        }
        let value = self.pending.take()?;
        if value == self.settled {
            return None;
        }
        self.settled = value.clone();
        Some(value)
    }
}
