//! Search input debouncing with an explicit clock.
//!
//! Keystrokes schedule a pending term with a deadline; a newer keystroke replaces
//! (cancels) any older pending term. Time is passed in by the caller, so the
//! debouncer never sleeps and is deterministic under test.

use std::time::{Duration, Instant};

/// Quiescence period before typed text becomes the active search term.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSearch {
    term: String,
    deadline: Instant,
}

/// At most one pending search term, released once its deadline passes.
///
/// # Examples
///
/// ```
/// use podshelf::catalog::SearchDebouncer;
/// use std::time::{Duration, Instant};
///
/// let mut debouncer = SearchDebouncer::new(Duration::from_millis(300));
/// let t0 = Instant::now();
///
/// debouncer.schedule("ru", t0);
/// debouncer.schedule("rus", t0 + Duration::from_millis(100));
///
/// assert_eq!(debouncer.poll(t0 + Duration::from_millis(350)), None);
/// assert_eq!(debouncer.poll(t0 + Duration::from_millis(400)), Some("rus".to_string()));
/// assert!(!debouncer.is_pending());
/// ```
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<PendingSearch>,
}

impl SearchDebouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `term`, cancelling whatever was pending.
    pub fn schedule(&mut self, term: impl Into<String>, now: Instant) {
        let term = term.into();
        if let Some(previous) = &self.pending {
            tracing::trace!(cancelled = %previous.term, "pending search superseded");
        }
        self.pending = Some(PendingSearch {
            term,
            deadline: now + self.delay,
        });
    }

    /// Releases the pending term if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            self.pending.take().map(|p| p.term)
        } else {
            None
        }
    }

    /// Drops the pending term without releasing it.
    pub fn cancel(&mut self) {
        if let Some(previous) = self.pending.take() {
            tracing::trace!(cancelled = %previous.term, "pending search cancelled");
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}
