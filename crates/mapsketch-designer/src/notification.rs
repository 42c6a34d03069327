//! Transient error banner.

use chrono::{DateTime, Duration, Utc};

/// A shown error message and the moment it was raised.
#[derive(Debug, Clone, PartialEq)]
struct ShownError {
    message: String,
    raised_at: DateTime<Utc>,
}

/// Single error banner that dismisses itself after a delay.
///
/// Raising a new message replaces the one currently shown and restarts
/// the delay.
#[derive(Debug, Clone)]
pub struct ErrorBanner {
    dismiss_after: Duration,
    current: Option<ShownError>,
}

impl ErrorBanner {
    pub fn new(dismiss_after_ms: u64) -> Self {
        let ms = i64::try_from(dismiss_after_ms).unwrap_or(i64::MAX);
        Self {
            dismiss_after: Duration::milliseconds(ms),
            current: None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|e| e.message.as_str())
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }

    pub fn raise(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.current = Some(ShownError {
            message: message.into(),
            raised_at: now,
        });
    }

    /// Hides the banner. Returns true if something was shown.
    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Hides the banner if its delay has elapsed at `now`.
    ///
    /// Returns true if the banner was hidden by this call.
    pub fn expire(&mut self, now: DateTime<Utc>) -> bool {
        match &self.current {
            Some(shown) if now - shown.raised_at >= self.dismiss_after => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for ErrorBanner {
    fn default() -> Self {
        Self::new(3000)
    }
}
