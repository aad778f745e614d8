//! Cancellable one-shot press timer.
//!
//! Armed on press-down, polled from the host event loop, and explicitly
//! cancelled on press-up. Press-up classifies the completed press by the
//! fired flag alone (the timer's signal, never a measured duration), so
//! the classification the remote link sees is exactly the one the timer
//! produced. Cancelling on press-up also means a timer can never fire into
//! a button whose press already completed.
//!
//! Time is caller-supplied monotonic milliseconds; the timer never reads a
//! clock itself.

/// One-shot deadline with a latched fired flag.
#[derive(Debug, Clone, Default)]
pub struct PressTimer {
    deadline_ms: Option<u64>,
    fired: bool,
}

impl PressTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer to fire `after_ms` from `now_ms`. Re-arming resets
    /// any previous deadline and clears the fired flag.
    pub fn arm(&mut self, now_ms: u64, after_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(after_ms));
        self.fired = false;
    }

    /// Advance the timer. Once `now_ms` reaches the deadline the fired
    /// flag latches and the timer disarms (one-shot).
    pub fn poll(&mut self, now_ms: u64) {
        if let Some(deadline) = self.deadline_ms {
            if now_ms >= deadline {
                self.fired = true;
                self.deadline_ms = None;
            }
        }
    }

    /// Disarm and clear the fired flag.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
        self.fired = false;
    }

    /// Whether the deadline has passed since the last arm.
    pub fn fired(&self) -> bool {
        self.fired
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }
}
