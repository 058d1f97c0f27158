use std::time::{Duration, Instant};

/// Single-shot deadline for hiding the controls overlay.
///
/// At most one deadline is outstanding; arming again supersedes the previous
/// one, it never stacks. Eligibility is the controller's business and is
/// re-checked when the deadline fires, since play state, drag state or
/// fullscreen can all change during the wait.
pub struct AutoHide {
    delay: Duration,
    deadline: Option<Instant>,
}

impl AutoHide {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Schedule a hide `delay` from `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
