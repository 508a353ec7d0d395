use std::time::{Duration, Instant};

use tracing::trace;

/// Single-shot, re-armable deadline for hiding the controls overlay.
///
/// At most one deadline is pending. Arming replaces the previous deadline
/// instead of adding another one, and a deadline that fired or was cancelled
/// never fires again.
#[derive(Debug, Clone)]
pub struct AutoHideTimer {
    delay: Duration,
    pending: Option<Instant>,
}

impl AutoHideTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms a fresh deadline at `now + delay`, superseding any pending one.
    pub fn arm(&mut self, now: Instant) {
        let superseded = self.pending.replace(now + self.delay).is_some();
        trace!(superseded, "controls auto-hide armed");
    }

    /// Drops the pending deadline. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.pending.take().is_some();
        if was_armed {
            trace!("controls auto-hide cancelled");
        }
        was_armed
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending
    }

    /// Consumes the pending deadline if it has passed at `now`.
    pub fn take_if_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if now >= deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(3000);

    #[test]
    fn fires_once_after_delay() {
        let start = Instant::now();
        let mut timer = AutoHideTimer::new(DELAY);
        timer.arm(start);

        assert!(!timer.take_if_due(start + Duration::from_millis(2999)));
        assert!(timer.take_if_due(start + DELAY));
        assert!(!timer.take_if_due(start + DELAY * 2));
        assert!(!timer.is_armed());
    }

    #[test]
    fn rearming_supersedes_previous_deadline() {
        let start = Instant::now();
        let mut timer = AutoHideTimer::new(DELAY);
        timer.arm(start);
        timer.arm(start + Duration::from_secs(1));

        assert_eq!(timer.deadline(), Some(start + Duration::from_secs(4)));
        assert!(!timer.take_if_due(start + DELAY));
        assert!(timer.take_if_due(start + Duration::from_secs(4)));
    }

    #[test]
    fn cancel_reports_whether_armed() {
        let mut timer = AutoHideTimer::new(DELAY);
        assert!(!timer.cancel());
        timer.arm(Instant::now());
        assert!(timer.cancel());
        assert_eq!(timer.deadline(), None);
    }
}
