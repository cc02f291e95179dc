use std::time::{Duration, Instant};

/// Default suppression window after a programmatic scroll.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardState {
    /// No sync in flight; either handler may run.
    Idle,
    /// A sync is currently issuing its scroll.
    Syncing,
    /// A scroll was just issued; opposite-direction events until `until` are
    /// echoes of our own scroll, not user actions.
    Cooldown { until: Instant },
}

/// Re-entrancy guard serializing the two sync directions.
///
/// A mutex substitute for a single-threaded setting: its sole purpose is
/// preventing a programmatic scroll on one side from being misread as a user
/// action and bouncing back to the other side, which would oscillate
/// indefinitely. Callers pass the current `Instant` so tests never sleep.
#[derive(Debug)]
pub struct SyncGuard {
    state: GuardState,
    cooldown: Duration,
}

impl SyncGuard {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            state: GuardState::Idle,
            cooldown,
        }
    }

    /// Attempts to enter the syncing state. Returns `false` while a sync is
    /// in flight or the cooldown window is still open.
    pub fn try_begin(&mut self, now: Instant) -> bool {
        if self.is_engaged(now) {
            return false;
        }
        self.state = GuardState::Syncing;
        true
    }

    /// Ends a sync that issued a scroll, opening the cooldown window.
    pub fn finish(&mut self, now: Instant) {
        debug_assert_eq!(self.state, GuardState::Syncing);
        self.state = GuardState::Cooldown {
            until: now + self.cooldown,
        };
    }

    /// Ends a sync that did not issue a scroll. No echo is coming, so no
    /// cooldown is needed.
    pub fn abort(&mut self) {
        if self.state == GuardState::Syncing {
            self.state = GuardState::Idle;
        }
    }

    /// Whether the guard currently suppresses sync handlers.
    pub fn is_engaged(&self, now: Instant) -> bool {
        match self.state {
            GuardState::Idle => false,
            GuardState::Syncing => true,
            GuardState::Cooldown { until } => now < until,
        }
    }
}

impl Default for SyncGuard {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}
