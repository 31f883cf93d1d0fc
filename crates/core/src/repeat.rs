//! Key repeat module - per-key auto-repeat timers
//!
//! Each logical key keeps its own countdown. A fresh press fires once on the
//! next update and counts as having happened at the start of that update, so
//! the update's own `dt` already runs down the `initial_delay`. Repeatable
//! keys then fire every `repeat_interval` while held. Overshoot past zero is carried into the next
//! countdown, so the number of repeats depends only on accumulated time and
//! not on how that time was sliced into ticks.

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::types::{GameAction, DEFAULT_REPEAT_DELAY_MS, DEFAULT_REPEAT_INTERVAL_MS};

/// Actions fired by one update, in dispatch order
pub type FiredActions = ArrayVec<GameAction, 32>;

/// Auto-repeat timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatTiming {
    /// Hold time between the first fire and the first repeat
    pub initial_delay: Duration,
    /// Time between repeats after that
    pub repeat_interval: Duration,
}

impl Default for RepeatTiming {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(DEFAULT_REPEAT_DELAY_MS as u64),
            repeat_interval: Duration::from_millis(DEFAULT_REPEAT_INTERVAL_MS as u64),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct KeyState {
    held: bool,
    /// Pressed since the last update; fires once even if already released
    pending: bool,
    /// Countdown running (repeatable key, still held after its first fire)
    armed: bool,
    remaining: Duration,
}

#[derive(Debug, Clone)]
pub struct KeyRepeat {
    keys: [KeyState; GameAction::COUNT],
    timing: RepeatTiming,
}

impl KeyRepeat {
    pub fn new(timing: RepeatTiming) -> Self {
        Self {
            keys: [KeyState::default(); GameAction::COUNT],
            timing,
        }
    }

    pub fn timing(&self) -> RepeatTiming {
        self.timing
    }

    /// Record a key-down. A key that is already held is ignored, which
    /// swallows OS auto-repeat.
    pub fn press(&mut self, action: GameAction) {
        let key = &mut self.keys[action.index()];
        if !key.held {
            key.held = true;
            key.pending = true;
            key.armed = false;
        }
    }

    /// Record a key-up
    pub fn release(&mut self, action: GameAction) {
        let key = &mut self.keys[action.index()];
        key.held = false;
        key.armed = false;
    }

    pub fn is_held(&self, action: GameAction) -> bool {
        self.keys[action.index()].held
    }

    /// Advance every countdown by `dt` and collect the actions that fire.
    ///
    /// Keys are visited in `GameAction::ALL` order. A key can fire several
    /// times in one update when `dt` spans several repeat intervals.
    pub fn update(&mut self, dt: Duration) -> FiredActions {
        let mut fired = FiredActions::new();

        for action in GameAction::ALL {
            let key = &mut self.keys[action.index()];

            if key.pending {
                key.pending = false;
                let _ = fired.try_push(action);
                key.armed = key.held && action.is_repeatable();
                key.remaining = self.timing.initial_delay;
            }

            if !key.armed {
                continue;
            }

            let mut elapsed = dt;
            while elapsed >= key.remaining {
                elapsed -= key.remaining;
                key.remaining = self.timing.repeat_interval;
                if fired.try_push(action).is_err() {
                    elapsed = Duration::ZERO;
                    break;
                }
            }
            key.remaining -= elapsed;
        }

        fired
    }

    /// Forget every key
    pub fn reset(&mut self) {
        self.keys = [KeyState::default(); GameAction::COUNT];
    }
}

impl Default for KeyRepeat {
    fn default() -> Self {
        Self::new(RepeatTiming::default())
    }
}
