//! Key-down / key-up edge tracking for terminal input.
//!
//! Terminals with keyboard enhancement report press, repeat and release
//! events. Plain terminals only report presses, repeated by the OS while a
//! key is held. The tracker turns both into one key-down per physical press
//! and one key-up per release; without release events a key counts as
//! released once no press has been seen for the release timeout.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::GameAction;

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained held key.
pub const DEFAULT_KEY_RELEASE_TIMEOUT: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Down(GameAction),
    Up(GameAction),
}

pub type KeyInputs = ArrayVec<KeyInput, { GameAction::COUNT }>;

#[derive(Debug, Clone)]
pub struct KeyTracker {
    /// Last press seen per held action
    held: [Option<Instant>; GameAction::COUNT],
    release_timeout: Duration,
    reports_release: bool,
}

impl KeyTracker {
    pub fn new(release_timeout: Duration) -> Self {
        Self {
            held: [None; GameAction::COUNT],
            release_timeout,
            reports_release: false,
        }
    }

    /// Whether the terminal delivers release events. When it does, keys
    /// stay held until released and the timeout is never applied.
    pub fn set_reports_release(&mut self, reports_release: bool) {
        self.reports_release = reports_release;
    }

    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    pub fn is_held(&self, action: GameAction) -> bool {
        self.held[action.index()].is_some()
    }

    /// Feed one terminal key event. Returns the edge it produced, if any.
    pub fn on_key(&mut self, key: KeyEvent, now: Instant) -> Option<KeyInput> {
        let action = handle_key_event(key)?;
        let slot = &mut self.held[action.index()];

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                let was_held = slot.replace(now).is_some();
                (!was_held).then_some(KeyInput::Down(action))
            }
            KeyEventKind::Release => {
                self.reports_release = true;
                slot.take().map(|_| KeyInput::Up(action))
            }
        }
    }

    /// Synthesize key-ups for keys that timed out
    pub fn expire(&mut self, now: Instant) -> KeyInputs {
        let mut released = KeyInputs::new();
        if self.reports_release {
            return released;
        }

        for action in GameAction::ALL {
            let slot = &mut self.held[action.index()];
            let stale = slot
                .map(|seen| now.saturating_duration_since(seen) > self.release_timeout)
                .unwrap_or(false);
            if stale {
                *slot = None;
                released.push(KeyInput::Up(action));
            }
        }
        released
    }

    /// Release every held key, e.g. on focus loss or restart
    pub fn release_all(&mut self) -> KeyInputs {
        let mut released = KeyInputs::new();
        for action in GameAction::ALL {
            if self.held[action.index()].take().is_some() {
                released.push(KeyInput::Up(action));
            }
        }
        released
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_RELEASE_TIMEOUT)
    }
}
