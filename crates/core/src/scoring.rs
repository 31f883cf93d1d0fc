//! Scoring module - line-clear rewards and the gravity curve
//!
//! Rewards come from the fixed `LINE_REWARDS` table. Gravity speeds up in
//! steps: every `threshold` points removes `step` from the base fall interval,
//! down to a floor.

use std::time::Duration;

use crate::types::{
    BASE_FALL_INTERVAL_MS, FALL_SPEEDUP_STEP_MS, FALL_SPEEDUP_THRESHOLD, LINE_REWARDS,
    MIN_FALL_INTERVAL_MS,
};

/// Points for clearing `lines` rows with one lock.
///
/// More than four rows can only happen on hand-built boards; those pay the
/// four-row reward.
pub fn line_clear_reward(lines: usize) -> u32 {
    LINE_REWARDS[lines.min(LINE_REWARDS.len() - 1)]
}

/// Gravity curve parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityConfig {
    /// Fall interval at score 0
    pub base_interval: Duration,
    /// Fastest allowed fall interval
    pub min_interval: Duration,
    /// Points per speed-up step
    pub threshold: u32,
    /// Interval removed per step
    pub step: Duration,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            base_interval: Duration::from_millis(BASE_FALL_INTERVAL_MS as u64),
            min_interval: Duration::from_millis(MIN_FALL_INTERVAL_MS as u64),
            threshold: FALL_SPEEDUP_THRESHOLD,
            step: Duration::from_millis(FALL_SPEEDUP_STEP_MS as u64),
        }
    }
}

impl GravityConfig {
    /// `max(base - floor(score / threshold) * step, min)`
    pub fn fall_interval(&self, score: u32) -> Duration {
        let steps = score / self.threshold.max(1);
        let reduction = self.step.saturating_mul(steps);
        self.base_interval
            .saturating_sub(reduction)
            .max(self.min_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewards_table() {
        assert_eq!(line_clear_reward(0), 0);
        assert_eq!(line_clear_reward(1), 100);
        assert_eq!(line_clear_reward(2), 300);
        assert_eq!(line_clear_reward(3), 500);
        assert_eq!(line_clear_reward(4), 800);
        assert_eq!(line_clear_reward(6), 800);
    }

    #[test]
    fn test_fall_interval_steps() {
        let g = GravityConfig::default();
        assert_eq!(g.fall_interval(0), Duration::from_millis(1000));
        assert_eq!(g.fall_interval(999), Duration::from_millis(1000));
        assert_eq!(g.fall_interval(1000), Duration::from_millis(950));
        assert_eq!(g.fall_interval(2500), Duration::from_millis(900));
        assert_eq!(g.fall_interval(14_000), Duration::from_millis(300));
        assert_eq!(g.fall_interval(u32::MAX), Duration::from_millis(300));
    }

    #[test]
    fn test_zero_threshold_does_not_divide_by_zero() {
        let g = GravityConfig {
            threshold: 0,
            ..GravityConfig::default()
        };
        assert_eq!(g.fall_interval(3), Duration::from_millis(850));
    }
}
