//! Prestige: reset progress for a permanent multiplier.

use crate::core::constants::*;
use crate::core::game_state::GameState;
use crate::shop::UPGRADE_COUNT;

/// The permanent multiplier for a given point total.
pub fn prestige_multiplier_for(points: u32) -> f64 {
    1.0 + PRESTIGE_PER_POINT_MULT * points as f64
}

/// Points a prestige would grant right now.
#[derive(Debug, Clone, Copy)]
pub struct PrestigeReward {
    /// Points added by prestiging now. At least 1.
    pub gained: u32,
    /// Point total after prestiging.
    pub total_points: u32,
}

impl GameState {
    /// Prestige unlocks on either gate: enough banked happy, or a high
    /// enough level.
    pub fn can_prestige(&self, unlock_happy: f64, unlock_level: u32) -> bool {
        self.happy >= unlock_happy || self.level >= unlock_level
    }

    /// Sizes the prestige reward from lifetime earnings:
    /// `total = max(1, floor(log_base(max(lifetime, base)) * per_log))`,
    /// `gained = max(1, total - current points)`.
    ///
    /// Non-decreasing in `lifetime_happy`, so waiting never shrinks the
    /// reward.
    pub fn compute_prestige_reward(&self, log_base: f64, points_per_log: f64) -> PrestigeReward {
        let lifetime = self.lifetime_happy.max(log_base);
        let total = (lifetime.log(log_base) * points_per_log).floor().max(1.0) as u32;
        let gained = total.saturating_sub(self.prestige_points).max(1);
        PrestigeReward {
            gained,
            total_points: self.prestige_points + gained,
        }
    }

    /// Banks the reward, recomputes the multiplier, and performs the
    /// partial reset.
    ///
    /// Survivors: `lifetime_happy`, `total_pets` (lifetime counter — see
    /// the note in DESIGN.md), prestige points/multiplier, achievements,
    /// and playtime.
    pub fn perform_prestige(&mut self, reward: u32, now: i64) {
        self.prestige_points += reward;
        self.prestige_multiplier = prestige_multiplier_for(self.prestige_points);

        self.happy = 0.0;
        self.pet_power = 1.0;
        self.owned = [0; UPGRADE_COUNT];
        self.combo = 0;
        self.last_click_time = 0.0;
        self.skill_active_remaining = 0.0;
        self.skill_cooldown_remaining = 0.0;
        self.level = 1;
        self.exp = 0.0;
        self.next_exp_threshold = BASE_EXP_THRESHOLD;
        self.recalc_production_rate();
        self.last_played_at = now;
    }
}
