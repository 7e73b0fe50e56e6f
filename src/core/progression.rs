//! Click scoring, passive accrual, leveling, and the mood-time skill.

use crate::core::game_state::GameState;
use rand::Rng;

/// Knobs for manual click scoring. Defaults come from `core::constants`;
/// tests override individual fields.
#[derive(Debug, Clone)]
pub struct ClickTuning {
    /// Max gap between clicks that still extends the combo (inclusive).
    pub combo_window: f64,
    /// Combo bonus added per streak step.
    pub combo_step: f64,
    /// Cap on the total combo bonus.
    pub max_combo_bonus: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
}

impl Default for ClickTuning {
    fn default() -> Self {
        use crate::core::constants::*;
        Self {
            combo_window: COMBO_WINDOW_SECONDS,
            combo_step: COMBO_STEP,
            max_combo_bonus: MAX_COMBO_BONUS,
            crit_chance: CRIT_CHANCE,
            crit_multiplier: CRIT_MULT,
        }
    }
}

/// What a single manual pet produced.
#[derive(Debug, Clone)]
pub struct ClickOutcome {
    pub gain: f64,
    pub was_critical: bool,
    pub combo_multiplier: f64,
    /// Levels gained from this click's experience, already resolved.
    pub levels_gained: u32,
}

impl GameState {
    /// Scores one manual pet at wall-clock time `now` (fractional seconds).
    ///
    /// Extends or resets the combo, rolls the critical, credits currency
    /// and experience, and resolves any resulting level-ups in the same
    /// call so the caller sees experience gain and leveling as one
    /// transaction.
    pub fn register_click<R: Rng>(
        &mut self,
        now: f64,
        tuning: &ClickTuning,
        rng: &mut R,
    ) -> ClickOutcome {
        // Gap exactly equal to the window still counts as within it.
        if now - self.last_click_time <= tuning.combo_window {
            self.combo += 1;
        } else {
            self.combo = 0;
        }
        self.last_click_time = now;

        let combo_multiplier =
            1.0 + tuning.max_combo_bonus.min(self.combo as f64 * tuning.combo_step);
        let was_critical = rng.gen_bool(tuning.crit_chance);
        let crit_multiplier = if was_critical {
            tuning.crit_multiplier
        } else {
            1.0
        };

        let gain = self.pet_power * combo_multiplier * crit_multiplier * self.prestige_multiplier;
        self.happy += gain;
        self.lifetime_happy += gain;
        self.total_pets += 1;
        self.exp += 1.0 + 0.1 * gain;

        use crate::core::constants::{LEVEL_EXP_GROWTH, LEVEL_PET_POWER_MULT};
        let levels_gained = self.resolve_levels(LEVEL_EXP_GROWTH, LEVEL_PET_POWER_MULT);

        ClickOutcome {
            gain,
            was_critical,
            combo_multiplier,
            levels_gained,
        }
    }

    /// Advances the time-based state by `dt` seconds.
    ///
    /// Decays both skill timers (never below zero), accrues passive
    /// production with the skill multiplier applied while the skill is
    /// active, and accrues whole playtime seconds, carrying the fractional
    /// remainder to the next call.
    pub fn advance_time(&mut self, dt: f64, skill_bonus: f64) {
        self.skill_cooldown_remaining = (self.skill_cooldown_remaining - dt).max(0.0);
        self.skill_active_remaining = (self.skill_active_remaining - dt).max(0.0);

        let skill_multiplier = if self.skill_active_remaining > 0.0 {
            1.0 + skill_bonus
        } else {
            1.0
        };
        let gain = self.production_rate * self.prestige_multiplier * skill_multiplier * dt;
        if gain > 0.0 {
            self.happy += gain;
            self.lifetime_happy += gain;
        }

        self.playtime_accum += dt;
        if self.playtime_accum >= 1.0 {
            let whole = self.playtime_accum.floor();
            self.playtime_seconds += whole as u64;
            self.playtime_accum -= whole;
        }
    }

    /// Consumes banked experience into level-ups. Each level raises the
    /// next threshold by `exp_growth` (rounded up to a whole number) and
    /// multiplies pet power by `pet_power_growth`.
    ///
    /// Returns the number of levels gained; 0 once `exp` is below the
    /// threshold, so repeated calls are no-ops.
    pub fn resolve_levels(&mut self, exp_growth: f64, pet_power_growth: f64) -> u32 {
        let mut gained = 0;
        while self.exp >= self.next_exp_threshold {
            self.exp -= self.next_exp_threshold;
            self.level += 1;
            self.next_exp_threshold = (self.next_exp_threshold * exp_growth).ceil();
            self.pet_power *= pet_power_growth;
            gained += 1;
        }
        gained
    }

    /// Activates mood time if neither timer is running. On success both
    /// the active duration and the cooldown start counting down together;
    /// otherwise nothing changes.
    pub fn try_activate_skill(&mut self, duration: f64, cooldown: f64) -> bool {
        if self.skill_cooldown_remaining <= 0.0 && self.skill_active_remaining <= 0.0 {
            self.skill_active_remaining = duration;
            self.skill_cooldown_remaining = cooldown;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn no_crit_tuning() -> ClickTuning {
        ClickTuning {
            crit_chance: 0.0,
            ..ClickTuning::default()
        }
    }

    #[test]
    fn test_click_increments_pets_and_never_decreases_happy() {
        let mut state = GameState::new(0);
        let tuning = ClickTuning::default();
        let mut rng = test_rng();

        let mut now = 10.0;
        for i in 1..=50u64 {
            let before = state.happy;
            let outcome = state.register_click(now, &tuning, &mut rng);
            assert!(outcome.gain > 0.0);
            assert!(state.happy > before);
            assert_eq!(state.total_pets, i);
            now += 0.2;
        }
        assert_eq!(state.happy, state.lifetime_happy);
    }

    #[test]
    fn test_combo_extends_within_window_and_resets_past_it() {
        let mut state = GameState::new(0);
        let tuning = no_crit_tuning();
        let mut rng = test_rng();

        state.register_click(100.0, &tuning, &mut rng);
        state.register_click(100.5, &tuning, &mut rng);
        state.register_click(101.0, &tuning, &mut rng);
        assert_eq!(state.combo, 2);

        // Boundary: gap exactly equal to the window counts as within it.
        state.register_click(101.0 + tuning.combo_window, &tuning, &mut rng);
        assert_eq!(state.combo, 3);

        // One epsilon past the window resets the streak.
        let late = state.last_click_time + tuning.combo_window + 0.001;
        state.register_click(late, &tuning, &mut rng);
        assert_eq!(state.combo, 0);
    }

    #[test]
    fn test_combo_bonus_is_capped() {
        let mut state = GameState::new(0);
        let tuning = no_crit_tuning();
        let mut rng = test_rng();

        let mut now = 0.0;
        let mut last_multiplier = 0.0;
        for _ in 0..60 {
            now += 0.1;
            last_multiplier = state.register_click(now, &tuning, &mut rng).combo_multiplier;
        }
        assert_eq!(last_multiplier, 1.0 + tuning.max_combo_bonus);
    }

    #[test]
    fn test_crit_multiplies_gain() {
        let mut state = GameState::new(0);
        let mut rng = test_rng();

        let always = ClickTuning {
            crit_chance: 1.0,
            ..ClickTuning::default()
        };
        let outcome = state.register_click(5.0, &always, &mut rng);
        assert!(outcome.was_critical);
        assert_eq!(outcome.gain, state.pet_power * always.crit_multiplier);
    }

    #[test]
    fn test_click_gain_scales_with_prestige() {
        let mut state = GameState::new(0);
        state.prestige_multiplier = 1.5;
        let tuning = no_crit_tuning();
        let mut rng = test_rng();

        let outcome = state.register_click(5.0, &tuning, &mut rng);
        assert_eq!(outcome.gain, 1.5);
    }

    #[test]
    fn test_advance_time_accrues_production() {
        let mut state = GameState::new(0);
        state.production_rate = 10.0;

        state.advance_time(0.5, 0.0);

        assert!((state.happy - 5.0).abs() < 1e-9);
        assert!((state.lifetime_happy - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_advance_time_applies_skill_bonus_only_while_active() {
        let mut state = GameState::new(0);
        state.production_rate = 10.0;
        assert!(state.try_activate_skill(1.0, 5.0));

        // Active: dt 0.5 at double rate.
        state.advance_time(0.5, 1.0);
        assert!((state.happy - 10.0).abs() < 1e-9);

        // This call drains the remaining 0.5s of active time before the
        // multiplier check, matching the original decay-then-accrue order.
        state.advance_time(0.5, 1.0);
        let after_expiry = state.happy;

        state.advance_time(0.5, 1.0);
        assert!((state.happy - after_expiry - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_advance_time_carries_fractional_playtime() {
        let mut state = GameState::new(0);

        for _ in 0..10 {
            state.advance_time(0.3, 0.0);
        }

        // 3.0 elapsed seconds: two whole seconds banked, ~0.7 carried.
        assert_eq!(state.playtime_seconds, 2);
        assert!(state.playtime_accum < 1.0);

        // The carried remainder plus half a second tips over the third.
        state.advance_time(0.5, 0.0);
        assert_eq!(state.playtime_seconds, 3);
    }

    #[test]
    fn test_timers_never_go_negative() {
        let mut state = GameState::new(0);
        state.skill_active_remaining = 0.2;
        state.skill_cooldown_remaining = 0.4;

        state.advance_time(10.0, 1.0);

        assert_eq!(state.skill_active_remaining, 0.0);
        assert_eq!(state.skill_cooldown_remaining, 0.0);
    }

    #[test]
    fn test_resolve_levels_single_level() {
        let mut state = GameState::new(0);
        state.exp = 12.0; // threshold 10

        let gained = state.resolve_levels(1.35, 1.05);

        assert_eq!(gained, 1);
        assert_eq!(state.level, 2);
        assert!((state.exp - 2.0).abs() < 1e-9);
        assert_eq!(state.next_exp_threshold, (10.0f64 * 1.35).ceil());
        assert!((state.pet_power - 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_levels_multiple_levels_in_one_call() {
        let mut state = GameState::new(0);
        state.exp = 100.0;

        let gained = state.resolve_levels(1.35, 1.05);

        assert!(gained >= 3);
        assert_eq!(state.level, 1 + gained);
        assert!(state.exp < state.next_exp_threshold);
    }

    #[test]
    fn test_resolve_levels_idempotent_at_fixed_point() {
        let mut state = GameState::new(0);
        state.exp = 25.0;
        state.resolve_levels(1.35, 1.05);

        let snapshot = (
            state.level,
            state.exp,
            state.next_exp_threshold,
            state.pet_power,
        );
        assert_eq!(state.resolve_levels(1.35, 1.05), 0);
        assert_eq!(
            (
                state.level,
                state.exp,
                state.next_exp_threshold,
                state.pet_power
            ),
            snapshot
        );
    }

    #[test]
    fn test_skill_activation_gate() {
        let mut state = GameState::new(0);

        assert!(state.try_activate_skill(12.0, 60.0));
        assert_eq!(state.skill_active_remaining, 12.0);
        assert_eq!(state.skill_cooldown_remaining, 60.0);

        // Second immediate activation fails and leaves timers untouched.
        assert!(!state.try_activate_skill(12.0, 60.0));
        assert_eq!(state.skill_active_remaining, 12.0);
        assert_eq!(state.skill_cooldown_remaining, 60.0);
    }

    #[test]
    fn test_skill_reactivates_after_cooldown() {
        let mut state = GameState::new(0);
        assert!(state.try_activate_skill(1.0, 2.0));

        state.advance_time(1.5, 1.0);
        // Active expired but cooldown still running.
        assert!(!state.try_activate_skill(1.0, 2.0));

        state.advance_time(1.0, 1.0);
        assert!(state.try_activate_skill(1.0, 2.0));
    }
}
