//! Offline catch-up applied when a save is loaded.

use crate::core::constants::{MAX_OFFLINE_SECONDS, MIN_OFFLINE_SECONDS};
use crate::core::game_state::GameState;

/// What happened while the game was closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OfflineReport {
    /// Wall-clock seconds away, after clamping to the 8 hour cap.
    pub elapsed_seconds: i64,
    /// Happy granted for the time away. Zero for short absences.
    pub happy_gained: f64,
    /// The effective production rate the grant was computed at.
    pub rate: f64,
}

/// Grants passive production for the time since `last_played_at`.
///
/// Elapsed time is clamped to `[0, MAX_OFFLINE_SECONDS]`; anything at or
/// under `MIN_OFFLINE_SECONDS` grants nothing (quick restarts shouldn't
/// pay out). `last_played_at` is restamped to `now` unconditionally so a
/// second load cannot double-grant.
pub fn apply_offline_progress(state: &mut GameState, now: i64) -> OfflineReport {
    let elapsed = (now - state.last_played_at).clamp(0, MAX_OFFLINE_SECONDS);
    state.last_played_at = now;

    if elapsed <= MIN_OFFLINE_SECONDS {
        return OfflineReport {
            elapsed_seconds: elapsed,
            happy_gained: 0.0,
            rate: state.effective_production_rate(),
        };
    }

    let rate = state.effective_production_rate();
    let gained = rate * elapsed as f64;
    state.happy += gained;
    state.lifetime_happy += gained;
    state.playtime_seconds += elapsed as u64;

    OfflineReport {
        elapsed_seconds: elapsed,
        happy_gained: gained,
        rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::UpgradeId;

    fn producing_state(last_played_at: i64) -> GameState {
        let mut state = GameState::new(last_played_at);
        state.owned[UpgradeId::Feeder.index()] = 2; // 3.0 happy/s
        state.recalc_production_rate();
        state
    }

    #[test]
    fn test_grants_for_time_away() {
        let mut state = producing_state(1_000);
        let report = apply_offline_progress(&mut state, 1_000 + 600);

        assert_eq!(report.elapsed_seconds, 600);
        assert!((report.happy_gained - 1_800.0).abs() < 1e-9);
        assert!((state.happy - 1_800.0).abs() < 1e-9);
        assert!((state.lifetime_happy - 1_800.0).abs() < 1e-9);
        assert_eq!(state.playtime_seconds, 600);
        assert_eq!(state.last_played_at, 1_600);
    }

    #[test]
    fn test_clamped_to_eight_hours() {
        let mut state = producing_state(0);
        // 100 hours away only pays out 8.
        let report = apply_offline_progress(&mut state, 100 * 3_600);

        assert_eq!(report.elapsed_seconds, MAX_OFFLINE_SECONDS);
        let expected = 3.0 * MAX_OFFLINE_SECONDS as f64;
        assert!((report.happy_gained - expected).abs() < 1e-6);
        assert_eq!(state.last_played_at, 100 * 3_600);
    }

    #[test]
    fn test_short_absence_grants_nothing_but_restamps() {
        let mut state = producing_state(1_000);
        let report = apply_offline_progress(&mut state, 1_003);

        assert_eq!(report.elapsed_seconds, 3);
        assert_eq!(report.happy_gained, 0.0);
        assert_eq!(state.happy, 0.0);
        assert_eq!(state.playtime_seconds, 0);
        // Restamped regardless, so waiting out the floor across restarts
        // never accumulates.
        assert_eq!(state.last_played_at, 1_003);
    }

    #[test]
    fn test_clock_moved_backwards() {
        let mut state = producing_state(5_000);
        let report = apply_offline_progress(&mut state, 4_000);

        assert_eq!(report.elapsed_seconds, 0);
        assert_eq!(report.happy_gained, 0.0);
        assert_eq!(state.last_played_at, 4_000);
    }

    #[test]
    fn test_double_apply_does_not_double_grant() {
        let mut state = producing_state(0);
        let first = apply_offline_progress(&mut state, 600);
        let second = apply_offline_progress(&mut state, 600);

        assert!(first.happy_gained > 0.0);
        assert_eq!(second.elapsed_seconds, 0);
        assert_eq!(second.happy_gained, 0.0);
        assert!((state.happy - first.happy_gained).abs() < 1e-9);
    }

    #[test]
    fn test_prestige_multiplier_applies_to_offline_grant() {
        let mut state = producing_state(0);
        state.prestige_points = 20;
        state.prestige_multiplier = 2.0;

        let report = apply_offline_progress(&mut state, 100);
        assert!((report.rate - 6.0).abs() < 1e-9);
        assert!((report.happy_gained - 600.0).abs() < 1e-6);
    }
}
