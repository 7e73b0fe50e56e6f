//! Achievement rules and evaluation.

mod data;
mod types;

pub use data::ALL_ACHIEVEMENTS;
pub use types::{metric_value, AchievementDef, AchievementId, Metric};

use crate::core::game_state::GameState;

/// Scans the catalog in order and unlocks everything whose metric meets its
/// threshold. Returns the newly unlocked definitions; already-unlocked
/// achievements are skipped, so repeated calls at the same state return
/// nothing.
pub fn evaluate(state: &mut GameState) -> Vec<&'static AchievementDef> {
    let mut newly_unlocked = Vec::new();
    for def in ALL_ACHIEVEMENTS {
        if state.has_achievement(def.id) {
            continue;
        }
        if metric_value(state, def.metric) >= def.threshold {
            state.achievements.push(def.id);
            newly_unlocked.push(def);
        }
    }
    newly_unlocked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_unlocks_nothing() {
        let mut state = GameState::new(0);
        assert!(evaluate(&mut state).is_empty());
        assert!(state.achievements.is_empty());
    }

    #[test]
    fn test_threshold_boundary() {
        let mut state = GameState::new(0);
        state.total_pets = 99;
        assert!(evaluate(&mut state).is_empty());

        state.total_pets = 100;
        let unlocked = evaluate(&mut state);
        assert_eq!(unlocked.len(), 1);
        assert_eq!(unlocked[0].id, AchievementId::Pets100);
        assert!(state.has_achievement(AchievementId::Pets100));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut state = GameState::new(0);
        state.happy = 5_000.0;

        let first = evaluate(&mut state);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id, AchievementId::Happy1K);

        assert!(evaluate(&mut state).is_empty());
        assert_eq!(state.achievements.len(), 1);
    }

    #[test]
    fn test_multiple_unlocks_in_catalog_order() {
        let mut state = GameState::new(0);
        state.total_pets = 2_000;
        state.level = 12;
        state.prestige_points = 1;
        state.prestige_multiplier = 1.05;

        let unlocked: Vec<AchievementId> = evaluate(&mut state).iter().map(|d| d.id).collect();
        assert_eq!(
            unlocked,
            vec![
                AchievementId::Pets100,
                AchievementId::Pets1K,
                AchievementId::Level5,
                AchievementId::Level10,
                AchievementId::Prestige1,
            ]
        );
        assert_eq!(state.achievements, unlocked);
    }

    #[test]
    fn test_pps_metric_uses_effective_rate() {
        let mut state = GameState::new(0);
        state.production_rate = 9.0;
        state.prestige_multiplier = 1.2; // effective 10.8

        let unlocked = evaluate(&mut state);
        assert_eq!(unlocked.len(), 1);
        assert_eq!(unlocked[0].id, AchievementId::Pps10);
    }
}
