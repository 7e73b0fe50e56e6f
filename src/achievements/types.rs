//! Achievement identifiers, metrics, and rule definitions.

use crate::core::game_state::GameState;

/// Closed set of achievements. Serialized by `key()` in the save record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    Pets100,
    Pets1K,
    Happy1K,
    Happy1M,
    Pps10,
    Pps100,
    Level5,
    Level10,
    Prestige1,
    Prestige10,
}

impl AchievementId {
    pub const ALL: [AchievementId; 10] = [
        AchievementId::Pets100,
        AchievementId::Pets1K,
        AchievementId::Happy1K,
        AchievementId::Happy1M,
        AchievementId::Pps10,
        AchievementId::Pps100,
        AchievementId::Level5,
        AchievementId::Level10,
        AchievementId::Prestige1,
        AchievementId::Prestige10,
    ];

    /// Stable on-disk key.
    pub fn key(self) -> &'static str {
        match self {
            AchievementId::Pets100 => "pets_100",
            AchievementId::Pets1K => "pets_1k",
            AchievementId::Happy1K => "happy_1k",
            AchievementId::Happy1M => "happy_1m",
            AchievementId::Pps10 => "pps_10",
            AchievementId::Pps100 => "pps_100",
            AchievementId::Level5 => "lv_5",
            AchievementId::Level10 => "lv_10",
            AchievementId::Prestige1 => "prestige_1",
            AchievementId::Prestige10 => "prestige_10",
        }
    }

    /// Inverse of [`key`](Self::key). Unknown keys map to `None` so stale
    /// save records degrade gracefully.
    pub fn from_key(key: &str) -> Option<AchievementId> {
        AchievementId::ALL.iter().copied().find(|id| id.key() == key)
    }
}

/// What an achievement threshold is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Happy,
    TotalPets,
    EffectivePps,
    Level,
    PrestigePoints,
}

/// A single unlock rule: `metric >= threshold`.
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub metric: Metric,
    pub threshold: f64,
}

/// Reads the current value of a metric off the game state.
pub fn metric_value(state: &GameState, metric: Metric) -> f64 {
    match metric {
        Metric::Happy => state.happy,
        Metric::TotalPets => state.total_pets as f64,
        Metric::EffectivePps => state.effective_production_rate(),
        Metric::Level => state.level as f64,
        Metric::PrestigePoints => state.prestige_points as f64,
    }
}
