//! The static achievement catalog.

use super::types::{AchievementDef, AchievementId, Metric};

/// Every achievement in the game, in display/evaluation order.
pub static ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::Pets100,
        name: "Warm Hands",
        description: "Pet the cat 100 times",
        metric: Metric::TotalPets,
        threshold: 100.0,
    },
    AchievementDef {
        id: AchievementId::Pets1K,
        name: "Devoted Petter",
        description: "Pet the cat 1,000 times",
        metric: Metric::TotalPets,
        threshold: 1_000.0,
    },
    AchievementDef {
        id: AchievementId::Happy1K,
        name: "Good Mood",
        description: "Hold 1,000 happy at once",
        metric: Metric::Happy,
        threshold: 1_000.0,
    },
    AchievementDef {
        id: AchievementId::Happy1M,
        name: "Pure Bliss",
        description: "Hold 1,000,000 happy at once",
        metric: Metric::Happy,
        threshold: 1_000_000.0,
    },
    AchievementDef {
        id: AchievementId::Pps10,
        name: "Well Oiled",
        description: "Reach 10 happy per second",
        metric: Metric::EffectivePps,
        threshold: 10.0,
    },
    AchievementDef {
        id: AchievementId::Pps100,
        name: "Happiness Factory",
        description: "Reach 100 happy per second",
        metric: Metric::EffectivePps,
        threshold: 100.0,
    },
    AchievementDef {
        id: AchievementId::Level5,
        name: "Getting Attached",
        description: "Reach level 5",
        metric: Metric::Level,
        threshold: 5.0,
    },
    AchievementDef {
        id: AchievementId::Level10,
        name: "Inseparable",
        description: "Reach level 10",
        metric: Metric::Level,
        threshold: 10.0,
    },
    AchievementDef {
        id: AchievementId::Prestige1,
        name: "New Beginnings",
        description: "Prestige for the first time",
        metric: Metric::PrestigePoints,
        threshold: 1.0,
    },
    AchievementDef {
        id: AchievementId::Prestige10,
        name: "Eternal Return",
        description: "Bank 10 prestige points",
        metric: Metric::PrestigePoints,
        threshold: 10.0,
    },
];
