//! The authoritative economy state.

use crate::achievements::AchievementId;
use crate::core::constants::*;
use crate::core::prestige::prestige_multiplier_for;
use crate::shop::{self, UpgradeId, UpgradeKind, SHOP, UPGRADE_COUNT};
use serde::{Deserialize, Serialize};

/// Main game state containing all player progress.
///
/// Owned exclusively by the session loop between ticks; every mutation goes
/// through the operations defined here and in the sibling core modules.
/// Serializes to the flat save record — every field has a default so older
/// or partial records load, and derived fields (`production_rate`,
/// `prestige_multiplier`) are recomputed after load rather than trusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Spendable currency.
    #[serde(default)]
    pub happy: f64,
    /// Cumulative currency ever earned. Never spent, never decreases;
    /// drives prestige reward sizing.
    #[serde(default)]
    pub lifetime_happy: f64,
    /// Count of manual pets. Survives prestige (lifetime counter).
    #[serde(default)]
    pub total_pets: u64,
    /// Base manual-click yield before combo/crit/prestige multipliers.
    #[serde(default = "default_pet_power")]
    pub pet_power: f64,
    /// Passive happy per second, before the prestige multiplier. Derived
    /// from `owned`; persisted for inspection but recomputed on load.
    #[serde(default)]
    pub production_rate: f64,
    /// Purchase counts, indexed by [`UpgradeId`]. Serialized as a
    /// key -> count map; unknown keys are dropped, missing keys are 0.
    #[serde(default = "default_owned", with = "owned_counts")]
    pub owned: [u32; UPGRADE_COUNT],
    /// Consecutive-click streak.
    #[serde(default)]
    pub combo: u32,
    /// Wall-clock time of the last manual pet, in fractional seconds.
    #[serde(default)]
    pub last_click_time: f64,
    #[serde(default)]
    pub skill_cooldown_remaining: f64,
    #[serde(default)]
    pub skill_active_remaining: f64,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub exp: f64,
    #[serde(default = "default_next_exp")]
    pub next_exp_threshold: f64,
    /// Unlocked achievements in unlock order. Serialized as string keys;
    /// unknown keys are dropped.
    #[serde(default, with = "achievement_keys")]
    pub achievements: Vec<AchievementId>,
    #[serde(default)]
    pub prestige_points: u32,
    /// Always `1 + PRESTIGE_PER_POINT_MULT * prestige_points`; recomputed
    /// whenever `prestige_points` changes and after every load.
    #[serde(default = "default_prestige_multiplier")]
    pub prestige_multiplier: f64,
    #[serde(default)]
    pub playtime_seconds: u64,
    /// Unix timestamp of the last save, used for offline catch-up.
    #[serde(default)]
    pub last_played_at: i64,
    /// Sub-second playtime carry between `advance_time` calls (transient).
    #[serde(skip)]
    pub playtime_accum: f64,
}

fn default_pet_power() -> f64 {
    1.0
}

fn default_level() -> u32 {
    1
}

fn default_next_exp() -> f64 {
    BASE_EXP_THRESHOLD
}

fn default_prestige_multiplier() -> f64 {
    1.0
}

fn default_owned() -> [u32; UPGRADE_COUNT] {
    [0; UPGRADE_COUNT]
}

impl GameState {
    /// Creates a fresh state with all progress at initial defaults.
    pub fn new(current_time: i64) -> Self {
        Self {
            happy: 0.0,
            lifetime_happy: 0.0,
            total_pets: 0,
            pet_power: 1.0,
            production_rate: 0.0,
            owned: [0; UPGRADE_COUNT],
            combo: 0,
            last_click_time: 0.0,
            skill_cooldown_remaining: 0.0,
            skill_active_remaining: 0.0,
            level: 1,
            exp: 0.0,
            next_exp_threshold: BASE_EXP_THRESHOLD,
            achievements: Vec::new(),
            prestige_points: 0,
            prestige_multiplier: 1.0,
            playtime_seconds: 0,
            last_played_at: current_time,
            playtime_accum: 0.0,
        }
    }

    /// Recomputes `production_rate` from owned production upgrades.
    /// Idempotent; called after every purchase, prestige, and load.
    pub fn recalc_production_rate(&mut self) {
        self.production_rate = SHOP
            .iter()
            .filter(|u| u.kind == UpgradeKind::Production)
            .map(|u| self.owned[u.id.index()] as f64 * u.gain)
            .sum();
    }

    /// PPS after the prestige multiplier.
    pub fn effective_production_rate(&self) -> f64 {
        self.production_rate * self.prestige_multiplier
    }

    pub fn owned_count(&self, id: UpgradeId) -> u32 {
        self.owned[id.index()]
    }

    /// Applies a confirmed purchase. The caller has already verified
    /// `happy >= price` against the pricing engine; affordability is the
    /// session loop's responsibility, not ours.
    pub fn purchase(&mut self, id: UpgradeId, price: u64) {
        let def = shop::get_upgrade(id);
        self.happy -= price as f64;
        self.owned[id.index()] += 1;
        if def.kind == UpgradeKind::Click {
            self.pet_power += def.gain;
        }
        self.recalc_production_rate();
    }

    pub fn has_achievement(&self, id: AchievementId) -> bool {
        self.achievements.contains(&id)
    }

    /// Re-derives every derived field from its source of truth. Called
    /// after deserialization so a stale or hand-edited record cannot leave
    /// the invariants broken.
    pub fn normalize(&mut self) {
        self.recalc_production_rate();
        self.prestige_multiplier = prestige_multiplier_for(self.prestige_points);
    }
}

/// Serializes `owned` as a `key -> count` map and tolerates unknown or
/// missing keys on the way back in.
mod owned_counts {
    use crate::shop::{UpgradeId, UPGRADE_COUNT};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(owned: &[u32; UPGRADE_COUNT], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let map: BTreeMap<&str, u32> = UpgradeId::ALL
            .iter()
            .map(|id| (id.key(), owned[id.index()]))
            .collect();
        map.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[u32; UPGRADE_COUNT], D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = BTreeMap::<String, u32>::deserialize(deserializer)?;
        let mut owned = [0u32; UPGRADE_COUNT];
        for (key, count) in map {
            // Keys from removed or future upgrades are dropped.
            if let Some(id) = UpgradeId::from_key(&key) {
                owned[id.index()] = count;
            }
        }
        Ok(owned)
    }
}

/// Serializes unlocked achievements as a list of string keys.
mod achievement_keys {
    use crate::achievements::AchievementId;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(unlocked: &[AchievementId], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let keys: Vec<&str> = unlocked.iter().map(|id| id.key()).collect();
        keys.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<AchievementId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let keys = Vec::<String>::deserialize(deserializer)?;
        let mut unlocked = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(id) = AchievementId::from_key(&key) {
                if !unlocked.contains(&id) {
                    unlocked.push(id);
                }
            }
        }
        Ok(unlocked)
    }
}
