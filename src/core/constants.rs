// Session timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const AUTOSAVE_INTERVAL_SECONDS: f64 = 10.0;

// Click scoring
pub const CRIT_CHANCE: f64 = 0.10;
pub const CRIT_MULT: f64 = 2.0;
pub const COMBO_WINDOW_SECONDS: f64 = 1.2;
pub const COMBO_STEP: f64 = 0.05;
pub const MAX_COMBO_BONUS: f64 = 1.0;

// Mood time (timed production skill)
pub const SKILL_DURATION_SECONDS: f64 = 12.0;
pub const SKILL_COOLDOWN_SECONDS: f64 = 60.0;
pub const SKILL_BONUS: f64 = 1.0; // +100% PPS while active

// Leveling
pub const BASE_EXP_THRESHOLD: f64 = 10.0;
pub const LEVEL_EXP_GROWTH: f64 = 1.35;
pub const LEVEL_PET_POWER_MULT: f64 = 1.05;

// Prestige unlock gates and reward curve:
// total points = max(1, floor(log10(max(lifetime, 10)) * POINT_PER_LOG))
pub const PRESTIGE_UNLOCK_HAPPY: f64 = 500_000.0;
pub const PRESTIGE_UNLOCK_LEVEL: u32 = 20;
pub const PRESTIGE_POINT_LOG_BASE: f64 = 10.0;
pub const PRESTIGE_POINT_PER_LOG: f64 = 3.0;
pub const PRESTIGE_PER_POINT_MULT: f64 = 0.05;

// Offline catch-up: credit is capped, and gaps at or below the floor are
// ignored so rapid restarts never grant anything.
pub const MAX_OFFLINE_SECONDS: i64 = 8 * 60 * 60;
pub const MIN_OFFLINE_SECONDS: i64 = 3;
