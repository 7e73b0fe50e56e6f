//! Per-tick orchestration: input actions in, log events out.

use crate::achievements;
use crate::core::constants::*;
use crate::core::game_state::GameState;
use crate::core::offline::OfflineReport;
use crate::core::pricing::price_of;
use crate::core::progression::ClickTuning;
use crate::shop::{self, UpgradeId};
use rand::Rng;

/// Player intents fed into the tick, already decoded from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Click,
    Purchase(UpgradeId),
    ActivateSkill,
    Prestige,
    Save,
    Reset,
    Quit,
}

/// Anything worth telling the player about, in the order it happened.
/// The presentation layer maps these to log lines; the core never
/// formats text.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    Clicked {
        gain: f64,
        was_critical: bool,
        combo_multiplier: f64,
    },
    Purchased {
        id: UpgradeId,
        price: u64,
    },
    PurchaseRefused {
        id: UpgradeId,
        price: u64,
    },
    SkillActivated {
        duration: f64,
        bonus: f64,
    },
    SkillUnavailable {
        cooldown_remaining: f64,
    },
    LeveledUp {
        new_level: u32,
    },
    AchievementUnlocked {
        name: &'static str,
        description: &'static str,
    },
    PrestigeCompleted {
        points_gained: u32,
        total_points: u32,
        new_multiplier: f64,
    },
    PrestigeUnavailable,
    ResetPerformed,
    OfflineProgress(OfflineReport),
}

/// Accumulated outcome of one tick.
#[derive(Debug, Default)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
    pub save_requested: bool,
    pub quit: bool,
}

impl TickResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Applies one player action against the state.
///
/// `now_ts` is the wall-clock unix timestamp; `now_secs` is the same clock
/// in fractional seconds for combo timing. Events land in `result` in
/// order.
pub fn apply_action<R: Rng>(
    state: &mut GameState,
    action: InputAction,
    now_ts: i64,
    now_secs: f64,
    rng: &mut R,
    result: &mut TickResult,
) {
    match action {
        InputAction::Click => {
            let outcome = state.register_click(now_secs, &ClickTuning::default(), rng);
            result.events.push(TickEvent::Clicked {
                gain: outcome.gain,
                was_critical: outcome.was_critical,
                combo_multiplier: outcome.combo_multiplier,
            });
            if outcome.levels_gained > 0 {
                result.events.push(TickEvent::LeveledUp {
                    new_level: state.level,
                });
            }
        }
        InputAction::Purchase(id) => {
            let def = shop::get_upgrade(id);
            let price = price_of(def.base_cost, state.owned_count(id));
            if state.happy >= price as f64 {
                state.purchase(id, price);
                result.events.push(TickEvent::Purchased { id, price });
            } else {
                result.events.push(TickEvent::PurchaseRefused { id, price });
            }
        }
        InputAction::ActivateSkill => {
            if state.try_activate_skill(SKILL_DURATION_SECONDS, SKILL_COOLDOWN_SECONDS) {
                result.events.push(TickEvent::SkillActivated {
                    duration: SKILL_DURATION_SECONDS,
                    bonus: SKILL_BONUS,
                });
            } else {
                result.events.push(TickEvent::SkillUnavailable {
                    cooldown_remaining: state.skill_cooldown_remaining,
                });
            }
        }
        InputAction::Prestige => {
            if state.can_prestige(PRESTIGE_UNLOCK_HAPPY, PRESTIGE_UNLOCK_LEVEL) {
                let reward =
                    state.compute_prestige_reward(PRESTIGE_POINT_LOG_BASE, PRESTIGE_POINT_PER_LOG);
                state.perform_prestige(reward.gained, now_ts);
                result.events.push(TickEvent::PrestigeCompleted {
                    points_gained: reward.gained,
                    total_points: state.prestige_points,
                    new_multiplier: state.prestige_multiplier,
                });
                result.save_requested = true;
            } else {
                result.events.push(TickEvent::PrestigeUnavailable);
            }
        }
        InputAction::Save => {
            result.save_requested = true;
        }
        InputAction::Reset => {
            *state = GameState::new(now_ts);
            result.events.push(TickEvent::ResetPerformed);
            result.save_requested = true;
        }
        InputAction::Quit => {
            result.quit = true;
        }
    }
}

/// Advances time-driven state by `dt` seconds and evaluates achievements,
/// pushing any resulting events.
pub fn game_tick(state: &mut GameState, dt: f64, result: &mut TickResult) {
    state.advance_time(dt, SKILL_BONUS);

    let levels = state.resolve_levels(LEVEL_EXP_GROWTH, LEVEL_PET_POWER_MULT);
    if levels > 0 {
        result.events.push(TickEvent::LeveledUp {
            new_level: state.level,
        });
    }

    for def in achievements::evaluate(state) {
        result.events.push(TickEvent::AchievementUnlocked {
            name: def.name,
            description: def.description,
        });
    }
}
