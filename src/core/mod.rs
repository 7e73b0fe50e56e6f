//! The economy core: pure state and operations, no terminal types.

pub mod constants;
pub mod game_state;
pub mod offline;
pub mod prestige;
pub mod pricing;
pub mod progression;
pub mod tick;

pub use game_state::GameState;
pub use offline::{apply_offline_progress, OfflineReport};
pub use prestige::{prestige_multiplier_for, PrestigeReward};
pub use pricing::price_of;
pub use progression::{ClickOutcome, ClickTuning};
pub use tick::{apply_action, game_tick, InputAction, TickEvent, TickResult};
