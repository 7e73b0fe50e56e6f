//! Purrfect - a terminal cat-petting idle game.
//!
//! Exposes the economy core and persistence for testing and external use.

pub mod achievements;
pub mod build_info;
pub mod core;
pub mod input;
pub mod save_manager;
pub mod shop;
pub mod ui;
