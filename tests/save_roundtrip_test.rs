//! Integration test: save slot round-trips and offline catch-up.

use purrfect::core::constants::MAX_OFFLINE_SECONDS;
use purrfect::core::prestige::prestige_multiplier_for;
use purrfect::core::GameState;
use purrfect::save_manager::{LoadOutcome, SaveManager};
use purrfect::shop::UpgradeId;
use std::fs;
use std::path::PathBuf;

fn temp_slot(tag: &str) -> (SaveManager, PathBuf) {
    let path = std::env::temp_dir().join(format!("purrfect-it-{}.json", tag));
    let _ = fs::remove_file(&path);
    (SaveManager::with_path(path.clone()), path)
}

#[test]
fn test_round_trip_restores_equivalent_state() {
    let (manager, path) = temp_slot("roundtrip");

    let mut state = GameState::new(10_000);
    state.happy = 4_242.5;
    state.lifetime_happy = 123_456.0;
    state.total_pets = 999;
    state.owned[UpgradeId::Toy.index()] = 3;
    state.owned[UpgradeId::SilkGloves.index()] = 2;
    state.pet_power = 1.0 + 2.0 * 6.0;
    state.level = 8;
    state.exp = 12.5;
    state.prestige_points = 5;
    state.playtime_seconds = 1_234;
    state.normalize();

    manager.save(&state).expect("save failed");
    let loaded = manager.load().expect("load failed");

    assert_eq!(loaded.happy, state.happy);
    assert_eq!(loaded.lifetime_happy, state.lifetime_happy);
    assert_eq!(loaded.total_pets, state.total_pets);
    assert_eq!(loaded.owned, state.owned);
    assert_eq!(loaded.pet_power, state.pet_power);
    assert_eq!(loaded.level, state.level);
    assert_eq!(loaded.exp, state.exp);
    assert_eq!(loaded.playtime_seconds, state.playtime_seconds);
    assert_eq!(loaded.last_played_at, state.last_played_at);
    // Derived fields hold their invariants after load.
    assert_eq!(loaded.production_rate, state.production_rate);
    assert_eq!(loaded.prestige_multiplier, prestige_multiplier_for(5));

    let _ = fs::remove_file(path);
}

#[test]
fn test_partial_record_loads_with_defaults() {
    let (manager, path) = temp_slot("partial");
    fs::write(
        &path,
        r#"{
            "happy": 300.0,
            "owned": { "toy": 2, "removed_upgrade": 7 },
            "achievements": ["happy_1k", "not_a_real_one"],
            "last_played_at": 500
        }"#,
    )
    .expect("write failed");

    let state = manager.load().expect("load failed");
    assert_eq!(state.happy, 300.0);
    assert_eq!(state.owned_count(UpgradeId::Toy), 2);
    assert_eq!(state.owned.iter().sum::<u32>(), 2);
    assert_eq!(state.achievements.len(), 1);
    assert_eq!(state.pet_power, 1.0);
    assert_eq!(state.level, 1);
    assert!((state.production_rate - 0.4).abs() < 1e-12);

    let _ = fs::remove_file(path);
}

#[test]
fn test_offline_catch_up_on_load_is_clamped_and_single_shot() {
    let (manager, path) = temp_slot("offline");

    let mut state = GameState::new(0);
    state.owned[UpgradeId::Feeder.index()] = 2; // 3.0 happy/s
    state.normalize();
    manager.save(&state).expect("save failed");

    // Two days later: credit is capped at the 8 hour window.
    let now = 2 * 24 * 3_600;
    let (loaded, outcome) = manager.load_with_offline_catch_up(now);
    let report = match outcome {
        LoadOutcome::Loaded { offline } => offline,
        _ => panic!("expected a loaded outcome"),
    };
    assert_eq!(report.elapsed_seconds, MAX_OFFLINE_SECONDS);
    let expected = 3.0 * MAX_OFFLINE_SECONDS as f64;
    assert!((report.happy_gained - expected).abs() < 1e-6);
    assert!((loaded.happy - expected).abs() < 1e-6);
    assert_eq!(loaded.last_played_at, now);

    // Saving and immediately reloading grants nothing further.
    manager.save(&loaded).expect("save failed");
    let (reloaded, outcome) = manager.load_with_offline_catch_up(now + 2);
    let report = match outcome {
        LoadOutcome::Loaded { offline } => offline,
        _ => panic!("expected a loaded outcome"),
    };
    assert_eq!(report.happy_gained, 0.0);
    assert!((reloaded.happy - expected).abs() < 1e-6);

    let _ = fs::remove_file(path);
}

#[test]
fn test_corrupt_slot_recovers_to_fresh_state() {
    let (manager, path) = temp_slot("corrupt");
    fs::write(&path, "not json at all").expect("write failed");

    let (state, outcome) = manager.load_with_offline_catch_up(777);
    assert!(matches!(outcome, LoadOutcome::Recovered { .. }));
    assert_eq!(state.happy, 0.0);
    assert_eq!(state.total_pets, 0);
    assert_eq!(state.last_played_at, 777);

    let _ = fs::remove_file(path);
}

#[test]
fn test_missing_slot_is_a_fresh_game() {
    let (manager, _path) = temp_slot("missing");
    let (state, outcome) = manager.load_with_offline_catch_up(5);
    assert!(matches!(outcome, LoadOutcome::Fresh));
    assert_eq!(state.last_played_at, 5);
}

#[test]
fn test_save_overwrites_previous_record() {
    let (manager, path) = temp_slot("overwrite");

    let mut state = GameState::new(0);
    state.happy = 1.0;
    manager.save(&state).expect("save failed");

    state.happy = 2.0;
    manager.save(&state).expect("save failed");

    let loaded = manager.load().expect("load failed");
    assert_eq!(loaded.happy, 2.0);
    // No stray temp file left behind.
    assert!(!path.with_extension("json.tmp").exists());

    let _ = fs::remove_file(path);
}
