use crate::core::game_state::GameState;
use crate::core::offline::{self, OfflineReport};
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Manages the single JSON save slot.
pub struct SaveManager {
    save_path: PathBuf,
}

/// How the state on hand came to be.
pub enum LoadOutcome {
    /// A save existed and parsed; offline catch-up already applied.
    Loaded { offline: OfflineReport },
    /// No save file; this is a brand-new game.
    Fresh,
    /// A save existed but could not be read; the game starts over.
    Recovered { error: String },
}

impl SaveManager {
    /// Creates a SaveManager using the platform config directory from the
    /// `directories` crate.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "purrfect").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("save.json"),
        })
    }

    /// Creates a SaveManager writing to an explicit path. Used by tests.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn save_path(&self) -> &PathBuf {
        &self.save_path
    }

    /// Writes the state as pretty JSON, atomically: serialize to a sibling
    /// temp file, then rename over the slot. A crash mid-write leaves the
    /// previous save intact.
    pub fn save(&self, state: &GameState) -> io::Result<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let tmp_path = self.save_path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.save_path)?;

        Ok(())
    }

    /// Reads and parses the save slot. Derived fields are recomputed
    /// rather than trusted; unknown fields in the record are ignored.
    pub fn load(&self) -> io::Result<GameState> {
        let json = fs::read_to_string(&self.save_path)?;
        let mut state: GameState = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        state.normalize();
        Ok(state)
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Loads the slot and applies offline catch-up in one step. Never
    /// fails: a missing file starts a fresh game, and a corrupt one is
    /// reported through [`LoadOutcome::Recovered`] with a fresh state.
    pub fn load_with_offline_catch_up(&self, now: i64) -> (GameState, LoadOutcome) {
        if !self.save_exists() {
            return (GameState::new(now), LoadOutcome::Fresh);
        }
        match self.load() {
            Ok(mut state) => {
                let report = offline::apply_offline_progress(&mut state, now);
                (state, LoadOutcome::Loaded { offline: report })
            }
            Err(e) => (
                GameState::new(now),
                LoadOutcome::Recovered {
                    error: e.to_string(),
                },
            ),
        }
    }
}
