//! Keyboard handling for the game screen.
//!
//! Translates raw crossterm key events into [`InputAction`]s, routing
//! through the active overlay first.

use crate::core::tick::InputAction;
use crate::shop::{UpgradeId, UPGRADE_COUNT};
use crossterm::event::{KeyCode, KeyEvent};

/// Game-screen overlay state. At most one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverlay {
    None,
    /// Prestige confirmation dialog (Y to confirm, any other key cancels).
    PrestigeConfirm,
    /// Full-reset confirmation dialog.
    ResetConfirm,
}

/// Selection cursor for the shop panel.
#[derive(Debug, Clone, Copy)]
pub struct ShopCursor {
    pub index: usize,
}

impl ShopCursor {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn move_up(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.index + 1 < UPGRADE_COUNT {
            self.index += 1;
        }
    }

    pub fn selected_id(&self) -> UpgradeId {
        UpgradeId::ALL[self.index]
    }
}

impl Default for ShopCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one key event: maybe an action to apply, and the overlay to
/// show next.
pub struct KeyOutcome {
    pub action: Option<InputAction>,
    pub overlay: GameOverlay,
}

impl KeyOutcome {
    fn nothing(overlay: GameOverlay) -> Self {
        Self {
            action: None,
            overlay,
        }
    }

    fn act(action: InputAction) -> Self {
        Self {
            action: Some(action),
            overlay: GameOverlay::None,
        }
    }
}

/// Main dispatcher for game-screen input. Overlays take priority; cursor
/// movement mutates `cursor` directly and produces no action.
pub fn handle_key(
    key: KeyEvent,
    overlay: GameOverlay,
    cursor: &mut ShopCursor,
) -> KeyOutcome {
    match overlay {
        GameOverlay::PrestigeConfirm => {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => KeyOutcome::act(InputAction::Prestige),
                _ => KeyOutcome::nothing(GameOverlay::None),
            };
        }
        GameOverlay::ResetConfirm => {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => KeyOutcome::act(InputAction::Reset),
                _ => KeyOutcome::nothing(GameOverlay::None),
            };
        }
        GameOverlay::None => {}
    }

    match key.code {
        KeyCode::Char(' ') => KeyOutcome::act(InputAction::Click),
        KeyCode::Char('m') => KeyOutcome::act(InputAction::ActivateSkill),
        KeyCode::Up => {
            cursor.move_up();
            KeyOutcome::nothing(GameOverlay::None)
        }
        KeyCode::Down => {
            cursor.move_down();
            KeyOutcome::nothing(GameOverlay::None)
        }
        KeyCode::Enter | KeyCode::Char('b') => {
            KeyOutcome::act(InputAction::Purchase(cursor.selected_id()))
        }
        KeyCode::Char('P') => KeyOutcome::nothing(GameOverlay::PrestigeConfirm),
        KeyCode::Char('R') => KeyOutcome::nothing(GameOverlay::ResetConfirm),
        KeyCode::Char('s') => KeyOutcome::act(InputAction::Save),
        KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::act(InputAction::Quit),
        _ => KeyOutcome::nothing(GameOverlay::None),
    }
}
