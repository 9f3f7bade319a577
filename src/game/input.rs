//! Keyboard routing
//!
//! One place that knows which keys mean what. Aiming/firing actions go
//! through `Session::apply`, which re-checks the phase and lockout guards on
//! every event; menu actions are handled by the app layer. Unrecognized keys
//! map to nothing.

use macroquad::input::KeyCode;

/// An aiming or firing action while a match is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    PowerDown,
    PowerUp,
    AimLeft,
    AimRight,
    AimUp,
    AimDown,
    Fire,
}

/// Menu-level action, valid on the idle and game-over screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Reset,
    ClearScores,
}

/// Map a pressed key to an in-match action
pub fn match_action(key: KeyCode) -> Option<InputAction> {
    match key {
        KeyCode::Key1 => Some(InputAction::PowerDown),
        KeyCode::Key2 => Some(InputAction::PowerUp),
        KeyCode::Left => Some(InputAction::AimLeft),
        KeyCode::Right => Some(InputAction::AimRight),
        KeyCode::Up => Some(InputAction::AimUp),
        KeyCode::Down => Some(InputAction::AimDown),
        KeyCode::Enter => Some(InputAction::Fire),
        _ => None,
    }
}

/// Map a pressed key to a menu action
pub fn menu_action(key: KeyCode) -> Option<MenuAction> {
    match key {
        KeyCode::Enter | KeyCode::Space => Some(MenuAction::Start),
        KeyCode::R => Some(MenuAction::Reset),
        KeyCode::C => Some(MenuAction::ClearScores),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_keys() {
        assert_eq!(match_action(KeyCode::Key1), Some(InputAction::PowerDown));
        assert_eq!(match_action(KeyCode::Key2), Some(InputAction::PowerUp));
        assert_eq!(match_action(KeyCode::Left), Some(InputAction::AimLeft));
        assert_eq!(match_action(KeyCode::Right), Some(InputAction::AimRight));
        assert_eq!(match_action(KeyCode::Up), Some(InputAction::AimUp));
        assert_eq!(match_action(KeyCode::Down), Some(InputAction::AimDown));
        assert_eq!(match_action(KeyCode::Enter), Some(InputAction::Fire));
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert_eq!(match_action(KeyCode::W), None);
        assert_eq!(match_action(KeyCode::Escape), None);
        assert_eq!(menu_action(KeyCode::Key1), None);
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(menu_action(KeyCode::Enter), Some(MenuAction::Start));
        assert_eq!(menu_action(KeyCode::Space), Some(MenuAction::Start));
        assert_eq!(menu_action(KeyCode::R), Some(MenuAction::Reset));
        assert_eq!(menu_action(KeyCode::C), Some(MenuAction::ClearScores));
    }
}
