//! Key mapping from terminal events to game intents.
//!
//! Pads follow the 2x2 board:
//!
//! ```text
//!   1 / Up / w     Red    | Yellow   2 / Right / d
//!   3 / Left / a   Blue   | Green    4 / Down / x
//! ```

use crate::types::{Color, GameIntent, GameState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game intents.
pub fn handle_key_event(key: KeyEvent) -> Option<GameIntent> {
    match key.code {
        // Pads
        KeyCode::Char('1') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameIntent::Press(Color::Red))
        }
        KeyCode::Char('2') | KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameIntent::Press(Color::Yellow))
        }
        KeyCode::Char('3') | KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameIntent::Press(Color::Blue))
        }
        KeyCode::Char('4') | KeyCode::Down | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(GameIntent::Press(Color::Green))
        }

        // Controls
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameIntent::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameIntent::Restart),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameIntent::ToggleStrict),

        _ => None,
    }
}

/// Intent behind the start control, which reads "Restart" once a game is under way.
pub fn start_control(state: GameState) -> GameIntent {
    if state == GameState::NotStarted {
        GameIntent::Start
    } else {
        GameIntent::Restart
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_pad_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(GameIntent::Press(Color::Red))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('2'))),
            Some(GameIntent::Press(Color::Yellow))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('3'))),
            Some(GameIntent::Press(Color::Blue))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('4'))),
            Some(GameIntent::Press(Color::Green))
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameIntent::Press(Color::Red))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameIntent::Press(Color::Green))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('A'))),
            Some(GameIntent::Press(Color::Blue))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameIntent::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameIntent::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameIntent::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(GameIntent::ToggleStrict)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_start_control_follows_state() {
        assert_eq!(start_control(GameState::NotStarted), GameIntent::Start);
        assert_eq!(start_control(GameState::AwaitingInput), GameIntent::Restart);
        assert_eq!(start_control(GameState::Won), GameIntent::Restart);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
