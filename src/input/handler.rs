use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, RunState};

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Direction(Direction),
    Start,
    Restart,
    Menu,
    CycleTheme,
    /// Append a character to the player name on the start overlay
    NamePush(char),
    /// Delete the last character of the player name
    NamePop,
    Quit,
    None,
}

/// Maps key events to actions. The mapping depends on the run state: while
/// the start overlay is up the keyboard belongs to name entry, so letters
/// must not double as movement keys.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent, run_state: RunState) -> InputAction {
        // Ctrl+C quits from anywhere
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputAction::Quit;
        }

        match run_state {
            RunState::Idle => self.handle_idle_key(key),
            RunState::Running => self.handle_running_key(key),
            RunState::GameOver => self.handle_game_over_key(key),
        }
    }

    fn handle_idle_key(&self, key: KeyEvent) -> InputAction {
        match key.code {
            KeyCode::Enter => InputAction::Start,
            KeyCode::Backspace => InputAction::NamePop,
            KeyCode::Tab => InputAction::CycleTheme,
            KeyCode::Esc => InputAction::Quit,
            KeyCode::Char(c) if !c.is_control() => InputAction::NamePush(c),
            _ => InputAction::None,
        }
    }

    fn handle_running_key(&self, key: KeyEvent) -> InputAction {
        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => InputAction::Direction(Direction::Up),
            KeyCode::Down => InputAction::Direction(Direction::Down),
            KeyCode::Left => InputAction::Direction(Direction::Left),
            KeyCode::Right => InputAction::Direction(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => InputAction::Direction(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => InputAction::Direction(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => InputAction::Direction(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => InputAction::Direction(Direction::Right),

            // Controls
            KeyCode::Char('t') | KeyCode::Char('T') => InputAction::CycleTheme,
            KeyCode::Esc => InputAction::Menu,
            KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Quit,

            _ => InputAction::None,
        }
    }

    fn handle_game_over_key(&self, key: KeyEvent) -> InputAction {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => InputAction::Restart,
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => InputAction::Menu,
            KeyCode::Char('t') | KeyCode::Char('T') => InputAction::CycleTheme,
            KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Quit,
            _ => InputAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_steer_while_running() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Up), RunState::Running),
            InputAction::Direction(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Down), RunState::Running),
            InputAction::Direction(Direction::Down)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Left), RunState::Running),
            InputAction::Direction(Direction::Left)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Right), RunState::Running),
            InputAction::Direction(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_steers_while_running() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('w')), RunState::Running),
            InputAction::Direction(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('a')), RunState::Running),
            InputAction::Direction(Direction::Left)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('s')), RunState::Running),
            InputAction::Direction(Direction::Down)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('d')), RunState::Running),
            InputAction::Direction(Direction::Right)
        );
        assert_eq!(
            handler.handle_key_event(
                KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT),
                RunState::Running
            ),
            InputAction::Direction(Direction::Up)
        );
    }

    #[test]
    fn test_letters_edit_the_name_while_idle() {
        let handler = InputHandler::new();

        // 'w' must not steer before the run starts; it is part of a name
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('w')), RunState::Idle),
            InputAction::NamePush('w')
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Backspace), RunState::Idle),
            InputAction::NamePop
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Enter), RunState::Idle),
            InputAction::Start
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Tab), RunState::Idle),
            InputAction::CycleTheme
        );
    }

    #[test]
    fn test_game_over_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('r')), RunState::GameOver),
            InputAction::Restart
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Enter), RunState::GameOver),
            InputAction::Restart
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('m')), RunState::GameOver),
            InputAction::Menu
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Esc), RunState::GameOver),
            InputAction::Menu
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('t')), RunState::GameOver),
            InputAction::CycleTheme
        );
    }

    #[test]
    fn test_theme_and_menu_keys_while_running() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('t')), RunState::Running),
            InputAction::CycleTheme
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Esc), RunState::Running),
            InputAction::Menu
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('q')), RunState::Running),
            InputAction::Quit
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Esc), RunState::Idle),
            InputAction::Quit
        );

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handler.handle_key_event(ctrl_c, RunState::Idle),
            InputAction::Quit
        );
        assert_eq!(
            handler.handle_key_event(ctrl_c, RunState::Running),
            InputAction::Quit
        );
        assert_eq!(
            handler.handle_key_event(ctrl_c, RunState::GameOver),
            InputAction::Quit
        );
    }

    #[test]
    fn test_unmapped_keys_do_nothing() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('x')), RunState::Running),
            InputAction::None
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::F(5)), RunState::GameOver),
            InputAction::None
        );
    }
}
