//! Application state and key handling.

use crate::controller::GameController;
use crate::games::tictactoe::Position;
use crate::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use derive_getters::Getters;
use tracing::{debug, instrument};

use super::input::{digit_to_index, move_cursor};

/// Longest name accepted in the entry fields.
pub const MAX_NAME_LEN: usize = 24;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Two name fields and a start prompt.
    NameEntry,
    /// The board and status line.
    Board,
}

/// Name field with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// Player 1 (X).
    Player1,
    /// Player 2 (O).
    Player2,
}

impl NameField {
    fn toggle(self) -> Self {
        match self {
            NameField::Player1 => NameField::Player2,
            NameField::Player2 => NameField::Player1,
        }
    }

    fn slot(self) -> usize {
        match self {
            NameField::Player1 => 0,
            NameField::Player2 => 1,
        }
    }
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    controller: GameController,
    screen: Screen,
    names: [String; 2],
    focus: NameField,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates the app on the name-entry screen with names from `settings`.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        Self {
            controller: GameController::new("tui".to_string()),
            screen: Screen::NameEntry,
            names: [settings.player1().clone(), settings.player2().clone()],
            focus: NameField::Player1,
            cursor: Position::default(),
            should_quit: false,
        }
    }

    /// Applies one key press.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::NameEntry => self.handle_name_entry(key.code),
            Screen::Board => self.handle_board(key.code),
        }
    }

    fn handle_name_entry(&mut self, code: KeyCode) {
        let slot = self.focus.slot();
        match code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Backspace => {
                self.names[slot].pop();
            }
            KeyCode::Char(c) if self.names[slot].chars().count() < MAX_NAME_LEN => {
                self.names[slot].push(c);
            }
            KeyCode::Enter => self.start_game(),
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_board(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.activate_cell(self.cursor.to_index());
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(index) = digit_to_index(c) {
                    self.cursor = Position::from_index(index).unwrap_or(self.cursor);
                    self.controller.activate_cell(index);
                }
            }
            KeyCode::Char('r') => {
                debug!("Restarting with same players");
                self.controller.restart();
                self.cursor = Position::default();
            }
            KeyCode::Char('n') => self.screen = Screen::NameEntry,
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn start_game(&mut self) {
        let [name1, name2] = &self.names;
        self.controller.start(name1, name2);
        self.screen = Screen::Board;
        self.cursor = Position::default();
    }

    /// Status line for the board screen.
    pub fn status_text(&self) -> String {
        self.controller.status_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, GamePhase, Marker};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn blank_app() -> App {
        let mut app = App::new(&Settings::default());
        app.names = [String::new(), String::new()];
        app
    }

    #[test]
    fn test_name_entry_starts_game() {
        let mut app = blank_app();
        type_text(&mut app, "Ann");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Bobb");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen(), &Screen::Board);
        assert_eq!(app.controller().player_names(), Some(("Ann", "Bob")));
        assert_eq!(app.status_text(), "Ann's turn");
    }

    #[test]
    fn test_blank_names_fall_back_to_defaults() {
        let mut app = blank_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status_text(), "Player 1's turn");
    }

    #[test]
    fn test_cursor_and_enter_place_marker() {
        let mut app = blank_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.controller().cells()[0], Cell::Marked(Marker::X));
        assert_eq!(app.status_text(), "Player 2's turn");
    }

    #[test]
    fn test_digit_keys_play_and_finish() {
        let mut app = blank_app();
        type_text(&mut app, "Ann");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Bob");
        press(&mut app, KeyCode::Enter);

        // indices 0,1,4,2,8 are keys 1,2,5,3,9
        type_text(&mut app, "12539");
        assert_eq!(app.status_text(), "Ann wins!");
        assert_eq!(app.controller().phase(), GamePhase::Over);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.status_text(), "Ann's turn");
        assert_eq!(app.cursor(), &Position::Center);
    }

    #[test]
    fn test_new_names_screen_and_quit() {
        let mut app = blank_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen(), &Screen::NameEntry);
        assert!(!*app.should_quit());

        // 'q' is text on the name screen
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.names()[0], "q");
        press(&mut app, KeyCode::Esc);
        assert!(*app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = blank_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(*app.should_quit());
    }
}
