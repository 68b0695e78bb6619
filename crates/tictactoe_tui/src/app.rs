//! Application state and key handling.

use crate::input::{digit_to_index, move_cursor};
use crossterm::event::KeyCode;
use derive_getters::Getters;
use tictactoe::{Board, Controller, GameState, GameView, Mode, Player, Position};
use tracing::{debug, instrument};

/// Latest values pushed by the controller, read back when drawing.
#[derive(Debug, Clone, Getters)]
pub struct TerminalView {
    /// Board as last rendered.
    board: Board,
    /// Status line.
    status: String,
    /// Player shown in the turn indicator.
    turn: Player,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self {
            board: Board::new(),
            status: String::new(),
            turn: Player::X,
        }
    }
}

impl GameView for TerminalView {
    fn render(&mut self, board: &Board) {
        self.board = board.clone();
    }

    fn show_status(&mut self, message: &str) {
        self.status = message.to_string();
    }

    fn show_turn(&mut self, player: Player) {
        self.turn = player;
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: Controller<TerminalView>,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application in `mode`.
    pub fn new(mode: Mode) -> Self {
        Self {
            controller: Controller::new(mode, TerminalView::default()),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// What the controller last pushed.
    pub fn view(&self) -> &TerminalView {
        self.controller.view()
    }

    /// The game being played.
    pub fn state(&self) -> &GameState {
        self.controller.state()
    }

    /// Selected mode.
    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True after the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one key press.
    ///
    /// Digits 1-9 mark a square, arrows move the cursor, Enter or Space
    /// marks the cursor square, `m` switches mode, `r` restarts and `q` or
    /// Esc quits.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.controller.reset(),
            KeyCode::Char('m') => {
                let mode = self.controller.mode().toggle();
                self.controller.select_mode(mode);
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.activate(self.cursor.to_index()),
            KeyCode::Char(c) => {
                if let Some(index) = digit_to_index(c) {
                    self.cursor = Position::from_index(index).unwrap_or(self.cursor);
                    self.activate(index);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    fn activate(&mut self, index: usize) {
        // Illegal clicks are ignored.
        if let Err(e) = self.controller.activate_cell(index) {
            debug!(error = %e, index, "Move ignored");
        }
    }
}
