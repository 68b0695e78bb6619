//! Turn controller: turns UI events into moves and pushes results to a view.

use super::action::IllegalMoveError;
use super::invariants::assert_invariants;
use super::solver::Solver;
use super::state::GameState;
use super::types::{Board, Mode, Player};
use tracing::{debug, info, instrument, warn};

/// The player the computer controls in [`Mode::VsComputer`].
pub const COMPUTER: Player = Player::O;

/// Display collaborator notified whenever visible state changes.
pub trait GameView {
    /// Draws the full board.
    fn render(&mut self, board: &Board);

    /// Shows the status line: empty, `"<P> wins!"` or `"It's a draw!"`.
    fn show_status(&mut self, message: &str);

    /// Shows whose turn it is.
    fn show_turn(&mut self, player: Player);
}

/// Owns the game and drives it from cell activations, mode changes and resets.
#[derive(Debug, Clone)]
pub struct Controller<V> {
    state: GameState,
    solver: Solver,
    view: V,
}

impl<V: GameView> Controller<V> {
    /// Starts a fresh game and pushes it to the view.
    #[instrument(skip(view))]
    pub fn new(mode: Mode, view: V) -> Self {
        let mut controller = Self {
            state: GameState::new(mode),
            solver: Solver::new(),
            view,
        };
        controller.publish();
        controller
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Selected mode.
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// The view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Switches mode and starts over.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: Mode) {
        info!(%mode, "Mode selected");
        self.state = GameState::new(mode);
        self.publish();
    }

    /// Starts over in the current mode.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.state = self.state.reset();
        self.publish();
    }

    /// Handles a click on cell `index`.
    ///
    /// The current player marks the cell. In [`Mode::VsComputer`] the
    /// computer answers immediately if the game is still running. Illegal
    /// activations change nothing; the error is returned so callers can
    /// drop it.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn activate_cell(&mut self, index: usize) -> Result<(), IllegalMoveError> {
        let player = self.state.current_player();
        if let Err(e) = self.state.apply_move(index, player) {
            debug!(error = %e, "Ignoring cell activation");
            return Err(e);
        }

        if self.state.mode() == Mode::VsComputer
            && !self.state.is_over()
            && self.state.current_player() == COMPUTER
        {
            self.play_computer();
        }

        assert_invariants(self.state.board());
        self.publish();
        Ok(())
    }

    fn play_computer(&mut self) {
        let best = self.solver.best_move(self.state.board(), COMPUTER);
        let Some(index) = best.index else {
            warn!(score = best.score, "Solver returned no move on a running game");
            return;
        };
        debug!(index, score = best.score, "Computer move");
        if let Err(e) = self.state.apply_move(index, COMPUTER) {
            warn!(error = %e, index, "Solver move rejected");
        }
    }

    fn publish(&mut self) {
        self.view.render(self.state.board());
        self.view.show_status(&self.state.status().message());
        self.view.show_turn(self.state.current_player());
    }
}
