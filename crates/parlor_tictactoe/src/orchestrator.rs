//! Turn alternation between the human and the computer.

use crate::board::{Board, positions_legend};
use crate::console::Console;
use crate::error::GameError;
use crate::phases::{Outcome, Replay, TurnState};
use crate::players::Player;
use crate::selector::MoveError;
use crate::types::Marker;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

/// Shown when the human picks a cell that is already marked.
pub const OCCUPIED_MESSAGE: &str = "That cell is already taken, choose another one.";

/// Asked after every round.
pub const REPLAY_PROMPT: &str = "Play again? (X = yes, O = quit): ";

/// Shown when the replay answer is neither X nor O.
pub const UNRECOGNIZED_REPLAY_MESSAGE: &str =
    "Answer not recognized, starting another round anyway.";

/// Runs a match: rounds of human-then-computer turns on one reused board.
///
/// The human always moves first. The tie check only runs after the
/// human's move; with nine cells the human always makes the ninth move,
/// so a round can never stall on a full board.
#[derive(Debug)]
pub struct GameLoop<C> {
    board: Board,
    human: Player,
    computer: Player,
    console: C,
    state: TurnState,
    show_legend: bool,
}

impl<C: Console> GameLoop<C> {
    /// Creates a match where the human plays `human_marker` and the
    /// computer plays the other marker, drawing moves from `rng`.
    pub fn new(human_marker: Marker, rng: StdRng, console: C) -> Self {
        info!(%human_marker, "Creating game loop");
        Self {
            board: Board::new(),
            human: Player::human(human_marker),
            computer: Player::random_agent(human_marker.opponent(), rng),
            console,
            state: TurnState::AwaitingHumanMove,
            show_legend: true,
        }
    }

    /// Whether to print the 1-9 legend under every board.
    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    /// The board in its current state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Gives the console back, e.g. to inspect scripted output.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays rounds until the player quits. Returns how many were played.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<u32, GameError> {
        self.console.say(&format!(
            "Tic-Tac-Toe: you play {}, the computer plays {}.",
            self.human.marker(),
            self.computer.marker()
        ))?;
        if self.show_legend {
            self.console.say("Positions:")?;
            self.console.say(&positions_legend())?;
        }

        let mut rounds = 0;
        loop {
            let outcome = self.play_round()?;
            rounds += 1;
            info!(rounds, %outcome, "Round finished");

            let replay = Replay::parse(&self.console.read_line(REPLAY_PROMPT)?);
            debug!(%replay, "Replay answer");
            if !replay.continues() {
                return Ok(rounds);
            }
            if replay == Replay::Unrecognized {
                warn!("Unrecognized replay answer, continuing");
                self.console.say(UNRECOGNIZED_REPLAY_MESSAGE)?;
            }
            self.board.reset();
        }
    }

    /// Plays one round from `AwaitingHumanMove` to `RoundOver` on the current board.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<Outcome, GameError> {
        self.state = TurnState::AwaitingHumanMove;
        loop {
            self.state = match self.state {
                TurnState::AwaitingHumanMove => self.human_turn()?,
                TurnState::AwaitingComputerMove => self.computer_turn()?,
                TurnState::RoundOver(outcome) => {
                    self.console.say(&outcome.to_string())?;
                    return Ok(outcome);
                }
            };
        }
    }

    fn human_turn(&mut self) -> Result<TurnState, GameError> {
        let marker = self.human.marker();
        let mv = loop {
            let mv = self.human.get_move(&self.board, &mut self.console)?;
            match self.board.submit_move(marker, mv) {
                Ok(()) => break mv,
                Err(MoveError::CellOccupied(_)) => {
                    self.console.say(OCCUPIED_MESSAGE)?;
                }
                Err(e) => return Err(e.into()),
            }
        };
        self.render()?;

        if self.board.has_three_in_a_row(marker, mv) {
            Ok(TurnState::RoundOver(Outcome::Win(self.human.side())))
        } else if self.board.is_full() {
            Ok(TurnState::RoundOver(Outcome::Tie))
        } else {
            Ok(TurnState::AwaitingComputerMove)
        }
    }

    fn computer_turn(&mut self) -> Result<TurnState, GameError> {
        let marker = self.computer.marker();
        let mv = self.computer.get_move(&self.board, &mut self.console)?;
        self.board.submit_move(marker, mv)?;
        self.console.say(&format!("Computer move: {}", mv))?;
        self.render()?;

        if self.board.has_three_in_a_row(marker, mv) {
            Ok(TurnState::RoundOver(Outcome::Win(self.computer.side())))
        } else {
            Ok(TurnState::AwaitingHumanMove)
        }
    }

    fn render(&mut self) -> Result<(), GameError> {
        self.console.say(&self.board.to_string())?;
        if self.show_legend {
            self.console.say("Positions:")?;
            self.console.say(&positions_legend())?;
        }
        Ok(())
    }
}
