//! Session management for the Ataxx GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::{AtaxxError, Result};
use crate::rules::{self, Move, Outcome};
use crate::{AIEngine, GameConfig, GameState, MoveResult, Player, Pos};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human against the computer
    PvE { human: Player },
    /// Two humans on one board (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::A }
    }
}

/// Computer search state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// One running game plus the click and computer-turn bookkeeping
pub struct Session {
    pub state: GameState,
    pub config: GameConfig,
    pub mode: GameMode,
    /// Piece picked by the first click of a move
    pub selected: Option<Pos>,
    pub outcome: Outcome,
    pub last_move: Option<Move>,
    pub move_count: usize,
    pub last_ai_result: Option<MoveResult>,
    pub ai_time: Option<Duration>,
    pub ai_state: AiState,
    pub message: Option<String>,
}

impl Session {
    pub fn new(config: GameConfig, mode: GameMode) -> Result<Self> {
        config.validate()?;
        let mut state = GameState::create(config.rows, config.cols)?;
        state.turn = config.first_player;

        Ok(Self {
            state,
            config,
            mode,
            selected: None,
            outcome: Outcome::InProgress,
            last_move: None,
            move_count: 0,
            last_ai_result: None,
            ai_time: None,
            ai_state: AiState::Idle,
            message: None,
        })
    }

    /// Start over with the same configuration and mode
    pub fn reset(&mut self) {
        // Dimensions were validated in `new`
        if let Ok(fresh) = Self::new(self.config, self.mode) {
            *self = fresh;
            info!(mode = ?self.mode, "new game");
        }
    }

    /// Start over in another mode
    pub fn restart(&mut self, mode: GameMode) {
        self.mode = mode;
        if let GameMode::PvE { human } = mode {
            self.config.human = human;
        }
        self.reset();
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Check if a human controls the side to move
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.state.turn == human,
            GameMode::PvP => true,
        }
    }

    /// Check if the computer controls the side to move
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.state.turn != human,
            GameMode::PvP => false,
        }
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Number of legal moves for the side to move
    pub fn mobility(&self) -> usize {
        self.state.legal_moves(self.state.turn).len()
    }

    /// Legal destinations of the selected piece
    pub fn selected_targets(&self) -> Vec<Pos> {
        match self.selected {
            Some(from) => rules::legal_moves_from(&self.state.board, from, self.state.turn)
                .targets_from(from)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Handle a click on `pos`.
    ///
    /// The first click selects one of the mover's pieces, a second click on
    /// it deselects, and a click on a legal destination plays the move.
    /// Anything else is ignored and keeps the selection.
    pub fn click(&mut self, pos: Pos) {
        if self.is_game_over() || self.is_ai_thinking() || !self.is_human_turn() {
            return;
        }

        let turn = self.state.turn;
        match self.selected {
            None => {
                let owned = self
                    .state
                    .board
                    .get(pos.row as i32, pos.col as i32)
                    .is_ok_and(|cell| cell.is_owned_by(turn));
                if owned {
                    self.selected = Some(pos);
                }
            }
            Some(from) if from == pos => self.selected = None,
            Some(from) => {
                if let Err(err) = self.try_move(from, pos) {
                    debug!(%err, "click ignored");
                }
            }
        }
    }

    /// Play `from -> to` for the side to move
    pub fn try_move(&mut self, from: Pos, to: Pos) -> Result<Move> {
        let player = self.state.turn;
        let mv = rules::legal_moves_from(&self.state.board, from, player)
            .find(from, to)
            .ok_or(AtaxxError::IllegalMove { from, to })?;

        self.execute_move(mv);
        Ok(mv)
    }

    /// Apply a confirmed move (human or computer), then settle the turn
    fn execute_move(&mut self, mv: Move) {
        let player = self.state.turn;
        if !self.state.apply_move(mv.from, mv.to, player) {
            warn!(%mv, ?player, "move rejected by the board");
            return;
        }

        self.last_move = Some(mv);
        self.move_count += 1;
        self.selected = None;
        self.message = None;
        debug!(%mv, ?player, "move played");

        self.outcome = self.state.game_outcome();
        if self.outcome.is_decided() {
            let (a, b) = rules::piece_counts(&self.state.board);
            info!(outcome = ?self.outcome, blue = a, green = b, "game over");
            return;
        }

        self.state.change_turn();
    }

    /// Launch the computer search on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        let state = self.state.clone();
        let player = state.turn;
        let config = self.config;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::from_config(&config);
            let result = engine.get_move_with_stats(&state, player);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the computer's move once the worker reports back
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("Computer search failed".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.ai_time = Some(elapsed);
            let best = move_result.best_move;
            self.last_ai_result = Some(move_result);

            match best {
                Some(mv) => self.execute_move(mv),
                None => self.message = Some("Computer found no move".to_string()),
            }
        }
    }

    /// Elapsed time of the running computer search
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}
