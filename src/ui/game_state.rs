//! Game state management for the Connect Four GUI

use crate::board::Window;
use crate::config::{GameConfig, GameMode};
use crate::rules::{apply_move, check_outcome, Outcome};
use crate::{AIEngine, Board, Mark, MoveResult, Pos};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Games won per mark during this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub red: u32,
    pub yellow: u32,
}

impl Scores {
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::Red => self.red,
            Mark::Yellow => self.yellow,
        }
    }

    fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::Red => self.red += 1,
            Mark::Yellow => self.yellow += 1,
        }
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Mark,
    /// `Outcome::Win` or `Outcome::Draw` once the game has ended
    pub game_over: Option<Outcome>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Mark)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub scores: Scores,
    pub message: Option<String>,

    // AI engine configuration
    ai_mark: Mark,
    ai_depth: u32,
    ai_delay: Duration,
}

impl GameState {
    pub fn new(mode: GameMode, config: &GameConfig) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_turn: Mark::Red,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            scores: Scores::default(),
            message: None,
            ai_mark: config.ai_mark,
            ai_depth: config.search_depth,
            ai_delay: Duration::from_millis(config.ai_move_delay_ms),
        }
    }

    /// Start a new game on an empty board, keeping mode and scores
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = Mark::Red;
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    /// Mark the computer plays, if this is a Player vs AI game
    pub fn ai_mark(&self) -> Option<Mark> {
        match self.mode {
            GameMode::Pvai => Some(self.ai_mark),
            GameMode::Pvp => None,
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.ai_mark() != Some(self.current_turn)
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.ai_mark() == Some(self.current_turn)
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Cells of the winning four, once the game is won
    pub fn winning_line(&self) -> Option<Window> {
        match self.game_over {
            Some(Outcome::Win { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// Human-facing name of the side playing `mark`
    pub fn player_label(&self, mark: Mark) -> String {
        if self.ai_mark() == Some(mark) {
            "AI".to_string()
        } else {
            format!("Player {}", mark.number())
        }
    }

    /// Banner text once the game is over
    pub fn result_text(&self) -> Option<String> {
        match self.game_over? {
            Outcome::Win { mark, .. } => Some(format!("{} wins!!", self.player_label(mark))),
            Outcome::Draw => Some("It's a tie!".to_string()),
            Outcome::Ongoing => None,
        }
    }

    /// Attempt to drop a piece for the human player into `column`
    pub fn try_drop(&mut self, column: usize) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(column).map_err(|e| e.to_string())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, column: usize) -> Result<(), crate::MoveError> {
        let mark = self.current_turn;
        let board = apply_move(&self.board, column, mark)?;
        // apply_move succeeded, so the column had an open row
        let row = self.board.next_open_row(column).unwrap_or(0);
        let pos = Pos::new(row as u8, column as u8);

        self.board = board;
        self.move_history.push((pos, mark));
        self.last_move = Some(pos);
        self.message = None;

        log::debug!(
            "{} dropped in column {}\n{}",
            self.player_label(mark),
            column + 1,
            self.board
        );

        match check_outcome(&self.board, mark) {
            Outcome::Ongoing => {
                self.current_turn = mark.opponent();
            }
            outcome => {
                if let Outcome::Win { mark, .. } = outcome {
                    self.scores.record_win(mark);
                }
                self.game_over = Some(outcome);
                if let Some(text) = self.result_text() {
                    log::info!(
                        "{} (score {}-{})",
                        text,
                        self.scores.red,
                        self.scores.yellow
                    );
                }
            }
        }

        Ok(())
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board;
        let mark = self.current_turn;
        let depth = self.ai_depth;
        let delay = self.ai_delay;

        let (tx, rx) = channel();

        thread::spawn(move || {
            thread::sleep(delay);
            let mut engine = AIEngine::with_depth(depth);
            let result = engine.get_move_with_stats(&board, mark);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    log::error!("AI worker exited without a move");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(move_result) = result {
            self.ai_state = AiState::Idle;
            self.apply_ai_result(move_result);
        }
    }

    /// Play the column the engine picked
    fn apply_ai_result(&mut self, move_result: MoveResult) {
        let best_move = move_result.best_move;
        self.last_ai_result = Some(move_result);

        match best_move {
            Some(column) => {
                if let Err(e) = self.execute_move(column) {
                    log::error!("AI chose an unplayable column: {}", e);
                    self.message = Some(format!("AI error: {}", e));
                }
            }
            None => {
                self.message = Some("AI could not find a move".to_string());
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}
