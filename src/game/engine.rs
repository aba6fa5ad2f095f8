use super::{
    action::Direction,
    config::GameConfig,
    state::{CollisionKind, Position, RenderState, RunState, Snake},
};
use crate::score::{HighScore, ScoreStore};
use log::warn;
use rand::Rng;
use std::time::Duration;

/// Name used when the player starts a run without entering one
pub const DEFAULT_PLAYER: &str = "Player";

/// Outcome of a single simulation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    /// Nothing happened: not running, or no direction in effect yet
    Skipped,
    /// The snake moved one cell without growing
    Moved,
    /// The snake moved onto the food and grew
    AteFood,
    /// The run ended on this step
    GameOver {
        final_score: u32,
        collision: CollisionKind,
    },
}

/// The game engine: owns all run state and advances it one tick at a time.
///
/// Timing lives in the host loop, which calls [`GameEngine::tick`] whenever
/// the accumulated elapsed time reaches [`GameEngine::tick_interval`].
/// Missed ticks are never caught up.
pub struct GameEngine<S: ScoreStore> {
    config: GameConfig,
    store: S,
    rng: rand::rngs::ThreadRng,
    snake: Snake,
    /// Direction in effect; None before the first input of a run
    direction: Option<Direction>,
    /// Latest valid direction request since the previous tick
    pending: Option<Direction>,
    food: Position,
    score: u32,
    speed: u32,
    run_state: RunState,
    player_name: String,
    high_score: HighScore,
}

impl<S: ScoreStore> GameEngine<S> {
    /// Create an engine with a fresh run in the Idle state. The high score
    /// is loaded from the store, migrating legacy formats as needed.
    pub fn new(config: GameConfig, store: S) -> Self {
        let high_score = store.load();
        let mut engine = Self {
            snake: Snake::new(Self::center(&config)),
            direction: None,
            pending: None,
            food: Position::new(0, 0),
            score: 0,
            speed: config.base_speed,
            run_state: RunState::Idle,
            player_name: DEFAULT_PLAYER.to_string(),
            high_score,
            rng: rand::thread_rng(),
            config,
            store,
        };
        engine.place_food();
        engine
    }

    /// Request a direction change. The request is ignored when it would
    /// reverse the snake onto its own neck, and otherwise queued: it takes
    /// effect on the next tick, with later valid requests replacing it.
    pub fn set_direction(&mut self, requested: Direction) {
        if let Some(current) = self.direction {
            if requested.is_opposite(current) {
                return;
            }
        }
        self.pending = Some(requested);
    }

    /// Begin a run with the given player name. Empty or whitespace names
    /// fall back to [`DEFAULT_PLAYER`]. No-op while a run is in progress.
    pub fn start(&mut self, player_name: &str) {
        if self.run_state == RunState::Running {
            return;
        }
        let trimmed = player_name.trim();
        self.player_name = if trimmed.is_empty() {
            DEFAULT_PLAYER.to_string()
        } else {
            trimmed.to_string()
        };
        self.run_state = RunState::Running;
    }

    /// Start a fresh run keeping the player name and high score
    pub fn restart(&mut self) {
        self.reset_run();
        self.run_state = RunState::Running;
    }

    /// Reset everything back to the start overlay
    pub fn return_to_menu(&mut self) {
        self.reset_run();
        self.run_state = RunState::Idle;
    }

    /// Advance the simulation by one step.
    ///
    /// Order of operations: apply the pending direction request, move the
    /// head one cell, end the run on wall or body contact, then grow on
    /// food or drop the tail. Self-collision excludes the current tail
    /// cell, which vacates on the same step.
    pub fn tick(&mut self) -> TickEvent {
        if self.run_state != RunState::Running {
            return TickEvent::Skipped;
        }

        if let Some(requested) = self.pending.take() {
            match self.direction {
                Some(current) if requested.is_opposite(current) => {}
                _ => self.direction = Some(requested),
            }
        }

        let Some(direction) = self.direction else {
            return TickEvent::Skipped;
        };

        let next_head = self.snake.head().moved_in_direction(direction);

        if !self.in_bounds(next_head) {
            return self.end_run(CollisionKind::Wall);
        }
        if self.snake.hits_body(next_head) {
            return self.end_run(CollisionKind::Body);
        }

        self.snake.push_head(next_head);

        if next_head == self.food {
            self.score += 1;
            self.record_high_score();
            if self.config.speed_increment_every != 0
                && self.score % self.config.speed_increment_every == 0
            {
                self.speed += self.config.speed_increment;
            }
            self.place_food();
            TickEvent::AteFood
        } else {
            self.snake.pop_tail();
            TickEvent::Moved
        }
    }

    /// Duration of one step at the current speed
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.speed.max(1) as f64)
    }

    /// Read-only snapshot for the renderer
    pub fn snapshot(&self) -> RenderState<'_> {
        RenderState {
            columns: self.config.columns,
            rows: self.config.rows,
            cells: self.snake.cells(),
            food: self.food,
            score: self.score,
            run_state: self.run_state,
            player_name: &self.player_name,
            high_score: &self.high_score,
        }
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn high_score(&self) -> &HighScore {
        &self.high_score
    }

    fn center(config: &GameConfig) -> Position {
        Position::new((config.columns / 2) as i32, (config.rows / 2) as i32)
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.config.columns as i32
            && pos.y >= 0
            && pos.y < self.config.rows as i32
    }

    fn reset_run(&mut self) {
        self.snake = Snake::new(Self::center(&self.config));
        self.direction = None;
        self.pending = None;
        self.score = 0;
        self.speed = self.config.base_speed;
        self.place_food();
    }

    fn end_run(&mut self, collision: CollisionKind) -> TickEvent {
        self.run_state = RunState::GameOver;
        TickEvent::GameOver {
            final_score: self.score,
            collision,
        }
    }

    /// Place the food on a uniformly random free cell by rejection
    /// sampling. When the snake covers the whole grid the food is left
    /// where it is, so the loop terminates even on tiny boards.
    fn place_food(&mut self) {
        if self.snake.len() >= self.config.columns * self.config.rows {
            return;
        }
        loop {
            let x = self.rng.gen_range(0..self.config.columns) as i32;
            let y = self.rng.gen_range(0..self.config.rows) as i32;
            let pos = Position::new(x, y);

            if !self.snake.contains(pos) {
                self.food = pos;
                return;
            }
        }
    }

    /// Record a new high score and persist it. Persistence is best-effort:
    /// losing the write is not fatal to the run.
    fn record_high_score(&mut self) {
        if self.score <= self.high_score.score {
            return;
        }
        self.high_score = HighScore {
            score: self.score,
            name: self.player_name.clone(),
        };
        if let Err(err) = self.store.save(&self.high_score) {
            warn!("failed to persist high score: {:#}", err);
        }
    }
}
