//! Frame-stepped game facade
//!
//! The host (render/input layer) owns a [`Game`], calls [`Game::advance`] once
//! per animation frame, forwards player input through the setters, and reads
//! the result back through [`Game::state`] or [`Game::snapshot`].

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::sim::{BrickGrid, GameEvent, GameState, GameStatus, MoveIntent, TickInput, tick};
use crate::snapshot::Snapshot;

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    /// Grid as laid out from the level, cloned on every restart
    initial_bricks: BrickGrid,
    state: GameState,
}

impl Game {
    /// Validate the configuration and start a fresh game
    pub fn new(config: GameConfig) -> Result<Self> {
        let initial_bricks = BrickGrid::from_config(&config)?;
        let state = GameState::fresh(&config, initial_bricks.clone(), config.ball_speed);
        log::info!(
            "New game: {}x{} canvas, {} bricks",
            config.canvas_width,
            config.canvas_height,
            state.bricks_remaining
        );

        Ok(Self {
            config,
            initial_bricks,
            state,
        })
    }

    /// Run one physics/state tick. Returns the events it produced.
    pub fn advance(&mut self) -> &[GameEvent] {
        tick(&mut self.state, &self.config);
        &self.state.events
    }

    /// Latch the paddle's move intent for the following ticks
    pub fn set_move_intent(&mut self, intent: MoveIntent) {
        self.state.paddle.intent = intent;
    }

    /// Change the ball's scalar speed, now and for balls spawned by restart
    pub fn set_ball_speed(&mut self, speed: f32) -> Result<()> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(GameError::InvalidArgument(format!(
                "ball speed must be finite and non-negative, got {speed}"
            )));
        }

        self.state.ball_speed = speed;
        self.state.ball.speed = speed;
        Ok(())
    }

    /// Back to a fresh `Playing` state: paddle centred, new ball, full grid,
    /// score zero. The move intent and ball speed stay latched.
    pub fn restart(&mut self) {
        let intent = self.state.paddle.intent;
        self.state = GameState::fresh(
            &self.config,
            self.initial_bricks.clone(),
            self.state.ball_speed,
        );
        self.state.paddle.intent = intent;
        log::info!("Game restarted");
    }

    /// Apply a batch of latched input (see [`crate::sim::InputLatch`])
    ///
    /// Everything is validated before anything changes.
    pub fn apply_input(&mut self, input: &TickInput) -> Result<()> {
        if let Some(speed) = input.ball_speed {
            self.set_ball_speed(speed)?;
        }
        if let Some(intent) = input.move_intent {
            self.set_move_intent(intent);
        }
        if input.restart {
            self.restart();
        }
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.config)
    }
}
