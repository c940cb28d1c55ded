//! Brick Sweep - a brick-breaker game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (swept collision, entity lifecycle, game state)
//! - `game`: Frame-stepped facade driven by a host (render/input layer)
//! - `config`: Immutable game configuration
//! - `snapshot`: Read-only view of the state for presentation
//! - `platform`: Browser bindings (wasm32 only)

pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod sim;
pub mod snapshot;

pub use config::{FadeOut, GameConfig};
pub use error::{GameError, Result};
pub use game::Game;
pub use snapshot::Snapshot;

/// Default tuning values
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 12.5;
    /// Horizontal distance covered per tick while a move intent is held
    pub const PADDLE_STEP: f32 = 7.0;
    /// Distance from the canvas bottom to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 80.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 6.0;
    pub const BALL_SPEED: f32 = 10.0;
    pub const BALL_DIRECTION: [f32; 2] = [0.4, -0.6];
    /// Distance from the canvas bottom to the ball's spawn point
    pub const BALL_START_OFFSET: f32 = CANVAS_HEIGHT / 8.0 + 50.0;

    /// Bricks
    pub const BRICK_PADDING: f32 = 7.0;
    pub const BRICK_SCORE: u64 = 100;

    /// Destruction animation
    pub const FADE_OUT_FRAMES: u32 = 20;
    pub const FADE_OUT_ALPHA_STEP: f32 = 0.1;
    pub const FADE_OUT_SHRINK: f32 = 0.2;

    /// Colour per hit-point value (index 0 is shown while a brick fades out)
    pub const BRICK_PALETTE: [&str; 4] = ["#ff2ec2", "#5c2eff", "#2eff44", "#ffd92e"];

    /// Default level: 0 = empty, 1..=3 = hit points
    pub const BRICK_LAYOUT: [[u8; 9]; 8] = [
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 3, 0, 0, 2, 0, 0, 3, 0],
        [0, 0, 0, 1, 3, 1, 0, 0, 0],
        [0, 0, 1, 0, 0, 0, 1, 0, 0],
        [0, 2, 3, 0, 2, 0, 3, 2, 0],
        [0, 0, 1, 0, 0, 0, 1, 0, 0],
        [0, 0, 0, 1, 3, 1, 0, 0, 0],
        [0, 3, 0, 0, 2, 0, 0, 3, 0],
    ];
}
