//! Game configuration
//!
//! One immutable value handed to [`crate::Game::new`]: canvas size, tuning
//! constants, the brick palette and the static level layout. Loaded from JSON
//! or taken from [`crate::consts`] defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};

/// Destruction animation played by a brick once its life reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeOut {
    /// Ticks from destruction until the brick is marked deleted
    pub frames: u32,
    /// Alpha lost per tick (floored at 0)
    pub alpha_step: f32,
    /// Fraction of width/height lost per tick
    pub shrink: f32,
}

impl Default for FadeOut {
    fn default() -> Self {
        Self {
            frames: FADE_OUT_FRAMES,
            alpha_step: FADE_OUT_ALPHA_STEP,
            shrink: FADE_OUT_SHRINK,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,
    /// Distance from the canvas bottom to the paddle's top edge
    pub paddle_bottom_offset: f32,
    /// Steer the ball by where it lands on the paddle
    pub paddle_english: bool,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_direction: Vec2,
    /// Distance from the canvas bottom to the ball's spawn point
    pub ball_start_offset: f32,

    // === Bricks ===
    pub brick_padding: f32,
    /// Points per remaining hit point when a brick is struck
    pub brick_score: u64,
    pub fade_out: FadeOut,
    /// Colour per hit-point value
    pub palette: Vec<String>,
    /// Rows of cells: 0 = empty, 1.. = hit points
    pub layout: Vec<Vec<u8>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_english: true,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_direction: Vec2::from_array(BALL_DIRECTION),
            ball_start_offset: BALL_START_OFFSET,

            brick_padding: BRICK_PADDING,
            brick_score: BRICK_SCORE,
            fade_out: FadeOut::default(),
            palette: BRICK_PALETTE.iter().map(|c| c.to_string()).collect(),
            layout: BRICK_LAYOUT.iter().map(|row| row.to_vec()).collect(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON configuration (missing fields use defaults)
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of columns in the layout (0 if the layout is empty)
    pub fn columns(&self) -> usize {
        self.layout.first().map_or(0, Vec::len)
    }

    /// Size of one brick cell, before padding
    pub fn cell_size(&self) -> Vec2 {
        let columns = self.columns().max(1) as f32;
        Vec2::new(
            self.canvas_width / columns,
            self.canvas_height / 2.0 / columns,
        )
    }

    /// Reject configurations that cannot produce a playable game
    pub fn validate(&self) -> Result<()> {
        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("ball_radius", self.ball_radius)?;
        non_negative("paddle_step", self.paddle_step)?;
        non_negative("paddle_bottom_offset", self.paddle_bottom_offset)?;
        non_negative("ball_speed", self.ball_speed)?;
        non_negative("ball_start_offset", self.ball_start_offset)?;
        non_negative("brick_padding", self.brick_padding)?;
        non_negative("fade_out.alpha_step", self.fade_out.alpha_step)?;

        if !self.ball_direction.is_finite() {
            return Err(GameError::InvalidConfig(
                "ball_direction must be finite".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.fade_out.shrink) {
            return Err(GameError::InvalidConfig(format!(
                "fade_out.shrink must be in [0, 1), got {}",
                self.fade_out.shrink
            )));
        }
        if self.fade_out.frames == 0 {
            return Err(GameError::InvalidConfig(
                "fade_out.frames must be at least 1".into(),
            ));
        }

        self.validate_layout()
    }

    fn validate_layout(&self) -> Result<()> {
        let columns = self.columns();
        if columns == 0 {
            return Err(GameError::InvalidLayout(
                "layout must have at least one row and one column".into(),
            ));
        }

        for (row, cells) in self.layout.iter().enumerate() {
            if cells.len() != columns {
                return Err(GameError::InvalidLayout(format!(
                    "row {row} has {} cells, expected {columns}",
                    cells.len()
                )));
            }
            if let Some((col, &life)) = cells
                .iter()
                .enumerate()
                .find(|&(_, &life)| usize::from(life) >= self.palette.len())
            {
                return Err(GameError::InvalidLayout(format!(
                    "cell ({row}, {col}) has {life} hit points but the palette has {} colours",
                    self.palette.len()
                )));
            }
        }

        let padding = self.brick_padding;
        let cell = self.cell_size();
        if cell.x <= padding || cell.y <= padding {
            return Err(GameError::InvalidLayout(format!(
                "brick padding {padding} leaves no room in a {}x{} cell",
                cell.x, cell.y
            )));
        }

        Ok(())
    }
}

fn positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn non_negative(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig(format!(
            "{name} must be non-negative, got {value}"
        )))
    }
}
