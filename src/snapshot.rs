//! Read-only view of the game for the presentation layer
//!
//! Plain data, serializable to JSON for hosts on the other side of an FFI or
//! wasm boundary.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::sim::{Brick, GameState, GameStatus, OrientedBox};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSnapshot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&OrientedBox> for BoxSnapshot {
    fn from(body: &OrientedBox) -> Self {
        Self {
            x: body.pos.x,
            y: body.pos.y,
            width: body.width,
            height: body.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickSnapshot {
    #[serde(flatten)]
    pub body: BoxSnapshot,
    pub color_index: usize,
    /// Palette entry for `color_index`
    pub color: String,
    pub alpha: f32,
    pub deleted: bool,
}

impl BrickSnapshot {
    fn capture(brick: &Brick, palette: &[String]) -> Self {
        let color_index = brick.color_index();
        Self {
            body: BoxSnapshot::from(&brick.body),
            color_index,
            color: palette.get(color_index).cloned().unwrap_or_default(),
            alpha: brick.alpha,
            deleted: brick.deleted,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub paddle: BoxSnapshot,
    pub ball: BallSnapshot,
    /// `[row][col]`, `None` for empty slots
    pub bricks: Vec<Vec<Option<BrickSnapshot>>>,
    pub score: u64,
    pub status: GameStatus,
}

impl Snapshot {
    pub fn capture(state: &GameState, config: &GameConfig) -> Self {
        let bricks = state
            .bricks
            .slots()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|slot| {
                        slot.as_ref()
                            .map(|brick| BrickSnapshot::capture(brick, &config.palette))
                    })
                    .collect()
            })
            .collect();

        Self {
            paddle: BoxSnapshot::from(&state.paddle.body),
            ball: BallSnapshot {
                x: state.ball.pos.x,
                y: state.ball.pos.y,
                radius: state.ball.radius,
            },
            bricks,
            score: state.score,
            status: state.status,
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
