//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionContact, bounce, sweep_circle_box};
use super::input::MoveIntent;
use super::oriented_box::OrientedBox;
use crate::config::{FadeOut, GameConfig};
use crate::error::Result;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    /// Every brick has been removed from the grid
    Won,
    /// Ball fell past the paddle
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Things that happened during a tick, for sound and effects in the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallHit,
    PaddleHit,
    /// Ball was found inside the paddle and pushed back out
    PaddleNudge,
    BrickHit { row: usize, col: usize, points: u64 },
    BrickDestroyed { row: usize, col: usize },
    /// Destruction animation finished and the slot was emptied
    BrickRemoved { row: usize, col: usize },
    BallLost,
    Won,
    Lost,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Heading, scaled by `speed` each tick. Reflections flip components but
    /// never renormalize it.
    pub dir: Vec2,
    pub speed: f32,
    pub radius: f32,
    /// End of this tick's sweep (`pos + dir * speed`)
    pub future_pos: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, dir: Vec2, speed: f32, radius: f32) -> Self {
        Self {
            pos,
            dir,
            speed,
            radius,
            future_pos: pos + dir * speed,
        }
    }

    /// Spawn point for a fresh round
    pub fn spawn(config: &GameConfig, speed: f32) -> Self {
        let pos = Vec2::new(
            config.canvas_width / 2.0,
            config.canvas_height - config.ball_start_offset,
        );
        Self::new(pos, config.ball_direction, speed, config.ball_radius)
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.dir * self.speed
    }

    /// Compute the end of this tick's sweep; done once per tick, before any
    /// collision test
    pub fn project(&mut self) {
        self.future_pos = self.pos + self.velocity();
    }

    pub fn integrate(&mut self) {
        self.pos += self.velocity();
    }

    /// Has the ball's bottom edge reached the canvas bottom?
    pub fn is_lost(&self, canvas_height: f32) -> bool {
        self.pos.y + self.radius >= canvas_height
    }

    pub fn freeze(&mut self) {
        self.dir = Vec2::ZERO;
    }

    /// Bounce off the side walls and the ceiling. The floor is open.
    pub fn check_walls(&mut self, canvas_width: f32) -> bool {
        let mut hit = false;

        if self.pos.x + self.dir.x + self.radius >= canvas_width {
            self.pos.x = canvas_width - self.radius;
            self.dir.x = -self.dir.x;
            hit = true;
        }
        if self.pos.x - self.radius <= 0.0 {
            self.pos.x = self.radius;
            self.dir.x = -self.dir.x;
            hit = true;
        }
        if self.pos.y + self.dir.y - self.radius <= 0.0 {
            self.pos.y = self.radius;
            self.dir.y = -self.dir.y;
            hit = true;
        }

        hit
    }

    /// Swept test of this tick's motion against a box
    pub fn sweep(&self, target: &OrientedBox) -> Option<CollisionContact> {
        sweep_circle_box(self.pos, self.future_pos, self.radius, target)
    }

    /// Sweep against a box and bounce off it on contact
    pub fn collide(&mut self, target: &OrientedBox) -> bool {
        match self.sweep(target) {
            Some(contact) => {
                let result = bounce(&contact, self.future_pos, self.dir);
                log::trace!(
                    "contact {:?} at {:?} (t = {:.3})",
                    contact.edge,
                    contact.position,
                    contact.time_of_impact
                );
                self.pos = result.position;
                self.dir = result.direction;
                true
            }
            None => false,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub body: OrientedBox,
    /// Horizontal distance per tick
    pub step: f32,
    pub intent: MoveIntent,
}

impl Paddle {
    /// Centred paddle for a fresh round
    pub fn spawn(config: &GameConfig) -> Self {
        let pos = Vec2::new(
            (config.canvas_width - config.paddle_width) / 2.0,
            config.canvas_height - config.paddle_bottom_offset,
        );
        Self {
            body: OrientedBox::new(pos, config.paddle_width, config.paddle_height),
            step: config.paddle_step,
            intent: MoveIntent::None,
        }
    }

    /// Leftmost allowed x (a quarter of the paddle may hang off the canvas)
    pub fn min_x(&self) -> f32 {
        -self.body.width / 4.0
    }

    /// Rightmost allowed x
    pub fn max_x(&self, canvas_width: f32) -> f32 {
        canvas_width - self.body.width * 3.0 / 4.0
    }

    /// Move one step according to the latched intent
    pub fn update(&mut self, canvas_width: f32) {
        let x = self.body.pos.x;
        self.body.pos.x = match self.intent {
            MoveIntent::None => x,
            MoveIntent::Left => (x - self.step).max(self.min_x()).min(x),
            MoveIntent::Right => (x + self.step).min(self.max_x(canvas_width)).max(x),
        };
    }
}

/// A brick in the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub body: OrientedBox,
    /// Hit points left; also the palette index
    pub life: u8,
    /// Life reached zero; the fade-out is playing
    pub destroyed: bool,
    /// Fade-out finished; the slot is emptied on the next scan
    pub deleted: bool,
    pub alpha: f32,
    /// Fade-out ticks played so far
    pub frame_counter: u32,
}

impl Brick {
    pub fn new(body: OrientedBox, life: u8) -> Self {
        Self {
            body,
            life,
            destroyed: life == 0,
            deleted: false,
            alpha: 1.0,
            frame_counter: 0,
        }
    }

    /// Does the ball still bounce off this brick?
    pub fn is_solid(&self) -> bool {
        !self.destroyed
    }

    pub fn color_index(&self) -> usize {
        usize::from(self.life)
    }

    /// Take one hit. Returns the points scored, computed from the life the
    /// brick had before the hit; `None` if it was already destroyed.
    pub fn hit(&mut self, base_score: u64) -> Option<u64> {
        if self.destroyed {
            return None;
        }

        let points = base_score * u64::from(self.life);
        self.life = self.life.saturating_sub(1);
        if self.life == 0 {
            self.destroyed = true;
        }
        Some(points)
    }

    /// Advance the fade-out by one tick (no-op while alive)
    pub fn animate(&mut self, fade: &FadeOut) {
        if self.destroyed && !self.deleted {
            self.body.shrink(fade.shrink);
            self.alpha = (self.alpha - fade.alpha_step).max(0.0);
            self.frame_counter += 1;
        }

        if self.frame_counter >= fade.frames {
            self.deleted = true;
        }
    }
}

/// Fixed-size grid of optional bricks, indexed `[row][col]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    cells: Vec<Vec<Option<Brick>>>,
}

impl BrickGrid {
    /// Lay out bricks from the configured level
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;

        let cell = config.cell_size();
        let size = cell - Vec2::splat(config.brick_padding);

        let cells = config
            .layout
            .iter()
            .enumerate()
            .map(|(row, lives)| {
                lives
                    .iter()
                    .enumerate()
                    .map(|(col, &life)| {
                        (life != 0).then(|| {
                            let pos = Vec2::new(col as f32 * cell.x, row as f32 * cell.y);
                            Brick::new(OrientedBox::new(pos, size.x, size.y), life)
                        })
                    })
                    .collect()
            })
            .collect();

        Ok(Self { cells })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        self.cells.get(row)?.get(col)?.as_ref()
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Brick> {
        self.cells.get_mut(row)?.get_mut(col)?.as_mut()
    }

    /// Row-major walk over occupied slots
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Brick)> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, slot)| slot.as_ref().map(|brick| ((row, col), brick)))
        })
    }

    /// Raw slots, row by row
    pub fn slots(&self) -> &[Vec<Option<Brick>>] {
        &self.cells
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Vec<Option<Brick>>] {
        &mut self.cells
    }

    /// Occupied slots, including bricks still fading out
    pub fn remaining(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Advance every brick's fade-out by one tick
    pub fn animate(&mut self, fade: &FadeOut) {
        for brick in self.cells.iter_mut().flatten().flatten() {
            brick.animate(fade);
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    pub score: u64,
    pub status: GameStatus,
    /// Speed given to the ball on restart (follows live speed changes)
    pub ball_speed: f32,
    /// Occupied grid slots as of the last brick scan
    pub bricks_remaining: usize,
    /// Ticks processed since the last restart
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh game from a configuration
    pub fn new(config: &GameConfig) -> Result<Self> {
        let bricks = BrickGrid::from_config(config)?;
        Ok(Self::fresh(config, bricks, config.ball_speed))
    }

    /// Fresh `Playing` state around an already laid-out grid
    pub fn fresh(config: &GameConfig, bricks: BrickGrid, ball_speed: f32) -> Self {
        let bricks_remaining = bricks.remaining();
        Self {
            paddle: Paddle::spawn(config),
            ball: Ball::spawn(config, ball_speed),
            bricks,
            score: 0,
            status: GameStatus::Playing,
            ball_speed,
            bricks_remaining,
            time_ticks: 0,
            events: Vec::new(),
        }
    }
}
