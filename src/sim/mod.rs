//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per `tick` call, no wall clock
//! - Stable iteration order (grid scanned row-major)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod oriented_box;
pub mod state;
pub mod tick;
pub mod vector;

pub use glam::Vec2;

pub use autopilot::autopilot_intent;
pub use collision::{Bounce, CollisionContact, bounce, select_contact, sweep_candidates, sweep_circle_box};
pub use input::{InputLatch, MoveIntent, TickInput};
pub use oriented_box::{Corner, Edge, OrientedBox};
pub use state::{Ball, Brick, BrickGrid, GameEvent, GameState, GameStatus, Paddle};
pub use tick::{PaddleContact, resolve_paddle, scan_bricks, tick};
pub use vector::Vec2Ext;
