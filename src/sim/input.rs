//! Player input latched between ticks
//!
//! The host's input layer writes intents whenever its events fire; the core
//! reads them once at the start of the next tick.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Direction the player is holding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveIntent {
    #[default]
    None,
    Left,
    Right,
}

impl MoveIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveIntent::None => "NONE",
            MoveIntent::Left => "LEFT",
            MoveIntent::Right => "RIGHT",
        }
    }

    fn to_bits(self) -> u8 {
        self as u8
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            1 => MoveIntent::Left,
            2 => MoveIntent::Right,
            _ => MoveIntent::None,
        }
    }
}

impl fmt::Display for MoveIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveIntent {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NONE" => Ok(MoveIntent::None),
            "LEFT" => Ok(MoveIntent::Left),
            "RIGHT" => Ok(MoveIntent::Right),
            _ => Err(GameError::InvalidArgument(format!(
                "unknown move intent {s:?}, expected LEFT, RIGHT or NONE"
            ))),
        }
    }
}

/// Input commands applied before a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// New paddle intent (keeps the previous one when `None`)
    pub move_intent: Option<MoveIntent>,
    /// New scalar ball speed
    pub ball_speed: Option<f32>,
    /// Start a fresh game
    pub restart: bool,
}

/// Lock-free rendezvous for hosts that deliver input on another thread
///
/// One writer (the input thread) and one reader (the thread calling
/// `advance`). Every field is a single atomic, so a read never observes a
/// half-written value. Move intent stays latched; speed and restart are
/// one-shot and cleared by [`InputLatch::take`].
#[derive(Debug)]
pub struct InputLatch {
    intent: AtomicU8,
    speed_bits: AtomicU32,
    speed_pending: AtomicBool,
    restart: AtomicBool,
}

impl Default for InputLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl InputLatch {
    pub fn new() -> Self {
        Self {
            intent: AtomicU8::new(MoveIntent::None.to_bits()),
            speed_bits: AtomicU32::new(0),
            speed_pending: AtomicBool::new(false),
            restart: AtomicBool::new(false),
        }
    }

    pub fn set_move_intent(&self, intent: MoveIntent) {
        self.intent.store(intent.to_bits(), Ordering::Release);
    }

    pub fn set_ball_speed(&self, speed: f32) {
        self.speed_bits.store(speed.to_bits(), Ordering::Relaxed);
        self.speed_pending.store(true, Ordering::Release);
    }

    pub fn request_restart(&self) {
        self.restart.store(true, Ordering::Release);
    }

    pub fn move_intent(&self) -> MoveIntent {
        MoveIntent::from_bits(self.intent.load(Ordering::Acquire))
    }

    /// Collect everything latched since the last call
    pub fn take(&self) -> TickInput {
        let ball_speed = if self.speed_pending.swap(false, Ordering::Acquire) {
            Some(f32::from_bits(self.speed_bits.load(Ordering::Relaxed)))
        } else {
            None
        };

        TickInput {
            move_intent: Some(self.move_intent()),
            ball_speed,
            restart: self.restart.swap(false, Ordering::AcqRel),
        }
    }
}
