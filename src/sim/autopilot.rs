//! Idle/demo mode: the computer steers the paddle

use super::input::MoveIntent;
use super::state::GameState;

/// Pick a move intent that keeps the paddle under the ball
///
/// Tracks where the ball will be after this tick rather than where it is, and
/// holds still once the paddle centre is within one step of the target so it
/// doesn't jitter.
pub fn autopilot_intent(state: &GameState) -> MoveIntent {
    let paddle = &state.paddle;
    let target_x = (state.ball.pos + state.ball.velocity()).x;
    let offset = target_x - paddle.body.center().x;

    if offset.abs() <= paddle.step {
        MoveIntent::None
    } else if offset < 0.0 {
        MoveIntent::Left
    } else {
        MoveIntent::Right
    }
}
