//! Fixed per-frame simulation tick
//!
//! Core game loop that advances the state by one frame.

use super::oriented_box::OrientedBox;
use super::state::{Ball, BrickGrid, GameEvent, GameState, GameStatus};
use crate::config::GameConfig;

/// Outcome of testing the ball against the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleContact {
    /// Swept test found a contact and the ball bounced
    Hit,
    /// Ball was already inside the paddle and got pushed out above it
    Nudged,
    Miss,
}

/// Advance the game state by one frame
///
/// Order: paddle, ball loss test, sweep endpoint, walls, paddle, bricks,
/// integration, brick fade-out, status.
pub fn tick(state: &mut GameState, config: &GameConfig) {
    state.events.clear();

    if state.status.is_terminal() {
        return;
    }

    state.time_ticks += 1;

    state.paddle.update(config.canvas_width);

    let ball_lost = state.ball.is_lost(config.canvas_height);
    if ball_lost {
        state.ball.freeze();
        state.events.push(GameEvent::BallLost);
    }

    state.ball.project();

    if state.ball.check_walls(config.canvas_width) {
        state.events.push(GameEvent::WallHit);
    }

    match resolve_paddle(&mut state.ball, &state.paddle.body, config.paddle_english) {
        PaddleContact::Hit => state.events.push(GameEvent::PaddleHit),
        PaddleContact::Nudged => state.events.push(GameEvent::PaddleNudge),
        PaddleContact::Miss => {}
    }

    let points = scan_bricks(
        &mut state.ball,
        &mut state.bricks,
        config.brick_score,
        &mut state.events,
    );
    state.score += points;
    state.bricks_remaining = state.bricks.remaining();

    state.ball.integrate();

    state.bricks.animate(&config.fade_out);

    if state.bricks_remaining == 0 {
        state.status = GameStatus::Won;
        state.events.push(GameEvent::Won);
        log::info!("All bricks cleared, final score {}", state.score);
    } else if ball_lost {
        state.status = GameStatus::Lost;
        state.events.push(GameEvent::Lost);
        log::info!(
            "Ball lost with {} bricks left, final score {}",
            state.bricks_remaining,
            state.score
        );
    }
}

/// Bounce the ball off the paddle
///
/// The swept test handles normal hits. When it misses but the ball already
/// sits inside the paddle (a frame was skipped, or the paddle moved onto the
/// ball), the ball is lifted to rest on the paddle's top edge and sent back
/// up.
pub fn resolve_paddle(ball: &mut Ball, paddle: &OrientedBox, english: bool) -> PaddleContact {
    if ball.collide(paddle) {
        if english {
            // Steer by where the ball landed: -0.5 at the left end, +0.5 at the right
            ball.dir.x = (ball.pos.x - paddle.center().x) / paddle.width;
        }
        PaddleContact::Hit
    } else if paddle.contains_circle(ball.pos, ball.radius) {
        ball.pos.y = paddle.top() - ball.radius;
        ball.dir.y = -ball.dir.y;
        PaddleContact::Nudged
    } else {
        PaddleContact::Miss
    }
}

/// Test the ball against every live brick, row-major
///
/// Scores hits, empties slots whose fade-out has finished, and returns the
/// points earned this tick.
pub fn scan_bricks(
    ball: &mut Ball,
    bricks: &mut BrickGrid,
    base_score: u64,
    events: &mut Vec<GameEvent>,
) -> u64 {
    let mut points = 0;

    for (row, cells) in bricks.slots_mut().iter_mut().enumerate() {
        for (col, slot) in cells.iter_mut().enumerate() {
            let Some(brick) = slot.as_mut() else {
                continue;
            };

            if brick.is_solid() && ball.collide(&brick.body) {
                if let Some(earned) = brick.hit(base_score) {
                    points += earned;
                    events.push(GameEvent::BrickHit {
                        row,
                        col,
                        points: earned,
                    });
                    if brick.destroyed {
                        log::debug!("Brick ({row}, {col}) destroyed");
                        events.push(GameEvent::BrickDestroyed { row, col });
                    }
                }
            }

            if brick.deleted {
                log::debug!("Brick ({row}, {col}) removed");
                *slot = None;
                events.push(GameEvent::BrickRemoved { row, col });
            }
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::MoveIntent;
    use glam::Vec2;

    fn single_brick_config() -> GameConfig {
        GameConfig {
            layout: vec![vec![1]],
            ..Default::default()
        }
    }

    #[test]
    fn test_tick_moves_paddle_and_ball() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config).unwrap();
        state.paddle.intent = MoveIntent::Left;

        let ball_before = state.ball.pos;
        tick(&mut state, &config);

        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.paddle.body.pos.x, 243.0);
        assert!((state.ball.pos - (ball_before + Vec2::new(4.0, -6.0))).length() < 1e-4);
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn test_loss_freezes_ball() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config).unwrap();
        state.ball.pos = Vec2::new(100.0, config.canvas_height);
        state.ball.dir = Vec2::new(0.3, 0.7);

        tick(&mut state, &config);

        assert_eq!(state.status, GameStatus::Lost);
        assert_eq!(state.ball.dir, Vec2::ZERO);
        assert_eq!(state.ball.pos, Vec2::new(100.0, config.canvas_height));
        assert!(state.events.contains(&GameEvent::BallLost));
        assert!(state.events.contains(&GameEvent::Lost));

        // Terminal: further ticks change nothing
        let frozen = state.clone();
        tick(&mut state, &config);
        assert_eq!(state.ball, frozen.ball);
        assert_eq!(state.time_ticks, frozen.time_ticks);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_paddle_swept_hit_applies_english() {
        let config = GameConfig::default();
        let state = GameState::new(&config).unwrap();
        let paddle = state.paddle.body;

        // Falling straight onto the paddle, right of centre
        let mut ball = Ball::new(Vec2::new(325.0, 510.0), Vec2::new(0.0, 1.0), 10.0, 6.0);
        ball.project();
        let contact = resolve_paddle(&mut ball, &paddle, true);

        assert_eq!(contact, PaddleContact::Hit);
        assert!(ball.dir.y < 0.0);
        assert!((ball.dir.x - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_swept_hit_without_english() {
        let config = GameConfig::default();
        let state = GameState::new(&config).unwrap();

        let mut ball = Ball::new(Vec2::new(325.0, 510.0), Vec2::new(0.3, 1.0), 10.0, 6.0);
        ball.project();
        let contact = resolve_paddle(&mut ball, &state.paddle.body, false);

        assert_eq!(contact, PaddleContact::Hit);
        assert_eq!(ball.dir, Vec2::new(0.3, -1.0));
    }

    #[test]
    fn test_ball_inside_paddle_is_nudged_out() {
        let config = GameConfig::default();
        let state = GameState::new(&config).unwrap();
        let paddle = state.paddle.body;

        let mut ball = Ball::new(Vec2::new(300.0, 525.0), Vec2::new(0.4, 0.6), 10.0, 6.0);
        ball.project();
        let contact = resolve_paddle(&mut ball, &paddle, true);

        assert_eq!(contact, PaddleContact::Nudged);
        assert_eq!(ball.pos.y, paddle.top() - 6.0);
        assert_eq!(ball.dir, Vec2::new(0.4, -0.6));
    }

    #[test]
    fn test_brick_hit_scores_and_damages() {
        let config = GameConfig {
            layout: vec![vec![3]],
            ..Default::default()
        };
        let mut state = GameState::new(&config).unwrap();
        let bottom = state.bricks.get(0, 0).unwrap().body.bottom();

        // Just below the brick, heading up
        state.ball = Ball::new(Vec2::new(300.0, bottom + 10.0), Vec2::new(0.0, -1.0), 10.0, 6.0);
        tick(&mut state, &config);

        assert_eq!(state.score, 300);
        let brick = state.bricks.get(0, 0).unwrap();
        assert_eq!(brick.life, 2);
        assert!(!brick.destroyed);
        assert!(state.ball.dir.y > 0.0);
        assert!(state.events.contains(&GameEvent::BrickHit {
            row: 0,
            col: 0,
            points: 300
        }));
    }

    #[test]
    fn test_win_waits_for_fade_out() {
        let config = single_brick_config();
        let mut state = GameState::new(&config).unwrap();
        let bottom = state.bricks.get(0, 0).unwrap().body.bottom();
        state.ball = Ball::new(Vec2::new(300.0, bottom + 10.0), Vec2::new(0.0, -1.0), 10.0, 6.0);

        tick(&mut state, &config);
        assert!(state.events.contains(&GameEvent::BrickDestroyed { row: 0, col: 0 }));
        assert_eq!(state.score, 100);

        // Destroyed but still fading: counts as remaining
        for _ in 1..config.fade_out.frames {
            tick(&mut state, &config);
            assert_eq!(state.status, GameStatus::Playing);
            assert_eq!(state.bricks_remaining, 1);
        }

        tick(&mut state, &config);
        assert_eq!(state.status, GameStatus::Won);
        assert_eq!(state.bricks_remaining, 0);
        assert!(state.events.contains(&GameEvent::BrickRemoved { row: 0, col: 0 }));
        assert!(state.events.contains(&GameEvent::Won));
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_destroyed_brick_lets_ball_through() {
        let config = single_brick_config();
        let mut state = GameState::new(&config).unwrap();
        let brick = state.bricks.get_mut(0, 0).unwrap();
        brick.hit(100);
        let bottom = brick.body.bottom();

        state.ball = Ball::new(Vec2::new(300.0, bottom + 10.0), Vec2::new(0.0, -1.0), 10.0, 6.0);
        tick(&mut state, &config);

        assert!(state.ball.dir.y < 0.0);
        assert_eq!(state.score, 0);
    }
}
