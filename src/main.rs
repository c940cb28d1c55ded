//! Brick Sweep entry point
//!
//! Native builds run the simulation headless (no window) with the autopilot
//! holding the paddle, which is handy for tuning levels and configs. The
//! browser build is driven from `platform::web` instead.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use brick_sweep::sim::{GameEvent, autopilot_intent};
    use brick_sweep::{Game, GameConfig};

    /// Run a brick-breaker game headless and report the outcome
    #[derive(Debug, Parser)]
    #[command(name = "brick-sweep", version)]
    struct Args {
        /// JSON configuration (defaults are used for missing fields)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Stop after this many ticks even if the game is still running
        #[arg(short, long, default_value_t = 20_000)]
        ticks: u64,

        /// Override the ball speed
        #[arg(short, long)]
        speed: Option<f32>,

        /// Leave the paddle alone instead of using the autopilot
        #[arg(long)]
        manual: bool,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        let config = match &args.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        let mut game = Game::new(config).context("building game")?;
        if let Some(speed) = args.speed {
            game.set_ball_speed(speed).context("applying --speed")?;
        }

        log::info!("Brick Sweep (headless) starting...");

        let mut ticks = 0;
        while ticks < args.ticks && !game.status().is_terminal() {
            if !args.manual {
                let intent = autopilot_intent(game.state());
                game.set_move_intent(intent);
            }

            for event in game.advance() {
                match event {
                    GameEvent::BrickDestroyed { row, col } => {
                        log::info!("tick {ticks}: brick ({row}, {col}) destroyed")
                    }
                    other => log::debug!("tick {ticks}: {other:?}"),
                }
            }
            ticks += 1;
        }

        let state = game.state();
        println!(
            "status: {:?}, score: {}, bricks left: {}, ticks: {}",
            state.status, state.score, state.bricks_remaining, ticks
        );

        if args.json {
            println!("{}", game.snapshot().to_json()?);
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}
