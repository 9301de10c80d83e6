//! SamuraiGo Simulator
//!
//! Plays a headless session with a scripted bot on a simulated 60 Hz clock,
//! then replays the recorded inputs and checks the replay matches.
//!
//! Environment:
//! - `SAMURAI_SIM_SEED` (default 12345)
//! - `SAMURAI_SIM_REACTION_MS` bot reaction time (default 250)
//! - `SAMURAI_SIM_HIGH_SCORE` starting high score (default 0)
//! - `RUST_LOG` log filter (default `info`); `debug` also dumps every event

use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use samurai_go::{
    GameState, InputFrame, Mode, RulesConfig, SessionEnd, TICK_RATE, VERSION,
    game::{
        events::GameEvent,
        tick::{frame_clock, replay_session, tick},
    },
};

/// Upper bound on simulated frames (one hour of play).
const MAX_FRAMES: u64 = 60 * 60 * TICK_RATE as u64;

struct SimConfig {
    seed: u64,
    reaction: Duration,
    high_score: u32,
}

impl SimConfig {
    fn from_env() -> Result<Self> {
        Ok(Self {
            seed: env_or("SAMURAI_SIM_SEED", 12345)?,
            reaction: Duration::from_millis(env_or("SAMURAI_SIM_REACTION_MS", 250)?),
            high_score: env_or("SAMURAI_SIM_HIGH_SCORE", 0)?,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("invalid {key}: {value:?}")),
        Err(_) => Ok(default),
    }
}

/// Presses on the title screen, after `reaction` once the cue shows, and on
/// the game over screen. Never jumps the gun.
struct Bot {
    reaction: Duration,
}

impl Bot {
    fn decide(&self, state: &GameState, now: Duration) -> InputFrame {
        let press = match state.mode {
            Mode::Menu => true,
            Mode::Start => now.saturating_sub(state.mode_entered_at) >= self.reaction,
            Mode::Resolve => state.is_game_over(),
            Mode::Approach | Mode::Ready | Mode::FalseStart => false,
        };
        InputFrame::from_pressed(press)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("SamuraiGo Simulator v{}", VERSION);
    info!("Tick Rate: {} Hz", TICK_RATE);

    let sim = SimConfig::from_env()?;
    let rules = RulesConfig::default();

    info!("=== Starting Simulated Session ===");
    info!("Seed: {}, bot reaction: {:?}, high score: {}", sim.seed, sim.reaction, sim.high_score);

    let bot = Bot { reaction: sim.reaction };
    let mut state = GameState::new(sim.high_score, sim.seed, &rules);
    let mut inputs = Vec::new();
    let mut events: Vec<GameEvent> = Vec::new();
    let mut outcome = None;

    for frame in 0..MAX_FRAMES {
        let now = frame_clock(frame);
        let input = bot.decide(&state, now);
        inputs.push(input);

        let result = tick(&mut state, input, now, &rules);
        for event in &result.events {
            debug!("{}", serde_json::to_string(event)?);
        }
        events.extend(result.events);

        if let Some(end) = result.session_end {
            info!("Session ended at frame {}", frame);
            outcome = Some(end);
            break;
        }
    }

    let Some(outcome) = outcome else {
        bail!("session did not end within {} frames", MAX_FRAMES);
    };

    info!("=== Session Results ===");
    info!("Score: {}", state.score);
    info!("False starts: {}", state.false_starts);
    info!("Last reaction: {}s (cap {}s)", state.reaction_latency, state.win_cap);
    match outcome {
        SessionEnd::SaveAndExit { score } => info!("New high score {} would be saved", score),
        SessionEnd::Exit => info!("No new high score"),
    }
    info!("Exit code: {}", outcome.exit_code());

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let (replayed, replay_events) = replay_session(sim.seed, sim.high_score, &inputs, &rules);

    if replay_events != events || replayed.score != state.score {
        bail!(
            "replay diverged: {} events vs {} recorded",
            replay_events.len(),
            events.len()
        );
    }
    info!("DETERMINISM VERIFIED: {} events match", events.len());

    Ok(())
}
