//! Session Tick
//!
//! The game-mode state machine. One call advances one frame given the input
//! for that frame and a monotonic clock reading. Pauses are deadlines checked
//! here, so the host keeps rendering while they run.

use std::time::Duration;

use tracing::info;

use crate::config::RulesConfig;
use crate::game::events::GameEvent;
use crate::game::input::InputFrame;
use crate::game::state::{GameState, Judgement, Mode, SessionEnd};
use crate::game::timing::{elapsed_secs, evaluate, halve_cap, roll_ready_threshold};
use crate::TICK_RATE;

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick
    pub events: Vec<GameEvent>,
    /// Set on the tick the player leaves the game over screen
    pub session_end: Option<SessionEnd>,
}

/// Run one tick.
///
/// # Arguments
///
/// * `state` - The session state (will be mutated)
/// * `input` - Input captured since the previous tick
/// * `now` - Monotonic clock reading; only differences between readings matter
/// * `rules` - Gameplay constants
///
/// Once the session has ended every further tick is a no-op.
pub fn tick(
    state: &mut GameState,
    input: InputFrame,
    now: Duration,
    rules: &RulesConfig,
) -> TickResult {
    let mut result = TickResult::default();

    if state.is_ended() {
        return result;
    }

    state.frame += 1;
    let pressed = input.action_pressed();

    match state.mode {
        Mode::Menu => tick_menu(state, pressed),
        Mode::Approach => tick_approach(state, now, rules),
        Mode::Ready => tick_ready(state, pressed, now, rules),
        Mode::Start => tick_start(state, pressed, now, rules),
        Mode::Resolve => match state.judgement {
            Judgement::Win => tick_round_won(state, now, rules),
            Judgement::Loss => tick_game_over(state, pressed),
        },
        Mode::FalseStart => tick_false_start(state, now, rules),
    }

    result.events = state.take_events();
    result.session_end = state.ended;
    result
}

/// Title screen: the first press starts the approach.
fn tick_menu(state: &mut GameState, pressed: bool) {
    if pressed {
        state.set_mode(Mode::Approach);
    }
}

/// Walk both fighters; on reaching the mark, roll the ready window.
fn tick_approach(state: &mut GameState, now: Duration, rules: &RulesConfig) {
    for _ in 0..rules.approach_substeps {
        state.attacker_x += rules.approach_step;
        state.opponent_x -= rules.approach_step;
    }

    if state.attacker_x >= rules.approach_target {
        state.ready_threshold = roll_ready_threshold(&mut state.rng, rules);
        state.mode_entered_at = now;
        let event = GameEvent::ready_rolled(state.frame, state.ready_threshold);
        state.push_event(event);
        state.set_mode(Mode::Ready);
    }
}

/// Wait out the ready window. A press here always wins over the cue.
fn tick_ready(state: &mut GameState, pressed: bool, now: Duration, rules: &RulesConfig) {
    if pressed {
        state.pause_until = Some(now + rules.pause);
        state.set_mode(Mode::FalseStart);
        return;
    }

    if elapsed_secs(state.mode_entered_at, now) > state.ready_threshold {
        state.mode_entered_at = now;
        state.set_mode(Mode::Start);
    }
}

/// Measure the reaction and judge it against the cap.
fn tick_start(state: &mut GameState, pressed: bool, now: Duration, rules: &RulesConfig) {
    if !pressed {
        return;
    }

    let latency = elapsed_secs(state.mode_entered_at, now);
    state.reaction_latency = latency;

    let judgement = if evaluate(latency, state.win_cap) {
        Judgement::Win
    } else {
        Judgement::Loss
    };
    let event = GameEvent::reaction_measured(state.frame, latency, state.win_cap, judgement);
    state.push_event(event);

    match judgement {
        Judgement::Win => {
            state.score += rules.win_award;
            state.pause_until = Some(now + rules.pause);
            info!(
                "Round won: {:.3}s within {:.3}s, score {}",
                latency, state.win_cap, state.score
            );
            let event = GameEvent::round_won(state.frame, state.score, halve_cap(state.win_cap));
            state.push_event(event);
            state.judgement = Judgement::Win;
            state.set_mode(Mode::Resolve);
        }
        Judgement::Loss => enter_game_over(state),
    }
}

/// Hold the win screen, then start a harder round.
fn tick_round_won(state: &mut GameState, now: Duration, rules: &RulesConfig) {
    let deadline = *state.pause_until.get_or_insert(now + rules.pause);
    if now < deadline {
        return;
    }

    state.pause_until = None;
    state.win_cap = halve_cap(state.win_cap);
    state.reaction_latency = 0.0;
    state.reset_positions(rules);
    state.set_mode(Mode::Approach);
}

/// Hold the penalty screen, then count the strike.
fn tick_false_start(state: &mut GameState, now: Duration, rules: &RulesConfig) {
    let deadline = *state.pause_until.get_or_insert(now + rules.pause);
    if now < deadline {
        return;
    }

    state.pause_until = None;
    state.false_starts += 1;
    info!("False start {} of {}", state.false_starts, rules.false_start_limit);
    let event = GameEvent::false_start(state.frame, state.false_starts);
    state.push_event(event);

    if state.false_starts >= rules.false_start_limit {
        enter_game_over(state);
    } else {
        state.reset_positions(rules);
        state.set_mode(Mode::Approach);
    }
}

/// Game over screen: a press ends the session.
fn tick_game_over(state: &mut GameState, pressed: bool) {
    if !pressed {
        return;
    }

    let outcome = if state.beats_high_score() {
        SessionEnd::SaveAndExit { score: state.score }
    } else {
        SessionEnd::Exit
    };
    info!("Session ended: {:?}", outcome);
    state.ended = Some(outcome);
    let event = GameEvent::session_ended(state.frame, outcome);
    state.push_event(event);
}

fn enter_game_over(state: &mut GameState) {
    info!("Game over: score {}, high score {}", state.score, state.high_score);
    state.judgement = Judgement::Loss;
    let event = GameEvent::game_over(state.frame, state.score, state.high_score);
    state.push_event(event);
    state.set_mode(Mode::Resolve);
}

/// Clock reading for `frame` on a simulated fixed-rate clock.
pub fn frame_clock(frame: u64) -> Duration {
    Duration::from_nanos(frame * 1_000_000_000 / TICK_RATE as u64)
}

/// Replay a session from recorded inputs on the simulated clock.
///
/// Input `i` is applied at `frame_clock(i)`. Stops early when the session
/// ends. Returns the final state and every event.
pub fn replay_session(
    seed: u64,
    high_score: u32,
    inputs: &[InputFrame],
    rules: &RulesConfig,
) -> (GameState, Vec<GameEvent>) {
    let mut state = GameState::new(high_score, seed, rules);
    let mut all_events = Vec::new();

    for (i, input) in inputs.iter().enumerate() {
        let result = tick(&mut state, *input, frame_clock(i as u64), rules);
        all_events.extend(result.events);

        if result.session_end.is_some() {
            break;
        }
    }

    (state, all_events)
}
