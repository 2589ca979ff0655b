//! Per-frame simulation step
//!
//! The embedding driver calls [`tick`] once per display refresh; one call
//! is one frame, with no internal delta-time scaling. The step reads the
//! playfield fresh every call, so resizing between frames needs no
//! callback.

use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{paddle_contact, resolve_paddle, resolve_wall};
use super::state::{GameEvent, Side, SimState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Desired player paddle top y, from the pointer/touch provider.
    /// Unconstrained; the simulation clamps the paddle, not the target.
    /// Absent means "no new input": the paddle keeps easing toward the
    /// last target (last write wins).
    pub target_y: Option<f32>,
    /// Demo mode: derive the target from the ball instead of `target_y`
    pub autopilot: bool,
}

/// Advance the match by one frame
///
/// Returns the events this frame produced, in order. A finished match is
/// frozen: nothing moves, nothing scores, no events.
pub fn tick(state: &mut SimState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.ended() {
        return events;
    }

    state.time_ticks += 1;

    // Re-anchor paddles to the current playfield (resizable)
    state.player.x = state.tuning.paddle_margin;
    state.opponent.x = state.playfield.width - state.tuning.paddle_margin - state.opponent.width;

    // Ball movement
    state.ball.pos += state.ball.vel;

    // Smooth player paddle movement
    if input.autopilot {
        state.player_target = autopilot_target(state);
    } else if let Some(target) = input.target_y {
        state.player_target = target;
    }
    let diff = state.player_target - state.player.y;
    state.player.vy = diff * PLAYER_SMOOTHING;
    state.player.y += state.player.vy;
    state.player.clamp_to(state.playfield.height);

    // Wall collision (top and bottom)
    resolve_wall(&mut state.ball, state.playfield.height);

    // Paddle collision, player side then opponent side
    for side in [Side::Player, Side::Opponent] {
        let paddle = match side {
            Side::Player => state.player,
            Side::Opponent => state.opponent,
        };
        if paddle_contact(&state.ball, &paddle, side) {
            resolve_paddle(&mut state.ball, &paddle, side, state.tuning.ball_speed);
            events.push(GameEvent::PaddleHit { side });
            events.push(GameEvent::ScoreBump {
                side,
                hold_ticks: SCORE_BUMP_TICKS,
            });
        }
    }

    // Score detection: exiting left concedes to the opponent, exiting
    // right to the player. award_point re-centers the ball and runs the
    // win check synchronously.
    if state.ball.pos.x - state.ball.radius < 0.0 {
        state.award_point(Side::Opponent, &mut events);
    } else if state.ball.pos.x + state.ball.radius > state.playfield.width {
        state.award_point(Side::Player, &mut events);
    }

    // Scripted opponent
    drive_opponent(state);

    events
}

/// Noisy tracking target: ball y plus a bounded offset, resampled every
/// frame so the opponent visibly wobbles instead of locking on
pub(crate) fn opponent_target(ball_y: f32, rng: &mut Pcg32) -> f32 {
    ball_y + rng.random_range(-OPPONENT_NOISE..OPPONENT_NOISE)
}

/// Move the opponent paddle toward its noisy target
///
/// Speed toward the target is capped at the base paddle speed plus a
/// small per-frame jitter, then applied with damping to avoid snapping.
fn drive_opponent(state: &mut SimState) {
    let target = opponent_target(state.ball.pos.y, &mut state.rng);
    let diff = target - state.opponent.center_y();
    let cap = state.tuning.paddle_speed + state.rng.random_range(0.0..OPPONENT_JITTER);

    state.opponent.vy = diff.signum() * diff.abs().min(cap);
    state.opponent.y += state.opponent.vy * OPPONENT_DAMPING;
    state.opponent.clamp_to(state.playfield.height);
}

/// Demo-mode input provider
///
/// Tracks the ball with a slight lead, plus a slow oscillation so the
/// paddle does not settle into a perfect return loop. Deterministic: no
/// RNG, so autopilot matches replay tick-for-tick.
fn autopilot_target(state: &SimState) -> f32 {
    let lead = state.ball.pos.y + state.ball.vel.y * 4.0;
    let wobble = (state.time_ticks as f32 * 0.05).sin() * 12.0;
    lead + wobble - state.player.height / 2.0
}
