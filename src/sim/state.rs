//! Match state and core simulation types
//!
//! Everything the step mutates lives in [`SimState`]; there are no
//! module-level globals and no ambient RNG. Construct one per match.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

/// Which side of the net an actor belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left paddle, driven by the input provider
    Player,
    /// Right paddle, driven by the scripted opponent
    Opponent,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }

    /// Horizontal sign of a serve travelling toward this side
    pub fn serve_sign(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Opponent => 1.0,
        }
    }
}

/// Current phase of the match
///
/// `Ended` is terminal: the step becomes a no-op and the recorded winner
/// never changes. Scores are increment-only, so the first side to reach
/// the win threshold is strictly ahead at the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Playing,
    Ended { winner: Side },
}

/// Signals emitted by a single simulation step
///
/// Consumed by presentation collaborators (renderer, scoreboard, audio);
/// the simulation owns no timers and keeps no event backlog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball deflected off a paddle
    PaddleHit { side: Side },
    /// Scoreboard bump visual; the presentation layer holds it for
    /// `hold_ticks` ticks and then clears it
    ScoreBump { side: Side, hold_ticks: u16 },
    /// A point was scored by `side`
    PointScored { side: Side },
    /// Win threshold reached; emitted exactly once per match
    MatchEnded { winner: Side },
}

/// The rectangular simulation area
///
/// Mutable between steps: an embedding driver may resize it at any time
/// and the next step picks the new bounds up (paddle x-positions and
/// clamp ranges are recomputed every frame).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle, anchored to one side of the playfield
///
/// `x` is recomputed from the playfield every frame; `y` is the mutable
/// coordinate. `vy` tracks the most recent movement and exists only to
/// impart spin on deflection.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            vy: 0.0,
            width,
            height,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Clamp to `[0, field_height - height]`
    pub fn clamp_to(&mut self, field_height: f32) {
        self.y = self.y.clamp(0.0, (field_height - self.height).max(0.0));
    }
}

/// The ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Increment-only score counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    pub(crate) fn bump(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }
}

/// Complete match state
///
/// Explicit value passed into and mutated by [`tick`](super::tick::tick);
/// two states built from the same seed and fed the same inputs stay
/// identical forever.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Match seed for reproducibility
    pub seed: u64,
    /// Geometry and speed tuning this match was built with
    pub tuning: Tuning,
    pub playfield: Playfield,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: MatchPhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Last target the input provider supplied (desired paddle top y).
    /// Last write wins; retained so the paddle keeps easing between
    /// input updates.
    pub(crate) player_target: f32,
    pub(crate) rng: Pcg32,
}

impl SimState {
    /// Create a new match with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let playfield = Playfield {
            width: tuning.playfield_width,
            height: tuning.playfield_height,
        };
        let paddle_y = playfield.height / 2.0 - tuning.paddle_height / 2.0;
        let player = Paddle::new(
            tuning.paddle_margin,
            paddle_y,
            tuning.paddle_width,
            tuning.paddle_height,
        );
        let opponent = Paddle::new(
            playfield.width - tuning.paddle_margin - tuning.paddle_width,
            paddle_y,
            tuning.paddle_width,
            tuning.paddle_height,
        );

        // Opening serve: random horizontal direction, wide vertical spread
        let vx = tuning.ball_speed * if rng.random::<bool>() { 1.0 } else { -1.0 };
        let vy = tuning.ball_speed * rng.random_range(-OPENING_VY_SPREAD..OPENING_VY_SPREAD);
        let ball = Ball {
            pos: playfield.center(),
            vel: Vec2::new(vx, vy),
            radius: tuning.ball_radius,
        };

        Self {
            seed,
            playfield,
            player,
            opponent,
            ball,
            score: Score::default(),
            phase: MatchPhase::Playing,
            time_ticks: 0,
            player_target: paddle_y,
            rng,
            tuning,
        }
    }

    pub fn ended(&self) -> bool {
        matches!(self.phase, MatchPhase::Ended { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::Ended { winner } => Some(winner),
            MatchPhase::Playing => None,
        }
    }

    /// Resize the playfield (external resize notifier)
    ///
    /// Paddle anchors and clamp ranges are re-derived on the next step.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.playfield = Playfield { width, height };
    }

    /// Re-center the ball and serve it toward `toward`
    ///
    /// Used after a point: the serve travels toward the side that
    /// conceded, at the fixed horizontal speed with a bounded random
    /// vertical component.
    pub(crate) fn reset_ball(&mut self, toward: Side) {
        self.ball.pos = self.playfield.center();
        self.ball.vel = Vec2::new(
            self.tuning.ball_speed * toward.serve_sign(),
            self.tuning.ball_speed * self.rng.random_range(-SERVE_VY_SPREAD..SERVE_VY_SPREAD),
        );
    }

    /// Award a point and run the win check
    ///
    /// Returns the events produced: always `PointScored`, plus
    /// `MatchEnded` the first time a score reaches the threshold. The
    /// winner is recorded here, at the transition; it is never re-derived
    /// from a later score comparison.
    pub(crate) fn award_point(&mut self, side: Side, events: &mut Vec<GameEvent>) {
        self.score.bump(side);
        events.push(GameEvent::PointScored { side });
        self.reset_ball(side.opposite());

        if !self.ended()
            && (self.score.player >= self.tuning.win_score
                || self.score.opponent >= self.tuning.win_score)
        {
            let winner = if self.score.player > self.score.opponent {
                Side::Player
            } else {
                Side::Opponent
            };
            self.phase = MatchPhase::Ended { winner };
            events.push(GameEvent::MatchEnded { winner });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_centered() {
        let tuning = Tuning::default();
        let state = SimState::new(42, tuning.clone());

        assert_eq!(state.ball.pos, state.playfield.center());
        assert_eq!(state.ball.vel.x.abs(), tuning.ball_speed);
        assert!(state.ball.vel.y.abs() <= tuning.ball_speed * OPENING_VY_SPREAD);
        assert_eq!(state.phase, MatchPhase::Playing);
        assert_eq!(state.score, Score::default());

        // Paddles anchored to their margins
        assert_eq!(state.player.x, tuning.paddle_margin);
        assert_eq!(
            state.opponent.x,
            tuning.playfield_width - tuning.paddle_margin - tuning.paddle_width
        );
    }

    #[test]
    fn test_paddle_clamp() {
        let mut paddle = Paddle::new(28.0, -50.0, 18.0, 94.0);
        paddle.clamp_to(500.0);
        assert_eq!(paddle.y, 0.0);

        paddle.y = 1000.0;
        paddle.clamp_to(500.0);
        assert_eq!(paddle.y, 500.0 - 94.0);
    }

    #[test]
    fn test_award_point_ends_match_once() {
        let mut state = SimState::new(7, Tuning::default());
        state.score.player = 9;

        let mut events = Vec::new();
        state.award_point(Side::Player, &mut events);
        assert_eq!(state.winner(), Some(Side::Player));
        assert!(events.contains(&GameEvent::MatchEnded {
            winner: Side::Player
        }));

        // A second scoring event must not re-trigger the transition or
        // change the recorded winner.
        let mut events = Vec::new();
        state.award_point(Side::Opponent, &mut events);
        assert_eq!(state.winner(), Some(Side::Player));
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, GameEvent::MatchEnded { .. }))
        );
    }

    #[test]
    fn test_reset_ball_direction() {
        let mut state = SimState::new(3, Tuning::default());
        state.ball.pos = Vec2::new(10.0, 10.0);

        state.reset_ball(Side::Player);
        assert_eq!(state.ball.pos, state.playfield.center());
        assert_eq!(state.ball.vel.x, -state.tuning.ball_speed);

        state.reset_ball(Side::Opponent);
        assert_eq!(state.ball.vel.x, state.tuning.ball_speed);
        assert!(state.ball.vel.y.abs() <= state.tuning.ball_speed * SERVE_VY_SPREAD);
    }
}
