//! Retro Pong - a classic two-paddle Pong match as a headless simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//! - `tuning`: Data-driven match geometry and speeds
//!
//! Rendering, audio, and input capture are downstream collaborators: the
//! embedding driver feeds a [`sim::TickInput`] per frame and consumes the
//! [`sim::GameEvent`]s each tick returns.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Match configuration constants
pub mod consts {
    /// Tick rate the demo driver runs at (one `tick` per display refresh)
    pub const TICK_HZ: u32 = 60;
    /// Maximum catch-up ticks per driver frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield defaults
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 18.0;
    pub const PADDLE_HEIGHT: f32 = 94.0;
    /// Gap between a paddle and its side of the playfield
    pub const PADDLE_MARGIN: f32 = 28.0;
    /// Opponent paddle base speed cap
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_SPEED: f32 = 6.0;

    /// First score to reach this ends the match
    pub const WIN_SCORE: u32 = 10;

    /// Player paddle eases toward its target by this factor per tick
    pub const PLAYER_SMOOTHING: f32 = 0.22;
    /// Impact-offset multiplier on the outgoing vertical velocity
    pub const SPIN_OFFSET_FACTOR: f32 = 1.15;
    /// Fraction of the paddle's own velocity imparted to the ball
    pub const SPIN_PADDLE_FACTOR: f32 = 0.05;

    /// Opponent tracking error: target offset sampled in +/- this range
    pub const OPPONENT_NOISE: f32 = 30.0;
    /// Per-tick random addition to the opponent speed cap, in [0, this)
    pub const OPPONENT_JITTER: f32 = 1.2;
    /// Damping on opponent movement to avoid snapping
    pub const OPPONENT_DAMPING: f32 = 0.18;

    /// Serve vertical velocity spread, as a fraction of ball speed
    pub const SERVE_VY_SPREAD: f32 = 0.6;
    /// Opening serve uses a wider vertical spread
    pub const OPENING_VY_SPREAD: f32 = 0.75;

    /// How long the presentation layer should hold the scoreboard bump
    /// (150 ms at the 60 Hz tick rate)
    pub const SCORE_BUMP_TICKS: u16 = 9;
}
