//! Property tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use retro_pong::Tuning;
use retro_pong::sim::{Ball, Paddle, SimState, TickInput, hit_offset, resolve_wall, tick};

proptest! {
    /// Wall resolution leaves the ball inside the vertical bounds and
    /// preserves horizontal velocity and vertical speed magnitude.
    #[test]
    fn wall_reflection_preserves_speed(
        y in -200.0f32..700.0,
        vx in -20.0f32..20.0,
        vy in -20.0f32..20.0,
    ) {
        let mut ball = Ball {
            pos: Vec2::new(400.0, y),
            vel: Vec2::new(vx, vy),
            radius: 15.0,
        };
        resolve_wall(&mut ball, 500.0);

        prop_assert!(ball.pos.y >= ball.radius);
        prop_assert!(ball.pos.y <= 500.0 - ball.radius);
        prop_assert_eq!(ball.vel.x, vx);
        prop_assert_eq!(ball.vel.y.abs(), vy.abs());
    }

    /// The normalized impact offset never leaves [-1, 1], whatever the
    /// ball position.
    #[test]
    fn impact_offset_normalized(ball_y in -1000.0f32..1000.0, paddle_y in 0.0f32..406.0) {
        let ball = Ball {
            pos: Vec2::new(46.0, ball_y),
            vel: Vec2::new(-6.0, 0.0),
            radius: 15.0,
        };
        let paddle = Paddle {
            x: 28.0,
            y: paddle_y,
            vy: 0.0,
            width: 18.0,
            height: 94.0,
        };
        let offset = hit_offset(&ball, &paddle);
        prop_assert!((-1.0..=1.0).contains(&offset));
    }

    /// Whatever target the input provider supplies, the player paddle
    /// stays clamped to the playfield.
    #[test]
    fn player_paddle_clamped_for_any_target(
        seed in 0u64..u64::MAX,
        target in -10_000.0f32..10_000.0,
    ) {
        let mut state = SimState::new(seed, Tuning::default());
        let input = TickInput {
            target_y: Some(target),
            ..Default::default()
        };
        for _ in 0..60 {
            tick(&mut state, &input);
            prop_assert!(state.player.y >= 0.0);
            prop_assert!(state.player.y <= state.playfield.height - state.player.height);
            if state.ended() {
                break;
            }
        }
    }
}
