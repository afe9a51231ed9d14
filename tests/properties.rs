use circle_arena::Tuning;
use circle_arena::sim::{
    FixedMovement, GameEvent, GameState, TickInput, resolve, resolve_step, tick,
};
use glam::Vec2;
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Vec2> {
    (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Vec2::new(x, y))
}

fn input() -> impl Strategy<Value = TickInput> {
    (
        any::<[bool; 5]>(),
        -200.0f32..1000.0,
        -200.0f32..800.0,
    )
        .prop_map(|(keys, px, py)| TickInput {
            up: keys[0],
            down: keys[1],
            left: keys[2],
            right: keys[3],
            fire: keys[4],
            pointer: Vec2::new(px, py),
        })
}

proptest! {
    #[test]
    fn resolve_same_point_is_zero(p in point(), speed in 0.0f32..5000.0) {
        prop_assert_eq!(resolve(p, p, speed), Vec2::ZERO);
    }

    #[test]
    fn resolve_has_speed_and_points_at_target(
        current in point(),
        target in point(),
        speed in 1.0f32..5000.0,
        dt in 0.001f32..0.1,
    ) {
        prop_assume!(current.distance(target) > 0.01);
        let v = resolve(current, target, speed);
        prop_assert!((v.length() - speed).abs() <= speed * 1e-4);
        let toward = (target - current).normalize();
        prop_assert!(v.normalize().dot(toward) > 0.9999);

        let stepped = resolve_step(current, target, speed, dt);
        prop_assert!((stepped.length() - speed * dt).abs() <= speed * dt * 1e-4);
    }

    #[test]
    fn aim_direction_is_unit(origin in point(), target in point()) {
        prop_assume!(origin.distance(target) > 0.01);
        let m = FixedMovement::aim(origin, target, 1000.0).unwrap();
        prop_assert!((m.direction.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn entities_stay_in_bounds(
        inputs in prop::collection::vec(input(), 1..200),
        dt in 0.001f32..0.1,
    ) {
        let mut state = GameState::new(Tuning::default());
        for input in &inputs {
            tick(&mut state, input, dt);
            prop_assert!(state.all_in_bounds());
        }
    }

    #[test]
    fn held_fire_spacing_matches_cooldown(frames in 1usize..400, dt in 0.001f32..0.05) {
        let mut state = GameState::new(Tuning {
            enemy_start: (780.0, 580.0),
            enemy_speed: 0.0,
            ..Default::default()
        });
        state.player.pos = Vec2::new(100.0, 300.0);
        let input = TickInput {
            fire: true,
            pointer: Vec2::new(100.0, 0.0),
            ..Default::default()
        };

        let mut shot_frames = Vec::new();
        for frame in 0..frames {
            tick(&mut state, &input, dt);
            let fired = state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::ProjectileFired { .. }));
            if fired {
                shot_frames.push(frame);
            }
        }
        prop_assert_eq!(shot_frames.first(), Some(&0));
        for pair in shot_frames.windows(2) {
            // Never early, and never a full frame late
            let gap = (pair[1] - pair[0]) as f32 * dt;
            prop_assert!(gap >= 0.1 - 2e-4, "gap {} s at dt {}", gap, dt);
            prop_assert!(gap < 0.1 + dt, "gap {} s at dt {}", gap, dt);
        }
    }
}
