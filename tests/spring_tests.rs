use squish::{Mass, Spring, Vec2, Vec3};
use squish::Vec as _;

fn pair<V: squish::Planar>(a: V, b: V) -> [Mass<V>; 2] {
    [Mass::new(a), Mass::new(b)]
}

#[test]
fn stretched_spring_converges_monotonically() {
    for stiffness in [0.05, 0.3, 0.7, 1.0] {
        let mut masses = pair(Vec2::new(0.0f64, 0.0), Vec2::new(5.0, 0.0));
        let spring = Spring::between(0, 1, &masses);
        masses[1].position = Vec2::new(20.0, 7.0);

        let mut error = (spring.length(&masses) - spring.rest_length).abs();
        for _ in 0..500 {
            spring.apply_constraint(&mut masses, stiffness);
            let next = (spring.length(&masses) - spring.rest_length).abs();
            assert!(next <= error + 1e-12, "error grew from {} to {} (stiffness {})", error, next, stiffness);
            error = next;
        }
        assert!(error < 1e-6, "stiffness {} left error {}", stiffness, error);
    }
}

#[test]
fn compressed_spring_converges() {
    let mut masses = pair(Vec3::new(0.0f64, 0.0, 0.0), Vec3::new(0.0, 0.0, 10.0));
    let spring = Spring::between(0, 1, &masses);
    masses[1].position = Vec3::new(0.0, 1.0, 1.0);

    for _ in 0..200 {
        spring.apply_constraint(&mut masses, 0.5);
    }
    assert!((spring.length(&masses) - 10.0).abs() < 1e-6);
}

#[test]
fn constraint_keeps_midpoint_and_velocity() {
    let mut masses = pair(Vec2::new(0.0f64, 0.0), Vec2::new(3.0, 4.0));
    let spring = Spring::between(0, 1, &masses);
    masses[0].velocity = Vec2::new(1.0, 2.0);
    masses[1].position = Vec2::new(9.0, -1.0);
    let mid = (masses[0].position + masses[1].position).scale(0.5);

    spring.apply_constraint(&mut masses, 0.8);

    let after = (masses[0].position + masses[1].position).scale(0.5);
    assert!(after.distance(mid) < 1e-12);
    assert_eq!(masses[0].velocity, Vec2::new(1.0, 2.0));
}

#[test]
fn rest_length_captured_at_construction() {
    let masses = pair(Vec2::new(1.0f32, 1.0), Vec2::new(4.0, 5.0));
    let spring = Spring::between(0, 1, &masses);
    assert!((spring.rest_length - 5.0).abs() < 1e-6);
    assert!((spring.axis.x - 0.6).abs() < 1e-6);
    assert!((spring.axis.y - 0.8).abs() < 1e-6);
}

#[test]
fn crossing_always_restores_ordering() {
    // Sweep crossed configurations over sideways offsets and depths.
    for step in 0..36 {
        let angle = step as f64 * core::f64::consts::PI / 18.0;
        for depth in [0.1, 1.0, 3.0, 12.0] {
            let mut masses = pair(Vec2::new(0.0f64, 0.0), Vec2::new(2.0, 0.0));
            let spring = Spring::between(0, 1, &masses);

            // b sits `depth` behind a along the axis, with some sideways offset.
            let sideways = Vec2::new(0.0, angle.sin() * 0.5);
            masses[0].position = Vec2::new(depth, 0.0) + sideways;
            masses[1].position = Vec2::new(0.0, 0.0);
            let mid = (masses[0].position + masses[1].position).scale(0.5);

            assert!(spring.avoid_exchange(&mut masses));

            let along = (masses[1].position - masses[0].position).dot(spring.axis);
            assert!(along > 0.0, "still crossed: along = {}", along);
            let after = (masses[0].position + masses[1].position).scale(0.5);
            assert!(after.distance(mid) < 1e-9);
        }
    }
}

#[test]
fn uncrossed_springs_are_left_alone() {
    let mut masses = pair(Vec2::new(0.0f64, 0.0), Vec2::new(2.0, 0.0));
    let spring = Spring::between(0, 1, &masses);
    masses[1].position = Vec2::new(0.5, 3.0);

    assert!(!spring.avoid_exchange(&mut masses));
    assert_eq!(masses[1].position, Vec2::new(0.5, 3.0));
}
