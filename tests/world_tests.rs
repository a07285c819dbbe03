use squish::{
    Body, Bounds, BoxObstacle, NoOpStepObserver, SimConfig, StepObserver, TracingObserver, Vec2,
    Vec3, World,
};

#[derive(Default)]
struct Recorder {
    stages: Vec<&'static str>,
    body_contacts: usize,
}

impl StepObserver for Recorder {
    fn on_integrate(&mut self) {
        self.stages.push("integrate");
    }
    fn on_box_collisions(&mut self, _contacts: usize) {
        self.stages.push("boxes");
    }
    fn on_body_collisions(&mut self, contacts: usize) {
        self.body_contacts += contacts;
        self.stages.push("bodies");
    }
    fn on_springs(&mut self) {
        self.stages.push("springs");
    }
    fn on_step_complete(&mut self) {
        self.stages.push("done");
    }
}

fn drop_ring_on_pillar(config: SimConfig<Vec2<f64>>, steps: usize) -> Vec<Vec2<f64>> {
    let mut world = World::new(config);
    let id = world.add_body(Body::ring(Vec2::new(100.0, 100.0), 8, 50.0));
    world.add_obstacle(BoxObstacle::from_corners(80.0, 200.0, 120.0, 240.0));

    let mut centers = Vec::with_capacity(steps);
    for _ in 0..steps {
        world.step(0.1, &mut NoOpStepObserver);
        centers.push(world.body(id).unwrap().center());
    }
    centers
}

#[test]
fn ring_comes_to_rest_on_box() {
    let centers = drop_ring_on_pillar(SimConfig::new(), 3000);

    let settled: Vec<f64> = centers[2000..].iter().map(|c| c.y).collect();
    let lo = settled.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = settled.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let last = *centers.last().unwrap();

    assert!(last.y <= 200.0, "center.y = {} fell past the box top", last.y);
    assert!(last.y > 140.0, "center.y = {} never reached the box", last.y);
    assert!((last.x - 100.0).abs() < 1.0, "ring slid off sideways to x = {}", last.x);
    assert!(hi - lo < 1.5, "center.y still oscillates over [{}, {}]", lo, hi);
}

#[test]
fn ring_stays_on_box_across_damping() {
    for damping in [0.9, 0.95, 0.97, 0.99] {
        let centers = drop_ring_on_pillar(SimConfig::new().with_damping(damping), 3000);
        let last = *centers.last().unwrap();
        assert!(
            last.y > 140.0 && last.y <= 200.0,
            "damping {}: center.y = {}",
            damping,
            last.y,
        );
        assert!((last.x - 100.0).abs() < 1.0, "damping {}: center.x = {}", damping, last.x);
    }
}

#[test]
fn stages_run_in_pipeline_order() {
    let mut world: World<Vec2<f32>> = World::default();
    world.add_body(Body::ring(Vec2::new(0.0, 0.0), 5, 10.0));

    let mut recorder = Recorder::default();
    world.step(0.1, &mut recorder);
    world.step(0.1, &mut recorder);

    let one = ["integrate", "boxes", "bodies", "springs", "done"];
    let expected: Vec<&str> = one.iter().chain(one.iter()).cloned().collect();
    assert_eq!(recorder.stages, expected);
}

#[test]
fn single_body_never_collides_with_itself() {
    let config = SimConfig::new().with_gravity(Vec2::new(0.0f64, 0.0));
    let mut world = World::new(config);
    world.add_body(Body::ring(Vec2::new(0.0, 0.0), 10, 30.0));

    let mut recorder = Recorder::default();
    for _ in 0..20 {
        world.step(0.1, &mut recorder);
    }
    assert_eq!(recorder.body_contacts, 0);
}

#[test]
fn overlapping_bodies_push_apart() {
    let config = SimConfig::new().with_gravity(Vec2::new(0.0f64, 0.0));
    let mut world = World::new(config);
    let a = world.add_body(Body::ring(Vec2::new(0.0, 0.0), 12, 40.0));
    let b = world.add_body(Body::ring(Vec2::new(50.0, 0.0), 12, 40.0));

    let gap = |w: &World<Vec2<f64>>| {
        let ca = w.body(a).unwrap().center();
        let cb = w.body(b).unwrap().center();
        cb.x - ca.x
    };
    let start = gap(&world);

    let mut recorder = Recorder::default();
    for _ in 0..10 {
        world.step(0.1, &mut recorder);
    }

    assert!(recorder.body_contacts > 0);
    assert!(gap(&world) > start, "bodies should separate: {} -> {}", start, gap(&world));
}

#[test]
fn soft_cube_rests_on_floor_and_jumps() {
    let config = SimConfig::new()
        .with_gravity(Vec3::new(0.0f64, -9.8, 0.0))
        .with_avoid_exchange(true);
    let mut world = World::new(config);
    world.set_bounds(Some(Bounds::floor(0.0)));
    let id = world.add_body(Body::cuboid(Vec3::new(-5.0, 5.0, -5.0), Vec3::new(5.0, 15.0, 5.0)));

    let dt = 1.0 / 60.0;
    for _ in 0..300 {
        world.step(dt, &mut NoOpStepObserver);
    }

    let cube = world.body(id).unwrap();
    let resting = cube.center().y;
    assert!(resting > 3.0 && resting < 7.0, "resting center.y = {}", resting);
    for m in cube.masses() {
        assert!(m.position.y > -1.0, "corner sank into the floor: {:?}", m.position);
    }
    let top = [2, 3, 6, 7].iter().map(|&i| cube.masses()[i].position.y).fold(f64::INFINITY, f64::min);
    let bottom = [0, 1, 4, 5].iter().map(|&i| cube.masses()[i].position.y).fold(f64::NEG_INFINITY, f64::max);
    assert!(top > bottom + 8.0, "cube turned over: top {} bottom {}", top, bottom);

    // Spacebar-style kick.
    world.apply_impulse(Vec3::new(0.0, 30.0, 0.0));
    for _ in 0..20 {
        world.step(dt, &mut NoOpStepObserver);
    }
    assert!(world.body(id).unwrap().center().y > resting + 4.0);
}

#[test]
fn removed_body_stops_colliding() {
    let config = SimConfig::new().with_gravity(Vec2::new(0.0f64, 0.0));
    let mut world = World::new(config);
    let a = world.add_body(Body::ring(Vec2::new(0.0, 0.0), 8, 20.0));
    let b = world.add_body(Body::ring(Vec2::new(10.0, 0.0), 8, 20.0));

    world.remove_body(b).unwrap();
    let mut recorder = Recorder::default();
    world.step(0.1, &mut recorder);

    assert_eq!(recorder.body_contacts, 0);
    assert_eq!(world.bodies().count(), 1);
    assert!(world.body(a).is_ok());
    assert!(world.remove_body(b).is_err());
}

#[test]
fn tracing_observer_counts_steps() {
    let mut world: World<Vec2<f32>> = World::default();
    world.add_body(Body::ring(Vec2::new(0.0, 0.0), 4, 5.0));

    let mut observer = TracingObserver::new();
    for _ in 0..7 {
        world.step(0.1, &mut observer);
    }
    assert_eq!(observer.steps(), 7);
    assert_eq!(world.steps(), 7);
}
