//! The per-frame driver: owns every body and runs the collision pipeline.

use crate::body::{Body, BodyId};
use crate::collision::{BoxObstacle, Bounds, Silhouette};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::observer::StepObserver;
use crate::vec::Planar;
use alloc::vec::Vec as AllocVec;

/// Owns the bodies and the static scene, and steps them in a fixed order.
///
/// Each [`World::step`] runs four stages, each over every body before the
/// next starts:
///
/// 1. integrate masses and refresh centers,
/// 2. push masses out of box obstacles, then into the bounds,
/// 3. body-body collisions against centers from stage 1,
/// 4. spring relaxation, then crossing avoidance if enabled.
pub struct World<V: Planar> {
    bodies: AllocVec<Body<V>>,
    obstacles: AllocVec<BoxObstacle<V::Scalar>>,
    bounds: Option<Bounds<V>>,
    config: SimConfig<V>,
    steps: u64,
}

impl<V: Planar> World<V> {
    pub fn new(config: SimConfig<V>) -> Self {
        World {
            bodies: AllocVec::new(),
            obstacles: AllocVec::new(),
            bounds: None,
            config,
            steps: 0,
        }
    }

    /// Take ownership of a body. Returns its id for later lookups.
    pub fn add_body(&mut self, body: Body<V>) -> BodyId {
        let id = body.id();
        tracing::debug!(%id, masses = body.mass_count(), springs = body.spring_count(), "body added");
        self.bodies.push(body);
        id
    }

    /// Remove a body, keeping the order of the others.
    pub fn remove_body(&mut self, id: BodyId) -> Result<Body<V>, SimError> {
        let index = self.index_of(id)?;
        tracing::debug!(%id, "body removed");
        Ok(self.bodies.remove(index))
    }

    pub fn add_obstacle(&mut self, obstacle: BoxObstacle<V::Scalar>) {
        self.obstacles.push(obstacle);
    }

    pub fn set_bounds(&mut self, bounds: Option<Bounds<V>>) {
        self.bounds = bounds;
    }

    fn index_of(&self, id: BodyId) -> Result<usize, SimError> {
        self.bodies
            .iter()
            .position(|b| b.id() == id)
            .ok_or(SimError::BodyNotFound { id })
    }

    pub fn body(&self, id: BodyId) -> Result<&Body<V>, SimError> {
        let index = self.index_of(id)?;
        Ok(&self.bodies[index])
    }

    pub fn body_mut(&mut self, id: BodyId) -> Result<&mut Body<V>, SimError> {
        let index = self.index_of(id)?;
        Ok(&mut self.bodies[index])
    }

    /// Bodies in insertion order, for the renderer.
    pub fn bodies(&self) -> impl Iterator<Item = &Body<V>> {
        self.bodies.iter()
    }

    pub fn obstacles(&self) -> &[BoxObstacle<V::Scalar>] { &self.obstacles }
    pub fn bounds(&self) -> Option<&Bounds<V>> { self.bounds.as_ref() }
    pub fn config(&self) -> &SimConfig<V> { &self.config }
    pub fn config_mut(&mut self) -> &mut SimConfig<V> { &mut self.config }
    pub fn body_count(&self) -> usize { self.bodies.len() }
    /// Completed calls to [`World::step`].
    pub fn steps(&self) -> u64 { self.steps }

    /// Same velocity change for every mass of every body.
    pub fn apply_impulse(&mut self, impulse: V) {
        for body in self.bodies.iter_mut() {
            body.apply_impulse(impulse);
        }
    }

    /// See [`Body::push_from`].
    pub fn push_from(&mut self, point: V, strength: V::Scalar) {
        for body in self.bodies.iter_mut() {
            body.push_from(point, strength);
        }
    }

    /// Advance the whole scene by `dt`.
    pub fn step<O: StepObserver>(&mut self, dt: V::Scalar, observer: &mut O) {
        let config = &self.config;

        for body in self.bodies.iter_mut() {
            body.update_masses(dt, config);
        }
        observer.on_integrate();

        let mut box_contacts = 0;
        for body in self.bodies.iter_mut() {
            for obstacle in self.obstacles.iter() {
                box_contacts += body.check_collision_with_box(obstacle, config.restitution);
            }
            if let Some(bounds) = &self.bounds {
                box_contacts += body.collide_with_bounds(bounds, config.restitution);
            }
        }
        observer.on_box_collisions(box_contacts);

        // Centers only change in stage 1, so one snapshot serves every body.
        let silhouettes: AllocVec<Silhouette<V>> =
            self.bodies.iter().map(|b| b.silhouette()).collect();
        let mut body_contacts = 0;
        for body in self.bodies.iter_mut() {
            body_contacts += body.check_collision_with_balls(&silhouettes);
        }
        observer.on_body_collisions(body_contacts);

        for body in self.bodies.iter_mut() {
            body.update_springs(config.stiffness);
        }
        if config.avoid_exchange {
            for body in self.bodies.iter_mut() {
                body.avoid_exchange();
            }
        }
        observer.on_springs();

        self.steps += 1;
        tracing::trace!(
            step = self.steps,
            bodies = self.bodies.len(),
            box_contacts,
            body_contacts,
            "world stepped"
        );
        observer.on_step_complete();
    }
}

impl<V: Planar> Default for World<V> {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
