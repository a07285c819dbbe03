//! Point masses with semi-implicit Euler integration.

use crate::collision::{BoxObstacle, Bounds};
use crate::config::SimConfig;
use crate::float::Float;
use crate::vec::{Planar, Vec};

/// A point mass: position, velocity and a contact flag.
///
/// Forces are folded straight into `velocity`; there is no separate
/// accumulator. Springs and collisions may also move `position` directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Mass<V: Vec> {
    pub position: V,
    pub velocity: V,
    /// Set by any collision response, consumed by the next integration step.
    pub contact: bool,
}

impl<V: Planar> Mass<V> {
    pub fn new(position: V) -> Self {
        Mass {
            position,
            velocity: V::zero(),
            contact: false,
        }
    }

    pub fn with_velocity(position: V, velocity: V) -> Self {
        Mass {
            position,
            velocity,
            contact: false,
        }
    }

    /// Add an instantaneous velocity change (input kicks, explosions).
    pub fn apply_impulse(&mut self, impulse: V) {
        self.velocity = self.velocity + impulse;
    }

    /// Advance one step:
    /// gravity, damping, contact friction, speed clamp, then position.
    ///
    /// A non-finite `dt` leaves the mass untouched. A velocity that turned
    /// non-finite is discarded rather than propagated into `position`.
    pub fn update_position(&mut self, dt: V::Scalar, config: &SimConfig<V>) {
        if !dt.is_finite() {
            return;
        }

        let mut velocity = self.velocity + config.gravity.scale(dt);
        velocity = velocity.scale(config.damping);
        if self.contact {
            velocity = velocity.scale(V::Scalar::one() - config.friction);
            self.contact = false;
        }
        velocity = velocity.clamp_length(config.max_vel);

        if !velocity.is_finite() {
            velocity = V::zero();
        }

        self.velocity = velocity;
        self.position = self.position + velocity.scale(dt);
    }

    /// Keep the mass outside a solid box.
    ///
    /// A mass strictly inside is moved to the face it reaches first along
    /// its line of motion (see [`BoxObstacle::exit`]); its velocity along
    /// that face normal is reflected if it points into the box.
    /// Returns true on contact.
    pub fn check_collision_with_box(
        &mut self,
        obstacle: &BoxObstacle<V::Scalar>,
        restitution: V::Scalar,
    ) -> bool {
        let Some((axis, edge, outward)) = obstacle.exit(self.position, self.velocity) else {
            return false;
        };

        self.position.set_component(axis, edge);
        let v = self.velocity.component(axis);
        if v * outward < V::Scalar::zero() {
            self.velocity.set_component(axis, -v * restitution);
        }
        self.contact = true;
        true
    }

    /// Keep the mass inside a container, axis by axis.
    /// Returns true on contact.
    pub fn collide_with_bounds(&mut self, bounds: &Bounds<V>, restitution: V::Scalar) -> bool {
        let zero = V::Scalar::zero();
        let mut hit = false;

        for axis in 0..V::DIM {
            let p = self.position.component(axis);
            let v = self.velocity.component(axis);
            let lo = bounds.min.component(axis);
            let hi = bounds.max.component(axis);

            if p < lo {
                self.position.set_component(axis, lo);
                if v < zero {
                    self.velocity.set_component(axis, -v * restitution);
                }
                hit = true;
            } else if p > hi {
                self.position.set_component(axis, hi);
                if v > zero {
                    self.velocity.set_component(axis, -v * restitution);
                }
                hit = true;
            }
        }

        if hit {
            self.contact = true;
        }
        hit
    }

    /// Push the mass out of a circle (sphere in 3D).
    ///
    /// The raw offset from the center is added to the velocity, unnormalized,
    /// then the mass is snapped onto the boundary along that offset. A mass
    /// sitting exactly on the center only receives the (zero) impulse.
    /// Returns true when the mass was inside.
    pub fn collide_with_circle(&mut self, center: V, radius: V::Scalar) -> bool {
        let offset = self.position - center;
        let distance = offset.length();
        if distance >= radius {
            return false;
        }

        self.velocity = self.velocity + offset;
        if !distance.is_near_zero(V::Scalar::from_f32(1e-10)) {
            self.position = center + offset.scale(radius / distance);
        }
        self.contact = true;
        true
    }
}
