//! Position-based distance constraints between two masses.

use crate::float::Float;
use crate::mass::Mass;
use crate::vec::Vec;

/// A distance constraint between two masses of the same body.
///
/// Endpoints are indices into the owning body's mass slice. The rest
/// length and the orientation `axis` are captured once, at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<V: Vec> {
    pub a: usize,
    pub b: usize,
    pub rest_length: V::Scalar,
    /// Unit vector from `a` to `b` at construction; zero if they coincided.
    pub axis: V,
}

impl<V: Vec> Spring<V> {
    /// Connect `a` and `b` at their current distance.
    pub fn between(a: usize, b: usize, masses: &[Mass<V>]) -> Self {
        let delta = masses[b].position - masses[a].position;
        Spring {
            a,
            b,
            rest_length: delta.length(),
            axis: delta.normalize(),
        }
    }

    /// Current endpoint distance.
    pub fn length(&self, masses: &[Mass<V>]) -> V::Scalar {
        masses[self.a].position.distance(masses[self.b].position)
    }

    /// Move both endpoints toward the rest length.
    ///
    /// Each endpoint takes half of `stiffness * error`, in opposite
    /// directions, so the pair midpoint never moves. Velocities are left
    /// alone. Coincident endpoints have no direction and are skipped.
    pub fn apply_constraint(&self, masses: &mut [Mass<V>], stiffness: V::Scalar) {
        let delta = masses[self.b].position - masses[self.a].position;
        let dist = delta.length();
        if dist.is_near_zero(V::Scalar::from_f32(1e-10)) {
            return;
        }

        let error = dist - self.rest_length;
        let correction = delta.scale(error * stiffness * V::Scalar::half() / dist);

        masses[self.a].position = masses[self.a].position + correction;
        masses[self.b].position = masses[self.b].position - correction;
    }

    /// Undo a crossing: if `b` now lies behind `a` along the original axis,
    /// push both apart along that axis until they sit `rest_length` apart on it.
    ///
    /// Returns true when a correction was applied.
    pub fn avoid_exchange(&self, masses: &mut [Mass<V>]) -> bool {
        if self.axis == V::zero() {
            return false;
        }

        let delta = masses[self.b].position - masses[self.a].position;
        let along = delta.dot(self.axis);
        if along >= V::Scalar::zero() {
            return false;
        }

        let push = self.axis.scale((self.rest_length - along) * V::Scalar::half());
        masses[self.a].position = masses[self.a].position - push;
        masses[self.b].position = masses[self.b].position + push;
        true
    }
}
