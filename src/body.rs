//! Soft bodies: masses held together by a complete graph of springs.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::collision::{BoxObstacle, Bounds, Silhouette};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::float::Float;
use crate::mass::Mass;
use crate::spring::Spring;
use crate::vec::{Planar, Vec, Vec3};
use alloc::vec::Vec as AllocVec;

/// Identity of a body.
///
/// Every constructed body draws a fresh id, so two bodies never share one
/// even when their shapes are identical. Body-body collision skips pairs
/// by id, never by comparing shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

static NEXT_BODY_ID: AtomicU32 = AtomicU32::new(1);

impl BodyId {
    fn fresh() -> Self {
        BodyId(NEXT_BODY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A deformable body: N masses and all N·(N−1)/2 springs between them.
///
/// There are no bending or angular constraints; the complete spring graph
/// alone keeps the shape.
///
/// Cloning yields a separate body with its own id.
#[derive(Debug)]
pub struct Body<V: Planar> {
    id: BodyId,
    masses: AllocVec<Mass<V>>,
    springs: AllocVec<Spring<V>>,
    center: V,
    radius: V::Scalar,
}

impl<V: Planar> Body<V> {
    /// N masses evenly spaced on a circle in the XY plane, mass `i` at
    /// angle `i * 2π / N`.
    ///
    /// Arguments are not checked; see [`Body::try_ring`].
    pub fn ring(center: V, segments: usize, radius: V::Scalar) -> Self {
        let two_pi = V::Scalar::two() * V::Scalar::pi();
        let n = V::Scalar::from_usize(segments);

        let points = (0..segments).map(|i| {
            let angle = V::Scalar::from_usize(i) * two_pi / n;
            center + V::from_xy(radius * angle.cos(), radius * angle.sin())
        });
        Self::from_points(points, radius)
    }

    /// Checked [`Body::ring`].
    pub fn try_ring(center: V, segments: usize, radius: V::Scalar) -> Result<Self, SimError> {
        if segments == 0 {
            return Err(SimError::InsufficientSegments);
        }
        if !radius.is_finite() || radius <= V::Scalar::zero() {
            return Err(SimError::InvalidRadius);
        }
        Ok(Self::ring(center, segments, radius))
    }

    /// Body over an arbitrary vertex set (a mesh, a polygon).
    ///
    /// `radius` is the collision radius other bodies see around the center.
    pub fn from_points<I>(points: I, radius: V::Scalar) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let masses: AllocVec<Mass<V>> = points.into_iter().map(Mass::new).collect();

        let n = masses.len();
        let mut springs = AllocVec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                springs.push(Spring::between(i, j, &masses));
            }
        }

        let mut body = Body {
            id: BodyId::fresh(),
            masses,
            springs,
            center: V::zero(),
            radius,
        };
        body.recompute_center();
        body
    }

    fn recompute_center(&mut self) {
        if self.masses.is_empty() {
            self.center = V::zero();
            return;
        }
        let mut sum = V::zero();
        for m in &self.masses {
            sum = sum + m.position;
        }
        self.center = sum.scale(V::Scalar::one() / V::Scalar::from_usize(self.masses.len()));
    }

    /// Integrate every mass, then refresh the center from the new positions.
    pub fn update_masses(&mut self, dt: V::Scalar, config: &SimConfig<V>) {
        for m in self.masses.iter_mut() {
            m.update_position(dt, config);
        }
        self.recompute_center();
    }

    /// Keep every mass out of a shared box. Returns the number of contacts.
    pub fn check_collision_with_box(
        &mut self,
        obstacle: &BoxObstacle<V::Scalar>,
        restitution: V::Scalar,
    ) -> usize {
        self.masses
            .iter_mut()
            .map(|m| m.check_collision_with_box(obstacle, restitution))
            .filter(|hit| *hit)
            .count()
    }

    /// Keep every mass inside a container. Returns the number of contacts.
    pub fn collide_with_bounds(&mut self, bounds: &Bounds<V>, restitution: V::Scalar) -> usize {
        self.masses
            .iter_mut()
            .map(|m| m.collide_with_bounds(bounds, restitution))
            .filter(|hit| *hit)
            .count()
    }

    /// Push this body's masses out of every other body.
    ///
    /// The silhouette carrying this body's id is skipped. Pairs whose
    /// bounding circles cannot touch are rejected on centers alone; otherwise
    /// each mass inside the other's radius gets the offset as an impulse and
    /// is snapped to the other's boundary. Returns the number of pushed masses.
    pub fn check_collision_with_balls(&mut self, others: &[Silhouette<V>]) -> usize {
        let own = self.silhouette();
        let mut contacts = 0;

        for other in others {
            if other.id == self.id || !own.overlaps(other) {
                continue;
            }
            for m in self.masses.iter_mut() {
                if m.collide_with_circle(other.center, other.radius) {
                    contacts += 1;
                }
            }
        }
        contacts
    }

    /// One relaxation sweep over every spring, in construction order.
    pub fn update_springs(&mut self, stiffness: V::Scalar) {
        for s in self.springs.iter() {
            s.apply_constraint(&mut self.masses, stiffness);
        }
    }

    /// Crossing-avoidance sweep over every spring.
    /// Run after [`Body::update_springs`]. Returns the number of corrected springs.
    pub fn avoid_exchange(&mut self) -> usize {
        let mut corrected = 0;
        for s in self.springs.iter() {
            if s.avoid_exchange(&mut self.masses) {
                corrected += 1;
            }
        }
        corrected
    }

    /// Add the same velocity change to every mass.
    pub fn apply_impulse(&mut self, impulse: V) {
        for m in self.masses.iter_mut() {
            m.apply_impulse(impulse);
        }
    }

    /// Kick every mass along its direction away from `point`.
    /// Negative strength pulls toward the point instead.
    pub fn push_from(&mut self, point: V, strength: V::Scalar) {
        for m in self.masses.iter_mut() {
            let away = (m.position - point).normalize();
            m.apply_impulse(away.scale(strength));
        }
    }

    pub fn silhouette(&self) -> Silhouette<V> {
        Silhouette {
            id: self.id,
            center: self.center,
            radius: self.radius,
        }
    }

    /// Copy positions into a flat XYZ buffer (Z = 0 for planar vectors).
    pub fn write_vertices(&self, out: &mut [V::Scalar]) -> Result<(), SimError> {
        let needed = self.masses.len() * 3;
        if out.len() < needed {
            return Err(SimError::VertexBufferTooSmall { needed, len: out.len() });
        }
        for (chunk, m) in out.chunks_exact_mut(3).zip(self.masses.iter()) {
            for (axis, slot) in chunk.iter_mut().enumerate() {
                *slot = if axis < V::DIM {
                    m.position.component(axis)
                } else {
                    V::Scalar::zero()
                };
            }
        }
        Ok(())
    }

    pub fn positions(&self) -> AllocVec<V> {
        self.masses.iter().map(|m| m.position).collect()
    }

    pub fn id(&self) -> BodyId { self.id }
    /// Mean mass position as of the last [`Body::update_masses`].
    pub fn center(&self) -> V { self.center }
    pub fn radius(&self) -> V::Scalar { self.radius }
    pub fn masses(&self) -> &[Mass<V>] { &self.masses }
    pub fn masses_mut(&mut self) -> &mut [Mass<V>] { &mut self.masses }
    pub fn springs(&self) -> &[Spring<V>] { &self.springs }
    pub fn mass_count(&self) -> usize { self.masses.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
}

impl<V: Planar> Clone for Body<V> {
    fn clone(&self) -> Self {
        Body {
            id: BodyId::fresh(),
            masses: self.masses.clone(),
            springs: self.springs.clone(),
            center: self.center,
            radius: self.radius,
        }
    }
}

impl<F: Float> Body<Vec3<F>> {
    /// Soft cube from its 8 corners. Corner order: the `min.z` face
    /// counter-clockwise from `min`, then the `max.z` face in the same order,
    /// matching [`crate::mesh::CUBE_INDICES`]. Collision radius is half
    /// the diagonal.
    pub fn cuboid(min: Vec3<F>, max: Vec3<F>) -> Self {
        let corners = [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(min.x, max.y, max.z),
        ];
        Self::from_points(corners, min.distance(max) * F::half())
    }
}
