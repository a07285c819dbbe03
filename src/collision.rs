//! Static collision geometry: solid boxes, containers and body silhouettes.

use crate::body::BodyId;
use crate::float::Float;
use crate::vec::Planar;

/// A solid axis-aligned rectangle in the XY plane that masses must stay out of.
///
/// Spans `[x, x + width] × [y, y + height]`; unbounded along Z. Only the
/// open interior counts as a collision, so a mass resting exactly on a
/// face is outside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxObstacle<F: Float> {
    pub x: F,
    pub y: F,
    pub width: F,
    pub height: F,
}

impl<F: Float> BoxObstacle<F> {
    pub fn new(x: F, y: F, width: F, height: F) -> Self {
        BoxObstacle { x, y, width, height }
    }

    /// Box spanning two opposite corners.
    pub fn from_corners(x0: F, y0: F, x1: F, y1: F) -> Self {
        BoxObstacle {
            x: x0.min(x1),
            y: y0.min(y1),
            width: (x1 - x0).abs(),
            height: (y1 - y0).abs(),
        }
    }

    /// True when `p` lies strictly inside.
    pub fn contains<V: Planar<Scalar = F>>(&self, p: V) -> bool {
        let px = p.component(0);
        let py = p.component(1);
        px > self.x && px < self.x + self.width && py > self.y && py < self.y + self.height
    }

    /// Way out for a point strictly inside, moving with `motion`.
    ///
    /// Returns `(axis, edge, outward)`: the axis to move along, the
    /// coordinate of the face to move to, and the sign of the face normal.
    /// The face picked is the one reached first travelling along the line
    /// of motion, forward or backward. Without motion the shallowest face
    /// wins. Faces are tried left, right, top, bottom; the
    /// first of equal cost wins.
    pub fn exit<V: Planar<Scalar = F>>(&self, p: V, motion: V) -> Option<(usize, F, F)> {
        if !self.contains(p) {
            return None;
        }

        let px = p.component(0);
        let py = p.component(1);
        let zero = F::zero();
        let one = F::one();
        let right = self.x + self.width;
        let bottom = self.y + self.height;

        let faces = [
            (px - self.x, 0, self.x, -one),
            (right - px, 0, right, one),
            (py - self.y, 1, self.y, -one),
            (bottom - py, 1, bottom, one),
        ];

        let mut best: Option<(F, usize, F, F)> = None;
        for &(depth, axis, edge, outward) in faces.iter() {
            let speed = motion.component(axis).abs();
            if speed <= zero {
                continue;
            }
            let time = depth / speed;
            if best.map_or(true, |b| time < b.0) {
                best = Some((time, axis, edge, outward));
            }
        }

        let (_, axis, edge, outward) = match best {
            Some(face) => face,
            None => {
                let mut shallowest = faces[0];
                for face in faces.iter().skip(1) {
                    if face.0 < shallowest.0 {
                        shallowest = *face;
                    }
                }
                shallowest
            }
        };
        Some((axis, edge, outward))
    }
}

/// A container: masses are kept within `[min, max]` on every axis.
///
/// Use infinite components for open sides, e.g. a ground plane is
/// `min.y = 0` with every other limit at ±infinity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<V: Planar> {
    pub min: V,
    pub max: V,
}

impl<V: Planar> Bounds<V> {
    pub fn new(min: V, max: V) -> Self {
        Bounds { min, max }
    }

    /// Half-space above `height` along Y (the floor of a Y-up scene).
    pub fn floor(height: V::Scalar) -> Self {
        let inf = V::Scalar::from_f32(f32::INFINITY);
        let mut min = V::splat(-inf);
        min.set_component(1, height);
        Bounds { min, max: V::splat(inf) }
    }

    /// Check if `p` lies within the bounds (faces included).
    pub fn contains(&self, p: V) -> bool {
        (0..V::DIM).all(|axis| {
            let c = p.component(axis);
            c >= self.min.component(axis) && c <= self.max.component(axis)
        })
    }
}

/// Read-only snapshot of a body for the body-body collision pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Silhouette<V: Planar> {
    pub id: BodyId,
    pub center: V,
    pub radius: V::Scalar,
}

impl<V: Planar> Silhouette<V> {
    /// Broad phase: can the two bounding circles touch?
    pub fn overlaps(&self, other: &Self) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_sq(other.center) <= reach * reach
    }
}
