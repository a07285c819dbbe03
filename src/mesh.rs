//! Renderer-side helpers for mesh-backed bodies.

use crate::float::Float;
use crate::vec::{Vec, Vec3};
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Triangle indices for a [`crate::body::Body::cuboid`], two per face.
pub const CUBE_INDICES: [u32; 36] = [
    2, 1, 0, 0, 3, 2,
    0, 4, 7, 7, 3, 0,
    0, 1, 5, 5, 4, 0,
    1, 2, 6, 6, 5, 1,
    2, 3, 7, 7, 6, 2,
    4, 5, 6, 6, 7, 4,
];

/// Area-weighted vertex normals for an indexed triangle list.
///
/// Each triangle adds its unnormalized face normal to its three vertices;
/// the sums are normalized at the end. Vertices no triangle touches, and
/// triangles referencing out-of-range vertices, contribute nothing.
pub fn compute_vertex_normals<F: Float>(
    positions: &[Vec3<F>],
    indices: &[u32],
) -> AllocVec<Vec3<F>> {
    let mut normals = vec![Vec3::zero(); positions.len()];

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] = normals[a] + face;
        normals[b] = normals[b] + face;
        normals[c] = normals[c] + face;
    }

    for n in normals.iter_mut() {
        *n = n.normalize();
    }
    normals
}
