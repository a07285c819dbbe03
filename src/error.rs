//! Error types for the checked entry points.

use core::fmt;

use crate::body::BodyId;

/// Errors reported by validation and lookup helpers.
///
/// The per-frame physics never produces these; numerical degeneracy is
/// absorbed in place (see [`crate::mass::Mass::update_position`]).
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Damping must be in (0, 1].
    InvalidDamping,
    /// Stiffness must be in (0, 1].
    InvalidStiffness,
    /// Friction must be in [0, 1).
    InvalidFriction,
    /// Maximum velocity must be positive and finite.
    InvalidMaxVelocity,
    /// Restitution must be in [0, 1].
    InvalidRestitution,
    /// A ring needs at least one segment.
    InsufficientSegments,
    /// Radius must be positive and finite.
    InvalidRadius,
    /// No body with this id lives in the world.
    BodyNotFound { id: BodyId },
    /// Vertex buffer cannot hold every mass position.
    VertexBufferTooSmall { needed: usize, len: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidDamping => write!(f, "damping must be in (0, 1]"),
            SimError::InvalidStiffness => write!(f, "stiffness must be in (0, 1]"),
            SimError::InvalidFriction => write!(f, "friction must be in [0, 1)"),
            SimError::InvalidMaxVelocity => write!(f, "max velocity must be positive and finite"),
            SimError::InvalidRestitution => write!(f, "restitution must be in [0, 1]"),
            SimError::InsufficientSegments => write!(f, "ring needs at least one segment"),
            SimError::InvalidRadius => write!(f, "radius must be positive and finite"),
            SimError::BodyNotFound { id } => write!(f, "no body with id {}", id),
            SimError::VertexBufferTooSmall { needed, len } => {
                write!(f, "vertex buffer holds {} scalars, {} needed", len, needed)
            }
        }
    }
}
