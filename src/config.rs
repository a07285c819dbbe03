//! Simulation constants shared by every mass, spring and body.

use crate::error::SimError;
use crate::float::Float;
use crate::vec::Planar;

/// Caller-supplied constants for the simulation.
///
/// The core never validates these on its own; call [`SimConfig::validate`]
/// when the values come from somewhere untrusted.
///
/// # Builder Pattern
/// ```
/// use squish::config::SimConfig;
/// use squish::vec::Vec2;
///
/// let config: SimConfig<Vec2<f32>> = SimConfig::new()
///     .with_gravity(Vec2::new(0.0, 9.81))
///     .with_damping(0.98)
///     .with_stiffness(0.5)
///     .with_max_velocity(200.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig<V: Planar> {
    /// Gravity acceleration. Default: `(0, 1)`, +Y is "down" in canvas space.
    pub gravity: V,
    /// Velocity kept per step, in (0, 1]. 1.0 = no decay. Default: 0.99.
    pub damping: V::Scalar,
    /// Fraction of a spring's length error corrected per pass, in (0, 1]. Default: 0.99.
    pub stiffness: V::Scalar,
    /// Velocity lost per step after a contact, in [0, 1). Default: 0.005.
    pub friction: V::Scalar,
    /// Hard cap on speed. Default: 150.
    pub max_vel: V::Scalar,
    /// Share of the normal velocity kept when bouncing off a box or bounds, in [0, 1].
    /// Default: 1.0 (pure reflection).
    pub restitution: V::Scalar,
    /// Run the crossing-avoidance pass after spring relaxation. Default: false.
    pub avoid_exchange: bool,
}

impl<V: Planar> SimConfig<V> {
    /// Create a config with the default constants.
    pub fn new() -> Self {
        SimConfig {
            gravity: V::from_xy(V::Scalar::zero(), V::Scalar::one()),
            damping: V::Scalar::from_f32(0.99),
            stiffness: V::Scalar::from_f32(0.99),
            friction: V::Scalar::from_f32(0.005),
            max_vel: V::Scalar::from_f32(150.0),
            restitution: V::Scalar::one(),
            avoid_exchange: false,
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: V::Scalar) -> Self {
        self.damping = damping;
        self
    }

    /// Set the spring stiffness.
    pub fn with_stiffness(mut self, stiffness: V::Scalar) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the contact friction.
    pub fn with_friction(mut self, friction: V::Scalar) -> Self {
        self.friction = friction;
        self
    }

    /// Set the speed cap.
    pub fn with_max_velocity(mut self, max_vel: V::Scalar) -> Self {
        self.max_vel = max_vel;
        self
    }

    /// Set the restitution used by box and bounds contacts.
    pub fn with_restitution(mut self, restitution: V::Scalar) -> Self {
        self.restitution = restitution;
        self
    }

    /// Enable or disable the crossing-avoidance pass.
    pub fn with_avoid_exchange(mut self, enabled: bool) -> Self {
        self.avoid_exchange = enabled;
        self
    }

    /// Check every constant against its documented range.
    pub fn validate(&self) -> Result<(), SimError> {
        let zero = V::Scalar::zero();
        let one = V::Scalar::one();

        if !self.damping.is_finite() || self.damping <= zero || self.damping > one {
            return Err(SimError::InvalidDamping);
        }
        if !self.stiffness.is_finite() || self.stiffness <= zero || self.stiffness > one {
            return Err(SimError::InvalidStiffness);
        }
        if !self.friction.is_finite() || self.friction < zero || self.friction >= one {
            return Err(SimError::InvalidFriction);
        }
        if !self.max_vel.is_finite() || self.max_vel <= zero {
            return Err(SimError::InvalidMaxVelocity);
        }
        if !self.restitution.is_finite() || self.restitution < zero || self.restitution > one {
            return Err(SimError::InvalidRestitution);
        }
        Ok(())
    }
}

impl<V: Planar> Default for SimConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}
