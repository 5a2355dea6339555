//! Point masses

use glam::DVec3;

use crate::error::{Result, UniverseError};

/// Position or velocity in simulation space
pub type Vector3 = DVec3;

/// A point mass with an opaque color tag
///
/// Mass and color are fixed at construction. Position and velocity are only
/// advanced by the [`Universe`](crate::Universe) that owns the body.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    mass: f64,
    color: String,
    position: Vector3,
    velocity: Vector3,
}

impl Body {
    pub fn new(
        mass: f64,
        color: impl Into<String>,
        position: Vector3,
        velocity: Vector3,
    ) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(UniverseError::InvalidArgument(format!(
                "mass must be finite and positive, got {mass}"
            )));
        }
        if !position.is_finite() {
            return Err(UniverseError::InvalidArgument(format!(
                "position must be finite, got {position}"
            )));
        }
        if !velocity.is_finite() {
            return Err(UniverseError::InvalidArgument(format!(
                "velocity must be finite, got {velocity}"
            )));
        }

        Ok(Self {
            mass,
            color: color.into(),
            position,
            velocity,
        })
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn velocity(&self) -> Vector3 {
        self.velocity
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Linear momentum `m·v`
    pub fn momentum(&self) -> Vector3 {
        self.velocity * self.mass
    }

    /// True while position and velocity hold no NaN or infinity
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    pub(crate) fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    pub(crate) fn set_velocity(&mut self, velocity: Vector3) {
        self.velocity = velocity;
    }
}
