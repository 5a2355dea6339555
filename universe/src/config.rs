//! Simulation and projection parameters
//!
//! G, Δt, softening and the render scale are coupled and unitless: positions
//! are measured in screen pixels and velocities in pixels per tick. The
//! defaults below are tuned so that a handful of bodies with masses up to
//! `1e5` form visible bound trajectories at 60 ticks per second.

use crate::error::{Result, UniverseError};

/// Gravitational constant (scaled for visualization)
pub const DEFAULT_G: f64 = 0.01;

/// Simulation time advanced by one `tick()`
pub const DEFAULT_TIMESTEP: f64 = 1.0;

/// Softening length added in quadrature to every pairwise distance
pub const DEFAULT_SOFTENING: f64 = 1.0;

/// Mass represented by one pixel of rendered radius
pub const DEFAULT_MASS_PER_PIXEL: f64 = 1.0e4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniverseConfig {
    pub gravitational_constant: f64,
    pub timestep: f64,
    pub softening: f64,
    pub mass_per_pixel: f64,
}

impl UniverseConfig {
    pub fn new() -> Self {
        Self {
            gravitational_constant: DEFAULT_G,
            timestep: DEFAULT_TIMESTEP,
            softening: DEFAULT_SOFTENING,
            mass_per_pixel: DEFAULT_MASS_PER_PIXEL,
        }
    }

    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = g;
        self
    }

    pub fn with_timestep(mut self, dt: f64) -> Self {
        self.timestep = dt;
        self
    }

    pub fn with_softening(mut self, softening: f64) -> Self {
        self.softening = softening;
        self
    }

    pub fn with_mass_per_pixel(mut self, mass_per_pixel: f64) -> Self {
        self.mass_per_pixel = mass_per_pixel;
        self
    }

    /// Every parameter must be finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("gravitational_constant", self.gravitational_constant),
            ("timestep", self.timestep),
            ("softening", self.softening),
            ("mass_per_pixel", self.mass_per_pixel),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(UniverseError::InvalidArgument(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Squared softening length, the term actually added to `r·r`
    pub fn softening_squared(&self) -> f64 {
        self.softening * self.softening
    }
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self::new()
    }
}
