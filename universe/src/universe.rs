//! Body registry and fixed-timestep integrator

use std::f64::consts::TAU;

use indexmap::IndexMap;

use crate::body::{Body, Vector3};
use crate::config::UniverseConfig;
use crate::error::{Result, UniverseError};
use crate::surface::DrawSurface;

/// Registry of bodies keyed by caller-chosen identifiers
///
/// Bodies are kept in insertion order, which is also the order forces are
/// accumulated in, so a tick is reproducible from a fixed initial state.
#[derive(Debug, Clone)]
pub struct Universe {
    bodies: IndexMap<String, Body>,
    config: UniverseConfig,
    ticks: u64,
}

impl Universe {
    pub fn new() -> Self {
        Self {
            bodies: IndexMap::new(),
            config: UniverseConfig::default(),
            ticks: 0,
        }
    }

    pub fn with_config(config: UniverseConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            bodies: IndexMap::new(),
            config,
            ticks: 0,
        })
    }

    /// Insert `body` under `id`, replacing any body already registered there.
    /// A replaced body keeps its identifier's position in iteration order.
    pub fn add_body(&mut self, id: impl Into<String>, body: Body) -> Result<()> {
        let id = id.into();
        if id.is_empty() {
            return Err(UniverseError::InvalidArgument(
                "body id must not be empty".to_string(),
            ));
        }

        if let Some(previous) = self.bodies.insert(id, body) {
            log::debug!(
                "replaced body (mass {}, color {})",
                previous.mass(),
                previous.color()
            );
        }
        Ok(())
    }

    pub fn get_position(&self, id: &str) -> Result<Vector3> {
        self.get_body(id).map(Body::position)
    }

    pub fn get_velocity(&self, id: &str) -> Result<Vector3> {
        self.get_body(id).map(Body::velocity)
    }

    pub fn get_body(&self, id: &str) -> Result<&Body> {
        self.bodies
            .get(id)
            .ok_or_else(|| UniverseError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.bodies.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = (&str, &Body)> {
        self.bodies.iter().map(|(id, body)| (id.as_str(), body))
    }

    pub fn config(&self) -> &UniverseConfig {
        &self.config
    }

    /// Number of ticks applied so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulation time elapsed since creation
    pub fn elapsed(&self) -> f64 {
        self.ticks as f64 * self.config.timestep
    }

    /// Advance every body by one timestep
    ///
    /// Accelerations are accumulated for every unordered pair from the
    /// pre-step positions, then velocities and positions are advanced with
    /// explicit Euler (velocity first, position from the new velocity).
    pub fn tick(&mut self) {
        let n = self.bodies.len();
        let g = self.config.gravitational_constant;
        let eps2 = self.config.softening_squared();
        let dt = self.config.timestep;

        let snapshot: Vec<(Vector3, f64)> = self
            .bodies
            .values()
            .map(|b| (b.position(), b.mass()))
            .collect();
        let mut accelerations = vec![Vector3::ZERO; n];

        for i in 0..n {
            let (pi, mi) = snapshot[i];
            for j in (i + 1)..n {
                let (pj, mj) = snapshot[j];

                let r = pj - pi;
                let dist_sq = r.length_squared() + eps2;
                let dist = dist_sq.sqrt();
                let g_over_d3 = g / (dist_sq * dist);

                accelerations[i] += r * (g_over_d3 * mj);
                accelerations[j] -= r * (g_over_d3 * mi);
            }
        }

        for (body, a) in self.bodies.values_mut().zip(accelerations.iter()) {
            let velocity = body.velocity() + *a * dt;
            body.set_velocity(velocity);
            body.set_position(body.position() + velocity * dt);
        }

        self.ticks += 1;
        log::trace!("tick {} advanced {} bodies", self.ticks, n);

        debug_assert!(
            self.bodies.values().all(Body::is_finite),
            "non-finite body state after tick {}",
            self.ticks
        );
    }

    /// Draw one filled circle per body
    ///
    /// Simulation +y points up, so the y coordinate is flipped against the
    /// surface height. The surface is never cleared here.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let height = surface.height();

        for body in self.bodies.values() {
            let position = body.position();

            surface.begin_path();
            surface.arc(
                position.x,
                height - position.y,
                self.pixel_radius(body),
                0.0,
                TAU,
                false,
            );
            surface.set_fill_style(body.color());
            surface.fill();
        }
    }

    /// Rendered radius of `body`: mass over the render scale, rounded,
    /// never below one pixel.
    pub fn pixel_radius(&self, body: &Body) -> f64 {
        (body.mass() / self.config.mass_per_pixel).round().max(1.0)
    }

    /// Sum of `m·v` over all bodies
    pub fn total_momentum(&self) -> Vector3 {
        self.bodies.values().map(Body::momentum).sum()
    }

    /// Mass-weighted mean position, `None` for an empty universe
    pub fn center_of_mass(&self) -> Option<Vector3> {
        let total_mass: f64 = self.bodies.values().map(Body::mass).sum();
        if total_mass <= 0.0 {
            return None;
        }

        let weighted: Vector3 = self
            .bodies
            .values()
            .map(|b| b.position() * b.mass())
            .sum();
        Some(weighted / total_mass)
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}
