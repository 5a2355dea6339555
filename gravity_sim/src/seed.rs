//! Randomized initial population
//!
//! Every body starts at the left edge, half way up the canvas, with a random
//! push up and to the right; pairwise gravity is what bends the paths into
//! bound trajectories. The host keeps its own `id → (mass, color)` table,
//! the universe only tracks kinematics.

use rand::Rng;
use universe::{Body, Result, Universe, Vector3};
use uuid::Builder;

/// Fill styles handed to the surface verbatim
pub const COLORS: [&str; 5] = ["green", "red", "yellow", "orange", "whitesmoke"];

pub const DEFAULT_BODY_COUNT: usize = 10;

/// Masses are drawn from `[MIN_MASS, MAX_MASS)`
pub const MIN_MASS: f64 = 1.0;
pub const MAX_MASS: f64 = 1.0e5;

/// Upper bounds of the initial velocity components
pub const MAX_SPEED_X: f64 = 50.0;
pub const MAX_SPEED_Y: f64 = 100.0;

/// What the host remembers about a body after handing it to the universe
#[derive(Debug, Clone, PartialEq)]
pub struct BodyInfo {
    pub id: String,
    pub mass: f64,
    pub color: &'static str,
}

/// Draw one random body for a canvas of the given height
pub fn random_body<R: Rng + ?Sized>(rng: &mut R, height: f64) -> Result<(BodyInfo, Body)> {
    let id = Builder::from_random_bytes(rng.gen()).into_uuid().to_string();
    let mass = rng.gen_range(MIN_MASS..MAX_MASS);
    let color = COLORS[rng.gen_range(0..COLORS.len())];

    let position = Vector3::new(0.0, height / 2.0, 0.0);
    let velocity = Vector3::new(
        rng.gen::<f64>() * MAX_SPEED_X,
        rng.gen::<f64>() * MAX_SPEED_Y,
        0.0,
    );

    let body = Body::new(mass, color, position, velocity)?;
    Ok((BodyInfo { id, mass, color }, body))
}

/// Register `count` random bodies with `universe` and return the host table
pub fn populate<R: Rng + ?Sized>(
    universe: &mut Universe,
    rng: &mut R,
    count: usize,
    height: f64,
) -> Result<Vec<BodyInfo>> {
    let mut infos = Vec::with_capacity(count);

    for _ in 0..count {
        let (info, body) = random_body(rng, height)?;
        log::debug!(
            "seeding {} mass {:.0} color {} velocity {}",
            info.id,
            info.mass,
            info.color,
            body.velocity()
        );
        universe.add_body(info.id.clone(), body)?;
        infos.push(info);
    }

    log::info!("seeded {} bodies", infos.len());
    Ok(infos)
}
