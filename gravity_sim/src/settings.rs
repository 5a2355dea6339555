//! Host tunables with environment overrides
//!
//! - `GRAVITY_SIM_BODIES`: number of seeded bodies
//! - `GRAVITY_SIM_FRAMES`: frames simulated by the headless runner
//! - `GRAVITY_SIM_SEED`: RNG seed for a reproducible population

use std::str::FromStr;

use crate::seed::DEFAULT_BODY_COUNT;

pub const DEFAULT_FRAMES: u64 = 600;

pub const BODIES_VAR: &str = "GRAVITY_SIM_BODIES";
pub const FRAMES_VAR: &str = "GRAVITY_SIM_FRAMES";
pub const SEED_VAR: &str = "GRAVITY_SIM_SEED";

#[derive(Debug, Clone, PartialEq)]
pub struct HostSettings {
    pub body_count: usize,
    pub frames: u64,
    pub seed: Option<u64>,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            body_count: DEFAULT_BODY_COUNT,
            frames: DEFAULT_FRAMES,
            seed: None,
        }
    }
}

impl HostSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable source. Unparseable values
    /// are logged and fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            body_count: parse_or(&lookup, BODIES_VAR, defaults.body_count),
            frames: parse_or(&lookup, FRAMES_VAR, defaults.frames),
            seed: lookup(SEED_VAR).and_then(|raw| parse_value(SEED_VAR, &raw)),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T {
    lookup(name)
        .and_then(|raw| parse_value(name, &raw))
        .unwrap_or(default)
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {name}={raw:?}: not a valid number");
            None
        }
    }
}
