//! Direct-sum N-body gravity core
//!
//! A [`Universe`] owns a set of [`Body`] point masses keyed by caller-chosen
//! string identifiers. The host drives it once per frame:
//! - [`Universe::tick`] applies one explicit-Euler step of pairwise gravity
//! - [`Universe::render`] draws one filled circle per body onto a [`DrawSurface`]
//!
//! Nothing in here owns a thread or a timer, and nothing is process-global,
//! so any number of universes can coexist.

pub mod body;
pub mod config;
pub mod error;
pub mod surface;
pub mod universe;

pub use body::{Body, Vector3};
pub use config::UniverseConfig;
pub use error::{Result, UniverseError};
pub use surface::{DrawCommand, DrawSurface, RecordedCircle, RecordingSurface};
pub use universe::Universe;
