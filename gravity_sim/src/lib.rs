//! Host-side pieces of the gravity simulator
//!
//! The simulation core lives in the `universe` crate. This crate seeds it,
//! measures frame rate, and adapts canvas-style draw calls to GPU circle
//! instances for the windowed viewer.

pub mod canvas;
pub mod fps;
pub mod seed;
pub mod settings;
