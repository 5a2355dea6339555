//! Common graphics plumbing for the windowed simulator host
//!
//! This crate provides the wgpu/winit setup and the pixel-space camera used
//! to put canvas-style circle draws on screen.

pub mod graphics;
pub mod camera;

pub use graphics::*;
pub use camera::*;
