//! Lumen engine crate.
//!
//! A minimal real-time renderer for scenes made of procedural primitives:
//! camera math, batched primitive geometry and a Phong frame renderer, plus
//! the window/GPU runtime that drives it.

pub mod camera;
pub mod geometry;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod settings;

pub mod core;
pub mod device;
pub mod time;
pub mod window;

pub mod logging;
