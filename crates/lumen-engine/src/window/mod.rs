//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single Window, wires them to the GPU
//! layer and schedules redraws at a fixed rate.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
