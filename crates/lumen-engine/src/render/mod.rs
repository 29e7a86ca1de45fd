//! Frame rendering.
//!
//! [`FrameRenderer`] turns a scene snapshot into calls on a
//! [`GraphicsContext`]; [`PhongPipeline`] is the wgpu-backed context.
//!
//! Convention:
//! - Vertex data is interleaved position/normal, six floats per vertex.
//! - Uniforms are addressed by name once, then by [`UniformLocation`].

mod context;
mod ctx;
mod frame;
pub mod phong;
mod uniforms;

#[cfg(test)]
pub(crate) mod recording;

pub use context::{GraphicsContext, UniformLocation, UniformType, UniformValue};
pub use ctx::{RenderCtx, RenderTarget};
pub use frame::{FrameRenderer, FrameStats};
pub use phong::PhongPipeline;
pub use uniforms::{LightSlots, UniformTable};
