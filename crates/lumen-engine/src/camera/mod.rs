//! Camera transform model.
//!
//! Everything here is pure math on `glam` types:
//! - [`view_matrix`] builds a right-handed look-at transform
//! - [`projection_matrix`] builds an OpenGL-style perspective matrix
//!   (view-space z mapped to clip z in `[-w, w]`, `w = -z`)
//!
//! Matrices are column-major (`glam::Mat4`), so `m[c][r]` in the docs below
//! reads "column `c`, row `r`".

mod params;
mod transform;

pub use params::{CameraParameters, ClipPlanes, ScreenSize, ViewFrustum};
pub use transform::{
    aperture, aspect_ratio, eye_position, focal_length, height_angle, projection_matrix,
    view_matrix,
};
