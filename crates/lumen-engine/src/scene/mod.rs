//! Scene snapshot types.
//!
//! A [`SceneSnapshot`] is what the renderer consumes each frame: camera,
//! global lighting coefficients, lights and objects, all in input order.
//! Snapshots are built by an external loader and replaced wholesale; the
//! renderer only borrows them.

mod error;
mod light;
mod object;
mod primitive;
mod snapshot;

pub use error::SceneError;
pub use light::{Attenuation, Light, LightKind};
pub use object::{GlobalCoefficients, Material, SceneObject};
pub use primitive::PrimitiveKind;
pub use snapshot::{SceneSnapshot, MAX_LIGHTS};
