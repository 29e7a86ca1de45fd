//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the
//! application: the [`App`] callbacks and the per-frame [`FrameCtx`].

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
