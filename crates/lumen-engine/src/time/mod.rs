//! Time subsystem.
//!
//! Frame timing independent of the runtime: one `FrameClock` per render loop,
//! `tick()` once per presented frame, `next_deadline()` to schedule the next.

mod frame_clock;

pub use frame_clock::{DEFAULT_FRAME_INTERVAL, FrameClock, FrameTime};
