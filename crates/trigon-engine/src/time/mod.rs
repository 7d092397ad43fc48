//! Time subsystem.
//!
//! Frame counting and latency measurement, independent of the runtime.

mod frame_clock;

pub use frame_clock::{elapsed_ms, FrameClock, FrameTime};
