//! Per-frame acquisition, recording and presentation.
//!
//! `FrameLoop` holds the iteration logic and is written against the
//! `Presenter` trait; `GpuPresenter` is the wgpu-backed implementation.

mod frame_loop;
mod gpu_presenter;
mod pass;

pub use frame_loop::{FrameLoop, FrameOutcome, Presenter};
pub use gpu_presenter::GpuPresenter;
pub use pass::{AcquireFailure, DrawCall, FramePass};
