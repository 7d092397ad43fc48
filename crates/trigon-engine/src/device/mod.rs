//! GPU device + surface management.
//!
//! This module is responsible for:
//! - binding the window to a wgpu Surface for the host windowing system
//! - requesting the Adapter/Device/Queue
//! - configuring and reconfiguring the Surface (swapchain)

mod acquire;
mod gpu;
mod limits;
mod platform;
mod surface;

pub use gpu::{Gpu, GpuInit};
pub use limits::{limit_table, LimitsPolicy};
pub use platform::{bind_surface, BoundSurface, Platform};
