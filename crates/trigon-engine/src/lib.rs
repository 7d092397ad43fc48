//! Trigon engine crate.
//!
//! Opens a window, binds it to a wgpu surface and draws one fixed triangle
//! per loop iteration.

pub mod device;
pub mod error;
pub mod frame;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;

pub use error::{RenderError, RenderResult};
