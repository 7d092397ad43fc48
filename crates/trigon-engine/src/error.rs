//! Engine error types.

use thiserror::Error;

use crate::frame::AcquireFailure;

/// Result type for engine operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that end the render loop.
///
/// Every variant is fatal for the demo; the runtime stops the event loop and
/// hands the error back to `main`.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The window belongs to a windowing system with no surface binding.
    #[error("surface binding unsupported for {handle} windows")]
    SurfaceBindingUnsupported { handle: &'static str },

    /// The window or display handle could not be obtained.
    #[error("window handle unavailable: {0}")]
    WindowHandle(#[from] raw_window_handle::HandleError),

    /// wgpu refused to create a surface for the window.
    #[error("failed to create wgpu surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),

    /// No adapter matched the request.
    #[error("adapter request failed: {0}")]
    AdapterRequestFailed(#[from] wgpu::RequestAdapterError),

    /// The adapter refused to create a device with the requested limits.
    #[error("device request failed: {0}")]
    DeviceRequestFailed(#[from] wgpu::RequestDeviceError),

    /// The surface reports no presentable formats for the adapter.
    #[error("surface has no supported formats")]
    NoSurfaceFormat,

    /// The surface texture could not be acquired.
    #[error("can't get surface texture: {0} (status {code})", code = .0.code())]
    TextureAcquisitionFailed(AcquireFailure),
}
