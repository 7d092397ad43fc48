use std::fmt;
use std::ops::Range;

/// One non-indexed draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub vertices: Range<u32>,
    pub instances: Range<u32>,
}

/// Everything recorded into the single render pass of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePass {
    /// Color the surface texture is cleared to before drawing.
    pub clear: wgpu::Color,
    pub draw: DrawCall,
}

impl FramePass {
    /// Magenta clear, then three vertices of one instance.
    pub const TRIANGLE: Self = Self {
        clear: wgpu::Color {
            r: 1.0,
            g: 0.0,
            b: 1.0,
            a: 1.0,
        },
        draw: DrawCall {
            vertices: 0..3,
            instances: 0..1,
        },
    };
}

impl Default for FramePass {
    fn default() -> Self {
        Self::TRIANGLE
    }
}

/// Why a surface texture could not be acquired.
///
/// Numeric codes follow the WebGPU `SurfaceGetCurrentTextureStatus` ordering.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AcquireFailure {
    Timeout,
    Outdated,
    Lost,
    OutOfMemory,
    Other,
}

impl AcquireFailure {
    pub fn code(self) -> u32 {
        match self {
            Self::Timeout => 1,
            Self::Outdated => 2,
            Self::Lost => 3,
            Self::OutOfMemory => 4,
            Self::Other => 5,
        }
    }
}

impl fmt::Display for AcquireFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Timeout => "timeout",
            Self::Outdated => "outdated",
            Self::Lost => "lost",
            Self::OutOfMemory => "out of memory",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

impl From<wgpu::SurfaceError> for AcquireFailure {
    fn from(err: wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Timeout => Self::Timeout,
            wgpu::SurfaceError::Outdated => Self::Outdated,
            wgpu::SurfaceError::Lost => Self::Lost,
            wgpu::SurfaceError::OutOfMemory => Self::OutOfMemory,
            wgpu::SurfaceError::Other => Self::Other,
        }
    }
}
