use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawWindowHandle};

use crate::error::{RenderError, RenderResult};

/// Windowing systems a surface can be bound to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Platform {
    X11,
    Wayland,
    Win32,
}

impl Platform {
    /// Classifies a raw window handle.
    ///
    /// Xlib and XCB handles both count as X11. Every other handle kind is
    /// rejected with `SurfaceBindingUnsupported`.
    pub fn from_raw(handle: &RawWindowHandle) -> RenderResult<Self> {
        match handle {
            RawWindowHandle::Xlib(_) | RawWindowHandle::Xcb(_) => Ok(Self::X11),
            RawWindowHandle::Wayland(_) => Ok(Self::Wayland),
            RawWindowHandle::Win32(_) => Ok(Self::Win32),
            other => Err(RenderError::SurfaceBindingUnsupported {
                handle: handle_kind(other),
            }),
        }
    }

    /// Probes the platform of a live window.
    pub fn detect(window: &impl HasWindowHandle) -> RenderResult<Self> {
        let handle = window.window_handle()?;
        Self::from_raw(&handle.as_raw())
    }
}

/// A surface together with the platform it was bound on.
pub struct BoundSurface<'w> {
    pub platform: Platform,
    pub surface: wgpu::Surface<'w>,
}

/// Binds `window` to a wgpu surface.
///
/// The platform is checked before wgpu is asked for the surface so that
/// unsupported windowing systems fail with a typed error.
pub fn bind_surface<'w, W>(
    instance: &wgpu::Instance,
    window: &'w W,
) -> RenderResult<BoundSurface<'w>>
where
    W: HasWindowHandle + HasDisplayHandle + Sync,
{
    let platform = Platform::detect(window)?;
    // Display handle must resolve too; wgpu needs both.
    window.display_handle()?;

    let surface = instance.create_surface(window)?;
    log::info!("surface bound ({platform:?})");

    Ok(BoundSurface { platform, surface })
}

fn handle_kind(handle: &RawWindowHandle) -> &'static str {
    match handle {
        RawWindowHandle::UiKit(_) => "UIKit",
        RawWindowHandle::AppKit(_) => "AppKit",
        RawWindowHandle::Orbital(_) => "Orbital",
        RawWindowHandle::Drm(_) => "DRM",
        RawWindowHandle::Gbm(_) => "GBM",
        RawWindowHandle::WinRt(_) => "WinRT",
        RawWindowHandle::Web(_)
        | RawWindowHandle::WebCanvas(_)
        | RawWindowHandle::WebOffscreenCanvas(_) => "web",
        RawWindowHandle::AndroidNdk(_) => "Android",
        RawWindowHandle::Haiku(_) => "Haiku",
        _ => "unknown",
    }
}
