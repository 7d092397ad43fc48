use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::error::{RenderError, RenderResult};

use super::acquire::acquire_device;
use super::limits::LimitsPolicy;
use super::platform::bind_surface;
use super::surface;

/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends the instance may use.
    ///
    /// Defaults to Vulkan; the `WGPU_BACKEND` environment variable overrides it.
    pub backends: wgpu::Backends,

    /// Adapter power profile.
    pub power_preference: wgpu::PowerPreference,

    /// Present mode (swap behavior). FIFO never tears.
    pub present_mode: wgpu::PresentMode,

    /// Alpha compositing mode; falls back to `Auto` when unsupported.
    pub alpha_mode: wgpu::CompositeAlphaMode,

    /// How required device limits are derived from the adapter.
    pub limits: LimitsPolicy,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::from_env().unwrap_or(wgpu::Backends::VULKAN),
            power_preference: wgpu::PowerPreference::HighPerformance,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            limits: LimitsPolicy::Adapter,
            required_features: wgpu::Features::empty(),
            desired_maximum_frame_latency: 2,
        }
    }
}

/// Owns wgpu core objects and the surface configuration.
///
/// - creates and stores Instance/Adapter/Device/Queue
/// - binds and configures the Surface (swapchain)
/// - reconfigures the surface when it goes out of date
///
/// Every handle is released when the `Gpu` is dropped.
pub struct Gpu<'w> {
    /// Kept alive for the surface and adapter created from it.
    _instance: wgpu::Instance,

    /// Surface bound to the window.
    ///
    /// Surface lifetime is tied to the window; the window must outlive the `Gpu`.
    surface: wgpu::Surface<'w>,

    _adapter: wgpu::Adapter,

    device: wgpu::Device,

    queue: wgpu::Queue,

    /// Active surface configuration.
    config: wgpu::SurfaceConfiguration,
}

impl<'w> Gpu<'w> {
    /// Creates a GPU context bound to a window.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu; the runtime
    /// blocks on this future.
    pub async fn new(window: &'w Window, init: GpuInit) -> RenderResult<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: init.backends,
            ..Default::default()
        });
        log::info!("instance created (backends: {:?})", init.backends);

        let bound = bind_surface(&instance, window)?;
        let acquired = acquire_device(&instance, &bound.surface, &init).await?;

        let caps = bound.surface.get_capabilities(&acquired.adapter);
        let format = surface::choose_surface_format(&caps)
            .ok_or(RenderError::NoSurfaceFormat)?;
        log::info!("surface format: {format:?}");

        let alpha_mode = surface::choose_alpha_mode(&caps, init.alpha_mode);
        let config = surface::surface_config(format, alpha_mode, window.inner_size(), &init);

        bound.surface.configure(&acquired.device, &config);

        Ok(Self {
            _instance: instance,
            surface: bound.surface,
            _adapter: acquired.adapter,
            device: acquired.device,
            queue: acquired.queue,
            config,
        })
    }

    /// Returns the active surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Returns a reference to the bound surface.
    pub fn surface(&self) -> &wgpu::Surface<'w> {
        &self.surface
    }

    /// Applies `size` to the stored configuration and reconfigures the surface.
    ///
    /// Reconfiguring with an unchanged size reapplies the same configuration.
    pub fn reconfigure(&mut self, size: PhysicalSize<u32>) {
        if surface::apply_size(&mut self.config, size) {
            log::debug!("surface size now {}x{}", self.config.width, self.config.height);
        } else {
            log::debug!("surface size unchanged; reapplying configuration");
        }
        self.surface.configure(&self.device, &self.config);
    }
}
