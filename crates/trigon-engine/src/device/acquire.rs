use crate::error::RenderResult;

use super::GpuInit;
use super::limits;

/// Adapter plus the logical device and queue negotiated from it.
pub(crate) struct Acquisition {
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

/// Requests an adapter compatible with `surface`, then a device on it.
///
/// Both requests are futures under wgpu; callers block on them before any
/// handle is used.
pub(crate) async fn acquire_device(
    instance: &wgpu::Instance,
    surface: &wgpu::Surface<'_>,
    init: &GpuInit,
) -> RenderResult<Acquisition> {
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: init.power_preference,
            compatible_surface: Some(surface),
            force_fallback_adapter: false,
        })
        .await?;

    let info = adapter.get_info();
    log::info!(
        "adapter: {} ({:?}, {:?}, driver {} {})",
        info.name,
        info.backend,
        info.device_type,
        info.driver,
        info.driver_info,
    );
    log::info!("adapter features: {:?}", adapter.features());

    let supported = adapter.limits();
    limits::log_limits("supported limits", &supported);

    let required_limits = init.limits.resolve(&supported);
    if init.limits != limits::LimitsPolicy::Adapter {
        limits::log_limits("required limits", &required_limits);
    }

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("trigon device"),
            required_features: init.required_features,
            required_limits,
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        })
        .await?;

    log::info!("device: {device:?}");

    Ok(Acquisition {
        adapter,
        device,
        queue,
    })
}
