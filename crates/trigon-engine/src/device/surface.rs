use winit::dpi::PhysicalSize;

use super::GpuInit;

/// Picks the presentable format: the first one the surface reports, which
/// is its preferred format.
pub(crate) fn choose_surface_format(caps: &wgpu::SurfaceCapabilities) -> Option<wgpu::TextureFormat> {
    caps.formats.first().copied()
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: wgpu::CompositeAlphaMode,
) -> wgpu::CompositeAlphaMode {
    if caps.alpha_modes.contains(&requested) {
        requested
    } else {
        wgpu::CompositeAlphaMode::Auto
    }
}

/// Builds the presentation settings for `format` at `size`.
///
/// The format doubles as the single declared view format.
pub(crate) fn surface_config(
    format: wgpu::TextureFormat,
    alpha_mode: wgpu::CompositeAlphaMode,
    size: PhysicalSize<u32>,
    init: &GpuInit,
) -> wgpu::SurfaceConfiguration {
    let mut config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: 1,
        height: 1,
        present_mode: init.present_mode,
        alpha_mode,
        view_formats: vec![format],
        desired_maximum_frame_latency: init.desired_maximum_frame_latency,
    };
    apply_size(&mut config, size);
    config
}

/// Writes `size` into `config`, returning whether anything changed.
///
/// wgpu rejects zero-sized surfaces, so each dimension is clamped to 1.
pub(crate) fn apply_size(config: &mut wgpu::SurfaceConfiguration, size: PhysicalSize<u32>) -> bool {
    let width = size.width.max(1);
    let height = size.height.max(1);
    let changed = config.width != width || config.height != height;

    config.width = width;
    config.height = height;
    changed
}
