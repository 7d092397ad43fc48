use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::device::Gpu;
use crate::render::TrianglePipeline;

use super::frame_loop::Presenter;
use super::pass::{AcquireFailure, FramePass};

/// [`Presenter`] over a window's wgpu surface.
///
/// Lifetimes:
/// - `'a` is the duration of one loop iteration
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct GpuPresenter<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    pub pipeline: &'a TrianglePipeline,
}

impl Presenter for GpuPresenter<'_, '_> {
    type Frame = wgpu::SurfaceTexture;

    fn acquire(&mut self) -> Result<wgpu::SurfaceTexture, AcquireFailure> {
        let texture = self.gpu.surface().get_current_texture()?;
        if texture.suboptimal {
            log::debug!("surface texture is suboptimal");
        }
        Ok(texture)
    }

    fn window_size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    fn reconfigure(&mut self, size: PhysicalSize<u32>) {
        self.gpu.reconfigure(size);
    }

    fn record_and_submit(&mut self, frame: &wgpu::SurfaceTexture, pass: &FramePass) {
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("trigon surface view"),
            format: Some(self.gpu.surface_format()),
            dimension: Some(wgpu::TextureViewDimension::D2),
            aspect: wgpu::TextureAspect::All,
            base_mip_level: 0,
            mip_level_count: Some(1),
            base_array_layer: 0,
            array_layer_count: Some(1),
            ..Default::default()
        });

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("trigon frame encoder"),
            });

        // Render pass borrows `encoder`; it must end before `finish`.
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("trigon triangle pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(pass.clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            rpass.set_pipeline(self.pipeline.pipeline());
            rpass.draw(pass.draw.vertices.clone(), pass.draw.instances.clone());
        }

        drop(view);

        self.gpu.queue().submit(std::iter::once(encoder.finish()));
    }

    fn present(&mut self, frame: wgpu::SurfaceTexture) {
        self.window.pre_present_notify();
        frame.present();
    }
}
