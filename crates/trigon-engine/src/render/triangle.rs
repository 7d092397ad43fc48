//! The fixed triangle pipeline.
//!
//! Vertex positions and the fill color are baked into `shaders/triangle.wgsl`;
//! there are no vertex buffers or bindings.

pub(crate) const SHADER_SOURCE: &str = include_str!("shaders/triangle.wgsl");

pub const VS_ENTRY: &str = "vs_main";
pub const FS_ENTRY: &str = "fs_main";

// ── fixed-function state ──────────────────────────────────────────────────

pub fn primitive_state() -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: None,
        polygon_mode: wgpu::PolygonMode::Fill,
        unclipped_depth: false,
        conservative: false,
    }
}

/// Straight (non-premultiplied) alpha blending; destination alpha is kept.
pub fn straight_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::Zero,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

pub fn color_target(format: wgpu::TextureFormat) -> wgpu::ColorTargetState {
    wgpu::ColorTargetState {
        format,
        blend: Some(straight_alpha_blend()),
        write_mask: wgpu::ColorWrites::ALL,
    }
}

pub fn multisample_state() -> wgpu::MultisampleState {
    wgpu::MultisampleState {
        count: 1,
        mask: !0,
        alpha_to_coverage_enabled: false,
    }
}

// ── pipeline ──────────────────────────────────────────────────────────────

/// Shader module + render pipeline for the triangle.
///
/// Built once for the surface format and reused unchanged every frame.
pub struct TrianglePipeline {
    _shader: wgpu::ShaderModule,
    pipeline: wgpu::RenderPipeline,
}

impl TrianglePipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("trigon triangle shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let targets = [Some(color_target(format))];

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("trigon triangle pipeline"),
            // No bindings; wgpu derives an empty layout.
            layout: None,
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(VS_ENTRY),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(FS_ENTRY),
                compilation_options: Default::default(),
                targets: &targets,
            }),
            primitive: primitive_state(),
            depth_stencil: None,
            multisample: multisample_state(),
            multiview_mask: None,
            cache: None,
        });

        log::info!("render pipeline: {pipeline:?} ({format:?})");

        Self {
            _shader: shader,
            pipeline,
        }
    }

    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }
}
