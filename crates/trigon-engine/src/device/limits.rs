/// How the device's required limits are chosen.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LimitsPolicy {
    /// Require exactly what the adapter reports as supported.
    #[default]
    Adapter,
    /// Require the WebGPU default limits.
    Default,
    /// Require the downlevel limits (older GL/DX11 class hardware).
    Downlevel,
}

impl LimitsPolicy {
    /// Resolves the limits to request from `adapter`.
    pub fn resolve(self, adapter: &wgpu::Limits) -> wgpu::Limits {
        match self {
            Self::Adapter => adapter.clone(),
            Self::Default => wgpu::Limits::default(),
            Self::Downlevel => wgpu::Limits::downlevel_defaults(),
        }
    }
}

/// Named view over the limits reported for diagnostics.
pub fn limit_table(l: &wgpu::Limits) -> Vec<(&'static str, u64)> {
    vec![
        ("max_texture_dimension_1d", l.max_texture_dimension_1d as u64),
        ("max_texture_dimension_2d", l.max_texture_dimension_2d as u64),
        ("max_texture_dimension_3d", l.max_texture_dimension_3d as u64),
        ("max_texture_array_layers", l.max_texture_array_layers as u64),
        ("max_bind_groups", l.max_bind_groups as u64),
        ("max_bindings_per_bind_group", l.max_bindings_per_bind_group as u64),
        (
            "max_dynamic_uniform_buffers_per_pipeline_layout",
            l.max_dynamic_uniform_buffers_per_pipeline_layout as u64,
        ),
        (
            "max_dynamic_storage_buffers_per_pipeline_layout",
            l.max_dynamic_storage_buffers_per_pipeline_layout as u64,
        ),
        (
            "max_sampled_textures_per_shader_stage",
            l.max_sampled_textures_per_shader_stage as u64,
        ),
        ("max_samplers_per_shader_stage", l.max_samplers_per_shader_stage as u64),
        (
            "max_storage_buffers_per_shader_stage",
            l.max_storage_buffers_per_shader_stage as u64,
        ),
        (
            "max_storage_textures_per_shader_stage",
            l.max_storage_textures_per_shader_stage as u64,
        ),
        (
            "max_uniform_buffers_per_shader_stage",
            l.max_uniform_buffers_per_shader_stage as u64,
        ),
        ("max_uniform_buffer_binding_size", l.max_uniform_buffer_binding_size as u64),
        ("max_storage_buffer_binding_size", l.max_storage_buffer_binding_size as u64),
        (
            "min_uniform_buffer_offset_alignment",
            l.min_uniform_buffer_offset_alignment as u64,
        ),
        (
            "min_storage_buffer_offset_alignment",
            l.min_storage_buffer_offset_alignment as u64,
        ),
        ("max_vertex_buffers", l.max_vertex_buffers as u64),
        ("max_buffer_size", l.max_buffer_size),
        ("max_vertex_attributes", l.max_vertex_attributes as u64),
        ("max_vertex_buffer_array_stride", l.max_vertex_buffer_array_stride as u64),
        ("max_color_attachments", l.max_color_attachments as u64),
        (
            "max_color_attachment_bytes_per_sample",
            l.max_color_attachment_bytes_per_sample as u64,
        ),
        (
            "max_compute_workgroup_storage_size",
            l.max_compute_workgroup_storage_size as u64,
        ),
        (
            "max_compute_invocations_per_workgroup",
            l.max_compute_invocations_per_workgroup as u64,
        ),
        ("max_compute_workgroup_size_x", l.max_compute_workgroup_size_x as u64),
        ("max_compute_workgroup_size_y", l.max_compute_workgroup_size_y as u64),
        ("max_compute_workgroup_size_z", l.max_compute_workgroup_size_z as u64),
        (
            "max_compute_workgroups_per_dimension",
            l.max_compute_workgroups_per_dimension as u64,
        ),
    ]
}

/// Logs every entry of [`limit_table`] at info level.
pub(crate) fn log_limits(title: &str, limits: &wgpu::Limits) {
    log::info!("{title}:");
    for (name, value) in limit_table(limits) {
        log::info!("    {name}: {value}");
    }
}
