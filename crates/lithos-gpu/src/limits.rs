//! Portable device limit record and limit comparisons.
//!
//! [`DeviceLimits`] mirrors the native limit structure one field per native
//! field, with no lossy narrowing: `VkDeviceSize` values widen to `u64`,
//! native 32-bit booleans become `bool`, and sample-count masks become
//! [`SampleCounts`]. [`LimitKind`] names each field so requirements can
//! reference limits as data; the kind enum and its accessor are generated
//! from one field table so the mapping cannot drift from the struct.

use ash::vk;
use bitflags::bitflags;
use std::cmp::Ordering;

bitflags! {
    /// Supported sample counts for an image or framebuffer attachment.
    ///
    /// Bit values match the native sample-count mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SampleCounts: u32 {
        const TYPE_1 = 1 << 0;
        const TYPE_2 = 1 << 1;
        const TYPE_4 = 1 << 2;
        const TYPE_8 = 1 << 3;
        const TYPE_16 = 1 << 4;
        const TYPE_32 = 1 << 5;
        const TYPE_64 = 1 << 6;
    }
}

impl From<vk::SampleCountFlags> for SampleCounts {
    fn from(flags: vk::SampleCountFlags) -> Self {
        Self::from_bits_truncate(flags.as_raw())
    }
}

/// Comparison operator applied by a limit requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    Equal,
}

impl CompareOp {
    /// Returns true if an ordering of `value` relative to `threshold`
    /// satisfies this operator.
    #[inline]
    #[must_use]
    pub const fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::Greater => matches!(ordering, Ordering::Greater),
            Self::GreaterOrEqual => !matches!(ordering, Ordering::Less),
            Self::Less => matches!(ordering, Ordering::Less),
            Self::LessOrEqual => !matches!(ordering, Ordering::Greater),
            Self::Equal => matches!(ordering, Ordering::Equal),
        }
    }
}

/// The value of a single limit, tagged by its numeric type.
///
/// Array-valued limits compare component-wise: every component must satisfy
/// the operator against the corresponding threshold component. Sample-count
/// masks compare by raw bit value, so `Equal` is the operator that carries
/// meaning for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LimitValue {
    U32(u32),
    U64(u64),
    I32(i32),
    F32(f32),
    Bool(bool),
    U32x2([u32; 2]),
    U32x3([u32; 3]),
    F32x2([f32; 2]),
    Samples(SampleCounts),
}

impl LimitValue {
    /// Apply `op` between this value and `threshold`.
    ///
    /// Both sides must carry the same variant; a mismatch is a programming
    /// error in the requirement (checked at construction in debug builds)
    /// and evaluates as not satisfied.
    #[must_use]
    pub fn satisfies(self, op: CompareOp, threshold: Self) -> bool {
        match (self, threshold) {
            (Self::U32(value), Self::U32(threshold)) => op.holds(value.cmp(&threshold)),
            (Self::U64(value), Self::U64(threshold)) => op.holds(value.cmp(&threshold)),
            (Self::I32(value), Self::I32(threshold)) => op.holds(value.cmp(&threshold)),
            (Self::F32(value), Self::F32(threshold)) => value
                .partial_cmp(&threshold)
                .is_some_and(|ordering| op.holds(ordering)),
            (Self::Bool(value), Self::Bool(threshold)) => op.holds(value.cmp(&threshold)),
            (Self::U32x2(value), Self::U32x2(threshold)) => value
                .iter()
                .zip(threshold.iter())
                .all(|(v, t)| op.holds(v.cmp(t))),
            (Self::U32x3(value), Self::U32x3(threshold)) => value
                .iter()
                .zip(threshold.iter())
                .all(|(v, t)| op.holds(v.cmp(t))),
            (Self::F32x2(value), Self::F32x2(threshold)) => {
                value.iter().zip(threshold.iter()).all(|(v, t)| {
                    v.partial_cmp(t)
                        .is_some_and(|ordering| op.holds(ordering))
                })
            }
            (Self::Samples(value), Self::Samples(threshold)) => {
                op.holds(value.bits().cmp(&threshold.bits()))
            }
            _ => {
                debug_assert!(false, "limit value type mismatch: {self:?} vs {threshold:?}");
                false
            }
        }
    }
}

impl From<u32> for LimitValue {
    fn from(value: u32) -> Self {
        Self::U32(value)
    }
}

impl From<u64> for LimitValue {
    fn from(value: u64) -> Self {
        Self::U64(value)
    }
}

impl From<i32> for LimitValue {
    fn from(value: i32) -> Self {
        Self::I32(value)
    }
}

impl From<f32> for LimitValue {
    fn from(value: f32) -> Self {
        Self::F32(value)
    }
}

impl From<bool> for LimitValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<[u32; 2]> for LimitValue {
    fn from(value: [u32; 2]) -> Self {
        Self::U32x2(value)
    }
}

impl From<[u32; 3]> for LimitValue {
    fn from(value: [u32; 3]) -> Self {
        Self::U32x3(value)
    }
}

impl From<[f32; 2]> for LimitValue {
    fn from(value: [f32; 2]) -> Self {
        Self::F32x2(value)
    }
}

impl From<SampleCounts> for LimitValue {
    fn from(value: SampleCounts) -> Self {
        Self::Samples(value)
    }
}

/// Field table for the limit record.
///
/// One entry per native limit field defines the [`DeviceLimits`] field, the
/// [`LimitKind`] variant naming it, and the [`LimitValue`] variant carrying
/// it, keeping the three in lockstep.
macro_rules! limits_model {
    ($( $variant:ident => $field:ident: $ty:ty as $value:ident ),+ $(,)?) => {
        /// Numeric and boolean ceilings/floors reported by the device driver.
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct DeviceLimits {
            $( pub $field: $ty, )+
        }

        /// Names a single field of [`DeviceLimits`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum LimitKind {
            $( $variant, )+
        }

        impl LimitKind {
            /// Every limit kind, in field order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];
        }

        impl DeviceLimits {
            /// Fetch the value of the named limit.
            #[must_use]
            pub fn get(&self, kind: LimitKind) -> LimitValue {
                match kind {
                    $( LimitKind::$variant => LimitValue::$value(self.$field), )+
                }
            }
        }
    };
}

limits_model! {
    MaxImageDimension1D => max_image_dimension_1d: u32 as U32,
    MaxImageDimension2D => max_image_dimension_2d: u32 as U32,
    MaxImageDimension3D => max_image_dimension_3d: u32 as U32,
    MaxImageDimensionCube => max_image_dimension_cube: u32 as U32,
    MaxImageArrayLayers => max_image_array_layers: u32 as U32,
    MaxTexelBufferElements => max_texel_buffer_elements: u32 as U32,
    MaxUniformBufferRange => max_uniform_buffer_range: u32 as U32,
    MaxStorageBufferRange => max_storage_buffer_range: u32 as U32,
    MaxPushConstantsSize => max_push_constants_size: u32 as U32,
    MaxMemoryAllocationCount => max_memory_allocation_count: u32 as U32,
    MaxSamplerAllocationCount => max_sampler_allocation_count: u32 as U32,
    BufferImageGranularity => buffer_image_granularity: u64 as U64,
    SparseAddressSpaceSize => sparse_address_space_size: u64 as U64,
    MaxBoundDescriptorSets => max_bound_descriptor_sets: u32 as U32,
    MaxPerStageDescriptorSamplers => max_per_stage_descriptor_samplers: u32 as U32,
    MaxPerStageDescriptorUniformBuffers => max_per_stage_descriptor_uniform_buffers: u32 as U32,
    MaxPerStageDescriptorStorageBuffers => max_per_stage_descriptor_storage_buffers: u32 as U32,
    MaxPerStageDescriptorSampledImages => max_per_stage_descriptor_sampled_images: u32 as U32,
    MaxPerStageDescriptorStorageImages => max_per_stage_descriptor_storage_images: u32 as U32,
    MaxPerStageDescriptorInputAttachments => max_per_stage_descriptor_input_attachments: u32 as U32,
    MaxPerStageResources => max_per_stage_resources: u32 as U32,
    MaxDescriptorSetSamplers => max_descriptor_set_samplers: u32 as U32,
    MaxDescriptorSetUniformBuffers => max_descriptor_set_uniform_buffers: u32 as U32,
    MaxDescriptorSetUniformBuffersDynamic => max_descriptor_set_uniform_buffers_dynamic: u32 as U32,
    MaxDescriptorSetStorageBuffers => max_descriptor_set_storage_buffers: u32 as U32,
    MaxDescriptorSetStorageBuffersDynamic => max_descriptor_set_storage_buffers_dynamic: u32 as U32,
    MaxDescriptorSetSampledImages => max_descriptor_set_sampled_images: u32 as U32,
    MaxDescriptorSetStorageImages => max_descriptor_set_storage_images: u32 as U32,
    MaxDescriptorSetInputAttachments => max_descriptor_set_input_attachments: u32 as U32,
    MaxVertexInputAttributes => max_vertex_input_attributes: u32 as U32,
    MaxVertexInputBindings => max_vertex_input_bindings: u32 as U32,
    MaxVertexInputAttributeOffset => max_vertex_input_attribute_offset: u32 as U32,
    MaxVertexInputBindingStride => max_vertex_input_binding_stride: u32 as U32,
    MaxVertexOutputComponents => max_vertex_output_components: u32 as U32,
    MaxTessellationGenerationLevel => max_tessellation_generation_level: u32 as U32,
    MaxTessellationPatchSize => max_tessellation_patch_size: u32 as U32,
    MaxTessellationControlPerVertexInputComponents => max_tessellation_control_per_vertex_input_components: u32 as U32,
    MaxTessellationControlPerVertexOutputComponents => max_tessellation_control_per_vertex_output_components: u32 as U32,
    MaxTessellationControlPerPatchOutputComponents => max_tessellation_control_per_patch_output_components: u32 as U32,
    MaxTessellationControlTotalOutputComponents => max_tessellation_control_total_output_components: u32 as U32,
    MaxTessellationEvaluationInputComponents => max_tessellation_evaluation_input_components: u32 as U32,
    MaxTessellationEvaluationOutputComponents => max_tessellation_evaluation_output_components: u32 as U32,
    MaxGeometryShaderInvocations => max_geometry_shader_invocations: u32 as U32,
    MaxGeometryInputComponents => max_geometry_input_components: u32 as U32,
    MaxGeometryOutputComponents => max_geometry_output_components: u32 as U32,
    MaxGeometryOutputVertices => max_geometry_output_vertices: u32 as U32,
    MaxGeometryTotalOutputComponents => max_geometry_total_output_components: u32 as U32,
    MaxFragmentInputComponents => max_fragment_input_components: u32 as U32,
    MaxFragmentOutputAttachments => max_fragment_output_attachments: u32 as U32,
    MaxFragmentDualSrcAttachments => max_fragment_dual_src_attachments: u32 as U32,
    MaxFragmentCombinedOutputResources => max_fragment_combined_output_resources: u32 as U32,
    MaxComputeSharedMemorySize => max_compute_shared_memory_size: u32 as U32,
    MaxComputeWorkGroupCount => max_compute_work_group_count: [u32; 3] as U32x3,
    MaxComputeWorkGroupInvocations => max_compute_work_group_invocations: u32 as U32,
    MaxComputeWorkGroupSize => max_compute_work_group_size: [u32; 3] as U32x3,
    SubPixelPrecisionBits => sub_pixel_precision_bits: u32 as U32,
    SubTexelPrecisionBits => sub_texel_precision_bits: u32 as U32,
    MipmapPrecisionBits => mipmap_precision_bits: u32 as U32,
    MaxDrawIndexedIndexValue => max_draw_indexed_index_value: u32 as U32,
    MaxDrawIndirectCount => max_draw_indirect_count: u32 as U32,
    MaxSamplerLodBias => max_sampler_lod_bias: f32 as F32,
    MaxSamplerAnisotropy => max_sampler_anisotropy: f32 as F32,
    MaxViewports => max_viewports: u32 as U32,
    MaxViewportDimensions => max_viewport_dimensions: [u32; 2] as U32x2,
    ViewportBoundsRange => viewport_bounds_range: [f32; 2] as F32x2,
    ViewportSubPixelBits => viewport_sub_pixel_bits: u32 as U32,
    MinMemoryMapAlignment => min_memory_map_alignment: u64 as U64,
    MinTexelBufferOffsetAlignment => min_texel_buffer_offset_alignment: u64 as U64,
    MinUniformBufferOffsetAlignment => min_uniform_buffer_offset_alignment: u64 as U64,
    MinStorageBufferOffsetAlignment => min_storage_buffer_offset_alignment: u64 as U64,
    MinTexelOffset => min_texel_offset: i32 as I32,
    MaxTexelOffset => max_texel_offset: u32 as U32,
    MinTexelGatherOffset => min_texel_gather_offset: i32 as I32,
    MaxTexelGatherOffset => max_texel_gather_offset: u32 as U32,
    MinInterpolationOffset => min_interpolation_offset: f32 as F32,
    MaxInterpolationOffset => max_interpolation_offset: f32 as F32,
    SubPixelInterpolationOffsetBits => sub_pixel_interpolation_offset_bits: u32 as U32,
    MaxFramebufferWidth => max_framebuffer_width: u32 as U32,
    MaxFramebufferHeight => max_framebuffer_height: u32 as U32,
    MaxFramebufferLayers => max_framebuffer_layers: u32 as U32,
    FramebufferColorSampleCounts => framebuffer_color_sample_counts: SampleCounts as Samples,
    FramebufferDepthSampleCounts => framebuffer_depth_sample_counts: SampleCounts as Samples,
    FramebufferStencilSampleCounts => framebuffer_stencil_sample_counts: SampleCounts as Samples,
    FramebufferNoAttachmentsSampleCounts => framebuffer_no_attachments_sample_counts: SampleCounts as Samples,
    MaxColorAttachments => max_color_attachments: u32 as U32,
    SampledImageColorSampleCounts => sampled_image_color_sample_counts: SampleCounts as Samples,
    SampledImageIntegerSampleCounts => sampled_image_integer_sample_counts: SampleCounts as Samples,
    SampledImageDepthSampleCounts => sampled_image_depth_sample_counts: SampleCounts as Samples,
    SampledImageStencilSampleCounts => sampled_image_stencil_sample_counts: SampleCounts as Samples,
    StorageImageSampleCounts => storage_image_sample_counts: SampleCounts as Samples,
    MaxSampleMaskWords => max_sample_mask_words: u32 as U32,
    TimestampComputeAndGraphics => timestamp_compute_and_graphics: bool as Bool,
    TimestampPeriod => timestamp_period: f32 as F32,
    MaxClipDistances => max_clip_distances: u32 as U32,
    MaxCullDistances => max_cull_distances: u32 as U32,
    MaxCombinedClipAndCullDistances => max_combined_clip_and_cull_distances: u32 as U32,
    DiscreteQueuePriorities => discrete_queue_priorities: u32 as U32,
    PointSizeRange => point_size_range: [f32; 2] as F32x2,
    LineWidthRange => line_width_range: [f32; 2] as F32x2,
    PointSizeGranularity => point_size_granularity: f32 as F32,
    LineWidthGranularity => line_width_granularity: f32 as F32,
    StrictLines => strict_lines: bool as Bool,
    StandardSampleLocations => standard_sample_locations: bool as Bool,
    OptimalBufferCopyOffsetAlignment => optimal_buffer_copy_offset_alignment: u64 as U64,
    OptimalBufferCopyRowPitchAlignment => optimal_buffer_copy_row_pitch_alignment: u64 as U64,
    NonCoherentAtomSize => non_coherent_atom_size: u64 as U64,
}

impl From<vk::PhysicalDeviceLimits> for DeviceLimits {
    fn from(limits: vk::PhysicalDeviceLimits) -> Self {
        Self {
            max_image_dimension_1d: limits.max_image_dimension1_d,
            max_image_dimension_2d: limits.max_image_dimension2_d,
            max_image_dimension_3d: limits.max_image_dimension3_d,
            max_image_dimension_cube: limits.max_image_dimension_cube,
            max_image_array_layers: limits.max_image_array_layers,
            max_texel_buffer_elements: limits.max_texel_buffer_elements,
            max_uniform_buffer_range: limits.max_uniform_buffer_range,
            max_storage_buffer_range: limits.max_storage_buffer_range,
            max_push_constants_size: limits.max_push_constants_size,
            max_memory_allocation_count: limits.max_memory_allocation_count,
            max_sampler_allocation_count: limits.max_sampler_allocation_count,
            buffer_image_granularity: limits.buffer_image_granularity,
            sparse_address_space_size: limits.sparse_address_space_size,
            max_bound_descriptor_sets: limits.max_bound_descriptor_sets,
            max_per_stage_descriptor_samplers: limits.max_per_stage_descriptor_samplers,
            max_per_stage_descriptor_uniform_buffers: limits
                .max_per_stage_descriptor_uniform_buffers,
            max_per_stage_descriptor_storage_buffers: limits
                .max_per_stage_descriptor_storage_buffers,
            max_per_stage_descriptor_sampled_images: limits.max_per_stage_descriptor_sampled_images,
            max_per_stage_descriptor_storage_images: limits.max_per_stage_descriptor_storage_images,
            max_per_stage_descriptor_input_attachments: limits
                .max_per_stage_descriptor_input_attachments,
            max_per_stage_resources: limits.max_per_stage_resources,
            max_descriptor_set_samplers: limits.max_descriptor_set_samplers,
            max_descriptor_set_uniform_buffers: limits.max_descriptor_set_uniform_buffers,
            max_descriptor_set_uniform_buffers_dynamic: limits
                .max_descriptor_set_uniform_buffers_dynamic,
            max_descriptor_set_storage_buffers: limits.max_descriptor_set_storage_buffers,
            max_descriptor_set_storage_buffers_dynamic: limits
                .max_descriptor_set_storage_buffers_dynamic,
            max_descriptor_set_sampled_images: limits.max_descriptor_set_sampled_images,
            max_descriptor_set_storage_images: limits.max_descriptor_set_storage_images,
            max_descriptor_set_input_attachments: limits.max_descriptor_set_input_attachments,
            max_vertex_input_attributes: limits.max_vertex_input_attributes,
            max_vertex_input_bindings: limits.max_vertex_input_bindings,
            max_vertex_input_attribute_offset: limits.max_vertex_input_attribute_offset,
            max_vertex_input_binding_stride: limits.max_vertex_input_binding_stride,
            max_vertex_output_components: limits.max_vertex_output_components,
            max_tessellation_generation_level: limits.max_tessellation_generation_level,
            max_tessellation_patch_size: limits.max_tessellation_patch_size,
            max_tessellation_control_per_vertex_input_components: limits
                .max_tessellation_control_per_vertex_input_components,
            max_tessellation_control_per_vertex_output_components: limits
                .max_tessellation_control_per_vertex_output_components,
            max_tessellation_control_per_patch_output_components: limits
                .max_tessellation_control_per_patch_output_components,
            max_tessellation_control_total_output_components: limits
                .max_tessellation_control_total_output_components,
            max_tessellation_evaluation_input_components: limits
                .max_tessellation_evaluation_input_components,
            max_tessellation_evaluation_output_components: limits
                .max_tessellation_evaluation_output_components,
            max_geometry_shader_invocations: limits.max_geometry_shader_invocations,
            max_geometry_input_components: limits.max_geometry_input_components,
            max_geometry_output_components: limits.max_geometry_output_components,
            max_geometry_output_vertices: limits.max_geometry_output_vertices,
            max_geometry_total_output_components: limits.max_geometry_total_output_components,
            max_fragment_input_components: limits.max_fragment_input_components,
            max_fragment_output_attachments: limits.max_fragment_output_attachments,
            max_fragment_dual_src_attachments: limits.max_fragment_dual_src_attachments,
            max_fragment_combined_output_resources: limits.max_fragment_combined_output_resources,
            max_compute_shared_memory_size: limits.max_compute_shared_memory_size,
            max_compute_work_group_count: limits.max_compute_work_group_count,
            max_compute_work_group_invocations: limits.max_compute_work_group_invocations,
            max_compute_work_group_size: limits.max_compute_work_group_size,
            sub_pixel_precision_bits: limits.sub_pixel_precision_bits,
            sub_texel_precision_bits: limits.sub_texel_precision_bits,
            mipmap_precision_bits: limits.mipmap_precision_bits,
            max_draw_indexed_index_value: limits.max_draw_indexed_index_value,
            max_draw_indirect_count: limits.max_draw_indirect_count,
            max_sampler_lod_bias: limits.max_sampler_lod_bias,
            max_sampler_anisotropy: limits.max_sampler_anisotropy,
            max_viewports: limits.max_viewports,
            max_viewport_dimensions: limits.max_viewport_dimensions,
            viewport_bounds_range: limits.viewport_bounds_range,
            viewport_sub_pixel_bits: limits.viewport_sub_pixel_bits,
            min_memory_map_alignment: limits.min_memory_map_alignment as u64,
            min_texel_buffer_offset_alignment: limits.min_texel_buffer_offset_alignment,
            min_uniform_buffer_offset_alignment: limits.min_uniform_buffer_offset_alignment,
            min_storage_buffer_offset_alignment: limits.min_storage_buffer_offset_alignment,
            min_texel_offset: limits.min_texel_offset,
            max_texel_offset: limits.max_texel_offset,
            min_texel_gather_offset: limits.min_texel_gather_offset,
            max_texel_gather_offset: limits.max_texel_gather_offset,
            min_interpolation_offset: limits.min_interpolation_offset,
            max_interpolation_offset: limits.max_interpolation_offset,
            sub_pixel_interpolation_offset_bits: limits.sub_pixel_interpolation_offset_bits,
            max_framebuffer_width: limits.max_framebuffer_width,
            max_framebuffer_height: limits.max_framebuffer_height,
            max_framebuffer_layers: limits.max_framebuffer_layers,
            framebuffer_color_sample_counts: limits.framebuffer_color_sample_counts.into(),
            framebuffer_depth_sample_counts: limits.framebuffer_depth_sample_counts.into(),
            framebuffer_stencil_sample_counts: limits.framebuffer_stencil_sample_counts.into(),
            framebuffer_no_attachments_sample_counts: limits
                .framebuffer_no_attachments_sample_counts
                .into(),
            max_color_attachments: limits.max_color_attachments,
            sampled_image_color_sample_counts: limits.sampled_image_color_sample_counts.into(),
            sampled_image_integer_sample_counts: limits.sampled_image_integer_sample_counts.into(),
            sampled_image_depth_sample_counts: limits.sampled_image_depth_sample_counts.into(),
            sampled_image_stencil_sample_counts: limits.sampled_image_stencil_sample_counts.into(),
            storage_image_sample_counts: limits.storage_image_sample_counts.into(),
            max_sample_mask_words: limits.max_sample_mask_words,
            timestamp_compute_and_graphics: limits.timestamp_compute_and_graphics == vk::TRUE,
            timestamp_period: limits.timestamp_period,
            max_clip_distances: limits.max_clip_distances,
            max_cull_distances: limits.max_cull_distances,
            max_combined_clip_and_cull_distances: limits.max_combined_clip_and_cull_distances,
            discrete_queue_priorities: limits.discrete_queue_priorities,
            point_size_range: limits.point_size_range,
            line_width_range: limits.line_width_range,
            point_size_granularity: limits.point_size_granularity,
            line_width_granularity: limits.line_width_granularity,
            strict_lines: limits.strict_lines == vk::TRUE,
            standard_sample_locations: limits.standard_sample_locations == vk::TRUE,
            optimal_buffer_copy_offset_alignment: limits.optimal_buffer_copy_offset_alignment,
            optimal_buffer_copy_row_pitch_alignment: limits.optimal_buffer_copy_row_pitch_alignment,
            non_coherent_atom_size: limits.non_coherent_atom_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessor_reads_named_field() {
        let limits = DeviceLimits {
            max_image_dimension_2d: 8192,
            min_texel_offset: -8,
            timestamp_period: 1.0,
            ..Default::default()
        };
        assert_eq!(
            limits.get(LimitKind::MaxImageDimension2D),
            LimitValue::U32(8192)
        );
        assert_eq!(limits.get(LimitKind::MinTexelOffset), LimitValue::I32(-8));
        assert_eq!(limits.get(LimitKind::TimestampPeriod), LimitValue::F32(1.0));
    }

    #[test]
    fn kind_table_covers_every_field() {
        assert_eq!(LimitKind::ALL.len(), 106);
    }

    #[test]
    fn greater_or_equal_threshold_semantics() {
        let threshold = LimitValue::U32(4096);
        assert!(LimitValue::U32(4096).satisfies(CompareOp::GreaterOrEqual, threshold));
        assert!(LimitValue::U32(4097).satisfies(CompareOp::GreaterOrEqual, threshold));
        assert!(!LimitValue::U32(4095).satisfies(CompareOp::GreaterOrEqual, threshold));
    }

    #[test]
    fn operator_semantics() {
        let value = LimitValue::U32(10);
        assert!(value.satisfies(CompareOp::Greater, LimitValue::U32(9)));
        assert!(!value.satisfies(CompareOp::Greater, LimitValue::U32(10)));
        assert!(value.satisfies(CompareOp::Less, LimitValue::U32(11)));
        assert!(!value.satisfies(CompareOp::Less, LimitValue::U32(10)));
        assert!(value.satisfies(CompareOp::LessOrEqual, LimitValue::U32(10)));
        assert!(!value.satisfies(CompareOp::LessOrEqual, LimitValue::U32(9)));
        assert!(value.satisfies(CompareOp::Equal, LimitValue::U32(10)));
        assert!(!value.satisfies(CompareOp::Equal, LimitValue::U32(11)));
    }

    #[test]
    fn array_limits_compare_component_wise() {
        let value = LimitValue::U32x3([1024, 1024, 64]);
        assert!(value.satisfies(CompareOp::GreaterOrEqual, LimitValue::U32x3([256, 256, 64])));
        // One failing component fails the whole comparison.
        assert!(!value.satisfies(CompareOp::GreaterOrEqual, LimitValue::U32x3([256, 256, 128])));
    }

    #[test]
    fn sample_counts_compare_by_bits() {
        let mask = SampleCounts::TYPE_1 | SampleCounts::TYPE_4;
        let value = LimitValue::Samples(mask);
        assert!(value.satisfies(CompareOp::Equal, LimitValue::Samples(mask)));
        assert!(!value.satisfies(CompareOp::Equal, LimitValue::Samples(SampleCounts::TYPE_1)));
    }

    #[test]
    fn native_translation_is_lossless() {
        let native = vk::PhysicalDeviceLimits {
            max_image_dimension2_d: 16384,
            min_memory_map_alignment: 64,
            timestamp_compute_and_graphics: vk::TRUE,
            point_size_range: [1.0, 189.875],
            framebuffer_color_sample_counts: vk::SampleCountFlags::TYPE_1
                | vk::SampleCountFlags::TYPE_4,
            min_texel_offset: -8,
            non_coherent_atom_size: 256,
            ..Default::default()
        };
        let limits = DeviceLimits::from(native);
        assert_eq!(limits.max_image_dimension_2d, 16384);
        assert_eq!(limits.min_memory_map_alignment, 64);
        assert!(limits.timestamp_compute_and_graphics);
        assert_eq!(limits.point_size_range, [1.0, 189.875]);
        assert_eq!(
            limits.framebuffer_color_sample_counts,
            SampleCounts::TYPE_1 | SampleCounts::TYPE_4
        );
        assert_eq!(limits.min_texel_offset, -8);
        assert_eq!(limits.non_coherent_atom_size, 256);
    }
}
