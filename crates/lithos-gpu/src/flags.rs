//! Flag-set types describing what a device is and what it can do.
//!
//! Each type is a portable mirror of a native flag or boolean group. The
//! `From` impls are the only construction path used by enumeration; they
//! translate field-for-field with no interpretation.

use ash::vk;
use bitflags::bitflags;

bitflags! {
    /// What kind of device this is.
    ///
    /// A device may carry several bits, e.g. `DISCRETE | PRIMARY` for the
    /// discrete GPU driving the primary display.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DeviceKind: u8 {
        /// Software rasterizer running on the CPU.
        const SOFTWARE = 1 << 0;
        /// Dedicated GPU with its own memory.
        const DISCRETE = 1 << 1;
        /// GPU embedded in or sharing memory with the host.
        const INTEGRATED = 1 << 2;
        /// Virtualized or otherwise indirect device.
        const INDIRECT = 1 << 3;
        /// Device driving the OS primary display adapter.
        const PRIMARY = 1 << 4;
    }
}

impl From<vk::PhysicalDeviceType> for DeviceKind {
    /// Map the native device type to its kind bit.
    ///
    /// `PRIMARY` is never set here; the enumerator adds it after correlating
    /// the device with the OS primary adapter. An unrecognized native type
    /// maps to no bits.
    fn from(ty: vk::PhysicalDeviceType) -> Self {
        match ty {
            vk::PhysicalDeviceType::CPU => Self::SOFTWARE,
            vk::PhysicalDeviceType::DISCRETE_GPU => Self::DISCRETE,
            vk::PhysicalDeviceType::INTEGRATED_GPU => Self::INTEGRATED,
            vk::PhysicalDeviceType::VIRTUAL_GPU => Self::INDIRECT,
            _ => Self::empty(),
        }
    }
}

bitflags! {
    /// Capabilities of a queue family.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct QueueKind: u32 {
        /// Graphics (draw) operations.
        const GRAPHICS = 1 << 0;
        /// Compute dispatch.
        const COMPUTE = 1 << 1;
        /// Transfer (copy) operations.
        const TRANSFER = 1 << 2;
        /// Sparse memory binding operations.
        const SPARSE_BINDING = 1 << 3;
        /// Protected memory operations.
        const PROTECTED = 1 << 4;
        /// Video decode operations.
        const VIDEO_DECODE = 1 << 5;
        /// Video encode operations.
        const VIDEO_ENCODE = 1 << 6;
        /// Optical flow operations.
        const OPTICAL_FLOW = 1 << 7;
    }
}

impl From<vk::QueueFlags> for QueueKind {
    fn from(flags: vk::QueueFlags) -> Self {
        let mut kind = Self::empty();
        if flags.contains(vk::QueueFlags::GRAPHICS) {
            kind |= Self::GRAPHICS;
        }
        if flags.contains(vk::QueueFlags::COMPUTE) {
            kind |= Self::COMPUTE;
        }
        if flags.contains(vk::QueueFlags::TRANSFER) {
            kind |= Self::TRANSFER;
        }
        if flags.contains(vk::QueueFlags::SPARSE_BINDING) {
            kind |= Self::SPARSE_BINDING;
        }
        if flags.contains(vk::QueueFlags::PROTECTED) {
            kind |= Self::PROTECTED;
        }
        if flags.contains(vk::QueueFlags::VIDEO_DECODE_KHR) {
            kind |= Self::VIDEO_DECODE;
        }
        if flags.contains(vk::QueueFlags::VIDEO_ENCODE_KHR) {
            kind |= Self::VIDEO_ENCODE;
        }
        if flags.contains(vk::QueueFlags::OPTICAL_FLOW_NV) {
            kind |= Self::OPTICAL_FLOW;
        }
        kind
    }
}

bitflags! {
    /// Optional device capabilities, one flag per native feature boolean.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DeviceFeatures: u64 {
        // Core pipeline
        const ROBUST_BUFFER_ACCESS = 1 << 0;
        const FULL_DRAW_INDEX_UINT32 = 1 << 1;
        const IMAGE_CUBE_ARRAY = 1 << 2;
        const INDEPENDENT_BLEND = 1 << 3;
        const GEOMETRY_SHADER = 1 << 4;
        const TESSELLATION_SHADER = 1 << 5;
        const SAMPLE_RATE_SHADING = 1 << 6;
        const DUAL_SRC_BLEND = 1 << 7;
        const LOGIC_OP = 1 << 8;
        const MULTI_DRAW_INDIRECT = 1 << 9;
        const DRAW_INDIRECT_FIRST_INSTANCE = 1 << 10;
        const DEPTH_CLAMP = 1 << 11;
        const DEPTH_BIAS_CLAMP = 1 << 12;
        const FILL_MODE_NON_SOLID = 1 << 13;
        const DEPTH_BOUNDS = 1 << 14;
        const WIDE_LINES = 1 << 15;
        const LARGE_POINTS = 1 << 16;
        const ALPHA_TO_ONE = 1 << 17;
        const MULTI_VIEWPORT = 1 << 18;
        const SAMPLER_ANISOTROPY = 1 << 19;

        // Texture compression
        const TEXTURE_COMPRESSION_ETC2 = 1 << 20;
        const TEXTURE_COMPRESSION_ASTC_LDR = 1 << 21;
        const TEXTURE_COMPRESSION_BC = 1 << 22;

        // Queries
        const OCCLUSION_QUERY_PRECISE = 1 << 23;
        const PIPELINE_STATISTICS_QUERY = 1 << 24;

        // Shader stage capabilities
        const VERTEX_PIPELINE_STORES_AND_ATOMICS = 1 << 25;
        const FRAGMENT_STORES_AND_ATOMICS = 1 << 26;
        const SHADER_TESSELLATION_AND_GEOMETRY_POINT_SIZE = 1 << 27;
        const SHADER_IMAGE_GATHER_EXTENDED = 1 << 28;
        const SHADER_STORAGE_IMAGE_EXTENDED_FORMATS = 1 << 29;
        const SHADER_STORAGE_IMAGE_MULTISAMPLE = 1 << 30;
        const SHADER_STORAGE_IMAGE_READ_WITHOUT_FORMAT = 1 << 31;
        const SHADER_STORAGE_IMAGE_WRITE_WITHOUT_FORMAT = 1 << 32;
        const SHADER_UNIFORM_BUFFER_ARRAY_DYNAMIC_INDEXING = 1 << 33;
        const SHADER_SAMPLED_IMAGE_ARRAY_DYNAMIC_INDEXING = 1 << 34;
        const SHADER_STORAGE_BUFFER_ARRAY_DYNAMIC_INDEXING = 1 << 35;
        const SHADER_STORAGE_IMAGE_ARRAY_DYNAMIC_INDEXING = 1 << 36;
        const SHADER_CLIP_DISTANCE = 1 << 37;
        const SHADER_CULL_DISTANCE = 1 << 38;
        const SHADER_FLOAT64 = 1 << 39;
        const SHADER_INT64 = 1 << 40;
        const SHADER_INT16 = 1 << 41;
        const SHADER_RESOURCE_RESIDENCY = 1 << 42;
        const SHADER_RESOURCE_MIN_LOD = 1 << 43;

        // Sparse resources
        const SPARSE_BINDING = 1 << 44;
        const SPARSE_RESIDENCY_BUFFER = 1 << 45;
        const SPARSE_RESIDENCY_IMAGE_2D = 1 << 46;
        const SPARSE_RESIDENCY_IMAGE_3D = 1 << 47;
        const SPARSE_RESIDENCY_2_SAMPLES = 1 << 48;
        const SPARSE_RESIDENCY_4_SAMPLES = 1 << 49;
        const SPARSE_RESIDENCY_8_SAMPLES = 1 << 50;
        const SPARSE_RESIDENCY_16_SAMPLES = 1 << 51;
        const SPARSE_RESIDENCY_ALIASED = 1 << 52;

        // Misc
        const VARIABLE_MULTISAMPLE_RATE = 1 << 53;
        const INHERITED_QUERIES = 1 << 54;
    }
}

impl From<vk::PhysicalDeviceFeatures> for DeviceFeatures {
    fn from(native: vk::PhysicalDeviceFeatures) -> Self {
        let mut set = Self::empty();

        // One flag per native boolean; nothing is reinterpreted.
        macro_rules! collect {
            ($field:ident, $flag:ident) => {
                if native.$field == vk::TRUE {
                    set |= Self::$flag;
                }
            };
        }

        collect!(robust_buffer_access, ROBUST_BUFFER_ACCESS);
        collect!(full_draw_index_uint32, FULL_DRAW_INDEX_UINT32);
        collect!(image_cube_array, IMAGE_CUBE_ARRAY);
        collect!(independent_blend, INDEPENDENT_BLEND);
        collect!(geometry_shader, GEOMETRY_SHADER);
        collect!(tessellation_shader, TESSELLATION_SHADER);
        collect!(sample_rate_shading, SAMPLE_RATE_SHADING);
        collect!(dual_src_blend, DUAL_SRC_BLEND);
        collect!(logic_op, LOGIC_OP);
        collect!(multi_draw_indirect, MULTI_DRAW_INDIRECT);
        collect!(draw_indirect_first_instance, DRAW_INDIRECT_FIRST_INSTANCE);
        collect!(depth_clamp, DEPTH_CLAMP);
        collect!(depth_bias_clamp, DEPTH_BIAS_CLAMP);
        collect!(fill_mode_non_solid, FILL_MODE_NON_SOLID);
        collect!(depth_bounds, DEPTH_BOUNDS);
        collect!(wide_lines, WIDE_LINES);
        collect!(large_points, LARGE_POINTS);
        collect!(alpha_to_one, ALPHA_TO_ONE);
        collect!(multi_viewport, MULTI_VIEWPORT);
        collect!(sampler_anisotropy, SAMPLER_ANISOTROPY);
        collect!(texture_compression_etc2, TEXTURE_COMPRESSION_ETC2);
        collect!(texture_compression_astc_ldr, TEXTURE_COMPRESSION_ASTC_LDR);
        collect!(texture_compression_bc, TEXTURE_COMPRESSION_BC);
        collect!(occlusion_query_precise, OCCLUSION_QUERY_PRECISE);
        collect!(pipeline_statistics_query, PIPELINE_STATISTICS_QUERY);
        collect!(
            vertex_pipeline_stores_and_atomics,
            VERTEX_PIPELINE_STORES_AND_ATOMICS
        );
        collect!(fragment_stores_and_atomics, FRAGMENT_STORES_AND_ATOMICS);
        collect!(
            shader_tessellation_and_geometry_point_size,
            SHADER_TESSELLATION_AND_GEOMETRY_POINT_SIZE
        );
        collect!(shader_image_gather_extended, SHADER_IMAGE_GATHER_EXTENDED);
        collect!(
            shader_storage_image_extended_formats,
            SHADER_STORAGE_IMAGE_EXTENDED_FORMATS
        );
        collect!(
            shader_storage_image_multisample,
            SHADER_STORAGE_IMAGE_MULTISAMPLE
        );
        collect!(
            shader_storage_image_read_without_format,
            SHADER_STORAGE_IMAGE_READ_WITHOUT_FORMAT
        );
        collect!(
            shader_storage_image_write_without_format,
            SHADER_STORAGE_IMAGE_WRITE_WITHOUT_FORMAT
        );
        collect!(
            shader_uniform_buffer_array_dynamic_indexing,
            SHADER_UNIFORM_BUFFER_ARRAY_DYNAMIC_INDEXING
        );
        collect!(
            shader_sampled_image_array_dynamic_indexing,
            SHADER_SAMPLED_IMAGE_ARRAY_DYNAMIC_INDEXING
        );
        collect!(
            shader_storage_buffer_array_dynamic_indexing,
            SHADER_STORAGE_BUFFER_ARRAY_DYNAMIC_INDEXING
        );
        collect!(
            shader_storage_image_array_dynamic_indexing,
            SHADER_STORAGE_IMAGE_ARRAY_DYNAMIC_INDEXING
        );
        collect!(shader_clip_distance, SHADER_CLIP_DISTANCE);
        collect!(shader_cull_distance, SHADER_CULL_DISTANCE);
        collect!(shader_float64, SHADER_FLOAT64);
        collect!(shader_int64, SHADER_INT64);
        collect!(shader_int16, SHADER_INT16);
        collect!(shader_resource_residency, SHADER_RESOURCE_RESIDENCY);
        collect!(shader_resource_min_lod, SHADER_RESOURCE_MIN_LOD);
        collect!(sparse_binding, SPARSE_BINDING);
        collect!(sparse_residency_buffer, SPARSE_RESIDENCY_BUFFER);
        collect!(sparse_residency_image2_d, SPARSE_RESIDENCY_IMAGE_2D);
        collect!(sparse_residency_image3_d, SPARSE_RESIDENCY_IMAGE_3D);
        collect!(sparse_residency2_samples, SPARSE_RESIDENCY_2_SAMPLES);
        collect!(sparse_residency4_samples, SPARSE_RESIDENCY_4_SAMPLES);
        collect!(sparse_residency8_samples, SPARSE_RESIDENCY_8_SAMPLES);
        collect!(sparse_residency16_samples, SPARSE_RESIDENCY_16_SAMPLES);
        collect!(sparse_residency_aliased, SPARSE_RESIDENCY_ALIASED);
        collect!(variable_multisample_rate, VARIABLE_MULTISAMPLE_RATE);
        collect!(inherited_queries, INHERITED_QUERIES);

        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_kind_from_native_type() {
        assert_eq!(
            DeviceKind::from(vk::PhysicalDeviceType::DISCRETE_GPU),
            DeviceKind::DISCRETE
        );
        assert_eq!(
            DeviceKind::from(vk::PhysicalDeviceType::INTEGRATED_GPU),
            DeviceKind::INTEGRATED
        );
        assert_eq!(
            DeviceKind::from(vk::PhysicalDeviceType::VIRTUAL_GPU),
            DeviceKind::INDIRECT
        );
        assert_eq!(
            DeviceKind::from(vk::PhysicalDeviceType::CPU),
            DeviceKind::SOFTWARE
        );
        assert_eq!(
            DeviceKind::from(vk::PhysicalDeviceType::OTHER),
            DeviceKind::empty()
        );
    }

    #[test]
    fn queue_kind_from_native_flags() {
        let native = vk::QueueFlags::GRAPHICS
            | vk::QueueFlags::COMPUTE
            | vk::QueueFlags::TRANSFER
            | vk::QueueFlags::VIDEO_DECODE_KHR;
        let kind = QueueKind::from(native);
        assert!(kind.contains(QueueKind::GRAPHICS | QueueKind::COMPUTE | QueueKind::TRANSFER));
        assert!(kind.contains(QueueKind::VIDEO_DECODE));
        assert!(!kind.contains(QueueKind::SPARSE_BINDING));
        assert!(!kind.contains(QueueKind::OPTICAL_FLOW));
    }

    #[test]
    fn features_round_trip() {
        let native = vk::PhysicalDeviceFeatures {
            geometry_shader: vk::TRUE,
            wide_lines: vk::TRUE,
            sparse_binding: vk::TRUE,
            shader_int16: vk::TRUE,
            ..Default::default()
        };
        let features = DeviceFeatures::from(native);
        assert!(features.contains(DeviceFeatures::GEOMETRY_SHADER));
        assert!(features.contains(DeviceFeatures::WIDE_LINES));
        assert!(features.contains(DeviceFeatures::SPARSE_BINDING));
        assert!(features.contains(DeviceFeatures::SHADER_INT16));
        assert_eq!(features.bits().count_ones(), 4);
    }

    #[test]
    fn empty_native_features_is_empty_set() {
        let features = DeviceFeatures::from(vk::PhysicalDeviceFeatures::default());
        assert!(features.is_empty());
    }
}
