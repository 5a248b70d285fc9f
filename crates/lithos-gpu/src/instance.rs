//! Vulkan loading and instance creation.
//!
//! The instance is the capability provider the enumerator queries; nothing
//! here inspects devices. Logical device creation is left to user code after
//! selection.

use crate::enumerate::enumerate_gpus;
use crate::error::{GpuError, Result};
use crate::gpu::Gpu;
use ash::vk;
use std::ffi::{CStr, CString};

/// Required instance extensions for the engine.
///
/// Surface extensions are enabled so user code can create a presentation
/// surface for the selected device after hand-off.
pub fn required_instance_extensions() -> Vec<&'static CStr> {
    let extensions = vec![
        ash::khr::surface::NAME,
        #[cfg(target_os = "windows")]
        ash::khr::win32_surface::NAME,
        #[cfg(target_os = "linux")]
        ash::khr::xlib_surface::NAME,
        #[cfg(target_os = "linux")]
        ash::khr::wayland_surface::NAME,
        #[cfg(target_os = "macos")]
        ash::ext::metal_surface::NAME,
        #[cfg(target_os = "macos")]
        ash::khr::portability_enumeration::NAME,
    ];

    extensions
}

/// Validation layers to enable in debug builds.
pub fn validation_layers() -> Vec<&'static CStr> {
    vec![c"VK_LAYER_KHRONOS_validation"]
}

/// Create a Vulkan instance.
///
/// # Safety
/// The entry must be a valid Vulkan entry point.
unsafe fn create_instance(
    entry: &ash::Entry,
    app_name: &str,
    enable_validation: bool,
) -> Result<ash::Instance> {
    let app_name = CString::new(app_name).unwrap_or_default();
    let engine_name = CString::new("Lithos").unwrap_or_default();

    let app_info = vk::ApplicationInfo::default()
        .application_name(&app_name)
        .application_version(vk::make_api_version(0, 0, 1, 0))
        .engine_name(&engine_name)
        .engine_version(vk::make_api_version(0, 0, 1, 0))
        .api_version(vk::API_VERSION_1_3);

    let extension_names: Vec<*const i8> = required_instance_extensions()
        .iter()
        .map(|ext| ext.as_ptr())
        .collect();

    let layers = if enable_validation {
        validation_layers()
    } else {
        vec![]
    };

    // Check that requested layers are available
    let available_layers = entry.enumerate_instance_layer_properties()?;
    for layer in &layers {
        let found = available_layers.iter().any(|props| {
            let name = CStr::from_ptr(props.layer_name.as_ptr());
            name == *layer
        });
        if !found {
            tracing::warn!("Validation layer {:?} not available", layer);
        }
    }

    let layer_names: Vec<*const i8> = layers.iter().map(|l| l.as_ptr()).collect();

    // Required for MoltenVK on macOS
    #[cfg(target_os = "macos")]
    let create_flags = vk::InstanceCreateFlags::ENUMERATE_PORTABILITY_KHR;
    #[cfg(not(target_os = "macos"))]
    let create_flags = vk::InstanceCreateFlags::empty();

    let create_info = vk::InstanceCreateInfo::default()
        .application_info(&app_info)
        .enabled_extension_names(&extension_names)
        .enabled_layer_names(&layer_names)
        .flags(create_flags);

    let instance = entry.create_instance(&create_info, None)?;

    Ok(instance)
}

/// Owns the loaded Vulkan library and the instance created from it.
///
/// This is the opaque capability provider for enumeration; it holds no
/// device objects.
pub struct VulkanContext {
    // Entry must be kept alive for the lifetime of the instance
    #[allow(dead_code)]
    entry: ash::Entry,
    instance: ash::Instance,
}

impl VulkanContext {
    /// Load Vulkan and create an instance.
    ///
    /// Load or creation failure is fatal to startup for callers that need a
    /// device; no retry happens here.
    pub fn new(app_name: &str, enable_validation: bool) -> Result<Self> {
        let entry = unsafe { ash::Entry::load() }
            .map_err(|e| GpuError::LibraryLoad(e.to_string()))?;

        let instance = unsafe { create_instance(&entry, app_name, enable_validation) }?;

        Ok(Self { entry, instance })
    }

    /// Get the Vulkan instance handle.
    pub fn instance(&self) -> &ash::Instance {
        &self.instance
    }

    /// Enumerate physical devices into portable descriptors.
    ///
    /// `primary_adapter` is the OS-reported primary display adapter string,
    /// used to mark the matching device as primary (see
    /// [`enumerate_gpus`]).
    pub fn enumerate_gpus(&self, primary_adapter: Option<&str>) -> Result<Vec<Gpu>> {
        unsafe { enumerate_gpus(&self.instance, primary_adapter) }
    }
}

impl Drop for VulkanContext {
    fn drop(&mut self) {
        unsafe {
            self.instance.destroy_instance(None);
        }
    }
}
