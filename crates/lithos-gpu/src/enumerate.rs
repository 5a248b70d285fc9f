//! Physical device enumeration.
//!
//! Queries the native API once and translates every device into the
//! portable descriptor model. Descriptors are snapshots: nothing here is
//! re-queried after this pass.

use crate::error::Result;
use crate::flags::{DeviceFeatures, DeviceKind};
use crate::gpu::{Gpu, GpuVendor, NativeGpuHandle, QueueFamily};
use ash::vk;
use std::collections::HashSet;
use std::ffi::CStr;
use tracing::{debug, warn};

/// Enumerate all physical devices into [`Gpu`] descriptors.
///
/// `primary_adapter` is the OS-reported primary display adapter device
/// string. The device whose name matches it exactly is marked
/// [`DeviceKind::PRIMARY`]. Name matching is a known-fragile correlation;
/// when nothing matches, the list is returned without a primary-flagged
/// device and the condition is logged.
///
/// Enumeration failure is returned as an error; the caller decides whether
/// that aborts startup. There are no retries.
///
/// # Safety
/// The instance must be valid.
pub unsafe fn enumerate_gpus(
    instance: &ash::Instance,
    primary_adapter: Option<&str>,
) -> Result<Vec<Gpu>> {
    let devices = instance.enumerate_physical_devices()?;

    let gpus: Vec<Gpu> = devices
        .iter()
        .map(|&device| describe_device(instance, device, primary_adapter))
        .collect();

    if !gpus.iter().any(|gpu| gpu.kind.contains(DeviceKind::PRIMARY)) {
        match primary_adapter {
            Some(adapter) => warn!(
                "No enumerated GPU matched the primary adapter string {adapter:?}; \
                 continuing without a primary-flagged GPU"
            ),
            None => debug!("No primary adapter string available on this platform"),
        }
    }

    Ok(gpus)
}

/// Translate one native device into a descriptor.
///
/// Pure translation: one portable field per native field, no decision logic.
///
/// # Safety
/// The instance and physical device must be valid.
unsafe fn describe_device(
    instance: &ash::Instance,
    device: vk::PhysicalDevice,
    primary_adapter: Option<&str>,
) -> Gpu {
    let properties = instance.get_physical_device_properties(device);
    let features = instance.get_physical_device_features(device);
    let queue_family_properties = instance.get_physical_device_queue_family_properties(device);

    let extensions = instance
        .enumerate_device_extension_properties(device)
        .unwrap_or_default();

    let extensions: HashSet<String> = extensions
        .iter()
        .filter_map(|ext| {
            CStr::from_ptr(ext.extension_name.as_ptr())
                .to_str()
                .ok()
                .map(String::from)
        })
        .collect();

    let name = CStr::from_ptr(properties.device_name.as_ptr())
        .to_string_lossy()
        .into_owned();

    let mut kind = DeviceKind::from(properties.device_type);
    if primary_adapter == Some(name.as_str()) {
        kind |= DeviceKind::PRIMARY;
    }

    let queue_families = queue_family_properties
        .iter()
        .enumerate()
        .map(|(index, family)| QueueFamily::from_native(index as u32, family))
        .collect();

    Gpu {
        name,
        vendor: GpuVendor::from_vendor_id(properties.vendor_id),
        kind,
        api_version: properties.api_version,
        driver_version: properties.driver_version,
        features: DeviceFeatures::from(features),
        limits: properties.limits.into(),
        queue_families,
        extensions,
        native: Some(NativeGpuHandle(device)),
    }
}
