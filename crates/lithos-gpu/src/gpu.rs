//! The portable GPU descriptor.
//!
//! A [`Gpu`] is a read-only snapshot of one physical device, taken once at
//! enumeration time. It never re-queries the driver and is never mutated;
//! the enumeration result list owns these snapshots for its lifetime and
//! they may be shared read-only across threads.

use crate::flags::{DeviceFeatures, DeviceKind, QueueKind};
use crate::limits::DeviceLimits;
use ash::vk;
use std::collections::HashSet;

/// GPU vendor identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpuVendor {
    Nvidia,
    Amd,
    Intel,
    Apple,
    Other(u32),
}

impl GpuVendor {
    /// Identify vendor from PCI vendor ID.
    #[must_use]
    pub const fn from_vendor_id(id: u32) -> Self {
        match id {
            0x10DE => Self::Nvidia,
            0x1002 => Self::Amd,
            0x8086 => Self::Intel,
            0x106B => Self::Apple,
            other => Self::Other(other),
        }
    }
}

/// Opaque back-reference to the native physical device.
///
/// Kept alongside the portable descriptor so user code can create a logical
/// device from the selection without the descriptor's public surface leaning
/// on the native handle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeGpuHandle(pub(crate) vk::PhysicalDevice);

impl NativeGpuHandle {
    /// Escape hatch for device creation. Only valid for the instance the
    /// descriptor was enumerated from.
    #[must_use]
    pub const fn raw(self) -> vk::PhysicalDevice {
        self.0
    }
}

/// One queue family on a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFamily {
    /// Operations this family's queues support.
    pub kind: QueueKind,
    /// Number of queues available in the family.
    pub count: u32,
    /// Native family index, preserved verbatim: it is what user code passes
    /// when requesting a queue, even after filtering drops or reorders
    /// families.
    pub index: u32,
}

impl QueueFamily {
    /// Build from native queue family properties at the given family index.
    #[must_use]
    pub fn from_native(index: u32, properties: &vk::QueueFamilyProperties) -> Self {
        Self {
            kind: QueueKind::from(properties.queue_flags),
            count: properties.queue_count,
            index,
        }
    }
}

/// Capability snapshot of one physical device.
#[derive(Debug, Clone)]
pub struct Gpu {
    /// Device name, for identification and logging only.
    pub name: String,
    /// GPU vendor.
    pub vendor: GpuVendor,
    /// What kind of device this is (may carry several bits).
    pub kind: DeviceKind,
    /// Reported graphics API version.
    pub api_version: u32,
    /// Reported driver version.
    pub driver_version: u32,
    /// Supported optional capabilities.
    pub features: DeviceFeatures,
    /// Reported numeric and boolean limits.
    pub limits: DeviceLimits,
    /// Queue families in native order.
    pub queue_families: Vec<QueueFamily>,
    /// Supported device extension names.
    pub extensions: HashSet<String>,
    /// Native handle for later device creation; `None` for synthetic
    /// descriptors built in tests.
    pub native: Option<NativeGpuHandle>,
}

impl Gpu {
    /// Get a human-readable summary of the device.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} ({:?}, {:?}) - API {}.{}.{} - {} queue families, {} extensions",
            self.name,
            self.vendor,
            self.kind,
            vk::api_version_major(self.api_version),
            vk::api_version_minor(self.api_version),
            vk::api_version_patch(self.api_version),
            self.queue_families.len(),
            self.extensions.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_identification() {
        assert_eq!(GpuVendor::from_vendor_id(0x10DE), GpuVendor::Nvidia);
        assert_eq!(GpuVendor::from_vendor_id(0x1002), GpuVendor::Amd);
        assert_eq!(GpuVendor::from_vendor_id(0x8086), GpuVendor::Intel);
        assert_eq!(GpuVendor::from_vendor_id(0x1234), GpuVendor::Other(0x1234));
    }

    #[test]
    fn queue_family_keeps_native_index() {
        let properties = vk::QueueFamilyProperties {
            queue_flags: vk::QueueFlags::TRANSFER,
            queue_count: 2,
            ..Default::default()
        };
        let family = QueueFamily::from_native(3, &properties);
        assert_eq!(family.index, 3);
        assert_eq!(family.count, 2);
        assert_eq!(family.kind, QueueKind::TRANSFER);
    }
}
