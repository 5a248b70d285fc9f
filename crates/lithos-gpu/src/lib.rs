//! GPU capability negotiation for the Lithos engine.
//!
//! This crate provides:
//! - Vulkan loading and instance creation
//! - A portable capability descriptor model (kind, features, limits, queue
//!   families, extensions)
//! - Physical device enumeration into that model
//! - Requirement-driven device filtering
//!
//! Enumeration runs once at startup; descriptors are immutable snapshots.
//! Logical device creation from a selected descriptor is left to user code.

pub mod enumerate;
pub mod error;
pub mod filter;
pub mod flags;
pub mod gpu;
pub mod instance;
pub mod limits;

pub use enumerate::enumerate_gpus;
pub use error::{GpuError, Result};
pub use filter::{DeviceRequirements, LimitRequirement, QueueFamilyRequirement};
pub use flags::{DeviceFeatures, DeviceKind, QueueKind};
pub use gpu::{Gpu, GpuVendor, NativeGpuHandle, QueueFamily};
pub use instance::{required_instance_extensions, validation_layers, VulkanContext};
pub use limits::{CompareOp, DeviceLimits, LimitKind, LimitValue, SampleCounts};
