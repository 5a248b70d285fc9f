//! GPU error types.

use ash::vk;
use thiserror::Error;

/// GPU-related errors.
#[derive(Error, Debug)]
pub enum GpuError {
    /// Vulkan error.
    #[error("Vulkan error: {0}")]
    Vulkan(#[from] vk::Result),

    /// The Vulkan loader could not be found or initialized.
    #[error("Failed to load Vulkan library: {0}")]
    LibraryLoad(String),

    /// No enumerated GPU satisfied the device requirements.
    #[error("No suitable GPU found")]
    NoSuitableDevice,
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, GpuError>;
