//! Application context handed to user code.

use lithos_gpu::{Gpu, VulkanContext};
use lithos_platform::DisplayInfo;
use std::sync::Arc;
use winit::window::Window;

/// Everything the framework negotiated on behalf of the application.
///
/// The selection is final for the lifetime of the app: descriptors are
/// snapshots and the framework does not re-enumerate. User code creates its
/// logical device from `gpu` (via [`Gpu::native`]) and its surface from
/// `window`.
pub struct AppContext {
    /// The application window.
    pub window: Arc<Window>,
    /// Loaded Vulkan library and instance.
    pub vulkan: VulkanContext,
    /// The selected GPU.
    pub gpu: Gpu,
    /// All displays found at startup.
    pub displays: Vec<DisplayInfo>,
    /// The primary display.
    pub primary_display: DisplayInfo,
}
