//! Application runner and event loop.

use std::sync::Arc;
use std::time::Instant;

use lithos_core::filter;
use lithos_gpu::limits::{CompareOp, LimitKind};
use lithos_gpu::{DeviceKind, DeviceRequirements, GpuError, QueueKind, VulkanContext};
use lithos_platform::{enumerate_displays, primary_adapter_name, DisplayKind, PlatformError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::app::LithosApp;
use crate::context::AppContext;

/// Application configuration.
#[derive(Clone)]
pub struct AppConfig {
    /// Window title.
    pub title: String,
    /// Initial window width.
    pub width: u32,
    /// Initial window height.
    pub height: u32,
    /// Enable Vulkan validation layers (default: debug builds only).
    pub validation: bool,
    /// What the application requires of the selected GPU.
    pub device_requirements: DeviceRequirements,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Lithos Engine".to_string(),
            width: 1280,
            height: 720,
            validation: cfg!(debug_assertions),
            device_requirements: default_device_requirements(),
        }
    }
}

impl AppConfig {
    /// Create a new config with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Enable or disable validation layers.
    #[must_use]
    pub fn with_validation(mut self, validation: bool) -> Self {
        self.validation = validation;
        self
    }

    /// Replace the device requirements.
    #[must_use]
    pub fn with_device_requirements(mut self, requirements: DeviceRequirements) -> Self {
        self.device_requirements = requirements;
        self
    }
}

/// The requirement set applied when the application does not supply one.
///
/// A hardware GPU with a graphics+transfer queue family, presentation
/// support, and a workable texture ceiling.
fn default_device_requirements() -> DeviceRequirements {
    DeviceRequirements::new()
        .kind(DeviceKind::DISCRETE | DeviceKind::INTEGRATED)
        .queue_family(QueueKind::GRAPHICS | QueueKind::TRANSFER, 1)
        .extension("VK_KHR_swapchain")
        .limit(LimitKind::MaxImageDimension2D, CompareOp::GreaterOrEqual, 4096u32)
}

/// Run a LithosApp with the given configuration.
///
/// This function initializes logging, creates the window, negotiates the
/// device/display selection, and runs the event loop until the application
/// exits. Failed negotiation (no primary display, no suitable GPU, native
/// API failure) is logged at the highest severity and returned as an error;
/// nothing is retried.
pub fn run_app<A: LithosApp + 'static>(config: AppConfig) -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("{} starting...", config.title);

    let event_loop = EventLoop::new().map_err(|e| PlatformError::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut runner = AppRunner::<A> {
        config,
        state: None,
        fatal: None,
    };

    event_loop
        .run_app(&mut runner)
        .map_err(|e| PlatformError::EventLoop(e.to_string()))?;

    match runner.fatal {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Internal application runner that implements winit's ApplicationHandler.
struct AppRunner<A: LithosApp> {
    config: AppConfig,
    state: Option<AppState<A>>,
    fatal: Option<anyhow::Error>,
}

/// Internal application state.
struct AppState<A: LithosApp> {
    ctx: AppContext,
    app: A,
    last_update: Instant,
}

impl<A: LithosApp + 'static> ApplicationHandler for AppRunner<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match self.create_state(event_loop) {
            Ok(state) => {
                self.state = Some(state);
                info!("Application ready");
            }
            Err(e) => {
                error!("Failed to initialize application: {e}");
                self.fatal = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // Let the app handle the event first
        if let Some(state) = &mut self.state {
            if state.app.on_event(&event) {
                return;
            }
        }

        if let WindowEvent::CloseRequested = event {
            info!("Close requested");
            if let Some(mut state) = self.state.take() {
                state.app.cleanup(&mut state.ctx);
            }
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            let now = Instant::now();
            let dt = now.duration_since(state.last_update).as_secs_f32();
            state.last_update = now;
            state.app.update(&state.ctx, dt);
        }
    }
}

impl<A: LithosApp + 'static> AppRunner<A> {
    /// Negotiate the device/display selection and initialize the app.
    ///
    /// This is the single startup pass: enumerate displays, enumerate GPUs,
    /// filter, hand off. Every failure in here aborts startup.
    fn create_state(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<AppState<A>> {
        // Displays first: the primary display is required and its adapter
        // string drives primary-GPU correlation.
        let displays = enumerate_displays(event_loop);
        for disp in &displays {
            info!("Display: {}", disp.summary());
        }

        let primary_display = displays
            .iter()
            .find(|display| display.kind.contains(DisplayKind::PRIMARY))
            .cloned()
            .ok_or(PlatformError::NoPrimaryDisplay)?;

        // Create window
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        // Load Vulkan and enumerate devices
        let vulkan = VulkanContext::new(&self.config.title, self.config.validation)?;
        let adapter = primary_adapter_name();
        let gpus = vulkan.enumerate_gpus(adapter.as_deref())?;
        for gpu in &gpus {
            info!("GPU: {}", gpu.summary());
        }

        // Select the first device satisfying the requirements; ranking
        // beyond enumeration order is the application's concern.
        let selected = filter(&gpus, &self.config.device_requirements);
        let gpu = selected
            .first()
            .copied()
            .cloned()
            .ok_or(GpuError::NoSuitableDevice)?;

        info!("Selected GPU: {}", gpu.summary());

        let mut ctx = AppContext {
            window,
            vulkan,
            gpu,
            displays,
            primary_display,
        };

        let app = A::init(&mut ctx)?;

        Ok(AppState {
            ctx,
            app,
            last_update: Instant::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ash::vk;
    use lithos_gpu::limits::DeviceLimits;
    use lithos_gpu::{DeviceFeatures, Gpu, GpuVendor, QueueFamily};
    use std::collections::HashSet;

    fn capable_gpu() -> Gpu {
        let mut extensions = HashSet::new();
        extensions.insert("VK_KHR_swapchain".to_string());
        Gpu {
            name: "Capable".to_string(),
            vendor: GpuVendor::Nvidia,
            kind: DeviceKind::DISCRETE | DeviceKind::PRIMARY,
            api_version: vk::make_api_version(0, 1, 3, 0),
            driver_version: 1,
            features: DeviceFeatures::empty(),
            limits: DeviceLimits {
                max_image_dimension_2d: 16384,
                ..Default::default()
            },
            queue_families: vec![QueueFamily {
                kind: QueueKind::GRAPHICS | QueueKind::COMPUTE | QueueKind::TRANSFER,
                count: 1,
                index: 0,
            }],
            extensions,
            native: None,
        }
    }

    #[test]
    fn default_requirements_accept_a_capable_device() {
        let gpus = [capable_gpu()];
        let selected = filter(&gpus, &default_device_requirements());
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn default_requirements_reject_a_software_rasterizer() {
        let mut gpu = capable_gpu();
        gpu.kind = DeviceKind::SOFTWARE;
        let gpus = [gpu];
        assert!(filter(&gpus, &default_device_requirements()).is_empty());
    }
}
