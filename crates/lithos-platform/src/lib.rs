//! Platform abstraction for the Lithos engine.
//!
//! Provides display enumeration, the primary display adapter query used for
//! primary-GPU correlation, and window handle plumbing via winit.

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use thiserror::Error;
use winit::window::Window;

pub mod adapter;
pub mod display;

pub use adapter::primary_adapter_name;
pub use display::{enumerate_displays, DisplayInfo, DisplayKind, DisplayRequirements};

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Window creation failed: {0}")]
    WindowCreation(String),
    #[error("Event loop error: {0}")]
    EventLoop(String),
    #[error("No primary display found")]
    NoPrimaryDisplay,
}

pub type Result<T> = std::result::Result<T, PlatformError>;

/// Platform window configuration.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Lithos Engine".to_string(),
            width: 1920,
            height: 1080,
            resizable: true,
        }
    }
}

/// Get raw handles from a window for native surface creation.
pub fn get_raw_handles(
    window: &Window,
) -> (
    raw_window_handle::RawDisplayHandle,
    raw_window_handle::RawWindowHandle,
) {
    (
        window.display_handle().unwrap().as_raw(),
        window.window_handle().unwrap().as_raw(),
    )
}
