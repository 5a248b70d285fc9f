//! Application framework for the Lithos engine.
//!
//! This crate provides a trait-based application framework that handles
//! the startup negotiation boilerplate:
//! - Window creation and event loop handling
//! - Display and GPU enumeration
//! - Requirement-driven device selection
//!
//! The selected device/display pair is handed to user code via
//! [`AppContext`]; logical device and surface creation stay on the
//! application side.
//!
//! # Example
//!
//! ```no_run
//! use lithos_app::{AppConfig, AppContext, LithosApp, run_app};
//!
//! struct MyApp {
//!     // Application state
//! }
//!
//! impl LithosApp for MyApp {
//!     fn init(ctx: &mut AppContext) -> anyhow::Result<Self> {
//!         println!("running on {}", ctx.gpu.name);
//!         Ok(MyApp {})
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     run_app::<MyApp>(AppConfig::default())
//! }
//! ```

mod app;
mod context;
mod runner;

pub use app::LithosApp;
pub use context::AppContext;
pub use runner::{run_app, AppConfig};

// Re-export commonly used types for convenience
pub use lithos_gpu::{DeviceKind, DeviceRequirements, Gpu, QueueKind};
pub use lithos_platform::{DisplayInfo, DisplayKind, DisplayRequirements};
pub use winit::event::WindowEvent;
