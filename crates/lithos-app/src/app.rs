//! `LithosApp` trait definition.

use crate::context::AppContext;
use winit::event::WindowEvent;

/// Trait for Lithos applications.
///
/// Implement this trait to create a new application using the Lithos
/// engine. The framework handles window creation, display and GPU
/// enumeration, and device selection; `init` receives the selected
/// device/display pair in the [`AppContext`] and takes it from there
/// (logical device and surface creation are the application's business).
pub trait LithosApp: Sized {
    /// Initialize the application.
    ///
    /// Called once when the application starts, after the window exists and
    /// a GPU has been selected.
    fn init(ctx: &mut AppContext) -> anyhow::Result<Self>;

    /// Update application state.
    ///
    /// Called continuously while the event loop is idle.
    ///
    /// # Arguments
    /// * `ctx` - Application context with window and selection access
    /// * `dt` - Delta time in seconds since last update
    ///
    /// Default implementation does nothing.
    #[allow(unused_variables)]
    fn update(&mut self, ctx: &AppContext, dt: f32) {}

    /// Handle window events.
    ///
    /// Return `true` if the event was handled and should not be processed
    /// further.
    ///
    /// Default implementation does nothing and returns `false`.
    #[allow(unused_variables)]
    fn on_event(&mut self, event: &WindowEvent) -> bool {
        false
    }

    /// Cleanup before shutdown.
    ///
    /// Default implementation does nothing.
    #[allow(unused_variables)]
    fn cleanup(&mut self, ctx: &mut AppContext) {}
}
