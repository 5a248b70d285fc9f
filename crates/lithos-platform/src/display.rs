//! Display enumeration and display descriptors.
//!
//! A [`DisplayInfo`] is a read-only snapshot of one attached monitor, taken
//! at enumeration time. At most one display per enumeration pass is marked
//! primary; a pass without a primary display is valid and logged by the
//! caller that cares.

use bitflags::bitflags;
use lithos_core::{Criteria, Rect};
use tracing::debug;
use winit::event_loop::ActiveEventLoop;
use winit::monitor::MonitorHandle;

/// Bit depth reported when the backend exposes no video modes.
const DEFAULT_BITS_PER_PIXEL: u32 = 32;

bitflags! {
    /// Role of a display.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DisplayKind: u8 {
        /// The OS-designated primary display.
        const PRIMARY = 1 << 0;
        /// Any other attached display.
        const ADDITIONAL = 1 << 1;
    }
}

/// Capability snapshot of one attached display.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayInfo {
    /// OS monitor name, when reported.
    pub name: Option<String>,
    /// Primary or additional; exactly one bit is set.
    pub kind: DisplayKind,
    /// Geometry in OS-scaled (logical) coordinates.
    pub logical_rect: Rect,
    /// Geometry in native pixels.
    pub physical_rect: Rect,
    /// Current color depth in bits per pixel.
    pub bits_per_pixel: u32,
    /// OS scale factor linking logical and physical geometry.
    pub scale_factor: f64,
}

impl DisplayInfo {
    /// Get a human-readable summary of the display.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} ({:?}) - {}x{} @ ({}, {}), {} bpp, scale {}",
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.kind,
            self.physical_rect.width,
            self.physical_rect.height,
            self.physical_rect.x,
            self.physical_rect.y,
            self.bits_per_pixel,
            self.scale_factor,
        )
    }
}

/// What the application requires of a display.
#[derive(Debug, Clone, Default)]
pub struct DisplayRequirements {
    /// Acceptable display roles; a display must carry ANY of these bits.
    /// Empty means unconstrained.
    pub kind: DisplayKind,
    /// Minimum native resolution, when required.
    pub min_physical_size: Option<(u32, u32)>,
    /// Minimum color depth, when required.
    pub min_bits_per_pixel: Option<u32>,
}

impl DisplayRequirements {
    /// Create an empty requirement set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept displays carrying any of the given kind bits.
    #[must_use]
    pub fn kind(mut self, kind: DisplayKind) -> Self {
        self.kind = kind;
        self
    }

    /// Require a minimum native resolution.
    #[must_use]
    pub fn min_physical_size(mut self, width: u32, height: u32) -> Self {
        self.min_physical_size = Some((width, height));
        self
    }

    /// Require a minimum color depth.
    #[must_use]
    pub fn min_bits_per_pixel(mut self, bits: u32) -> Self {
        self.min_bits_per_pixel = Some(bits);
        self
    }
}

impl Criteria<DisplayInfo> for DisplayRequirements {
    fn matches(&self, candidate: &DisplayInfo) -> bool {
        if !self.kind.is_empty() && !candidate.kind.intersects(self.kind) {
            return false;
        }
        if let Some((width, height)) = self.min_physical_size {
            if candidate.physical_rect.width < width || candidate.physical_rect.height < height {
                return false;
            }
        }
        if let Some(bits) = self.min_bits_per_pixel {
            if candidate.bits_per_pixel < bits {
                return false;
            }
        }
        true
    }
}

/// Enumerate attached displays into [`DisplayInfo`] descriptors.
///
/// The primary display is the one the platform reports; when the platform
/// reports none, the display whose logical origin sits at (0, 0) is taken
/// instead (OS convention for the primary monitor). Finding no primary at
/// all is a valid outcome; callers decide whether that is fatal.
pub fn enumerate_displays(event_loop: &ActiveEventLoop) -> Vec<DisplayInfo> {
    let monitors: Vec<MonitorHandle> = event_loop.available_monitors().collect();
    let platform_primary = event_loop
        .primary_monitor()
        .and_then(|primary| monitors.iter().position(|monitor| *monitor == primary));

    let logical_rects: Vec<Rect> = monitors.iter().map(logical_rect).collect();
    let primary = pick_primary(platform_primary, &logical_rects);
    if primary.is_none() {
        debug!("Platform reported no primary monitor and none sits at the origin");
    }

    monitors
        .iter()
        .enumerate()
        .map(|(index, monitor)| {
            let kind = if primary == Some(index) {
                DisplayKind::PRIMARY
            } else {
                DisplayKind::ADDITIONAL
            };
            describe_monitor(monitor, kind, logical_rects[index])
        })
        .collect()
}

/// Resolve which display, if any, is primary.
///
/// The platform-reported handle wins; the origin heuristic is the fallback.
fn pick_primary(platform_primary: Option<usize>, logical_rects: &[Rect]) -> Option<usize> {
    platform_primary.or_else(|| logical_rects.iter().position(Rect::at_origin))
}

fn logical_rect(monitor: &MonitorHandle) -> Rect {
    let scale = monitor.scale_factor();
    let position = monitor.position().to_logical::<f64>(scale);
    let size = monitor.size().to_logical::<f64>(scale);
    Rect::new(
        position.x.round() as i32,
        position.y.round() as i32,
        size.width.round() as u32,
        size.height.round() as u32,
    )
}

fn describe_monitor(monitor: &MonitorHandle, kind: DisplayKind, logical_rect: Rect) -> DisplayInfo {
    let position = monitor.position();
    let size = monitor.size();
    let physical_rect = Rect::new(position.x, position.y, size.width, size.height);

    // Current depth: deepest mode at the monitor's current resolution.
    let bits_per_pixel = monitor
        .video_modes()
        .filter(|mode| mode.size() == size)
        .map(|mode| u32::from(mode.bit_depth()))
        .max()
        .unwrap_or(DEFAULT_BITS_PER_PIXEL);

    DisplayInfo {
        name: monitor.name(),
        kind,
        logical_rect,
        physical_rect,
        bits_per_pixel,
        scale_factor: monitor.scale_factor(),
    }
}
