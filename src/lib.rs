//! Capture one monitor's pixels as a raw, row-major RGBA buffer.
//!
//! A request names the monitor by its exact rectangle in virtual-screen
//! coordinates. The platform backend finds that monitor, reads its
//! framebuffer and the result is normalized to R,G,B,A with opaque alpha.

pub mod core;
pub mod global_constants;
pub mod host_boundary;
pub mod ports;


use std::sync::Arc;

pub use crate::core::interfaces::ports::ScreenCaptureBackend;
pub use crate::core::models::{
    CaptureError, CaptureErrorKind, CaptureRequest, MonitorDescriptor, MonitorFlags, NativeFrame,
    NativePixelLayout, RgbaImage,
};
pub use crate::core::orchestrators::{CaptureOrchestrator, CapturePhase};
pub use crate::host_boundary::get_screenshot_for_bounds;
pub use crate::ports::PlatformScreenCapturer;

pub fn capture_screenshot_for_bounds(
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) -> Result<RgbaImage, CaptureError> {
    platform_orchestrator().capture(&CaptureRequest::for_bounds(x, y, width, height))
}

pub fn list_monitors() -> Result<Vec<MonitorDescriptor>, CaptureError> {
    platform_orchestrator().list_monitors()
}

fn platform_orchestrator() -> CaptureOrchestrator<PlatformScreenCapturer> {
    CaptureOrchestrator::build(Arc::new(PlatformScreenCapturer::initialize()))
}
