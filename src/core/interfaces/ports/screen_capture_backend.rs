use crate::core::models::{CaptureError, CaptureRequest, MonitorDescriptor, NativeFrame};
use crate::core::monitor_resolver::find_exact_monitor;

/// One platform's way of finding a monitor and grabbing its pixels.
///
/// Backends open and close their display-server session inside each call;
/// nothing is held between calls.
pub trait ScreenCaptureBackend: Send + Sync {
    type Frame: NativeFrame;

    fn enumerate_monitors(&self) -> Result<Vec<MonitorDescriptor>, CaptureError>;

    fn resolve_monitor(&self, request: &CaptureRequest) -> Result<MonitorDescriptor, CaptureError> {
        let monitors = self.enumerate_monitors()?;
        find_exact_monitor(&monitors, request)
    }

    fn acquire_frame(&self, monitor: &MonitorDescriptor) -> Result<Self::Frame, CaptureError>;
}
