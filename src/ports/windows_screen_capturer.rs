use crate::core::interfaces::ports::ScreenCaptureBackend;
use crate::core::models::{
    CaptureError, MonitorDescriptor, MonitorFlags, NativeFrame, NativePixelLayout,
};
use crate::global_constants::LOG_TAG_WINDOWS;

const PLATFORM_NAME: &str = "windows";

/// Enumerates monitors through xcap. Framebuffer acquisition has no Windows
/// backend yet and always fails with `NotImplemented`.
pub struct WindowsScreenCapturer;

/// No Windows frame can exist until acquisition is implemented.
pub enum WindowsFrame {}

impl NativeFrame for WindowsFrame {
    fn width(&self) -> u32 {
        match *self {}
    }

    fn height(&self) -> u32 {
        match *self {}
    }

    fn bits_per_pixel(&self) -> u32 {
        match *self {}
    }

    fn bytes_per_row(&self) -> usize {
        match *self {}
    }

    fn pixel_layout(&self) -> NativePixelLayout {
        match *self {}
    }

    fn pixel_bytes(&self) -> &[u8] {
        match *self {}
    }
}

impl WindowsScreenCapturer {
    pub fn initialize() -> Self {
        log::debug!("{} initializing windows screen capturer", LOG_TAG_WINDOWS);
        Self
    }

    fn describe_monitor(&self, monitor: &xcap::Monitor) -> Result<MonitorDescriptor, CaptureError> {
        Ok(MonitorDescriptor {
            id: monitor.id().map_err(CaptureError::display_unavailable)?,
            x: monitor.x().map_err(CaptureError::display_unavailable)?,
            y: monitor.y().map_err(CaptureError::display_unavailable)?,
            width: monitor.width().map_err(CaptureError::display_unavailable)?,
            height: monitor.height().map_err(CaptureError::display_unavailable)?,
            flags: MonitorFlags {
                primary: monitor
                    .is_primary()
                    .map_err(CaptureError::display_unavailable)?,
                automatic: false,
            },
        })
    }
}

impl ScreenCaptureBackend for WindowsScreenCapturer {
    type Frame = WindowsFrame;

    fn enumerate_monitors(&self) -> Result<Vec<MonitorDescriptor>, CaptureError> {
        let monitors = xcap::Monitor::all().map_err(CaptureError::display_unavailable)?;

        log::debug!("{} found {} monitors", LOG_TAG_WINDOWS, monitors.len());

        monitors
            .iter()
            .map(|monitor| self.describe_monitor(monitor))
            .collect()
    }

    fn acquire_frame(&self, monitor: &MonitorDescriptor) -> Result<WindowsFrame, CaptureError> {
        log::warn!(
            "{} no framebuffer backend for monitor {}",
            LOG_TAG_WINDOWS,
            monitor.id
        );

        Err(CaptureError::NotImplemented {
            platform: PLATFORM_NAME,
        })
    }
}
