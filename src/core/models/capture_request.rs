use std::fmt;

use serde::{Deserialize, Serialize};

/// Rectangle of the monitor to capture, in virtual-screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRequest {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRequest {
    pub fn for_bounds(x: i32, y: i32, width: u32, height: u32) -> Self {
        log::debug!(
            "[CAPTURE_REQUEST] creating request {}x{} at ({}, {})",
            width,
            height,
            x,
            y
        );

        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn expected_byte_length(&self) -> usize {
        self.width as usize * self.height as usize * crate::global_constants::BYTES_PER_PIXEL
    }
}

impl fmt::Display for CaptureRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.width, self.height, self.x, self.y)
    }
}
