use serde::{Deserialize, Serialize};

use super::CaptureRequest;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorFlags {
    pub primary: bool,
    /// Set by the display server when the monitor was created automatically
    /// from an output rather than configured by the user.
    pub automatic: bool,
}

/// One physical monitor as reported by the platform, in the same coordinate
/// space as [`CaptureRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorDescriptor {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub flags: MonitorFlags,
}

impl MonitorDescriptor {
    pub fn matches_exactly(&self, request: &CaptureRequest) -> bool {
        self.x == request.x
            && self.y == request.y
            && self.width == request.width
            && self.height == request.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor_at(x: i32, y: i32, width: u32, height: u32) -> MonitorDescriptor {
        MonitorDescriptor {
            id: 1,
            x,
            y,
            width,
            height,
            flags: MonitorFlags::default(),
        }
    }

    #[test]
    fn test_matches_exactly_with_identical_geometry_returns_true() {
        let monitor = monitor_at(1920, 0, 2560, 1440);
        let request = CaptureRequest::for_bounds(1920, 0, 2560, 1440);

        assert!(monitor.matches_exactly(&request));
    }

    #[test]
    fn test_matches_exactly_rejects_each_differing_field() {
        let monitor = monitor_at(0, 0, 1920, 1080);

        assert!(!monitor.matches_exactly(&CaptureRequest::for_bounds(1, 0, 1920, 1080)));
        assert!(!monitor.matches_exactly(&CaptureRequest::for_bounds(0, 1, 1920, 1080)));
        assert!(!monitor.matches_exactly(&CaptureRequest::for_bounds(0, 0, 1919, 1080)));
        assert!(!monitor.matches_exactly(&CaptureRequest::for_bounds(0, 0, 1920, 1081)));
    }

    #[test]
    fn test_serializes_flags_as_nested_object() {
        let mut monitor = monitor_at(0, 0, 1920, 1080);
        monitor.flags.primary = true;

        let json = serde_json::to_value(monitor).unwrap();

        assert_eq!(json["flags"]["primary"], true);
        assert_eq!(json["flags"]["automatic"], false);
        assert_eq!(json["width"], 1920);
    }
}
