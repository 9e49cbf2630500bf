//! Error types for the capture pipeline.

use thiserror::Error;

use super::CaptureRequest;

/// Category of a [`CaptureError`], for hosts that only branch on the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureErrorKind {
    InvalidArgument,
    DisplayUnavailable,
    MonitorNotFound,
    ImageAcquisitionFailed,
    ColorSpaceUnavailable,
    BitmapContextFailed,
    UnsupportedFrameFormat,
    NotImplemented,
}

/// Errors that abort a capture. None of them are retried.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Wrong arity or a non-numeric / out-of-range argument at the host boundary.
    #[error("{reason}")]
    InvalidArgument { reason: String },

    /// The display server could not be reached or opened.
    #[error("Could not find display: {reason}")]
    DisplayUnavailable { reason: String },

    /// No enumerated monitor has exactly the requested geometry.
    #[error("Could not find monitor matching {request}")]
    MonitorNotFound { request: CaptureRequest },

    /// The display server returned no usable image for a resolved monitor.
    #[error("Could not get image: {reason}")]
    ImageAcquisitionFailed { reason: String },

    #[error("Could not get color space")]
    ColorSpaceUnavailable,

    #[error("Could not create bitmap context: {reason}")]
    BitmapContextFailed { reason: String },

    /// The native frame is not 32 bits per pixel or its stride/buffer size
    /// cannot hold the reported dimensions.
    #[error("Unsupported native frame format: {reason}")]
    UnsupportedFrameFormat { reason: String },

    #[error("Screen capture is not implemented on {platform}")]
    NotImplemented { platform: &'static str },
}

impl CaptureError {
    pub fn kind(&self) -> CaptureErrorKind {
        match self {
            CaptureError::InvalidArgument { .. } => CaptureErrorKind::InvalidArgument,
            CaptureError::DisplayUnavailable { .. } => CaptureErrorKind::DisplayUnavailable,
            CaptureError::MonitorNotFound { .. } => CaptureErrorKind::MonitorNotFound,
            CaptureError::ImageAcquisitionFailed { .. } => {
                CaptureErrorKind::ImageAcquisitionFailed
            }
            CaptureError::ColorSpaceUnavailable => CaptureErrorKind::ColorSpaceUnavailable,
            CaptureError::BitmapContextFailed { .. } => CaptureErrorKind::BitmapContextFailed,
            CaptureError::UnsupportedFrameFormat { .. } => {
                CaptureErrorKind::UnsupportedFrameFormat
            }
            CaptureError::NotImplemented { .. } => CaptureErrorKind::NotImplemented,
        }
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        CaptureError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn display_unavailable(reason: impl ToString) -> Self {
        CaptureError::DisplayUnavailable {
            reason: reason.to_string(),
        }
    }

    #[cfg(any(unix, test))]
    pub(crate) fn image_acquisition_failed(reason: impl ToString) -> Self {
        CaptureError::ImageAcquisitionFailed {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn unsupported_frame_format(reason: impl Into<String>) -> Self {
        CaptureError::UnsupportedFrameFormat {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_not_found_message_names_requested_bounds() {
        let error = CaptureError::MonitorNotFound {
            request: CaptureRequest::for_bounds(5000, 5000, 800, 600),
        };

        assert_eq!(
            error.to_string(),
            "Could not find monitor matching 800x600 at (5000, 5000)"
        );
        assert_eq!(error.kind(), CaptureErrorKind::MonitorNotFound);
    }

    #[test]
    fn test_invalid_argument_message_is_reason_only() {
        let error = CaptureError::invalid_argument("Wrong number of arguments");

        assert_eq!(error.to_string(), "Wrong number of arguments");
        assert_eq!(error.kind(), CaptureErrorKind::InvalidArgument);
    }

    #[test]
    fn test_kind_maps_platform_failures() {
        assert_eq!(
            CaptureError::display_unavailable("no DISPLAY").kind(),
            CaptureErrorKind::DisplayUnavailable
        );
        assert_eq!(
            CaptureError::image_acquisition_failed("null image").kind(),
            CaptureErrorKind::ImageAcquisitionFailed
        );
        assert_eq!(
            CaptureError::ColorSpaceUnavailable.kind(),
            CaptureErrorKind::ColorSpaceUnavailable
        );
        assert_eq!(
            CaptureError::NotImplemented { platform: "windows" }.kind(),
            CaptureErrorKind::NotImplemented
        );
    }
}
