mod capture_error;
mod capture_request;
mod monitor_descriptor;
mod native_frame;
mod rgba_image;

pub use capture_error::{CaptureError, CaptureErrorKind};
pub use capture_request::CaptureRequest;
pub use monitor_descriptor::{MonitorDescriptor, MonitorFlags};
pub use native_frame::{NativeFrame, NativePixelLayout};
pub use rgba_image::RgbaImage;
