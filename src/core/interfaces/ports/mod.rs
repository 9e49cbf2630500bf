mod screen_capture_backend;

pub use screen_capture_backend::ScreenCaptureBackend;
