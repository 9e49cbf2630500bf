#[cfg(target_os = "macos")]
mod core_graphics_screen_capturer;
#[cfg(windows)]
mod windows_screen_capturer;
#[cfg(all(unix, not(target_os = "macos")))]
mod x11_screen_capturer;

#[cfg(target_os = "macos")]
pub use core_graphics_screen_capturer::{CoreGraphicsFrame, CoreGraphicsScreenCapturer};
#[cfg(windows)]
pub use windows_screen_capturer::{WindowsFrame, WindowsScreenCapturer};
#[cfg(all(unix, not(target_os = "macos")))]
pub use x11_screen_capturer::{X11Frame, X11ScreenCapturer};

#[cfg(target_os = "macos")]
pub type PlatformScreenCapturer = CoreGraphicsScreenCapturer;
#[cfg(windows)]
pub type PlatformScreenCapturer = WindowsScreenCapturer;
#[cfg(all(unix, not(target_os = "macos")))]
pub type PlatformScreenCapturer = X11ScreenCapturer;

#[cfg(not(any(unix, windows)))]
compile_error!("screenshot-bounds supports X11 on Unix, macOS and Windows targets only");
