pub const APPLICATION_NAME: &str = "screenshot-bounds";

pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_RESOLVER: &str = "[RESOLVER]";
pub const LOG_TAG_NORMALIZER: &str = "[NORMALIZER]";
pub const LOG_TAG_HOST: &str = "[HOST]";
pub const LOG_TAG_CLI: &str = "[CLI]";
#[cfg(all(unix, not(target_os = "macos")))]
pub const LOG_TAG_X11: &str = "[X11]";
#[cfg(target_os = "macos")]
pub const LOG_TAG_CORE_GRAPHICS: &str = "[COREGRAPHICS]";
#[cfg(windows)]
pub const LOG_TAG_WINDOWS: &str = "[WINDOWS]";

pub const HOST_FUNCTION_NAME: &str = "getScreenshotForBounds";
pub const HOST_ARGUMENT_COUNT: usize = 4;

pub const BYTES_PER_PIXEL: usize = 4;
pub const BITS_PER_PIXEL: u32 = 32;
pub const OPAQUE_ALPHA: u8 = 255;

pub const ERROR_WRONG_ARGUMENT_COUNT: &str = "Wrong number of arguments";
pub const ERROR_ARGUMENT_NOT_A_NUMBER: &str = "Argument is not a number";
pub const ERROR_ARGUMENT_OUT_OF_RANGE: &str = "Argument is out of range";
pub const ERROR_CONTEXT_CAPTURE: &str = "Unable to capture screenshot for bounds";
pub const ERROR_CONTEXT_LIST_MONITORS: &str = "Unable to list monitors";
pub const ERROR_CONTEXT_WRITE_OUTPUT: &str = "Unable to write RGBA output";

pub const MESSAGE_MONITOR_SCANNED: &str = "scanned monitor at";
pub const MESSAGE_MONITOR_MATCHED: &str = "matched monitor at";
pub const MESSAGE_FRAME_RELEASED: &str = "native frame released after copy";
