use x11rb::connection::Connection;
use x11rb::protocol::randr::{ConnectionExt as _, MonitorInfo};
use x11rb::protocol::xproto::{ConnectionExt as _, GetImageReply, ImageFormat, ImageOrder, Window};
use x11rb::rust_connection::RustConnection;

use crate::core::interfaces::ports::ScreenCaptureBackend;
use crate::core::models::{
    CaptureError, MonitorDescriptor, MonitorFlags, NativeFrame, NativePixelLayout,
};
use crate::global_constants::LOG_TAG_X11;

const ALL_PLANES: u32 = u32::MAX;

/// Captures monitors from the X server's root window.
pub struct X11ScreenCapturer;

/// A `GetImage` reply for one monitor, plus the server's pixmap format for it.
pub struct X11Frame {
    reply: GetImageReply,
    width: u32,
    height: u32,
    bits_per_pixel: u32,
    bytes_per_row: usize,
    layout: NativePixelLayout,
}

impl NativeFrame for X11Frame {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn bits_per_pixel(&self) -> u32 {
        self.bits_per_pixel
    }

    fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    fn pixel_layout(&self) -> NativePixelLayout {
        self.layout
    }

    fn pixel_bytes(&self) -> &[u8] {
        &self.reply.data
    }
}

impl X11ScreenCapturer {
    pub fn initialize() -> Self {
        log::debug!("{} initializing x11 screen capturer", LOG_TAG_X11);
        Self
    }

    fn open_display_session(&self) -> Result<(RustConnection, Window), CaptureError> {
        let (connection, screen_number) =
            x11rb::connect(None).map_err(CaptureError::display_unavailable)?;

        let root = connection
            .setup()
            .roots
            .get(screen_number)
            .map(|screen| screen.root)
            .ok_or_else(|| {
                CaptureError::display_unavailable(format!("no screen {}", screen_number))
            })?;

        log::debug!(
            "{} opened display session, screen {}, root window {}",
            LOG_TAG_X11,
            screen_number,
            root
        );

        Ok((connection, root))
    }

    fn query_active_monitors(
        &self,
        connection: &RustConnection,
        root: Window,
    ) -> Result<Vec<MonitorInfo>, CaptureError> {
        let reply = connection
            .randr_get_monitors(root, true)
            .map_err(CaptureError::display_unavailable)?
            .reply()
            .map_err(CaptureError::display_unavailable)?;

        Ok(reply.monitors)
    }

    fn read_root_window_region(
        &self,
        connection: &RustConnection,
        root: Window,
        monitor: &MonitorDescriptor,
    ) -> Result<GetImageReply, CaptureError> {
        let x = i16::try_from(monitor.x).map_err(CaptureError::image_acquisition_failed)?;
        let y = i16::try_from(monitor.y).map_err(CaptureError::image_acquisition_failed)?;
        let width = u16::try_from(monitor.width).map_err(CaptureError::image_acquisition_failed)?;
        let height =
            u16::try_from(monitor.height).map_err(CaptureError::image_acquisition_failed)?;

        connection
            .get_image(ImageFormat::Z_PIXMAP, root, x, y, width, height, ALL_PLANES)
            .map_err(CaptureError::image_acquisition_failed)?
            .reply()
            .map_err(CaptureError::image_acquisition_failed)
    }

    fn build_frame(
        &self,
        connection: &RustConnection,
        monitor: &MonitorDescriptor,
        reply: GetImageReply,
    ) -> Result<X11Frame, CaptureError> {
        let setup = connection.setup();
        let pixmap_format = setup
            .pixmap_formats
            .iter()
            .find(|format| format.depth == reply.depth)
            .ok_or_else(|| {
                CaptureError::unsupported_frame_format(format!(
                    "no pixmap format for depth {}",
                    reply.depth
                ))
            })?;

        let bits_per_pixel = u32::from(pixmap_format.bits_per_pixel);
        let bytes_per_row = padded_row_length(
            monitor.width,
            bits_per_pixel,
            u32::from(pixmap_format.scanline_pad),
        );
        let layout = layout_for_byte_order(setup.image_byte_order);

        log::debug!(
            "{} got image depth {}, {} bpp, {} bytes per row, {}",
            LOG_TAG_X11,
            reply.depth,
            bits_per_pixel,
            bytes_per_row,
            layout
        );

        Ok(X11Frame {
            reply,
            width: monitor.width,
            height: monitor.height,
            bits_per_pixel,
            bytes_per_row,
            layout,
        })
    }
}

impl ScreenCaptureBackend for X11ScreenCapturer {
    type Frame = X11Frame;

    fn enumerate_monitors(&self) -> Result<Vec<MonitorDescriptor>, CaptureError> {
        let (connection, root) = self.open_display_session()?;
        let monitors = self.query_active_monitors(&connection, root)?;

        log::debug!("{} server reports {} monitors", LOG_TAG_X11, monitors.len());

        Ok(monitors.iter().map(descriptor_from_monitor_info).collect())
    }

    fn acquire_frame(&self, monitor: &MonitorDescriptor) -> Result<X11Frame, CaptureError> {
        let (connection, root) = self.open_display_session()?;
        let reply = self.read_root_window_region(&connection, root, monitor)?;
        let frame = self.build_frame(&connection, monitor, reply)?;

        drop(connection);
        log::debug!("{} closed display session", LOG_TAG_X11);

        Ok(frame)
    }
}

fn descriptor_from_monitor_info(info: &MonitorInfo) -> MonitorDescriptor {
    MonitorDescriptor {
        id: info.name,
        x: i32::from(info.x),
        y: i32::from(info.y),
        width: u32::from(info.width),
        height: u32::from(info.height),
        flags: MonitorFlags {
            primary: info.primary,
            automatic: info.automatic,
        },
    }
}

fn layout_for_byte_order(byte_order: ImageOrder) -> NativePixelLayout {
    if byte_order == ImageOrder::MSB_FIRST {
        NativePixelLayout::Xrgb
    } else {
        NativePixelLayout::Bgrx
    }
}

/// Bytes in one ZPixmap scanline, rounded up to the server's scanline pad.
fn padded_row_length(width: u32, bits_per_pixel: u32, scanline_pad_bits: u32) -> usize {
    let row_bits = u64::from(width) * u64::from(bits_per_pixel);
    let pad = u64::from(scanline_pad_bits.max(8));
    let padded_bits = row_bits.div_ceil(pad) * pad;
    (padded_bits / 8) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor_info(x: i16, y: i16, width: u16, height: u16) -> MonitorInfo {
        MonitorInfo {
            name: 42,
            primary: true,
            automatic: false,
            x,
            y,
            width,
            height,
            width_in_millimeters: 600,
            height_in_millimeters: 340,
            outputs: vec![],
        }
    }

    #[test]
    fn test_initialize_creates_capturer() {
        let capturer = X11ScreenCapturer::initialize();

        assert!(std::mem::size_of_val(&capturer) == 0);
    }

    #[test]
    fn test_descriptor_from_monitor_info_copies_geometry_and_flags() {
        let descriptor = descriptor_from_monitor_info(&monitor_info(-1920, 0, 1920, 1080));

        assert_eq!(descriptor.id, 42);
        assert_eq!(descriptor.x, -1920);
        assert_eq!(descriptor.y, 0);
        assert_eq!(descriptor.width, 1920);
        assert_eq!(descriptor.height, 1080);
        assert!(descriptor.flags.primary);
        assert!(!descriptor.flags.automatic);
    }

    #[test]
    fn test_layout_follows_server_byte_order() {
        assert_eq!(layout_for_byte_order(ImageOrder::LSB_FIRST), NativePixelLayout::Bgrx);
        assert_eq!(layout_for_byte_order(ImageOrder::MSB_FIRST), NativePixelLayout::Xrgb);
    }

    #[test]
    fn test_padded_row_length_for_32_bpp_is_four_bytes_per_pixel() {
        assert_eq!(padded_row_length(1920, 32, 32), 7680);
    }

    #[test]
    fn test_padded_row_length_rounds_up_to_scanline_pad() {
        assert_eq!(padded_row_length(3, 24, 32), 12);
        assert_eq!(padded_row_length(5, 16, 32), 12);
    }
}
