use std::ffi::c_void;

use core_graphics::base::kCGImageAlphaNoneSkipFirst;
use core_graphics::color_space::{kCGColorSpaceSRGB, CGColorSpace};
use core_graphics::context::CGContext;
use core_graphics::display::{CGDirectDisplayID, CGDisplay};
use core_graphics::geometry::{CGPoint, CGRect, CGSize};
use core_graphics::image::CGImage;
use core_graphics::sys;
use foreign_types::ForeignType;

use crate::core::interfaces::ports::ScreenCaptureBackend;
use crate::core::models::{
    CaptureError, CaptureRequest, MonitorDescriptor, MonitorFlags, NativeFrame, NativePixelLayout,
};
use crate::core::monitor_resolver::find_exact_monitor;
use crate::global_constants::{BITS_PER_PIXEL, BYTES_PER_PIXEL, LOG_TAG_CORE_GRAPHICS};

const BITS_PER_COMPONENT: usize = 8;

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    fn CGBitmapContextCreate(
        data: *mut c_void,
        width: usize,
        height: usize,
        bits_per_component: usize,
        bytes_per_row: usize,
        space: sys::CGColorSpaceRef,
        bitmap_info: u32,
    ) -> sys::CGContextRef;
}

/// Captures displays through CoreGraphics, redrawn into an sRGB bitmap.
pub struct CoreGraphicsScreenCapturer;

/// Pixels drawn into a skip-first bitmap context. The context and the source
/// image are released before this frame is handed out; only the bitmap
/// memory remains.
pub struct CoreGraphicsFrame {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl NativeFrame for CoreGraphicsFrame {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn bits_per_pixel(&self) -> u32 {
        BITS_PER_PIXEL
    }

    fn bytes_per_row(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    fn pixel_layout(&self) -> NativePixelLayout {
        NativePixelLayout::Xrgb
    }

    fn pixel_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Bitmap sized to the monitor's point geometry. HiDPI display images are
/// scaled down into it while drawing.
#[derive(Debug, PartialEq, Eq)]
struct BitmapGeometry {
    width: usize,
    height: usize,
    bytes_per_row: usize,
}

impl CoreGraphicsScreenCapturer {
    pub fn initialize() -> Self {
        log::debug!(
            "{} initializing core graphics screen capturer",
            LOG_TAG_CORE_GRAPHICS
        );
        Self
    }

    fn display_at_point(
        &self,
        request: &CaptureRequest,
    ) -> Result<CGDirectDisplayID, CaptureError> {
        let point = CGPoint::new(f64::from(request.x), f64::from(request.y));
        let (displays, display_count) = CGDisplay::displays_with_point(point, 1)
            .map_err(|code| CaptureError::display_unavailable(format!("CGError {}", code)))?;

        display_from_point_lookup(&displays, display_count, request)
    }

    fn create_srgb_color_space(&self) -> Result<CGColorSpace, CaptureError> {
        let name = unsafe { kCGColorSpaceSRGB };
        CGColorSpace::create_with_name(name).ok_or(CaptureError::ColorSpaceUnavailable)
    }

    fn draw_into_bitmap(
        &self,
        image: &CGImage,
        color_space: &CGColorSpace,
        monitor: &MonitorDescriptor,
    ) -> Result<CoreGraphicsFrame, CaptureError> {
        let geometry = bitmap_geometry_for_monitor(monitor)?;
        let mut bytes = vec![0u8; geometry.bytes_per_row * geometry.height];

        {
            let raw_context = unsafe {
                CGBitmapContextCreate(
                    bytes.as_mut_ptr() as *mut c_void,
                    geometry.width,
                    geometry.height,
                    BITS_PER_COMPONENT,
                    geometry.bytes_per_row,
                    color_space.as_ptr(),
                    kCGImageAlphaNoneSkipFirst,
                )
            };
            let context = context_from_raw(raw_context, &geometry)?;
            let bounds = CGRect::new(
                &CGPoint::new(0.0, 0.0),
                &CGSize::new(geometry.width as f64, geometry.height as f64),
            );
            context.draw_image(bounds, image);
        }

        Ok(CoreGraphicsFrame {
            width: monitor.width,
            height: monitor.height,
            bytes,
        })
    }
}

impl ScreenCaptureBackend for CoreGraphicsScreenCapturer {
    type Frame = CoreGraphicsFrame;

    fn enumerate_monitors(&self) -> Result<Vec<MonitorDescriptor>, CaptureError> {
        let display_ids = CGDisplay::active_displays()
            .map_err(|code| CaptureError::display_unavailable(format!("CGError {}", code)))?;

        log::debug!(
            "{} window server reports {} active displays",
            LOG_TAG_CORE_GRAPHICS,
            display_ids.len()
        );

        Ok(display_ids.into_iter().map(descriptor_for_display).collect())
    }

    fn resolve_monitor(
        &self,
        request: &CaptureRequest,
    ) -> Result<MonitorDescriptor, CaptureError> {
        let display_id = self.display_at_point(request)?;
        find_exact_monitor(&[descriptor_for_display(display_id)], request)
    }

    fn acquire_frame(
        &self,
        monitor: &MonitorDescriptor,
    ) -> Result<CoreGraphicsFrame, CaptureError> {
        let image = CGDisplay::new(monitor.id).image().ok_or_else(|| {
            CaptureError::image_acquisition_failed(format!(
                "CGDisplayCreateImage returned null for display {}",
                monitor.id
            ))
        })?;
        let color_space = self.create_srgb_color_space()?;
        let frame = self.draw_into_bitmap(&image, &color_space, monitor)?;

        log::debug!(
            "{} drew {}x{} display {} image into {}x{} sRGB bitmap",
            LOG_TAG_CORE_GRAPHICS,
            image.width(),
            image.height(),
            monitor.id,
            frame.width,
            frame.height
        );

        Ok(frame)
    }
}

/// A point outside every display is a missing monitor, not an unreachable
/// window server.
fn display_from_point_lookup(
    displays: &[CGDirectDisplayID],
    display_count: u32,
    request: &CaptureRequest,
) -> Result<CGDirectDisplayID, CaptureError> {
    match displays.first() {
        Some(display_id) if display_count >= 1 => Ok(*display_id),
        _ => {
            log::warn!(
                "{} no display contains ({}, {})",
                LOG_TAG_CORE_GRAPHICS,
                request.x,
                request.y
            );
            Err(CaptureError::MonitorNotFound { request: *request })
        }
    }
}

fn bitmap_geometry_for_monitor(
    monitor: &MonitorDescriptor,
) -> Result<BitmapGeometry, CaptureError> {
    if monitor.width == 0 || monitor.height == 0 {
        return Err(CaptureError::BitmapContextFailed {
            reason: format!("monitor is {}x{}", monitor.width, monitor.height),
        });
    }

    let width = monitor.width as usize;
    let height = monitor.height as usize;
    let bytes_per_row = width
        .checked_mul(BYTES_PER_PIXEL)
        .filter(|row| row.checked_mul(height).is_some())
        .ok_or_else(|| CaptureError::BitmapContextFailed {
            reason: format!("{}x{} bitmap overflows", width, height),
        })?;

    Ok(BitmapGeometry {
        width,
        height,
        bytes_per_row,
    })
}

fn context_from_raw(
    raw_context: sys::CGContextRef,
    geometry: &BitmapGeometry,
) -> Result<CGContext, CaptureError> {
    if raw_context.is_null() {
        return Err(CaptureError::BitmapContextFailed {
            reason: format!(
                "CGBitmapContextCreate returned null for {}x{}",
                geometry.width, geometry.height
            ),
        });
    }

    Ok(unsafe { CGContext::from_ptr(raw_context) })
}

fn descriptor_for_display(display_id: CGDirectDisplayID) -> MonitorDescriptor {
    let display = CGDisplay::new(display_id);
    descriptor_from_bounds(display_id, display.bounds(), display.is_main())
}

fn descriptor_from_bounds(
    display_id: CGDirectDisplayID,
    bounds: CGRect,
    is_main: bool,
) -> MonitorDescriptor {
    MonitorDescriptor {
        id: display_id,
        x: bounds.origin.x as i32,
        y: bounds.origin.y as i32,
        width: bounds.size.width as u32,
        height: bounds.size.height as u32,
        flags: MonitorFlags {
            primary: is_main,
            automatic: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CaptureErrorKind;

    fn retina_monitor() -> MonitorDescriptor {
        MonitorDescriptor {
            id: 1,
            x: 0,
            y: 0,
            width: 1440,
            height: 900,
            flags: MonitorFlags::default(),
        }
    }

    #[test]
    fn test_initialize_creates_capturer() {
        let capturer = CoreGraphicsScreenCapturer::initialize();

        assert!(std::mem::size_of_val(&capturer) == 0);
    }

    #[test]
    fn test_descriptor_from_bounds_uses_point_geometry() {
        let bounds = CGRect::new(&CGPoint::new(-1440.0, 0.0), &CGSize::new(1440.0, 900.0));

        let descriptor = descriptor_from_bounds(3, bounds, false);

        assert_eq!(descriptor.id, 3);
        assert_eq!(descriptor.x, -1440);
        assert_eq!(descriptor.width, 1440);
        assert_eq!(descriptor.height, 900);
        assert!(!descriptor.flags.primary);
    }

    #[test]
    fn test_frame_reports_skip_first_layout() {
        let frame = CoreGraphicsFrame {
            width: 2,
            height: 1,
            bytes: vec![0; 8],
        };

        assert_eq!(frame.pixel_layout(), NativePixelLayout::Xrgb);
        assert_eq!(frame.bytes_per_row(), 8);
    }

    #[test]
    fn test_point_outside_every_display_is_monitor_not_found() {
        let request = CaptureRequest::for_bounds(5000, 5000, 800, 600);

        let error = display_from_point_lookup(&[0], 0, &request).unwrap_err();

        assert_eq!(error.kind(), CaptureErrorKind::MonitorNotFound);
    }

    #[test]
    fn test_empty_point_lookup_is_monitor_not_found() {
        let request = CaptureRequest::for_bounds(5000, 5000, 800, 600);

        let result = display_from_point_lookup(&[], 0, &request);

        assert!(matches!(
            result,
            Err(CaptureError::MonitorNotFound { request: r }) if r == request
        ));
    }

    #[test]
    fn test_point_lookup_returns_first_display() {
        let request = CaptureRequest::for_bounds(0, 0, 1440, 900);

        let display_id = display_from_point_lookup(&[69_733_378], 1, &request).unwrap();

        assert_eq!(display_id, 69_733_378);
    }

    #[test]
    fn test_bitmap_geometry_matches_monitor_points() {
        let monitor = retina_monitor();

        let geometry = bitmap_geometry_for_monitor(&monitor).unwrap();

        assert_eq!(
            geometry,
            BitmapGeometry {
                width: 1440,
                height: 900,
                bytes_per_row: 1440 * 4,
            }
        );
        assert_eq!(
            geometry.bytes_per_row * geometry.height,
            CaptureRequest::for_bounds(0, 0, 1440, 900).expected_byte_length()
        );
    }

    #[test]
    fn test_bitmap_geometry_rejects_empty_monitor() {
        let mut monitor = retina_monitor();
        monitor.height = 0;

        let error = bitmap_geometry_for_monitor(&monitor).unwrap_err();

        assert_eq!(error.kind(), CaptureErrorKind::BitmapContextFailed);
    }

    #[test]
    fn test_null_bitmap_context_is_a_typed_error() {
        let geometry = bitmap_geometry_for_monitor(&retina_monitor()).unwrap();

        let result = context_from_raw(std::ptr::null_mut(), &geometry);

        assert!(matches!(
            result.map_err(|error| error.kind()),
            Err(CaptureErrorKind::BitmapContextFailed)
        ));
    }
}
