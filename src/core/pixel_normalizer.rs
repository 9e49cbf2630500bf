use crate::core::models::{CaptureError, NativeFrame, NativePixelLayout, RgbaImage};
use crate::global_constants::{
    BITS_PER_PIXEL, BYTES_PER_PIXEL, LOG_TAG_NORMALIZER, MESSAGE_FRAME_RELEASED, OPAQUE_ALPHA,
};

/// Copies `frame` into a fresh canonical RGBA buffer and releases it.
///
/// The frame is dropped on every path out of this function, after the copy
/// on success and before the error is returned on failure.
pub fn normalize_native_frame<F: NativeFrame>(frame: F) -> Result<RgbaImage, CaptureError> {
    let row_length = validate_frame_layout(&frame)?;

    let width = frame.width();
    let height = frame.height();
    let layout = frame.pixel_layout();
    let stride = frame.bytes_per_row();

    log::debug!(
        "{} normalizing {}x{} {} frame, stride {}",
        LOG_TAG_NORMALIZER,
        width,
        height,
        layout,
        stride
    );

    let mut rgba_bytes = vec![0u8; row_length * height as usize];
    let source_bytes = frame.pixel_bytes();

    for (row_index, output_row) in rgba_bytes.chunks_exact_mut(row_length).enumerate() {
        let row_start = row_index * stride;
        let source_row = &source_bytes[row_start..row_start + row_length];
        remap_row(layout, source_row, output_row);
    }

    drop(frame);
    log::debug!("{} {}", LOG_TAG_NORMALIZER, MESSAGE_FRAME_RELEASED);

    Ok(RgbaImage::build_from_normalized_bytes(width, height, rgba_bytes))
}

/// Returns the number of pixel bytes in one row once the frame is known to
/// hold `height` rows of 32-bit pixels.
fn validate_frame_layout<F: NativeFrame>(frame: &F) -> Result<usize, CaptureError> {
    if frame.width() == 0 || frame.height() == 0 {
        return Err(CaptureError::unsupported_frame_format(format!(
            "empty frame {}x{}",
            frame.width(),
            frame.height()
        )));
    }

    if frame.bits_per_pixel() != BITS_PER_PIXEL {
        return Err(CaptureError::unsupported_frame_format(format!(
            "{} bits per pixel, expected {}",
            frame.bits_per_pixel(),
            BITS_PER_PIXEL
        )));
    }

    let row_length = frame.width() as usize * BYTES_PER_PIXEL;
    let stride = frame.bytes_per_row();
    if stride < row_length {
        return Err(CaptureError::unsupported_frame_format(format!(
            "stride {} is shorter than a {}-byte row",
            stride, row_length
        )));
    }

    let required_length = stride * (frame.height() as usize - 1) + row_length;
    let available_length = frame.pixel_bytes().len();
    if available_length < required_length {
        return Err(CaptureError::unsupported_frame_format(format!(
            "{} pixel bytes, need at least {}",
            available_length, required_length
        )));
    }

    Ok(row_length)
}

fn remap_row(layout: NativePixelLayout, source_row: &[u8], output_row: &mut [u8]) {
    let source_pixels = source_row.chunks_exact(BYTES_PER_PIXEL);
    let output_pixels = output_row.chunks_exact_mut(BYTES_PER_PIXEL);

    for (source, output) in source_pixels.zip(output_pixels) {
        let [red, green, blue] = match layout {
            NativePixelLayout::Bgrx => [source[2], source[1], source[0]],
            NativePixelLayout::Xrgb => [source[1], source[2], source[3]],
        };

        // Screen content is opaque even when the source reports 0 here.
        output.copy_from_slice(&[red, green, blue, OPAQUE_ALPHA]);
    }
}
