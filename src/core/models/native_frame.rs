use std::fmt;

/// Byte order of one 32-bit pixel in a platform framebuffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NativePixelLayout {
    /// Blue, green, red, then an ignored pad/alpha byte. X11 on little-endian servers.
    Bgrx,
    /// An ignored pad/alpha byte, then red, green, blue. CoreGraphics skip-first
    /// bitmaps and big-endian X11 servers.
    Xrgb,
}

impl fmt::Display for NativePixelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativePixelLayout::Bgrx => write!(f, "BGRX"),
            NativePixelLayout::Xrgb => write!(f, "XRGB"),
        }
    }
}

/// A captured image still in the platform's own format.
///
/// Implementors own the platform resources behind the pixels; dropping the
/// frame releases them. The normalizer takes frames by value so the release
/// happens exactly once, right after the pixels are copied out.
pub trait NativeFrame {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn bits_per_pixel(&self) -> u32;
    fn bytes_per_row(&self) -> usize;
    fn pixel_layout(&self) -> NativePixelLayout;
    fn pixel_bytes(&self) -> &[u8];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_layout_display_names() {
        assert_eq!(NativePixelLayout::Bgrx.to_string(), "BGRX");
        assert_eq!(NativePixelLayout::Xrgb.to_string(), "XRGB");
    }
}
