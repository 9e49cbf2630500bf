use crate::global_constants::BYTES_PER_PIXEL;

/// Canonical capture output: row-major R,G,B,A bytes with alpha always 255.
#[derive(Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for RgbaImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbaImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("length", &self.bytes.len())
            .finish()
    }
}

impl RgbaImage {
    pub(crate) fn build_from_normalized_bytes(width: u32, height: u32, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(
            bytes.len(),
            width as usize * height as usize * BYTES_PER_PIXEL
        );

        log::debug!(
            "[RGBA_IMAGE] building image: {}x{}, {} bytes",
            width,
            height,
            bytes.len()
        );

        Self {
            width,
            height,
            bytes,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Always `width * height * 4`.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Hands the buffer to the caller. Nothing else keeps a reference to it.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn into_image_buffer(self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.bytes)
    }
}
