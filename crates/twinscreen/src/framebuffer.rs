//! In-memory 1bpp framebuffer.

/// 1bpp framebuffer for one screen, `WIDTH`x`HEIGHT` pixels stored in `BYTES`
/// bytes (`WIDTH / 8 * HEIGHT`).
///
/// Bit mapping within one line byte: bit 7 is the first pixel in that byte.
#[derive(Clone)]
pub struct FrameBuffer<const WIDTH: usize, const HEIGHT: usize, const BYTES: usize> {
    bytes: [u8; BYTES],
}

impl<const WIDTH: usize, const HEIGHT: usize, const BYTES: usize> Default
    for FrameBuffer<WIDTH, HEIGHT, BYTES>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const WIDTH: usize, const HEIGHT: usize, const BYTES: usize> FrameBuffer<WIDTH, HEIGHT, BYTES> {
    const LINE_BYTES: usize = WIDTH / 8;
    const LAYOUT_OK: () = assert!(
        WIDTH % 8 == 0 && BYTES == (WIDTH / 8) * HEIGHT,
        "framebuffer byte size must be WIDTH / 8 * HEIGHT"
    );

    /// Creates a new blank (all off) framebuffer.
    pub const fn new() -> Self {
        let () = Self::LAYOUT_OK;
        Self {
            bytes: [0u8; BYTES],
        }
    }

    /// Width in pixels.
    pub const fn width(&self) -> usize {
        WIDTH
    }

    /// Height in pixels.
    pub const fn height(&self) -> usize {
        HEIGHT
    }

    /// Clears framebuffer to off (`on = false`) or on (`on = true`).
    pub fn clear(&mut self, on: bool) {
        self.bytes.fill(if on { 0xFF } else { 0x00 });
    }

    /// Sets a pixel state.
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }

        let byte_index = y * Self::LINE_BYTES + (x / 8);
        let bit_mask = 1u8 << (7 - (x % 8));

        if on {
            self.bytes[byte_index] |= bit_mask;
        } else {
            self.bytes[byte_index] &= !bit_mask;
        }

        true
    }

    /// Reads a pixel state.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }

        let byte_index = y * Self::LINE_BYTES + (x / 8);
        let bit_mask = 1u8 << (7 - (x % 8));
        Some((self.bytes[byte_index] & bit_mask) != 0)
    }

    /// Number of pixels currently on.
    pub fn lit_pixels(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }
}
