//! Screen geometry shared by renderers and presenters.

/// Top screen width in pixels.
pub const TOP_WIDTH: usize = 400;
/// Top screen height in pixels.
pub const TOP_HEIGHT: usize = 240;
/// Bottom screen width in pixels.
pub const BOTTOM_WIDTH: usize = 320;
/// Bottom screen height in pixels.
pub const BOTTOM_HEIGHT: usize = 240;

/// Text console cell edge in pixels (square cells).
pub const CELL_SIZE: usize = 8;

/// Bytes per top-screen line.
pub const TOP_LINE_BYTES: usize = TOP_WIDTH / 8;
/// Bytes per bottom-screen line.
pub const BOTTOM_LINE_BYTES: usize = BOTTOM_WIDTH / 8;

/// Total top framebuffer size in bytes.
pub const TOP_BUFFER_SIZE: usize = TOP_LINE_BYTES * TOP_HEIGHT;
/// Total bottom framebuffer size in bytes.
pub const BOTTOM_BUFFER_SIZE: usize = BOTTOM_LINE_BYTES * BOTTOM_HEIGHT;

/// Horizontal offset of the bottom screen when both are stacked in one
/// top-width canvas (the bottom screen is centred under the top one).
pub const BOTTOM_STACK_OFFSET_X: usize = (TOP_WIDTH - BOTTOM_WIDTH) / 2;

/// Pixel origin of a 1-based console cell.
///
/// Returns `None` when the cell lies outside a `width`x`height` screen.
#[inline]
pub fn cell_origin(col: usize, row: usize, width: usize, height: usize) -> Option<(usize, usize)> {
    if col == 0 || row == 0 {
        return None;
    }

    let x = (col - 1) * CELL_SIZE;
    let y = (row - 1) * CELL_SIZE;
    if x + CELL_SIZE > width || y + CELL_SIZE > height {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_origin_is_one_based() {
        assert_eq!(cell_origin(1, 1, TOP_WIDTH, TOP_HEIGHT), Some((0, 0)));
        assert_eq!(cell_origin(2, 3, TOP_WIDTH, TOP_HEIGHT), Some((8, 16)));
        assert_eq!(cell_origin(0, 1, TOP_WIDTH, TOP_HEIGHT), None);
    }

    #[test]
    fn cell_origin_rejects_cells_past_the_edge() {
        assert_eq!(cell_origin(50, 30, TOP_WIDTH, TOP_HEIGHT), Some((392, 232)));
        assert_eq!(cell_origin(51, 1, TOP_WIDTH, TOP_HEIGHT), None);
        assert_eq!(cell_origin(41, 1, BOTTOM_WIDTH, BOTTOM_HEIGHT), None);
    }

    #[test]
    fn stacked_bottom_screen_is_centred() {
        assert_eq!(BOTTOM_STACK_OFFSET_X, 40);
    }
}
