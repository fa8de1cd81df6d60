//! Rasterizes text consoles into 1bpp frames on the 8x8 cell grid.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_5X8},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use fragrance_core::console::TextConsole;
use twinscreen::geometry::{CELL_SIZE, cell_origin};

const GLYPH_WIDTH: u32 = 5;
const GLYPH_INSET_X: i32 = 1;

/// `FONT_5X8` advanced to the cell pitch so text columns line up with cells.
const CELL_FONT: MonoFont<'static> = MonoFont {
    character_spacing: CELL_SIZE as u32 - GLYPH_WIDTH,
    ..FONT_5X8
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CellRenderer {
    inverted: bool,
}

impl CellRenderer {
    pub const fn new() -> Self {
        Self { inverted: false }
    }

    /// Dark text on a lit background when `true`.
    pub const fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Clears `target` and draws every non-blank row of `console`.
    pub fn render<const COLS: usize, const ROWS: usize, T>(
        &self,
        console: &TextConsole<COLS, ROWS>,
        target: &mut T,
    ) -> Result<(), T::Error>
    where
        T: DrawTarget<Color = BinaryColor>,
    {
        let (foreground, background) = if self.inverted {
            (BinaryColor::Off, BinaryColor::On)
        } else {
            (BinaryColor::On, BinaryColor::Off)
        };

        target.clear(background)?;
        let size = target.bounding_box().size;
        let style = MonoTextStyle::new(&CELL_FONT, foreground);

        for row in 1..=ROWS {
            let text = console.row_text(row);
            if text.is_empty() {
                continue;
            }

            let Some((x, y)) = cell_origin(1, row, size.width as usize, size.height as usize)
            else {
                break;
            };
            let origin = Point::new(x as i32 + GLYPH_INSET_X, y as i32);
            Text::with_baseline(text, origin, style, Baseline::Top).draw(target)?;
        }

        Ok(())
    }
}
