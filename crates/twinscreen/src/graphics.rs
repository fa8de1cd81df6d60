use core::convert::Infallible;

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
};

use crate::FrameBuffer;

impl<const WIDTH: usize, const HEIGHT: usize, const BYTES: usize> DrawTarget
    for FrameBuffer<WIDTH, HEIGHT, BYTES>
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }

            let x = point.x as usize;
            let y = point.y as usize;
            let _ = self.set_pixel(x, y, color.is_on());
        }

        Ok(())
    }
}

impl<const WIDTH: usize, const HEIGHT: usize, const BYTES: usize> OriginDimensions
    for FrameBuffer<WIDTH, HEIGHT, BYTES>
{
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}
