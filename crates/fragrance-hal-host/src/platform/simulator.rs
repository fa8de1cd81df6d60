//! Desktop window showing both screens stacked, bottom screen centered.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use embedded_graphics_simulator::{
    BinaryColorTheme, OutputSettings, OutputSettingsBuilder, SimulatorDisplay, Window,
};
use log::{debug, info};
use twinscreen::{
    BottomFrame, FrameBuffer, TopFrame,
    geometry::{BOTTOM_HEIGHT, BOTTOM_STACK_OFFSET_X, TOP_HEIGHT, TOP_WIDTH},
};

use super::display::Presenter;
use crate::input::{KeyFeed, keyboard};

const WINDOW_SCALE: u32 = 2;

pub struct SimulatorPresenter {
    title: &'static str,
    canvas: SimulatorDisplay<BinaryColor>,
    settings: OutputSettings,
    window: Option<Window>,
    keys: KeyFeed,
    closed: bool,
}

impl SimulatorPresenter {
    pub fn new(title: &'static str, keys: KeyFeed) -> Self {
        let settings = OutputSettingsBuilder::new()
            .scale(WINDOW_SCALE)
            .theme(BinaryColorTheme::OledWhite)
            .build();

        Self {
            title,
            canvas: SimulatorDisplay::new(Size::new(
                TOP_WIDTH as u32,
                (TOP_HEIGHT + BOTTOM_HEIGHT) as u32,
            )),
            settings,
            window: None,
            keys,
            closed: false,
        }
    }

    /// Set once the window reported a quit; later frames are dropped.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn pump_events(&mut self) {
        let Some(window) = self.window.as_mut() else {
            return;
        };

        for event in window.events() {
            keyboard::apply_event(&self.keys, event);
        }
    }
}

impl Presenter for SimulatorPresenter {
    type Error = Infallible;

    fn open(&mut self) -> Result<(), Self::Error> {
        if self.window.is_none() {
            info!(
                "display: simulator window {}x{} scale={}",
                TOP_WIDTH,
                TOP_HEIGHT + BOTTOM_HEIGHT,
                WINDOW_SCALE
            );
            self.window = Some(Window::new(self.title, &self.settings));
        }
        Ok(())
    }

    fn present(&mut self, top: &TopFrame, bottom: &BottomFrame) -> Result<(), Self::Error> {
        // The loop sees START on the scan after a close and presents once more.
        if self.closed {
            debug!("display: window closed, frame dropped");
            return Ok(());
        }

        let Ok(()) = blit(top, Point::zero(), &mut self.canvas);
        let Ok(()) = blit(
            bottom,
            Point::new(BOTTOM_STACK_OFFSET_X as i32, TOP_HEIGHT as i32),
            &mut self.canvas,
        );

        if let Some(window) = self.window.as_mut() {
            window.update(&self.canvas);
        }
        self.pump_events();

        if self.keys.quit_requested() {
            self.closed = true;
        }
        Ok(())
    }
}

fn blit<const WIDTH: usize, const HEIGHT: usize, const BYTES: usize, T>(
    frame: &FrameBuffer<WIDTH, HEIGHT, BYTES>,
    origin: Point,
    target: &mut T,
) -> Result<(), Infallible>
where
    T: DrawTarget<Color = BinaryColor, Error = Infallible>,
{
    let pixels = (0..HEIGHT).flat_map(move |y| {
        (0..WIDTH).map(move |x| {
            let on = frame.pixel(x, y).unwrap_or(false);
            Pixel(
                origin + Point::new(x as i32, y as i32),
                BinaryColor::from(on),
            )
        })
    });
    target.draw_iter(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::key_channel;

    #[test]
    fn frames_after_close_are_dropped_quietly() {
        let (keys, _input) = key_channel();
        let mut presenter = SimulatorPresenter::new("test", keys.clone());
        let (top, bottom) = (TopFrame::new(), BottomFrame::new());

        presenter.present(&top, &bottom).unwrap();
        assert!(!presenter.is_closed());

        keys.request_quit();
        presenter.present(&top, &bottom).unwrap();
        assert!(presenter.is_closed());

        assert_eq!(presenter.present(&top, &bottom), Ok(()));
    }
}
