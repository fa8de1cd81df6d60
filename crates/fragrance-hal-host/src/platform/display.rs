use core::fmt;

use fragrance_core::platform::{DisplaySurfaces, MemorySurfaces, Surface};
use log::{debug, info};
use twinscreen::{BottomFrame, ScreenId, TopFrame, geometry::CELL_SIZE};

use crate::render::CellRenderer;

/// Pushes finished frames to a screen backend.
pub trait Presenter {
    type Error;

    fn open(&mut self) -> Result<(), Self::Error>;

    fn present(&mut self, top: &TopFrame, bottom: &BottomFrame) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum HostError<PresentErr> {
    /// Console grid does not fit the screen it is drawn on.
    Geometry { surface: Surface },
    Presenter(PresentErr),
}

impl<PresentErr: fmt::Debug> fmt::Display for HostError<PresentErr> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry { surface } => write!(f, "console grid does not fit {surface:?} screen"),
            Self::Presenter(err) => write!(f, "presenter failed: {err:?}"),
        }
    }
}

/// Text surfaces rasterized into the two screen framebuffers on `present`.
pub struct HostDisplay<P> {
    surfaces: MemorySurfaces,
    renderer: CellRenderer,
    top: TopFrame,
    bottom: BottomFrame,
    presenter: P,
}

impl<P: Presenter> HostDisplay<P> {
    pub fn new(presenter: P) -> Self {
        Self::with_renderer(presenter, CellRenderer::new())
    }

    pub fn with_renderer(presenter: P, renderer: CellRenderer) -> Self {
        Self {
            surfaces: MemorySurfaces::new(),
            renderer,
            top: TopFrame::new(),
            bottom: BottomFrame::new(),
            presenter,
        }
    }

    pub fn surfaces(&self) -> &MemorySurfaces {
        &self.surfaces
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn frames(&self) -> (&TopFrame, &BottomFrame) {
        (&self.top, &self.bottom)
    }

    fn check_geometry(&self) -> Result<(), HostError<P::Error>> {
        let info = self.surfaces.info();
        if !grid_fits(info.columns(), info.rows(), ScreenId::Top) {
            return Err(HostError::Geometry {
                surface: Surface::Info,
            });
        }

        let controls = self.surfaces.controls();
        if !grid_fits(controls.columns(), controls.rows(), ScreenId::Bottom) {
            return Err(HostError::Geometry {
                surface: Surface::Controls,
            });
        }

        Ok(())
    }
}

const fn grid_fits(columns: usize, rows: usize, screen: ScreenId) -> bool {
    columns * CELL_SIZE <= screen.width() && rows * CELL_SIZE <= screen.height()
}

impl<P: Presenter> DisplaySurfaces for HostDisplay<P> {
    type Error = HostError<P::Error>;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.check_geometry()?;
        self.presenter.open().map_err(HostError::Presenter)?;
        let Ok(()) = self.surfaces.init();
        self.top.clear(false);
        self.bottom.clear(false);
        info!(
            "display: host surfaces ready top={}x{} bottom={}x{}",
            self.top.width(),
            self.top.height(),
            self.bottom.width(),
            self.bottom.height()
        );
        Ok(())
    }

    fn select(&mut self, surface: Surface) {
        self.surfaces.select(surface);
    }

    fn print(&mut self, text: &str) {
        self.surfaces.print(text);
    }

    fn clear(&mut self) {
        self.surfaces.clear();
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        let Ok(()) = self.renderer.render(self.surfaces.info(), &mut self.top);
        let Ok(()) = self
            .renderer
            .render(self.surfaces.controls(), &mut self.bottom);
        self.presenter
            .present(&self.top, &self.bottom)
            .map_err(HostError::Presenter)?;
        let Ok(()) = self.surfaces.present();
        Ok(())
    }
}

/// Presenter without a window. Keeps the last frame pair for inspection.
#[derive(Default)]
pub struct HeadlessPresenter {
    opened: bool,
    frames: u64,
    last: Option<(TopFrame, BottomFrame)>,
}

impl HeadlessPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_top(&self) -> Option<&TopFrame> {
        self.last.as_ref().map(|(top, _)| top)
    }

    pub fn last_bottom(&self) -> Option<&BottomFrame> {
        self.last.as_ref().map(|(_, bottom)| bottom)
    }
}

impl Presenter for HeadlessPresenter {
    type Error = core::convert::Infallible;

    fn open(&mut self) -> Result<(), Self::Error> {
        self.opened = true;
        Ok(())
    }

    fn present(&mut self, top: &TopFrame, bottom: &BottomFrame) -> Result<(), Self::Error> {
        self.frames = self.frames.saturating_add(1);
        self.last = Some((top.clone(), bottom.clone()));
        debug!(
            "display: headless frame={} lit_top={} lit_bottom={}",
            self.frames,
            top.lit_pixels(),
            bottom.lit_pixels()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedWindow;

    impl Presenter for ClosedWindow {
        type Error = &'static str;

        fn open(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn present(&mut self, _top: &TopFrame, _bottom: &BottomFrame) -> Result<(), Self::Error> {
            Err("closed")
        }
    }

    #[test]
    fn present_rasterizes_each_surface_onto_its_screen() {
        let mut display = HostDisplay::new(HeadlessPresenter::new());
        display.init().unwrap();
        assert!(display.presenter().is_open());

        display.select(Surface::Info);
        display.print("\x1b[1;1HFragrance Maker 3DS v1.0");
        display.present().unwrap();

        let presenter = display.presenter();
        assert_eq!(presenter.frames(), 1);
        assert!(presenter.last_top().unwrap().lit_pixels() > 0);
        assert_eq!(presenter.last_bottom().unwrap().lit_pixels(), 0);
        assert_eq!(display.surfaces().presents(), 1);
    }

    #[test]
    fn cleared_surface_goes_dark_on_next_present() {
        let mut display = HostDisplay::new(HeadlessPresenter::new());
        display.init().unwrap();

        display.select(Surface::Controls);
        display.print("START: exit");
        display.present().unwrap();
        assert!(display.frames().1.lit_pixels() > 0);

        display.clear();
        display.present().unwrap();
        assert_eq!(display.frames().1.lit_pixels(), 0);
        assert_eq!(display.presenter().frames(), 2);
    }

    #[test]
    fn presenter_failure_is_wrapped() {
        let mut display = HostDisplay::new(ClosedWindow);
        display.init().unwrap();

        let err = display.present().unwrap_err();
        assert_eq!(err, HostError::Presenter("closed"));
        assert_eq!(err.to_string(), "presenter failed: \"closed\"");
        assert_eq!(display.surfaces().presents(), 0);
    }

    #[test]
    fn console_grids_fit_their_screens() {
        assert!(grid_fits(50, 30, ScreenId::Top));
        assert!(grid_fits(40, 30, ScreenId::Bottom));
        assert!(!grid_fits(50, 30, ScreenId::Bottom));
    }
}
