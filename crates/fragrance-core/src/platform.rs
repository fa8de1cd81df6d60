//! Platform collaborators the app loop depends on.

use core::convert::Infallible;

use crate::config::{ControlsConsole, InfoConsole};

/// One of the two addressable text surfaces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Surface {
    /// Top screen: recipe list or title text.
    Info,
    /// Bottom screen: button legend.
    Controls,
}

/// Dual text-surface display.
///
/// Text goes to the surface chosen with [`DisplaySurfaces::select`];
/// `present` pushes both surfaces to the screens.
pub trait DisplaySurfaces {
    type Error;

    fn init(&mut self) -> Result<(), Self::Error>;

    fn select(&mut self, surface: Surface);

    /// Writes text (escape sequences included) to the selected surface.
    fn print(&mut self, text: &str);

    /// Blanks the selected surface and homes its cursor.
    fn clear(&mut self);

    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Host content viewer. Fire-and-forget: nothing is reported back.
pub trait ContentLauncher {
    fn open(&mut self, url: &str);
}

/// Blocks until the next display refresh tick.
pub trait FramePacer {
    fn wait_for_next_tick(&mut self);
}

/// Pacer that never blocks; scripted runs use it.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPacing {
    ticks: u64,
}

impl NoPacing {
    pub const fn new() -> Self {
        Self { ticks: 0 }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl FramePacer for NoPacing {
    fn wait_for_next_tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }
}

/// In-memory pair of text consoles implementing [`DisplaySurfaces`].
///
/// Host displays rasterize from it; tests inspect it directly.
#[derive(Debug, Clone, Default)]
pub struct MemorySurfaces {
    info: InfoConsole,
    controls: ControlsConsole,
    selected: Option<Surface>,
    initialized: bool,
    presents: u64,
}

impl MemorySurfaces {
    pub const fn new() -> Self {
        Self {
            info: InfoConsole::new(),
            controls: ControlsConsole::new(),
            selected: None,
            initialized: false,
            presents: 0,
        }
    }

    pub fn info(&self) -> &InfoConsole {
        &self.info
    }

    pub fn controls(&self) -> &ControlsConsole {
        &self.controls
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn presents(&self) -> u64 {
        self.presents
    }
}

impl DisplaySurfaces for MemorySurfaces {
    type Error = Infallible;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.info.clear();
        self.controls.clear();
        self.selected = Some(Surface::Info);
        self.initialized = true;
        Ok(())
    }

    fn select(&mut self, surface: Surface) {
        self.selected = Some(surface);
    }

    fn print(&mut self, text: &str) {
        match self.selected.unwrap_or(Surface::Info) {
            Surface::Info => self.info.print(text),
            Surface::Controls => self.controls.print(text),
        }
    }

    fn clear(&mut self) {
        match self.selected.unwrap_or(Surface::Info) {
            Surface::Info => self.info.clear(),
            Surface::Controls => self.controls.clear(),
        }
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.presents = self.presents.saturating_add(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_goes_to_the_selected_surface() {
        let mut surfaces = MemorySurfaces::new();
        surfaces.init().unwrap();

        surfaces.print("\x1b[2;1Htop");
        surfaces.select(Surface::Controls);
        surfaces.print("\x1b[1;2Hbottom");

        assert_eq!(surfaces.info().row_text(2), "top");
        assert_eq!(surfaces.controls().row_text(1), " bottom");

        surfaces.clear();
        assert!(surfaces.controls().is_blank());
        assert!(!surfaces.info().is_blank());
    }

    #[test]
    fn present_and_pacing_are_counted() {
        let mut surfaces = MemorySurfaces::new();
        let mut pacer = NoPacing::new();
        assert!(!surfaces.is_initialized());

        surfaces.present().unwrap();
        pacer.wait_for_next_tick();
        pacer.wait_for_next_tick();

        assert_eq!(surfaces.presents(), 1);
        assert_eq!(pacer.ticks(), 2);
    }
}
