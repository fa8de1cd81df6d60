//! Compile-time defaults and app configuration.

use crate::console::TextConsole;

/// Title shown on the top screen.
pub const APP_TITLE: &str = "Fragrance Maker 3DS v1.0";

/// Hosted perfumery planner opened by the launcher.
pub const PLANNER_URL: &str = "https://perfumery-planner.web.app";

/// Seed recipe: `(name, drops)` in display order.
pub const DEFAULT_RECIPE: [(&str, u32); 3] = [("Bergamot", 5), ("Cedarwood", 3), ("Vanilla", 2)];

/// Top (info) console grid.
pub const INFO_COLUMNS: usize = 50;
pub const INFO_ROWS: usize = 30;

/// Bottom (controls) console grid.
pub const CONTROLS_COLUMNS: usize = 40;
pub const CONTROLS_ROWS: usize = 30;

pub type InfoConsole = TextConsole<INFO_COLUMNS, INFO_ROWS>;
pub type ControlsConsole = TextConsole<CONTROLS_COLUMNS, CONTROLS_ROWS>;

/// Which revision of the app runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AppMode {
    /// Title screen; A opens the planner URL in the host browser.
    Launcher,
    /// Two-screen drop-count editor.
    Recipe,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub title: &'static str,
    pub url: &'static str,
    pub seed: &'static [(&'static str, u32)],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: AppMode::Recipe,
            title: APP_TITLE,
            url: PLANNER_URL,
            seed: &DEFAULT_RECIPE,
        }
    }
}

impl AppConfig {
    /// Launcher revision with the default title and URL.
    pub fn launcher() -> Self {
        Self {
            mode: AppMode::Launcher,
            ..Self::default()
        }
    }

    pub const fn with_mode(mut self, mode: AppMode) -> Self {
        self.mode = mode;
        self
    }

    pub const fn with_url(mut self, url: &'static str) -> Self {
        self.url = url;
        self
    }

    pub const fn with_seed(mut self, seed: &'static [(&'static str, u32)]) -> Self {
        self.seed = seed;
        self
    }
}
