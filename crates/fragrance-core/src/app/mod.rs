//! Application state machine for the launcher title and the recipe editor.

use log::{debug, info};

use crate::{
    config::{AppConfig, AppMode},
    input::{Button, ButtonSet},
    platform::{ContentLauncher, DisplaySurfaces, Surface},
    recipe::{BasisPoints, Direction, DropDelta, MAX_INGREDIENTS, RecipeError, RecipeSelector},
    render::{self, IngredientRowView, Screen},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
    /// START was pressed; the loop ends after this iteration.
    Exit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Title { launching: bool },
    Recipe,
}

pub struct App {
    config: AppConfig,
    recipe: RecipeSelector,
    ui: UiState,
    pending_redraw: bool,
    launches: u32,
}

include!("runtime.rs");
include!("input.rs");
include!("view.rs");
