impl App {
    pub fn new(config: AppConfig) -> Result<Self, RecipeError> {
        let recipe = RecipeSelector::from_seed(config.seed)?;
        let ui = match config.mode {
            AppMode::Launcher => UiState::Title { launching: false },
            AppMode::Recipe => UiState::Recipe,
        };
        info!(
            "app: start mode={:?} ingredients={} url={}",
            config.mode,
            recipe.len(),
            config.url
        );

        Ok(Self {
            config,
            recipe,
            ui,
            pending_redraw: true,
            launches: 0,
        })
    }

    /// Applies the buttons newly pressed this tick.
    ///
    /// START wins over everything else. In recipe mode at most one selection
    /// move (UP before DOWN) and then at most one drop adjustment (A before
    /// B) are applied to the selection.
    pub fn apply<L>(&mut self, pressed: ButtonSet, launcher: &mut L) -> TickResult
    where
        L: ContentLauncher + ?Sized,
    {
        if pressed.contains(Button::Start) {
            info!("app: exit requested");
            return TickResult::Exit;
        }

        match self.ui {
            UiState::Title { .. } => self.apply_title_input(pressed, launcher),
            UiState::Recipe => self.apply_recipe_input(pressed),
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn mode(&self) -> AppMode {
        self.config.mode
    }

    pub fn recipe(&self) -> &RecipeSelector {
        &self.recipe
    }

    /// Number of launch requests handed to the content launcher.
    pub fn launches(&self) -> u32 {
        self.launches
    }
}
