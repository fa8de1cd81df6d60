impl App {
    /// Builds the info and controls view models and hands them to `f`.
    pub fn with_screens<F, R>(&self, f: F) -> R
    where
        F: FnOnce(Screen<'_>, Screen<'_>) -> R,
    {
        match self.ui {
            UiState::Title { launching } => f(
                Screen::LauncherTitle {
                    title: self.config.title,
                    launching,
                },
                Screen::Blank,
            ),
            UiState::Recipe => {
                let mut rows = [IngredientRowView::default(); MAX_INGREDIENTS];
                let count = self.recipe.len();
                for (index, (slot, ingredient)) in rows
                    .iter_mut()
                    .zip(self.recipe.ingredients())
                    .enumerate()
                {
                    *slot = IngredientRowView {
                        name: ingredient.name(),
                        drops: ingredient.drops(),
                        selected: index == self.recipe.selection(),
                    };
                }

                let blend = self.recipe.blend();
                let share = blend
                    .share(self.recipe.selection())
                    .unwrap_or(BasisPoints(0));

                f(
                    Screen::RecipeInfo {
                        title: self.config.title,
                        rows: &rows[..count],
                        total_drops: blend.total_drops(),
                    },
                    Screen::RecipeControls {
                        selected_name: self.recipe.selected().name(),
                        share,
                    },
                )
            }
        }
    }

    /// Writes both surfaces, info first.
    pub fn render<D>(&self, display: &mut D)
    where
        D: DisplaySurfaces + ?Sized,
    {
        self.with_screens(|info, controls| {
            render::draw(display, Surface::Info, &info);
            render::draw(display, Surface::Controls, &controls);
        });
    }
}
