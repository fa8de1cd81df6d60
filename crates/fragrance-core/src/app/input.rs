impl App {
    fn apply_title_input<L>(&mut self, pressed: ButtonSet, launcher: &mut L)
    where
        L: ContentLauncher + ?Sized,
    {
        if !pressed.contains(Button::A) {
            return;
        }

        info!("launcher: open {}", self.config.url);
        launcher.open(self.config.url);
        self.launches = self.launches.saturating_add(1);
        self.ui = UiState::Title { launching: true };
        self.pending_redraw = true;
    }

    fn apply_recipe_input(&mut self, pressed: ButtonSet) {
        let direction = if pressed.contains(Button::DUp) {
            Some(Direction::Previous)
        } else if pressed.contains(Button::DDown) {
            Some(Direction::Next)
        } else {
            None
        };
        if let Some(direction) = direction {
            self.recipe.move_selection(direction);
            self.pending_redraw = true;
        }

        let delta = if pressed.contains(Button::A) {
            Some(DropDelta::Add)
        } else if pressed.contains(Button::B) {
            Some(DropDelta::Remove)
        } else {
            None
        };
        if let Some(delta) = delta {
            if self.recipe.adjust_selected(delta) {
                self.pending_redraw = true;
            } else {
                debug!(
                    "recipe: {:?} ignored for {} at {} drops",
                    delta,
                    self.recipe.selected().name(),
                    self.recipe.selected().drops()
                );
            }
        }
    }
}
