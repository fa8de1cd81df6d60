//! Recipe model and the bounded selection / drop-count rules.

use core::fmt;

use heapless::{String, Vec};
use log::debug;

/// Maximum stored bytes of one ingredient name.
pub const NAME_BYTES: usize = 24;
/// Maximum number of ingredients in one recipe.
pub const MAX_INGREDIENTS: usize = 8;

const BASIS_POINTS_PER_WHOLE: u64 = 10_000;

/// Direction of a selection move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Previous,
    Next,
}

/// One-drop quantity adjustment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DropDelta {
    /// +1 drop, unbounded above.
    Add,
    /// -1 drop, saturating at zero.
    Remove,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecipeError {
    /// Seed data had no ingredients.
    Empty,
    /// Seed data had more than [`MAX_INGREDIENTS`] ingredients.
    TooManyIngredients { count: usize },
}

impl fmt::Display for RecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("recipe has no ingredients"),
            Self::TooManyIngredients { count } => write!(
                f,
                "recipe has {count} ingredients, at most {MAX_INGREDIENTS} are supported"
            ),
        }
    }
}

/// Named ingredient with its drop count.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ingredient {
    name: String<NAME_BYTES>,
    drops: u32,
}

impl Ingredient {
    /// Creates an ingredient; names longer than [`NAME_BYTES`] are cut at a
    /// char boundary.
    pub fn new(name: &str, drops: u32) -> Self {
        let mut stored = String::new();
        for ch in name.chars() {
            if stored.push(ch).is_err() {
                break;
            }
        }

        Self {
            name: stored,
            drops,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn drops(&self) -> u32 {
        self.drops
    }

    fn adjust(&mut self, delta: DropDelta) -> bool {
        let next = match delta {
            DropDelta::Add => self.drops.saturating_add(1),
            DropDelta::Remove => self.drops.saturating_sub(1),
        };

        if next == self.drops {
            return false;
        }
        self.drops = next;
        true
    }
}

/// Ordered, fixed-length ingredient list with a circular selection cursor.
///
/// Invariants: the list is never empty, its length never changes, and
/// `selection < len()`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecipeSelector {
    ingredients: Vec<Ingredient, MAX_INGREDIENTS>,
    selection: usize,
}

impl RecipeSelector {
    /// Builds a recipe from `(name, drops)` seed pairs, selecting the first
    /// entry. Insertion order is display order.
    pub fn from_seed(seed: &[(&str, u32)]) -> Result<Self, RecipeError> {
        if seed.is_empty() {
            return Err(RecipeError::Empty);
        }
        if seed.len() > MAX_INGREDIENTS {
            return Err(RecipeError::TooManyIngredients { count: seed.len() });
        }

        let mut ingredients = Vec::new();
        for &(name, drops) in seed {
            ingredients
                .push(Ingredient::new(name, drops))
                .map_err(|_| RecipeError::TooManyIngredients { count: seed.len() })?;
        }

        Ok(Self {
            ingredients,
            selection: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Always `false` for a constructed selector.
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn ingredient(&self, index: usize) -> Option<&Ingredient> {
        self.ingredients.get(index)
    }

    pub fn selected(&self) -> &Ingredient {
        &self.ingredients[self.selection]
    }

    /// Moves the selection one step with wraparound in both directions and
    /// returns the new selection.
    pub fn move_selection(&mut self, direction: Direction) -> usize {
        let len = self.ingredients.len();
        let previous = self.selection;
        self.selection = match direction {
            Direction::Next => (self.selection + 1) % len,
            Direction::Previous => (self.selection + len - 1) % len,
        };
        debug!(
            "recipe: select {:?} {} -> {} ({})",
            direction,
            previous,
            self.selection,
            self.selected().name()
        );
        self.selection
    }

    /// Adjusts one ingredient by one drop. Returns `true` when the count
    /// changed; an out-of-range index or a decrement at zero is a no-op.
    pub fn adjust_quantity(&mut self, index: usize, delta: DropDelta) -> bool {
        let Some(ingredient) = self.ingredients.get_mut(index) else {
            return false;
        };

        let changed = ingredient.adjust(delta);
        debug!(
            "recipe: drops {:?} {} -> {} (changed={})",
            delta,
            ingredient.name(),
            ingredient.drops(),
            changed
        );
        changed
    }

    /// Adjusts the currently selected ingredient.
    pub fn adjust_selected(&mut self, delta: DropDelta) -> bool {
        self.adjust_quantity(self.selection, delta)
    }

    pub fn total_drops(&self) -> u64 {
        self.ingredients.iter().map(|i| i.drops() as u64).sum()
    }

    /// Share of each ingredient in the whole blend.
    pub fn blend(&self) -> BlendSummary {
        let total_drops = self.total_drops();
        let mut shares = Vec::new();

        for ingredient in &self.ingredients {
            let share = if total_drops == 0 {
                0
            } else {
                (ingredient.drops() as u64 * BASIS_POINTS_PER_WHOLE / total_drops) as u16
            };
            // Same capacity as the ingredient list.
            let _ = shares.push(share);
        }

        BlendSummary {
            total_drops,
            shares,
        }
    }
}

/// Blend concentration per ingredient, in basis points of the total drops.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlendSummary {
    total_drops: u64,
    shares: Vec<u16, MAX_INGREDIENTS>,
}

impl BlendSummary {
    pub fn total_drops(&self) -> u64 {
        self.total_drops
    }

    /// Share of ingredient `index` in basis points (0..=10_000).
    pub fn share(&self, index: usize) -> Option<BasisPoints> {
        self.shares.get(index).copied().map(BasisPoints)
    }
}

/// Hundredths of a percent; displays as `P.PP%`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct BasisPoints(pub u16);

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: [(&str, u32); 3] = [("Bergamot", 5), ("Cedarwood", 3), ("Vanilla", 2)];

    fn selector() -> RecipeSelector {
        RecipeSelector::from_seed(&SEED).unwrap()
    }

    fn drops(selector: &RecipeSelector, index: usize) -> u32 {
        selector.ingredient(index).unwrap().drops()
    }

    #[test]
    fn seed_order_is_display_order() {
        let s = selector();
        let names: std::vec::Vec<&str> = s.ingredients().iter().map(Ingredient::name).collect();
        assert_eq!(names, ["Bergamot", "Cedarwood", "Vanilla"]);
        assert_eq!(s.selection(), 0);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
    }

    #[test]
    fn rejects_empty_and_oversized_seed() {
        assert_eq!(RecipeSelector::from_seed(&[]), Err(RecipeError::Empty));

        let seed = [("x", 1u32); MAX_INGREDIENTS + 1];
        assert_eq!(
            RecipeSelector::from_seed(&seed),
            Err(RecipeError::TooManyIngredients {
                count: MAX_INGREDIENTS + 1
            })
        );
    }

    #[test]
    fn long_names_are_truncated() {
        let ingredient = Ingredient::new("Sandalwood from the southern hills", 1);
        assert_eq!(ingredient.name().len(), NAME_BYTES);
        assert!(ingredient.name().starts_with("Sandalwood"));
    }

    #[test]
    fn next_cycles_back_after_len_moves() {
        let mut s = selector();
        for start in 0..s.len() {
            while s.selection() != start {
                s.move_selection(Direction::Next);
            }
            for _ in 0..s.len() {
                let selection = s.move_selection(Direction::Next);
                assert!(selection < s.len());
            }
            assert_eq!(s.selection(), start);
            for _ in 0..s.len() {
                s.move_selection(Direction::Previous);
            }
            assert_eq!(s.selection(), start);
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut s = selector();
        assert_eq!(s.move_selection(Direction::Previous), 2);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut s = selector();
        s.move_selection(Direction::Previous);
        assert_eq!(s.selection(), 2);
        assert_eq!(s.move_selection(Direction::Next), 0);
    }

    #[test]
    fn single_entry_selection_stays_put() {
        let mut s = RecipeSelector::from_seed(&[("Musk", 1)]).unwrap();
        assert_eq!(s.move_selection(Direction::Next), 0);
        assert_eq!(s.move_selection(Direction::Previous), 0);
    }

    #[test]
    fn decrement_saturates_at_zero() {
        let mut s = selector();
        for _ in 0..10 {
            s.adjust_quantity(2, DropDelta::Remove);
            assert!(drops(&s, 2) <= 2);
        }
        assert_eq!(drops(&s, 2), 0);
        assert!(!s.adjust_quantity(2, DropDelta::Remove));
        assert_eq!(drops(&s, 2), 0);
    }

    #[test]
    fn increment_then_decrement_restores() {
        let mut s = selector();
        for index in 0..s.len() {
            let before = drops(&s, index);
            assert!(s.adjust_quantity(index, DropDelta::Add));
            assert!(s.adjust_quantity(index, DropDelta::Remove));
            assert_eq!(drops(&s, index), before);
        }
    }

    #[test]
    fn out_of_range_adjust_is_ignored() {
        let mut s = selector();
        let before = s.clone();
        assert!(!s.adjust_quantity(3, DropDelta::Add));
        assert_eq!(s, before);
    }

    #[test]
    fn increment_saturates_at_representation_limit() {
        let mut s = RecipeSelector::from_seed(&[("Amber", u32::MAX)]).unwrap();
        assert!(!s.adjust_selected(DropDelta::Add));
        assert_eq!(s.selected().drops(), u32::MAX);
    }

    #[test]
    fn walkthrough_scenario() {
        let mut s = selector();

        assert_eq!(s.move_selection(Direction::Next), 1);
        assert!(s.adjust_selected(DropDelta::Add));
        assert_eq!(drops(&s, 1), 4);

        s.move_selection(Direction::Previous);
        s.move_selection(Direction::Previous);
        assert_eq!(s.selection(), 2);

        for _ in 0..3 {
            s.adjust_selected(DropDelta::Remove);
        }
        assert_eq!(drops(&s, 2), 0);
        assert!(!s.adjust_selected(DropDelta::Remove));
        assert_eq!(drops(&s, 2), 0);
    }

    #[test]
    fn blend_shares_use_basis_points() {
        let s = selector();
        let blend = s.blend();
        assert_eq!(blend.total_drops(), 10);
        assert_eq!(blend.share(0), Some(BasisPoints(5_000)));
        assert_eq!(blend.share(1), Some(BasisPoints(3_000)));
        assert_eq!(blend.share(2), Some(BasisPoints(2_000)));
        assert_eq!(blend.share(3), None);
    }

    #[test]
    fn blend_of_empty_recipe_is_all_zero() {
        let s = RecipeSelector::from_seed(&[("Iris", 0), ("Oud", 0)]).unwrap();
        let blend = s.blend();
        assert_eq!(blend.total_drops(), 0);
        assert_eq!(blend.share(0), Some(BasisPoints(0)));
    }

    #[test]
    fn basis_points_display_as_percent() {
        assert_eq!(BasisPoints(3_333).to_string(), "33.33%");
        assert_eq!(BasisPoints(10_000).to_string(), "100.00%");
        assert_eq!(BasisPoints(5).to_string(), "0.05%");
    }
}
