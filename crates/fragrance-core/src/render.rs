//! Screen view models and their fixed text layouts.

use core::fmt::{self, Write};

use heapless::String;

use crate::{
    platform::{DisplaySurfaces, Surface},
    recipe::BasisPoints,
};

const LINE_BYTES: usize = 96;
const RULE: &str = "--------------------------";

const TITLE_ROW: usize = 1;
const RULE_ROW: usize = 3;
const LIST_FIRST_ROW: usize = 5;

const LAUNCH_PROMPT_ROW: usize = 5;
const LAUNCH_HINT_ROW: usize = 6;
const LAUNCH_EXIT_ROW: usize = 10;
const LAUNCH_STATUS_ROW: usize = 12;

/// One ingredient line of the recipe list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IngredientRowView<'a> {
    pub name: &'a str,
    pub drops: u32,
    pub selected: bool,
}

impl Default for IngredientRowView<'_> {
    fn default() -> Self {
        Self {
            name: "",
            drops: 0,
            selected: false,
        }
    }
}

/// App-level view model for one surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen<'a> {
    LauncherTitle {
        title: &'a str,
        launching: bool,
    },
    RecipeInfo {
        title: &'a str,
        rows: &'a [IngredientRowView<'a>],
        total_drops: u64,
    },
    RecipeControls {
        selected_name: &'a str,
        share: BasisPoints,
    },
    Blank,
}

/// Clears `surface` and writes `screen` onto it.
pub fn draw<D>(display: &mut D, surface: Surface, screen: &Screen<'_>)
where
    D: DisplaySurfaces + ?Sized,
{
    display.select(surface);
    display.clear();

    match *screen {
        Screen::LauncherTitle { title, launching } => {
            print_at(display, TITLE_ROW, format_args!("{title}"));
            print_at(display, RULE_ROW, format_args!("{RULE}"));
            print_at(
                display,
                LAUNCH_PROMPT_ROW,
                format_args!("Press [A] to launch the app"),
            );
            print_at(display, LAUNCH_HINT_ROW, format_args!("(Opens in 3DS Browser)"));
            print_at(
                display,
                LAUNCH_EXIT_ROW,
                format_args!("Press START to exit to Homebrew"),
            );
            if launching {
                print_at(display, LAUNCH_STATUS_ROW, format_args!("Launching..."));
            }
        }
        Screen::RecipeInfo {
            title,
            rows,
            total_drops,
        } => {
            print_at(display, TITLE_ROW, format_args!("{title}"));
            print_at(display, RULE_ROW, format_args!("{RULE}"));
            for (offset, row) in rows.iter().enumerate() {
                let marker = if row.selected { '>' } else { ' ' };
                print_at(
                    display,
                    LIST_FIRST_ROW + offset,
                    format_args!("{marker} {}: {} drops", row.name, row.drops),
                );
            }
            print_at(
                display,
                LIST_FIRST_ROW + rows.len() + 1,
                format_args!("Total: {total_drops} drops"),
            );
        }
        Screen::RecipeControls {
            selected_name,
            share,
        } => {
            print_at(display, 1, format_args!("Controls"));
            print_at(display, 3, format_args!("UP/DOWN: select"));
            print_at(display, 4, format_args!("A: add drop"));
            print_at(display, 5, format_args!("B: remove drop"));
            print_at(display, 7, format_args!("START: exit"));
            print_at(display, 9, format_args!("Selected: {selected_name}"));
            print_at(display, 10, format_args!("Share: {share}"));
        }
        Screen::Blank => {}
    }
}

fn print_at<D>(display: &mut D, row: usize, args: fmt::Arguments<'_>)
where
    D: DisplaySurfaces + ?Sized,
{
    let mut line: String<LINE_BYTES> = String::new();
    // Overflow keeps what fit; rows are short by construction.
    let _ = write!(line, "\x1b[{row};1H");
    let _ = line.write_fmt(args);
    display.print(&line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemorySurfaces;

    fn surfaces() -> MemorySurfaces {
        let mut surfaces = MemorySurfaces::new();
        surfaces.init().unwrap();
        surfaces
    }

    #[test]
    fn launcher_title_matches_fixed_layout() {
        let mut display = surfaces();
        let screen = Screen::LauncherTitle {
            title: "Fragrance Maker 3DS v1.0",
            launching: false,
        };
        draw(&mut display, Surface::Info, &screen);

        let info = display.info();
        assert_eq!(info.row_text(1), "Fragrance Maker 3DS v1.0");
        assert_eq!(info.row_text(3), RULE);
        assert_eq!(info.row_text(5), "Press [A] to launch the app");
        assert_eq!(info.row_text(6), "(Opens in 3DS Browser)");
        assert_eq!(info.row_text(10), "Press START to exit to Homebrew");
        assert_eq!(info.row_text(12), "");

        let screen = Screen::LauncherTitle {
            title: "Fragrance Maker 3DS v1.0",
            launching: true,
        };
        draw(&mut display, Surface::Info, &screen);
        assert_eq!(display.info().row_text(12), "Launching...");
    }

    #[test]
    fn recipe_info_marks_selected_row_and_total() {
        let mut display = surfaces();
        let rows = [
            IngredientRowView {
                name: "Bergamot",
                drops: 5,
                selected: false,
            },
            IngredientRowView {
                name: "Cedarwood",
                drops: 3,
                selected: true,
            },
        ];
        let screen = Screen::RecipeInfo {
            title: "Blend",
            rows: &rows,
            total_drops: 8,
        };
        draw(&mut display, Surface::Info, &screen);

        let info = display.info();
        assert_eq!(info.row_text(1), "Blend");
        assert_eq!(info.row_text(5), "  Bergamot: 5 drops");
        assert_eq!(info.row_text(6), "> Cedarwood: 3 drops");
        assert_eq!(info.row_text(7), "");
        assert_eq!(info.row_text(8), "Total: 8 drops");
    }

    #[test]
    fn controls_legend_lands_on_controls_surface() {
        let mut display = surfaces();
        draw(
            &mut display,
            Surface::Controls,
            &Screen::RecipeControls {
                selected_name: "Vanilla",
                share: BasisPoints(2_000),
            },
        );

        let controls = display.controls();
        assert_eq!(controls.row_text(1), "Controls");
        assert_eq!(controls.row_text(3), "UP/DOWN: select");
        assert_eq!(controls.row_text(7), "START: exit");
        assert_eq!(controls.row_text(9), "Selected: Vanilla");
        assert_eq!(controls.row_text(10), "Share: 20.00%");
        assert!(display.info().is_blank());
    }

    #[test]
    fn redraw_replaces_previous_content() {
        let mut display = surfaces();
        display.select(Surface::Controls);
        display.print("stale text");

        draw(&mut display, Surface::Controls, &Screen::Blank);
        assert!(display.controls().is_blank());
    }
}
