//! Desktop keyboard layout for the simulator window.
//!
//! | Key(s)       | Button          |
//! |--------------|-----------------|
//! | Arrows       | D-pad           |
//! | X            | A               |
//! | Z            | B               |
//! | S            | X               |
//! | A            | Y               |
//! | Q / W        | L / R           |
//! | Enter        | START           |
//! | Backspace    | SELECT          |

use embedded_graphics_simulator::{SimulatorEvent, sdl2::Keycode};
use fragrance_core::input::Button;
use log::debug;

use super::KeyFeed;

pub fn map_key(keycode: Keycode) -> Option<Button> {
    let button = match keycode {
        Keycode::Up => Button::DUp,
        Keycode::Down => Button::DDown,
        Keycode::Left => Button::DLeft,
        Keycode::Right => Button::DRight,
        Keycode::X => Button::A,
        Keycode::Z => Button::B,
        Keycode::S => Button::X,
        Keycode::A => Button::Y,
        Keycode::Q => Button::L,
        Keycode::W => Button::R,
        Keycode::Return | Keycode::KpEnter => Button::Start,
        Keycode::Backspace => Button::Select,
        _ => return None,
    };
    Some(button)
}

/// Applies one window event to `feed`. Key repeats are ignored.
pub fn apply_event(feed: &KeyFeed, event: SimulatorEvent) {
    match event {
        SimulatorEvent::KeyDown {
            keycode,
            repeat: false,
            ..
        } => {
            if let Some(button) = map_key(keycode) {
                debug!("input: key down {:?} -> {:?}", keycode, button);
                feed.press(button);
            }
        }
        SimulatorEvent::KeyUp { keycode, .. } => {
            if let Some(button) = map_key(keycode) {
                feed.release(button);
            }
        }
        SimulatorEvent::Quit => feed.request_quit(),
        _ => {}
    }
}
