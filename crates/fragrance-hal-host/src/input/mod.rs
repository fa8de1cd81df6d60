//! Host input: a window (or test) feeds key transitions, the app loop
//! samples them once per tick.
//!
//! [`key_channel`] returns a linked pair. [`KeyFeed`] is held by whatever
//! pumps window events, [`LatchedInput`] is handed to the loop as its
//! [`InputSource`]. Both live on the loop thread.

#[cfg(feature = "simulator")]
pub mod keyboard;

use core::convert::Infallible;
use std::{cell::RefCell, rc::Rc};

use fragrance_core::input::{Button, ButtonSet, InputSource};

#[derive(Debug, Default, Clone, Copy)]
struct KeyState {
    held: ButtonSet,
    // Presses seen since the last scan, so a tap shorter than a tick still counts.
    down_events: ButtonSet,
    quit: bool,
}

/// Creates a linked (producer, consumer) pair.
pub fn key_channel() -> (KeyFeed, LatchedInput) {
    let state = Rc::new(RefCell::new(KeyState::default()));
    (
        KeyFeed {
            state: state.clone(),
        },
        LatchedInput {
            state,
            previous: ButtonSet::EMPTY,
            pressed: ButtonSet::EMPTY,
        },
    )
}

/// Producer half: records key transitions as they arrive.
#[derive(Debug, Clone)]
pub struct KeyFeed {
    state: Rc<RefCell<KeyState>>,
}

impl KeyFeed {
    pub fn press(&self, button: Button) {
        let mut state = self.state.borrow_mut();
        state.held.insert(button);
        state.down_events.insert(button);
    }

    pub fn release(&self, button: Button) {
        self.state.borrow_mut().held.remove(button);
    }

    /// Window closed; reported to the loop as START.
    pub fn request_quit(&self) {
        self.state.borrow_mut().quit = true;
    }

    pub fn held(&self) -> ButtonSet {
        self.state.borrow().held
    }

    pub fn quit_requested(&self) -> bool {
        self.state.borrow().quit
    }
}

/// Consumer half: edge-detected buttons, one snapshot per scan.
#[derive(Debug)]
pub struct LatchedInput {
    state: Rc<RefCell<KeyState>>,
    previous: ButtonSet,
    pressed: ButtonSet,
}

impl InputSource for LatchedInput {
    type Error = Infallible;

    fn scan(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        let mut pressed = state.held.newly_pressed(self.previous).union(state.down_events);
        if state.quit {
            pressed.insert(Button::Start);
        }

        self.previous = state.held;
        state.down_events = ButtonSet::EMPTY;
        self.pressed = pressed;
        Ok(())
    }

    fn pressed_this_tick(&self) -> ButtonSet {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &mut LatchedInput) -> ButtonSet {
        input.scan().unwrap();
        input.pressed_this_tick()
    }

    #[test]
    fn held_key_is_reported_once() {
        let (feed, mut input) = key_channel();

        feed.press(Button::A);
        assert_eq!(scan(&mut input), ButtonSet::only(Button::A));
        assert_eq!(scan(&mut input), ButtonSet::EMPTY);
        assert_eq!(feed.held(), ButtonSet::only(Button::A));

        feed.release(Button::A);
        assert_eq!(scan(&mut input), ButtonSet::EMPTY);

        feed.press(Button::A);
        assert_eq!(scan(&mut input), ButtonSet::only(Button::A));
    }

    #[test]
    fn tap_between_scans_is_not_lost() {
        let (feed, mut input) = key_channel();

        feed.press(Button::DDown);
        feed.release(Button::DDown);

        assert_eq!(scan(&mut input), ButtonSet::only(Button::DDown));
        assert_eq!(scan(&mut input), ButtonSet::EMPTY);
    }

    #[test]
    fn quit_maps_to_start() {
        let (feed, mut input) = key_channel();
        feed.press(Button::B);
        feed.request_quit();

        let pressed = scan(&mut input);
        assert!(pressed.contains(Button::Start));
        assert!(pressed.contains(Button::B));
    }

    #[test]
    fn nothing_reported_before_first_scan() {
        let (feed, input) = key_channel();
        feed.press(Button::A);
        assert!(input.pressed_this_tick().is_empty());
    }
}
