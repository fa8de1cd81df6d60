use super::{ButtonSet, InputSource};

/// No-hardware input source used during bring-up.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockInput;

impl MockInput {
    pub const fn new() -> Self {
        Self
    }
}

impl InputSource for MockInput {
    type Error = core::convert::Infallible;

    fn scan(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn pressed_this_tick(&self) -> ButtonSet {
        ButtonSet::EMPTY
    }
}

/// Replays one `ButtonSet` per scan, then reports nothing.
#[derive(Debug, Clone)]
pub struct ScriptedInput<'a> {
    ticks: &'a [ButtonSet],
    cursor: usize,
    current: ButtonSet,
}

impl<'a> ScriptedInput<'a> {
    pub const fn new(ticks: &'a [ButtonSet]) -> Self {
        Self {
            ticks,
            cursor: 0,
            current: ButtonSet::EMPTY,
        }
    }

    /// Number of scans performed so far.
    pub fn scans(&self) -> usize {
        self.cursor
    }
}

impl InputSource for ScriptedInput<'_> {
    type Error = core::convert::Infallible;

    fn scan(&mut self) -> Result<(), Self::Error> {
        self.current = self.ticks.get(self.cursor).copied().unwrap_or_default();
        self.cursor = self.cursor.saturating_add(1);
        Ok(())
    }

    fn pressed_this_tick(&self) -> ButtonSet {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Button;

    #[test]
    fn scripted_input_replays_then_goes_quiet() {
        let ticks = [ButtonSet::only(Button::A), ButtonSet::only(Button::B)];
        let mut input = ScriptedInput::new(&ticks);

        assert_eq!(input.pressed_this_tick(), ButtonSet::EMPTY);
        input.scan().unwrap();
        assert!(input.pressed_this_tick().contains(Button::A));
        input.scan().unwrap();
        assert!(input.pressed_this_tick().contains(Button::B));
        input.scan().unwrap();
        assert!(input.pressed_this_tick().is_empty());
        assert_eq!(input.scans(), 3);
    }

    #[test]
    fn mock_input_never_presses() {
        let mut input = MockInput::new();
        input.scan().unwrap();
        assert!(input.pressed_this_tick().is_empty());
    }
}
