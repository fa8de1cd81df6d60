//! Input abstraction layer.

pub mod mock;

/// Console buttons, numbered with the platform's key bit layout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Button {
    A,
    B,
    Select,
    Start,
    DRight,
    DLeft,
    DUp,
    DDown,
    R,
    L,
    X,
    Y,
}

impl Button {
    pub const ALL: [Button; 12] = [
        Self::A,
        Self::B,
        Self::Select,
        Self::Start,
        Self::DRight,
        Self::DLeft,
        Self::DUp,
        Self::DDown,
        Self::R,
        Self::L,
        Self::X,
        Self::Y,
    ];

    pub const fn bit(self) -> u32 {
        match self {
            Self::A => 1 << 0,
            Self::B => 1 << 1,
            Self::Select => 1 << 2,
            Self::Start => 1 << 3,
            Self::DRight => 1 << 4,
            Self::DLeft => 1 << 5,
            Self::DUp => 1 << 6,
            Self::DDown => 1 << 7,
            Self::R => 1 << 8,
            Self::L => 1 << 9,
            Self::X => 1 << 10,
            Self::Y => 1 << 11,
        }
    }
}

/// Bitmask of buttons.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ButtonSet(u32);

impl ButtonSet {
    pub const EMPTY: Self = Self(0);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn only(button: Button) -> Self {
        Self(button.bit())
    }

    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.bit())
    }

    pub fn insert(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    pub fn remove(&mut self, button: Button) {
        self.0 &= !button.bit();
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Buttons held now that were not held in `previous`.
    pub const fn newly_pressed(self, previous: Self) -> Self {
        Self(self.0 & !previous.0)
    }

    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl From<Button> for ButtonSet {
    fn from(button: Button) -> Self {
        Self::only(button)
    }
}

/// Polled input device.
///
/// `scan` refreshes the device snapshot once per tick; `pressed_this_tick`
/// reports the buttons that went down between the last two scans.
pub trait InputSource {
    type Error;

    fn scan(&mut self) -> Result<(), Self::Error>;

    fn pressed_this_tick(&self) -> ButtonSet;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_follow_platform_layout() {
        assert_eq!(Button::A.bit(), 0x001);
        assert_eq!(Button::Start.bit(), 0x008);
        assert_eq!(Button::DUp.bit(), 0x040);
        assert_eq!(Button::DDown.bit(), 0x080);
        assert_eq!(Button::Y.bit(), 0x800);
    }

    #[test]
    fn edge_detection_reports_only_new_buttons() {
        let previous = ButtonSet::only(Button::A).with(Button::DUp);
        let held = ButtonSet::only(Button::A).with(Button::B);
        let pressed = held.newly_pressed(previous);

        assert!(pressed.contains(Button::B));
        assert!(!pressed.contains(Button::A));
        assert!(!pressed.contains(Button::DUp));
    }

    #[test]
    fn iter_lists_buttons_in_bit_order() {
        let mut set = ButtonSet::EMPTY;
        set.insert(Button::Start);
        set.insert(Button::A);
        set.insert(Button::X);
        set.remove(Button::X);

        let buttons: std::vec::Vec<Button> = set.iter().collect();
        assert_eq!(buttons, [Button::A, Button::Start]);
        assert_eq!(set.union(ButtonSet::from(Button::B)).bits(), 0b1011);
    }
}
