//! Keypad event vocabulary and button enablement.
//!
//! `Key` is the full set of button-press events the engine understands.
//! Keys classify into three groups mirroring the physical keypad layout:
//! number keys, operator keys, and modifier keys. `Keypad` tracks the
//! post-equals lock, during which only the clear key responds.

use crate::engine::Operator;

/// A single button-press event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Key {
    /// A digit key, 0 through 9.
    Digit(u8),
    /// The decimal point key.
    Decimal,
    /// One of the four operator keys.
    Operator(Operator),
    /// The equals key.
    Equals,
    /// The clear key.
    Clear,
    /// The delete (backspace) key.
    Delete,
    /// The sign-toggle key.
    ToggleSign,
}

/// The group a key belongs to on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyGroup {
    /// Digits and the decimal point.
    Number,
    /// The four arithmetic operators.
    Operator,
    /// Sign toggle, clear, delete, equals.
    Modifier,
}

impl Key {
    /// Map a typed character to a key.
    ///
    /// `c` clears, `b` deletes, `n` toggles the sign; everything else maps
    /// to the button carrying the same symbol. Returns `None` for
    /// characters with no button.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c as u8 - b'0')),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            'c' => Some(Self::Clear),
            'b' => Some(Self::Delete),
            'n' => Some(Self::ToggleSign),
            _ => Operator::from_symbol(c).map(Self::Operator),
        }
    }

    /// The keypad group this key belongs to.
    pub fn group(&self) -> KeyGroup {
        match self {
            Self::Digit(_) | Self::Decimal => KeyGroup::Number,
            Self::Operator(_) => KeyGroup::Operator,
            Self::Equals | Self::Clear | Self::Delete | Self::ToggleSign => KeyGroup::Modifier,
        }
    }

    /// The symbol entered into the display for number keys.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Self::Digit(d) => Some((b'0' + d) as char),
            Self::Decimal => Some('.'),
            _ => None,
        }
    }
}

/// Enablement state of the keypad.
///
/// Normally every key is enabled. After a completed equals (when the
/// lock-after-equals behavior is on) the keypad locks and only the clear
/// key responds until the next clear.
#[derive(Clone, Debug, Default)]
pub struct Keypad {
    locked: bool,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the keypad is currently locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether a press of `key` should reach the engine.
    pub fn is_enabled(&self, key: Key) -> bool {
        !self.locked || key == Key::Clear
    }

    /// Lock everything but the clear key.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Re-enable all keys.
    pub fn unlock(&mut self) {
        self.locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_digits_and_symbols() {
        assert_eq!(Key::from_char('7'), Some(Key::Digit(7)));
        assert_eq!(Key::from_char('.'), Some(Key::Decimal));
        assert_eq!(Key::from_char('+'), Some(Key::Operator(Operator::Add)));
        assert_eq!(Key::from_char('/'), Some(Key::Operator(Operator::Divide)));
        assert_eq!(Key::from_char('='), Some(Key::Equals));
        assert_eq!(Key::from_char('c'), Some(Key::Clear));
        assert_eq!(Key::from_char('b'), Some(Key::Delete));
        assert_eq!(Key::from_char('n'), Some(Key::ToggleSign));
        assert_eq!(Key::from_char('q'), None);
        assert_eq!(Key::from_char(' '), None);
    }

    #[test]
    fn test_groups_mirror_keypad_layout() {
        assert_eq!(Key::Digit(0).group(), KeyGroup::Number);
        assert_eq!(Key::Decimal.group(), KeyGroup::Number);
        assert_eq!(Key::Operator(Operator::Multiply).group(), KeyGroup::Operator);
        assert_eq!(Key::Equals.group(), KeyGroup::Modifier);
        assert_eq!(Key::ToggleSign.group(), KeyGroup::Modifier);
    }

    #[test]
    fn test_lock_leaves_only_clear_enabled() {
        let mut keypad = Keypad::new();
        assert!(keypad.is_enabled(Key::Digit(5)));
        assert!(keypad.is_enabled(Key::Equals));

        keypad.lock();
        assert!(keypad.is_enabled(Key::Clear));
        assert!(!keypad.is_enabled(Key::Digit(5)));
        assert!(!keypad.is_enabled(Key::Operator(Operator::Add)));
        assert!(!keypad.is_enabled(Key::Delete));

        keypad.unlock();
        assert!(keypad.is_enabled(Key::Digit(5)));
    }
}
