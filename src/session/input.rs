//! Key bindings.
//!
//! Space starts a session while pending, digits 1-4 pick an option while
//! playing, and Escape (or Ctrl-C, which raw terminals deliver as a
//! character) quits from either mode. Everything else is ignored.

use super::state::{Mode, Session};
use crate::round::OPTION_COUNT;

/// A key press, reduced to what the bindings care about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Space,
    Digit(u8),
    Escape,
    Other,
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        match c {
            ' ' => Key::Space,
            '\u{1b}' | '\u{3}' => Key::Escape,
            _ => match c.to_digit(10) {
                Some(d) => Key::Digit(d as u8),
                None => Key::Other,
            },
        }
    }
}

/// What a key press asks the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play,
    Guess(usize),
    Quit,
}

impl Command {
    /// Map a key press to a command for the given mode.
    #[must_use]
    pub fn from_key(mode: Mode, key: Key) -> Option<Command> {
        match (mode, key) {
            (_, Key::Escape) => Some(Command::Quit),
            (Mode::Pending, Key::Space) => Some(Command::Play),
            (Mode::Playing, Key::Digit(d)) if (1..=OPTION_COUNT).contains(&(d as usize)) => {
                Some(Command::Guess(d as usize - 1))
            }
            _ => None,
        }
    }
}

impl Session {
    /// Apply a command. `Quit` is left to the caller and does nothing here.
    ///
    /// Returns the score delta for an applied guess.
    pub fn apply(&mut self, command: Command) -> Option<i32> {
        match command {
            Command::Play => {
                self.play();
                None
            }
            Command::Guess(index) => self.guess(index),
            Command::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_char() {
        assert_eq!(Key::from(' '), Key::Space);
        assert_eq!(Key::from('3'), Key::Digit(3));
        assert_eq!(Key::from('\u{1b}'), Key::Escape);
        assert_eq!(Key::from('\u{3}'), Key::Escape);
        assert_eq!(Key::from('x'), Key::Other);
    }

    #[test]
    fn test_pending_bindings() {
        assert_eq!(Command::from_key(Mode::Pending, Key::Space), Some(Command::Play));
        assert_eq!(Command::from_key(Mode::Pending, Key::Digit(1)), None);
        assert_eq!(Command::from_key(Mode::Pending, Key::Escape), Some(Command::Quit));
    }

    #[test]
    fn test_ctrl_c_quits_while_playing() {
        assert_eq!(Command::from_key(Mode::Playing, Key::from('\u{3}')), Some(Command::Quit));
    }

    #[test]
    fn test_playing_bindings() {
        assert_eq!(Command::from_key(Mode::Playing, Key::Digit(1)), Some(Command::Guess(0)));
        assert_eq!(Command::from_key(Mode::Playing, Key::Digit(4)), Some(Command::Guess(3)));
        assert_eq!(Command::from_key(Mode::Playing, Key::Digit(0)), None);
        assert_eq!(Command::from_key(Mode::Playing, Key::Digit(5)), None);
        assert_eq!(Command::from_key(Mode::Playing, Key::Space), None);
        assert_eq!(Command::from_key(Mode::Playing, Key::Other), None);
    }
}
