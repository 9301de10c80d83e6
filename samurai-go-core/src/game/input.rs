//! Input Capture
//!
//! The core sees one bit of input per tick: whether the action key went down
//! since the previous tick. Key repeat and held keys never reach it.

use serde::{Serialize, Deserialize};

/// Input state for a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Action flags (packed bits):
    /// - Bit 0: Action key pressed this tick
    /// - Bit 1-7: Reserved
    pub flags: u8,
}

impl InputFrame {
    /// Action flag bit
    pub const FLAG_ACTION: u8 = 0x01;

    /// A tick with no input.
    pub const fn idle() -> Self {
        Self { flags: 0 }
    }

    /// A tick where the action key was just pressed.
    pub const fn action() -> Self {
        Self { flags: Self::FLAG_ACTION }
    }

    /// Build from the host's "just pressed" signal.
    pub const fn from_pressed(pressed: bool) -> Self {
        if pressed { Self::action() } else { Self::idle() }
    }

    /// Was the action key pressed this tick?
    #[inline]
    pub fn action_pressed(&self) -> bool {
        self.flags & Self::FLAG_ACTION != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_flag() {
        assert!(InputFrame::action().action_pressed());
        assert!(!InputFrame::idle().action_pressed());
        assert!(!InputFrame::default().action_pressed());
        assert_eq!(InputFrame::from_pressed(true), InputFrame::action());
    }

    #[test]
    fn test_reserved_bits_ignored() {
        let frame = InputFrame { flags: 0xFE };
        assert!(!frame.action_pressed());
    }
}
