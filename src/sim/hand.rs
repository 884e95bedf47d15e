//! Hands and their static layout

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the juggler's two hands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub const BOTH: [Hand; 2] = [Hand::Left, Hand::Right];

    /// Hand due to throw on `beat`: left on even beats, right on odd
    #[inline]
    pub fn for_beat(beat: i64) -> Self {
        if beat.rem_euclid(2) == 0 {
            Hand::Left
        } else {
            Hand::Right
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }

    /// Catching hand for a throw of `height`: even heights come back, odd cross
    #[inline]
    pub fn catcher(self, height: u32) -> Self {
        if height % 2 == 0 { self } else { self.opposite() }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hand::Left => "left",
            Hand::Right => "right",
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the hands sit, fixed after construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandLayout {
    pub positions: [Vec2; 2],
    /// Rectangle size reported to the renderer
    pub size: Vec2,
}

impl HandLayout {
    pub fn new(left: Vec2, right: Vec2, size: Vec2) -> Self {
        Self {
            positions: [left, right],
            size,
        }
    }

    #[inline]
    pub fn position(&self, hand: Hand) -> Vec2 {
        self.positions[hand.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation() {
        assert_eq!(Hand::for_beat(0), Hand::Left);
        assert_eq!(Hand::for_beat(1), Hand::Right);
        assert_eq!(Hand::for_beat(2), Hand::Left);
        assert_eq!(Hand::for_beat(-1), Hand::Right);
    }

    #[test]
    fn test_catcher_parity() {
        assert_eq!(Hand::Left.catcher(3), Hand::Right);
        assert_eq!(Hand::Left.catcher(4), Hand::Left);
        assert_eq!(Hand::Right.catcher(1), Hand::Left);
        assert_eq!(Hand::Right.catcher(2), Hand::Right);
    }
}
