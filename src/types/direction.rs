//! Direction pointer, codel chooser, and their combined state.

use std::fmt;

use serde::Serialize;

/// Direction pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dp {
    Right = 0,
    Down = 1,
    Left = 2,
    Up = 3,
}

impl Dp {
    pub const ALL: [Dp; 4] = [Dp::Right, Dp::Down, Dp::Left, Dp::Up];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotate clockwise by one quarter turn.
    pub fn clockwise(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Rotate clockwise `turns` times; negative counts turn counter-clockwise.
    pub fn rotate(self, turns: i64) -> Self {
        let offset = turns.rem_euclid(4) as usize;
        Self::ALL[(self.index() + offset) % 4]
    }

    pub fn short_name(self) -> char {
        match self {
            Dp::Right => 'r',
            Dp::Down => 'd',
            Dp::Left => 'l',
            Dp::Up => 'u',
        }
    }
}

/// Codel chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cc {
    Left = 0,
    Right = 1,
}

impl Cc {
    pub const ALL: [Cc; 2] = [Cc::Left, Cc::Right];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn toggled(self) -> Self {
        match self {
            Cc::Left => Cc::Right,
            Cc::Right => Cc::Left,
        }
    }

    pub fn short_name(self) -> char {
        match self {
            Cc::Left => 'l',
            Cc::Right => 'r',
        }
    }
}

/// Combined (DP, CC) state. There are exactly eight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DirectionState {
    pub dp: Dp,
    pub cc: Cc,
}

impl DirectionState {
    /// The state every program starts in.
    pub const START: Self = Self::new(Dp::Right, Cc::Left);

    pub const fn new(dp: Dp, cc: Cc) -> Self {
        Self { dp, cc }
    }

    /// All eight states, DP-major within each CC (`i % 4` is DP, `i / 4` is CC).
    pub fn all() -> impl Iterator<Item = DirectionState> {
        (0..8).map(Self::from_index)
    }

    /// Dense index in `0..8`, the inverse of [`DirectionState::all`] ordering.
    pub fn index(self) -> usize {
        self.cc.index() * 4 + self.dp.index()
    }

    pub(crate) fn from_index(i: usize) -> Self {
        Self::new(Dp::ALL[i % 4], Cc::ALL[(i / 4) % 2])
    }

    /// The state after bumping into a wall.
    ///
    /// When `dp % 2 == cc` the chooser flips, otherwise the pointer turns
    /// clockwise, giving the cycle
    /// `(r,l) (r,r) (d,r) (d,l) (l,l) (l,r) (u,r) (u,l)`.
    pub fn blocked(self) -> Self {
        if self.dp.index() % 2 == self.cc.index() {
            Self::new(self.dp, self.cc.toggled())
        } else {
            Self::new(self.dp.clockwise(), self.cc)
        }
    }

    /// Diagonal arrow showing which corner the state favours.
    pub fn arrow(self) -> char {
        match (self.dp, self.cc) {
            (Dp::Right, Cc::Left) | (Dp::Up, Cc::Right) => '\u{2197}',
            (Dp::Right, Cc::Right) | (Dp::Down, Cc::Left) => '\u{2198}',
            (Dp::Down, Cc::Right) | (Dp::Left, Cc::Left) => '\u{2199}',
            (Dp::Left, Cc::Right) | (Dp::Up, Cc::Left) => '\u{2196}',
        }
    }
}

impl Default for DirectionState {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for DirectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.dp.short_name(), self.cc.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_eight_distinct_states() {
        let states: Vec<_> = DirectionState::all().collect();
        assert_eq!(states.len(), 8);
        for (i, s) in states.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
        let unique: std::collections::HashSet<_> = states.iter().collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_blocked_cycle() {
        let expected = [
            (Dp::Right, Cc::Right),
            (Dp::Down, Cc::Right),
            (Dp::Down, Cc::Left),
            (Dp::Left, Cc::Left),
            (Dp::Left, Cc::Right),
            (Dp::Up, Cc::Right),
            (Dp::Up, Cc::Left),
            (Dp::Right, Cc::Left),
        ];
        let mut state = DirectionState::START;
        for (dp, cc) in expected {
            state = state.blocked();
            assert_eq!(state, DirectionState::new(dp, cc));
        }
    }

    #[test]
    fn test_rotate() {
        assert_eq!(Dp::Right.rotate(1), Dp::Down);
        assert_eq!(Dp::Right.rotate(5), Dp::Down);
        assert_eq!(Dp::Right.rotate(-1), Dp::Up);
        assert_eq!(Dp::Down.rotate(-6), Dp::Up);
        assert_eq!(Dp::Up.rotate(0), Dp::Up);
    }

    #[test]
    fn test_display() {
        assert_eq!(DirectionState::START.to_string(), "r,l");
        assert_eq!(DirectionState::new(Dp::Up, Cc::Right).to_string(), "u,r");
    }
}
