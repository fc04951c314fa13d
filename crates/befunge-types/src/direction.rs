use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four cardinal headings of the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// Every heading, in the order `?` draws from.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// `(row_delta, col_delta)` for one step in this heading.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
        }
    }

    /// The source character that sets this heading.
    pub fn glyph(self) -> char {
        match self {
            Self::Right => '>',
            Self::Left => '<',
            Self::Up => '^',
            Self::Down => 'v',
        }
    }

    /// Inverse of [`Direction::glyph`].
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '>' => Some(Self::Right),
            '<' => Some(Self::Left),
            '^' => Some(Self::Up),
            'v' => Some(Self::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Right => write!(f, "right"),
            Self::Left => write!(f, "left"),
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_glyph(dir.glyph()), Some(dir));
        }
        assert_eq!(Direction::from_glyph('V'), None);
    }

    #[test]
    fn test_deltas_cancel_out() {
        let (r1, c1) = Direction::Right.delta();
        let (r2, c2) = Direction::Left.delta();
        assert_eq!((r1 + r2, c1 + c2), (0, 0));
        let (r1, c1) = Direction::Up.delta();
        let (r2, c2) = Direction::Down.delta();
        assert_eq!((r1 + r2, c1 + c2), (0, 0));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"up\"");
        let d: Direction = serde_json::from_str("\"down\"").unwrap();
        assert_eq!(d, Direction::Down);
    }
}
