/// One of the four cardinal directions, stored as a single-bit flag so that any
/// set of directions fits in a [`Sign`](super::Sign).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 1,
    Down = 2,
    Left = 4,
    Right = 8,
}

/// Axis of a corridor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Direction {
    /// All directions in the order candidates are examined.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub const fn orientation(self) -> Orientation {
        match self {
            Direction::Up | Direction::Down => Orientation::Vertical,
            Direction::Left | Direction::Right => Orientation::Horizontal,
        }
    }

    /// Moves `coord` one unit along this direction, without any bounds check
    /// other than overflow.
    ///
    /// NOTE: Stepping below 0 wraps to `u16::MAX` and stepping past `u16::MAX`
    /// saturates to it. Since the largest valid index is `u16::MAX - 1`, both
    /// cases fall out of bounds and are rejected by the caller's range check.
    pub(crate) fn offset(self, (x, y): (u16, u16)) -> (u16, u16) {
        match self {
            Direction::Up => (x, y.wrapping_sub(1)),
            Direction::Down => (x, y.saturating_add(1)),
            Direction::Left => (x.wrapping_sub(1), y),
            Direction::Right => (x.saturating_add(1), y),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.opposite().orientation(), d.orientation());
        }
    }

    #[test]
    fn test_bits_are_disjoint() {
        let combined = Direction::ALL.iter().fold(0u8, |acc, d| {
            assert_eq!(acc & d.bit(), 0);
            acc | d.bit()
        });
        assert_eq!(combined, 15);
    }

    #[test]
    fn test_offset_wraps_out_of_range() {
        assert_eq!(Direction::Up.offset((3, 0)), (3, u16::MAX));
        assert_eq!(Direction::Left.offset((0, 3)), (u16::MAX, 3));
        assert_eq!(Direction::Right.offset((u16::MAX, 3)), (u16::MAX, 3));
        assert_eq!(Direction::Down.offset((2, 2)), (2, 3));
    }
}
