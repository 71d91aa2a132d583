use super::direction::{Direction, Orientation};

/// Connectivity bitmask of a single cell.
///
/// Each set bit is a [`Direction`] in which a passage leaves the cell. A sign of
/// `0` is a hole (the cell is not connected to anything yet) and a sign of `15`
/// is a full crossing. The raw value is not validated on construction; use
/// [`Sign::is_valid`] or [`Sign::decode`] before trusting it.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sign(u8);

impl Sign {
    pub const HOLE: Sign = Sign(0);
    pub const VERTICAL: Sign = Sign(Direction::Up.bit() | Direction::Down.bit());
    pub const HORIZONTAL: Sign = Sign(Direction::Left.bit() | Direction::Right.bit());
    pub const FULL_CROSSING: Sign = Sign(15);

    /// Wraps raw bits without checking them.
    pub const fn from_bits(bits: u8) -> Sign {
        Sign(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// A sign is valid when it has no bits outside the four direction flags.
    pub const fn is_valid(self) -> bool {
        self.0 <= Self::FULL_CROSSING.0
    }

    /// Returns the sign if its bits decode to a set of directions.
    pub fn decode(self) -> Option<Sign> {
        self.is_valid().then_some(self)
    }

    pub const fn is_hole(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, d: Direction) -> bool {
        self.0 & d.bit() != 0
    }

    /// Returns this sign with `d` opened.
    pub const fn with(self, d: Direction) -> Sign {
        Sign(self.0 | d.bit())
    }

    /// Number of open directions.
    pub const fn arity(self) -> u32 {
        (self.0 & Self::FULL_CROSSING.0).count_ones()
    }

    pub fn open_directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }

    pub const fn is_full_crossing(self) -> bool {
        self.0 == Self::FULL_CROSSING.0
    }

    /// Exactly one open direction.
    pub const fn is_dead_end(self) -> bool {
        self.is_valid() && self.arity() == 1
    }

    /// Exactly two open directions that mirror each other.
    pub const fn is_straight(self) -> bool {
        self.0 == Self::VERTICAL.0 || self.0 == Self::HORIZONTAL.0
    }

    /// Three or four open directions.
    pub const fn is_crossing(self) -> bool {
        self.is_valid() && self.arity() >= 3
    }

    /// Classifies dead ends and straight corridors by axis. Holes, turns and
    /// crossings have no orientation.
    pub const fn orientation(self) -> Option<Orientation> {
        match self.0 {
            1 | 2 | 3 => Some(Orientation::Vertical),
            4 | 8 | 12 => Some(Orientation::Horizontal),
            _ => None,
        }
    }
}

impl From<Direction> for Sign {
    fn from(d: Direction) -> Self {
        Sign(d.bit())
    }
}

impl FromIterator<Direction> for Sign {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Sign::HOLE, Sign::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_directions_round_trip() {
        for bits in 0..=15u8 {
            let sign = Sign::from_bits(bits);
            let rebuilt: Sign = sign.open_directions().collect();
            assert_eq!(rebuilt, sign);
            assert_eq!(sign.open_directions().count() as u32, sign.arity());
        }
    }

    #[test]
    fn test_classification() {
        assert!(Sign::HOLE.is_hole());
        assert!(Sign::FULL_CROSSING.is_full_crossing());
        assert!(Sign::FULL_CROSSING.is_crossing());
        assert!(Sign::from(Direction::Left).is_dead_end());
        assert!(Sign::VERTICAL.is_straight());
        assert!(Sign::HORIZONTAL.is_straight());

        let turn: Sign = [Direction::Up, Direction::Right].into_iter().collect();
        assert!(!turn.is_straight());
        assert!(!turn.is_crossing());
        assert_eq!(turn.orientation(), None);

        let tee: Sign = [Direction::Up, Direction::Down, Direction::Left]
            .into_iter()
            .collect();
        assert!(tee.is_crossing());
        assert!(!tee.is_full_crossing());
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Sign::from(Direction::Up).orientation(), Some(Orientation::Vertical));
        assert_eq!(Sign::VERTICAL.orientation(), Some(Orientation::Vertical));
        assert_eq!(Sign::from(Direction::Right).orientation(), Some(Orientation::Horizontal));
        assert_eq!(Sign::HORIZONTAL.orientation(), Some(Orientation::Horizontal));
        assert_eq!(Sign::HOLE.orientation(), None);
        assert_eq!(Sign::FULL_CROSSING.orientation(), None);
    }

    #[test]
    fn test_corrupt_bits_do_not_decode() {
        let corrupt = Sign::from_bits(0b1_0001);
        assert!(!corrupt.is_valid());
        assert_eq!(corrupt.decode(), None);
        assert!(!corrupt.is_dead_end());
        assert_eq!(Sign::from_bits(9).decode(), Some(Sign::from_bits(9)));
    }
}
