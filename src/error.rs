use crate::maze::Coord;

/// Errors raised by the maze core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A coordinate outside `[0, width) x [0, height)` was queried or mutated.
    OutOfBounds { coord: Coord, width: u16, height: u16 },
    /// The maze was constructed with a zero width or height.
    InvalidDimension { width: u16, height: u16 },
    /// A sign holding bits outside the four direction flags was encountered.
    CorruptSign { coord: Coord, bits: u8 },
}

impl std::fmt::Display for MazeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MazeError::OutOfBounds {
                coord,
                width,
                height,
            } => write!(
                f,
                "coordinate {:?} is out of bounds for a {}x{} maze",
                coord, width, height
            ),
            MazeError::InvalidDimension { width, height } => write!(
                f,
                "invalid maze dimensions {}x{}: width and height must be at least 1",
                width, height
            ),
            MazeError::CorruptSign { coord, bits } => {
                write!(f, "corrupt sign {:#06b} at {:?}", bits, coord)
            }
        }
    }
}

impl std::error::Error for MazeError {}
