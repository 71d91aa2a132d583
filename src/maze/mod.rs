pub mod direction;
pub mod grid;
pub mod sign;

pub use direction::{Direction, Orientation};
pub use grid::Grid;
pub use sign::Sign;

use crate::{
    error::MazeError,
    generators::{GenerationStats, GeneratorConfig, RandomSource, carve_grid, get_rng},
};

/// Cell coordinate `(x, y)`, with `(0, 0)` at the top-left corner.
pub type Coord = (u16, u16);

pub struct Maze {
    grid: Grid,
    width: u16,
    height: u16,
    stats: GenerationStats,
}

impl Maze {
    /// Creates a new maze of holes with the given width and height.
    /// Both dimensions must be at least 1.
    pub fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(Maze {
            grid: Grid::new(width, height),
            width,
            height,
            stats: GenerationStats::default(),
        })
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.height
    }
    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Read-only view of the sign table.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Statistics of the last generation run.
    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.grid.is_in_bounds(coord)
    }

    /// Returns the sign of the cell at `(x, y)`.
    pub fn sign(&self, x: u16, y: u16) -> Result<Sign, MazeError> {
        self.grid.get((x, y)).ok_or_else(|| self.out_of_bounds((x, y)))
    }

    /// Overwrites the sign of the cell at `coord` without validating its bits.
    pub fn set_sign(&mut self, coord: Coord, sign: Sign) -> Result<(), MazeError> {
        if self.grid.set(coord, sign) {
            Ok(())
        } else {
            Err(self.out_of_bounds(coord))
        }
    }

    fn out_of_bounds(&self, coord: Coord) -> MazeError {
        MazeError::OutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        }
    }

    /// Carves a fresh maze with the default configuration and an OS-seeded RNG.
    /// Any previous layout is discarded.
    pub fn generate(&mut self) {
        let mut rng = get_rng(None);
        self.generate_with(&GeneratorConfig::default(), &mut rng);
    }

    /// Carves a fresh maze drawing every random choice from `random`.
    pub fn generate_with<R: RandomSource + ?Sized>(
        &mut self,
        config: &GeneratorConfig,
        random: &mut R,
    ) {
        self.grid.clear();
        self.stats = carve_grid(&mut self.grid, config, random);
    }

    /// Number of open passages. Every passage sets one bit on each side, so this
    /// is half the total number of set bits.
    pub fn edge_count(&self) -> usize {
        let bits: u32 = self.grid.coords().map(|c| self.grid[c].arity()).sum();
        bits as usize / 2
    }
}
