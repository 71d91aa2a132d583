use super::{Coord, direction::Direction, sign::Sign};

/// Row-major table of cell signs.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    data: Box<[Sign]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid where every cell is a hole.
    pub fn new(width: u16, height: u16) -> Self {
        let data = vec![Sign::HOLE; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checks if the given coordinate lies inside the grid.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    /// Returns the sign at `coord`, or `None` when it is out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Sign> {
        self.is_in_bounds(coord)
            .then(|| self.data[self.ravel_index(coord.0, coord.1)])
    }

    /// Overwrites the sign at `coord`. The bit pattern is stored as given.
    /// Returns `false` without touching the grid when `coord` is out of bounds.
    pub fn set(&mut self, coord: Coord, sign: Sign) -> bool {
        if !self.is_in_bounds(coord) {
            return false;
        }
        let idx = self.ravel_index(coord.0, coord.1);
        let old = self.data[idx];
        if old != sign {
            self.data[idx] = sign;
            tracing::trace!(
                "[grid] {:?}: {:#06b} -> {:#06b}",
                coord,
                old.bits(),
                sign.bits()
            );
        }
        true
    }

    /// Resets every cell to a hole.
    pub fn clear(&mut self) {
        self.data.fill(Sign::HOLE);
    }

    /// The neighbor one step along `d`, if it is inside the grid.
    pub fn step(&self, coord: Coord, d: Direction) -> Option<Coord> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        Some(d.offset(coord)).filter(|&c| self.is_in_bounds(c))
    }

    /// In-bounds neighbors of `coord` paired with the direction leading to them.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.step(coord, d).map(|c| (d, c)))
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Number of cells that are still holes.
    pub fn hole_count(&self) -> usize {
        self.data.iter().filter(|s| s.is_hole()).count()
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Sign;

    fn index(&self, index: Coord) -> &Self::Output {
        if !self.is_in_bounds(index) {
            panic!("The given coordinate is out of bounds");
        }
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_starts_empty() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.coords().count(), 12);
        assert_eq!(grid.hole_count(), 12);
        assert!(grid.coords().all(|c| grid[c] == Sign::HOLE));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(5, 5);
        assert!(!grid.is_in_bounds((5, 5)));
        assert!(!grid.is_in_bounds((0, 5)));
        assert!(!grid.is_in_bounds((5, 0)));
        assert!(grid.is_in_bounds((4, 4)));
        assert_eq!(grid.get((5, 0)), None);
        assert!(!grid.set((0, 5), Sign::VERTICAL));
    }

    #[test]
    fn test_set_stores_raw_bits() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.set((1, 2), Sign::from_bits(0xF0)));
        assert_eq!(grid.get((1, 2)), Some(Sign::from_bits(0xF0)));
        grid.clear();
        assert_eq!(grid[(1, 2)], Sign::HOLE);
    }

    #[test]
    fn test_step_and_neighbors() {
        let grid = Grid::new(3, 2);
        assert_eq!(grid.step((0, 0), Direction::Up), None);
        assert_eq!(grid.step((0, 0), Direction::Left), None);
        assert_eq!(grid.step((0, 0), Direction::Right), Some((1, 0)));
        assert_eq!(grid.step((2, 1), Direction::Down), None);
        assert_eq!(grid.step((3, 0), Direction::Left), None);

        let neighbors = grid.neighbors((1, 0)).collect::<Vec<_>>();
        assert_eq!(
            neighbors,
            vec![
                (Direction::Down, (1, 1)),
                (Direction::Left, (0, 0)),
                (Direction::Right, (2, 0)),
            ]
        );
    }

    #[test]
    fn test_coords_are_row_major() {
        let grid = Grid::new(2, 2);
        assert_eq!(
            grid.coords().collect::<Vec<_>>(),
            vec![(0, 0), (1, 0), (0, 1), (1, 1)]
        );
    }
}
