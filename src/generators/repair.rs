use crate::generators::{
    carve::Carver,
    random::{RandomSource, pick},
};

impl<R: RandomSource + ?Sized> Carver<'_, R> {
    /// Connects every hole the walk never reached to one of its neighbors.
    ///
    /// Holes are visited in row-major order. A neighbor that is a dead end or a
    /// straight corridor is preferred over a turn or crossing. Holes whose
    /// neighbors are all holes are picked up by the next sweep, so pockets are
    /// filled from their border inwards.
    pub fn repair(&mut self) {
        tracing::debug!("[repair] {} holes left after the walk", self.hole_count());
        loop {
            let mut progressed = false;
            let mut stranded = 0;

            let holes = self
                .grid()
                .coords()
                .filter(|&c| self.grid()[c].is_hole())
                .collect::<Vec<_>>();
            for hole in holes {
                // An earlier repair in this sweep may have reached it already
                if !self.grid()[hole].is_hole() {
                    continue;
                }
                let (preferred, fallback): (Vec<_>, Vec<_>) = self
                    .grid()
                    .neighbors(hole)
                    .filter_map(|(d, n)| {
                        let ns = self.grid()[n];
                        (ns.is_valid() && !ns.is_hole() && !ns.is_full_crossing())
                            .then_some((d, ns))
                    })
                    .partition(|(_, ns)| ns.orientation().is_some());

                let candidates = if preferred.is_empty() {
                    fallback
                } else {
                    preferred
                };
                let Some((d, _)) = pick(self.random(), &candidates) else {
                    stranded += 1;
                    continue;
                };
                match self.connect(hole, d) {
                    Ok(true) => {
                        self.stats_mut().repaired += 1;
                        progressed = true;
                    }
                    Ok(false) => stranded += 1,
                    Err(err) => {
                        tracing::warn!("[repair] could not connect {:?} {}: {}", hole, d, err);
                        self.stats_mut().corrupt_skips += 1;
                        stranded += 1;
                    }
                }
            }

            if stranded == 0 || !progressed {
                if stranded > 0 {
                    tracing::debug!("[repair] {} holes have no connected neighbor", stranded);
                }
                break;
            }
        }
        tracing::debug!("[repair] done, {} holes connected", self.stats().repaired);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        generators::{GeneratorConfig, ScriptedRandom, carve::Carver},
        maze::{Direction, Grid, Sign},
    };

    #[test]
    fn test_repair_prefers_corridors() {
        // (1,1) is a hole between a turn on the left and a dead end on the right
        let mut grid = Grid::new(3, 3);
        for c in grid.coords().collect::<Vec<_>>() {
            grid.set(c, Sign::HORIZONTAL);
        }
        grid.set((1, 1), Sign::HOLE);
        grid.set((1, 0), Sign::FULL_CROSSING);
        grid.set((1, 2), Sign::FULL_CROSSING);
        grid.set((0, 1), [Direction::Up, Direction::Right].into_iter().collect());
        grid.set((2, 1), Sign::from(Direction::Down));

        let config = GeneratorConfig::default();
        let mut random = ScriptedRandom::new(vec![0]);
        let mut carver = Carver::new(&mut grid, &config, &mut random);
        carver.repair();
        assert_eq!(carver.stats().repaired, 1);
        drop(carver);

        assert_eq!(grid[(1, 1)], Sign::from(Direction::Right));
        assert_eq!(
            grid[(2, 1)],
            [Direction::Down, Direction::Left].into_iter().collect::<Sign>()
        );
    }

    #[test]
    fn test_repair_fills_pockets_from_the_border() {
        // Only the first row is connected; the rest of the grid is holes
        let mut grid = Grid::new(3, 3);
        grid.set((0, 0), Sign::from(Direction::Right));
        grid.set((1, 0), Sign::HORIZONTAL);
        grid.set((2, 0), Sign::from(Direction::Left));

        let config = GeneratorConfig::default();
        let mut random = ScriptedRandom::new(vec![1, 0]);
        let mut carver = Carver::new(&mut grid, &config, &mut random);
        assert_eq!(carver.hole_count(), 6);
        carver.repair();
        assert_eq!(carver.hole_count(), 0);
        assert_eq!(carver.stats().repaired, 6);
        drop(carver);

        for c in grid.coords() {
            assert!(!grid[c].is_hole());
            for d in grid[c].open_directions() {
                let n = grid.step(c, d).unwrap();
                assert!(grid[n].contains(d.opposite()));
            }
        }
    }

    #[test]
    fn test_repair_gives_up_without_neighbors() {
        let mut grid = Grid::new(1, 1);
        let config = GeneratorConfig::default();
        let mut random = ScriptedRandom::new(vec![]);
        let mut carver = Carver::new(&mut grid, &config, &mut random);
        carver.repair();
        assert_eq!(carver.hole_count(), 1);
        assert_eq!(carver.stats().repaired, 0);
    }
}
