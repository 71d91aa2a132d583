use crate::{
    error::MazeError,
    generators::{
        GenerationStats, GeneratorConfig,
        frontier::Frontier,
        random::{RandomSource, pick},
    },
    maze::{Coord, Direction, Grid, Sign},
};

/// Randomized backtracking walk that carves passages into a [`Grid`].
///
/// The walk pops a cell from the [`Frontier`], picks a direction to open and
/// connects both endpoints, queueing them again whenever their role changes.
/// While holes remain the walk favours untouched neighbors and joining two
/// dead ends; once every cell is touched it only tidies up dead ends, which
/// keeps the result close to a tree with short side branches.
pub struct Carver<'a, R: RandomSource + ?Sized> {
    grid: &'a mut Grid,
    random: &'a mut R,
    config: &'a GeneratorConfig,
    frontier: Frontier,
    hole_count: usize,
    stats: GenerationStats,
}

/// Runs the full walk followed by the repair pass on `grid` as it currently is.
pub fn carve_grid<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    config: &GeneratorConfig,
    random: &mut R,
) -> GenerationStats {
    if grid.is_empty() {
        return GenerationStats::default();
    }
    let mut carver = Carver::new(grid, config, random);
    carver.run();
    if carver.hole_count() > 0 {
        carver.repair();
    }
    carver.finish()
}

impl<'a, R: RandomSource + ?Sized> Carver<'a, R> {
    pub fn new(grid: &'a mut Grid, config: &'a GeneratorConfig, random: &'a mut R) -> Self {
        let start = (
            config.start.0.min(grid.width().saturating_sub(1)),
            config.start.1.min(grid.height().saturating_sub(1)),
        );
        let hole_count = grid.hole_count();
        Carver {
            grid,
            random,
            config,
            frontier: Frontier::new(config.frontier_order, start),
            hole_count,
            stats: GenerationStats::default(),
        }
    }

    /// Cells that are still holes.
    pub fn hole_count(&self) -> usize {
        self.hole_count
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    pub(super) fn grid(&self) -> &Grid {
        &*self.grid
    }

    pub(super) fn random(&mut self) -> &mut R {
        &mut *self.random
    }

    pub(super) fn stats_mut(&mut self) -> &mut GenerationStats {
        &mut self.stats
    }

    /// Drains the frontier.
    pub fn run(&mut self) {
        tracing::debug!(
            "[carve] starting {}x{} walk, {} holes, {} frontier",
            self.grid.width(),
            self.grid.height(),
            self.hole_count,
            self.config.frontier_order
        );
        while let Some(cell) = self.frontier.pop() {
            let Some(sign) = self.grid.get(cell) else {
                continue;
            };
            if !sign.is_valid() {
                tracing::warn!(
                    "[carve] skipping {:?}: {}",
                    cell,
                    MazeError::CorruptSign {
                        coord: cell,
                        bits: sign.bits()
                    }
                );
                self.stats.corrupt_skips += 1;
                continue;
            }
            // Straight corridors and full crossings never need expanding
            if sign.is_full_crossing() || sign.is_straight() {
                continue;
            }
            let Some(d) = self.choose_direction(cell, sign) else {
                continue;
            };
            match self.connect(cell, d) {
                Ok(true) => self.stats.connections += 1,
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!("[carve] connection from {:?} {} skipped: {}", cell, d, err);
                    self.stats.corrupt_skips += 1;
                }
            }
        }
        tracing::debug!(
            "[carve] walk finished with {} connections and {} holes left",
            self.stats.connections,
            self.hole_count
        );
    }

    /// Picks the direction to open from `cell`, whose current sign is `sign`.
    ///
    /// Candidates fall into a primary and a secondary list; a direction is
    /// drawn uniformly from the primary list, or from the secondary list when
    /// the primary one is empty.
    pub fn choose_direction(&mut self, cell: Coord, sign: Sign) -> Option<Direction> {
        let mut primary = Vec::with_capacity(4);
        let mut secondary = Vec::with_capacity(4);

        for (d, neighbor) in self.grid.neighbors(cell) {
            if sign.contains(d) {
                continue;
            }
            let ns = self.grid[neighbor];
            if !ns.is_valid() {
                continue;
            }
            let mirror = Sign::from(d.opposite());
            let extendable = |arity_ok: bool| arity_ok && !ns.contains(d.opposite());

            if self.hole_count > 0 {
                // Open new ground, or join two separate dead ends. A dead end
                // never points at `d` here since open directions were skipped.
                if ns.is_hole() || (ns.is_dead_end() && ns != mirror) {
                    primary.push(d);
                } else if extendable(ns.arity() == self.config.branch_arity) {
                    secondary.push(d);
                }
            } else if !ns.is_straight() {
                if ns.is_dead_end() && ns != mirror {
                    primary.push(d);
                } else if extendable(ns.arity() < self.config.tidy_arity_limit) {
                    secondary.push(d);
                }
            }
        }

        let candidates = if primary.is_empty() {
            &secondary
        } else {
            &primary
        };
        pick(&mut *self.random, candidates)
    }

    /// Opens the passage between `cell` and its neighbor along `d`.
    ///
    /// Returns `Ok(false)` when nothing changed: `cell` is already a full
    /// crossing or the passage already exists on either side.
    pub fn connect(&mut self, cell: Coord, d: Direction) -> Result<bool, MazeError> {
        let out_of_bounds = |coord| MazeError::OutOfBounds {
            coord,
            width: self.grid.width(),
            height: self.grid.height(),
        };
        let dest = self.grid.step(cell, d).ok_or_else(|| out_of_bounds(cell))?;
        let old = self.grid.get(cell).ok_or_else(|| out_of_bounds(cell))?;
        let dest_old = self.grid.get(dest).ok_or_else(|| out_of_bounds(dest))?;

        for (coord, sign) in [(cell, old), (dest, dest_old)] {
            if sign.decode().is_none() {
                return Err(MazeError::CorruptSign {
                    coord,
                    bits: sign.bits(),
                });
            }
        }
        if old.is_full_crossing() {
            return Ok(false);
        }

        let new = old.with(d);
        let dest_new = dest_old.with(d.opposite());
        if new == old || dest_new == dest_old {
            return Ok(false);
        }

        if old.is_hole() {
            self.hole_count = self.hole_count.saturating_sub(1);
        }
        if dest_old.is_hole() {
            self.hole_count = self.hole_count.saturating_sub(1);
        }
        self.grid.set(cell, new);
        self.grid.set(dest, dest_new);
        tracing::trace!("[carve] {:?} -{}-> {:?}", cell, d, dest);

        self.enqueue(cell, new);
        self.enqueue(dest, dest_new);
        Ok(true)
    }

    /// Puts `coord` back on the frontier according to its new role.
    fn enqueue(&mut self, coord: Coord, sign: Sign) {
        if sign.is_dead_end() {
            self.frontier.push_continue(coord);
        } else if !sign.is_full_crossing() && sign.orientation().is_none() {
            // Turn or branch point
            self.frontier.push_priority(coord);
        }
    }

    pub fn finish(mut self) -> GenerationStats {
        self.stats.remaining_holes = self.grid.hole_count();
        self.stats
    }
}
