use rand::{SeedableRng, rngs::StdRng};

mod carve;
mod frontier;
mod random;
mod repair;

pub use carve::{Carver, carve_grid};
pub use frontier::{Frontier, FrontierOrder};
pub use random::{RandomSource, ScriptedRandom};

use crate::maze::{Coord, Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Tuning knobs of the carving walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Cell the walk starts from. Clamped into the grid if it lies outside.
    pub start: Coord,
    pub frontier_order: FrontierOrder,
    /// While holes remain, a neighbor with exactly this many open directions
    /// may be extended into when nothing better is available.
    pub branch_arity: u32,
    /// Once every cell is touched, only neighbors with fewer open directions
    /// than this are extended into as a fallback.
    pub tidy_arity_limit: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start: (0, 0),
            frontier_order: FrontierOrder::default(),
            branch_arity: 3,
            tidy_arity_limit: 2,
        }
    }
}

/// Counters collected over one generation run.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct GenerationStats {
    /// Passages carved by the main walk.
    pub connections: usize,
    /// Holes connected by the repair pass.
    pub repaired: usize,
    /// Connections abandoned because a sign did not decode.
    pub corrupt_skips: usize,
    /// Holes left once generation finished.
    pub remaining_holes: usize,
}

impl GenerationStats {
    /// Every connect call that changed the grid.
    pub fn total_connections(&self) -> usize {
        self.connections + self.repaired
    }
}

impl std::fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} passages carved, {} holes repaired, {} corrupt signs skipped, {} holes left",
            self.connections, self.repaired, self.corrupt_skips, self.remaining_holes
        )
    }
}

/// Regenerates `maze` with `config`, seeding the RNG from `seed` when given.
pub fn generate_maze(maze: &mut Maze, config: &GeneratorConfig, seed: Option<u64>) {
    let mut rng = get_rng(seed);
    maze.generate_with(config, &mut rng);
}
