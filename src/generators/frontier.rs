use std::collections::VecDeque;

use crate::maze::Coord;

/// Which pending cell the carver expands next.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierOrder {
    /// The newest corridor end is expanded first and branch points are only
    /// revisited once the walk stalls: pops take from the back.
    #[default]
    CorridorFirst,
    /// Pops take from the front, so queued branch points are expanded before
    /// the walk resumes along a corridor. Tends to grow a dense lattice.
    BranchFirst,
}

impl std::fmt::Display for FrontierOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrontierOrder::BranchFirst => write!(f, "branch-first"),
            FrontierOrder::CorridorFirst => write!(f, "corridor-first"),
        }
    }
}

/// Double-ended work list of coordinates awaiting expansion.
#[derive(Debug)]
pub struct Frontier {
    cells: VecDeque<Coord>,
    order: FrontierOrder,
}

impl Frontier {
    pub fn new(order: FrontierOrder, start: Coord) -> Self {
        Frontier {
            cells: VecDeque::from([start]),
            order,
        }
    }

    /// Queues a cell that just became a dead end.
    pub fn push_continue(&mut self, coord: Coord) {
        self.cells.push_back(coord);
    }

    /// Queues a cell that just became a turn or a branch point.
    pub fn push_priority(&mut self, coord: Coord) {
        self.cells.push_front(coord);
    }

    pub fn pop(&mut self) -> Option<Coord> {
        match self.order {
            FrontierOrder::BranchFirst => self.cells.pop_front(),
            FrontierOrder::CorridorFirst => self.cells.pop_back(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_is_corridor_first() {
        assert_eq!(FrontierOrder::default(), FrontierOrder::CorridorFirst);
    }

    #[test]
    fn test_branch_first_prefers_priority_pushes() {
        let mut frontier = Frontier::new(FrontierOrder::BranchFirst, (0, 0));
        frontier.push_continue((1, 0));
        frontier.push_priority((2, 0));
        frontier.push_continue((3, 0));
        let order = std::iter::from_fn(|| frontier.pop()).collect::<Vec<_>>();
        assert_eq!(order, vec![(2, 0), (0, 0), (1, 0), (3, 0)]);
    }

    #[test]
    fn test_corridor_first_pops_newest_corridor() {
        let mut frontier = Frontier::new(FrontierOrder::CorridorFirst, (0, 0));
        frontier.push_continue((1, 0));
        frontier.push_priority((2, 0));
        frontier.push_continue((3, 0));
        let order = std::iter::from_fn(|| frontier.pop()).collect::<Vec<_>>();
        assert_eq!(order, vec![(3, 0), (1, 0), (0, 0), (2, 0)]);
        assert_eq!(frontier.pop(), None);
    }
}
