use std::collections::VecDeque;

use pathviz_core::{Grid, Point};

use crate::path::reconstruct;
use crate::traits::{SearchAlgorithm, Snapshot};

/// Unweighted breadth-first search.
///
/// A FIFO frontier seeded with the start cell; a seen-set prevents
/// re-enqueueing, so the first time a cell is reached is also its shortest
/// unit-cost distance.
#[derive(Debug, Default)]
pub struct BreadthFirst {
    visited: Vec<Point>,
}

impl BreadthFirst {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchAlgorithm for BreadthFirst {
    fn find_path(&mut self, grid: &mut Grid) -> Vec<Point> {
        let (Some(start), Some(end)) = (grid.start_idx(), grid.end_idx()) else {
            return Vec::new();
        };
        self.reset(grid);

        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut seen = vec![false; grid.len()];
        let mut nbuf: Vec<Point> = Vec::with_capacity(4);

        seen[start] = true;
        queue.push_back(start);

        while let Some(ci) = queue.pop_front() {
            let cp = grid.point(ci);
            let cell = grid.cell_mut(ci);
            if cell.can_modify() {
                cell.visited = true;
            }
            self.visited.push(cp);

            if ci == end {
                let path = reconstruct(grid);
                log::debug!(
                    "bfs: expanded {} cells, path length {}",
                    self.visited.len(),
                    path.len()
                );
                return path;
            }

            grid.neighbors(cp, &mut nbuf);
            for &np in &nbuf {
                let Some(ni) = grid.idx(np) else { continue };
                if seen[ni] {
                    continue;
                }
                seen[ni] = true;
                grid.cell_mut(ni).parent = Some(ci);
                queue.push_back(ni);
            }
        }

        log::debug!("bfs: no path, expanded {} cells", self.visited.len());
        Vec::new()
    }

    fn reset(&mut self, grid: &mut Grid) {
        self.visited.clear();
        grid.reset_transient();
    }

    fn visited_order(&self) -> &[Point] {
        &self.visited
    }

    fn snapshots(&self) -> &[Snapshot] {
        &[]
    }
}
