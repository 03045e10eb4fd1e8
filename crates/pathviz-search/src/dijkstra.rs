use pathviz_core::{Grid, Point, UNREACHABLE};

use crate::path::reconstruct;
use crate::traits::{SearchAlgorithm, Snapshot};

/// Dijkstra's algorithm with uniform edge weight 1.
///
/// Deliberately implemented as an explicit relaxation over an unvisited set
/// rather than collapsing to BFS, mirroring the general weighted algorithm.
/// The set holds every cell (walls included); walls and unreachable cells
/// are removed without being expanded. Selection is a linear scan for the
/// strictly smallest distance, so among equal-distance cells the first in
/// row-major order wins (lowest row, then lowest column).
#[derive(Debug, Default)]
pub struct Dijkstra {
    visited: Vec<Point>,
}

impl Dijkstra {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchAlgorithm for Dijkstra {
    fn find_path(&mut self, grid: &mut Grid) -> Vec<Point> {
        let (Some(start), Some(end)) = (grid.start_idx(), grid.end_idx()) else {
            return Vec::new();
        };
        self.reset(grid);

        grid.cell_mut(start).distance = 0;

        let mut unvisited: Vec<usize> = (0..grid.len()).collect();
        let mut in_unvisited = vec![true; grid.len()];
        let mut nbuf: Vec<Point> = Vec::with_capacity(4);

        while !unvisited.is_empty() {
            let mut best = 0;
            for pos in 1..unvisited.len() {
                if grid.cell(unvisited[pos]).distance < grid.cell(unvisited[best]).distance {
                    best = pos;
                }
            }
            // O(n) removal keeps the row-major scan order intact.
            let ci = unvisited.remove(best);
            in_unvisited[ci] = false;

            let cell = grid.cell(ci);
            if cell.wall || cell.distance == UNREACHABLE {
                continue;
            }
            let current_dist = cell.distance;

            let cp = grid.point(ci);
            let c = grid.cell_mut(ci);
            if c.can_modify() {
                c.visited = true;
            }
            self.visited.push(cp);

            if ci == end {
                let path = reconstruct(grid);
                log::debug!(
                    "dijkstra: expanded {} cells, path length {}",
                    self.visited.len(),
                    path.len()
                );
                return path;
            }

            grid.neighbors(cp, &mut nbuf);
            for &np in &nbuf {
                let Some(ni) = grid.idx(np) else { continue };
                if !in_unvisited[ni] {
                    continue;
                }
                let tentative = current_dist + 1;
                let n = grid.cell_mut(ni);
                if tentative < n.distance {
                    n.distance = tentative;
                    n.parent = Some(ci);
                }
            }
        }

        log::debug!("dijkstra: no path, expanded {} cells", self.visited.len());
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
