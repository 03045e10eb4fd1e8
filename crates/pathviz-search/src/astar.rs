use pathviz_core::{Grid, Point};

use crate::distance::manhattan;
use crate::path::reconstruct;
use crate::traits::{SearchAlgorithm, Snapshot};

/// A* search with a Manhattan heuristic.
///
/// The open and closed lists are unordered vectors scanned linearly each
/// iteration; simplicity over performance, since grids stay small enough
/// for the replay layer anyway. A [`Snapshot`] of both lists is recorded
/// on every expansion so the replay can paint frontier membership.
#[derive(Debug, Default)]
pub struct AStar {
    visited: Vec<Point>,
    snapshots: Vec<Snapshot>,
}

impl AStar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchAlgorithm for AStar {
    fn find_path(&mut self, grid: &mut Grid) -> Vec<Point> {
        let (Some(start), Some(end)) = (grid.start_idx(), grid.end_idx()) else {
            return Vec::new();
        };
        self.reset(grid);

        let end_p = grid.point(end);
        {
            let start_p = grid.point(start);
            let c = grid.cell_mut(start);
            c.g_cost = 0;
            c.h_cost = manhattan(start_p, end_p);
            c.update_f();
        }

        let mut open: Vec<usize> = vec![start];
        let mut closed: Vec<usize> = Vec::new();
        let mut nbuf: Vec<Point> = Vec::with_capacity(4);

        while !open.is_empty() {
            // Min f-cost, ties broken by min h-cost (the greedier cell).
            let mut best = 0;
            for pos in 1..open.len() {
                let cand = grid.cell(open[pos]);
                let cur = grid.cell(open[best]);
                if cand.f_cost < cur.f_cost
                    || (cand.f_cost == cur.f_cost && cand.h_cost < cur.h_cost)
                {
                    best = pos;
                }
            }
            let ci = open.remove(best);
            closed.push(ci);

            let cp = grid.point(ci);
            let c = grid.cell_mut(ci);
            if c.can_modify() {
                c.visited = true;
            }
            self.visited.push(cp);

            self.snapshots.push(Snapshot {
                open: open.iter().map(|&i| grid.point(i)).collect(),
                closed: closed.iter().map(|&i| grid.point(i)).collect(),
                current: cp,
            });

            if ci == end {
                let path = reconstruct(grid);
                log::debug!(
                    "astar: expanded {} cells, path length {}",
                    self.visited.len(),
                    path.len()
                );
                return path;
            }

            let current_g = grid.cell(ci).g_cost;
            grid.neighbors(cp, &mut nbuf);
            for &np in &nbuf {
                let Some(ni) = grid.idx(np) else { continue };
                if closed.contains(&ni) {
                    continue;
                }
                let tentative_g = current_g + 1;
                let in_open = open.contains(&ni);
                let n = grid.cell_mut(ni);
                if !in_open || tentative_g < n.g_cost {
                    n.parent = Some(ci);
                    n.g_cost = tentative_g;
                    n.h_cost = manhattan(np, end_p);
                    n.update_f();
                    if !in_open {
                        open.push(ni);
                    }
                }
            }
        }

        log::debug!("astar: no path, expanded {} cells", self.visited.len());
        Vec::new()
    }

    fn reset(&mut self, grid: &mut Grid) {
        self.visited.clear();
        self.snapshots.clear();
        grid.reset_transient();
    }

    fn visited_order(&self) -> &[Point] {
        &self.visited
    }

    fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }
}
