use crate::astar::AStar;
use crate::bfs::BreadthFirst;
use crate::dijkstra::Dijkstra;
use crate::traits::SearchAlgorithm;

/// Selector for the available search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmKind {
    Bfs,
    Dijkstra,
    AStar,
}

impl AlgorithmKind {
    /// Every kind, in the order they appear in the UI.
    pub const ALL: [AlgorithmKind; 3] =
        [AlgorithmKind::AStar, AlgorithmKind::Dijkstra, AlgorithmKind::Bfs];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Bfs => "BFS",
            AlgorithmKind::Dijkstra => "Dijkstra",
            AlgorithmKind::AStar => "A*",
        }
    }

    /// Construct a fresh instance of the selected strategy.
    pub fn build(self) -> Box<dyn SearchAlgorithm> {
        match self {
            AlgorithmKind::Bfs => Box::new(BreadthFirst::new()),
            AlgorithmKind::Dijkstra => Box::new(Dijkstra::new()),
            AlgorithmKind::AStar => Box::new(AStar::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use pathviz_core::{Grid, Point};

    fn open_grid() -> Grid {
        let mut g = Grid::new(5, 5);
        g.set_start(Point::new(0, 0));
        g.set_end(Point::new(4, 4));
        g
    }

    fn assert_valid_path(g: &Grid, path: &[Point]) {
        assert_eq!(path.first().copied(), g.start());
        assert_eq!(path.last().copied(), g.end());
        for pair in path.windows(2) {
            assert_eq!(manhattan(pair[0], pair[1]), 1);
            assert!(!g.at(pair[1]).unwrap().wall);
        }
        let mut dedup = path.to_vec();
        dedup.sort_by_key(|p| (p.y, p.x));
        dedup.dedup();
        assert_eq!(dedup.len(), path.len());
    }

    #[test]
    fn all_kinds_agree_on_open_grid() {
        for kind in AlgorithmKind::ALL {
            let mut g = open_grid();
            let mut alg = kind.build();
            let path = alg.find_path(&mut g);
            assert_eq!(path.len(), 9, "{} path length", kind.name());
            assert_valid_path(&g, &path);
        }
    }

    #[test]
    fn all_kinds_take_the_long_way_around() {
        // Start and end are adjacent but separated by a wall; the only
        // route loops around it.
        for kind in AlgorithmKind::ALL {
            let mut g = Grid::new(5, 5);
            g.set_start(Point::new(1, 2));
            g.set_end(Point::new(3, 2));
            g.set_wall(Point::new(2, 1), true);
            g.set_wall(Point::new(2, 2), true);
            g.set_wall(Point::new(2, 3), true);

            let mut alg = kind.build();
            let path = alg.find_path(&mut g);
            assert!(!path.is_empty(), "{} found no path", kind.name());
            assert_valid_path(&g, &path);
            assert!(!path.contains(&Point::new(2, 2)));
            // Detour around a 3-cell wall: 6 edges, 7 cells.
            assert_eq!(path.len(), 7, "{} path length", kind.name());
        }
    }

    #[test]
    fn all_kinds_report_no_path_for_enclosed_end() {
        for kind in AlgorithmKind::ALL {
            let mut g = Grid::new(5, 5);
            g.set_start(Point::new(0, 0));
            g.set_end(Point::new(3, 3));
            for p in [
                Point::new(2, 2),
                Point::new(3, 2),
                Point::new(4, 2),
                Point::new(2, 3),
                Point::new(4, 3),
                Point::new(2, 4),
                Point::new(3, 4),
                Point::new(4, 4),
            ] {
                g.set_wall(p, true);
            }
            let mut alg = kind.build();
            assert!(alg.find_path(&mut g).is_empty(), "{}", kind.name());
            assert_eq!(alg.visited_order().len(), 16, "{}", kind.name());
        }
    }

    #[test]
    fn heuristic_prunes_exploration() {
        // On a grid where the end sits in a corner away from the start,
        // A* expands no more cells than Dijkstra, which expands no more
        // than BFS.
        let count = |kind: AlgorithmKind| {
            let mut g = Grid::new(9, 9);
            g.set_start(Point::new(0, 4));
            g.set_end(Point::new(8, 4));
            let mut alg = kind.build();
            alg.find_path(&mut g);
            alg.visited_order().len()
        };
        let astar = count(AlgorithmKind::AStar);
        let dijkstra = count(AlgorithmKind::Dijkstra);
        let bfs = count(AlgorithmKind::Bfs);
        assert!(astar <= dijkstra, "astar {astar} > dijkstra {dijkstra}");
        assert!(dijkstra <= bfs, "dijkstra {dijkstra} > bfs {bfs}");
    }

    #[test]
    fn all_kinds_are_deterministic_across_runs() {
        for kind in AlgorithmKind::ALL {
            let mut g = Grid::new(6, 6);
            g.set_start(Point::new(0, 5));
            g.set_end(Point::new(5, 0));
            g.set_wall(Point::new(3, 3), true);
            g.set_wall(Point::new(3, 4), true);

            let mut alg = kind.build();
            let path_a = alg.find_path(&mut g);
            let order_a = alg.visited_order().to_vec();
            let path_b = alg.find_path(&mut g);
            assert_eq!(path_a, path_b, "{}", kind.name());
            assert_eq!(order_a, alg.visited_order(), "{}", kind.name());
        }
    }
}
