//! The [`Grid`] type — a flat, row-major arena of [`Cell`]s.
//!
//! Cells are addressed either by [`Point`] (bounds-checked, absent outside
//! the grid) or by flat index (used for parent links inside the arena).

use crate::cell::{Cell, Role};
use crate::geom::Point;

/// A fixed-size rectangular grid of [`Cell`]s.
///
/// Created once per session or full re-initialization; cells are mutated in
/// place by authoring tools and searches, and reset between runs.
#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    start: Option<usize>,
    end: Option<usize>,
}

impl Grid {
    /// Create a new grid of the given dimensions (clamped to at least 1×1),
    /// with no start or end designated.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(1);
        let h = height.max(1);
        Self {
            width: w,
            height: h,
            cells: vec![Cell::default(); (w * h) as usize],
            start: None,
            end: None,
        }
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Convert a point to a flat arena index. `None` outside the grid.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y * self.width + p.x) as usize)
        } else {
            None
        }
    }

    /// Convert a flat arena index back to a point.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.width, idx as i32 / self.width)
    }

    /// The cell at `p`, or `None` outside the grid.
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` outside the grid.
    pub fn at_mut(&mut self, p: Point) -> Option<&mut Cell> {
        match self.idx(p) {
            Some(i) => Some(&mut self.cells[i]),
            None => None,
        }
    }

    /// The cell at a flat index. Panics on an out-of-arena index, which
    /// only indices produced by [`idx`](Grid::idx) can avoid by construction.
    #[inline]
    pub fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable access by flat index.
    #[inline]
    pub fn cell_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// Flat index of the start cell, if designated.
    #[inline]
    pub fn start_idx(&self) -> Option<usize> {
        self.start
    }

    /// Flat index of the end cell, if designated.
    #[inline]
    pub fn end_idx(&self) -> Option<usize> {
        self.end
    }

    /// Position of the start cell, if designated.
    pub fn start(&self) -> Option<Point> {
        self.start.map(|i| self.point(i))
    }

    /// Position of the end cell, if designated.
    pub fn end(&self) -> Option<Point> {
        self.end.map(|i| self.point(i))
    }

    /// Designate `p` as the start cell. Clears the previous holder's role
    /// and any wall on the target. No-op outside the grid.
    pub fn set_start(&mut self, p: Point) {
        let Some(i) = self.idx(p) else { return };
        if let Some(old) = self.start.take() {
            self.cells[old].role = Role::None;
        }
        self.cells[i].role = Role::Start;
        self.cells[i].wall = false;
        self.start = Some(i);
    }

    /// Designate `p` as the end cell. Clears the previous holder's role
    /// and any wall on the target. No-op outside the grid.
    pub fn set_end(&mut self, p: Point) {
        let Some(i) = self.idx(p) else { return };
        if let Some(old) = self.end.take() {
            self.cells[old].role = Role::None;
        }
        self.cells[i].role = Role::End;
        self.cells[i].wall = false;
        self.end = Some(i);
    }

    /// Set or clear a wall at `p`. No-op outside the grid and on the
    /// start/end cells.
    pub fn set_wall(&mut self, p: Point, wall: bool) {
        if let Some(c) = self.at_mut(p) {
            if c.can_modify() {
                c.wall = wall;
            }
        }
    }

    /// Collect the walkable cardinal neighbours of `p` into `buf`, in
    /// fixed up, right, down, left order. Out-of-bounds and wall cells are
    /// skipped. `buf` is cleared first.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.clear();
        for n in p.neighbors_4() {
            if let Some(c) = self.at(n) {
                if !c.wall {
                    buf.push(n);
                }
            }
        }
    }

    /// Clear the transient search state of every cell. Walls and roles are
    /// untouched.
    pub fn reset_transient(&mut self) {
        for c in &mut self.cells {
            c.reset_transient();
        }
    }

    /// Remove every wall except on the start/end cells.
    pub fn clear_walls(&mut self) {
        for c in &mut self.cells {
            if c.can_modify() {
                c.wall = false;
            }
        }
    }

    /// Row-major iterator over `(Point, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> {
        self.cells.iter().enumerate().map(|(i, c)| (self.point(i), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::UNREACHABLE;

    #[test]
    fn new_clamps_to_one_by_one() {
        let g = Grid::new(0, -4);
        assert_eq!(g.width(), 1);
        assert_eq!(g.height(), 1);
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn idx_and_point_round_trip() {
        let g = Grid::new(4, 3);
        let p = Point::new(3, 2);
        let i = g.idx(p).unwrap();
        assert_eq!(i, 11);
        assert_eq!(g.point(i), p);
        assert_eq!(g.idx(Point::new(4, 0)), None);
        assert_eq!(g.idx(Point::new(0, -1)), None);
    }

    #[test]
    fn at_out_of_bounds_is_none() {
        let g = Grid::new(2, 2);
        assert!(g.at(Point::new(0, 0)).is_some());
        assert!(g.at(Point::new(2, 0)).is_none());
        assert!(g.at(Point::new(-1, 1)).is_none());
    }

    #[test]
    fn set_start_moves_role_and_clears_wall() {
        let mut g = Grid::new(5, 5);
        let a = Point::new(1, 1);
        let b = Point::new(3, 3);
        g.set_wall(b, true);

        g.set_start(a);
        assert_eq!(g.at(a).unwrap().role, Role::Start);
        assert_eq!(g.start(), Some(a));

        // Moving start onto a wall clears the wall instead of failing.
        g.set_start(b);
        assert_eq!(g.at(a).unwrap().role, Role::None);
        assert_eq!(g.at(b).unwrap().role, Role::Start);
        assert!(!g.at(b).unwrap().wall);
        assert_eq!(g.start(), Some(b));
    }

    #[test]
    fn set_start_out_of_bounds_is_noop() {
        let mut g = Grid::new(3, 3);
        g.set_start(Point::new(1, 1));
        g.set_start(Point::new(9, 9));
        assert_eq!(g.start(), Some(Point::new(1, 1)));
    }

    #[test]
    fn set_wall_spares_endpoints() {
        let mut g = Grid::new(3, 3);
        g.set_start(Point::new(0, 0));
        g.set_end(Point::new(2, 2));
        g.set_wall(Point::new(0, 0), true);
        g.set_wall(Point::new(1, 1), true);
        assert!(!g.at(Point::new(0, 0)).unwrap().wall);
        assert!(g.at(Point::new(1, 1)).unwrap().wall);
    }

    #[test]
    fn neighbors_order_and_wall_filtering() {
        let mut g = Grid::new(3, 3);
        let c = Point::new(1, 1);
        let mut buf = Vec::new();

        g.neighbors(c, &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1),
            ]
        );

        g.set_wall(Point::new(2, 1), true);
        g.neighbors(c, &mut buf);
        assert_eq!(
            buf,
            vec![Point::new(1, 0), Point::new(1, 2), Point::new(0, 1)]
        );

        // Corner cell only has in-bounds neighbours.
        g.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn reset_transient_clears_search_state_only() {
        let mut g = Grid::new(2, 2);
        g.set_wall(Point::new(1, 0), true);
        g.set_start(Point::new(0, 0));
        {
            let c = g.at_mut(Point::new(0, 1)).unwrap();
            c.visited = true;
            c.distance = 4;
            c.parent = Some(0);
        }
        g.reset_transient();
        let c = g.at(Point::new(0, 1)).unwrap();
        assert!(!c.visited);
        assert_eq!(c.distance, UNREACHABLE);
        assert_eq!(c.parent, None);
        assert!(g.at(Point::new(1, 0)).unwrap().wall);
        assert_eq!(g.at(Point::new(0, 0)).unwrap().role, Role::Start);
    }

    #[test]
    fn clear_walls_spares_endpoints() {
        let mut g = Grid::new(3, 3);
        g.set_start(Point::new(0, 0));
        for x in 0..3 {
            g.set_wall(Point::new(x, 1), true);
        }
        g.clear_walls();
        for (_, c) in g.iter() {
            assert!(!c.wall);
        }
        assert_eq!(g.at(Point::new(0, 0)).unwrap().role, Role::Start);
    }

    #[test]
    fn iter_is_row_major() {
        let g = Grid::new(3, 2);
        let points: Vec<Point> = g.iter().map(|(p, _)| p).collect();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Point::new(0, 0));
        assert_eq!(points[1], Point::new(1, 0));
        assert_eq!(points[3], Point::new(0, 1));
    }
}
