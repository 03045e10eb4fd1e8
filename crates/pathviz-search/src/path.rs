use pathviz_core::{Grid, Point};

/// Reconstruct the path by walking parent indices from the end cell back
/// to the start, returning it in start-to-end order.
///
/// Every path cell other than the start/end is marked `on_path`. Callers
/// must only invoke this after the end cell has been expanded; otherwise
/// the parent chain does not reach the start and the result is meaningless.
pub fn reconstruct(grid: &mut Grid) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cursor = grid.end_idx();
    while let Some(i) = cursor {
        path.push(grid.point(i));
        let c = grid.cell_mut(i);
        if c.can_modify() {
            c.on_path = true;
        }
        cursor = c.parent;
    }
    path.reverse();
    path
}
