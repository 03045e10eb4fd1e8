use pathviz_core::{Grid, Point};

/// A per-expansion capture of A*'s open and closed lists.
///
/// The replay layer uses these to paint "currently exploring" (open) and
/// "fully processed" (closed) cells as the animation advances. BFS and
/// Dijkstra record none.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub open: Vec<Point>,
    pub closed: Vec<Point>,
    pub current: Point,
}

/// Common contract of the three search strategies.
///
/// A run is synchronous: `find_path` scans the whole grid eagerly and
/// returns only when the search terminates. Overlapping runs on one
/// instance are not supported; the orchestrator serializes them.
pub trait SearchAlgorithm {
    /// Run the search to completion.
    ///
    /// Returns the path from start to end inclusive, or an empty vector if
    /// no start/end is designated (in which case nothing is mutated) or if
    /// no route exists (in which case [`visited_order`] still describes the
    /// full exploration).
    ///
    /// [`visited_order`]: SearchAlgorithm::visited_order
    fn find_path(&mut self, grid: &mut Grid) -> Vec<Point>;

    /// Clear internal structures and the grid's transient cell state.
    fn reset(&mut self, grid: &mut Grid);

    /// Cells expanded by the last run, in expansion order.
    fn visited_order(&self) -> &[Point];

    /// Per-expansion snapshots of the last run, if the strategy records
    /// them (A* only).
    fn snapshots(&self) -> &[Snapshot];
}
