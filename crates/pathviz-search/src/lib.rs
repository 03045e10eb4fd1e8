//! Shortest-path search strategies over a [`pathviz_core::Grid`].
//!
//! Three interchangeable strategies implement the [`SearchAlgorithm`]
//! contract:
//!
//! - [`BreadthFirst`] — unweighted FIFO expansion
//! - [`Dijkstra`] — explicit unvisited-set relaxation with unit weights
//! - [`AStar`] — open/closed lists with a Manhattan heuristic, recording a
//!   per-expansion [`Snapshot`] for frontier visualization
//!
//! All three return the same optimal path length on unit-cost 4-connected
//! grids; they differ in the order (and number) of cells they expand, which
//! is exactly what the replay layer animates.

mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod kind;
mod path;
mod traits;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use dijkstra::Dijkstra;
pub use distance::{euclidean, manhattan};
pub use kind::AlgorithmKind;
pub use path::reconstruct;
pub use traits::{SearchAlgorithm, Snapshot};
