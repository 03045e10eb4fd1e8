//! **pathviz-core** — Grid and cell model for pathfinding visualization.
//!
//! This crate provides the foundational types shared by the search and
//! replay layers: the [`Point`] geometry primitive, the [`Cell`] model with
//! its wall/role/search fields, and the flat row-major [`Grid`] arena that
//! owns the cells and answers adjacency queries.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Role, UNREACHABLE, VisualState};
pub use geom::Point;
pub use grid::Grid;
