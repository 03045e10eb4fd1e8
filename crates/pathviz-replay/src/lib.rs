//! Step-replay of a completed search — deterministic, steppable, pausable.
//!
//! A finished [`pathviz_search`] run yields a visit order, a path, and
//! (for A*) per-expansion snapshots. [`StepSequence::record`] flattens
//! those into an immutable list of [`Step`]s, and [`ReplayController`]
//! exposes a single cursor over that list with forward/backward stepping
//! and a cooperative play/pause loop driven by an external scheduler tick.

mod controller;
mod speed;
mod step;

pub use controller::{Mode, ReplayController};
pub use speed::Speed;
pub use step::{Step, StepKind, StepSequence};
