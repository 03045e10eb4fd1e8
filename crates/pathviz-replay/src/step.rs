//! The [`Step`] record and the immutable [`StepSequence`].

use pathviz_core::Point;
use pathviz_search::Snapshot;

/// What a single replay step does to its cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// Mark the cell as visited and highlight it as current.
    Visit,
    /// Mark the cell as part of the final path.
    PathMark,
}

/// One replay unit: a cell, what happens to it, and (for A* visits) the
/// frontier snapshot captured at that expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub pos: Point,
    pub kind: StepKind,
    pub snapshot: Option<Snapshot>,
}

/// The flattened record of one completed search: every visit step in
/// expansion order, followed by every path-mark step in path order.
/// Immutable once recorded.
#[derive(Clone, Debug, Default)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    /// Build the sequence from a search's outputs. Snapshot `i` (when
    /// present) attaches to visit step `i`; path-mark steps carry none.
    pub fn record(visited: &[Point], path: &[Point], snapshots: &[Snapshot]) -> Self {
        let mut steps = Vec::with_capacity(visited.len() + path.len());
        for (i, &pos) in visited.iter().enumerate() {
            steps.push(Step {
                pos,
                kind: StepKind::Visit,
                snapshot: snapshots.get(i).cloned(),
            });
        }
        for &pos in path {
            steps.push(Step {
                pos,
                kind: StepKind::PathMark,
                snapshot: None,
            });
        }
        Self { steps }
    }

    /// Number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step at `i`, if in range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&Step> {
        self.steps.get(i)
    }

    /// Iterate over the steps in order.
    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_precede_path_marks() {
        let visited = [Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)];
        let path = [Point::new(0, 0), Point::new(1, 0)];
        let seq = StepSequence::record(&visited, &path, &[]);

        assert_eq!(seq.len(), 5);
        assert_eq!(seq.get(0).unwrap().kind, StepKind::Visit);
        assert_eq!(seq.get(2).unwrap().kind, StepKind::Visit);
        assert_eq!(seq.get(3).unwrap().kind, StepKind::PathMark);
        assert_eq!(seq.get(4).unwrap().pos, Point::new(1, 0));
        assert!(seq.get(5).is_none());
    }

    #[test]
    fn snapshots_attach_to_matching_visit() {
        let visited = [Point::new(0, 0), Point::new(1, 0)];
        let snaps = vec![
            Snapshot {
                open: vec![],
                closed: vec![Point::new(0, 0)],
                current: Point::new(0, 0),
            },
            Snapshot {
                open: vec![],
                closed: vec![Point::new(0, 0), Point::new(1, 0)],
                current: Point::new(1, 0),
            },
        ];
        let seq = StepSequence::record(&visited, &[], &snaps);
        assert_eq!(
            seq.get(0).unwrap().snapshot.as_ref().unwrap().current,
            Point::new(0, 0)
        );
        assert_eq!(
            seq.get(1).unwrap().snapshot.as_ref().unwrap().current,
            Point::new(1, 0)
        );
    }

    #[test]
    fn missing_snapshots_yield_none() {
        let visited = [Point::new(0, 0), Point::new(1, 0)];
        let seq = StepSequence::record(&visited, &[], &[]);
        assert!(seq.iter().all(|s| s.snapshot.is_none()));
    }
}
