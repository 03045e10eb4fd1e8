//! The [`ReplayController`] — a single-cursor state machine over a
//! recorded [`StepSequence`].

use std::time::Duration;

use pathviz_core::{Grid, Point};
use pathviz_search::Snapshot;

use crate::speed::Speed;
use crate::step::{StepKind, StepSequence};

/// Controller mode.
///
/// `Idle → Recording → {Stepping | Playing}`, with `Playing ⇄ Paused`,
/// ending in `Finished`. `Finished` is terminal until the next
/// [`record`](ReplayController::record) or [`reset`](ReplayController::reset).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Recording,
    Stepping,
    Playing,
    Paused,
    Finished,
}

/// Replays one completed search as discrete, reversible animation steps.
///
/// The controller never schedules anything itself: during play an external
/// scheduler calls [`tick`](ReplayController::tick) and sleeps for the
/// returned delay. Pausing is cooperative — the flag is polled before each
/// tick, never interrupting a step mid-application.
pub struct ReplayController {
    steps: StepSequence,
    cursor: usize,
    mode: Mode,
    speed: Speed,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl Default for ReplayController {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplayController {
    /// Create an idle controller with an empty sequence.
    pub fn new() -> Self {
        Self {
            steps: StepSequence::default(),
            cursor: 0,
            mode: Mode::Idle,
            speed: Speed::default(),
            on_complete: None,
        }
    }

    /// Current mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Cursor position, in `0..=len`.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Playback speed.
    #[inline]
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Change the playback speed; takes effect at the next tick.
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Register the completion callback, fired at most once when playback
    /// reaches the end of the sequence.
    pub fn on_complete(&mut self, f: impl FnOnce() + 'static) {
        self.on_complete = Some(Box::new(f));
    }

    /// Record a completed search, replacing any previous sequence.
    ///
    /// The grid's transient state is cleared first: the search just
    /// painted it all at once, and the replay re-derives it step by step.
    pub fn record(
        &mut self,
        grid: &mut Grid,
        visited: &[Point],
        path: &[Point],
        snapshots: &[Snapshot],
    ) {
        self.mode = Mode::Recording;
        grid.reset_transient();
        self.steps = StepSequence::record(visited, path, snapshots);
        self.cursor = 0;
        self.mode = Mode::Stepping;
    }

    /// Drop the sequence and return to `Idle`.
    pub fn reset(&mut self) {
        self.steps = StepSequence::default();
        self.cursor = 0;
        self.mode = Mode::Idle;
        self.on_complete = None;
    }

    /// Apply the step at the cursor and advance. Returns `false` (leaving
    /// everything untouched) when idle, finished, or already at the end.
    pub fn step_forward(&mut self, grid: &mut Grid) -> bool {
        match self.mode {
            Mode::Idle | Mode::Recording | Mode::Finished => return false,
            Mode::Stepping | Mode::Playing | Mode::Paused => {}
        }
        if self.cursor >= self.steps.len() {
            return false;
        }
        self.apply_step(grid, self.cursor);
        self.cursor += 1;
        true
    }

    /// Move the cursor back one step. Returns `false` at index 0 or in an
    /// inactive mode.
    ///
    /// Snapshots are cumulative forward-only records, so a single step
    /// cannot be inverted; the grid is reset and every step up to the new
    /// cursor is replayed instead. O(index), bounded by the grid size.
    pub fn step_backward(&mut self, grid: &mut Grid) -> bool {
        match self.mode {
            Mode::Idle | Mode::Recording | Mode::Finished => return false,
            Mode::Stepping | Mode::Playing | Mode::Paused => {}
        }
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        grid.reset_transient();
        for i in 0..self.cursor {
            self.apply_step(grid, i);
        }
        true
    }

    /// Start (or resume) playback. Returns `false` unless stepping,
    /// paused, or already playing.
    pub fn play(&mut self) -> bool {
        match self.mode {
            Mode::Stepping | Mode::Paused | Mode::Playing => {
                self.mode = Mode::Playing;
                true
            }
            _ => false,
        }
    }

    /// Suspend playback after the current step. The next scheduled tick
    /// sees the flag and becomes a no-op; resuming continues exactly from
    /// the cursor.
    pub fn pause(&mut self) -> bool {
        if self.mode == Mode::Playing {
            self.mode = Mode::Paused;
            true
        } else {
            false
        }
    }

    /// One scheduler tick: while playing, apply the next step and return
    /// the delay until the following tick. Returns `None` when not playing
    /// or when the sequence just finished.
    pub fn tick(&mut self, grid: &mut Grid) -> Option<Duration> {
        if self.mode != Mode::Playing {
            return None;
        }
        self.step_forward(grid);
        if self.cursor >= self.steps.len() {
            self.finish(grid);
            return None;
        }
        Some(self.speed.delay())
    }

    /// End the run: clear every current/exploring/processed highlight
    /// (visited and path marks stay), transition to `Finished`, and fire
    /// the completion callback.
    fn finish(&mut self, grid: &mut Grid) {
        for i in 0..grid.len() {
            let c = grid.cell_mut(i);
            c.current = false;
            c.exploring = false;
            c.processed = false;
        }
        self.mode = Mode::Finished;
        log::debug!("replay: finished after {} steps", self.cursor);
        if let Some(cb) = self.on_complete.take() {
            cb();
        }
    }

    fn apply_step(&self, grid: &mut Grid, i: usize) {
        let Some(step) = self.steps.get(i) else { return };

        // The previous step's cell loses the current highlight.
        if i > 0 {
            if let Some(prev) = self.steps.get(i - 1) {
                if let Some(c) = grid.at_mut(prev.pos) {
                    if c.can_modify() {
                        c.current = false;
                    }
                }
            }
        }

        if let Some(c) = grid.at_mut(step.pos) {
            if c.can_modify() {
                match step.kind {
                    StepKind::Visit => {
                        c.visited = true;
                        c.current = true;
                    }
                    StepKind::PathMark => {
                        c.on_path = true;
                    }
                }
            }
        }

        if let Some(snap) = &step.snapshot {
            for &p in &snap.open {
                if let Some(c) = grid.at_mut(p) {
                    if c.can_modify() && !c.visited {
                        c.exploring = true;
                    }
                }
            }
            for &p in &snap.closed {
                if let Some(c) = grid.at_mut(p) {
                    if c.can_modify() {
                        c.processed = true;
                    }
                }
            }
        }
    }
}
