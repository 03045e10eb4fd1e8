//! The [`Cell`] type — one grid square with its wall, role, and search state.

/// Sentinel value meaning "infinitely far" for [`Cell::distance`].
pub const UNREACHABLE: i32 = i32::MAX;

/// Special designation a cell may carry. At most one cell per grid holds
/// `Start` and at most one holds `End`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    None,
    Start,
    End,
}

/// Priority-ordered classification of a cell for the rendering layer.
///
/// The order of the checks in [`Cell::visual_state`] is the paint priority:
/// a visited cell that is also on the path shows as `Path`, and so on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisualState {
    Start,
    End,
    Current,
    Path,
    Processed,
    Visited,
    Exploring,
    Wall,
    Empty,
}

/// One square of the grid.
///
/// `wall` and `role` are authored state; everything else is transient
/// search state cleared by [`reset_transient`](Cell::reset_transient)
/// between runs. `parent` is a flat index into the owning grid's arena,
/// forming a tree rooted at the start cell once a search succeeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub wall: bool,
    pub role: Role,
    pub visited: bool,
    pub current: bool,
    pub exploring: bool,
    pub processed: bool,
    pub on_path: bool,
    pub g_cost: i32,
    pub h_cost: i32,
    pub f_cost: i32,
    pub distance: i32,
    pub parent: Option<usize>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            wall: false,
            role: Role::None,
            visited: false,
            current: false,
            exploring: false,
            processed: false,
            on_path: false,
            g_cost: 0,
            h_cost: 0,
            f_cost: 0,
            distance: UNREACHABLE,
            parent: None,
        }
    }
}

impl Cell {
    /// Clear all search state. `wall` and `role` are untouched.
    pub fn reset_transient(&mut self) {
        self.visited = false;
        self.current = false;
        self.exploring = false;
        self.processed = false;
        self.on_path = false;
        self.g_cost = 0;
        self.h_cost = 0;
        self.f_cost = 0;
        self.distance = UNREACHABLE;
        self.parent = None;
    }

    /// Whether drawing tools and replay highlights may touch this cell.
    /// Start and end cells keep their appearance no matter what.
    #[inline]
    pub fn can_modify(&self) -> bool {
        self.role == Role::None
    }

    /// Recompute `f_cost` from `g_cost` and `h_cost`.
    #[inline]
    pub fn update_f(&mut self) {
        self.f_cost = self.g_cost + self.h_cost;
    }

    /// Classify this cell for painting.
    pub fn visual_state(&self) -> VisualState {
        match self.role {
            Role::Start => VisualState::Start,
            Role::End => VisualState::End,
            Role::None => {
                if self.current {
                    VisualState::Current
                } else if self.on_path {
                    VisualState::Path
                } else if self.processed {
                    VisualState::Processed
                } else if self.visited {
                    VisualState::Visited
                } else if self.exploring {
                    VisualState::Exploring
                } else if self.wall {
                    VisualState::Wall
                } else {
                    VisualState::Empty
                }
            }
        }
    }
}
