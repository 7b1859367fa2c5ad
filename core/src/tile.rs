use crate::*;

/// Where a tile currently sits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Slot in the initial row, counted from 0.
    Row(u8),
    /// Offset within the arena after a scramble.
    Arena(Point),
}

impl Placement {
    pub const fn is_scrambled(self) -> bool {
        matches!(self, Self::Arena(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    rank: Rank,
    color: Color,
    placement: Placement,
    label_visible: bool,
    input_enabled: bool,
}

impl Tile {
    /// Creates a tile mounted in the row slot matching its rank, label shown and input off.
    pub fn new(rank: Rank, color: Color) -> Self {
        Self {
            rank,
            color,
            placement: Placement::Row(rank.saturating_sub(1)),
            label_visible: true,
            input_enabled: false,
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn is_label_visible(&self) -> bool {
        self.label_visible
    }

    pub fn accepts_input(&self) -> bool {
        self.input_enabled
    }

    pub(crate) fn place(&mut self, point: Point) {
        self.placement = Placement::Arena(point);
    }

    pub(crate) fn show_label(&mut self, show: bool) {
        self.label_visible = show;
    }

    /// Detaches any previous input first so at most one handler is ever live.
    pub(crate) fn enable_input(&mut self) {
        self.disable_input();
        self.input_enabled = true;
    }

    pub(crate) fn disable_input(&mut self) {
        self.input_enabled = false;
    }
}
