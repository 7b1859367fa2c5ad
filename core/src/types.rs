/// A tile's position in the originally displayed order, starting at 1.
pub type Rank = u8;

/// Count type used for tile totals, moves and correct guesses.
pub type TileCount = u8;

/// Length in CSS pixels on the arena surface.
pub type Px = u32;

/// Width and height of a rendered surface or tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Extent {
    pub width: Px,
    pub height: Px,
}

impl Extent {
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Largest top-left offset at which `inner` still fits inside `self`.
    pub const fn room_for(self, inner: Extent) -> Extent {
        Extent {
            width: self.width.saturating_sub(inner.width),
            height: self.height.saturating_sub(inner.height),
        }
    }
}

/// Top-left offset of a tile within the arena.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: Px,
    pub y: Px,
}

impl Point {
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    pub const fn fits_within(self, room: Extent) -> bool {
        self.x <= room.width && self.y <= room.height
    }
}

/// Identifies one round; a fresh id is handed out by every accepted start.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RoundId(u32);

impl RoundId {
    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
