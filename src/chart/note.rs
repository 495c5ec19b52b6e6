use serde::{Deserialize, Serialize};

/// Number of input lanes. Fixed: the physical key mapping is 1:1.
pub const LANE_COUNT: usize = 4;

/// One of the four fixed input channels a note can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    Left,
    Down,
    Up,
    Right,
}

impl Lane {
    pub const ALL: [Lane; LANE_COUNT] = [Lane::Left, Lane::Down, Lane::Up, Lane::Right];

    /// Convert from a raw lane index. Out-of-range indices (e.g. from a
    /// misconfigured input layer) map to `None` and are ignored upstream.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Down => 1,
            Lane::Up => 2,
            Lane::Right => 3,
        }
    }

    /// Cyclic rotation to the next lane, used to break up same-lane repeats.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % LANE_COUNT]
    }
}

/// How a note was scheduled by the chart builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteKind {
    /// Regular on-beat note, subject to the minimum-gap rule.
    Tap,
    /// Off-beat note injected a half-beat after a tap to vary rhythm
    /// density. Exempt from the minimum-gap rule.
    Double,
}

impl NoteKind {
    pub fn is_double(self) -> bool {
        matches!(self, Self::Double)
    }
}

/// A scheduled hit event. Immutable once the chart is built; live per-run
/// state (pending / hit / expired) is owned by the engine's working queue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Emission counter, unique within a chart.
    pub id: u32,
    pub lane: Lane,
    /// Scheduled time in seconds, relative to song start.
    pub time_s: f64,
    pub kind: NoteKind,
}
