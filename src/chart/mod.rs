mod builder;
mod note;

pub use builder::{
    DOUBLE_EVERY_BEATS, MIN_NOTE_GAP_S, NOTE_DENSITY, TAIL_MARGIN_S, build_chart, chart_seed,
};
pub use note::{LANE_COUNT, Lane, Note, NoteKind};

use serde::{Deserialize, Serialize};

/// The full ordered note list for one track/run, plus the audio features it
/// was derived from. Read-only after construction: the engine grades against
/// its own working copy, never this list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    /// Detected tempo the chart was built from.
    pub bpm: f64,
    /// Time of the first strong beat, seconds.
    pub offset_s: f64,
    /// Total playable track length, seconds.
    pub duration_s: f64,
    /// Notes in non-decreasing scheduled-time order.
    pub notes: Vec<Note>,
}

impl Chart {
    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
