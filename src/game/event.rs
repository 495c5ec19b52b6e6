use crate::chart::{Lane, NoteKind};

use super::engine::RunPhase;
use super::judge::TimingDirection;

/// Discrete judgment feedback for transient renderer effects. Exactly one
/// event is emitted per press, and one per expired note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JudgeEvent {
    /// A press consumed a note.
    Hit {
        lane: Lane,
        note_id: u32,
        score_delta: u64,
        direction: TimingDirection,
    },
    /// A pending note scrolled past the miss window unpressed.
    Miss { lane: Lane, note_id: u32 },
    /// A press matched no pending note in its lane.
    Empty { lane: Lane },
}

/// One note in the renderer-facing visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleNote {
    pub note_id: u32,
    pub lane: Lane,
    pub kind: NoteKind,
    /// Normalized travel toward the hit line: 0 when the note enters the
    /// window, 1 at its scheduled time.
    pub progress: f64,
}

/// Read-only projection of engine state published once per frame. The
/// renderer is a pure consumer; nothing here feeds back into the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub song_time_s: f64,
    pub phase: RunPhase,
    pub visible: Vec<VisibleNote>,
    pub score: u64,
    pub combo: u32,
    /// Recomputed from combo on every snapshot, never cached.
    pub multiplier: u32,
    pub streak_active: bool,
    /// Judgments since the previous snapshot, in emission order.
    pub events: Vec<JudgeEvent>,
}
