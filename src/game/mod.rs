mod clock;
mod engine;
mod event;
mod judge;
mod result;
mod score;

pub use clock::SongClock;
pub use engine::{GameEngine, RunPhase};
pub use event::{FrameSnapshot, JudgeEvent, VisibleNote};
pub use judge::{BASE_SCORE_FLOOR, BASE_SCORE_MAX, JudgeWindows, TimingDirection, TimingStats};
pub use result::PlayResult;
pub use score::{STREAK_THRESHOLD, ScoreBoard, multiplier, streak_active};
