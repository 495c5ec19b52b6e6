use std::collections::VecDeque;

use log::{debug, info};

use crate::chart::{Chart, Lane, NoteKind};
use crate::config::EngineSettings;

use super::clock::SongClock;
use super::event::{FrameSnapshot, JudgeEvent, VisibleNote};
use super::judge::{TimingDirection, TimingStats};
use super::result::PlayResult;
use super::score::ScoreBoard;

/// Per-run engine phase. `Ended` is terminal: a retry constructs a fresh
/// engine instead of rewinding this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Running,
    Paused,
    Ended,
}

/// A not-yet-judged note in the working queue. Copied out of the chart at
/// construction; the chart itself is never mutated.
#[derive(Debug, Clone, Copy)]
struct PendingNote {
    id: u32,
    lane: Lane,
    time_s: f64,
    kind: NoteKind,
}

/// The timing and judgment engine for one run.
///
/// Owned by a single caller and driven from a single thread: one `advance`
/// per animation frame plus discrete `press_lane` calls from the input
/// layer. All operations are synchronous; the only waiting is the external
/// audio clock advancing on its own.
pub struct GameEngine {
    settings: EngineSettings,
    duration_s: f64,
    total_notes: u32,
    /// Working copy of the chart in scheduled-time order. Notes leave the
    /// queue exactly once: on a successful press or on expiry.
    pending: VecDeque<PendingNote>,
    clock: SongClock,
    score: ScoreBoard,
    timing_stats: TimingStats,
    /// Judgments since the last snapshot, drained on `advance`.
    events: Vec<JudgeEvent>,
    ended: bool,
}

impl GameEngine {
    /// Start a run. `start_clock_s` is the audio-clock reading at the moment
    /// the track starts playing.
    pub fn new(chart: &Chart, settings: EngineSettings, start_clock_s: f64) -> Self {
        let pending: VecDeque<PendingNote> = chart
            .notes
            .iter()
            .map(|n| PendingNote {
                id: n.id,
                lane: n.lane,
                time_s: n.time_s,
                kind: n.kind,
            })
            .collect();

        info!(
            "run start: {} notes over {:.1}s",
            pending.len(),
            chart.duration_s
        );

        Self {
            settings,
            duration_s: chart.duration_s,
            total_notes: pending.len() as u32,
            pending,
            clock: SongClock::new(start_clock_s),
            score: ScoreBoard::new(),
            timing_stats: TimingStats::default(),
            events: Vec::new(),
            ended: false,
        }
    }

    pub fn phase(&self) -> RunPhase {
        if self.ended {
            RunPhase::Ended
        } else if self.clock.is_paused() {
            RunPhase::Paused
        } else {
            RunPhase::Running
        }
    }

    pub fn song_time_s(&self) -> f64 {
        self.clock.song_time_s()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Advance the song clock from an audio-clock reading, expire overdue
    /// notes, and publish the frame snapshot. Expiry always runs before the
    /// visible-window projection, so a frame never shows a note that has
    /// already missed. Paused or ended engines return the frozen state.
    pub fn advance(&mut self, clock_now_s: f64) -> FrameSnapshot {
        if self.ended || self.clock.is_paused() {
            return self.snapshot();
        }

        let song_time = self.clock.advance(clock_now_s);
        self.expire_overdue(song_time);

        if song_time >= self.duration_s {
            self.finish(song_time);
        }

        self.snapshot()
    }

    /// Judge a discrete key-down on one lane. No-op while paused or after
    /// the run has ended. Scans pending notes in scheduled-time order and
    /// consumes the earliest unhit note in that lane inside the hit window;
    /// a press never matches more than one note, and exactly one judgment
    /// (hit or empty) is emitted per accepted press.
    pub fn press_lane(&mut self, lane: Lane) -> Option<JudgeEvent> {
        if self.ended || self.clock.is_paused() {
            return None;
        }

        let song_time = self.clock.song_time_s();
        let windows = self.settings.judge;

        let mut found = None;
        for (i, note) in self.pending.iter().enumerate() {
            if note.time_s > song_time + windows.hit_window_s {
                break;
            }
            if note.lane == lane && windows.is_hit(note.time_s - song_time) {
                found = Some(i);
                break;
            }
        }

        let event = if let Some(i) = found {
            let note = self.pending.remove(i)?;
            let diff_s = note.time_s - song_time;
            let base = windows.base_score(diff_s.abs());
            let delta = self.score.add_hit(base);
            let direction = TimingDirection::from_timing_diff(diff_s);
            self.timing_stats.record(direction);

            debug!(
                "hit: note {} lane {:?} err {:+.3}s +{} (combo {})",
                note.id, lane, -diff_s, delta, self.score.combo
            );
            JudgeEvent::Hit {
                lane,
                note_id: note.id,
                score_delta: delta,
                direction,
            }
        } else {
            self.score.add_miss();
            debug!("empty press: lane {:?} at {:.3}s", lane, song_time);
            JudgeEvent::Empty { lane }
        };

        self.events.push(event);
        Some(event)
    }

    /// Freeze the song clock. Safe to call repeatedly.
    pub fn pause(&mut self) {
        if !self.ended {
            self.clock.pause();
        }
    }

    /// Unfreeze; song time continues from where it was paused on the next
    /// `advance`, regardless of how much audio-clock time passed meanwhile.
    pub fn resume(&mut self) {
        if !self.ended {
            self.clock.resume();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.ended
    }

    /// Final statistics. Valid at any time; frozen once the run ends.
    pub fn result(&self) -> PlayResult {
        PlayResult {
            score: self.score.score,
            max_combo: self.score.max_combo,
            hit_count: self.score.hit_count,
            miss_count: self.score.miss_count,
            fast_count: self.timing_stats.fast_count,
            slow_count: self.timing_stats.slow_count,
            total_notes: self.total_notes,
        }
    }

    fn expire_overdue(&mut self, song_time: f64) {
        while self
            .pending
            .front()
            .is_some_and(|n| self.settings.judge.is_expired(n.time_s, song_time))
        {
            if let Some(note) = self.pending.pop_front() {
                self.score.add_miss();
                debug!(
                    "miss: note {} lane {:?} scheduled {:.3}s",
                    note.id, note.lane, note.time_s
                );
                self.events.push(JudgeEvent::Miss {
                    lane: note.lane,
                    note_id: note.id,
                });
            }
        }
    }

    /// Transition to `Ended`. Anything still pending never got a chance to
    /// be judged within the run, so it counts as a miss.
    fn finish(&mut self, song_time: f64) {
        while let Some(note) = self.pending.pop_front() {
            self.score.add_miss();
            self.events.push(JudgeEvent::Miss {
                lane: note.lane,
                note_id: note.id,
            });
        }
        self.ended = true;

        let result = self.result();
        info!(
            "run end at {:.1}s: score {} acc {:.1}% max combo {}",
            song_time,
            result.score,
            result.accuracy(),
            result.max_combo
        );
    }

    fn snapshot(&mut self) -> FrameSnapshot {
        let song_time = self.clock.song_time_s();
        let travel = self.settings.travel_time_s;
        let trail = self.settings.trail_window_s;

        let visible: Vec<VisibleNote> = self
            .pending
            .iter()
            .take_while(|n| n.time_s <= song_time + travel)
            .filter(|n| n.time_s >= song_time - trail)
            .map(|n| VisibleNote {
                note_id: n.id,
                lane: n.lane,
                kind: n.kind,
                progress: (((song_time + travel) - n.time_s) / travel).clamp(0.0, 1.0),
            })
            .collect();

        FrameSnapshot {
            song_time_s: song_time,
            phase: self.phase(),
            visible,
            score: self.score.score,
            combo: self.score.combo,
            multiplier: self.score.multiplier(),
            streak_active: self.score.streak_active(),
            events: std::mem::take(&mut self.events),
        }
    }
}
