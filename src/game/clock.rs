/// Song-clock bookkeeping. Song time is derived from an external,
/// monotonically increasing audio clock, never from wall-clock time: once a
/// pause has occurred, wall time and song time diverge permanently.
#[derive(Debug, Clone, Copy)]
pub struct SongClock {
    /// Audio-clock reading that corresponds to song time zero.
    anchor_s: f64,
    song_time_s: f64,
    paused: bool,
    reanchor_pending: bool,
}

impl SongClock {
    /// Start the clock; `start_clock_s` is the audio-clock reading at the
    /// moment the run begins.
    pub fn new(start_clock_s: f64) -> Self {
        Self {
            anchor_s: start_clock_s,
            song_time_s: 0.0,
            paused: false,
            reanchor_pending: false,
        }
    }

    /// Advance from an audio-clock reading; returns the current song time.
    /// While paused the reading is ignored and song time stays frozen.
    pub fn advance(&mut self, clock_now_s: f64) -> f64 {
        if self.paused {
            return self.song_time_s;
        }
        if self.reanchor_pending {
            // First reading after resume: continue from the paused song
            // time, however long the pause lasted.
            self.anchor_s = clock_now_s - self.song_time_s;
            self.reanchor_pending = false;
        }
        self.song_time_s = clock_now_s - self.anchor_s;
        self.song_time_s
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Unfreeze; the anchor is recomputed from the next clock reading so
    /// elapsed musical time continues seamlessly.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.reanchor_pending = true;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn song_time_s(&self) -> f64 {
        self.song_time_s
    }
}
