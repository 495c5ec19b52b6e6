use serde::{Deserialize, Serialize};

/// Base score for a press judged dead on the note's scheduled time.
pub const BASE_SCORE_MAX: u32 = 140;

/// Base score never drops below this for a press inside the hit window.
pub const BASE_SCORE_FLOOR: u32 = 10;

/// The two grading tolerances. Asymmetric: a note can still be hit slightly
/// later than it can survive unpressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JudgeWindows {
    /// Maximum |press time - note time| in seconds still counted a hit.
    pub hit_window_s: f64,
    /// Grace past a note's scheduled time before it auto-expires as a miss.
    pub miss_window_s: f64,
}

impl JudgeWindows {
    pub fn normal() -> Self {
        Self {
            hit_window_s: 0.17,
            miss_window_s: 0.22,
        }
    }

    /// Whether a press with `time_diff_s` (note time - press time) lands in
    /// the hit window.
    pub fn is_hit(&self, time_diff_s: f64) -> bool {
        time_diff_s.abs() <= self.hit_window_s
    }

    /// Whether a note scheduled at `note_time_s` has expired unpressed at
    /// `song_time_s`.
    pub fn is_expired(&self, note_time_s: f64, song_time_s: f64) -> bool {
        note_time_s < song_time_s - self.miss_window_s
    }

    /// Base score for a hit with absolute timing error `err_s`: linear from
    /// [`BASE_SCORE_MAX`] at zero error down to [`BASE_SCORE_FLOOR`] at the
    /// window edge.
    pub fn base_score(&self, err_s: f64) -> u32 {
        let scaled = (BASE_SCORE_MAX as f64 * (1.0 - err_s / self.hit_window_s)).round();
        scaled.max(BASE_SCORE_FLOOR as f64) as u32
    }
}

impl Default for JudgeWindows {
    fn default() -> Self {
        Self::normal()
    }
}

/// Timing direction of a successful hit, for FAST/SLOW display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingDirection {
    Fast,
    Exact,
    Slow,
}

impl TimingDirection {
    const EXACT_THRESHOLD_S: f64 = 0.005;

    /// Classify a signed timing difference (note time - press time):
    /// positive means the press came early.
    pub fn from_timing_diff(diff_s: f64) -> Self {
        if diff_s > Self::EXACT_THRESHOLD_S {
            TimingDirection::Fast
        } else if diff_s < -Self::EXACT_THRESHOLD_S {
            TimingDirection::Slow
        } else {
            TimingDirection::Exact
        }
    }
}

/// Cumulative FAST/SLOW statistics over a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimingStats {
    pub fast_count: u32,
    pub slow_count: u32,
}

impl TimingStats {
    pub fn record(&mut self, direction: TimingDirection) {
        match direction {
            TimingDirection::Fast => self.fast_count += 1,
            TimingDirection::Slow => self.slow_count += 1,
            TimingDirection::Exact => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_window_is_symmetric() {
        let windows = JudgeWindows::normal();
        assert!(windows.is_hit(0.0));
        assert!(windows.is_hit(windows.hit_window_s));
        assert!(windows.is_hit(-windows.hit_window_s));
        assert!(!windows.is_hit(windows.hit_window_s + 0.001));
        assert!(!windows.is_hit(-windows.hit_window_s - 0.001));
    }

    #[test]
    fn test_expiry_is_one_sided() {
        let windows = JudgeWindows::normal();
        // A future note never expires.
        assert!(!windows.is_expired(5.0, 0.0));
        // A note inside the grace period is still pending.
        assert!(!windows.is_expired(2.0, 2.0 + windows.miss_window_s));
        // Past the grace period it has missed.
        assert!(windows.is_expired(2.0, 2.0 + windows.miss_window_s + 0.001));
    }

    #[test]
    fn test_windows_are_distinct_tolerances() {
        let windows = JudgeWindows::normal();
        assert!(windows.miss_window_s > windows.hit_window_s);
    }

    #[test]
    fn test_base_score_scales_with_error() {
        let windows = JudgeWindows::normal();
        assert_eq!(windows.base_score(0.0), BASE_SCORE_MAX);
        assert_eq!(windows.base_score(windows.hit_window_s), BASE_SCORE_FLOOR);

        let mid = windows.base_score(windows.hit_window_s * 0.5);
        assert!(mid < BASE_SCORE_MAX);
        assert!(mid > BASE_SCORE_FLOOR);
    }

    #[test]
    fn test_timing_direction() {
        assert_eq!(TimingDirection::from_timing_diff(0.0), TimingDirection::Exact);
        assert_eq!(TimingDirection::from_timing_diff(0.05), TimingDirection::Fast);
        assert_eq!(TimingDirection::from_timing_diff(-0.05), TimingDirection::Slow);
    }

    #[test]
    fn test_timing_stats_skip_exact() {
        let mut stats = TimingStats::default();
        stats.record(TimingDirection::Fast);
        stats.record(TimingDirection::Exact);
        stats.record(TimingDirection::Slow);
        stats.record(TimingDirection::Slow);
        assert_eq!(stats.fast_count, 1);
        assert_eq!(stats.slow_count, 2);
    }
}
