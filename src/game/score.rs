/// Combo at or above this activates streak mode.
pub const STREAK_THRESHOLD: u32 = 18;

/// Score multiplier as a pure step function of combo. Never cached: callers
/// recompute on read so the multiplier can never drift from the combo.
pub fn multiplier(combo: u32) -> u32 {
    if combo >= 18 {
        16
    } else if combo >= 14 {
        8
    } else if combo >= 10 {
        4
    } else if combo >= 6 {
        2
    } else {
        1
    }
}

/// Whether streak mode is active for the given combo.
pub fn streak_active(combo: u32) -> bool {
    combo >= STREAK_THRESHOLD
}

/// Mutable per-run scoring state. One instance per engine; a retry
/// constructs a fresh one.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    pub score: u64,
    /// Consecutive successful judgments since the last miss.
    pub combo: u32,
    pub max_combo: u32,
    pub hit_count: u32,
    pub miss_count: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful press. Combo increments first; the resulting
    /// combo's multiplier scales the base score. Returns the score delta.
    pub fn add_hit(&mut self, base_score: u32) -> u64 {
        self.combo += 1;
        self.max_combo = self.max_combo.max(self.combo);
        self.hit_count += 1;

        let delta = u64::from(base_score) * u64::from(multiplier(self.combo));
        self.score += delta;
        delta
    }

    /// Record a miss (expired note or empty press). Resets combo to zero.
    pub fn add_miss(&mut self) {
        self.combo = 0;
        self.miss_count += 1;
    }

    pub fn multiplier(&self) -> u32 {
        multiplier(self.combo)
    }

    pub fn streak_active(&self) -> bool {
        streak_active(self.combo)
    }

    /// Hit ratio as a percentage; 100 when nothing has been judged yet.
    pub fn accuracy(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            return 100.0;
        }
        f64::from(self.hit_count) / f64::from(total) * 100.0
    }
}
