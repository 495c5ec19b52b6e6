/// Frozen end-of-run statistics.
#[derive(Debug, Clone, Default)]
pub struct PlayResult {
    pub score: u64,
    pub max_combo: u32,
    pub hit_count: u32,
    pub miss_count: u32,
    pub fast_count: u32,
    pub slow_count: u32,
    pub total_notes: u32,
}

impl PlayResult {
    /// Hit ratio as a percentage; 100 for an empty run.
    pub fn accuracy(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            return 100.0;
        }
        f64::from(self.hit_count) / f64::from(total) * 100.0
    }

    pub fn rank(&self) -> &'static str {
        let acc = self.accuracy();
        if acc >= 100.0 {
            "MAX"
        } else if acc >= 95.0 {
            "AAA"
        } else if acc >= 90.0 {
            "AA"
        } else if acc >= 80.0 {
            "A"
        } else if acc >= 70.0 {
            "B"
        } else if acc >= 60.0 {
            "C"
        } else if acc >= 50.0 {
            "D"
        } else {
            "F"
        }
    }
}
