#[derive(Clone, Copy, Debug, Default)]
pub struct PlannerMetrics {
    pub last_recompute_duration_ms: f64,
    pub last_snapshot_duration_ms: f64,
    pub recompute_count: u64,
}

impl PlannerMetrics {
    pub fn update_recompute(&mut self, duration: f64) {
        self.recompute_count = self.recompute_count.wrapping_add(1);
        if duration >= 0.0 {
            self.last_recompute_duration_ms = duration;
        }
    }

    pub fn update_snapshot(&mut self, duration: f64) {
        if duration >= 0.0 {
            self.last_snapshot_duration_ms = duration;
        }
    }
}
