use std::time::{Duration, Instant};

/// Wall-clock bookkeeping for the HUD: how long the current run has been
/// going and how many runs this session has seen.
pub struct SessionMetrics {
    start_time: Instant,
    elapsed: Duration,
    runs_played: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed: Duration::ZERO,
            runs_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed = self.start_time.elapsed();
    }

    pub fn on_run_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_run_over(&mut self) {
        self.runs_played += 1;
    }

    pub fn runs_played(&self) -> u32 {
        self.runs_played
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
