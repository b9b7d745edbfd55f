pub mod ring;
pub mod timer;

use self::ring::RingBuffer;
use self::timer::SystemTimers;

/// Number of frame times to keep for the rolling stats.
const FRAME_HISTORY_LEN: usize = 120;

/// Seconds between periodic log lines.
const LOG_INTERVAL: f64 = 5.0;

/// Rolling frame timing, shown on the status line when `visible` and
/// logged every few seconds.
pub struct FrameStats {
    pub visible: bool,

    /// Rolling window of frame times (seconds).
    pub frame_times: RingBuffer<f64>,

    pub fps: f64,
    pub frame_time_avg: f64,
    pub frame_time_min: f64,
    pub frame_time_max: f64,

    pub frame_count: u64,

    // Accumulators for the periodic log.
    log_timer: f64,
    log_frame_count: u64,
    log_frame_sum: f64,
    log_frame_min: f64,
    log_frame_max: f64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            visible: false,
            frame_times: RingBuffer::new(FRAME_HISTORY_LEN),
            fps: 0.0,
            frame_time_avg: 0.0,
            frame_time_min: 0.0,
            frame_time_max: 0.0,
            frame_count: 0,
            log_timer: 0.0,
            log_frame_count: 0,
            log_frame_sum: 0.0,
            log_frame_min: f64::MAX,
            log_frame_max: 0.0,
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Record a frame time, update rolling stats, and periodically log.
    pub fn record_frame(&mut self, dt: f64, timers: &SystemTimers) {
        self.frame_count += 1;
        self.frame_times.push(dt);

        if !self.frame_times.is_empty() {
            let len = self.frame_times.len();
            let mut sum = 0.0;
            let mut min = f64::MAX;
            let mut max = 0.0f64;
            for &t in self.frame_times.iter() {
                sum += t;
                min = min.min(t);
                max = max.max(t);
            }
            self.frame_time_avg = sum / len as f64;
            self.frame_time_min = min;
            self.frame_time_max = max;
            self.fps = if self.frame_time_avg > 0.0 {
                1.0 / self.frame_time_avg
            } else {
                0.0
            };
        }

        self.log_frame_count += 1;
        self.log_frame_sum += dt;
        self.log_frame_min = self.log_frame_min.min(dt);
        self.log_frame_max = self.log_frame_max.max(dt);
        self.log_timer += dt;

        if self.log_timer >= LOG_INTERVAL {
            let avg_ms = (self.log_frame_sum / self.log_frame_count as f64) * 1000.0;
            let fps = self.log_frame_count as f64 / self.log_timer;
            log::info!(
                "FPS: {:.0} | avg: {:.2}ms | min: {:.2}ms | max: {:.2}ms | total frames: {}",
                fps,
                avg_ms,
                self.log_frame_min * 1000.0,
                self.log_frame_max * 1000.0,
                self.frame_count,
            );
            log::debug!("Tick systems: {} (total {:.1}us)", timers.summary(), timers.total_us());
            self.log_timer = 0.0;
            self.log_frame_count = 0;
            self.log_frame_sum = 0.0;
            self.log_frame_min = f64::MAX;
            self.log_frame_max = 0.0;
        }
    }

    /// Status line text.
    pub fn line(&self, timers: &SystemTimers) -> String {
        format!(
            "{:.0} fps  {:.1}/{:.1}/{:.1} ms  tick {:.0}us",
            self.fps,
            self.frame_time_min * 1000.0,
            self.frame_time_avg * 1000.0,
            self.frame_time_max * 1000.0,
            timers.total_us(),
        )
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}
