//=========================================================================
// Clock
//=========================================================================
//
// Normalized per-frame time tracking.
//
// Timestamps are monotonic milliseconds supplied by the host (the clock
// never reads the system time itself). Each update derives:
//
//   unscaled  = t - last                       (ms)
//   delta     = unscaled * DELTA_SCALE         (≈ 1.0 per frame at 60 Hz)
//   clamped   = min(delta, MAX_DELTA)          (physics/animation step)
//
// FPS is sampled every FPS_SAMPLE_INTERVAL frames from the current delta;
// between samples it is intentionally stale.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Constants ===========================================================

/// Scale from milliseconds to reference frames (16.67 ms × 0.06 ≈ 1.0).
pub const DELTA_SCALE: f64 = 0.06;

/// Upper bound on the clamped delta, in reference frames.
pub const MAX_DELTA: f64 = 2.0;

/// FPS is recomputed when `frame_count % FPS_SAMPLE_INTERVAL == 0`.
pub const FPS_SAMPLE_INTERVAL: u64 = 20;

//=== Clock ===============================================================

/// Frame clock fed by host timestamps.
///
/// `start` only moves the reference timestamp, so a paused game can resume
/// without resetting the frame counter or accumulated active time.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    last_timestamp: f64,
    unscaled_delta: f64,
    delta: f64,
    clamped_delta: f64,
    active_time: f64,
    frame_count: u64,
    fps: u32,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Advancing --------------------------------------------------------

    /// Sets the reference timestamp without touching counters.
    pub fn start(&mut self, timestamp: f64) {
        self.last_timestamp = timestamp;
    }

    /// Advances one frame to `timestamp`.
    pub fn update(&mut self, timestamp: f64) {
        self.unscaled_delta = timestamp - self.last_timestamp;
        self.delta = self.unscaled_delta * DELTA_SCALE;
        self.clamped_delta = self.delta.min(MAX_DELTA);
        self.last_timestamp = timestamp;
        self.active_time += self.unscaled_delta;
        self.frame_count += 1;

        if self.frame_count % FPS_SAMPLE_INTERVAL == 0 {
            self.fps = (self.delta * 60.0).floor() as u32;
            trace!(target: "runner", "frame {}: fps sample {}", self.frame_count, self.fps);
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Timestamp passed to the most recent `start`/`update`.
    pub fn time(&self) -> f64 {
        self.last_timestamp
    }

    /// Raw milliseconds between the last two updates.
    pub fn unscaled_delta(&self) -> f64 {
        self.unscaled_delta
    }

    /// Normalized delta (1.0 ≈ one frame at 60 Hz).
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Normalized delta capped at [`MAX_DELTA`]; feed this to physics.
    pub fn clamped_delta(&self) -> f64 {
        self.clamped_delta
    }

    /// Sum of all unscaled deltas, in milliseconds.
    pub fn active_time(&self) -> f64 {
        self.active_time
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Last sampled FPS estimate (0 until the first sample).
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
