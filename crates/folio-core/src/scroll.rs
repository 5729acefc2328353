//! Normalizes heterogeneous scroll input (container offset, pointer drags,
//! wheel paging) into a single progress value in [0, 1] plus an activity flag
//! with debounce hysteresis.
//!
//! The debounce is a deadline stored on the signal and checked by
//! [`ScrollSignal::poll`] from the frame loop, so the core carries no
//! platform timer.

use crate::constants::{SCROLL_ACTIVITY_THRESHOLD, SCROLL_IDLE_DELAY};

/// Tunables for the scroll signal.
#[derive(Clone, Copy, Debug)]
pub struct ScrollParams {
    /// Minimum change of normalized progress that counts as movement.
    pub activity_threshold: f32,
    /// Seconds without movement before `is_active` falls back to false.
    pub idle_delay: f64,
}

impl Default for ScrollParams {
    fn default() -> Self {
        Self {
            activity_threshold: SCROLL_ACTIVITY_THRESHOLD,
            idle_delay: SCROLL_IDLE_DELAY,
        }
    }
}

/// Read-only view of the signal for consumers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub progress: f32,
    pub is_active: bool,
}

pub struct ScrollSignal {
    params: ScrollParams,
    progress: f32,
    last_progress: f32,
    is_active: bool,
    idle_deadline: Option<f64>,
}

impl ScrollSignal {
    pub fn new(params: ScrollParams) -> Self {
        Self {
            params,
            progress: 0.0,
            last_progress: 0.0,
            is_active: false,
            idle_deadline: None,
        }
    }

    /// Feed an absolute scroll offset. `max_position` is the scrollable range
    /// and is floored at 1 so a non-scrollable page never divides by zero.
    /// A movement beyond the threshold marks the signal active and replaces
    /// any pending idle deadline; there is at most one pending deadline.
    pub fn update(&mut self, raw_position: f32, max_position: f32, now: f64) -> ScrollState {
        let progress = (raw_position / max_position.max(1.0)).clamp(0.0, 1.0);
        if (progress - self.last_progress).abs() > self.params.activity_threshold {
            self.is_active = true;
            self.idle_deadline = Some(now + self.params.idle_delay);
        }
        self.last_progress = progress;
        self.progress = progress;
        self.state()
    }

    /// Resolve a pending idle deadline. Call once per frame; the falling edge
    /// of `is_active` happens here, never inside `update`.
    pub fn poll(&mut self, now: f64) -> ScrollState {
        if let Some(deadline) = self.idle_deadline {
            if now >= deadline {
                self.is_active = false;
                self.idle_deadline = None;
            }
        }
        self.state()
    }

    pub fn state(&self) -> ScrollState {
        ScrollState {
            progress: self.progress,
            is_active: self.is_active,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Convert a pointer-drag delta into a new raw scroll offset, clamped to the
/// scrollable range. `pixels_per_unit` is how many scroll units one dragged
/// pixel is worth for the active drag surface.
#[inline]
pub fn apply_drag(
    current_raw: f32,
    delta_pixels: f32,
    pixels_per_unit: f32,
    max_position: f32,
) -> f32 {
    (current_raw + delta_pixels * pixels_per_unit).clamp(0.0, max_position.max(1.0))
}

/// Target offset for one wheel tick: exactly one viewport height in the
/// direction of the wheel delta. The host applies its own smooth scrolling
/// and clamps at the document end.
#[inline]
pub fn page_target(current: f32, viewport_height: f32, delta_sign: f32) -> f32 {
    (current + delta_sign.signum() * viewport_height).max(0.0)
}
