//! The scrollbar avatar: a rocket riding a fixed vertical track beside the
//! page, its position slaved to scroll progress and draggable to scroll.

use crate::ease::lerp;

#[derive(Clone, Copy, Debug)]
pub struct TrackParams {
    /// Full world-space height of the visible track.
    pub height: f32,
    /// Padding kept clear at each end of the track.
    pub padding: f32,
    /// World units of avatar travel per dragged pixel.
    pub drag_scale: f32,
    /// Idle twirl rate, rad/s. Only applied while the page is at rest.
    pub idle_spin: f32,
    /// Banking tilt range across the full travel, radians.
    pub tilt: f32,
    /// Peak nose-down pitch of the grab flourish, radians.
    pub grab_pitch: f32,
    /// Seconds for each half of the grab flourish (down, then back).
    pub grab_pitch_time: f32,
}

impl Default for TrackParams {
    fn default() -> Self {
        Self {
            height: 18.0,
            padding: 3.5,
            drag_scale: 0.05,
            idle_spin: 0.5,
            tilt: 0.2,
            grab_pitch: -0.2,
            grab_pitch_time: 0.15,
        }
    }
}

/// Transform the presentation layer applies to the avatar each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvatarPose {
    pub y: f32,
    pub tilt: f32,
    pub spin: f32,
    pub pitch: f32,
}

pub struct ScrollAvatar {
    params: TrackParams,
    spin: f32,
    dragging: bool,
    grab_elapsed: Option<f32>,
}

impl ScrollAvatar {
    pub fn new(params: TrackParams) -> Self {
        Self {
            params,
            spin: 0.0,
            dragging: false,
            grab_elapsed: None,
        }
    }

    pub fn params(&self) -> TrackParams {
        self.params
    }

    /// Usable travel distance between the track paddings.
    pub fn travel(&self) -> f32 {
        self.params.height - 2.0 * self.params.padding
    }

    /// Top of the travel range (progress 0).
    pub fn start_y(&self) -> f32 {
        self.travel() / 2.0
    }

    /// Bottom of the travel range (progress 1).
    pub fn end_y(&self) -> f32 {
        -self.travel() / 2.0
    }

    pub fn y_for_progress(&self, progress: f32) -> f32 {
        lerp(self.start_y(), self.end_y(), progress.clamp(0.0, 1.0))
    }

    /// Scroll units one dragged pixel is worth, for the given scrollable
    /// range. Dragging the avatar the full travel sweeps the whole page.
    pub fn scroll_per_pixel(&self, max_position: f32) -> f32 {
        self.params.drag_scale / self.travel() * max_position.max(1.0)
    }

    /// Marks the drag and kicks off a brief nose-down flourish so the grab
    /// reads visually. Re-grabbing restarts the flourish.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.grab_elapsed = Some(0.0);
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Advance the idle twirl and the grab flourish. The avatar only twirls
    /// while the page is at rest; scrolling or dragging freezes it so the
    /// banking tilt reads. The flourish runs to completion once started.
    pub fn tick(&mut self, dt: f32, scrolling: bool) {
        if let Some(t) = &mut self.grab_elapsed {
            *t += dt;
            if *t >= 2.0 * self.params.grab_pitch_time {
                self.grab_elapsed = None;
            }
        }
        if !scrolling && !self.dragging {
            self.spin += dt * self.params.idle_spin;
        }
    }

    /// Grab-flourish pitch: ramps to the peak over the first half-time and
    /// back over the second, zero while no flourish is in flight.
    fn grab_pitch(&self) -> f32 {
        match self.grab_elapsed {
            Some(t) => {
                let half = self.params.grab_pitch_time;
                let fraction = if t < half {
                    t / half
                } else {
                    (2.0 * half - t) / half
                };
                self.params.grab_pitch * fraction.clamp(0.0, 1.0)
            }
            None => 0.0,
        }
    }

    pub fn pose(&self, progress: f32) -> AvatarPose {
        AvatarPose {
            y: self.y_for_progress(progress),
            tilt: (progress.clamp(0.0, 1.0) - 0.5) * self.params.tilt,
            spin: self.spin,
            pitch: self.grab_pitch(),
        }
    }
}
