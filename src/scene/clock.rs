use crate::{
    foundation::core::{Fps, FrameIndex},
    foundation::error::{MorphError, MorphResult},
};

/// Turns a transition duration into per-frame progress values.
///
/// The first frame samples progress `0` and the last exactly `1`, so a host that renders
/// every frame always ends on the committed target. A zero duration yields a single
/// committed frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionClock {
    fps: Fps,
    frames: u64,
}

impl TransitionClock {
    pub fn new(duration_secs: f64, fps: Fps) -> MorphResult<Self> {
        if !duration_secs.is_finite() || duration_secs < 0.0 {
            return Err(MorphError::validation(
                "clock duration must be finite and >= 0",
            ));
        }
        let fps = Fps::new(fps.num, fps.den)?;
        Ok(Self {
            fps,
            frames: fps.secs_to_frames_ceil(duration_secs).max(1),
        })
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Number of frames to render, at least one.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Progress at `frame`; frames past the end stay at `1`.
    pub fn progress_at(&self, frame: FrameIndex) -> f64 {
        if self.frames <= 1 {
            return 1.0;
        }
        let last = self.frames - 1;
        if frame.0 >= last {
            return 1.0;
        }
        frame.0 as f64 / last as f64
    }

    /// Wall-clock offset of `frame` from the start of the transition.
    pub fn secs_at(&self, frame: FrameIndex) -> f64 {
        self.fps.frames_to_secs(frame.0)
    }

    pub fn progress_values(self) -> impl Iterator<Item = (FrameIndex, f64)> {
        (0..self.frames).map(move |i| {
            let frame = FrameIndex(i);
            (frame, self.progress_at(frame))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/clock.rs"]
mod tests;
