// Frame-sequence animation with fixed switch interval

use std::rc::Rc;

use crate::engine::assets::{FrameRegion, FrameSheet, SheetError, TextureHandle};

/// Default time each frame stays on screen, in seconds
pub const DEFAULT_SWITCH_INTERVAL: f32 = 0.1;

/// Leftover time within this fraction of an interval counts as a full one.
/// Absorbs the rounding of decimal durations like 0.7 = 7 * 0.1 in f32.
const SWITCH_TOLERANCE: f64 = 1e-4;

/// Animation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    #[error("Animation has no frames")]
    EmptyAnimation,

    #[error("Unknown animation handle: {0}")]
    UnknownAnimation(usize),

    #[error(transparent)]
    Sheet(#[from] SheetError),
}

/// Reference to one frame of a shared spritesheet
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRef {
    sheet: Rc<FrameSheet>,
    index: u32,
    region: FrameRegion,
}

impl FrameRef {
    /// Reference frame `index` of `sheet`, validated against the sheet bounds
    pub fn new(sheet: &Rc<FrameSheet>, index: u32) -> Result<Self, SheetError> {
        let region = sheet.frame_region(index)?;
        Ok(Self {
            sheet: Rc::clone(sheet),
            index,
            region,
        })
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn region(&self) -> FrameRegion {
        self.region
    }

    pub fn texture(&self) -> TextureHandle {
        self.sheet.texture()
    }
}

/// An ordered list of frames played back at a fixed rate, looping forever
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<FrameRef>,
    /// Duration of each frame in seconds
    switch_interval: f32,
    /// Current frame index
    current_frame: usize,
    /// Time accumulated towards the next switch, always below one interval
    accumulated_time: f64,
}

impl Default for Animation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation {
    /// Create an empty animation with the default switch interval
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_SWITCH_INTERVAL)
    }

    /// Create an empty animation that switches frames every `switch_interval` seconds
    ///
    /// Non-positive or non-finite intervals fall back to the default.
    pub fn with_interval(switch_interval: f32) -> Self {
        let switch_interval = if switch_interval.is_finite() && switch_interval > 0.0 {
            switch_interval
        } else {
            log::warn!(
                "Invalid switch interval {}, using {}",
                switch_interval,
                DEFAULT_SWITCH_INTERVAL
            );
            DEFAULT_SWITCH_INTERVAL
        };

        Self {
            frames: Vec::new(),
            switch_interval,
            current_frame: 0,
            accumulated_time: 0.0,
        }
    }

    /// Build an animation from a list of sheet indices
    pub fn from_indices(
        sheet: &Rc<FrameSheet>,
        indices: &[u32],
        switch_interval: f32,
    ) -> Result<Self, AnimationError> {
        let mut animation = Self::with_interval(switch_interval);
        for &index in indices {
            animation.add_frame(sheet, index)?;
        }
        Ok(animation)
    }

    /// Append frame `index` of `sheet`
    pub fn add_frame(&mut self, sheet: &Rc<FrameSheet>, index: u32) -> Result<(), AnimationError> {
        self.frames.push(FrameRef::new(sheet, index)?);
        Ok(())
    }

    /// Advance playback by `dt` seconds and return the frame to display.
    ///
    /// Every full interval contained in the accumulated time moves the cursor
    /// by one, so a long tick skips ahead instead of stalling. Negative or
    /// non-finite `dt` does nothing.
    pub fn advance(&mut self, dt: f32) -> Result<&FrameRef, AnimationError> {
        if self.frames.is_empty() {
            return Err(AnimationError::EmptyAnimation);
        }

        if dt.is_finite() && dt > 0.0 {
            self.accumulated_time += f64::from(dt);
        } else if dt != 0.0 {
            log::warn!("Ignoring frame time {}", dt);
        }

        // fmod stays exact however large the backlog is
        let interval = f64::from(self.switch_interval);
        let mut remainder = self.accumulated_time % interval;
        let mut steps = ((self.accumulated_time - remainder) / interval).round();
        if remainder >= interval * (1.0 - SWITCH_TOLERANCE) {
            remainder = 0.0;
            steps += 1.0;
        }
        self.accumulated_time = remainder;

        if steps >= 1.0 {
            // `as` saturates, and only the position within one cycle matters
            let len = self.frames.len() as u64;
            let skip = (steps as u64 % len) as usize;
            self.current_frame = (self.current_frame + skip) % self.frames.len();
        }

        Ok(&self.frames[self.current_frame])
    }

    /// Frame under the cursor
    pub fn current(&self) -> Result<&FrameRef, AnimationError> {
        self.frames
            .get(self.current_frame)
            .ok_or(AnimationError::EmptyAnimation)
    }

    /// Rewind to the first frame
    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.accumulated_time = 0.0;
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn accumulated_time(&self) -> f32 {
        self.accumulated_time as f32
    }

    pub fn switch_interval(&self) -> f32 {
        self.switch_interval
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frames.len() as f32 * self.switch_interval
    }
}

/// Handle to an animation stored in an [`AnimationLibrary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(usize);

/// Owns every animation clip; entities refer to clips by handle so a clip
/// keeps its playback position while it is swapped out.
#[derive(Debug, Default)]
pub struct AnimationLibrary {
    animations: Vec<Animation>,
}

impl AnimationLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a clip and return its handle
    pub fn insert(&mut self, animation: Animation) -> AnimationHandle {
        self.animations.push(animation);
        AnimationHandle(self.animations.len() - 1)
    }

    pub fn get(&self, handle: AnimationHandle) -> Result<&Animation, AnimationError> {
        self.animations
            .get(handle.0)
            .ok_or(AnimationError::UnknownAnimation(handle.0))
    }

    pub fn get_mut(&mut self, handle: AnimationHandle) -> Result<&mut Animation, AnimationError> {
        self.animations
            .get_mut(handle.0)
            .ok_or(AnimationError::UnknownAnimation(handle.0))
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}
