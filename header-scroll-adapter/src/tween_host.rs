use crate::{Easing, ScrollHost, Tween};

/// A headless [`ScrollHost`] that animates offsets with a [`Tween`].
///
/// Useful for terminal / immediate-mode UIs that own their scroll position, and for driving the
/// controller in tests. Call [`ScrollHost::tick`] each frame (the controller does this).
#[derive(Clone, Debug)]
pub struct TweenHost {
    offset: Option<f32>,
    reported: Option<f32>,
    tween: Option<Tween>,
    now_ms: u64,
    duration_ms: u64,
    easing: Easing,
}

impl Default for TweenHost {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl TweenHost {
    pub const DEFAULT_DURATION_MS: u64 = 250;

    pub fn new(offset: f32) -> Self {
        Self {
            offset: Some(offset),
            reported: Some(offset),
            tween: None,
            now_ms: 0,
            duration_ms: Self::DEFAULT_DURATION_MS,
            easing: Easing::SmoothStep,
        }
    }

    /// A host with no scroll view attached: commands are ignored until [`TweenHost::attach`].
    pub fn detached() -> Self {
        Self {
            offset: None,
            reported: None,
            ..Self::new(0.0)
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn attach(&mut self, offset: f32) {
        self.offset = Some(offset);
    }

    /// Moves the content as a user gesture would. Cancels any running tween.
    pub fn drag_to(&mut self, offset: f32) {
        self.tween = None;
        self.offset = Some(offset);
        self.reported = Some(offset);
    }

    pub fn tween(&self) -> Option<Tween> {
        self.tween
    }
}

impl ScrollHost for TweenHost {
    fn current_offset(&self) -> Option<f32> {
        self.offset
    }

    fn set_offset(&mut self, offset: f32, animated: bool) {
        let Some(from) = self.offset else {
            return;
        };
        if !animated {
            self.tween = None;
            self.offset = Some(offset);
            return;
        }
        match &mut self.tween {
            Some(tween) => tween.retarget(self.now_ms, offset, self.duration_ms),
            None => {
                self.tween = Some(Tween::new(
                    from,
                    offset,
                    self.now_ms,
                    self.duration_ms,
                    self.easing,
                ))
            }
        }
    }

    fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    fn cancel_animation(&mut self) {
        self.tween = None;
    }

    fn tick(&mut self, now_ms: u64) -> Option<f32> {
        self.now_ms = now_ms;
        if let Some(tween) = self.tween {
            self.offset = Some(tween.sample(now_ms));
            if tween.is_done(now_ms) {
                self.tween = None;
            }
        }
        if self.offset == self.reported {
            return None;
        }
        self.reported = self.offset;
        self.offset
    }
}
