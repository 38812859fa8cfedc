/// The host scroll view, as seen by the [`crate::Controller`].
///
/// Offsets are raw host offsets: positive when the content is scrolled up past its top,
/// negative when it is pulled down.
pub trait ScrollHost {
    /// Current offset, or `None` when no scroll view is attached yet.
    fn current_offset(&self) -> Option<f32>;

    /// Moves the scroll view, optionally animated.
    fn set_offset(&mut self, offset: f32, animated: bool);

    /// Whether a host-side animation started by `set_offset` is still running.
    fn is_animating(&self) -> bool {
        false
    }

    /// Stops a running host-side animation (e.g. when the user grabs the content).
    fn cancel_animation(&mut self) {}

    /// Advances host-side animation.
    ///
    /// Returns the new offset when the host moved on its own since the last tick. Hosts that
    /// report movement through [`ScrollListener::on_scroll`] can keep the default.
    fn tick(&mut self, _now_ms: u64) -> Option<f32> {
        None
    }
}

/// The two notifications a host scroll view delivers.
pub trait ScrollListener {
    fn on_scroll(&mut self, raw_offset: f32);
    fn on_drag_end(&mut self);
}
