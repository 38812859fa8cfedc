use header_scroll::{
    ConfigError, GesturePhase, HeaderScroll, HeaderScrollOptions, ScrollCommand,
};

use crate::{ScrollHost, ScrollListener};

/// A framework-neutral controller that wires a [`ScrollHost`] to a [`HeaderScroll`] engine.
///
/// This type does not hold any UI objects beyond the host handle. Adapters drive it by calling:
/// - `on_scroll` / `on_drag_begin` / `on_drag_end` when the host delivers gesture notifications
/// - `tick(now_ms)` once per frame, after the host finished processing its events
///
/// `tick` is where the deferred recompute happens: scroll notifications only record the offset,
/// and the published observables update on the next tick.
#[derive(Clone, Debug)]
pub struct Controller<H> {
    header: HeaderScroll,
    host: H,
}

/// Distance the content's top edge sits below its rest position for a raw offset.
pub fn pull_distance(raw_offset: f32) -> f32 {
    (-raw_offset).max(0.0)
}

impl<H: ScrollHost> Controller<H> {
    pub fn new(options: HeaderScrollOptions, host: H) -> Result<Self, ConfigError> {
        Ok(Self::from_header(HeaderScroll::new(options)?, host))
    }

    pub fn from_header(mut header: HeaderScroll, host: H) -> Self {
        if let Some(offset) = host.current_offset() {
            header.on_scroll(offset);
        }
        Self { header, host }
    }

    pub fn header(&self) -> &HeaderScroll {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut HeaderScroll {
        &mut self.header
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_parts(self) -> (HeaderScroll, H) {
        (self.header, self.host)
    }

    /// Reads the host's current offset. `None` when no scroll view is attached.
    pub fn current_offset(&self) -> Option<f32> {
        self.host.current_offset()
    }

    /// Call this when the host reports a scroll offset change.
    ///
    /// The content frame's top edge is derived from the offset; hosts that measure the frame
    /// themselves can follow up with [`Controller::on_content_frame`].
    pub fn on_scroll(&mut self, raw_offset: f32) {
        self.header.on_scroll(raw_offset);
        self.header.on_content_frame(pull_distance(raw_offset));
    }

    /// Like `on_scroll`, with the host's dragging flag. A new drag cancels host animations.
    pub fn on_scroll_event(&mut self, raw_offset: f32, is_dragging: bool) {
        if is_dragging && !self.header.is_dragging() {
            self.on_drag_begin();
        }
        self.on_scroll(raw_offset);
    }

    pub fn on_drag_begin(&mut self) {
        self.host.cancel_animation();
        self.header.on_drag_begin();
    }

    pub fn on_content_frame(&mut self, top_edge: f32) {
        self.header.on_content_frame(top_edge);
    }

    /// Ends the drag and forwards a snap command to the host, if any.
    pub fn on_drag_end(&mut self) {
        if let Some(command) = self.header.on_drag_end() {
            self.apply(command);
        }
    }

    pub fn set_is_loading(&mut self, is_loading: bool) {
        self.header.set_is_loading(is_loading);
    }

    /// One-shot scroll-to-top. Returns `true` when a command reached the host.
    pub fn set_scroll_to_top(&mut self, scroll_to_top: bool) -> bool {
        match self.header.set_scroll_to_top(scroll_to_top) {
            Some(command) => self.apply(command),
            None => false,
        }
    }

    /// Advances the controller.
    ///
    /// - Pulls host-driven movement (animations) into the engine.
    /// - Completes a snap once the host stopped animating.
    /// - Flushes the deferred recompute.
    ///
    /// Returns `true` when the published observables changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if let Some(offset) = self.host.tick(now_ms) {
            self.on_scroll(offset);
        }
        if self.header.phase() == GesturePhase::SnappingBack && !self.host.is_animating() {
            self.header.finish_snap();
        }
        self.header.flush()
    }

    /// Sends a command to the host. Skipped when the host has no scroll view attached.
    pub fn apply(&mut self, command: ScrollCommand) -> bool {
        if self.host.current_offset().is_none() {
            awarn!(
                offset = command.offset,
                reason = ?command.reason,
                "no scroll view attached; dropping command"
            );
            self.header.finish_snap();
            return false;
        }
        atrace!(
            offset = command.offset,
            animated = command.animated,
            reason = ?command.reason,
            "Controller::apply"
        );
        self.host.set_offset(command.offset, command.animated);
        true
    }
}

impl<H: ScrollHost> ScrollListener for Controller<H> {
    fn on_scroll(&mut self, raw_offset: f32) {
        Controller::on_scroll(self, raw_offset);
    }

    fn on_drag_end(&mut self) {
        Controller::on_drag_end(self);
    }
}
