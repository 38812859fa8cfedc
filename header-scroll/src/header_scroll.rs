use core::cell::Cell;

use crate::geometry;
use crate::gesture::{DragEndAction, GestureMachine};
use crate::{
    CommandReason, ConfigError, GesturePhase, HeaderGeometry, HeaderScrollOptions, HeaderState,
    Published, ScrollCommand,
};

/// A headless scaling-header engine.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter feeds it host notifications (scroll offset, content frame, drag begin/end).
/// - It answers with geometry for the view layer and with [`ScrollCommand`]s for the host.
///
/// Scroll notifications never publish synchronously. `on_scroll` records the offset and marks a
/// recompute pending; the adapter calls [`HeaderScroll::flush`] on its next scheduling tick so
/// observers never mutate layout while the host is still delivering the scroll event.
///
/// For a host-facing controller, see the `header-scroll-adapter` crate.
#[derive(Clone, Debug)]
pub struct HeaderScroll {
    options: HeaderScrollOptions,
    raw_offset: f32,
    published: Published,
    pending: bool,
    gesture: GestureMachine,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl HeaderScroll {
    /// Creates an engine at rest (`raw_offset = 0`).
    ///
    /// Fails when the options break the height contract (see [`HeaderScrollOptions::validate`]).
    pub fn new(options: HeaderScrollOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        hdebug!(
            min_height = options.min_height,
            max_height = options.max_height,
            allows_collapse = options.allows_collapse,
            allows_growth = options.allows_growth,
            allows_snap = options.allows_snap,
            "HeaderScroll::new"
        );
        let published = Published::compute(0.0, &options);
        Ok(Self {
            options,
            raw_offset: 0.0,
            published,
            pending: false,
            gesture: GestureMachine::default(),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        })
    }

    pub fn options(&self) -> &HeaderScrollOptions {
        &self.options
    }

    /// Replaces the options. On error the engine keeps its previous options.
    pub fn set_options(&mut self, options: HeaderScrollOptions) -> Result<(), ConfigError> {
        options.validate()?;
        self.options = options;
        htrace!(
            min_height = self.options.min_height,
            max_height = self.options.max_height,
            "HeaderScroll::set_options"
        );
        self.pending = true;
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut HeaderScrollOptions),
    ) -> Result<(), ConfigError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn raw_offset(&self) -> f32 {
        self.raw_offset
    }

    /// Scroll offset in header convention (positive = pulled down).
    pub fn scroll_offset(&self) -> f32 {
        geometry::scroll_offset(self.raw_offset)
    }

    /// Geometry for the current raw offset, computed on demand.
    pub fn geometry(&self) -> HeaderGeometry {
        HeaderGeometry::compute(self.raw_offset, &self.options)
    }

    pub fn header_layer_offset(&self, layout_origin: f32) -> f32 {
        geometry::header_layer_offset(self.scroll_offset(), layout_origin)
    }

    /// The values as of the last flush.
    pub fn published(&self) -> Published {
        self.published
    }

    pub fn collapse_progress(&self) -> f32 {
        self.published.collapse_progress
    }

    pub fn pull_to_refresh_scale(&self) -> f32 {
        self.published.pull_to_refresh_scale
    }

    pub fn has_pending_update(&self) -> bool {
        self.pending
    }

    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn is_loading(&self) -> bool {
        self.gesture.is_loading()
    }

    pub fn is_spinning_indicator_visible(&self) -> bool {
        self.gesture.spinner_visible()
    }

    /// Last reported distance of the content's top edge below its rest position.
    ///
    /// Reset to `0.0` by [`HeaderScroll::on_drag_end`].
    pub fn content_top(&self) -> f32 {
        self.gesture.content_top()
    }

    /// Records a host scroll-position change. Publishing waits for [`HeaderScroll::flush`].
    pub fn on_scroll(&mut self, raw_offset: f32) {
        if !raw_offset.is_finite() {
            hwarn!(raw_offset, "HeaderScroll::on_scroll: ignoring non-finite offset");
            return;
        }
        if self.raw_offset == raw_offset {
            return;
        }
        self.raw_offset = raw_offset;
        self.pending = true;
    }

    /// Like `on_scroll`, but also infers drag-begin from the host's dragging flag.
    pub fn on_scroll_event(&mut self, raw_offset: f32, is_dragging: bool) {
        if is_dragging && !self.gesture.is_dragging() {
            self.on_drag_begin();
        }
        self.on_scroll(raw_offset);
    }

    pub fn on_drag_begin(&mut self) {
        htrace!(raw_offset = self.raw_offset, "HeaderScroll::on_drag_begin");
        self.gesture.drag_begin();
    }

    /// Reports how far the content's top edge sits below its rest position.
    pub fn on_content_frame(&mut self, top_edge: f32) {
        if !top_edge.is_finite() {
            hwarn!(top_edge, "HeaderScroll::on_content_frame: ignoring non-finite edge");
            return;
        }
        self.gesture.content_frame(top_edge);
    }

    /// Ends the current drag.
    ///
    /// Triggers a refresh (calling `on_refresh` once) when the content was pulled past
    /// [`crate::REFRESH_THRESHOLD`] and no refresh is in flight. Otherwise returns an animated
    /// snap command when snapping is enabled, also during an open refresh session.
    pub fn on_drag_end(&mut self) -> Option<ScrollCommand> {
        let action = self.gesture.drag_end(
            self.raw_offset,
            self.options.has_refresh(),
            self.options.allows_snap,
            self.options.extra_space(),
        );
        match action {
            DragEndAction::Refresh => {
                hdebug!(raw_offset = self.raw_offset, "refresh triggered");
                if let Some(cb) = &self.options.on_refresh {
                    cb();
                }
                None
            }
            DragEndAction::Snap(offset) => {
                hdebug!(from = self.raw_offset, to = offset, "snap");
                Some(ScrollCommand {
                    offset,
                    animated: true,
                    reason: CommandReason::Snap,
                })
            }
            DragEndAction::Settle => {
                htrace!(
                    is_loading = self.gesture.is_loading(),
                    "drag ended without refresh or snap"
                );
                None
            }
        }
    }

    /// The host finished settling a snap.
    pub fn finish_snap(&mut self) {
        self.gesture.finish_snap();
    }

    /// Sets the loading flag without calling `on_refresh`.
    ///
    /// Setting `false` ends the refresh session and re-arms pull-to-refresh.
    pub fn set_is_loading(&mut self, is_loading: bool) {
        if self.gesture.set_loading(is_loading) {
            hdebug!(is_loading, "HeaderScroll::set_is_loading");
        }
    }

    /// Edge-triggered scroll-to-top.
    ///
    /// `true` yields exactly one animated command to `max_height - min_height`; nothing is
    /// latched, so the trigger is back to `false` once this returns. `false` yields nothing.
    pub fn set_scroll_to_top(&mut self, scroll_to_top: bool) -> Option<ScrollCommand> {
        if !scroll_to_top {
            return None;
        }
        let offset = self.options.extra_space();
        hdebug!(offset, "scroll to top");
        Some(ScrollCommand {
            offset,
            animated: true,
            reason: CommandReason::ScrollToTop,
        })
    }

    /// Recomputes the published values if a scroll or options change is pending.
    ///
    /// Returns `true` when the published values changed (and observers were notified).
    pub fn flush(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;

        let next = Published::compute(self.raw_offset, &self.options);
        htrace!(
            raw_offset = self.raw_offset,
            collapse_progress = next.collapse_progress,
            pull_to_refresh_scale = next.pull_to_refresh_scale,
            "HeaderScroll::flush"
        );
        if next == self.published {
            return false;
        }
        self.published = next;
        self.notify();
        true
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn state(&self) -> HeaderState {
        HeaderState {
            raw_offset: self.raw_offset,
            is_loading: self.gesture.is_loading(),
        }
    }

    /// Restores a snapshot. Callbacks are not fired; the next flush publishes the new geometry.
    pub fn restore_state(&mut self, state: HeaderState) {
        self.on_scroll(state.raw_offset);
        self.gesture.set_loading(state.is_loading);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(&self.published);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }
}
