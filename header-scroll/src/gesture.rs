use crate::GesturePhase;

/// Distance the content's top edge must sit below its rest position to count as a pull.
pub const REFRESH_THRESHOLD: f32 = 20.0;

/// Where a snap settles for the current raw offset.
///
/// Below half of `extra_space` the header expands fully (`0.0`); otherwise it collapses fully
/// without ever scrolling back from a position that is already past full collapse.
pub fn snap_target(raw_offset: f32, extra_space: f32) -> f32 {
    if raw_offset < extra_space / 2.0 {
        0.0
    } else {
        extra_space.max(raw_offset)
    }
}

/// What the engine should do once a drag ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DragEndAction {
    Refresh,
    Snap(f32),
    Settle,
}

/// Refresh / snap state. Holds no options; the engine passes in what each transition needs.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct GestureMachine {
    phase: GesturePhase,
    is_loading: bool,
    spinner_visible: bool,
    content_top: f32,
}

impl GestureMachine {
    pub(crate) fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    pub(crate) fn spinner_visible(&self) -> bool {
        self.spinner_visible
    }

    pub(crate) fn content_top(&self) -> f32 {
        self.content_top
    }

    pub(crate) fn drag_begin(&mut self) {
        self.phase = GesturePhase::Dragging;
    }

    /// Records the content frame's top edge and raises the spinner once past the threshold.
    ///
    /// Reports that arrive while a snap is settling are programmatic motion and leave the spinner
    /// alone. The spinner is only lowered by `drag_end`.
    pub(crate) fn content_frame(&mut self, top_edge: f32) {
        self.content_top = top_edge;
        if self.phase != GesturePhase::SnappingBack && top_edge > REFRESH_THRESHOLD {
            self.spinner_visible = true;
        }
    }

    /// Ends a drag. The content frame is consumed: the next drag needs a fresh report.
    pub(crate) fn drag_end(
        &mut self,
        raw_offset: f32,
        has_refresh: bool,
        allows_snap: bool,
        extra_space: f32,
    ) -> DragEndAction {
        self.spinner_visible = false;
        let pulled = self.content_top > REFRESH_THRESHOLD;
        self.content_top = 0.0;

        if has_refresh && pulled && !self.is_loading {
            self.is_loading = true;
            self.phase = GesturePhase::RefreshTriggered;
            return DragEndAction::Refresh;
        }

        if allows_snap {
            self.phase = GesturePhase::SnappingBack;
            return DragEndAction::Snap(snap_target(raw_offset, extra_space));
        }

        self.phase = self.resting_phase();
        DragEndAction::Settle
    }

    /// Returns `true` when the flag actually changed.
    pub(crate) fn set_loading(&mut self, is_loading: bool) -> bool {
        if self.is_loading == is_loading {
            return false;
        }
        self.is_loading = is_loading;
        match (is_loading, self.phase) {
            (false, GesturePhase::RefreshTriggered) => self.phase = GesturePhase::Idle,
            (true, GesturePhase::Idle) => self.phase = GesturePhase::RefreshTriggered,
            _ => {}
        }
        true
    }

    /// Ends a snap. An open refresh session resumes as `RefreshTriggered`.
    pub(crate) fn finish_snap(&mut self) {
        if self.phase == GesturePhase::SnappingBack {
            self.phase = self.resting_phase();
        }
    }

    fn resting_phase(&self) -> GesturePhase {
        if self.is_loading {
            GesturePhase::RefreshTriggered
        } else {
            GesturePhase::Idle
        }
    }
}
