/// Lifecycle of a single scroll gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    /// A refresh session is in flight (`is_loading == true`).
    RefreshTriggered,
    /// A snap command was issued and the host is settling on the target offset.
    SnappingBack,
}

/// Why the engine asked the host to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandReason {
    Snap,
    ScrollToTop,
}

/// A "set position" request for the host scroll view.
///
/// `offset` is in raw host units (positive = scrolled up past the top of the content).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub offset: f32,
    pub animated: bool,
    pub reason: CommandReason,
}

/// The three values observers can bind to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Published {
    /// `0.0` fully expanded, `1.0` fully collapsed.
    pub collapse_progress: f32,
    /// Scroll offset in header convention (positive = pulled down).
    pub scroll_offset: f32,
    pub pull_to_refresh_scale: f32,
}

/// Layout values for the header, derived from a raw offset and the options.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderGeometry {
    /// Scroll offset in header convention (positive = pulled down).
    pub scroll_offset: f32,
    pub header_height: f32,
    /// Vertical translation applied to the header layer.
    pub header_offset: f32,
    pub header_scale: f32,
    pub collapse_progress: f32,
}
