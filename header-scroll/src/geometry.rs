//! Pure header geometry.
//!
//! Every function here is a function of a scroll offset and the options only; nothing is cached.
//! Offsets use the header convention: `scroll_offset = -raw_offset`, so positive values mean the
//! content is pulled down past its top and negative values mean it is scrolled up.

use crate::{HeaderGeometry, HeaderScrollOptions, Published};

/// Damping applied to height-derived scale so growth does not pop at the threshold.
pub const GROWTH_SCALE_FACTOR: f32 = 0.9;

/// Converts a host offset (positive = scrolled up) to the header convention.
#[inline]
pub fn scroll_offset(raw_offset: f32) -> f32 {
    -raw_offset
}

/// Header height for a scroll offset.
///
/// Never below `min_height`. Only exceeds `max_height` while pulled down with growth enabled.
pub fn header_height(scroll_offset: f32, options: &HeaderScrollOptions) -> f32 {
    if !options.allows_collapse {
        return options.max_height;
    }
    let height = (options.max_height + scroll_offset).max(options.min_height);
    if options.allows_growth {
        height
    } else {
        height.min(options.max_height)
    }
}

/// Vertical translation of the header layer.
///
/// Continuous across all three ranges:
/// - past full collapse the header stays pinned (collapse) or slides out until only
///   `min_height` remains visible (no collapse);
/// - pulled down it tracks the pull 1:1 upwards so its top stays put;
/// - in between it follows the height change.
pub fn header_offset(scroll_offset: f32, options: &HeaderScrollOptions) -> f32 {
    let extra_space = options.extra_space();
    if scroll_offset < -extra_space {
        if options.allows_collapse {
            -scroll_offset
        } else {
            (options.min_height - options.max_height) - scroll_offset
        }
    } else if scroll_offset > 0.0 {
        -scroll_offset
    } else {
        options.max_height - header_height(scroll_offset, options)
    }
}

/// Scale for a header of `header_height`. `1.0` unless growth is enabled.
pub fn header_scale(header_height: f32, options: &HeaderScrollOptions) -> f32 {
    if !options.allows_growth {
        return 1.0;
    }
    growth_scale(header_height, options.max_height)
}

/// Scale of the pull-to-refresh area, independent of the growth flag.
pub fn pull_to_refresh_scale(scroll_offset: f32, options: &HeaderScrollOptions) -> f32 {
    let height = (options.max_height + scroll_offset).max(options.min_height);
    growth_scale(height, options.max_height)
}

fn growth_scale(height: f32, max_height: f32) -> f32 {
    if max_height <= 0.0 {
        return 1.0;
    }
    (height / max_height * GROWTH_SCALE_FACTOR).max(1.0)
}

/// `0.0` at `max_height`, `1.0` at `min_height`, clamped in between.
///
/// With `min_height == max_height` there is nothing to collapse, so progress is `0.0`.
pub fn collapse_progress(header_height: f32, options: &HeaderScrollOptions) -> f32 {
    let extra_space = options.extra_space();
    if extra_space <= 0.0 {
        return 0.0;
    }
    let expanded = ((header_height - options.min_height) / extra_space).clamp(0.0, 1.0);
    1.0 - expanded
}

/// Offset of the header layer relative to the content layer.
///
/// `layout_origin` is the enclosing layout's origin as measured by the host.
#[inline]
pub fn header_layer_offset(scroll_offset: f32, layout_origin: f32) -> f32 {
    scroll_offset - layout_origin
}

impl HeaderGeometry {
    pub fn compute(raw_offset: f32, options: &HeaderScrollOptions) -> Self {
        let scroll_offset = scroll_offset(raw_offset);
        let header_height = header_height(scroll_offset, options);
        Self {
            scroll_offset,
            header_height,
            header_offset: header_offset(scroll_offset, options),
            header_scale: header_scale(header_height, options),
            collapse_progress: collapse_progress(header_height, options),
        }
    }
}

impl Published {
    pub fn compute(raw_offset: f32, options: &HeaderScrollOptions) -> Self {
        let scroll_offset = scroll_offset(raw_offset);
        let header_height = header_height(scroll_offset, options);
        Self {
            collapse_progress: collapse_progress(header_height, options),
            scroll_offset,
            pull_to_refresh_scale: pull_to_refresh_scale(scroll_offset, options),
        }
    }
}
