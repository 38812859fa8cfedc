use alloc::sync::Arc;

use crate::{ConfigError, Published};

/// A callback fired after a flushed recompute changes the published observables.
pub type OnChangeCallback = Arc<dyn Fn(&Published) + Send + Sync>;

/// A callback fired once per pull-to-refresh trigger.
///
/// The engine sets `is_loading = true` before calling it. The caller ends the refresh session by
/// calling `HeaderScroll::set_is_loading(false)` when its own work completes.
pub type OnRefreshCallback = Arc<dyn Fn() + Send + Sync>;

pub const DEFAULT_MIN_HEIGHT: f32 = 150.0;
pub const DEFAULT_MAX_HEIGHT: f32 = 350.0;

/// Configuration for [`crate::HeaderScroll`].
///
/// Options are set once when building the scroll view and stay fixed for a scroll session.
/// Callbacks are stored in `Arc`s so the whole record is cheap to clone.
pub struct HeaderScrollOptions {
    /// Fully collapsed header height.
    pub min_height: f32,
    /// Fully expanded header height.
    pub max_height: f32,

    /// Whether scrolling up shrinks the header towards `min_height`.
    pub allows_collapse: bool,
    /// Whether pulling down past the top grows (and scales) the header beyond `max_height`.
    pub allows_growth: bool,
    /// Whether a drag that ends mid-collapse settles on fully expanded or fully collapsed.
    pub allows_snap: bool,
    /// Whether the host should draw scroll indicators. The engine only carries this flag.
    pub shows_indicators: bool,

    /// Pull-to-refresh action. Refresh is disabled when `None`.
    pub on_refresh: Option<OnRefreshCallback>,
    /// Observer for the published progress / offset / pull-scale values.
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for HeaderScrollOptions {
    fn clone(&self) -> Self {
        Self {
            min_height: self.min_height,
            max_height: self.max_height,
            allows_collapse: self.allows_collapse,
            allows_growth: self.allows_growth,
            allows_snap: self.allows_snap,
            shows_indicators: self.shows_indicators,
            on_refresh: self.on_refresh.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl Default for HeaderScrollOptions {
    fn default() -> Self {
        Self {
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
            allows_collapse: false,
            allows_growth: false,
            allows_snap: false,
            shows_indicators: true,
            on_refresh: None,
            on_change: None,
        }
    }
}

impl HeaderScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the height contract: both heights finite, non-negative, and `min <= max`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min_height, max_height) = (self.min_height, self.max_height);
        if !min_height.is_finite() || !max_height.is_finite() {
            return Err(ConfigError::NonFiniteHeight {
                min_height,
                max_height,
            });
        }
        if min_height < 0.0 || max_height < 0.0 {
            return Err(ConfigError::NegativeHeight {
                min_height,
                max_height,
            });
        }
        if min_height > max_height {
            return Err(ConfigError::InvertedHeights {
                min_height,
                max_height,
            });
        }
        Ok(())
    }

    /// Distance the header travels between fully expanded and fully collapsed.
    pub fn extra_space(&self) -> f32 {
        self.max_height - self.min_height
    }

    pub fn has_refresh(&self) -> bool {
        self.on_refresh.is_some()
    }

    pub fn with_heights(mut self, min_height: f32, max_height: f32) -> Self {
        self.min_height = min_height;
        self.max_height = max_height;
        self
    }

    pub fn with_min_height(mut self, min_height: f32) -> Self {
        self.min_height = min_height;
        self
    }

    pub fn with_max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn with_allows_collapse(mut self, allows_collapse: bool) -> Self {
        self.allows_collapse = allows_collapse;
        self
    }

    pub fn with_allows_growth(mut self, allows_growth: bool) -> Self {
        self.allows_growth = allows_growth;
        self
    }

    pub fn with_allows_snap(mut self, allows_snap: bool) -> Self {
        self.allows_snap = allows_snap;
        self
    }

    pub fn with_shows_indicators(mut self, shows_indicators: bool) -> Self {
        self.shows_indicators = shows_indicators;
        self
    }

    pub fn with_on_refresh(
        mut self,
        on_refresh: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_refresh = on_refresh.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Published) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for HeaderScrollOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeaderScrollOptions")
            .field("min_height", &self.min_height)
            .field("max_height", &self.max_height)
            .field("allows_collapse", &self.allows_collapse)
            .field("allows_growth", &self.allows_growth)
            .field("allows_snap", &self.allows_snap)
            .field("shows_indicators", &self.shows_indicators)
            .field("has_refresh", &self.on_refresh.is_some())
            .finish_non_exhaustive()
    }
}
