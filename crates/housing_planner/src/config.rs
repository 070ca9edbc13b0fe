//! # Planner Configuration
//!
//! All tunables of a planning run, loaded once from a TOML file:
//!
//! ```toml
//! width = 20
//! length = 20
//! kernel_size = 2
//! max_floors = 64
//! window_bounds = "exclusive"
//! seed = 42
//!
//! [layout]
//! padding_x = 1.0
//! cube_size = 1.0
//! ```
//!
//! Every key is optional and falls back to [`PlannerConfig::default`].

use std::path::Path;

use serde::Deserialize;

use crate::allocator::GridAllocator;
use crate::error::{PlannerError, PlannerResult};
use crate::layout::LayoutParams;
use crate::random::PlanSeed;

/// Range of window origins swept when deriving an upper floor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowBounds {
    /// Origins in `[0, size - k)`. The last `k - 1` rows and columns are never
    /// a window origin, so the far edge of the grid is never built on.
    /// Existing plans were produced this way.
    #[default]
    Exclusive,
    /// Origins in `[0, size - k]`, covering the whole grid.
    Inclusive,
}

impl WindowBounds {
    /// Number of window origins along an axis of `size` cells.
    ///
    /// Requires `kernel_size <= size`.
    #[inline]
    #[must_use]
    pub const fn origin_count(self, size: usize, kernel_size: usize) -> usize {
        match self {
            Self::Exclusive => size - kernel_size,
            Self::Inclusive => size - kernel_size + 1,
        }
    }
}

/// Configuration for one planning run.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Grid cells along x.
    pub width: usize,
    /// Grid cells along y.
    pub length: usize,
    /// Side of the square tile/window.
    pub kernel_size: usize,
    /// Maximum floors in a plan, ground floor included.
    pub max_floors: usize,
    /// Window origin range for upper floors.
    pub window_bounds: WindowBounds,
    /// Seed for [`crate::SeededSource`]; `None` leaves the choice to the caller.
    pub seed: Option<u64>,
    /// Spacing and sizes handed to renderers.
    pub layout: LayoutParams,
}

impl PlannerConfig {
    /// Default grid side (the host dialog's default).
    pub const DEFAULT_GRID_SIZE: usize = 20;

    /// Default floor cap.
    pub const DEFAULT_MAX_FLOORS: usize = 64;

    /// Creates a config with the given dimensions and defaults elsewhere.
    #[must_use]
    pub fn new(width: usize, length: usize, kernel_size: usize) -> Self {
        Self {
            width,
            length,
            kernel_size,
            ..Self::default()
        }
    }

    /// Sets the floor cap.
    #[must_use]
    pub const fn with_max_floors(mut self, max_floors: usize) -> Self {
        self.max_floors = max_floors;
        self
    }

    /// Sets the window origin range.
    #[must_use]
    pub const fn with_window_bounds(mut self, bounds: WindowBounds) -> Self {
        self.window_bounds = bounds;
        self
    }

    /// Sets the seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidConfig`] if the text is not valid TOML,
    /// has unknown keys, or holds values of the wrong type.
    pub fn from_toml_str(text: &str) -> PlannerResult<Self> {
        toml::from_str(text).map_err(|e| PlannerError::InvalidConfig(e.to_string()))
    }

    /// Loads a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidConfig`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> PlannerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| PlannerError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Validates the dimensions and returns the allocator for them.
    ///
    /// # Errors
    ///
    /// See [`GridAllocator::validate`].
    pub fn allocator(&self) -> PlannerResult<GridAllocator> {
        GridAllocator::validate(self.width, self.length, self.kernel_size)
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn plan_seed(&self) -> Option<PlanSeed> {
        self.seed.map(PlanSeed::new)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_GRID_SIZE,
            length: Self::DEFAULT_GRID_SIZE,
            kernel_size: GridAllocator::DEFAULT_KERNEL_SIZE,
            max_floors: Self::DEFAULT_MAX_FLOORS,
            window_bounds: WindowBounds::Exclusive,
            seed: None,
            layout: LayoutParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.width, 20);
        assert_eq!(config.kernel_size, 2);
    }

    #[test]
    fn test_full_toml() {
        let config = PlannerConfig::from_toml_str(
            r#"
            width = 12
            length = 8
            kernel_size = 3
            max_floors = 10
            window_bounds = "inclusive"
            seed = 99

            [layout]
            padding_z = 2.5
            "#,
        )
        .unwrap();

        assert_eq!(config.width, 12);
        assert_eq!(config.length, 8);
        assert_eq!(config.kernel_size, 3);
        assert_eq!(config.max_floors, 10);
        assert_eq!(config.window_bounds, WindowBounds::Inclusive);
        assert_eq!(config.plan_seed(), Some(PlanSeed::new(99)));
        assert_eq!(config.layout.padding_z, 2.5);
        assert_eq!(config.layout.padding_x, 1.0);
    }

    #[test]
    fn test_bad_toml_is_invalid_config() {
        assert!(matches!(
            PlannerConfig::from_toml_str("width = -3"),
            Err(PlannerError::InvalidConfig(_))
        ));
        assert!(matches!(
            PlannerConfig::from_toml_str("colour = \"red\""),
            Err(PlannerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_missing_file_is_invalid_config() {
        assert!(matches!(
            PlannerConfig::load("/nonexistent/housing.toml"),
            Err(PlannerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_origin_count() {
        assert_eq!(WindowBounds::Exclusive.origin_count(10, 2), 8);
        assert_eq!(WindowBounds::Inclusive.origin_count(10, 2), 9);
        assert_eq!(WindowBounds::Exclusive.origin_count(2, 2), 0);
        assert_eq!(WindowBounds::Inclusive.origin_count(2, 2), 1);
    }

    #[test]
    fn test_allocator_validates() {
        assert!(PlannerConfig::new(0, 10, 2).allocator().is_err());
        assert!(PlannerConfig::new(10, 10, 2).allocator().is_ok());
    }
}
