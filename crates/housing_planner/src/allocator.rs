//! # Grid Allocator
//!
//! Owns the grid dimensions and kernel size of one planning run. An allocator
//! can only be obtained through [`GridAllocator::validate`], so everything
//! downstream may assume a sane configuration.

use crate::error::{PlannerError, PlannerResult};
use crate::grid::Grid;

/// Validated grid dimensions and kernel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridAllocator {
    width: usize,
    length: usize,
    kernel_size: usize,
}

impl GridAllocator {
    /// Default kernel side length.
    pub const DEFAULT_KERNEL_SIZE: usize = 2;

    /// Validates a configuration.
    ///
    /// # Errors
    ///
    /// - [`PlannerError::InvalidDimension`] if `width` or `length` is zero, or
    ///   `width * length` does not fit in `usize`
    /// - [`PlannerError::InvalidKernel`] if `kernel_size` is zero or larger
    ///   than `min(width, length)`
    pub fn validate(width: usize, length: usize, kernel_size: usize) -> PlannerResult<Self> {
        if width == 0 || length == 0 || width.checked_mul(length).is_none() {
            return Err(PlannerError::InvalidDimension { width, length });
        }
        if kernel_size == 0 || kernel_size > width.min(length) {
            return Err(PlannerError::InvalidKernel {
                kernel_size,
                width,
                length,
            });
        }
        Ok(Self {
            width,
            length,
            kernel_size,
        })
    }

    /// Allocates a grid with every cell set to `fill`.
    #[must_use]
    pub fn new_grid<C: Copy>(&self, fill: C) -> Grid<C> {
        Grid::new(self.width, self.length, fill)
    }

    /// Returns the grid width.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid length.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the kernel side length.
    #[inline]
    #[must_use]
    pub const fn kernel_size(&self) -> usize {
        self.kernel_size
    }

    /// Number of full kernel tiles along `(width, length)`.
    #[inline]
    #[must_use]
    pub const fn tile_counts(&self) -> (usize, usize) {
        (self.width / self.kernel_size, self.length / self.kernel_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            GridAllocator::validate(0, 10, 2),
            Err(PlannerError::InvalidDimension { width: 0, length: 10 })
        );
        assert!(matches!(
            GridAllocator::validate(10, 0, 2),
            Err(PlannerError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_rejects_overflowing_area() {
        assert_eq!(
            GridAllocator::validate(usize::MAX, 2, 2),
            Err(PlannerError::InvalidDimension {
                width: usize::MAX,
                length: 2
            })
        );
        assert!(GridAllocator::validate(usize::MAX, 1, 1).is_ok());
    }

    #[test]
    fn test_rejects_bad_kernel() {
        assert!(matches!(
            GridAllocator::validate(10, 10, 0),
            Err(PlannerError::InvalidKernel { .. })
        ));
        assert!(matches!(
            GridAllocator::validate(10, 10, 11),
            Err(PlannerError::InvalidKernel { .. })
        ));
        // Limited by the shorter side
        assert!(matches!(
            GridAllocator::validate(10, 3, 4),
            Err(PlannerError::InvalidKernel { .. })
        ));
    }

    #[test]
    fn test_kernel_may_equal_shorter_side() {
        let alloc = GridAllocator::validate(5, 3, 3).unwrap();
        assert_eq!(alloc.tile_counts(), (1, 1));
    }

    #[test]
    fn test_new_grid_uses_dimensions() {
        let alloc = GridAllocator::validate(6, 4, 2).unwrap();
        let grid = alloc.new_grid(1u8);
        assert_eq!((grid.width(), grid.length()), (6, 4));
        assert_eq!(grid.count(|c| c == 1), 24);
        assert_eq!(alloc.tile_counts(), (3, 2));
    }
}
