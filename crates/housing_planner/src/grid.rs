//! # Floor Grid
//!
//! A fixed-size rectangular grid of cells, stored row-major
//! (`index = y * width + x`). `x` runs along the width, `y` along the length.

use serde::Serialize;

/// A `width` x `length` grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid<C> {
    /// Number of cells along the x axis.
    width: usize,
    /// Number of cells along the y axis.
    length: usize,
    /// Cell data (indexed as `[y * width + x]`).
    cells: Vec<C>,
}

impl<C: Copy> Grid<C> {
    /// Creates a grid with every cell set to `fill`.
    #[must_use]
    pub fn new(width: usize, length: usize, fill: C) -> Self {
        Self {
            width,
            length,
            cells: vec![fill; width * length],
        }
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

    /// Returns the cell at `(x, y)`, or `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<C> {
        if x < self.width && y < self.length {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Sets the cell at `(x, y)`. Writes outside the grid are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: C) {
        if x < self.width && y < self.length {
            self.cells[y * self.width + x] = cell;
        }
    }

    /// Counts the cells matching `pred` in the `k` x `k` window at `(x, y)`.
    ///
    /// The window must lie inside the grid.
    #[inline]
    pub fn count_in_window(&self, x: usize, y: usize, k: usize, pred: impl Fn(C) -> bool) -> usize {
        (y..y + k)
            .map(|row| {
                let start = row * self.width + x;
                self.cells[start..start + k]
                    .iter()
                    .filter(|&&cell| pred(cell))
                    .count()
            })
            .sum()
    }

    /// Overwrites the `k` x `k` window at `(x, y)` with `block`.
    ///
    /// `block` is row-major with side `k`. The window must lie inside the grid.
    #[inline]
    pub fn write_window(&mut self, x: usize, y: usize, k: usize, block: &[C]) {
        debug_assert_eq!(block.len(), k * k);
        for (dy, src) in block.chunks_exact(k).enumerate() {
            let start = (y + dy) * self.width + x;
            self.cells[start..start + k].copy_from_slice(src);
        }
    }

    /// Returns true if any cell matches `pred`.
    #[inline]
    pub fn any(&self, pred: impl Fn(C) -> bool) -> bool {
        self.cells.iter().any(|&cell| pred(cell))
    }

    /// Counts the cells matching `pred` over the whole grid.
    #[inline]
    pub fn count(&self, pred: impl Fn(C) -> bool) -> usize {
        self.cells.iter().filter(|&&cell| pred(cell)).count()
    }

    /// Iterates rows from `y = 0` upwards.
    pub fn rows(&self) -> impl Iterator<Item = &[C]> {
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Iterates `(x, y, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, C)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i % width, i / width, cell))
    }
}
