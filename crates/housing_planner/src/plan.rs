//! # Plan
//!
//! The finished output of a planning run: the ground floor plus every derived
//! upper floor, in build order. A plan is read-only once generated.
//!
//! Consumers (renderers, exporters, plotters) read cells through
//! [`Floor::value`], which returns the numeric encoding documented in
//! [`crate::cell`].

use std::fmt;

use serde::Serialize;

use crate::cell::{GroundCell, UpperCell};
use crate::grid::Grid;

/// Ordered floors of one building. Index 0 is the ground floor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Plan {
    kernel_size: usize,
    ground: Grid<GroundCell>,
    upper: Vec<Grid<UpperCell>>,
}

impl Plan {
    pub(crate) fn new(ground: Grid<GroundCell>, kernel_size: usize) -> Self {
        Self {
            kernel_size,
            ground,
            upper: Vec::new(),
        }
    }

    pub(crate) fn push_upper(&mut self, floor: Grid<UpperCell>) {
        self.upper.push(floor);
    }

    /// Number of floors, ground floor included. Always at least 1.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.upper.len()
    }

    /// Always false; a plan holds at least its ground floor.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Grid width.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.ground.width()
    }

    /// Grid length.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.ground.length()
    }

    /// Kernel size the plan was generated with.
    #[inline]
    #[must_use]
    pub const fn kernel_size(&self) -> usize {
        self.kernel_size
    }

    /// The ground floor grid.
    #[must_use]
    pub const fn ground(&self) -> &Grid<GroundCell> {
        &self.ground
    }

    /// Upper floor grids, floor 1 first.
    #[must_use]
    pub fn upper(&self) -> &[Grid<UpperCell>] {
        &self.upper
    }

    /// Returns floor `index`, or `None` past the top.
    #[must_use]
    pub fn floor(&self, index: usize) -> Option<Floor<'_>> {
        match index {
            0 => Some(Floor::Ground(&self.ground)),
            i => self.upper.get(i - 1).map(Floor::Upper),
        }
    }

    /// The most recently built floor.
    #[must_use]
    pub fn top(&self) -> Floor<'_> {
        self.upper
            .last()
            .map_or(Floor::Ground(&self.ground), Floor::Upper)
    }

    /// Iterates all floors from the ground up.
    pub fn floors(&self) -> impl Iterator<Item = Floor<'_>> {
        std::iter::once(Floor::Ground(&self.ground)).chain(self.upper.iter().map(Floor::Upper))
    }

    /// Numeric code at `(x, y)` of floor `index`.
    #[must_use]
    pub fn value(&self, index: usize, x: usize, y: usize) -> Option<u8> {
        self.floor(index).and_then(|floor| floor.value(x, y))
    }

    /// Every cell as its numeric code, indexed `[floor][y][x]`.
    #[must_use]
    pub fn to_codes(&self) -> Vec<Vec<Vec<u8>>> {
        self.floors().map(|floor| floor.codes()).collect()
    }

    /// Per-floor cell counts, ground floor first.
    #[must_use]
    pub fn stats(&self) -> Vec<FloorStats> {
        self.floors().map(|floor| floor.stats()).collect()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, floor) in self.floors().enumerate() {
            writeln!(f, " --- {index}. Floor ---")?;
            for row in floor.codes() {
                let line: Vec<String> = row.iter().map(u8::to_string).collect();
                writeln!(f, "{}", line.join(" "))?;
            }
        }
        Ok(())
    }
}

/// Borrowed view of a single floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Floor<'a> {
    /// Floor 0.
    Ground(&'a Grid<GroundCell>),
    /// Floor 1 and above.
    Upper(&'a Grid<UpperCell>),
}

impl Floor<'_> {
    /// Returns true for floor 0.
    #[must_use]
    pub const fn is_ground(self) -> bool {
        matches!(self, Self::Ground(_))
    }

    /// Grid width.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Ground(grid) => grid.width(),
            Self::Upper(grid) => grid.width(),
        }
    }

    /// Grid length.
    #[must_use]
    pub const fn length(self) -> usize {
        match self {
            Self::Ground(grid) => grid.length(),
            Self::Upper(grid) => grid.length(),
        }
    }

    /// Numeric code at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn value(self, x: usize, y: usize) -> Option<u8> {
        match self {
            Self::Ground(grid) => grid.get(x, y).map(GroundCell::code),
            Self::Upper(grid) => grid.get(x, y).map(UpperCell::code),
        }
    }

    /// Returns true if at least one cell is house (code 0).
    #[must_use]
    pub fn has_buildable(self) -> bool {
        match self {
            Self::Ground(grid) => grid.any(GroundCell::is_solid),
            Self::Upper(grid) => grid.any(UpperCell::is_solid),
        }
    }

    /// Returns true if no cell is house (code 0). Such a floor ends a plan.
    #[must_use]
    pub fn is_fully_void(self) -> bool {
        !self.has_buildable()
    }

    /// Rows of numeric codes, `y = 0` first.
    #[must_use]
    pub fn codes(self) -> Vec<Vec<u8>> {
        match self {
            Self::Ground(grid) => grid
                .rows()
                .map(|row| row.iter().map(|c| c.code()).collect())
                .collect(),
            Self::Upper(grid) => grid
                .rows()
                .map(|row| row.iter().map(|c| c.code()).collect())
                .collect(),
        }
    }

    /// Cell counts for this floor.
    #[must_use]
    pub fn stats(self) -> FloorStats {
        match self {
            Self::Ground(grid) => FloorStats {
                house: grid.count(|c| c == GroundCell::House),
                balcony: grid.count(|c| c == GroundCell::Balcony),
                void: 0,
            },
            Self::Upper(grid) => FloorStats {
                house: grid.count(|c| c == UpperCell::House),
                balcony: grid.count(|c| c == UpperCell::Balcony),
                void: grid.count(|c| c == UpperCell::Void),
            },
        }
    }
}

/// Cell counts of one floor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FloorStats {
    /// Solid house cells.
    pub house: usize,
    /// Balcony markers.
    pub balcony: usize,
    /// Unbuilt cells (always 0 on the ground floor).
    pub void: usize,
}

impl FloorStats {
    /// Total cells counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.house + self.balcony + self.void
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> Plan {
        let mut ground = Grid::new(2, 2, GroundCell::House);
        ground.set(1, 0, GroundCell::Balcony);
        let mut plan = Plan::new(ground, 2);

        let mut first = Grid::new(2, 2, UpperCell::Void);
        first.set(0, 1, UpperCell::House);
        first.set(1, 1, UpperCell::Balcony);
        plan.push_upper(first);
        plan.push_upper(Grid::new(2, 2, UpperCell::Void));
        plan
    }

    #[test]
    fn test_floor_access() {
        let plan = sample_plan();
        assert_eq!(plan.len(), 3);
        assert!(!plan.is_empty());
        assert!(plan.floor(0).unwrap().is_ground());
        assert!(!plan.floor(1).unwrap().is_ground());
        assert!(plan.floor(3).is_none());
    }

    #[test]
    fn test_values_use_floor_encoding() {
        let plan = sample_plan();
        assert_eq!(plan.value(0, 0, 0), Some(0));
        assert_eq!(plan.value(0, 1, 0), Some(1));
        assert_eq!(plan.value(1, 0, 0), Some(1));
        assert_eq!(plan.value(1, 0, 1), Some(0));
        assert_eq!(plan.value(1, 1, 1), Some(2));
        assert_eq!(plan.value(1, 2, 0), None);
    }

    #[test]
    fn test_top_is_fully_void() {
        let plan = sample_plan();
        assert!(plan.top().is_fully_void());
        assert!(plan.floor(1).unwrap().has_buildable());
    }

    #[test]
    fn test_codes_and_stats() {
        let plan = sample_plan();
        let codes = plan.to_codes();
        assert_eq!(codes[0], vec![vec![0, 1], vec![0, 0]]);
        assert_eq!(codes[1], vec![vec![1, 1], vec![0, 2]]);

        let stats = plan.stats();
        assert_eq!(stats[0], FloorStats { house: 3, balcony: 1, void: 0 });
        assert_eq!(stats[1], FloorStats { house: 1, balcony: 1, void: 2 });
        assert_eq!(stats[2].void, 4);
        assert!(stats.iter().all(|s| s.total() == 4));
    }

    #[test]
    fn test_display() {
        let text = sample_plan().to_string();
        assert!(text.starts_with(" --- 0. Floor ---\n0 1\n0 0\n"));
        assert!(text.contains(" --- 2. Floor ---\n1 1\n1 1\n"));
    }
}
