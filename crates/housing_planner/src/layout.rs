//! # Placement Layout
//!
//! Turns a [`Plan`] into a flat list of primitives for a renderer. This is
//! plain data; building meshes from it is the renderer's job.
//!
//! | floor  | cell    | primitive |
//! |--------|---------|-----------|
//! | ground | house   | cube      |
//! | ground | balcony | plate     |
//! | upper  | house   | cube      |
//! | upper  | balcony | plate     |
//! | upper  | void    | nothing   |
//!
//! A cell at `(x, y)` on floor `f` is placed at
//! `(x + padding_x * x, y + padding_y * y, f + padding_z * f)`.

use serde::{Deserialize, Serialize};

use crate::cell::{GroundCell, UpperCell};
use crate::error::{PlannerError, PlannerResult};
use crate::plan::{Floor, Plan};

/// Spacing and primitive sizes for a layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutParams {
    /// Extra spacing per cell along x.
    pub padding_x: f32,
    /// Extra spacing per cell along y.
    pub padding_y: f32,
    /// Extra spacing per floor.
    pub padding_z: f32,
    /// Side of a balcony plate.
    pub plate_size: f32,
    /// Side of a house cube.
    pub cube_size: f32,
}

impl LayoutParams {
    /// Allowed padding range (inclusive).
    pub const PADDING_RANGE: (f32, f32) = (0.1, 100.0);

    /// Allowed primitive size range (inclusive).
    pub const SIZE_RANGE: (f32, f32) = (1.0, 100.0);

    /// Checks every parameter against its range.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidLayout`] naming the first bad parameter.
    pub fn validate(&self) -> PlannerResult<()> {
        let checks = [
            ("padding_x", self.padding_x, Self::PADDING_RANGE),
            ("padding_y", self.padding_y, Self::PADDING_RANGE),
            ("padding_z", self.padding_z, Self::PADDING_RANGE),
            ("plate_size", self.plate_size, Self::SIZE_RANGE),
            ("cube_size", self.cube_size, Self::SIZE_RANGE),
        ];
        for (name, value, (min, max)) in checks {
            // NaN fails both comparisons
            if !(value >= min && value <= max) {
                return Err(PlannerError::InvalidLayout(format!(
                    "{name} = {value} outside [{min}, {max}]"
                )));
            }
        }
        Ok(())
    }

    /// World position of cell `(x, y)` on floor `floor`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn position(&self, floor: usize, x: usize, y: usize) -> [f32; 3] {
        let (fx, fy, fz) = (x as f32, y as f32, floor as f32);
        [
            fx + self.padding_x * fx,
            fy + self.padding_y * fy,
            fz + self.padding_z * fz,
        ]
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            padding_x: 1.0,
            padding_y: 1.0,
            padding_z: 1.0,
            plate_size: 1.0,
            cube_size: 1.0,
        }
    }
}

/// Kind of primitive a renderer should emit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Primitive {
    /// Solid house block.
    Cube {
        /// Edge length.
        size: f32,
    },
    /// Flat balcony marker.
    Plate {
        /// Edge length.
        size: f32,
    },
}

/// One primitive at one position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Placement {
    /// Floor index.
    pub floor: usize,
    /// Grid x.
    pub x: usize,
    /// Grid y.
    pub y: usize,
    /// What to emit.
    pub primitive: Primitive,
    /// Where to emit it.
    pub position: [f32; 3],
}

/// Lists the placements for every non-void cell of `plan`.
///
/// Cells are visited floor by floor, rows from `y = 0`.
///
/// # Errors
///
/// Returns [`PlannerError::InvalidLayout`] if `params` fails validation.
pub fn placements(plan: &Plan, params: &LayoutParams) -> PlannerResult<Vec<Placement>> {
    params.validate()?;

    let cube = Primitive::Cube {
        size: params.cube_size,
    };
    let plate = Primitive::Plate {
        size: params.plate_size,
    };

    let mut out = Vec::new();
    for (index, floor) in plan.floors().enumerate() {
        let mut emit = |x: usize, y: usize, primitive: Primitive| {
            out.push(Placement {
                floor: index,
                x,
                y,
                primitive,
                position: params.position(index, x, y),
            });
        };

        match floor {
            Floor::Ground(grid) => {
                for (x, y, cell) in grid.iter() {
                    match cell {
                        GroundCell::House => emit(x, y, cube),
                        GroundCell::Balcony => emit(x, y, plate),
                    }
                }
            }
            Floor::Upper(grid) => {
                for (x, y, cell) in grid.iter() {
                    match cell {
                        UpperCell::House => emit(x, y, cube),
                        UpperCell::Balcony => emit(x, y, plate),
                        UpperCell::Void => {}
                    }
                }
            }
        }
    }
    Ok(out)
}
