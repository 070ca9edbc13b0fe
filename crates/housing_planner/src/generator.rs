//! # Floor Plan Generator
//!
//! Builds a plan bottom-up:
//!
//! 1. **Ground floor**: the grid is cut into `k` x `k` tiles and every tile
//!    gets exactly one balcony at a random cell. Remainder strips stay house.
//! 2. **Upper floors**: a `k` x `k` window slides over the new floor. Where the
//!    floor below is solid under the whole window and the new floor is still
//!    void there, a house block with one random balcony is written.
//! 3. **Termination**: floors are added until one ends up with no house cell
//!    at all. That fully void floor is kept as the top of the plan.
//!
//! Each placed block sits on `k * k` solid cells below and leaves at most
//! `k * k - 1` solid cells itself, so the solid count shrinks with every floor
//! and the loop ends. The floor cap still bounds the run.
//!
//! Random offsets inside a tile or block are two independent axis draws, the
//! offset along the length first, then the offset along the width.

use tracing::{debug, info, warn};

use crate::allocator::GridAllocator;
use crate::cell::{GroundCell, SupportCell, UpperCell};
use crate::config::{PlannerConfig, WindowBounds};
use crate::error::{PlannerError, PlannerResult};
use crate::grid::Grid;
use crate::plan::{Floor, Plan};
use crate::random::RandomSource;

/// Generates plans for one validated grid configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloorPlanGenerator {
    allocator: GridAllocator,
    window_bounds: WindowBounds,
    max_floors: usize,
}

impl FloorPlanGenerator {
    /// Creates a generator with the default floor cap and window bounds.
    #[must_use]
    pub const fn new(allocator: GridAllocator) -> Self {
        Self {
            allocator,
            window_bounds: WindowBounds::Exclusive,
            max_floors: PlannerConfig::DEFAULT_MAX_FLOORS,
        }
    }

    /// Creates a generator from a config, validating its dimensions.
    ///
    /// # Errors
    ///
    /// See [`GridAllocator::validate`].
    pub fn from_config(config: &PlannerConfig) -> PlannerResult<Self> {
        Ok(Self::new(config.allocator()?)
            .with_max_floors(config.max_floors)
            .with_window_bounds(config.window_bounds))
    }

    /// Sets the floor cap (ground floor included).
    #[must_use]
    pub const fn with_max_floors(mut self, max_floors: usize) -> Self {
        self.max_floors = max_floors;
        self
    }

    /// Sets the window origin range for upper floors.
    #[must_use]
    pub const fn with_window_bounds(mut self, bounds: WindowBounds) -> Self {
        self.window_bounds = bounds;
        self
    }

    /// The allocator this generator was built for.
    #[must_use]
    pub const fn allocator(&self) -> &GridAllocator {
        &self.allocator
    }

    /// Runs a full generation.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::GenerationCapExceeded`] if another floor is
    /// needed while the plan already holds `max_floors` floors. No partial
    /// plan is returned.
    pub fn run<R: RandomSource + ?Sized>(&self, source: &mut R) -> PlannerResult<Plan> {
        if self.max_floors == 0 {
            return Err(PlannerError::GenerationCapExceeded { max_floors: 0 });
        }

        let mut plan = Plan::new(self.seed_ground_floor(source), self.allocator.kernel_size());

        while plan.top().has_buildable() {
            if plan.len() >= self.max_floors {
                warn!(
                    max_floors = self.max_floors,
                    "floor cap reached with buildable cells left"
                );
                return Err(PlannerError::GenerationCapExceeded {
                    max_floors: self.max_floors,
                });
            }
            self.derive_upper_floor(&mut plan, source);
        }

        info!(
            width = self.allocator.width(),
            length = self.allocator.length(),
            kernel_size = self.allocator.kernel_size(),
            floors = plan.len(),
            "plan complete"
        );
        Ok(plan)
    }

    /// Produces floor 0: one balcony per full kernel tile, house elsewhere.
    ///
    /// Tiles are visited with the width index outer and the length index inner.
    pub fn seed_ground_floor<R: RandomSource + ?Sized>(&self, source: &mut R) -> Grid<GroundCell> {
        let k = self.allocator.kernel_size();
        let (tiles_x, tiles_y) = self.allocator.tile_counts();
        let mut ground = self.allocator.new_grid(GroundCell::House);

        for tile_x in 0..tiles_x {
            for tile_y in 0..tiles_y {
                let (dx, dy) = pick_offset(source, k);
                ground.set(tile_x * k + dx, tile_y * k + dy, GroundCell::Balcony);
            }
        }

        debug!(tiles = tiles_x * tiles_y, "ground floor seeded");
        ground
    }

    /// Derives the next floor from the current top of `plan` and appends it.
    pub fn derive_upper_floor<R: RandomSource + ?Sized>(&self, plan: &mut Plan, source: &mut R) {
        let floor = match plan.top() {
            Floor::Ground(below) => self.build_upper(below, source),
            Floor::Upper(below) => self.build_upper(below, source),
        };
        plan.push_upper(floor);
    }

    fn build_upper<B, R>(&self, below: &Grid<B>, source: &mut R) -> Grid<UpperCell>
    where
        B: SupportCell,
        R: RandomSource + ?Sized,
    {
        let k = self.allocator.kernel_size();
        let area = k * k;
        let origins_x = self.window_bounds.origin_count(self.allocator.width(), k);
        let origins_y = self.window_bounds.origin_count(self.allocator.length(), k);

        let mut floor = self.allocator.new_grid(UpperCell::Void);
        let mut block = vec![UpperCell::House; area];
        let mut placed = 0usize;

        for x in 0..origins_x {
            for y in 0..origins_y {
                let zeros_below = below.count_in_window(x, y, k, B::supports);
                if zeros_below != area {
                    continue;
                }
                let ones_here = floor.count_in_window(x, y, k, UpperCell::is_void);
                if ones_here != area {
                    continue;
                }

                block.fill(UpperCell::House);
                let (dx, dy) = pick_offset(source, k);
                block[dy * k + dx] = UpperCell::Balcony;
                floor.write_window(x, y, k, &block);
                placed += 1;
            }
        }

        debug!(blocks = placed, "upper floor derived");
        floor
    }
}

/// Draws a cell offset inside a `k` x `k` block as `(dx, dy)`.
///
/// The length-axis offset is drawn first.
#[inline]
fn pick_offset<R: RandomSource + ?Sized>(source: &mut R, k: usize) -> (usize, usize) {
    let dy = source.next_index(k);
    let dx = source.next_index(k);
    (dx, dy)
}

/// Generates a plan.
///
/// # Errors
///
/// - [`PlannerError::InvalidDimension`] / [`PlannerError::InvalidKernel`] for
///   a bad configuration, before any draw is taken
/// - [`PlannerError::GenerationCapExceeded`] if the plan would need more than
///   `max_floors` floors
pub fn generate<R: RandomSource + ?Sized>(
    width: usize,
    length: usize,
    kernel_size: usize,
    source: &mut R,
    max_floors: usize,
) -> PlannerResult<Plan> {
    let allocator = GridAllocator::validate(width, length, kernel_size)?;
    FloorPlanGenerator::new(allocator)
        .with_max_floors(max_floors)
        .run(source)
}

/// Generates a plan from a config.
///
/// # Errors
///
/// Same as [`generate`].
pub fn generate_with<R: RandomSource + ?Sized>(
    config: &PlannerConfig,
    source: &mut R,
) -> PlannerResult<Plan> {
    FloorPlanGenerator::from_config(config)?.run(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{PlanSeed, ScriptedSource, SeededSource};

    fn generator(width: usize, length: usize, k: usize) -> FloorPlanGenerator {
        FloorPlanGenerator::new(GridAllocator::validate(width, length, k).unwrap())
    }

    #[test]
    fn test_ground_floor_one_balcony_per_tile() {
        let gen = generator(7, 5, 2);
        let ground = gen.seed_ground_floor(&mut SeededSource::new(PlanSeed::new(3)));

        for tile_x in 0..3 {
            for tile_y in 0..2 {
                let balconies =
                    ground.count_in_window(tile_x * 2, tile_y * 2, 2, |c| c == GroundCell::Balcony);
                assert_eq!(balconies, 1);
            }
        }
        // Remainder strips (x = 6, y = 4) stay house
        assert_eq!(ground.count(|c| c == GroundCell::Balcony), 6);
        for y in 0..5 {
            assert_eq!(ground.get(6, y), Some(GroundCell::House));
        }
    }

    #[test]
    fn test_ground_floor_draw_order() {
        // First draw is the length offset, second the width offset
        let gen = generator(2, 2, 2);
        let ground = gen.seed_ground_floor(&mut ScriptedSource::new(vec![1, 0]));
        assert_eq!(ground.get(0, 1), Some(GroundCell::Balcony));
    }

    #[test]
    fn test_ground_floor_tile_order() {
        // Width index outer, length index inner: tile (0,0), (0,1), (1,0), (1,1)
        let gen = generator(4, 4, 2);
        let mut source = ScriptedSource::new(vec![0, 0, 0, 1, 1, 0, 1, 1]);
        let ground = gen.seed_ground_floor(&mut source);

        assert_eq!(ground.get(0, 0), Some(GroundCell::Balcony));
        assert_eq!(ground.get(1, 2), Some(GroundCell::Balcony));
        assert_eq!(ground.get(2, 1), Some(GroundCell::Balcony));
        assert_eq!(ground.get(3, 3), Some(GroundCell::Balcony));
        assert_eq!(source.draws(), 8);
    }

    #[test]
    fn test_upper_floor_on_solid_ground() {
        let gen = generator(5, 5, 2);
        let below = Grid::new(5, 5, GroundCell::House);
        let floor = gen.build_upper(&below, &mut ScriptedSource::constant(0));

        // Origins 0..3 on both axes; non-overlapping blocks land at (0,0), (0,2), (2,0), (2,2)
        for (x, y) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert_eq!(floor.get(x, y), Some(UpperCell::Balcony));
            assert_eq!(floor.get(x + 1, y), Some(UpperCell::House));
            assert_eq!(floor.get(x, y + 1), Some(UpperCell::House));
            assert_eq!(floor.get(x + 1, y + 1), Some(UpperCell::House));
        }
        // Far edge is never a window origin
        for i in 0..5 {
            assert_eq!(floor.get(4, i), Some(UpperCell::Void));
            assert_eq!(floor.get(i, 4), Some(UpperCell::Void));
        }
    }

    #[test]
    fn test_inclusive_bounds_reach_far_edge() {
        let gen = generator(4, 4, 2).with_window_bounds(WindowBounds::Inclusive);
        let below = Grid::new(4, 4, GroundCell::House);
        let floor = gen.build_upper(&below, &mut ScriptedSource::constant(0));
        assert_eq!(floor.count(|c| c == UpperCell::Void), 0);
        assert_eq!(floor.count(|c| c == UpperCell::Balcony), 4);

        let legacy = generator(4, 4, 2).build_upper(&below, &mut ScriptedSource::constant(0));
        assert_eq!(legacy.count(|c| c == UpperCell::Void), 12);
    }

    #[test]
    fn test_upper_floor_needs_full_support() {
        let gen = generator(3, 3, 2);
        let mut below = Grid::new(3, 3, UpperCell::House);
        below.set(1, 1, UpperCell::Balcony);
        let floor = gen.build_upper(&below, &mut ScriptedSource::constant(0));
        assert_eq!(floor.count(|c| c == UpperCell::Void), 9);
    }

    #[test]
    fn test_run_ends_on_void_floor() {
        let gen = generator(12, 12, 2);
        let plan = gen.run(&mut SeededSource::new(PlanSeed::new(1))).unwrap();
        assert!(plan.top().is_fully_void());
        assert!(plan.len() >= 2);
    }

    #[test]
    fn test_cap_exceeded() {
        // Solid ground everywhere but one tile requires at least one upper floor
        let gen = generator(12, 12, 2).with_max_floors(1);
        assert_eq!(
            gen.run(&mut SeededSource::new(PlanSeed::new(1))),
            Err(PlannerError::GenerationCapExceeded { max_floors: 1 })
        );

        let gen = generator(12, 12, 2).with_max_floors(0);
        assert!(gen.run(&mut ScriptedSource::constant(0)).is_err());
    }

    #[test]
    fn test_unit_kernel_marks_everything() {
        // k = 1: every cell is its own tile, so the ground floor is all balcony
        let plan = generate(3, 4, 1, &mut ScriptedSource::constant(0), 1).unwrap();
        assert_eq!(plan.len(), 1);
        assert!(plan.top().is_fully_void());
    }
}
