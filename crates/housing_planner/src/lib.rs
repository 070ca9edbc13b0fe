//! # Housing Planner
//!
//! Deterministic multi-floor building footprints on a 2D grid.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same random stream always produces the same plan
//! 2. **Bounded**: Every run stops at a configurable floor cap
//! 3. **Host-free**: Renderers and UIs only read the finished [`Plan`]
//!
//! ## Core Components
//!
//! - `GridAllocator`: Validates dimensions and allocates floor grids
//! - `FloorPlanGenerator`: Seeds the ground floor and derives upper floors
//! - `Plan`: Read-only sequence of floors handed to consumers
//! - `PlannerSession`: Re-generates only when the dimensions change
//!
//! ## Example
//!
//! ```rust,ignore
//! use housing_planner::{generate, PlanSeed, SeededSource};
//!
//! let mut source = SeededSource::new(PlanSeed::new(42));
//! let plan = generate(20, 20, 2, &mut source, 64)?;
//!
//! // The last floor is always fully void
//! assert!(plan.top().is_fully_void());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod allocator;
pub mod cell;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod layout;
pub mod plan;
pub mod random;
pub mod session;

pub use allocator::GridAllocator;
pub use cell::{GroundCell, UpperCell};
pub use config::{PlannerConfig, WindowBounds};
pub use error::{PlannerError, PlannerResult};
pub use generator::{generate, generate_with, FloorPlanGenerator};
pub use grid::Grid;
pub use layout::{LayoutParams, Placement, Primitive};
pub use plan::{Floor, FloorStats, Plan};
pub use random::{PlanSeed, RandomSource, ScriptedSource, SeededSource};
pub use session::PlannerSession;
