//! # Planner Session
//!
//! Keeps the last plan around for a host UI. Editing spacing or sizes only
//! re-lays out the cached plan; a new plan is generated only when the grid
//! dimensions or kernel size change.

use tracing::debug;

use crate::config::PlannerConfig;
use crate::error::PlannerResult;
use crate::generator::generate_with;
use crate::layout::{placements, LayoutParams, Placement};
use crate::plan::Plan;
use crate::random::{PlanSeed, RandomSource, SeededSource};

/// A config, a random stream, and the most recent plan built from them.
#[derive(Clone, Debug)]
pub struct PlannerSession<R = SeededSource> {
    config: PlannerConfig,
    source: R,
    cached: Option<Plan>,
}

impl PlannerSession<SeededSource> {
    /// Creates a session drawing from the config's seed, or the default seed.
    #[must_use]
    pub fn seeded(config: PlannerConfig) -> Self {
        let seed = config.plan_seed().unwrap_or_default();
        Self::new(config, SeededSource::new(seed))
    }

    /// Restarts the random stream from `seed` and drops the cached plan.
    pub fn reseed(&mut self, seed: PlanSeed) {
        self.config.seed = Some(seed.value());
        self.source = SeededSource::new(seed);
        self.cached = None;
    }
}

impl<R: RandomSource> PlannerSession<R> {
    /// Creates a session with an explicit random source.
    #[must_use]
    pub const fn new(config: PlannerConfig, source: R) -> Self {
        Self {
            config,
            source,
            cached: None,
        }
    }

    /// The current config.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// The cached plan, if one has been generated.
    #[must_use]
    pub fn cached(&self) -> Option<&Plan> {
        self.cached.as_ref()
    }

    /// Returns the plan for the configured dimensions, generating it if needed.
    ///
    /// # Errors
    ///
    /// Any generation error. The previous cached plan is kept on failure.
    pub fn plan(&mut self) -> PlannerResult<&Plan> {
        let (width, length, kernel_size) =
            (self.config.width, self.config.length, self.config.kernel_size);
        self.plan_for(width, length, kernel_size)
    }

    /// Returns the plan for the given dimensions.
    ///
    /// The cached plan is reused when it already has these dimensions;
    /// otherwise a new plan is generated and cached.
    ///
    /// # Errors
    ///
    /// Any generation error. The previous cached plan and config are kept on
    /// failure.
    pub fn plan_for(
        &mut self,
        width: usize,
        length: usize,
        kernel_size: usize,
    ) -> PlannerResult<&Plan> {
        let plan = match self.cached.take() {
            Some(plan)
                if plan.width() == width
                    && plan.length() == length
                    && plan.kernel_size() == kernel_size =>
            {
                debug!(width, length, kernel_size, "reusing cached plan");
                plan
            }
            previous => {
                let config = PlannerConfig {
                    width,
                    length,
                    kernel_size,
                    ..self.config.clone()
                };
                match generate_with(&config, &mut self.source) {
                    Ok(plan) => {
                        self.config = config;
                        plan
                    }
                    Err(e) => {
                        self.cached = previous;
                        return Err(e);
                    }
                }
            }
        };
        Ok(self.cached.insert(plan))
    }

    /// Discards the cached plan and generates a fresh one.
    ///
    /// # Errors
    ///
    /// Any generation error; the cache is left empty in that case.
    pub fn regenerate(&mut self) -> PlannerResult<&Plan> {
        self.cached = None;
        self.plan()
    }

    /// Replaces the layout parameters. The cached plan is kept.
    pub fn set_layout(&mut self, layout: LayoutParams) {
        self.config.layout = layout;
    }

    /// Lays out the current plan with the configured parameters.
    ///
    /// # Errors
    ///
    /// Any generation or layout error.
    pub fn placements(&mut self) -> PlannerResult<Vec<Placement>> {
        let layout = self.config.layout;
        let plan = self.plan()?;
        placements(plan, &layout)
    }
}
