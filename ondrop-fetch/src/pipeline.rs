//! Pipeline engine for stock lookups.
//!
//! The pipeline takes an ordered list of steps and runs every one of them,
//! feeding each step's record to the next. Nothing short-circuits: failures
//! travel downstream as data on the [`WorkingRecord`], so steps check for an
//! error or a missing response before doing their work.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::record::WorkingRecord;

// ============================================================================
// Pipeline Step Trait
// ============================================================================

/// One transformation applied to a [`WorkingRecord`].
///
/// `C` is the shared, read-only context the step may consult (for lookups,
/// the retailer and the transport). Steps must not mutate it.
///
/// ## Implementing a Step
///
/// ```ignore
/// struct MarkChecked;
///
/// #[async_trait]
/// impl PipelineStep<StepContext> for MarkChecked {
///     fn name(&self) -> &str {
///         "mark_checked"
///     }
///
///     async fn run(&self, _ctx: &StepContext, mut record: WorkingRecord) -> WorkingRecord {
///         record.in_stock.get_or_insert(false);
///         record
///     }
/// }
/// ```
#[async_trait]
pub trait PipelineStep<C>: Send + Sync
where
    C: Sync + 'static,
{
    /// Identifier used in logs (e.g. `"make_request"`).
    fn name(&self) -> &str;

    /// Transforms the record. Never fails; errors are recorded on the record.
    async fn run(&self, ctx: &C, record: WorkingRecord) -> WorkingRecord;
}

// ============================================================================
// Function Step
// ============================================================================

/// A synchronous step backed by a closure.
pub struct FnStep<F> {
    name: &'static str,
    f: F,
}

impl<F> FnStep<F> {
    /// Wraps a closure as a named pipeline step.
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

#[async_trait]
impl<C, F> PipelineStep<C> for FnStep<F>
where
    C: Sync + 'static,
    F: Fn(&C, WorkingRecord) -> WorkingRecord + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    async fn run(&self, ctx: &C, record: WorkingRecord) -> WorkingRecord {
        (self.f)(ctx, record)
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// An ordered sequence of steps, all of which always run.
pub struct Pipeline<C>
where
    C: Sync + 'static,
{
    steps: Vec<Box<dyn PipelineStep<C>>>,
}

impl<C> Pipeline<C>
where
    C: Sync + 'static,
{
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Creates a pipeline with the given steps, in order.
    pub fn with_steps(steps: Vec<Box<dyn PipelineStep<C>>>) -> Self {
        Self { steps }
    }

    /// Appends a step.
    #[must_use]
    pub fn then(mut self, step: impl PipelineStep<C> + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Appends a closure step.
    #[must_use]
    pub fn then_fn<F>(self, name: &'static str, f: F) -> Self
    where
        F: Fn(&C, WorkingRecord) -> WorkingRecord + Send + Sync + 'static,
    {
        self.then(FnStep::new(name, f))
    }

    /// Returns the number of steps in the pipeline.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the step names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Runs every step in order and returns the final record.
    #[instrument(skip_all, fields(steps = self.steps.len(), sku = %record.sku))]
    pub async fn execute(&self, ctx: &C, record: WorkingRecord) -> WorkingRecord {
        let mut record = record;

        for step in &self.steps {
            debug!(step = step.name(), "Running pipeline step");
            record = step.run(ctx, record).await;

            if let Some(error) = &record.error {
                debug!(step = step.name(), error = %error, "Carrying error downstream");
            }
        }

        record
    }
}

impl<C> Default for Pipeline<C>
where
    C: Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
