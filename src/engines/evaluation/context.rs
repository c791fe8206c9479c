use crate::engines::evaluation::fitness::FitnessEvaluator;
use crate::engines::generation::genome::Genome;
use crate::error::{PixgeneError, Result};
use std::sync::Arc;

/// Immutable per-run data shared by every component: the target image and its dimensions.
///
/// Built once before generation 0 and never mutated. Cloning is cheap; the
/// target is behind an `Arc` so worker tasks can hold it without copying.
#[derive(Debug, Clone)]
pub struct RunContext {
    target: Arc<Genome>,
}

impl RunContext {
    pub fn new(target: Genome) -> Result<Self> {
        if target.pixel_count() == 0 {
            return Err(PixgeneError::Configuration(format!(
                "Target image must have at least one pixel, got {}x{}",
                target.width(),
                target.height()
            )));
        }
        Ok(Self {
            target: Arc::new(target),
        })
    }

    pub fn target(&self) -> &Genome {
        &self.target
    }

    pub fn width(&self) -> u32 {
        self.target.width()
    }

    pub fn height(&self) -> u32 {
        self.target.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.target.dimensions()
    }

    /// Score of a pixel-perfect match
    pub fn perfect_score(&self) -> f64 {
        FitnessEvaluator::worst(self.target.pixel_count())
    }

    pub fn evaluator(&self) -> FitnessEvaluator<'_> {
        FitnessEvaluator::new(&self.target)
    }
}
