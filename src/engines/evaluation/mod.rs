pub mod context;
pub mod fitness;

pub use context::RunContext;
pub use fitness::FitnessEvaluator;
