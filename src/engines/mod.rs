pub mod evaluation;
pub mod generation;
