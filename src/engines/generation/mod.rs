pub mod genome;
pub mod selection;
pub mod crossover;
pub mod mutation;
pub mod evolution_engine;
pub mod progress;
pub mod snapshot;

pub use genome::Genome;
pub use selection::Selector;
pub use crossover::{mate, recombine, split_channel, CROSSOVER_RATE};
pub use mutation::{mutate_population, BitFlip};
pub use evolution_engine::{EvolutionEngine, EvolutionOutcome};
pub use progress::{
    ChannelProgressCallback, ConsoleProgressCallback, JsonStatsCallback, ProgressCallback,
    ProgressMessage,
};
pub use snapshot::SnapshotCallback;
