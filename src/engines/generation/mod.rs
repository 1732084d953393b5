pub mod operators;
pub mod evolution_engine;
pub mod progress;

pub use evolution_engine::{next_generation, EvolutionEngine, EvolutionOutcome, ProgressCallback};
pub use operators::{
    crossover, generate_population, get_best_individual, maybe_mutate, random_phrase, recombine,
    tournament, DEFAULT_MUTATION_RATE, DEFAULT_TOURNAMENT_BIAS,
};
pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, ProgressMessage};
