pub mod fitness;

pub use fitness::{evaluate_fitness, squared_fitness};
