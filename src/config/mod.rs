pub mod traits;
pub mod evolution;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use traits::ConfigSection;
