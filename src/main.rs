use phrasegen::config::ConfigManager;
use phrasegen::engines::generation::{ConsoleProgressCallback, EvolutionEngine};
use phrasegen::types::{Target, DEFAULT_TARGET};
use std::path::Path;

const CONFIG_FILE: &str = "phrasegen.toml";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = ConfigManager::new();
    if Path::new(CONFIG_FILE).exists() {
        manager.load_from_file(CONFIG_FILE)?;
    }

    let target = Target::new(DEFAULT_TARGET)?;
    let mut engine = EvolutionEngine::new(target, manager.get().evolution)?;
    engine.run(ConsoleProgressCallback)?;

    Ok(())
}
