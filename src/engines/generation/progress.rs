use super::evolution_engine::ProgressCallback;
use crate::error::Result;
use crate::types::Individual;

/// Render one progress line: population size, generation index, best individual
pub fn format_progress_line(
    population_size: usize,
    generation: usize,
    best: &Individual,
) -> Result<String> {
    Ok(format!(
        "Population size -> {}  ---  Generation -> {}  ---  Best -> {}",
        population_size,
        generation,
        serde_json::to_string(best)?
    ))
}

pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, generation: usize, population_size: usize, best: &Individual) {
        match format_progress_line(population_size, generation, best) {
            Ok(line) => println!("{}", line),
            Err(e) => log::warn!("Could not render generation {}: {}", generation, e),
        }
    }
}

// For driving the engine from another thread
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete { generation: usize, population_size: usize, best: Individual },
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, generation: usize, population_size: usize, best: &Individual) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            population_size,
            best: best.clone(),
        });
    }
}
