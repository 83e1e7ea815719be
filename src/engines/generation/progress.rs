use super::evolution_engine::{GenerationReport, ProgressCallback};
use chrono::Local;

/// Prints a line every `every` generations; 0 disables output
pub struct ConsoleProgressCallback {
    pub every: usize,
}

impl ConsoleProgressCallback {
    pub fn new(every: usize) -> Self {
        Self { every }
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, report: &GenerationReport) {
        if self.every == 0 || (report.generation % self.every != 0 && report.best_fitness != 0) {
            return;
        }
        println!(
            "{} Generation {} complete. Best fitness: {}, population best: {}{}",
            Local::now().format("%H:%M:%S"),
            report.generation,
            report.best_fitness,
            report.population_best_fitness,
            if report.recovered_failures > 0 {
                format!(", skipped attempts: {}", report.recovered_failures)
            } else {
                String::new()
            }
        );
    }
}

// For reporting to another thread or a test harness
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete(GenerationReport),
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

    fn on_generation_complete(&mut self, report: &GenerationReport) {
        let _ = self
            .sender
            .send(ProgressMessage::GenerationComplete(report.clone()));
    }
}
