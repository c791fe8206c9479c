use super::evolution_engine::EvolutionOutcome;
use super::genome::Genome;
use crate::error::Result;
use crate::types::PopulationStats;
use std::io::Write;
use std::sync::mpsc::Sender;
use std::time::Instant;

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);

    /// Called after a generation has been scored, with the best genome of that generation.
    /// An error aborts the run.
    fn on_generation_complete(&mut self, stats: &PopulationStats, best: &Genome) -> Result<()>;

    fn on_run_complete(&mut self, _outcome: &EvolutionOutcome) {}
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for Box<C> {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation)
    }

    fn on_generation_complete(&mut self, stats: &PopulationStats, best: &Genome) -> Result<()> {
        (**self).on_generation_complete(stats, best)
    }

    fn on_run_complete(&mut self, outcome: &EvolutionOutcome) {
        (**self).on_run_complete(outcome)
    }
}

/// Fans every event out to each callback in order
impl<C: ProgressCallback> ProgressCallback for Vec<C> {
    fn on_generation_start(&mut self, generation: usize) {
        for callback in self.iter_mut() {
            callback.on_generation_start(generation);
        }
    }

    fn on_generation_complete(&mut self, stats: &PopulationStats, best: &Genome) -> Result<()> {
        for callback in self.iter_mut() {
            callback.on_generation_complete(stats, best)?;
        }
        Ok(())
    }

    fn on_run_complete(&mut self, outcome: &EvolutionOutcome) {
        for callback in self.iter_mut() {
            callback.on_run_complete(outcome);
        }
    }
}

/// Logs generation summaries through `log`
pub struct ConsoleProgressCallback {
    start_time: Instant,
    /// Log every N generations
    every: usize,
}

impl ConsoleProgressCallback {
    pub fn new(every: usize) -> Self {
        Self {
            start_time: Instant::now(),
            every: every.max(1),
        }
    }
}

impl Default for ConsoleProgressCallback {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {} starting...", generation);
    }

    fn on_generation_complete(&mut self, stats: &PopulationStats, _best: &Genome) -> Result<()> {
        if stats.generation % self.every == 0 {
            log::info!(
                "{}). AVG: {:.2} MAX: {:.2} MIN: {:.2} ({:.2}s)",
                stats.generation,
                stats.mean,
                stats.max,
                stats.min,
                self.start_time.elapsed().as_secs_f64()
            );
        }
        Ok(())
    }

    fn on_run_complete(&mut self, outcome: &EvolutionOutcome) {
        log::info!(
            "Finished {} generations in {:.2}s. Best: {:.2} (AVG {:.2})",
            outcome.stats.generation,
            self.start_time.elapsed().as_secs_f64(),
            outcome.stats.max,
            outcome.stats.mean
        );
    }
}

// For handing progress to another thread
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete(PopulationStats),
    RunComplete(PopulationStats),
}

pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, stats: &PopulationStats, _best: &Genome) -> Result<()> {
        let _ = self
            .sender
            .send(ProgressMessage::GenerationComplete(stats.clone()));
        Ok(())
    }

    fn on_run_complete(&mut self, outcome: &EvolutionOutcome) {
        let _ = self
            .sender
            .send(ProgressMessage::RunComplete(outcome.stats.clone()));
    }
}

/// Writes one JSON object per generation (`PopulationStats`) to `writer`
pub struct JsonStatsCallback<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> JsonStatsCallback<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> ProgressCallback for JsonStatsCallback<W> {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, stats: &PopulationStats, _best: &Genome) -> Result<()> {
        serde_json::to_writer(&mut self.writer, stats)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn on_run_complete(&mut self, outcome: &EvolutionOutcome) {
        let written = serde_json::to_writer(&mut self.writer, &outcome.stats)
            .map_err(std::io::Error::from)
            .and_then(|_| self.writer.write_all(b"\n"))
            .and_then(|_| self.writer.flush());
        if let Err(e) = written {
            log::warn!("Failed to write final statistics: {}", e);
        }
    }
}
