use super::genome::Genome;
use super::progress::ProgressCallback;
use crate::config::OutputConfig;
use crate::data::ImageCodec;
use crate::error::Result;
use crate::types::PopulationStats;
use std::path::PathBuf;

/// Saves the best genome of every `snapshot_interval`-th generation as
/// `<output_dir>/<file_prefix>-<generation>.png`.
pub struct SnapshotCallback {
    output: OutputConfig,
    written: Vec<PathBuf>,
}

impl SnapshotCallback {
    pub fn new(output: OutputConfig) -> Self {
        Self {
            output,
            written: Vec::new(),
        }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn due(&self, generation: usize) -> bool {
        self.output.snapshot_interval != 0 && generation % self.output.snapshot_interval == 0
    }
}

impl ProgressCallback for SnapshotCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, stats: &PopulationStats, best: &Genome) -> Result<()> {
        if !self.due(stats.generation) {
            return Ok(());
        }
        let path = self.output.snapshot_path(stats.generation);
        ImageCodec::save(&path, best)?;
        log::debug!("Saved snapshot {:?} (score {:.2})", path, stats.max);
        self.written.push(path);
        Ok(())
    }
}
