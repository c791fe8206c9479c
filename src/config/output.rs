use super::traits::ConfigSection;
use crate::error::PixgeneError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub target_path: PathBuf,
    pub output_dir: PathBuf,
    /// Save the best genome every N generations; 0 disables snapshots
    pub snapshot_interval: usize,
    pub file_prefix: String,
    /// Optional JSON-lines file receiving per-generation statistics
    pub stats_file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            target_path: PathBuf::from("inputs/target.png"),
            output_dir: PathBuf::from("results"),
            snapshot_interval: 1,
            file_prefix: "result".to_string(),
            stats_file: None,
        }
    }
}

impl OutputConfig {
    /// Path of the snapshot written for `generation`: `<output_dir>/<prefix>-<generation>.png`
    pub fn snapshot_path(&self, generation: usize) -> PathBuf {
        self.output_dir
            .join(format!("{}-{}.png", self.file_prefix, generation))
    }
}

impl ConfigSection for OutputConfig {
    fn section_name() -> &'static str {
        "output"
    }

    fn validate(&self) -> Result<(), PixgeneError> {
        if self.target_path.as_os_str().is_empty() {
            return Err(PixgeneError::Configuration(
                "Target image path must not be empty".to_string(),
            ));
        }
        if self.file_prefix.is_empty() || self.file_prefix.contains(['/', '\\']) {
            return Err(PixgeneError::Configuration(format!(
                "Invalid snapshot file prefix {:?}",
                self.file_prefix
            )));
        }
        Ok(())
    }
}
