use anyhow::Context;
use pixgene::config::ConfigManager;
use pixgene::data::ImageCodec;
use pixgene::engines::evaluation::RunContext;
use pixgene::engines::generation::{
    ConsoleProgressCallback, EvolutionEngine, JsonStatsCallback, ProgressCallback,
    SnapshotCallback,
};
use std::env;
use std::fs::File;
use std::io::BufWriter;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional first argument: path to a TOML config; PIXGENE__* env vars override it
    let config_path = env::args().nth(1);
    let manager = ConfigManager::new();
    manager
        .load_layered(config_path.as_deref())
        .context("Failed to load configuration")?;
    let config = manager.get();

    let target = ImageCodec::load(&config.output.target_path)
        .with_context(|| format!("Failed to load target {:?}", config.output.target_path))?;
    log::info!(
        "Loaded target {:?} ({}x{})",
        config.output.target_path,
        target.width(),
        target.height()
    );
    let context = RunContext::new(target)?;

    let mut callbacks: Vec<Box<dyn ProgressCallback>> = vec![
        Box::new(ConsoleProgressCallback::default()),
        Box::new(SnapshotCallback::new(config.output.clone())),
    ];
    if let Some(path) = &config.output.stats_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create stats file {:?}", path))?;
        callbacks.push(Box::new(JsonStatsCallback::new(BufWriter::new(file))));
    }

    let mut engine = EvolutionEngine::new(config.evolution.clone(), context)
        .context("Invalid evolution configuration")?;
    let outcome = engine.run(&mut callbacks).context("Evolution run failed")?;

    let final_path = config.output.snapshot_path(outcome.stats.generation);
    ImageCodec::save(&final_path, &outcome.best)
        .with_context(|| format!("Failed to save final result {:?}", final_path))?;
    log::info!("Wrote {:?}", final_path);

    Ok(())
}
