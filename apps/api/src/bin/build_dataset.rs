// Batch entry point: builds the poetry fine-tuning dataset.
//
// Walks every Language × Form × Mood combination, asks the local model for
// `DATASET_SAMPLES_PER_COMBO` poems each and appends the accepted ones to
// `DATASET_PATH` as JSONL. Configuration comes from the environment (see config.rs).

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use poem_api::config::Config;
use poem_api::dataset::builder::{BatchSettings, DatasetBuilder};
use poem_api::dataset::sink::DatasetSink;
use poem_api::dataset::vocabulary::VocabularyBank;
use poem_api::llm_client::OllamaClient;
use poem_api::poetry::types::Language;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "poem_api={level},build_dataset={level}",
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let oracle = OllamaClient::new(config.ollama_url.clone(), config.oracle_timeout)?;
    let vocabulary = VocabularyBank::builtin();
    let settings = BatchSettings::from_config(&config);

    let sizes = Language::ALL
        .iter()
        .map(|l| format!("{} {}", vocabulary.words(l).map_or(0, <[String]>::len), l))
        .collect::<Vec<_>>()
        .join(", ");
    info!(
        "Target: {} samples with model {} | vocabulary: {}",
        settings.total_attempts(),
        settings.model,
        sizes
    );

    let mut sink = DatasetSink::open(&config.dataset_path).await?;
    let mut builder = DatasetBuilder::new(&oracle, &vocabulary, settings);
    let summary = builder.run(&mut sink).await?;
    sink.close().await?;

    info!(
        "Finished {}: saved {} / attempted {} (oracle errors {}, empty {}, missing words {}, other {})",
        config.dataset_path.display(),
        summary.saved,
        summary.attempted,
        summary.skipped_oracle_error,
        summary.skipped_empty,
        summary.skipped_missing_words,
        summary.skipped_other
    );

    Ok(())
}
