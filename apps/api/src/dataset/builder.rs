//! Dataset Builder — walks every language × form × mood combination and turns
//! model output into training records.
//!
//! Flow per sample: sample seed words → build prompt → model call → empty check →
//!       enforce form lines → word-presence check → append record.
//!
//! Strictly sequential: one model round-trip at a time. A failed sample is
//! skipped and never retried; the run always moves on to the next sample.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::dataset::sink::{DatasetRecord, DatasetSink};
use crate::dataset::vocabulary::VocabularyBank;
use crate::llm_client::{GenerateOptions, Oracle};
use crate::poetry::generator::{generate_once, PoemError};
use crate::poetry::prompt_builder::build_poem_prompt;
use crate::poetry::types::{Language, Mood, PoeticForm, TokenBudgets};

/// Knobs for one dataset run. Defaults reproduce the standard 750-sample build.
#[derive(Debug, Clone)]
pub struct BatchSettings {
    pub model: String,
    pub languages: Vec<Language>,
    pub forms: Vec<PoeticForm>,
    pub moods: Vec<Mood>,
    pub samples_per_combo: u32,
    pub words_per_sample: usize,
    /// Samples missing more seed words than this are dropped.
    pub max_missing_words: usize,
    pub temperature: f64,
    pub top_p: f64,
    pub budgets: TokenBudgets,
    pub seed: Option<u64>,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            model: crate::config::DEFAULT_MODEL.to_string(),
            languages: Language::ALL.to_vec(),
            forms: PoeticForm::ALL.to_vec(),
            moods: Mood::ALL.to_vec(),
            samples_per_combo: 10,
            words_per_sample: 3,
            max_missing_words: 1,
            temperature: 0.8,
            top_p: 0.9,
            budgets: TokenBudgets::dataset(),
            seed: None,
        }
    }
}

impl BatchSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.dataset_model.clone(),
            samples_per_combo: config.samples_per_combo,
            seed: config.dataset_seed,
            ..Self::default()
        }
    }

    /// Upper bound on records a run can write.
    pub fn total_attempts(&self) -> usize {
        self.languages.len() * self.forms.len() * self.moods.len() * self.samples_per_combo as usize
    }
}

/// Tally of one run. `saved + skipped_* == attempted`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub attempted: usize,
    pub saved: usize,
    pub skipped_oracle_error: usize,
    pub skipped_empty: usize,
    pub skipped_missing_words: usize,
    pub skipped_other: usize,
}

pub struct DatasetBuilder<'a> {
    oracle: &'a dyn Oracle,
    vocabulary: &'a VocabularyBank,
    settings: BatchSettings,
    rng: ChaCha8Rng,
}

impl<'a> DatasetBuilder<'a> {
    pub fn new(oracle: &'a dyn Oracle, vocabulary: &'a VocabularyBank, settings: BatchSettings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        info!("Dataset word sampling seed: {seed}");
        Self {
            oracle,
            vocabulary,
            settings,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Runs every combination and appends successful samples to `sink`.
    ///
    /// Only a sink write failure aborts the run.
    pub async fn run(&mut self, sink: &mut DatasetSink) -> anyhow::Result<BatchSummary> {
        let mut summary = BatchSummary::default();
        let reps = self.settings.samples_per_combo;

        info!(
            "Starting dataset generation: {} samples ({} per Language×Form×Mood combination) -> {}",
            self.settings.total_attempts(),
            reps,
            sink.path().display()
        );

        let languages = self.settings.languages.clone();
        let forms = self.settings.forms.clone();
        let moods = self.settings.moods.clone();

        for language in &languages {
            let bank_size = self.vocabulary.words(language).map_or(0, <[String]>::len);
            info!("Processing: {language} ({bank_size} vocabulary words)");

            for form in &forms {
                for mood in &moods {
                    for i in 0..reps {
                        summary.attempted += 1;

                        match self.generate_sample(language, form, mood).await {
                            Ok(record) => {
                                sink.append(&record).await?;
                                summary.saved += 1;
                                info!(
                                    "Saved: {language} | {form} | {mood} | sample {}/{reps}",
                                    i + 1
                                );
                            }
                            Err(SampleError::Poem(e)) => {
                                match &e {
                                    PoemError::Oracle(_) => {
                                        summary.skipped_oracle_error += 1;
                                        error!(
                                            "Error generating for {language}, {form}, {mood}: {e}; skipping"
                                        );
                                    }
                                    PoemError::EmptyOutput => {
                                        summary.skipped_empty += 1;
                                        warn!("Empty poem for {language}, {form}, {mood}; skipping");
                                    }
                                    PoemError::MissingWords(missing) => {
                                        summary.skipped_missing_words += 1;
                                        warn!(
                                            "Too many missing words ({missing:?}) for {language}, {form}, {mood}; skipping"
                                        );
                                    }
                                    PoemError::NoWords => {
                                        summary.skipped_other += 1;
                                        warn!("No seed words for {language}; skipping");
                                    }
                                }
                            }
                            Err(SampleError::Vocabulary(e)) => {
                                summary.skipped_other += 1;
                                warn!("Cannot sample words for {language}: {e}; skipping");
                            }
                        }
                    }
                }
            }
        }

        info!(
            "Finished dataset generation: {} of {} samples saved",
            summary.saved, summary.attempted
        );
        Ok(summary)
    }

    async fn generate_sample(
        &mut self,
        language: &Language,
        form: &PoeticForm,
        mood: &Mood,
    ) -> Result<DatasetRecord, SampleError> {
        let words = self
            .vocabulary
            .sample(language, self.settings.words_per_sample, &mut self.rng)?;
        if words.is_empty() {
            return Err(PoemError::NoWords.into());
        }

        let instruction = build_poem_prompt(&words, language, form, mood);
        let options = GenerateOptions::new(self.settings.temperature, self.settings.top_p)
            .with_token_budget(self.settings.budgets.for_form(form));

        let result = generate_once(
            self.oracle,
            &self.settings.model,
            &instruction,
            &words,
            form,
            &options,
        )
        .await?;

        if result.missing_words.len() > self.settings.max_missing_words {
            return Err(PoemError::MissingWords(result.missing_words).into());
        }

        Ok(DatasetRecord {
            instruction,
            output: result.trimmed_text,
        })
    }
}

#[derive(Debug, thiserror::Error)]
enum SampleError {
    #[error(transparent)]
    Poem(#[from] PoemError),

    #[error(transparent)]
    Vocabulary(#[from] crate::dataset::vocabulary::VocabularyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::LlmError;

    /// Cycles through a fixed list of behaviours, one per call.
    enum Step {
        /// Echo the seed words found in the prompt, one per line, plus padding lines.
        EchoWords,
        /// Reply with text that contains none of the seed words.
        Unrelated,
        Empty,
        Refused,
    }

    struct CyclingOracle {
        steps: Vec<Step>,
        calls: AtomicUsize,
        budgets: Mutex<Vec<Option<u32>>>,
    }

    impl CyclingOracle {
        fn new(steps: Vec<Step>) -> Self {
            Self {
                steps,
                calls: AtomicUsize::new(0),
                budgets: Mutex::new(Vec::new()),
            }
        }
    }

    fn seed_words(prompt: &str) -> Vec<String> {
        prompt
            .lines()
            .find_map(|l| l.strip_prefix("Words: "))
            .map(|w| w.split(", ").map(str::to_string).collect())
            .unwrap_or_default()
    }

    #[async_trait]
    impl Oracle for CyclingOracle {
        async fn generate(
            &self,
            _model: &str,
            prompt: &str,
            options: &GenerateOptions,
        ) -> Result<String, LlmError> {
            assert_eq!(options.temperature, 0.8);
            assert_eq!(options.top_p, 0.9);
            self.budgets.lock().unwrap().push(options.token_budget);

            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            let words = seed_words(prompt);
            match self.steps[n % self.steps.len()] {
                Step::EchoWords => {
                    let mut lines = words.clone();
                    lines.extend((0..20).map(|i| format!("filler {i}")));
                    Ok(lines.join("\n"))
                }
                Step::Unrelated => Ok("zzz\nqqq".to_string()),
                Step::Empty => Ok("  ".to_string()),
                Step::Refused => Err(LlmError::Connectivity("connection refused".into())),
            }
        }
    }

    fn small_settings() -> BatchSettings {
        BatchSettings {
            languages: vec![Language::English, Language::Russian],
            forms: vec![PoeticForm::Haiku, PoeticForm::Sonnet],
            moods: vec![Mood::Nature],
            samples_per_combo: 2,
            seed: Some(11),
            ..BatchSettings::default()
        }
    }

    async fn run_with(oracle: &CyclingOracle, settings: BatchSettings) -> (BatchSummary, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.jsonl");
        let vocabulary = VocabularyBank::builtin();

        let mut sink = DatasetSink::open(&path).await.unwrap();
        let summary = DatasetBuilder::new(oracle, &vocabulary, settings)
            .run(&mut sink)
            .await
            .unwrap();
        sink.close().await.unwrap();

        (summary, std::fs::read_to_string(&path).unwrap())
    }

    #[test]
    fn test_default_run_is_750_attempts() {
        assert_eq!(BatchSettings::default().total_attempts(), 750);
    }

    #[tokio::test]
    async fn test_every_attempt_saved_when_model_cooperates() {
        let oracle = CyclingOracle::new(vec![Step::EchoWords]);
        let (summary, contents) = run_with(&oracle, small_settings()).await;

        assert_eq!(summary.attempted, 8);
        assert_eq!(summary.saved, 8);
        assert_eq!(contents.lines().count(), 8);

        for line in contents.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            let object = value.as_object().unwrap();
            assert_eq!(object.len(), 2);
            assert!(object.contains_key("instruction"));
            assert!(object.contains_key("output"));
        }
    }

    #[tokio::test]
    async fn test_outputs_are_trimmed_to_form() {
        let oracle = CyclingOracle::new(vec![Step::EchoWords]);
        let settings = BatchSettings {
            languages: vec![Language::English],
            forms: vec![PoeticForm::Haiku],
            samples_per_combo: 3,
            ..small_settings()
        };
        let (_, contents) = run_with(&oracle, settings).await;

        for line in contents.lines() {
            let record: DatasetRecord = serde_json::from_str(line).unwrap();
            assert_eq!(record.output.lines().count(), 3);
            assert!(record.instruction.contains("Poetic form: Haiku-like (3 lines)"));
        }
    }

    #[tokio::test]
    async fn test_failures_are_skipped_not_retried() {
        let oracle = CyclingOracle::new(vec![
            Step::EchoWords,
            Step::Unrelated,
            Step::Empty,
            Step::Refused,
        ]);
        let (summary, contents) = run_with(&oracle, small_settings()).await;

        assert_eq!(oracle.calls.load(Ordering::SeqCst), summary.attempted);
        assert_eq!(summary.attempted, 8);
        assert_eq!(summary.saved, 2);
        assert_eq!(summary.skipped_missing_words, 2);
        assert_eq!(summary.skipped_empty, 2);
        assert_eq!(summary.skipped_oracle_error, 2);
        assert_eq!(contents.lines().count(), summary.saved);
    }

    #[tokio::test]
    async fn test_token_budget_follows_form() {
        let oracle = CyclingOracle::new(vec![Step::EchoWords]);
        let settings = BatchSettings {
            languages: vec![Language::German],
            forms: vec![
                PoeticForm::Haiku,
                PoeticForm::Quatrain,
                PoeticForm::Couplets,
                PoeticForm::Sonnet,
                PoeticForm::FreeForm,
            ],
            samples_per_combo: 1,
            ..small_settings()
        };
        run_with(&oracle, settings).await;

        let budgets = oracle.budgets.lock().unwrap();
        assert_eq!(
            *budgets,
            vec![Some(40), Some(80), Some(100), Some(180), Some(120)]
        );
    }

    #[tokio::test]
    async fn test_language_without_bank_is_skipped() {
        let oracle = CyclingOracle::new(vec![Step::EchoWords]);
        let settings = BatchSettings {
            languages: vec![Language::Other("Elvish".into()), Language::English],
            forms: vec![PoeticForm::Quatrain],
            samples_per_combo: 1,
            ..small_settings()
        };
        let (summary, _) = run_with(&oracle, settings).await;
        assert_eq!(summary.attempted, 2);
        assert_eq!(summary.skipped_other, 1);
        assert_eq!(summary.saved, 1);
    }
}
