use anyhow::{Result, Context, anyhow};
use log::{warn, info, debug};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::comment_extractor::{CommentExtractor, SourceUnit};
use crate::dataset_writer::DatasetSink;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::providers::TranslationBackend;
use crate::providers::marian::Marian;
use crate::translation::TranslationPipeline;

// @module: Application controller for corpus building

/// Aggregated outcome of one run, reported at run end
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Source units visited and fully processed
    pub files_processed: usize,

    /// Source units skipped because they could not be decoded
    pub files_skipped: usize,

    /// Rows appended to the dataset
    pub comments_written: usize,

    /// Per-line translation failures that were substituted with the original text
    pub line_failures: usize,
}

/// Main application controller for corpus building
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Build the translation pipeline from the configured stages
    fn build_pipeline(&self) -> Result<TranslationPipeline> {
        let mut stages: Vec<Box<dyn TranslationBackend>> = Vec::new();

        for stage in &self.config.pipeline {
            let backend = Marian::new(
                &stage.endpoint,
                stage.model_or_default(),
                &stage.from,
                &stage.to,
                stage.timeout_secs,
            )?;
            stages.push(Box::new(backend));
        }

        TranslationPipeline::new(stages)
    }

    /// Run the corpus build with the configured backends.
    ///
    /// Single-file mode when `input_path` names a file, recursive-directory
    /// mode when it names a directory.
    pub async fn run(&self, input_path: PathBuf, output_path: PathBuf) -> Result<RunSummary> {
        let pipeline = self.build_pipeline()?;
        self.run_with_pipeline(input_path, output_path, &pipeline).await
    }

    /// Run the corpus build with an externally supplied pipeline.
    ///
    /// Exposed so tests can inject mock backends in place of live servers.
    pub async fn run_with_pipeline(
        &self,
        input_path: PathBuf,
        output_path: PathBuf,
        pipeline: &TranslationPipeline,
    ) -> Result<RunSummary> {
        let start_time = std::time::Instant::now();

        let source_language = self.config.source_language();
        let source_name = language_utils::get_language_name(source_language)
            .unwrap_or_else(|_| source_language.to_string());
        let final_name = language_utils::get_language_name(self.config.final_language())
            .unwrap_or_else(|_| self.config.final_language().to_string());
        info!(
            "Building corpus: {} -> {} over {} stage(s)",
            source_name,
            final_name,
            pipeline.stage_count()
        );

        let units = self.collect_units(&input_path)?;

        let mut sink = DatasetSink::create(
            &output_path,
            self.config.output.schema,
            source_language,
            &pipeline.target_languages(),
        )?;

        let extractor = CommentExtractor::new(self.config.extraction.keep_empty_comments);

        let progress = self.file_progress_bar(units.len());
        let mut summary = RunSummary::default();

        for unit_path in units {
            progress.set_message(format!("{}", unit_path.display()));

            let unit = match SourceUnit::read(&unit_path) {
                Ok(unit) => unit,
                Err(e) => {
                    warn!("Skipping unit: {}", e);
                    summary.files_skipped += 1;
                    progress.inc(1);
                    continue;
                }
            };

            let written = self
                .process_unit(&unit, &extractor, pipeline, &mut sink, &mut summary)
                .await?;
            debug!("{}: {} comment(s) written", unit.path.display(), written);

            summary.files_processed += 1;
            progress.inc(1);
        }

        progress.finish_and_clear();
        sink.finish()?;

        info!(
            "Corpus written to {:?} in {}: {} file(s) processed, {} skipped, {} row(s), {} line failure(s)",
            output_path,
            Self::format_duration(start_time.elapsed()),
            summary.files_processed,
            summary.files_skipped,
            summary.comments_written,
            summary.line_failures,
        );
        if summary.line_failures > 0 {
            warn!(
                "{} line(s) kept their untranslated text after backend failures",
                summary.line_failures
            );
        }

        Ok(summary)
    }

    /// Resolve the input path into the list of source units to visit.
    ///
    /// In directory mode only files matching the configured extension filter
    /// are visited; everything else is silently skipped.
    fn collect_units(&self, input_path: &Path) -> Result<Vec<PathBuf>> {
        if input_path.is_file() {
            Ok(vec![input_path.to_path_buf()])
        } else if input_path.is_dir() {
            let extension = &self.config.extraction.file_extension;
            let units = FileManager::find_files(input_path, extension)?;
            info!(
                "Found {} .{} file(s) under {:?}",
                units.len(),
                extension,
                input_path
            );
            Ok(units)
        } else {
            Err(anyhow!("Input path does not exist: {:?}", input_path))
        }
    }

    /// Extract, translate and append every comment of one unit.
    ///
    /// A unit with zero comments contributes zero rows; that is not an error.
    async fn process_unit(
        &self,
        unit: &SourceUnit,
        extractor: &CommentExtractor,
        pipeline: &TranslationPipeline,
        sink: &mut DatasetSink,
        summary: &mut RunSummary,
    ) -> Result<usize> {
        let records = extractor.extract_unit(unit);
        let file_path = unit.path.display().to_string();
        let mut written = 0;

        for record in &records {
            let result = pipeline.translate_all_stages(record.trimmed()).await;
            summary.line_failures += result.failed_lines;

            sink.write_row(&file_path, &unit.text, record, &result.outputs)?;
            summary.comments_written += 1;
            written += 1;
        }

        Ok(written)
    }

    fn file_progress_bar(&self, total: usize) -> ProgressBar {
        let progress = ProgressBar::new(total as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        progress
    }

    /// Format a duration as a human readable string
    fn format_duration(duration: std::time::Duration) -> String {
        let total_secs = duration.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
