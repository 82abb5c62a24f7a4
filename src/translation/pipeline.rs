use anyhow::{Result, anyhow};
use log::debug;

use crate::providers::TranslationBackend;
use crate::translation::line_preserving::translate_line_preserving;

// @module: Ordered chain of translation stages

/// Output of running a block of text through every stage of the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutputs {
    /// One translated string per stage, in stage order
    pub outputs: Vec<String>,

    /// Total number of per-line failures across all stages
    pub failed_lines: usize,
}

/// A fixed, ordered chain of translation backends.
///
/// Stage 1 is fed the original text; every later stage is fed the previous
/// stage's full (indent-reconstructed) output. Stages are owned by the
/// pipeline for the duration of a run and are executed strictly
/// sequentially - no batching, no parallelism across stages or comments.
pub struct TranslationPipeline {
    stages: Vec<Box<dyn TranslationBackend>>,
}

impl TranslationPipeline {
    /// Create a pipeline from an ordered list of backends.
    ///
    /// The chain must be non-empty and linked: every stage's source language
    /// must equal the previous stage's target language.
    pub fn new(stages: Vec<Box<dyn TranslationBackend>>) -> Result<Self> {
        if stages.is_empty() {
            return Err(anyhow!("Translation pipeline must have at least one stage"));
        }

        for pair in stages.windows(2) {
            let previous = &pair[0];
            let next = &pair[1];
            if previous.target_language() != next.source_language() {
                return Err(anyhow!(
                    "Unlinked pipeline stages: {} -> {} followed by {} -> {}",
                    previous.source_language(),
                    previous.target_language(),
                    next.source_language(),
                    next.target_language()
                ));
            }
        }

        Ok(TranslationPipeline { stages })
    }

    /// Number of stages in the chain; always at least one
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Source language of the first stage
    pub fn source_language(&self) -> &str {
        self.stages[0].source_language()
    }

    /// Target language of every stage, in stage order.
    ///
    /// Used by the dataset writer to name the translated columns.
    pub fn target_languages(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.target_language()).collect()
    }

    /// Verify that every backend in the chain is reachable
    pub async fn test_connections(&self) -> Result<()> {
        for stage in &self.stages {
            stage.test_connection().await.map_err(|e| {
                anyhow!(
                    "Backend {} -> {} unavailable: {}",
                    stage.source_language(),
                    stage.target_language(),
                    e
                )
            })?;
        }
        Ok(())
    }

    /// Run a block of text through every stage, line-preserving.
    ///
    /// Returns one output string per stage, lock-step with the stage order.
    pub async fn translate_all_stages(&self, text: &str) -> StageOutputs {
        let mut outputs = Vec::with_capacity(self.stages.len());
        let mut failed_lines = 0;
        let mut current = text.to_string();

        for stage in &self.stages {
            debug!(
                "Running stage {} -> {}",
                stage.source_language(),
                stage.target_language()
            );

            let result = translate_line_preserving(&current, stage.as_ref()).await;
            failed_lines += result.failed_lines;
            current = result.text.clone();
            outputs.push(result.text);
        }

        StageOutputs {
            outputs,
            failed_lines,
        }
    }
}
