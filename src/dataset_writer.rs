use std::fs::File;
use std::io::Write;
use std::path::Path;
use log::debug;

use crate::app_config::SchemaVariant;
use crate::comment_extractor::CommentRecord;
use crate::errors::SinkError;

// @module: Tabular dataset sink

// UTF-8 byte-order marker, required for spreadsheet compatibility
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Append-only CSV sink for the corpus.
///
/// The sink is opened once per run with truncate semantics: re-running the
/// pipeline over the same inputs fully regenerates the target (last-run-wins).
/// The BOM and header row are written at open time; rows are appended in
/// visitation order and never rewritten or deduplicated.
pub struct DatasetSink {
    writer: csv::Writer<File>,
    schema: SchemaVariant,
    /// Number of translated columns each row must carry
    stage_count: usize,
}

impl DatasetSink {
    /// Create the sink, truncating any existing file, and write the header.
    ///
    /// `source_language` is the language of the raw comment column;
    /// `stage_languages` are the target languages of the pipeline stages in
    /// stage order. Column names embed the language codes, e.g. `comment_zh`.
    pub fn create<P: AsRef<Path>>(
        path: P,
        schema: SchemaVariant,
        source_language: &str,
        stage_languages: &[&str],
    ) -> Result<Self, SinkError> {
        let path = path.as_ref();

        let mut file = File::create(path).map_err(|e| SinkError::OpenFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        file.write_all(UTF8_BOM).map_err(|e| SinkError::OpenFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut sink = DatasetSink {
            writer: csv::Writer::from_writer(file),
            schema,
            stage_count: stage_languages.len(),
        };

        let header = sink.header_columns(source_language, stage_languages);
        debug!("Dataset header: {:?}", header);
        sink.writer
            .write_record(&header)
            .map_err(|e| SinkError::WriteFailed(e.to_string()))?;

        Ok(sink)
    }

    /// Column names for the configured schema variant.
    ///
    /// The kind-tracked layout puts the final stage's column directly after
    /// the source column, followed by the intermediate stages in order. That
    /// order matches the files already consumed downstream, so it is kept
    /// even though the flat layout uses plain stage order.
    fn header_columns(&self, source_language: &str, stage_languages: &[&str]) -> Vec<String> {
        let mut header = vec!["file_path".to_string(), "code".to_string()];

        match self.schema {
            SchemaVariant::Flat => {
                header.push(format!("comment_{}", source_language));
                for language in stage_languages {
                    header.push(format!("comment_{}", language));
                }
            }
            SchemaVariant::KindTracked => {
                header.push("code_comment_type".to_string());
                header.push(format!("comment_{}", source_language));
                if let Some((last, mids)) = stage_languages.split_last() {
                    header.push(format!("comment_{}", last));
                    for language in mids {
                        header.push(format!("comment_{}", language));
                    }
                }
            }
        }

        header
    }

    /// Append one row for an extracted comment.
    ///
    /// `code` repeats the unit's full source text on every row; downstream
    /// consumers expect the per-row context. `stage_outputs` must hold one
    /// string per pipeline stage, in stage order; the kind-tracked variant
    /// reorders them to match its header.
    pub fn write_row(
        &mut self,
        file_path: &str,
        code: &str,
        record: &CommentRecord,
        stage_outputs: &[String],
    ) -> Result<(), SinkError> {
        if stage_outputs.len() != self.stage_count {
            return Err(SinkError::WriteFailed(format!(
                "Expected {} stage outputs, got {}",
                self.stage_count,
                stage_outputs.len()
            )));
        }

        let mut row = vec![file_path.to_string(), code.to_string()];

        match self.schema {
            SchemaVariant::Flat => {
                row.push(record.trimmed().to_string());
                row.extend(stage_outputs.iter().cloned());
            }
            SchemaVariant::KindTracked => {
                row.push(record.kind.label().to_string());
                row.push(record.trimmed().to_string());
                if let Some((last, mids)) = stage_outputs.split_last() {
                    row.push(last.clone());
                    row.extend(mids.iter().cloned());
                }
            }
        }

        self.writer
            .write_record(&row)
            .map_err(|e| SinkError::WriteFailed(e.to_string()))
    }

    /// Flush and close the sink
    pub fn finish(mut self) -> Result<(), SinkError> {
        self.writer
            .flush()
            .map_err(|e| SinkError::WriteFailed(e.to_string()))
    }
}
