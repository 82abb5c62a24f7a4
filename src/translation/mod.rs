/*!
 * Chained, line-preserving machine translation.
 *
 * The pipeline runs a fixed, ordered sequence of translation stages; each
 * stage is fed the previous stage's output. Within a stage, text is
 * translated line by line so that indentation and blank-line structure
 * survive the round trip.
 */

pub mod line_preserving;
pub mod pipeline;

pub use line_preserving::{translate_line_preserving, LineTranslation};
pub use pipeline::TranslationPipeline;
