mod extractive_summarizer;
mod sentence_key_point_extractor;
mod sentences;
mod text_sanitizer;

pub use extractive_summarizer::{EMPTY_TRANSCRIPT_SUMMARY, ExtractiveSummarizer};
pub use sentence_key_point_extractor::SentenceKeyPointExtractor;
pub use sentences::split_sentences;
pub use text_sanitizer::sanitize_provider_text;
