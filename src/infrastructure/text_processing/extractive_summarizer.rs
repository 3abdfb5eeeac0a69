use std::collections::HashMap;

use async_trait::async_trait;

use crate::application::ports::{StageError, Summarizer};

use super::sentences::{sentence_words, split_sentences};
use super::text_sanitizer::sanitize_provider_text;

pub const EMPTY_TRANSCRIPT_SUMMARY: &str = "No text provided for summarization.";

/// Words shorter than this carry no weight when scoring sentences.
const MIN_SCORED_WORD_CHARS: usize = 3;

/// Local summarizer that keeps the highest scoring sentences of the transcript.
///
/// A sentence scores the mean document frequency of its words. The kept
/// sentences are emitted in their original order.
pub struct ExtractiveSummarizer {
    max_sentences: usize,
}

impl ExtractiveSummarizer {
    pub fn new(max_sentences: usize) -> Self {
        Self {
            max_sentences: max_sentences.max(1),
        }
    }

    pub fn summarize_text(&self, transcript: &str) -> String {
        let text = sanitize_provider_text(transcript);
        if text.is_empty() {
            return EMPTY_TRANSCRIPT_SUMMARY.to_string();
        }

        let sentences = split_sentences(&text);
        if sentences.len() <= self.max_sentences {
            return sentences.join(" ");
        }

        let tokenized: Vec<Vec<String>> = sentences.iter().map(|s| sentence_words(s)).collect();

        let mut frequencies: HashMap<&str, usize> = HashMap::new();
        for word in tokenized.iter().flatten() {
            if word.chars().count() >= MIN_SCORED_WORD_CHARS {
                *frequencies.entry(word.as_str()).or_insert(0) += 1;
            }
        }

        let mut scored: Vec<(usize, f64)> = tokenized
            .iter()
            .enumerate()
            .map(|(index, words)| {
                let total: usize = words
                    .iter()
                    .filter_map(|w| frequencies.get(w.as_str()))
                    .sum();
                let score = if words.is_empty() {
                    0.0
                } else {
                    total as f64 / words.len() as f64
                };
                (index, score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut kept: Vec<usize> = scored
            .into_iter()
            .take(self.max_sentences)
            .map(|(index, _)| index)
            .collect();
        kept.sort_unstable();

        kept.into_iter()
            .map(|index| sentences[index].as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    async fn summarize(&self, transcript: &str, _language: &str) -> Result<String, StageError> {
        Ok(self.summarize_text(transcript))
    }
}
