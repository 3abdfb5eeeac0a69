use std::sync::Arc;

use crate::application::ports::{KeyPointExtractor, SpeechToText, Summarizer};
use crate::domain::UserPlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeechToTextStrategy {
    English,
    Arabic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummarizationStrategy {
    Basic,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPointStrategy {
    Basic,
    Advanced,
}

/// Which provider variant runs each stage of one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StageSelection {
    pub speech_to_text: SpeechToTextStrategy,
    pub summarization: SummarizationStrategy,
    pub key_points: KeyPointStrategy,
}

const LANGUAGE_TABLE: &[(&str, SpeechToTextStrategy)] = &[("ar", SpeechToTextStrategy::Arabic)];
const DEFAULT_SPEECH_TO_TEXT: SpeechToTextStrategy = SpeechToTextStrategy::English;

const PLAN_TABLE: &[(UserPlan, SummarizationStrategy, KeyPointStrategy)] = &[
    (
        UserPlan::Basic,
        SummarizationStrategy::Basic,
        KeyPointStrategy::Basic,
    ),
    (
        UserPlan::Premium,
        SummarizationStrategy::Advanced,
        KeyPointStrategy::Advanced,
    ),
];

impl StageSelection {
    /// Table lookup. Languages are matched on their primary subtag; anything
    /// not in the table falls back to the default entry.
    pub fn for_job(language: &str, plan: UserPlan) -> Self {
        let primary = primary_subtag(language);
        let speech_to_text = LANGUAGE_TABLE
            .iter()
            .find(|(code, _)| *code == primary)
            .map(|(_, strategy)| *strategy)
            .unwrap_or(DEFAULT_SPEECH_TO_TEXT);

        let (summarization, key_points) = PLAN_TABLE
            .iter()
            .find(|(entry, _, _)| *entry == plan)
            .map(|(_, summarization, key_points)| (*summarization, *key_points))
            .unwrap_or((SummarizationStrategy::Basic, KeyPointStrategy::Basic));

        Self {
            speech_to_text,
            summarization,
            key_points,
        }
    }
}

fn primary_subtag(language: &str) -> String {
    language
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// One concrete implementation per strategy variant.
#[derive(Clone)]
pub struct StageProviders {
    pub english_speech_to_text: Arc<dyn SpeechToText>,
    pub arabic_speech_to_text: Arc<dyn SpeechToText>,
    pub basic_summarizer: Arc<dyn Summarizer>,
    pub advanced_summarizer: Arc<dyn Summarizer>,
    pub basic_key_points: Arc<dyn KeyPointExtractor>,
    pub advanced_key_points: Arc<dyn KeyPointExtractor>,
}

/// Stage implementations chosen for one job.
#[derive(Clone)]
pub struct PipelineStages {
    pub selection: StageSelection,
    pub speech_to_text: Arc<dyn SpeechToText>,
    pub summarizer: Arc<dyn Summarizer>,
    pub key_point_extractor: Arc<dyn KeyPointExtractor>,
}

pub struct StrategyRegistry {
    providers: StageProviders,
}

impl StrategyRegistry {
    pub fn new(providers: StageProviders) -> Self {
        Self { providers }
    }

    pub fn select(&self, language: &str, plan: UserPlan) -> PipelineStages {
        self.resolve(StageSelection::for_job(language, plan))
    }

    pub fn resolve(&self, selection: StageSelection) -> PipelineStages {
        let speech_to_text = match selection.speech_to_text {
            SpeechToTextStrategy::English => Arc::clone(&self.providers.english_speech_to_text),
            SpeechToTextStrategy::Arabic => Arc::clone(&self.providers.arabic_speech_to_text),
        };
        let summarizer = match selection.summarization {
            SummarizationStrategy::Basic => Arc::clone(&self.providers.basic_summarizer),
            SummarizationStrategy::Advanced => Arc::clone(&self.providers.advanced_summarizer),
        };
        let key_point_extractor = match selection.key_points {
            KeyPointStrategy::Basic => Arc::clone(&self.providers.basic_key_points),
            KeyPointStrategy::Advanced => Arc::clone(&self.providers.advanced_key_points),
        };

        PipelineStages {
            selection,
            speech_to_text,
            summarizer,
            key_point_extractor,
        }
    }
}
