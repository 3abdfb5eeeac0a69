mod openai_chat_client;
mod openai_key_point_extractor;
mod openai_summarizer;

pub use openai_chat_client::OpenAiChatClient;
pub use openai_key_point_extractor::OpenAiKeyPointExtractor;
pub use openai_summarizer::OpenAiSummarizer;
