pub mod audio;
pub mod llm;
pub mod observability;
pub mod persistence;
pub mod queue;
pub mod stages;
pub mod storage;
pub mod text_processing;
