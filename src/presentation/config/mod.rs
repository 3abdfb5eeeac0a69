mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    BasicStageSettings, DatabaseSettings, DeepgramSettings, LoggingSettings, OpenAiSettings,
    ProviderSettings, RabbitMqSettings, Settings, StagingSettings, StoreProvider, WorkerSettings,
};
