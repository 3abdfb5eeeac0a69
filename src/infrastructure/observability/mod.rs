mod init_tracing;
mod tracing_config;
mod url_sanitizer;

pub use init_tracing::{WorkerProfile, default_directives, init_tracing};
pub use tracing_config::TracingConfig;
pub use url_sanitizer::redact_url;
