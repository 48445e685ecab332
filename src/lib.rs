mod config;
mod http;
mod models;
mod projection;
pub mod urls;

// Re-export main types
pub use config::{ClientConfig, ConfigError};
pub use http::{ApiError, Session, Throttle};
pub use models::{Direction, Folder, MessageThread, Profile, Question};
pub use projection::{Projectable, Projection, ToProjected};

/// Initialize the tracing subscriber for logging (only once).
pub fn init_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    });
}
