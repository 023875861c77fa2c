pub mod config;

pub use config::EvaluatorConfig;
pub use config::DEFAULT_ENDPOINT;
