//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, GeminiConfig, LogFormat, LoggingConfig, SchedulerConfig, ServerConfig,
    API_KEY_ENV, PORT_ENV,
};
