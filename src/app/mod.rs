pub mod config;
pub mod prompt;

pub use config::AppConfig;
