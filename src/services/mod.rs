pub mod downloader;
pub mod orchestrator;
