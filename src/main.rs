mod app;
mod core;
mod logger;
mod modules;
mod services;

use anyhow::Result;

use app::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let app_config = AppConfig::load(None)?;
    logger::init(&app_config.log_level);

    services::orchestrator::run(app_config).await
}
