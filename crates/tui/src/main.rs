mod app;
mod config;
mod error;
mod logging;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    logging::init(&config)?;
    tracing::info!(currency = %config.currency, "starting budget analysis");

    let mut app = app::App::new(config);
    app.run()?;

    tracing::info!("budget analysis closed");
    Ok(())
}
