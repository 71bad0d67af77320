use std::sync::Arc;

use chanrelay_core::{config::Config, state::RelayState};

#[tokio::main]
async fn main() -> Result<(), chanrelay_core::Error> {
    chanrelay_core::logging::init("chanrelay")?;

    let cfg = Arc::new(Config::load()?);
    let relay = Arc::new(RelayState::new());

    chanrelay_telegram::router::run_polling(cfg, relay)
        .await
        .map_err(|e| chanrelay_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
