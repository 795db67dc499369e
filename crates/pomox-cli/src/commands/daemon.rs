use pomox_core::integrations::http_client;
use pomox_core::{run_daemon, Config, CoreError, FileStore, SystemIntegrations};
use tracing::error;

pub async fn run(raw_duration: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open()?;
    let integrations = SystemIntegrations::new(http_client()?);
    let config_path = Config::path()?;

    match run_daemon(raw_duration, &config_path, &store, &integrations).await {
        Ok(()) => Ok(()),
        Err(CoreError::Validation(e)) => {
            error!("daemon refused to start: {e}");
            eprintln!("Invalid duration");
            std::process::exit(1);
        }
        Err(e) => {
            error!("daemon failed: {e}");
            Err(e.into())
        }
    }
}
