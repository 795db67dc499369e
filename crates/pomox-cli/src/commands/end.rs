use pomox_core::integrations::http_client;
use pomox_core::{Config, SystemIntegrations};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let controller = super::controller()?;
    if !controller.state().active {
        println!("No active pomodoro");
        return Ok(());
    }

    let config = Config::load();
    let integrations = SystemIntegrations::new(http_client()?);
    controller.end(&config, &integrations).await?;
    println!("Pomodoro ended");
    Ok(())
}
