use chrono::Utc;
use pomox_core::integrations::http_client;
use pomox_core::timer::{format_duration, remaining_time};
use pomox_core::{Config, FocusmateClient, RemainingTime, TimerPlan};

pub async fn run(duration: Option<u32>, focusmate: bool) -> Result<(), Box<dyn std::error::Error>> {
    let controller = super::controller()?;
    let now = Utc::now();

    let state = controller.state();
    if state.active {
        let remaining = remaining_time(&state, now).unwrap_or(RemainingTime::ZERO);
        println!("Pomodoro already active - {remaining} remaining");
        println!("Run \"pomox end\" to end early.");
        std::process::exit(1);
    }

    let config = Config::load();
    let (plan, message) = if focusmate {
        let client = FocusmateClient::new(http_client()?, &config.integrations.focusmate);
        let session = client.active_session(now).await?;
        let plan = TimerPlan::from_session(&session)?;
        let message = format!(
            "Joined Focusmate session ({} remaining)",
            format_duration(plan.duration_ms)
        );
        (plan, message)
    } else {
        let minutes = duration.unwrap_or(config.duration);
        let plan = TimerPlan::minutes(now, minutes)?;
        (plan, format!("Pomodoro started ({minutes} minutes)"))
    };

    controller.start(now, plan)?;
    println!("{message}");
    Ok(())
}
