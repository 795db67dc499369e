//! Desktop notifications.

use notify_rust::Notification;

use crate::error::{CoreError, Result};

pub const TITLE: &str = "Pomox";
pub const SOUND: &str = "Glass";
pub const END_MESSAGE: &str = "Pomodoro complete!";

const SERVICE: &str = "notifications";

pub fn start_message(duration_min: u64) -> String {
    format!("Pomodoro started ({duration_min} minutes)")
}

fn notification(title: &str, message: &str) -> Notification {
    let mut notification = Notification::new();
    notification
        .appname(TITLE)
        .summary(title)
        .body(message)
        .sound_name(SOUND);
    notification
}

/// Show a notification. Delivery blocks, so it runs off the async runtime.
pub async fn send_notification(title: &str, message: &str) -> Result<()> {
    let notification = notification(title, message);
    tokio::task::spawn_blocking(move || notification.show().map(|_| ()))
        .await
        .map_err(|e| CoreError::integration_with_source(SERVICE, "notification task failed", e))?
        .map_err(|e| CoreError::integration_with_source(SERVICE, "failed to show notification", e))
}

pub async fn notify_start(duration_min: u64) -> Result<()> {
    send_notification(TITLE, &start_message(duration_min)).await
}

pub async fn notify_end() -> Result<()> {
    send_notification(TITLE, END_MESSAGE).await
}
