//! Quit and relaunch distracting macOS apps.

use tracing::{debug, warn};

use super::shell::run_silent;

/// `pkill -f` pattern matching the app bundle's main executable.
pub fn kill_pattern(app: &str) -> String {
    format!("Contents/MacOS/{app}$")
}

/// Force-quit each app. Apps that are not running are skipped quietly.
pub async fn kill_apps(apps: &[String]) {
    for app in apps {
        let pattern = kill_pattern(app);
        if let Err(e) = run_silent("apps", "pkill", &["-9", "-f", &pattern]).await {
            debug!("{app} not killed (probably not running): {e}");
        }
    }
}

/// Relaunch each app, logging any that fail to open.
pub async fn open_apps(apps: &[String]) {
    for app in apps {
        if let Err(e) = run_silent("apps", "open", &["-a", app]).await {
            warn!("Failed to open {app}: {e}");
        }
    }
}
