use pomox_core::integrations::focus_mode::{
    check_shortcuts_installed, DISABLE_SHORTCUT, ENABLE_SHORTCUT,
};
use pomox_core::storage::data_dir;
use pomox_core::Config;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    data_dir()?;
    println!("Pomox Setup\n");

    if check_shortcuts_installed().await {
        println!("Focus Mode shortcuts found.\n");
    } else {
        println!("Focus Mode shortcuts not found.");
        println!("\nTo enable Focus Mode integration, create two shortcuts in the Shortcuts app:\n");
        println!("  1. \"{ENABLE_SHORTCUT}\" - Add action: \"Set Focus\" -> \"Do Not Disturb\" -> \"Turn On\"");
        println!("  2. \"{DISABLE_SHORTCUT}\" - Add action: \"Set Focus\" -> \"Do Not Disturb\" -> \"Turn Off\"");
        println!("\nAlternatively, set \"focusMode\": false in your config to disable this integration.\n");
    }

    let path = Config::path()?;
    Config::load_from(&path).save_to(&path)?;

    println!("Configuration saved to: {}", path.display());
    println!("\nEdit this file to customize:");
    println!("  - Default duration");
    println!("  - Apps to kill/reopen");
    println!("  - Slack workspaces and tokens");
    println!("  - Focusmate API key");
    println!("  - Shell commands to run on start/end");
    println!("\nExample config structure:");
    println!("{}", serde_json::to_string_pretty(&Config::default())?);
    Ok(())
}
