use clap::Subcommand;
use pomox_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Dot-separated key (e.g. "duration", "integrations.focusMode")
        key: String,
    },
    /// Set a config value and save
    Set {
        /// Dot-separated key
        key: String,
        /// New value
        value: String,
    },
    /// Print the config file path
    Path,
}

pub fn run(action: Option<ConfigAction>) -> Result<(), Box<dyn std::error::Error>> {
    let path = Config::path()?;

    match action {
        None => {
            let config = Config::load_from(&path);
            println!("Config file: {}\n", path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Some(ConfigAction::Get { key }) => {
            let config = Config::load_from(&path);
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        Some(ConfigAction::Set { key, value }) => {
            let mut config = Config::load_from(&path);
            config.set(&key, &value)?;
            config.save_to(&path)?;
            println!("ok");
        }
        Some(ConfigAction::Path) => println!("{}", path.display()),
    }
    Ok(())
}
