use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(
    name = "pomox",
    version,
    about = "A pomodoro timer for macOS with Focus Mode integration"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a pomodoro timer
    Start {
        /// Duration in minutes (defaults to the configured duration)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        duration: Option<u32>,
        /// Run until the current Focusmate session ends
        #[arg(long, conflicts_with = "duration")]
        focusmate: bool,
    },
    /// Check timer status
    Status,
    /// End the current timer early
    End,
    /// Configure pomox
    Setup,
    /// Show or edit the configuration
    Config {
        #[command(subcommand)]
        action: Option<commands::config::ConfigAction>,
    },
    /// Background timer process
    #[command(hide = true)]
    Daemon {
        /// Duration in milliseconds
        #[arg(allow_hyphen_values = true)]
        duration_ms: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if matches!(cli.command, Commands::Daemon { .. }) {
        logging::init_daemon();
    } else {
        logging::init();
    }

    let result = match cli.command {
        Commands::Start {
            duration,
            focusmate,
        } => commands::start::run(duration, focusmate).await,
        Commands::Status => commands::status::run(),
        Commands::End => commands::end::run().await,
        Commands::Setup => commands::setup::run().await,
        Commands::Config { action } => commands::config::run(action),
        Commands::Daemon { duration_ms } => commands::daemon::run(&duration_ms).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
