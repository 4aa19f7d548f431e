use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "focus-cli", version, about = "FOCUS productivity timer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Streak and daily-session statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Session-goal checklist
    Goals {
        #[command(subcommand)]
        action: commands::goals::GoalsAction,
    },
    /// Ambient music selection
    Sounds {
        #[command(subcommand)]
        action: commands::sounds::SoundsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Goals { action } => commands::goals::run(action),
        Commands::Sounds { action } => commands::sounds::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
