use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use signup::cli::{emit_registration, handle_validate_command, ValidateCommands};
use signup::config::{SignupPaths, Settings};

#[derive(Parser)]
#[command(
    name = "signup",
    version,
    about = "Two-step account registration wizard for the terminal",
    long_about = "sales-signup walks a new user through a two-step registration form \
                  (personal details, then account credentials), validating each step \
                  before moving on. The same rules are available non-interactively \
                  through the validate command."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive registration wizard (default)
    #[command(alias = "ui")]
    Wizard {
        /// Write the submitted registration here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check form values without the terminal UI
    #[command(subcommand)]
    Validate(ValidateCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SignupPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    let log_file = signup::logging::init(&paths)?;

    match cli.command.unwrap_or(Commands::Wizard { output: None }) {
        Commands::Wizard { output } => {
            match signup::tui::run_wizard(&settings)? {
                Some(registration) => emit_registration(&registration, output.as_deref())?,
                None => eprintln!("Registration cancelled."),
            }
        }
        Commands::Validate(cmd) => {
            handle_validate_command(cmd)?;
        }
        Commands::Config => {
            println!("sales-signup Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", log_file.display());
            println!();
            println!("Settings:");
            println!("  Focus mode:         {:?}", settings.focus_mode);
            println!("  Notification secs:  {}", settings.notification_secs);
            println!("  Mask passwords:     {}", settings.mask_passwords);
        }
    }

    Ok(())
}
