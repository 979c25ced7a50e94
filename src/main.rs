// src/main.rs
use clap::Parser;
use courtside::app;
use courtside::cli::Args;
use courtside::commands;
use courtside::error::AppError;
use courtside::logging;
use tracing::{error, info};

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    commands::validate_args(&args)?;

    // Handle version and configuration operations before logging setup;
    // they print straight to stdout and exit.
    if args.version {
        return commands::handle_version_command();
    }

    if args.list_config {
        return commands::handle_list_config_command();
    }

    if args.new_log_file_path.is_some() || args.clear_log_file_path {
        return commands::handle_config_update_command(&args);
    }

    // Set up logging to file (and stdout in debug mode). The guard must
    // stay alive for the duration of the program.
    let (log_file_path, _guard) = logging::setup_logging(&args)?;
    info!("Logs are being written to: {log_file_path}");

    // Normalize and balance the built-in roster up front so data errors
    // surface before any screen is taken over.
    let roster = match commands::build_roster() {
        Ok(roster) => roster,
        Err(e) if e.is_roster_error() => {
            error!("Roster data error: {e}");
            commands::render_roster_error(&e, args.plain)?;
            return Err(e);
        }
        Err(e) => {
            error!("Startup failed: {e}");
            commands::print_failure_notice(&e);
            return Err(e);
        }
    };

    if args.json {
        return commands::handle_json_command(&roster);
    }

    if args.once || args.team.is_some() || args.debug {
        return commands::handle_once_command(&args, &roster);
    }

    // Interactive mode
    app::run_interactive(&roster)
}
