use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (render team stats once and exit)
/// - --json flag is set (machine-readable output)
/// - --team is given (implies a one-shot stats view)
/// - config operations are requested
/// - --version flag is set
/// - --debug mode is enabled (debug mode always runs once and exits)
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once
        || args.json
        || args.team.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || args.version
        || args.debug
}

/// Basketball Team Stats Tool
///
/// Balances a basketball roster into teams with equal experienced and
/// inexperienced player counts, then shows per-team statistics with
/// authentic teletext aesthetics.
///
/// In interactive mode (default):
/// - Press the shown letter (A, B, C, ...) to select a menu option
/// - Use arrow keys (←/→) on a team page to move between teams
/// - Press Esc to go back, 'q' to quit
#[derive(Parser, Debug)]
#[command(author = "Courtside contributors", about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show every team's stats once and exit immediately. Useful for
    /// scripts or quick checks. The output stays visible in terminal
    /// history.
    #[arg(short, long)]
    pub once: bool,

    /// Restrict output to a single team by exact name. Implies --once.
    #[arg(short = 't', long = "team", help_heading = "Display Options")]
    pub team: Option<String>,

    /// Print the balanced roster as JSON to stdout and exit. The output is
    /// an object keyed by team name.
    #[arg(short = 'j', long = "json", help_heading = "Display Options")]
    pub json: bool,

    /// Disable ANSI colors in non-interactive output.
    /// Useful for plain text pipelines or terminals without color support.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Update log file path in config. This sets a persistent custom log
    /// file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using
    /// the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode: renders once without entering the alternate
    /// screen and mirrors info logs to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path for this run only. If not provided,
    /// logs will be written to the configured or default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
