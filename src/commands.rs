use crate::cli::Args;
use crate::config::Config;
use crate::constants::{self, TERMINAL_TITLE};
use crate::error::AppError;
use crate::roster::models::BalancedRoster;
use crate::roster::{balance, normalize};
use crate::stats_ui::StatsPage;
use crate::version;
use crossterm::{execute, style::Color, terminal::SetTitle};
use std::io::stdout;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.json && args.team.is_some() {
        return Err(AppError::config_error(
            "Cannot use both --json and --team; JSON output always covers every team",
        ));
    }
    Ok(())
}

/// Normalizes the built-in roster and balances it across the built-in
/// team names.
pub fn build_roster() -> Result<BalancedRoster, AppError> {
    let players = normalize(constants::default_roster())?;
    balance(&constants::default_team_names(), players)
}

/// Handles the --version command.
///
/// Displays the logo and the version status box.
pub fn handle_version_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    version::print_logo();
    version::print_version_info();

    Ok(())
}

/// Handles the --list-config command.
///
/// Displays current configuration settings with logo.
pub fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    version::print_logo();
    Config::display()?;

    Ok(())
}

/// Handles configuration update commands (--set-log-file,
/// --clear-log-file).
///
/// Updates configuration based on the provided arguments and saves
/// changes.
pub fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().unwrap_or_default();

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save()?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles the --json command: the balanced roster as a JSON object keyed
/// by team name, pretty-printed to stdout.
pub fn handle_json_command(roster: &BalancedRoster) -> Result<(), AppError> {
    let json = roster.to_json()?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

/// Handles the --once command (quick view mode).
///
/// Renders team stats once to stdout, then exits. With --team, renders
/// only the named team; an unknown name gets an error page listing the
/// valid choices.
pub fn handle_once_command(args: &Args, roster: &BalancedRoster) -> Result<(), AppError> {
    let mut page = StatsPage::new(
        "TEAM STATS",
        false, // Don't show footer in quick view mode
        true,  // Ignore height limit in quick view mode
        args.plain,
    );

    match &args.team {
        Some(name) => match roster.team(name) {
            Some(team) => page.add_team_stats(team),
            None => {
                let team_names: Vec<&str> = roster
                    .teams()
                    .iter()
                    .map(|team| team.name.as_str())
                    .collect();
                page.add_error_message(&format!("No team named '{name}'"));
                page.add_text(format!("Known teams: {}", team_names.join(", ")));
            }
        },
        None => {
            for (i, team) in roster.teams().iter().enumerate() {
                if i > 0 {
                    page.add_text("");
                }
                page.add_team_stats(team);
            }
        }
    }

    // Set terminal title for non-interactive mode
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    page.render_buffered(&mut stdout())?;
    println!(); // Add a newline at the end

    Ok(())
}

/// Renders a roster-data error (imbalance, bad height, duplicate teams)
/// as a stats page so the failure reads like the rest of the tool.
pub fn render_roster_error(error: &AppError, plain: bool) -> Result<(), AppError> {
    let mut page = StatsPage::new("ROSTER ERROR", false, true, plain);
    page.add_error_message(&error.to_string());
    page.render_buffered(&mut stdout())?;
    println!();
    Ok(())
}

/// Version status box shown when an unexpected (non-roster) error aborts
/// the run; keeps the teletext look even for failures.
pub fn print_failure_notice(error: &AppError) {
    version::print_version_status_box(vec![
        ("Courtside Status".to_string(), None),
        ("".to_string(), None),
        (format!("Error: {error}"), Some(Color::AnsiValue(196))),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_json_and_team_are_mutually_exclusive() {
        let args = Args::parse_from(["courtside", "--json", "--team", "Team A"]);
        assert!(matches!(validate_args(&args), Err(AppError::Config(_))));
    }

    #[test]
    fn test_default_args_validate() {
        let args = Args::parse_from(["courtside"]);
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_build_roster_succeeds_on_builtin_data() {
        let roster = build_roster().unwrap();
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.total_players(), 8);
    }

    #[test]
    fn test_json_output_value_covers_every_team() {
        let roster = build_roster().unwrap();
        let json = roster.to_json().unwrap();
        let object = json.as_object().unwrap();
        for name in constants::TEAM_NAMES {
            assert!(object.contains_key(name), "missing team {name}");
        }
    }
}
