use crate::constants::TERMINAL_TITLE;
use crate::error::AppError;
use crate::roster::models::BalancedRoster;
use crate::ui;
use crossterm::{
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::stdout;

/// Run the interactive application flow.
///
/// - Sets up terminal raw mode and alternate screen
/// - Runs the interactive menu UI over the balanced roster
/// - Cleans up terminal state
pub fn run_interactive(roster: &BalancedRoster) -> Result<(), AppError> {
    enable_raw_mode()?;
    let mut out = stdout();

    // Set terminal title/header to show app name
    execute!(out, SetTitle(TERMINAL_TITLE))?;

    execute!(out, EnterAlternateScreen)?;

    let result = ui::run_interactive_ui(roster);

    // Clean up terminal
    execute!(out, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    if result.is_ok() {
        println!("\nBye :)\n");
    }

    result
}
