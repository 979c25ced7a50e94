//! Application-wide constants and the built-in roster data
//!
//! This module centralizes layout constants, validation limits and the
//! default roster the tool operates on. The roster lives here as in-memory
//! constants; there is no roster file format.

use crate::roster::models::RawPlayer;

/// Teletext page number shown in the header (YLE-style sports page numbering)
pub const PAGE_NUMBER: u16 = 235;

/// Header title shown on every page
pub const PAGE_TITLE: &str = "BASKETBALL";

/// Terminal window title
pub const TERMINAL_TITLE: &str = "COURTSIDE 235";

/// Default team names, in distribution order.
pub const TEAM_NAMES: [&str; 4] = ["Team A", "Team B", "Team C", "Team D"];

/// Raw roster records as they would arrive from an external source:
/// guardians joined with " and ", heights as "<n> inches" strings,
/// experience as "YES"/"NO".
pub const PLAYERS: [(&str, &str, &str, &str); 8] = [
    // (name, guardians, experience, height)
    ("Karl Saygan", "Heather Bledsoe", "YES", "42 inches"),
    ("Matt Gill", "Charles Gill and Sylvia Gill", "NO", "40 inches"),
    ("Sammy Adams", "Jeff Adams and Gary Adams", "NO", "45 inches"),
    ("Chloe Alaska", "David Alaska and Jamie Alaska", "NO", "47 inches"),
    ("Bill Bon", "Sara Bon and Jenny Bon", "YES", "43 inches"),
    ("Joe Kavalier", "Sam Kavalier and Elaine Kavalier", "YES", "39 inches"),
    ("Phillip Helm", "Thomas Helm and Eva Jones", "NO", "44 inches"),
    ("Les Clay", "Wynonna Brown", "YES", "42 inches"),
];

/// Builds the default roster as owned raw records.
pub fn default_roster() -> Vec<RawPlayer> {
    PLAYERS
        .iter()
        .map(|(name, guardians, experience, height)| RawPlayer {
            name: (*name).to_string(),
            guardians: (*guardians).to_string(),
            experience: (*experience).to_string(),
            height: (*height).to_string(),
        })
        .collect()
}

/// Builds the default team name list as owned strings.
pub fn default_team_names() -> Vec<String> {
    TEAM_NAMES.iter().map(|name| (*name).to_string()).collect()
}

/// UI layout constants
pub mod ui {
    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Width of the name column of the player table
    pub const PLAYER_NAME_WIDTH: usize = 20;

    /// Width of the height column of the player table
    pub const PLAYER_HEIGHT_WIDTH: usize = 6;

    /// Width of horizontal rule rows
    pub const SEPARATOR_WIDTH: usize = 46;

    /// Maximum content lines per page before pagination
    pub const MAX_LINES_PER_PAGE: usize = 20;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "COURTSIDE_LOG_FILE";
}

/// Validation limits
pub mod validation {
    /// Shortest plausible player height in inches; shorter values log a warning
    pub const MIN_PLAYER_HEIGHT: u32 = 24;

    /// Tallest plausible player height in inches; taller values log a warning
    pub const MAX_PLAYER_HEIGHT: u32 = 90;

    /// Maximum length for team names
    pub const MAX_TEAM_NAME_LENGTH: usize = 50;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_matches_static_table() {
        let roster = default_roster();
        assert_eq!(roster.len(), PLAYERS.len());
        assert_eq!(roster[0].name, "Karl Saygan");
        assert_eq!(roster[0].guardians, "Heather Bledsoe");
        assert_eq!(roster[0].experience, "YES");
        assert_eq!(roster[0].height, "42 inches");
    }

    #[test]
    fn test_default_roster_is_balanced() {
        // The shipped roster must satisfy the balancer precondition
        let experienced = PLAYERS.iter().filter(|(_, _, e, _)| *e == "YES").count();
        let inexperienced = PLAYERS.len() - experienced;
        assert_eq!(experienced, inexperienced);
    }

    #[test]
    fn test_default_team_names_are_unique() {
        let names = default_team_names();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate team name {name}");
            assert!(name.len() <= validation::MAX_TEAM_NAME_LENGTH);
        }
    }

    #[test]
    fn test_validation_constants_are_reasonable() {
        assert!(validation::MIN_PLAYER_HEIGHT < validation::MAX_PLAYER_HEIGHT);
        assert!(validation::MAX_TEAM_NAME_LENGTH > 0);
    }

    #[test]
    fn test_ui_constants_are_reasonable() {
        assert!(ui::PLAYER_NAME_WIDTH > 0);
        assert!(ui::SEPARATOR_WIDTH > ui::PLAYER_NAME_WIDTH + ui::PLAYER_HEIGHT_WIDTH);
        assert!(ui::MAX_LINES_PER_PAGE > 5);
    }
}
