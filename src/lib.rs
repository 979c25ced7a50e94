//! Basketball Team Stats Library
//!
//! This library balances a basketball roster into teams with equal
//! experienced and inexperienced player counts and renders per-team
//! statistics in a teletext-style terminal format.
//!
//! # Examples
//!
//! ```rust,no_run
//! use courtside::constants::{default_roster, default_team_names};
//! use courtside::error::AppError;
//! use courtside::roster::{balance, normalize};
//! use courtside::stats_ui::StatsPage;
//!
//! fn main() -> Result<(), AppError> {
//!     // Clean the raw records and deal them out to the teams
//!     let players = normalize(default_roster())?;
//!     let roster = balance(&default_team_names(), players)?;
//!
//!     // Create a stats page covering every team
//!     let mut page = StatsPage::new("TEAM STATS", false, true, false);
//!     for team in roster.teams() {
//!         page.add_team_stats(team);
//!     }
//!
//!     // Render the page to stdout
//!     let mut stdout = std::io::stdout();
//!     page.render_buffered(&mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod roster;
pub mod stats_ui;
pub mod ui;
pub mod version;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use roster::{BalancedRoster, Player, RawPlayer, Team, average_height, balance, normalize};
pub use stats_ui::{StatsPage, StatsRow};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
