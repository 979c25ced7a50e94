//! Team balancing.
//!
//! Splits a normalized roster into equal experienced/inexperienced pools
//! and deals them out two at a time (one of each) to every team in the
//! supplied order, popping from the tail of each pool. The tail-pop order
//! is deliberate and pinned by tests: per-team rosters come out in reverse
//! input order within each round.
//!
//! When the team count does not divide the number of pairs evenly, the
//! final partial round fills only the leading teams, leaving the trailing
//! teams one pair short. That is a property of the fixed two-per-team
//! round loop, kept as-is.

use crate::constants::validation::MAX_TEAM_NAME_LENGTH;
use crate::error::AppError;
use crate::roster::models::{BalancedRoster, Player, Team};
use tracing::{debug, info};

/// Distributes `players` across `team_names` and returns the balanced
/// roster with per-team statistics.
///
/// # Errors
/// - [`AppError::NoTeams`] when `team_names` is empty
/// - [`AppError::DuplicateTeam`] when a team name repeats
/// - [`AppError::Imbalance`] when the experienced and inexperienced pools
///   differ in size; both counts are carried in the error
pub fn balance(team_names: &[String], players: Vec<Player>) -> Result<BalancedRoster, AppError> {
    validate_team_names(team_names)?;

    let total_players = players.len();
    let (mut experienced, mut inexperienced): (Vec<Player>, Vec<Player>) =
        players.into_iter().partition(|player| player.experience);

    if experienced.len() != inexperienced.len() {
        return Err(AppError::imbalance_error(
            experienced.len(),
            inexperienced.len(),
        ));
    }

    let mut teams: Vec<Team> = team_names.iter().map(Team::new).collect();

    // Deal one experienced and one inexperienced player per team per round,
    // consuming both pools from the tail, until the pools run dry. The pools
    // are the same size and shrink in lockstep, so they empty together.
    while !experienced.is_empty() {
        for team in teams.iter_mut() {
            let (Some(trained), Some(untrained)) = (experienced.pop(), inexperienced.pop()) else {
                break;
            };
            debug!(
                "Assigning '{}' and '{}' to {}",
                trained.name, untrained.name, team.name
            );
            team.players.push(trained);
            team.players.push(untrained);
        }
    }

    // Recompute every stat from the final player lists; the distribution
    // loop keeps no running counts worth trusting.
    for team in teams.iter_mut() {
        team.experienced_count = team
            .players
            .iter()
            .filter(|player| player.experience)
            .count();
        team.inexperienced_count = team.players.len() - team.experienced_count;
        team.average_height = average_height_of(&team.players);
    }

    info!(
        "Balanced {} players across {} teams",
        total_players,
        teams.len()
    );

    Ok(BalancedRoster::new(teams))
}

/// Arithmetic mean of the players' heights, rounded to 2 decimal places.
/// An empty list averages to 0 rather than failing.
pub fn average_height(players: &[Player]) -> f64 {
    average_height_of(players)
}

fn average_height_of(players: &[Player]) -> f64 {
    if players.is_empty() {
        return 0.0;
    }
    let total: u32 = players.iter().map(|player| player.height).sum();
    round_to_two_places(f64::from(total) / players.len() as f64)
}

fn round_to_two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn validate_team_names(team_names: &[String]) -> Result<(), AppError> {
    if team_names.is_empty() {
        return Err(AppError::NoTeams);
    }
    for (i, name) in team_names.iter().enumerate() {
        if name.len() > MAX_TEAM_NAME_LENGTH {
            return Err(AppError::config_error(format!(
                "Team name '{name}' exceeds {MAX_TEAM_NAME_LENGTH} characters"
            )));
        }
        if team_names[i + 1..].contains(name) {
            return Err(AppError::duplicate_team_error(name));
        }
    }
    Ok(())
}
