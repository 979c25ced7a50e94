//! Raw roster cleaning.
//!
//! Converts free-form [`RawPlayer`] records into typed [`Player`] values:
//! guardian lists are split on the literal " and " separator, heights are
//! parsed from their leading integer token and experience is mapped from
//! the exact text "YES". Normalization is fail-fast: the first malformed
//! record aborts the whole pass so the program never continues with
//! partially-invalid data.

use crate::constants::validation::{MAX_PLAYER_HEIGHT, MIN_PLAYER_HEIGHT};
use crate::error::AppError;
use crate::roster::models::{Player, RawPlayer};
use tracing::warn;

/// The literal separator between guardian names in raw records.
const GUARDIAN_SEPARATOR: &str = " and ";

/// Normalizes a full roster, preserving input order.
///
/// # Errors
/// Returns [`AppError::HeightParse`] for the first record whose height
/// field has no leading integer token.
pub fn normalize(raw_players: Vec<RawPlayer>) -> Result<Vec<Player>, AppError> {
    raw_players.into_iter().map(normalize_player).collect()
}

fn normalize_player(raw: RawPlayer) -> Result<Player, AppError> {
    let height = parse_height(&raw.name, &raw.height)?;

    if !(MIN_PLAYER_HEIGHT..=MAX_PLAYER_HEIGHT).contains(&height) {
        warn!(
            "Implausible height {} inches for player '{}'",
            height, raw.name
        );
    }

    Ok(Player {
        guardians: split_guardians(&raw.guardians),
        height,
        experience: raw.experience == "YES",
        name: raw.name,
    })
}

/// Splits a joined guardian field into trimmed names. Always yields at
/// least one entry; a field without the separator is a single guardian.
fn split_guardians(guardians: &str) -> Vec<String> {
    guardians
        .split(GUARDIAN_SEPARATOR)
        .map(|name| name.trim().to_string())
        .collect()
}

/// Parses the leading integer token of a height field such as "42 inches".
/// The trailing unit text is ignored entirely.
fn parse_height(player: &str, height: &str) -> Result<u32, AppError> {
    height
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<u32>().ok())
        .ok_or_else(|| AppError::height_parse_error(player, height))
}
