use serde::{Deserialize, Serialize};

/// A player record as it arrives from the outside world: every field is
/// free-form text. See [`crate::roster::normalizer::normalize`] for the
/// cleaning rules.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RawPlayer {
    pub name: String,
    /// One or more guardian names joined with the literal word "and"
    pub guardians: String,
    /// "YES" for experienced players, anything else for inexperienced
    pub experience: String,
    /// Height text such as "42 inches"
    pub height: String,
}

/// A normalized player. Created once by the normalizer and never mutated.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub guardians: Vec<String>,
    /// Height in inches
    pub height: u32,
    pub experience: bool,
}

/// A team with its assigned players and derived statistics.
///
/// `players` keeps assignment order (the order the balancer filled the
/// team), not display order. The stat fields are recomputed from the final
/// player list after distribution.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
    pub average_height: f64,
    pub experienced_count: usize,
    pub inexperienced_count: usize,
}

impl Team {
    /// Creates an empty team with zeroed stats.
    pub fn new(name: impl Into<String>) -> Self {
        Team {
            name: name.into(),
            players: Vec::new(),
            average_height: 0.0,
            experienced_count: 0,
            inexperienced_count: 0,
        }
    }

    /// Players sorted shortest to tallest, for display. Stable sort, so
    /// equal heights keep assignment order.
    pub fn players_by_height(&self) -> Vec<&Player> {
        let mut sorted: Vec<&Player> = self.players.iter().collect();
        sorted.sort_by_key(|player| player.height);
        sorted
    }

    /// All guardians of all assigned players as one comma-separated string.
    pub fn guardians_joined(&self) -> String {
        self.players
            .iter()
            .flat_map(|player| player.guardians.iter())
            .cloned()
            .collect::<Vec<String>>()
            .join(", ")
    }
}

/// The balancer's result: every supplied team, in the supplied order.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BalancedRoster {
    teams: Vec<Team>,
}

impl BalancedRoster {
    pub(crate) fn new(teams: Vec<Team>) -> Self {
        BalancedRoster { teams }
    }

    /// Teams in the order the team names were supplied to the balancer.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Looks a team up by its exact name.
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.name == name)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Total number of players across all teams.
    pub fn total_players(&self) -> usize {
        self.teams.iter().map(|team| team.players.len()).sum()
    }

    /// JSON object keyed by team name, preserving nothing of the supplied
    /// order (JSON objects are unordered); use [`Self::teams`] when order
    /// matters.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        let mut map = serde_json::Map::new();
        for team in &self.teams {
            map.insert(team.name.clone(), serde_json::to_value(team)?);
        }
        Ok(serde_json::Value::Object(map))
    }
}
