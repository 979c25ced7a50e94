//! Composition of team statistics into page rows.

use super::core::{StatsPage, StatsRow};
use crate::roster::models::Team;

impl StatsPage {
    /// Appends the full stats block for one team: headline stats, the
    /// player table sorted shortest to tallest, and the guardian list.
    pub fn add_team_stats(&mut self, team: &Team) {
        self.content_rows
            .push(StatsRow::TeamHeader(team.name.clone()));
        self.content_rows.push(StatsRow::Separator);

        self.push_stat("Total players", team.players.len().to_string());
        self.push_stat("Total experienced", team.experienced_count.to_string());
        self.push_stat("Total inexperienced", team.inexperienced_count.to_string());
        self.push_stat("Average height", format!("{}", team.average_height));

        self.content_rows.push(StatsRow::Separator);
        self.content_rows
            .push(StatsRow::Text("Players (shortest to tallest):".to_string()));
        self.content_rows.push(StatsRow::ColumnHeads);
        for player in team.players_by_height() {
            self.content_rows.push(StatsRow::PlayerRow {
                name: player.name.clone(),
                height: player.height,
                experience: player.experience,
            });
        }

        self.content_rows.push(StatsRow::Separator);
        self.content_rows
            .push(StatsRow::GuardianList(team.guardians_joined()));
    }

    fn push_stat(&mut self, label: &str, value: String) {
        self.content_rows.push(StatsRow::StatLine {
            label: label.to_string(),
            value,
        });
    }
}
