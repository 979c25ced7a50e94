use courtside::{
    StatsPage,
    constants::{default_roster, default_team_names},
    roster::{BalancedRoster, balance, normalize},
};

fn balanced() -> BalancedRoster {
    let players = normalize(default_roster()).unwrap();
    balance(&default_team_names(), players).unwrap()
}

/// The player table sorts shortest to tallest at display time while the
/// stored team keeps assignment order.
#[test]
fn test_player_table_is_sorted_by_height() {
    let roster = balanced();

    for team in roster.teams() {
        let mut page = StatsPage::new(team.name.to_uppercase(), false, true, true);
        page.add_team_stats(team);
        let buffer = page.build_buffer(80);

        let mut last_position = 0;
        for player in team.players_by_height() {
            let position = buffer
                .find(&player.name)
                .unwrap_or_else(|| panic!("{} missing from page", player.name));
            assert!(
                position > last_position,
                "{} out of height order in team {}",
                player.name,
                team.name
            );
            last_position = position;
        }
    }
}

/// Stat lines carry the values recomputed by the balancer post-pass.
#[test]
fn test_stat_lines_match_team_stats() {
    let roster = balanced();
    let team = roster.team("Team A").unwrap();

    let mut page = StatsPage::new("TEAM A", false, true, true);
    page.add_team_stats(team);
    let buffer = page.build_buffer(80);

    assert!(buffer.contains(&format!("Total players:        {}", team.players.len())));
    assert!(buffer.contains(&format!("Total experienced:    {}", team.experienced_count)));
    assert!(buffer.contains(&format!(
        "Total inexperienced:  {}",
        team.inexperienced_count
    )));
    assert!(buffer.contains(&format!("Average height:       {}", team.average_height)));
}

/// Experience text matches the boolean, not the raw YES/NO field.
#[test]
fn test_experience_labels() {
    let roster = balanced();
    let team = roster.team("Team B").unwrap();

    let mut page = StatsPage::new("TEAM B", false, true, true);
    page.add_team_stats(team);
    let buffer = page.build_buffer(80);

    let experienced = buffer.matches("| Experienced").count();
    let inexperienced = buffer.matches("| Inexperienced").count();
    assert_eq!(experienced, team.experienced_count);
    assert_eq!(inexperienced, team.inexperienced_count);
}

/// Guardian lists flatten every guardian of every player on the team.
#[test]
fn test_guardian_list_contents() {
    let roster = balanced();

    for team in roster.teams() {
        let mut page = StatsPage::new(team.name.to_uppercase(), false, true, true);
        page.add_team_stats(team);
        let buffer = page.build_buffer(80);

        for player in &team.players {
            for guardian in &player.guardians {
                assert!(
                    buffer.contains(guardian.as_str()),
                    "guardian {guardian} missing from team {}",
                    team.name
                );
            }
        }
    }
}

/// Colored output brackets every row with a reset.
#[test]
fn test_colored_output_resets_after_rows() {
    let roster = balanced();
    let team = roster.team("Team C").unwrap();

    let mut page = StatsPage::new("TEAM C", false, true, false);
    page.add_team_stats(team);
    let buffer = page.build_buffer(80);

    assert!(buffer.contains("\x1b[38;5;"));
    // Every content line plus the header and subheader closes its colors
    let resets = buffer.matches("\x1b[0m").count();
    let content_lines = buffer.lines().count();
    assert!(
        resets >= content_lines - 1,
        "{resets} resets for {content_lines} lines"
    );
}
