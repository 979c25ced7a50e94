//! Interactive menu loop.
//!
//! Three views driven by keyboard events: the main menu, the
//! letter-indexed team menu and the per-team stats view. The loop is an
//! explicit, unbounded retry: invalid selections set a warning line on the
//! current page and render again, they never recurse.

use crate::error::AppError;
use crate::roster::models::BalancedRoster;
use crate::stats_ui::StatsPage;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io::stdout;
use tracing::{debug, info};

/// Menu letters are single ASCII capitals, so only this many teams are
/// selectable from the team menu.
const MAX_MENU_ENTRIES: usize = 26;

/// The view currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    MainMenu,
    TeamMenu,
    TeamStats(usize),
}

/// Result of applying one key press to a view.
#[derive(Debug, PartialEq, Eq)]
enum Transition {
    Quit,
    Stay,
    Switch(View),
    Warn(String),
    PageNext,
    PagePrev,
}

/// Runs the interactive UI until the user quits.
///
/// The caller is responsible for terminal setup and teardown (raw mode,
/// alternate screen); see [`crate::app::run_interactive`].
pub fn run_interactive_ui(roster: &BalancedRoster) -> Result<(), AppError> {
    let mut view = View::MainMenu;
    let mut page = build_page(roster, view);
    let mut stdout = stdout();

    loop {
        page.render_buffered(&mut stdout)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                debug!("Key event: {:?}", key.code);
                match apply_key(view, key.code, roster.len()) {
                    Transition::Quit => {
                        info!("Quit requested");
                        return Ok(());
                    }
                    Transition::Stay => {}
                    Transition::Switch(next) => {
                        debug!("View change: {:?} -> {:?}", view, next);
                        view = next;
                        page = build_page(roster, view);
                    }
                    Transition::Warn(message) => {
                        debug!("Invalid selection: {message}");
                        page.set_warning(message);
                    }
                    Transition::PageNext => page.next_page(),
                    Transition::PagePrev => page.previous_page(),
                }
            }
            Event::Resize(..) => page.handle_resize(),
            _ => {}
        }
    }
}

/// Pure view-transition logic, separated from terminal I/O for testing.
fn apply_key(view: View, code: KeyCode, team_count: usize) -> Transition {
    if code == KeyCode::Char('q') {
        return Transition::Quit;
    }

    match view {
        View::MainMenu => match code {
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'a') => Transition::Switch(View::TeamMenu),
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'b') => Transition::Quit,
            KeyCode::Char(c) => Transition::Warn(invalid_selection(c)),
            _ => Transition::Stay,
        },
        View::TeamMenu => match code {
            KeyCode::Esc => Transition::Switch(View::MainMenu),
            KeyCode::Char(c) => match letter_index(c) {
                Some(index) if index < team_count.min(MAX_MENU_ENTRIES) => {
                    Transition::Switch(View::TeamStats(index))
                }
                _ => Transition::Warn(invalid_selection(c)),
            },
            _ => Transition::Stay,
        },
        View::TeamStats(index) => match code {
            KeyCode::Esc | KeyCode::Enter => Transition::Switch(View::TeamMenu),
            KeyCode::Left => {
                let previous = index.checked_sub(1).unwrap_or(team_count - 1);
                Transition::Switch(View::TeamStats(previous))
            }
            KeyCode::Right => Transition::Switch(View::TeamStats((index + 1) % team_count)),
            KeyCode::Up => Transition::PagePrev,
            KeyCode::Down => Transition::PageNext,
            _ => Transition::Stay,
        },
    }
}

/// Maps a menu letter to its option index: 'a'/'A' is 0, 'b'/'B' is 1
/// and so on.
fn letter_index(c: char) -> Option<usize> {
    c.is_ascii_alphabetic()
        .then(|| (c.to_ascii_lowercase() as u8 - b'a') as usize)
}

fn invalid_selection(c: char) -> String {
    format!("'{c}' is invalid. Enter a menu option.")
}

/// Builds the page for a view from the balanced roster.
fn build_page(roster: &BalancedRoster, view: View) -> StatsPage {
    match view {
        View::MainMenu => {
            let mut page = StatsPage::new("MAIN MENU", true, false, false);
            page.add_text("Here are your choices:");
            page.add_text("");
            page.add_menu_item('A', "Display Team Stats");
            page.add_menu_item('B', "Quit");
            page.set_footer_controls("A-B=Select q=Quit");
            page
        }
        View::TeamMenu => {
            let mut page = StatsPage::new("SELECT TEAM", true, false, false);
            page.add_text("Here are your choices:");
            page.add_text("");
            for (i, team) in roster.teams().iter().take(MAX_MENU_ENTRIES).enumerate() {
                page.add_menu_item(char::from(b'A' + i as u8), team.name.clone());
            }
            let last_letter = char::from(b'A' + (roster.len().min(MAX_MENU_ENTRIES) - 1) as u8);
            page.set_footer_controls(format!("A-{last_letter}=Team Esc=Back q=Quit"));
            page
        }
        View::TeamStats(index) => {
            let team = &roster.teams()[index];
            let mut page = StatsPage::new(team.name.to_uppercase(), true, false, false);
            page.add_team_stats(team);
            page.set_footer_controls("←→=Team Esc=Back q=Quit");
            page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{default_roster, default_team_names};
    use crate::roster::{balance, normalize};

    fn roster() -> BalancedRoster {
        balance(&default_team_names(), normalize(default_roster()).unwrap()).unwrap()
    }

    #[test]
    fn test_letter_index() {
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('A'), Some(0));
        assert_eq!(letter_index('d'), Some(3));
        assert_eq!(letter_index('1'), None);
        assert_eq!(letter_index('!'), None);
    }

    #[test]
    fn test_q_quits_from_every_view() {
        for view in [View::MainMenu, View::TeamMenu, View::TeamStats(2)] {
            assert_eq!(apply_key(view, KeyCode::Char('q'), 4), Transition::Quit);
        }
    }

    #[test]
    fn test_main_menu_selections() {
        assert_eq!(
            apply_key(View::MainMenu, KeyCode::Char('a'), 4),
            Transition::Switch(View::TeamMenu)
        );
        assert_eq!(
            apply_key(View::MainMenu, KeyCode::Char('B'), 4),
            Transition::Quit
        );
    }

    #[test]
    fn test_invalid_main_menu_selection_warns_and_names_input() {
        let transition = apply_key(View::MainMenu, KeyCode::Char('z'), 4);
        assert_eq!(
            transition,
            Transition::Warn("'z' is invalid. Enter a menu option.".to_string())
        );
    }

    #[test]
    fn test_team_menu_letter_selection() {
        assert_eq!(
            apply_key(View::TeamMenu, KeyCode::Char('c'), 4),
            Transition::Switch(View::TeamStats(2))
        );
        // Letter beyond the team list is invalid, not a crash
        assert!(matches!(
            apply_key(View::TeamMenu, KeyCode::Char('e'), 4),
            Transition::Warn(_)
        ));
        assert_eq!(
            apply_key(View::TeamMenu, KeyCode::Esc, 4),
            Transition::Switch(View::MainMenu)
        );
    }

    #[test]
    fn test_team_stats_navigation_wraps() {
        assert_eq!(
            apply_key(View::TeamStats(0), KeyCode::Left, 4),
            Transition::Switch(View::TeamStats(3))
        );
        assert_eq!(
            apply_key(View::TeamStats(3), KeyCode::Right, 4),
            Transition::Switch(View::TeamStats(0))
        );
        assert_eq!(
            apply_key(View::TeamStats(1), KeyCode::Esc, 4),
            Transition::Switch(View::TeamMenu)
        );
    }

    #[test]
    fn test_main_menu_page_contents() {
        let mut page = build_page(&roster(), View::MainMenu);
        page.set_screen_height(30);
        let buffer = page.build_buffer(80);
        // Key letters and labels are separated by color codes
        assert!(buffer.contains("Display Team Stats"));
        assert!(buffer.contains(") Quit"));
        assert!(buffer.contains("MAIN MENU"));
    }

    #[test]
    fn test_team_menu_lists_teams_in_supplied_order() {
        let mut page = build_page(&roster(), View::TeamMenu);
        page.set_screen_height(30);
        let buffer = page.build_buffer(80);
        assert!(buffer.contains("SELECT TEAM"));
        let a = buffer.find(") Team A").unwrap();
        let d = buffer.find(") Team D").unwrap();
        assert!(a < d);
    }

    #[test]
    fn test_team_stats_page_contents() {
        let balanced = roster();
        let mut page = build_page(&balanced, View::TeamStats(0));
        page.set_screen_height(30);
        let buffer = page.build_buffer(80);
        assert!(buffer.contains("TEAM A STATS"));
        assert!(buffer.contains("Total players:"));
        assert!(buffer.contains("Guardians:"));
    }
}
