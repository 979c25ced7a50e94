//! Buffered rendering for stats pages.
//!
//! Builds the whole frame into a string buffer first (double buffering)
//! and writes it in a single operation to avoid flicker. Interactive pages
//! use absolute cursor positioning; append-only pages (non-interactive
//! output) emit plain newline-terminated lines so the result scrolls into
//! terminal history.

use super::colors::*;
use super::core::{StatsPage, StatsRow};
use super::footer::render_footer;
use super::utils::get_ansi_code;
use crate::constants::ui::{
    CONTENT_MARGIN, PLAYER_HEIGHT_WIDTH, PLAYER_NAME_WIDTH, SEPARATOR_WIDTH,
};
use crate::error::AppError;
use crossterm::{execute, style::Print};
use std::io::{Stdout, Write};

impl StatsPage {
    /// Renders the page content using double buffering for reduced
    /// flickering. All escape sequences and content are built in a buffer
    /// first, then written in a single operation.
    pub fn render_buffered(&self, stdout: &mut Stdout) -> Result<(), AppError> {
        let width = if self.ignore_height_limit {
            80u16
        } else {
            // Hide cursor to prevent visual artifacts during rendering
            execute!(stdout, crossterm::cursor::Hide)?;
            crossterm::terminal::size().map(|(w, _)| w).unwrap_or(80)
        };

        let buffer = self.build_buffer(width);
        execute!(stdout, Print(buffer))?;
        stdout.flush()?;
        Ok(())
    }

    /// Builds the complete frame for the given terminal width. Exposed so
    /// callers and tests can inspect output without a terminal.
    pub fn build_buffer(&self, width: u16) -> String {
        let mut buffer = String::with_capacity(self.estimated_buffer_size(width));

        if self.ignore_height_limit {
            self.build_appended(&mut buffer, width);
        } else {
            self.build_positioned(&mut buffer, width);
        }

        buffer
    }

    /// Interactive frame: clear, absolute positioning, warning slot and
    /// footer.
    fn build_positioned(&self, buffer: &mut String, width: u16) {
        buffer.push_str("\x1b[H"); // Move to home position
        buffer.push_str("\x1b[0J"); // Clear from cursor down

        self.push_header(buffer, width, None);

        let mut current_line = 4usize;
        for row in self.get_page_content() {
            buffer.push_str(&format!("\x1b[{};{}H", current_line, CONTENT_MARGIN + 1));
            buffer.push_str(&self.format_row(row));
            current_line += 1;
        }

        let footer_y = self.screen_height.max(5) as usize - 1;

        if let Some(warning) = &self.warning {
            let warning_code = if self.plain_mode {
                format!("\x1b[{};1H{:^width$}", footer_y - 1, warning, width = width as usize)
            } else {
                format!(
                    "\x1b[{};1H\x1b[38;5;{}m{:^width$}\x1b[0m",
                    footer_y - 1,
                    get_ansi_code(warning_fg(), 226),
                    warning,
                    width = width as usize
                )
            };
            buffer.push_str(&warning_code);
        }

        if self.show_footer {
            render_footer(
                buffer,
                footer_y,
                width as usize,
                &self.footer_controls,
                self.current_page,
                self.total_pages(),
                self.plain_mode,
            );
        }
    }

    /// Append-only frame for non-interactive output: every line ends in a
    /// newline and nothing positions the cursor.
    fn build_appended(&self, buffer: &mut String, width: u16) {
        self.push_header(buffer, width, Some('\n'));

        for row in self.get_page_content() {
            buffer.push_str(&" ".repeat(CONTENT_MARGIN));
            buffer.push_str(&self.format_row(row));
            buffer.push('\n');
        }
    }

    /// Header bar and subheader. `line_end` switches between positioned
    /// and appended layout.
    fn push_header(&self, buffer: &mut String, width: u16, line_end: Option<char>) {
        let header_text = format!("COURTSIDE {}", self.page_number);
        let title_width = width.saturating_sub(20).max(10) as usize;

        match line_end {
            None => {
                if self.plain_mode {
                    buffer.push_str(&format!(
                        "\x1b[1;1H{:<20}{:>title_width$}",
                        self.title, header_text
                    ));
                    buffer.push_str(&format!("\x1b[2;1H{}", self.subheader));
                } else {
                    let header_bg_code = get_ansi_code(header_bg(), 21);
                    let header_fg_code = get_ansi_code(header_fg(), 231);
                    let subheader_fg_code = get_ansi_code(subheader_fg(), 46);
                    buffer.push_str(&format!(
                        "\x1b[1;1H\x1b[48;5;{}m\x1b[38;5;{}m{:<20}{:>title_width$}\x1b[0m",
                        header_bg_code, header_fg_code, self.title, header_text
                    ));
                    buffer.push_str(&format!(
                        "\x1b[2;1H\x1b[38;5;{}m{}\x1b[0m",
                        subheader_fg_code, self.subheader
                    ));
                }
            }
            Some(end) => {
                if self.plain_mode {
                    buffer.push_str(&format!("{:<20}{:>title_width$}", self.title, header_text));
                    buffer.push(end);
                    buffer.push_str(&self.subheader);
                } else {
                    let header_bg_code = get_ansi_code(header_bg(), 21);
                    let header_fg_code = get_ansi_code(header_fg(), 231);
                    let subheader_fg_code = get_ansi_code(subheader_fg(), 46);
                    buffer.push_str(&format!(
                        "\x1b[48;5;{}m\x1b[38;5;{}m{:<20}{:>title_width$}\x1b[0m",
                        header_bg_code, header_fg_code, self.title, header_text
                    ));
                    buffer.push(end);
                    buffer.push_str(&format!(
                        "\x1b[38;5;{}m{}\x1b[0m",
                        subheader_fg_code, self.subheader
                    ));
                }
                buffer.push(end);
                buffer.push(end);
            }
        }
    }

    /// One content row as text plus color codes.
    fn format_row(&self, row: &StatsRow) -> String {
        if self.plain_mode {
            return Self::format_row_plain(row);
        }

        let text_code = get_ansi_code(text_fg(), 231);
        match row {
            StatsRow::MenuItem { key, label } => format!(
                "\x1b[38;5;{}m{}\x1b[38;5;{}m) {}\x1b[0m",
                get_ansi_code(menu_key_fg(), 51),
                key,
                text_code,
                label
            ),
            StatsRow::TeamHeader(name) => format!(
                "\x1b[38;5;{}m{} STATS\x1b[0m",
                get_ansi_code(team_header_fg(), 226),
                name.to_uppercase()
            ),
            StatsRow::StatLine { label, value } => format!(
                "\x1b[38;5;{}m{:<22}\x1b[38;5;{}m{}\x1b[0m",
                text_code,
                format!("{label}:"),
                get_ansi_code(stat_value_fg(), 46),
                value
            ),
            StatsRow::ColumnHeads => format!(
                "\x1b[38;5;{}m{:<name_width$} | {:>height_width$} | EXPERIENCE\x1b[0m",
                text_code,
                "NAME",
                "HEIGHT",
                name_width = PLAYER_NAME_WIDTH,
                height_width = PLAYER_HEIGHT_WIDTH
            ),
            StatsRow::PlayerRow {
                name,
                height,
                experience,
            } => {
                let experience_code = if *experience {
                    get_ansi_code(experienced_fg(), 51)
                } else {
                    text_code
                };
                format!(
                    "\x1b[38;5;{}m{:<name_width$} | {:>height_width$} | \x1b[38;5;{}m{}\x1b[0m",
                    text_code,
                    name,
                    height,
                    experience_code,
                    experience_label(*experience),
                    name_width = PLAYER_NAME_WIDTH,
                    height_width = PLAYER_HEIGHT_WIDTH
                )
            }
            StatsRow::GuardianList(guardians) => format!(
                "\x1b[38;5;{}mGuardians: \x1b[38;5;{}m{}\x1b[0m",
                text_code,
                get_ansi_code(stat_value_fg(), 46),
                guardians
            ),
            StatsRow::Separator => format!(
                "\x1b[38;5;{}m{}\x1b[0m",
                text_code,
                "-".repeat(SEPARATOR_WIDTH)
            ),
            StatsRow::Text(text) => format!("\x1b[38;5;{text_code}m{text}\x1b[0m"),
            StatsRow::ErrorMessage(message) => format!(
                "\x1b[38;5;{}m{}\x1b[0m",
                get_ansi_code(warning_fg(), 226),
                message
            ),
        }
    }

    fn format_row_plain(row: &StatsRow) -> String {
        match row {
            StatsRow::MenuItem { key, label } => format!("{key}) {label}"),
            StatsRow::TeamHeader(name) => format!("{} STATS", name.to_uppercase()),
            StatsRow::StatLine { label, value } => {
                format!("{:<22}{}", format!("{label}:"), value)
            }
            StatsRow::ColumnHeads => format!(
                "{:<name_width$} | {:>height_width$} | EXPERIENCE",
                "NAME",
                "HEIGHT",
                name_width = PLAYER_NAME_WIDTH,
                height_width = PLAYER_HEIGHT_WIDTH
            ),
            StatsRow::PlayerRow {
                name,
                height,
                experience,
            } => format!(
                "{:<name_width$} | {:>height_width$} | {}",
                name,
                height,
                experience_label(*experience),
                name_width = PLAYER_NAME_WIDTH,
                height_width = PLAYER_HEIGHT_WIDTH
            ),
            StatsRow::GuardianList(guardians) => format!("Guardians: {guardians}"),
            StatsRow::Separator => "-".repeat(SEPARATOR_WIDTH),
            StatsRow::Text(text) => text.clone(),
            StatsRow::ErrorMessage(message) => message.clone(),
        }
    }

    fn estimated_buffer_size(&self, width: u16) -> usize {
        // Rows plus header/footer, with headroom for escape sequences
        (self.get_page_content().len() + 6) * (width as usize + 24)
    }
}

fn experience_label(experience: bool) -> &'static str {
    if experience {
        "Experienced"
    } else {
        "Inexperienced"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appended_page(plain: bool) -> StatsPage {
        StatsPage::new("TEAM STATS", false, true, plain)
    }

    #[test]
    fn test_plain_buffer_has_no_escape_codes() {
        let mut page = appended_page(true);
        page.add_menu_item('A', "Display Team Stats");
        page.add_error_message("boom");

        let buffer = page.build_buffer(80);
        assert!(!buffer.contains('\x1b'));
        assert!(buffer.contains("A) Display Team Stats"));
        assert!(buffer.contains("boom"));
    }

    #[test]
    fn test_colored_buffer_wraps_rows_in_codes() {
        let mut page = appended_page(false);
        page.add_menu_item('B', "Quit");

        let buffer = page.build_buffer(80);
        assert!(buffer.contains("\x1b[38;5;51mB"));
        assert!(buffer.contains("Quit"));
        assert!(buffer.contains("\x1b[0m"));
    }

    #[test]
    fn test_player_row_formatting() {
        let mut page = appended_page(true);
        page.content_rows.push(StatsRow::PlayerRow {
            name: "Bill Bon".to_string(),
            height: 43,
            experience: true,
        });
        page.content_rows.push(StatsRow::PlayerRow {
            name: "Matt Gill".to_string(),
            height: 40,
            experience: false,
        });

        let buffer = page.build_buffer(80);
        assert!(buffer.contains("Bill Bon"));
        assert!(buffer.contains("| Experienced"));
        assert!(buffer.contains("| Inexperienced"));
        // Heights are right-aligned in their column
        assert!(buffer.contains(&format!("{:>width$}", 43, width = PLAYER_HEIGHT_WIDTH)));
    }

    #[test]
    fn test_interactive_buffer_clears_and_positions() {
        let mut page = StatsPage::new("TEAM STATS", true, false, false);
        page.set_screen_height(24);
        page.add_text("hello");

        let buffer = page.build_buffer(80);
        assert!(buffer.starts_with("\x1b[H\x1b[0J"));
        assert!(buffer.contains("\x1b[4;3H")); // first content row position
        assert!(buffer.contains("hello"));
    }

    #[test]
    fn test_header_shows_title_and_page_number() {
        let mut page = appended_page(true);
        page.add_text("x");
        let buffer = page.build_buffer(80);
        assert!(buffer.contains("BASKETBALL"));
        assert!(buffer.contains("COURTSIDE 235"));
        assert!(buffer.contains("TEAM STATS"));
    }

    #[test]
    fn test_warning_line_rendered_above_footer() {
        let mut page = StatsPage::new("MENU", true, false, false);
        page.set_screen_height(24);
        page.set_warning("'z' is invalid. Enter a menu option.");
        let buffer = page.build_buffer(80);
        assert!(buffer.contains("'z' is invalid. Enter a menu option."));
    }
}
