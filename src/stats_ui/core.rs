use crate::constants;

/// One content line on a stats page.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsRow {
    /// Letter-indexed menu option, e.g. "A) Display Team Stats"
    MenuItem { key: char, label: String },
    /// Team name heading on a stats view
    TeamHeader(String),
    /// Labeled statistic, e.g. "Average height" / "42.75"
    StatLine { label: String, value: String },
    /// Column headings of the player table
    ColumnHeads,
    /// One player line of the player table
    PlayerRow {
        name: String,
        height: u32,
        experience: bool,
    },
    /// Comma-separated guardian names of a whole team
    GuardianList(String),
    /// Horizontal rule
    Separator,
    /// Plain text line
    Text(String),
    ErrorMessage(String),
}

/// A teletext-style page: header bar, subheader, content rows and a footer
/// with key hints. Content that does not fit the terminal height paginates;
/// `ignore_height_limit` turns the page into an append-only printout for
/// non-interactive output.
#[derive(Debug)]
pub struct StatsPage {
    pub(super) page_number: u16,
    pub(super) title: String,
    pub(super) subheader: String,
    pub(super) content_rows: Vec<StatsRow>,
    pub(super) current_page: usize,
    pub(super) screen_height: u16,
    pub(super) show_footer: bool,
    pub(super) ignore_height_limit: bool,
    pub(super) plain_mode: bool,
    pub(super) warning: Option<String>,
    pub(super) footer_controls: String,
}

impl StatsPage {
    /// Creates a new page with the application's standard header.
    ///
    /// # Arguments
    /// * `subheader` - The subtitle displayed below the title
    /// * `show_footer` - Whether to show the control footer
    /// * `ignore_height_limit` - Append-only output for non-interactive mode
    /// * `plain_mode` - Disable ANSI colors entirely
    pub fn new(
        subheader: impl Into<String>,
        show_footer: bool,
        ignore_height_limit: bool,
        plain_mode: bool,
    ) -> Self {
        // Get terminal size, fallback to reasonable default if can't get size
        let screen_height = if ignore_height_limit {
            24u16
        } else {
            crossterm::terminal::size().map(|(_, h)| h).unwrap_or(24)
        };

        StatsPage {
            page_number: constants::PAGE_NUMBER,
            title: constants::PAGE_TITLE.to_string(),
            subheader: subheader.into(),
            content_rows: Vec::new(),
            current_page: 0,
            screen_height,
            show_footer,
            ignore_height_limit,
            plain_mode,
            warning: None,
            footer_controls: "q=Quit".to_string(),
        }
    }

    /// Adds a letter-indexed menu option.
    pub fn add_menu_item(&mut self, key: char, label: impl Into<String>) {
        self.content_rows.push(StatsRow::MenuItem {
            key,
            label: label.into(),
        });
    }

    /// Adds a plain text line.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.content_rows.push(StatsRow::Text(text.into()));
    }

    /// Adds an error message line.
    pub fn add_error_message(&mut self, message: &str) {
        self.content_rows
            .push(StatsRow::ErrorMessage(message.to_string()));
    }

    /// Whether the page currently contains the given error message.
    /// Test-friendly accessor.
    pub fn has_error_message(&self, message: &str) -> bool {
        self.content_rows
            .iter()
            .any(|row| matches!(row, StatsRow::ErrorMessage(m) if m == message))
    }

    /// Sets the warning line shown above the footer (invalid selections).
    pub fn set_warning(&mut self, warning: impl Into<String>) {
        self.warning = Some(warning.into());
    }

    pub fn clear_warning(&mut self) {
        self.warning = None;
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Replaces the key-hint text in the footer.
    pub fn set_footer_controls(&mut self, controls: impl Into<String>) {
        self.footer_controls = controls.into();
    }

    /// Overrides the detected screen height. Used by tests and resize
    /// handling.
    pub fn set_screen_height(&mut self, height: u16) {
        self.screen_height = height;
        let max_page = self.total_pages().saturating_sub(1);
        self.current_page = self.current_page.min(max_page);
    }

    /// Updates the page dimensions after a terminal resize.
    pub fn handle_resize(&mut self) {
        if let Ok((_, height)) = crossterm::terminal::size() {
            self.set_screen_height(height);
        }
    }

    /// Content lines that fit one screen between header and footer.
    pub(super) fn lines_per_page(&self) -> usize {
        if self.ignore_height_limit {
            return usize::MAX;
        }
        // Header, subheader, one blank, warning slot and footer are reserved
        let reserved = 5u16;
        (self.screen_height.saturating_sub(reserved) as usize)
            .clamp(1, constants::ui::MAX_LINES_PER_PAGE)
    }

    pub fn total_pages(&self) -> usize {
        if self.ignore_height_limit || self.content_rows.is_empty() {
            return 1;
        }
        self.content_rows.len().div_ceil(self.lines_per_page())
    }

    /// The rows visible on the current page.
    pub(super) fn get_page_content(&self) -> Vec<&StatsRow> {
        if self.ignore_height_limit {
            return self.content_rows.iter().collect();
        }
        self.content_rows
            .chunks(self.lines_per_page())
            .nth(self.current_page)
            .map(|chunk| chunk.iter().collect())
            .unwrap_or_default()
    }

    pub fn next_page(&mut self) {
        if self.current_page + 1 < self.total_pages() {
            self.current_page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1);
    }
}
