use crossterm::style::Color;

// Constants for teletext appearance
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn menu_key_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn team_header_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn stat_value_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn experienced_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn warning_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
