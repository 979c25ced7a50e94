//! Footer rendering for stats pages: control key hints and the page
//! indicator, drawn on the header-colored bar at the bottom row.

use super::colors::*;
use super::utils::get_ansi_code;

/// Renders the footer bar into the frame buffer.
///
/// # Arguments
/// * `buffer` - The frame buffer to append to
/// * `footer_y` - 1-based terminal row of the footer
/// * `width` - Terminal width
/// * `controls` - Key hint text, e.g. "A-D=Team Esc=Back q=Quit"
/// * `current_page` / `total_pages` - Pagination indicator inputs
/// * `plain` - Skip all color codes
pub fn render_footer(
    buffer: &mut String,
    footer_y: usize,
    width: usize,
    controls: &str,
    current_page: usize,
    total_pages: usize,
    plain: bool,
) {
    let footer_text = if total_pages > 1 {
        format!("{controls} ←→={}/{}", current_page + 1, total_pages)
    } else {
        controls.to_string()
    };

    if plain {
        buffer.push_str(&format!(
            "\x1b[{};1H{:^width$}",
            footer_y,
            footer_text,
            width = width
        ));
        return;
    }

    let header_bg_code = get_ansi_code(header_bg(), 21);
    let footer_code = format!(
        "\x1b[{};1H\x1b[48;5;{}m\x1b[38;5;231m{:^width$}\x1b[0m",
        footer_y,
        header_bg_code,
        footer_text,
        width = width
    );
    buffer.push_str(&footer_code);
}
