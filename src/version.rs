use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::stdout;

const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Helper to print a dynamic-width version status box with optional color
/// highlights per line.
pub fn print_version_status_box(lines: Vec<(String, Option<Color>)>) {
    let max_content_width = lines
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0);
    let box_width = max_content_width + 4; // 2 for borders, 2 for padding
    let border = format!("╔{:═<width$}╗", "", width = box_width - 2);
    let sep = format!("╠{:═<width$}╣", "", width = box_width - 2);
    let bottom = format!("╚{:═<width$}╝", "", width = box_width - 2);

    execute!(
        stdout(),
        SetForegroundColor(Color::AnsiValue(231)), // Authentic teletext white
        Print(format!("{border}\n"))
    )
    .ok();
    for (i, (line, color)) in lines.iter().enumerate() {
        let padded = format!("║ {line:<max_content_width$} ║");
        match color {
            Some(c) => {
                execute!(
                    stdout(),
                    SetForegroundColor(*c),
                    Print(padded),
                    SetForegroundColor(Color::AnsiValue(231)),
                    Print("\n")
                )
                .ok();
            }
            None => {
                execute!(stdout(), Print(padded), Print("\n")).ok();
            }
        }
        // Separator after the title line
        if i == 0 && lines.len() > 2 {
            execute!(stdout(), Print(format!("{sep}\n"))).ok();
        }
    }
    execute!(stdout(), Print(format!("{bottom}\n")), ResetColor).ok();
}

/// Prints the current version inside the status box.
pub fn print_version_info() {
    println!();
    print_version_status_box(vec![
        ("Courtside Status".to_string(), None),
        ("".to_string(), None),
        (
            format!("Version: {CURRENT_VERSION}"),
            Some(Color::AnsiValue(51)), // Authentic teletext cyan
        ),
        ("Balanced teams, teletext style.".to_string(), None),
    ]);
}

pub fn print_logo() {
    execute!(
        stdout(),
        SetForegroundColor(Color::AnsiValue(51)), // Authentic teletext cyan
        Print(format!(
            "\n{}",
            r#"
░█████╗░░█████╗░██╗░░░██╗██████╗░████████╗  ██████╗░██████╗░███████╗
██╔══██╗██╔══██╗██║░░░██║██╔══██╗╚══██╔══╝  ╚════██╗╚════██╗██╔════╝
██║░░╚═╝██║░░██║██║░░░██║██████╔╝░░░██║░░░  ░░███╔═╝░█████╔╝███████╗
██║░░██╗██║░░██║██║░░░██║██╔══██╗░░░██║░░░  ██╔══╝░░░╚═══██╗╚════██╗
╚█████╔╝╚█████╔╝╚██████╔╝██║░░██║░░░██║░░░  ███████╗██████╔╝██████╔╝
░╚════╝░░╚════╝░░╚═════╝░╚═╝░░╚═╝░░░╚═╝░░░  ╚══════╝╚═════╝░╚═════╝░
"#
        )),
        ResetColor
    )
    .ok();
}
