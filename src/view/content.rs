//! Content region below the hero: loading placeholder, results, or landing.

use crate::state::ContentRegion;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Skeleton rows drawn while the debounce window is open.
const PLACEHOLDER_ROWS: usize = 6;

/// Document lines for a content region.
pub fn content_lines(region: ContentRegion<'_>) -> Vec<Line<'static>> {
    match region {
        ContentRegion::LoadingPlaceholder => {
            let skeleton = Style::default().fg(Color::DarkGray);
            (0..PLACEHOLDER_ROWS)
                .map(|i| {
                    let width = if i % 2 == 0 { 32 } else { 24 };
                    Line::from(Span::styled("░".repeat(width), skeleton))
                })
                .collect()
        }
        ContentRegion::Results { query } => vec![
            Line::from(vec![
                Span::styled("Results for ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("\"{query}\""),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "Matches from the media catalog appear here.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        ContentRegion::Landing { show_empty_hint } => {
            if show_empty_hint {
                vec![
                    Line::from("Nothing here yet."),
                    Line::from(Span::styled(
                        "Bookmarks and shows you are watching will show up here.",
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::default(),
                    Line::from(Span::styled(
                        " Browse to find something to watch ",
                        Style::default().fg(Color::Black).bg(Color::Cyan),
                    )),
                ]
            } else {
                vec![
                    Line::from(Span::styled(
                        "Continue watching",
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::default(),
                    Line::from(Span::styled(
                        "Bookmarks",
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                ]
            }
        }
    }
}
