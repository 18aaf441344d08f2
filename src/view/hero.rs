//! Search bar widget for the hero region.

use crate::state::{BrowseVisibility, HeroView};
use crate::view::constants::{
    BROWSE_LABEL, CLEAR_BUTTON_WIDTH, COLLAPSED_SEARCH_WIDTH, ICON_WIDTH, MAX_SEARCH_WIDTH,
    SEARCH_BAR_HEIGHT,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Placeholder shown in an empty, unfocused field.
const PLACEHOLDER: &str = "What do you want to watch?";

/// Clickable regions of a rendered search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroBarLayout {
    /// Full band the bar was drawn in.
    pub band: Rect,
    /// Bordered search field.
    pub field: Rect,
    /// Search icon.
    pub icon: Rect,
    /// Text input, when the field is expanded.
    pub input: Option<Rect>,
    /// Clear button, when visible.
    pub clear: Option<Rect>,
    /// Browse affordance, when visible.
    pub browse: Option<Rect>,
}

impl HeroBarLayout {
    /// Compute regions for a bar drawn in `band`.
    pub fn compute(band: Rect, view: &HeroView) -> Self {
        let browse_width = match view.browse {
            BrowseVisibility::Hidden => 0,
            BrowseVisibility::Visible | BrowseVisibility::Invisible => BROWSE_LABEL.len() as u16,
        };

        let field_width = if view.expanded {
            band.width
                .saturating_sub(browse_width)
                .saturating_sub(2)
                .min(MAX_SEARCH_WIDTH)
        } else {
            COLLAPSED_SEARCH_WIDTH.min(band.width)
        };

        let field = Rect {
            x: band.x.saturating_add(1).min(band.right()),
            y: band.y,
            width: field_width,
            height: SEARCH_BAR_HEIGHT.min(band.height),
        };
        let inner_y = field.y.saturating_add(1);

        let icon = Rect {
            x: field.x,
            y: field.y,
            width: (ICON_WIDTH + 2).min(field.width),
            height: field.height,
        };

        let clear_width = if view.clear_visible {
            CLEAR_BUTTON_WIDTH
        } else {
            0
        };
        let clear = view.clear_visible.then(|| Rect {
            x: field.right().saturating_sub(1 + CLEAR_BUTTON_WIDTH),
            y: inner_y,
            width: CLEAR_BUTTON_WIDTH.min(field.width),
            height: 1,
        });

        let input = view.expanded.then(|| Rect {
            x: field.x + 1 + ICON_WIDTH,
            y: inner_y,
            width: field
                .width
                .saturating_sub(2 + ICON_WIDTH)
                .saturating_sub(clear_width),
            height: 1,
        });

        let browse = (view.browse == BrowseVisibility::Visible && browse_width > 0).then(|| Rect {
            x: band.right().saturating_sub(browse_width),
            y: inner_y,
            width: browse_width.min(band.width),
            height: 1,
        });

        Self {
            band,
            field,
            icon,
            input,
            clear,
            browse,
        }
    }
}

/// Longest suffix of `text` that fits in `width` columns.
///
/// The field scrolls to keep the end of the query (where typing happens) in view.
pub fn tail_fitting(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

/// Search bar widget.
pub struct HeroBar<'a> {
    view: HeroView,
    query: &'a str,
    background: bool,
}

impl<'a> HeroBar<'a> {
    /// Create the widget for the current hero snapshot.
    pub fn new(view: HeroView, query: &'a str, background: bool) -> Self {
        Self {
            view,
            query,
            background,
        }
    }
}

impl Widget for HeroBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = HeroBarLayout::compute(area, &self.view);

        if self.background {
            Block::default()
                .style(Style::default().bg(Color::Black))
                .render(area, buf);
        }

        let border = if self.view.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .render(layout.field, buf);

        let icon_area = Rect {
            x: layout.icon.x + 1,
            y: layout.field.y + 1,
            width: ICON_WIDTH.min(layout.icon.width.saturating_sub(1)),
            height: 1,
        };
        Paragraph::new(" ⌕ ").render(icon_area, buf);

        if let Some(input) = layout.input {
            let line = if self.query.is_empty() && !self.view.focused {
                Line::from(Span::styled(
                    tail_fitting(PLACEHOLDER, input.width as usize),
                    Style::default().fg(Color::DarkGray),
                ))
            } else {
                // Leave one column for the cursor.
                let room = (input.width as usize).saturating_sub(usize::from(self.view.focused));
                let mut spans = vec![Span::raw(tail_fitting(self.query, room))];
                if self.view.focused {
                    spans.push(Span::styled(
                        " ",
                        Style::default().add_modifier(Modifier::REVERSED),
                    ));
                }
                Line::from(spans)
            };
            Paragraph::new(line).render(input, buf);
        }

        if let Some(clear) = layout.clear {
            Paragraph::new(Span::styled("[x]", Style::default().fg(Color::Red))).render(clear, buf);
        }

        if let Some(browse) = layout.browse {
            Paragraph::new(Span::styled(
                BROWSE_LABEL,
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ))
            .render(browse, buf);
        }
    }
}
