//! Whole-page rendering: banner, hero title, search bar and content.
//!
//! The page is one scrolling document drawn below the banner. The search bar
//! is drawn over the document at its natural row, or pinned at the fixed
//! offset while sticky.

use crate::model::{Px, TimeOfDay};
use crate::state::HomePage;
use crate::view::constants::{CONTENT_ROW, HOLDER_ROW, SEARCH_BAR_HEIGHT, TITLE_ROW};
use crate::view::content::content_lines;
use crate::view::hero::{HeroBar, HeroBarLayout};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

/// Pixel-to-cell scale and scroll position for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    /// Pixels per terminal row.
    pub px_per_row: Px,
    /// Document rows scrolled off the top.
    pub scroll_rows: u16,
    /// Banner height in pixels.
    pub banner_height: Px,
}

impl PageGeometry {
    /// Convert a pixel distance to whole rows.
    pub fn rows(&self, px: Px) -> u16 {
        u16::try_from(px / self.px_per_row.max(1)).unwrap_or(u16::MAX)
    }

    /// Rows covered by the banner.
    pub fn banner_rows(&self) -> u16 {
        self.rows(self.banner_height)
    }

    /// The holder's top edge relative to the viewport top, in pixels.
    ///
    /// Negative once the holder has scrolled above the viewport.
    pub fn holder_top(&self) -> i32 {
        let rows = i32::from(HOLDER_ROW) - i32::from(self.scroll_rows);
        let px = i64::from(rows) * i64::from(self.px_per_row) + i64::from(self.banner_height);
        i32::try_from(px).unwrap_or(if px < 0 { i32::MIN } else { i32::MAX })
    }
}

/// English text for a hero title key.
pub fn title_text(key: &str) -> &str {
    match key {
        "home.titles.morning" => "Morning. What would you like to watch?",
        "home.titles.day" => "What would you like to watch this afternoon?",
        "home.titles.night" => "What would you like to watch tonight?",
        "home.titles.420" => "Happy 4/20. What are we watching?",
        "home.titles.69" => "Nice. What would you like to watch?",
        other => other,
    }
}

fn document(page: &HomePage, title: TimeOfDay) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![Line::default(); usize::from(CONTENT_ROW)];
    lines[usize::from(TITLE_ROW)] = Line::styled(
        title_text(title.title_key()).to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center);
    lines.extend(content_lines(page.content()));
    lines
}

/// Total document height in rows.
pub fn document_height(page: &HomePage) -> u16 {
    let rows = usize::from(CONTENT_ROW) + content_lines(page.content()).len();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Draw the page. Returns the search bar regions when it is on screen.
pub fn render_page(
    frame: &mut Frame<'_>,
    page: &HomePage,
    geometry: &PageGeometry,
) -> Option<HeroBarLayout> {
    let area = frame.area();
    let banner_rows = geometry.banner_rows().min(area.height);
    let doc_area = Rect {
        y: area.y + banner_rows,
        height: area.height - banner_rows,
        ..area
    };

    frame.render_widget(
        Paragraph::new(document(page, page.title())).scroll((geometry.scroll_rows, 0)),
        doc_area,
    );

    let view = page.hero_view();
    let (bar_y, min_y) = if view.is_sticky {
        (
            i32::from(area.y) + i32::from(geometry.rows(view.fixed_top)),
            i32::from(area.y),
        )
    } else {
        (
            i32::from(doc_area.y) + i32::from(HOLDER_ROW) - i32::from(geometry.scroll_rows),
            i32::from(doc_area.y),
        )
    };
    let on_screen =
        bar_y >= min_y && bar_y + i32::from(SEARCH_BAR_HEIGHT) <= i32::from(area.bottom());

    let layout = u16::try_from(bar_y)
        .ok()
        .filter(|_| on_screen)
        .map(|y| {
            let band = Rect {
                y,
                height: SEARCH_BAR_HEIGHT,
                ..area
            };
            frame.render_widget(
                HeroBar::new(view, page.query(), page.show_background()),
                band,
            );
            HeroBarLayout::compute(band, &view)
        });

    if banner_rows > 0 {
        frame.render_widget(
            Paragraph::new("Scheduled maintenance tonight")
                .alignment(Alignment::Center)
                .block(Block::default().style(Style::default().fg(Color::Black).bg(Color::Magenta))),
            Rect {
                height: banner_rows,
                ..area
            },
        );
    }

    layout
}
