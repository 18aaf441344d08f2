//! Layout dimension constants for TUI rendering.
//!
//! Rows are document rows: row 0 is the top of the page below the banner.

use std::time::Duration;

/// Document row of the hero title.
pub const TITLE_ROW: u16 = 1;

/// Document row where the search bar holder starts.
///
/// The holder's natural top in pixels is this row times the row height.
pub const HOLDER_ROW: u16 = 4;

/// Height of the search bar in rows (border + input + border).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Document row where the content region starts.
pub const CONTENT_ROW: u16 = HOLDER_ROW + SEARCH_BAR_HEIGHT + 1;

/// Width of the collapsed search affordance (icon plus borders).
pub const COLLAPSED_SEARCH_WIDTH: u16 = 5;

/// Widest the expanded search field grows.
pub const MAX_SEARCH_WIDTH: u16 = 60;

/// Columns taken by the search icon inside the field.
pub const ICON_WIDTH: u16 = 3;

/// Columns taken by the clear button inside the field.
pub const CLEAR_BUTTON_WIDTH: u16 = 3;

/// Label of the browse affordance.
pub const BROWSE_LABEL: &str = " Browse ";

/// Banner height used by the banner toggle when none is configured.
pub const FALLBACK_BANNER_HEIGHT: u32 = 40;

/// Poll timeout when no timer is pending.
pub const IDLE_POLL: Duration = Duration::from_secs(1);
