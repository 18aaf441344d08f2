//! Domain model types (pure).
//!
//! Layout constants, timer delays and small value types shared by the state
//! machines and the terminal shell.

pub mod error;
pub mod key_action;
pub mod layout;
pub mod time_of_day;
pub mod timings;

// Re-export for convenience
pub use error::AppError;
pub use key_action::KeyAction;
pub use layout::{Breakpoint, LayoutConstants, Px, StickyTier};
pub use time_of_day::TimeOfDay;
pub use timings::Timings;
