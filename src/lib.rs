//! herosearch
//!
//! Search hero for a media home page: a debounced search field, a search
//! status machine, viewport breakpoints, a sticky search bar and a compact
//! expand-then-focus affordance, driven from a terminal.
//!
//! Pure Core / Impure Shell: `model` and `state` hold plain data and pure
//! transitions, `runtime` is the single-threaded clock and event plumbing,
//! `view` owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod runtime;
pub mod state;
pub mod view;
