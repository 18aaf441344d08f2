//! Hero title selection by local time.
//!
//! Titles are looked up by key; resolving the key to text belongs to the
//! translation layer, not here.

use chrono::{Datelike, Timelike};

/// Period of the day used to pick the hero title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    /// 19:00 until 05:00.
    Night,
    /// 05:00 until 12:00.
    Morning,
    /// 12:00 until 19:00.
    Day,
    /// All of 20 April.
    FourTwenty,
    /// All of 9 June.
    SixtyNine,
}

impl TimeOfDay {
    /// Classify a local timestamp. Special dates win over the hour.
    pub fn at<T: Datelike + Timelike>(when: &T) -> Self {
        match (when.month(), when.day()) {
            (4, 20) => return TimeOfDay::FourTwenty,
            (6, 9) => return TimeOfDay::SixtyNine,
            _ => {}
        }

        match when.hour() {
            0..=4 => TimeOfDay::Night,
            5..=11 => TimeOfDay::Morning,
            12..=18 => TimeOfDay::Day,
            _ => TimeOfDay::Night,
        }
    }

    /// Classify the current local time.
    pub fn now() -> Self {
        Self::at(&chrono::Local::now())
    }

    /// Translation key for the hero title.
    pub fn title_key(self) -> &'static str {
        match self {
            TimeOfDay::Night => "home.titles.night",
            TimeOfDay::Morning => "home.titles.morning",
            TimeOfDay::Day => "home.titles.day",
            TimeOfDay::FourTwenty => "home.titles.420",
            TimeOfDay::SixtyNine => "home.titles.69",
        }
    }
}
