//! Indian seasons and month resolution

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Seasons of the Indian calendar year
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Season {
    Winter,
    Summer,
    Monsoon,
    #[serde(rename = "Post-Monsoon")]
    PostMonsoon,
    #[serde(rename = "Pre-Winter")]
    PreWinter,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Winter,
        Season::Summer,
        Season::Monsoon,
        Season::PostMonsoon,
        Season::PreWinter,
    ];

    /// Resolve a calendar month (1-12) to its season
    pub fn for_month(month: u32) -> Option<Season> {
        match month {
            1 | 2 => Some(Season::Winter),
            3..=5 => Some(Season::Summer),
            6..=9 => Some(Season::Monsoon),
            10 | 11 => Some(Season::PostMonsoon),
            12 => Some(Season::PreWinter),
            _ => None,
        }
    }

    /// Season of a calendar date
    pub fn of(date: NaiveDate) -> Season {
        // chrono months are always 1..=12
        Season::for_month(date.month()).unwrap_or(Season::Winter)
    }

    /// Months belonging to this season
    pub fn months(&self) -> &'static [u32] {
        match self {
            Season::Winter => &[1, 2],
            Season::Summer => &[3, 4, 5],
            Season::Monsoon => &[6, 7, 8, 9],
            Season::PostMonsoon => &[10, 11],
            Season::PreWinter => &[12],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Summer => "Summer",
            Season::Monsoon => "Monsoon",
            Season::PostMonsoon => "Post-Monsoon",
            Season::PreWinter => "Pre-Winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
