//! Content classification of a wallpaper.
//!
//! Like [`Purity`](super::purity::Purity), categories are selected in searches through a bit
//! field rendered as a 3-digit binary string (`general`, `anime`, `people`).

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use super::error::WallpaperError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    General,
    Anime,
    People,
}

impl FromStr for Category {
    type Err = WallpaperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Self::General),
            "anime" => Ok(Self::Anime),
            "people" => Ok(Self::People),
            _ => Err(WallpaperError::UnknownCategory(s.to_string())),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::General => write!(f, "general"),
            Self::Anime => write!(f, "anime"),
            Self::People => write!(f, "people"),
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Categories: u8 {
        const GENERAL = 0b100;
        const ANIME = 0b010;
        const PEOPLE = 0b001;
    }
}

impl Categories {
    #[inline]
    pub fn to_query_value(self) -> String {
        format!("{:03b}", self.bits())
    }
}
