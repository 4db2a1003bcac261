//! Content rating of a wallpaper
//! # Purity
//! The gallery classifies every upload into one of three purity levels:
//! * `Sfw`: Safe for work, nothing suggestive.
//! * `Sketchy`: Suggestive content that *might* not be safe for viewing at work.
//! * `Nsfw`: Explicit content.
//!
//! Searches select purity levels through a [`PurityFilter`] bit field, which the gallery expects
//! rendered as a 3-digit binary string (`sfw`, `sketchy`, `nsfw`, most significant bit first).

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use super::error::WallpaperError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Purity {
    /// Wallpapers that don't involve anything suggestive or sensitive.
    Sfw,
    /// Wallpapers with some degree of suggestive elements.
    Sketchy,
    /// Explicit wallpapers.
    Nsfw,
}

impl Purity {
    /// The single bit this purity occupies inside a [`PurityFilter`].
    #[inline]
    pub const fn as_flag(self) -> PurityFilter {
        match self {
            Self::Sfw => PurityFilter::SFW,
            Self::Sketchy => PurityFilter::SKETCHY,
            Self::Nsfw => PurityFilter::NSFW,
        }
    }
}

impl FromStr for Purity {
    type Err = WallpaperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sfw" => Ok(Self::Sfw),
            "sketchy" => Ok(Self::Sketchy),
            "nsfw" => Ok(Self::Nsfw),
            _ => Err(WallpaperError::UnknownPurity(s.to_string())),
        }
    }
}

impl Display for Purity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sfw => write!(f, "sfw"),
            Self::Sketchy => write!(f, "sketchy"),
            Self::Nsfw => write!(f, "nsfw"),
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PurityFilter: u8 {
        const SFW = 0b100;
        const SKETCHY = 0b010;
        const NSFW = 0b001;
    }
}

impl PurityFilter {
    /// Renders the filter the way the search page expects it, e.g. `100` for SFW only.
    #[inline]
    pub fn to_query_value(self) -> String {
        format!("{:03b}", self.bits())
    }

    #[inline]
    pub fn allows(self, purity: Purity) -> bool {
        self.contains(purity.as_flag())
    }
}
