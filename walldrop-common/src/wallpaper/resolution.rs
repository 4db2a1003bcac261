use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use super::error::WallpaperError;

/// Pixel dimensions of a wallpaper. Informational only, nothing filters on it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl FromStr for Resolution {
    type Err = WallpaperError;

    /// Parses `<width>x<height>`. Whitespace anywhere in the input is ignored, so the listing
    /// text `1920 x 1080` is accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();

        let parsed = compact.split_once('x').and_then(|(w, h)| {
            let width = w.parse::<u32>().ok()?;
            let height = h.parse::<u32>().ok()?;
            Some(Self { width, height })
        });

        parsed.ok_or_else(|| WallpaperError::InvalidResolution(s.to_string()))
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
