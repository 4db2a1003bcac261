//! Main representation of a gallery wallpaper
//!
//! # Wallpaper
//! A [`Wallpaper` struct](Wallpaper) is built from a single entry of a search result page and is
//! never modified afterwards.
use serde::{Deserialize, Serialize};

use std::fmt::Debug;

use self::{category::Category, purity::Purity, resolution::Resolution};

pub mod category;
pub mod error;
pub mod purity;
pub mod resolution;

/// Catchall model for the parts of a search result entry needed to filter, name and download it.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wallpaper {
    /// Identifier of the wallpaper given by the gallery
    pub id: String,
    /// Content rating, as reported by the listing entry itself.
    pub purity: Purity,
    pub category: Category,
    pub resolution: Resolution,
    /// Number of users that added this wallpaper to their favorites.
    pub favorites: u64,
    /// Absolute URL of the original image file.
    pub image_url: String,
}

impl Debug for Wallpaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallpaper")
            .field("Wallpaper ID", &self.id)
            .field("Purity", &self.purity)
            .field("Category", &self.category)
            .field("Resolution", &self.resolution)
            .field("Favorites", &self.favorites)
            .field("Image URL", &self.image_url)
            .finish()
    }
}

impl Wallpaper {
    /// Original file name of the image, i.e. the last path segment of [`image_url`](Self::image_url)
    /// without query string or fragment.
    ///
    /// Returns `None` when the URL ends in a `/` or is empty.
    pub fn file_name(&self) -> Option<&str> {
        let path = self
            .image_url
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        path.rsplit('/').next().filter(|name| !name.is_empty())
    }
}

/// One page of search results, in the order the gallery listed them.
#[derive(Debug, Clone, Default)]
pub struct WallpaperPage {
    /// The page number this list answers.
    pub page: u16,
    pub wallpapers: Vec<Wallpaper>,
}

impl WallpaperPage {
    pub const fn new(page: u16, wallpapers: Vec<Wallpaper>) -> Self {
        Self { page, wallpapers }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.wallpapers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.wallpapers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Wallpaper> {
        self.wallpapers.iter()
    }
}

impl IntoIterator for WallpaperPage {
    type Item = Wallpaper;
    type IntoIter = std::vec::IntoIter<Wallpaper>;

    fn into_iter(self) -> Self::IntoIter {
        self.wallpapers.into_iter()
    }
}

/// Tags followed by the user, in the order the subscriptions page lists them.
///
/// Inserting a tag that is already present is a no-op, so every tag appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subscriptions {
    tags: Vec<String>,
}

impl Subscriptions {
    pub fn insert(&mut self, tag: String) -> bool {
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl FromIterator<String> for Subscriptions {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut subs = Self::default();
        for tag in iter {
            subs.insert(tag);
        }
        subs
    }
}

/// Provenance of a wallpaper, e.g. `["tag", "Youjo Senki"]`. Only used to build file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceHierarchy(Vec<String>);

impl SourceHierarchy {
    /// Hierarchy for a wallpaper found through a tag subscription.
    pub fn tag(name: &str) -> Self {
        Self(vec![String::from("tag"), name.to_string()])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallpaper(url: &str) -> Wallpaper {
        Wallpaper {
            id: String::from("1"),
            purity: Purity::Sfw,
            category: Category::General,
            resolution: Resolution::new(1920, 1080),
            favorites: 0,
            image_url: url.to_string(),
        }
    }

    #[test]
    fn file_name_is_last_url_segment() {
        assert_eq!(
            wallpaper("https://x/y/bar.jpg").file_name(),
            Some("bar.jpg")
        );
        assert_eq!(
            wallpaper("https://x/y/bar.png?size=full#top").file_name(),
            Some("bar.png")
        );
        assert_eq!(wallpaper("https://x/y/").file_name(), None);
    }

    #[test]
    fn subscriptions_keep_first_insertion() {
        let subs: Subscriptions = ["mecha", "space", "mecha"]
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(subs.tags(), ["mecha", "space"]);
    }
}
