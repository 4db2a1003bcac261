//! The interface the sync pipeline uses to reach the gallery.
//! # Gallery
//!
//! A [`Gallery`] exposes the three remote operations a sync run needs: discovering the user's
//! tag subscriptions, fetching one page of search results and downloading one image.
//! [`WallhavenClient`](crate::wallhaven::WallhavenClient) is the real implementation; tests swap in
//! stubs.
use std::{future::Future, path::Path};
use walldrop_common::{
    search::SearchQuery,
    wallpaper::{Subscriptions, Wallpaper, WallpaperPage},
};

use crate::error::ExtractorError;

pub mod caps;

pub trait Gallery {
    /// Fetches the tags the logged in user follows.
    ///
    /// Fails with [`ParseError`](ExtractorError::ParseError) when the subscription list is missing
    /// from the page.
    fn fetch_subscribed_tags(
        &self,
    ) -> impl Future<Output = Result<Subscriptions, ExtractorError>> + Send;

    /// Fetches a single page of search results. Pages start at 1.
    fn search(
        &self,
        query: &SearchQuery,
        page: u16,
    ) -> impl Future<Output = Result<WallpaperPage, ExtractorError>> + Send;

    /// Streams the wallpaper's image into `destination`, replacing any file already there.
    ///
    /// Returns the number of bytes written.
    fn download(
        &self,
        wallpaper: &Wallpaper,
        destination: &Path,
    ) -> impl Future<Output = Result<u64, ExtractorError>> + Send;

    /// Number of entries in a full search page.
    fn page_size(&self) -> usize;
}
