//! The subscription sync.
//!
//! A run fetches the user's subscribed tags once, then walks them in order. For every tag it
//! requests search pages starting at 1 until a page comes back shorter than the gallery's page
//! size, and handles each listed wallpaper in turn:
//!
//! 1. wallpapers outside the query's purity filter are skipped;
//! 2. wallpapers already present in any [managed directory](ManagedDirectories) are skipped;
//! 3. everything else is downloaded into the `unchecked` directory.
//!
//! Everything runs sequentially, with a single request in flight at any time.
mod summary;

use log::{debug, info, warn};
use walldrop_common::{
    search::SearchQuery,
    wallpaper::{SourceHierarchy, Wallpaper},
};
use walldrop_extractors::Gallery;

use crate::error::SyncError;
use crate::paths::{resolve_path, ManagedDirectories};
use crate::progress::{no_op_progress_listener, LogType, SharedProgressListener};

pub use self::summary::SyncSummary;

/// What to do when a tag can't be synced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the whole run and return the error.
    #[default]
    Abort,
    /// Record the tag in [`SyncSummary::failed_tags`] and continue with the next one.
    SkipTag,
}

/// Mirrors the subscribed tags of a [`Gallery`] into a set of [`ManagedDirectories`].
#[derive(Debug)]
pub struct SyncPipeline<G: Gallery> {
    gallery: G,
    dirs: ManagedDirectories,
    failure_policy: FailurePolicy,
    progress_listener: SharedProgressListener,
}

impl<G: Gallery> SyncPipeline<G> {
    pub fn new(gallery: G, dirs: ManagedDirectories) -> Self {
        Self {
            gallery,
            dirs,
            failure_policy: FailurePolicy::default(),
            progress_listener: no_op_progress_listener(),
        }
    }

    #[must_use]
    pub const fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    #[must_use]
    pub fn with_progress_listener(mut self, listener: SharedProgressListener) -> Self {
        self.progress_listener = listener;
        self
    }

    #[inline]
    pub const fn gallery(&self) -> &G {
        &self.gallery
    }

    /// Runs one full sync.
    ///
    /// Failing to fetch the subscriptions always aborts. Failures inside a tag abort or skip the
    /// tag depending on the [`FailurePolicy`].
    pub async fn run(&self) -> Result<SyncSummary, SyncError> {
        debug!("Fetching subscribed tags");
        let subscriptions = self.gallery.fetch_subscribed_tags().await?;

        info!("Syncing {} subscribed tags", subscriptions.len());
        self.progress_listener.log_event(
            LogType::Info,
            "Subscribed tags:",
            &subscriptions.len().to_string(),
        );
        self.progress_listener
            .set_tag_total(subscriptions.len() as u64);

        let mut summary = SyncSummary::default();

        for (idx, tag) in subscriptions.tags().iter().enumerate() {
            self.progress_listener.tag_started(idx as u64 + 1, tag);

            match self.sync_tag(tag, &mut summary).await {
                Ok(()) => summary.tags_processed += 1,
                Err(err) => {
                    if self.failure_policy == FailurePolicy::Abort {
                        self.progress_listener
                            .log_event(LogType::Error, tag, &err.to_string());
                        self.progress_listener.main_done();
                        return Err(err);
                    }

                    warn!("Skipping tag {}: {}", tag, err);
                    self.progress_listener
                        .log_event(LogType::Warning, tag, &err.to_string());
                    summary.failed_tags.push(tag.clone());
                }
            }
        }

        self.progress_listener.main_done();

        Ok(summary)
    }

    async fn sync_tag(&self, tag: &str, summary: &mut SyncSummary) -> Result<(), SyncError> {
        let query = SearchQuery::subscribed_tag(tag);
        let hierarchy = SourceHierarchy::tag(tag);
        let page_size = self.gallery.page_size();

        if page_size == 0 {
            return Err(SyncError::unsupported(format!(
                "gallery reports an empty page size for tag {}",
                tag
            )));
        }

        let mut page_num: u16 = 1;

        loop {
            debug!("Scanning page {} of {}", page_num, tag);

            let page = self.gallery.search(&query, page_num).await?;
            summary.pages_requested += 1;

            let count = page.len();
            self.progress_listener.inc_main_total(count as u64);

            for wallpaper in page {
                self.process(&query, &hierarchy, &wallpaper, summary)
                    .await?;
                self.progress_listener.main_tick();
            }

            // A short page is the last one.
            if count < page_size {
                break;
            }

            page_num = page_num.checked_add(1).ok_or_else(|| {
                SyncError::unsupported(format!("tag {} has too many result pages", tag))
            })?;
        }

        Ok(())
    }

    async fn process(
        &self,
        query: &SearchQuery,
        hierarchy: &SourceHierarchy,
        wallpaper: &Wallpaper,
        summary: &mut SyncSummary,
    ) -> Result<(), SyncError> {
        if !query.purity.allows(wallpaper.purity) {
            debug!("Wallpaper {} is {}", wallpaper.id, wallpaper.purity);
            summary.skipped_purity += 1;
            return Ok(());
        }

        if self.dirs.exists(wallpaper, hierarchy).await? {
            self.progress_listener
                .log_event(LogType::Skip, &wallpaper.id, "already downloaded.");
            summary.skipped_existing += 1;
            return Ok(());
        }

        let destination = resolve_path(&self.dirs.unchecked, hierarchy, wallpaper)?;
        let target = destination.display().to_string();

        self.progress_listener
            .log_event(LogType::Download, &target, "Downloading to");

        let size = self
            .gallery
            .download(wallpaper, &destination)
            .await
            .map_err(|err| SyncError::download(err, &destination))?;

        debug!("Wrote {} bytes to {}", size, target);
        summary.downloaded += 1;

        Ok(())
    }
}
