/// Counters collected during one sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncSummary {
    /// Tags that were fully synced.
    pub tags_processed: u64,
    /// Search pages requested, over all tags.
    pub pages_requested: u64,
    pub downloaded: u64,
    /// Wallpapers already present in one of the managed directories.
    pub skipped_existing: u64,
    /// Wallpapers rejected by the purity filter.
    pub skipped_purity: u64,
    /// Tags abandoned after an error. Only filled when the run skips failed tags.
    pub failed_tags: Vec<String>,
}

impl SyncSummary {
    /// Number of wallpapers the run looked at.
    #[inline]
    pub const fn seen(&self) -> u64 {
        self.downloaded + self.skipped_existing + self.skipped_purity
    }

    #[inline]
    pub fn has_failures(&self) -> bool {
        !self.failed_tags.is_empty()
    }
}
