use std::fmt::Debug;
use std::sync::Arc;

/// Type of log event, used for styling or filtering messages in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogType {
    /// General informational message.
    Info,
    /// Wallpaper was skipped (already known, or filtered by purity).
    Skip,
    /// A download is about to start.
    Download,
    /// A non-critical issue, like a tag that failed and was skipped.
    Warning,
    /// An error occurred for a specific tag or file being processed.
    Error,
}

/// Trait for reporting the progress of a sync run.
/// All methods should be thread-safe.
pub trait ProgressListener: Send + Sync + Debug {
    /// Called once, after the subscriptions were fetched.
    fn set_tag_total(&self, total: u64);
    /// A tag is about to be synced. `index` starts at 1.
    fn tag_started(&self, index: u64, tag: &str);
    /// Increments the total number of wallpapers seen.
    /// Called after every search page, since the final count isn't known upfront.
    fn inc_main_total(&self, delta: u64);
    /// Signals that one wallpaper has been handled (downloaded or skipped).
    fn main_tick(&self);
    /// Signals that the run is over.
    fn main_done(&self);

    /// Logs a categorized event message to be displayed in the progress UI.
    ///
    /// # Arguments
    /// * `log_type`: The category of the log message (e.g., Skip, Download, Error).
    /// * `target`: A string identifying the subject of the log (e.g., file path, tag name).
    /// * `message`: The descriptive message content.
    fn log_event(&self, log_type: LogType, target: &str, message: &str);
}

/// A no-operation implementation of `ProgressListener`.
/// Used as a default when no actual progress reporting is needed by the library consumer.
#[derive(Debug, Clone)]
pub struct NoOpProgressListener;

impl ProgressListener for NoOpProgressListener {
    fn set_tag_total(&self, _total: u64) {}
    fn tag_started(&self, _index: u64, _tag: &str) {}
    fn inc_main_total(&self, _delta: u64) {}
    fn main_tick(&self) {}
    fn main_done(&self) {}
    fn log_event(&self, _log_type: LogType, _target: &str, _message: &str) {}
}

/// Convenience type alias for a shared, thread-safe progress listener.
pub type SharedProgressListener = Arc<dyn ProgressListener>;

/// Returns a shared instance of a `NoOpProgressListener`.
pub fn no_op_progress_listener() -> SharedProgressListener {
    Arc::new(NoOpProgressListener)
}
