//! Local side of walldrop: file layout, deduplication and the sync pipeline that ties them to a
//! [`Gallery`](walldrop_extractors::Gallery).
pub mod error;
pub mod paths;
pub mod progress;
pub mod sync;

pub use crate::paths::ManagedDirectories;
pub use crate::sync::{FailurePolicy, SyncPipeline, SyncSummary};
