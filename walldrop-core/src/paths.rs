//! Where wallpapers live on disk.
//!
//! The local repository is split in three directories:
//! - `unchecked`: fresh downloads nobody looked at yet. The only place the sync writes to.
//! - `checked`: wallpapers the user decided to keep.
//! - `unwanted`: wallpapers the user rejected. Kept around so they are never fetched again.
//!
//! A wallpaper is "already known" when a file with its derived name exists in any of them.
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use tokio::fs::{create_dir_all, metadata};
use walldrop_common::wallpaper::{SourceHierarchy, Wallpaper};

use crate::error::SyncError;

const RESERVED: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Makes a single segment safe to use inside a file name.
///
/// Reserved and control characters become `_`, as does a segment that is empty or made only of
/// dots.
pub fn sanitize_segment(segment: &str) -> String {
    if segment.chars().all(|c| c == '.') {
        return String::from("_");
    }

    segment
        .chars()
        .map(|c| {
            if RESERVED.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Builds the file name of `wallpaper`: every hierarchy segment followed by the image's original
/// file name, joined with `-`.
pub fn file_name(hierarchy: &SourceHierarchy, wallpaper: &Wallpaper) -> Result<String, SyncError> {
    let Some(original) = wallpaper.file_name() else {
        return Err(SyncError::unsupported(format!(
            "image URL of wallpaper {} has no file name: {}",
            wallpaper.id, wallpaper.image_url
        )));
    };

    let name = hierarchy
        .segments()
        .iter()
        .map(|seg| sanitize_segment(seg))
        .chain(std::iter::once(sanitize_segment(original)))
        .collect::<Vec<_>>()
        .join("-");

    Ok(name)
}

/// Full path of `wallpaper` under `base`. Pure and deterministic.
#[inline]
pub fn resolve_path(
    base: &Path,
    hierarchy: &SourceHierarchy,
    wallpaper: &Wallpaper,
) -> Result<PathBuf, SyncError> {
    Ok(base.join(file_name(hierarchy, wallpaper)?))
}

/// The three roots of the local repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedDirectories {
    pub base: PathBuf,
    pub unchecked: PathBuf,
    pub checked: PathBuf,
    pub unwanted: PathBuf,
}

impl ManagedDirectories {
    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();

        Self {
            unchecked: base.join("unchecked"),
            checked: base.join("checked"),
            unwanted: base.join("unwanted"),
            base,
        }
    }

    /// All three roots, in lookup order.
    #[inline]
    pub fn roots(&self) -> [&Path; 3] {
        [
            self.unchecked.as_path(),
            self.checked.as_path(),
            self.unwanted.as_path(),
        ]
    }

    /// Creates the base directory and the three roots if they are missing.
    pub async fn create_all(&self) -> Result<(), SyncError> {
        for dir in std::iter::once(self.base.as_path()).chain(self.roots()) {
            debug!("Creating directory {}", dir.display());
            create_dir_all(dir)
                .await
                .map_err(|err| SyncError::storage(dir, err))?;
        }

        Ok(())
    }

    /// `true` if a regular file named after `wallpaper` exists in any of the three roots.
    pub async fn exists(
        &self,
        wallpaper: &Wallpaper,
        hierarchy: &SourceHierarchy,
    ) -> Result<bool, SyncError> {
        let name = file_name(hierarchy, wallpaper)?;

        for root in self.roots() {
            let candidate = root.join(&name);

            match metadata(&candidate).await {
                Ok(meta) if meta.is_file() => {
                    debug!("Found {}", candidate.display());
                    return Ok(true);
                }
                Ok(_) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => return Err(SyncError::storage(candidate, err)),
            }
        }

        Ok(false)
    }
}
