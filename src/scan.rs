//! Directory scanning.
//!
//! Reads the immediate children of one directory and turns them into a
//! sorted [`ListingPage`]. Nothing here writes to disk; rendering and
//! recursion live in [`crate::generate`].
//!
//! ## Ordering
//!
//! Entries are ordered directories first, then by case-insensitive name.
//! Names that differ only in case fall back to a byte-wise comparison so
//! that the order is total and a rescan of an unchanged tree always yields
//! the same page:
//!
//! ```text
//! a_dir/
//! Zeta/
//! apple.txt
//! B.txt
//! b.txt
//! ```
//!
//! ## Symlinks
//!
//! Type and size come from the link target (`fs::metadata`), so a link to a
//! directory is listed as a directory. [`ListingPage::subdirectories`] only
//! yields real directories, which keeps link cycles from recursing forever.

use crate::config::IndexConfig;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read directory {path}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("cannot read metadata for {path}: {source}")]
    Metadata { path: PathBuf, source: io::Error },
}

/// Source of modification times.
///
/// Production code reads the filesystem ([`FsMtime`]). Tests substitute a
/// fixed clock so that rendered pages are byte-for-byte reproducible even
/// though writing `index.html` bumps directory mtimes.
pub trait MtimeSource {
    fn modified(&self, path: &Path, metadata: &Metadata) -> io::Result<SystemTime>;
}

/// Reads `st_mtime` from the entry's metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsMtime;

impl MtimeSource for FsMtime {
    fn modified(&self, _path: &Path, metadata: &Metadata) -> io::Result<SystemTime> {
        metadata.modified()
    }
}

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Base name, lossily converted to UTF-8 for display.
    pub name: String,
    /// Full path used for filesystem access.
    pub path: PathBuf,
    pub is_dir: bool,
    /// Entry itself is a symbolic link (its type/size describe the target).
    pub is_symlink: bool,
    /// Byte count for files, `None` for directories.
    pub size: Option<u64>,
    pub modified: SystemTime,
}

impl DirectoryEntry {
    /// Name as shown on the page: directories get a trailing `/`.
    pub fn display_name(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// The listing of one directory, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// Directory being listed, as reached from the run's root argument.
    pub directory: PathBuf,
    /// Where the rendered page is written.
    pub output: PathBuf,
    /// Sorted children, exclusions already removed.
    pub entries: Vec<DirectoryEntry>,
}

impl ListingPage {
    /// Real (non-symlink) child directories, in page order.
    pub fn subdirectories(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|e| e.is_dir && !e.is_symlink)
            .map(|e| e.path.as_path())
    }
}

/// Scan `directory` into a sorted [`ListingPage`].
///
/// Any I/O failure, including a single unreadable child, aborts the scan.
pub fn scan_directory(
    directory: &Path,
    config: &IndexConfig,
    mtime: &dyn MtimeSource,
) -> Result<ListingPage, ScanError> {
    let read_dir_err = |source| ScanError::ReadDir {
        path: directory.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(directory).map_err(read_dir_err)? {
        let dir_entry = dir_entry.map_err(read_dir_err)?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();

        if config.is_excluded(&name) {
            log::debug!("excluding {}", dir_entry.path().display());
            continue;
        }

        entries.push(read_entry(name, dir_entry.path(), mtime)?);
    }

    sort_entries(&mut entries);

    Ok(ListingPage {
        directory: directory.to_path_buf(),
        output: directory.join(&config.output_file),
        entries,
    })
}

fn read_entry(
    name: String,
    path: PathBuf,
    mtime: &dyn MtimeSource,
) -> Result<DirectoryEntry, ScanError> {
    let metadata_err = |source| ScanError::Metadata {
        path: path.clone(),
        source,
    };

    let is_symlink = fs::symlink_metadata(&path)
        .map_err(metadata_err)?
        .file_type()
        .is_symlink();
    let metadata = fs::metadata(&path).map_err(metadata_err)?;
    let modified = mtime.modified(&path, &metadata).map_err(metadata_err)?;
    let is_dir = metadata.is_dir();

    log::trace!("entry {} dir={} symlink={}", path.display(), is_dir, is_symlink);

    Ok(DirectoryEntry {
        name,
        is_dir,
        is_symlink,
        size: (!is_dir).then(|| metadata.len()),
        modified,
        path,
    })
}

/// Directories first, then case-insensitive name, then exact name.
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by_cached_key(|e| (!e.is_dir, e.name.to_lowercase(), e.name.clone()));
}
