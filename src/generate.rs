//! Listing page generation.
//!
//! Scans a directory, renders its [`ListingPage`] to HTML, writes
//! `index.html` next to the listed entries, then recurses depth-first into
//! every child directory in page order.
//!
//! ## Page Layout
//!
//! ```text
//! Index of ./docs
//! ----------------------------------------------
//! ../
//! api/                                              14-Nov-2023 22:13   -
//! guide.md                                          14-Nov-2023 22:13   2048
//! ----------------------------------------------
//! ```
//!
//! The `<pre>` block imitates a monospace server listing:
//!
//! - **Name column**: a fixed [`IndexConfig::name_column_width`] characters
//!   (50 by default). A name that fills or overflows the column is still
//!   followed by one space, so long names push their row out of alignment.
//! - **Date column**: `DD-Mon-YYYY HH:MM` in local time, right-padded to
//!   [`IndexConfig::date_column_width`].
//! - **Size column**: decimal byte count, or `-` for directories.
//!
//! An empty directory (or one holding only excluded names) renders the
//! parent link and nothing else.
//!
//! ## Escaping
//!
//! Names are interpolated through maud, so `<`, `>`, `&` and quotes in file
//! names are escaped in both the link target and the link text.
//!
//! ## Failure
//!
//! The first I/O error aborts the walk. Pages already written stay on disk.

use crate::config::IndexConfig;
use crate::scan::{self, DirectoryEntry, FsMtime, ListingPage, MtimeSource, ScanError};
use chrono::{DateTime, Local, TimeZone};
use maud::{DOCTYPE, Markup, html};
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Progress notifications emitted while walking the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEvent {
    /// About to scan `directory` and write its page to `output`.
    Indexing { directory: PathBuf, output: PathBuf },
    /// Page written to `output` with `entries` rows.
    Written { output: PathBuf, entries: usize },
}

const PARENT_LINK: &str = "../";
const DATE_FORMAT: &str = "%d-%b-%Y %H:%M";
const DIRECTORY_SIZE: &str = "-";

/// Generate listing pages for `root` and everything below it, using real
/// modification times.
pub fn generate(
    root: &Path,
    config: &IndexConfig,
    mut report: impl FnMut(&IndexEvent),
) -> Result<(), IndexError> {
    IndexGenerator::new(config, &FsMtime).generate_index(root, &mut report)
}

/// Depth-first listing generator for one run.
pub struct IndexGenerator<'a> {
    config: &'a IndexConfig,
    mtime: &'a dyn MtimeSource,
}

impl<'a> IndexGenerator<'a> {
    pub fn new(config: &'a IndexConfig, mtime: &'a dyn MtimeSource) -> Self {
        Self { config, mtime }
    }

    /// Write `directory/index.html`, then recurse into each subdirectory.
    pub fn generate_index(
        &self,
        directory: &Path,
        report: &mut dyn FnMut(&IndexEvent),
    ) -> Result<(), IndexError> {
        report(&IndexEvent::Indexing {
            directory: directory.to_path_buf(),
            output: directory.join(&self.config.output_file),
        });

        let page = scan::scan_directory(directory, self.config, self.mtime)?;
        let markup = render_listing(&page, self.config);
        fs::write(&page.output, markup.into_string()).map_err(|source| IndexError::Write {
            path: page.output.clone(),
            source,
        })?;

        report(&IndexEvent::Written {
            output: page.output.clone(),
            entries: page.entries.len(),
        });

        for subdir in page.subdirectories() {
            log::debug!("descending into {}", subdir.display());
            self.generate_index(subdir, report)?;
        }
        Ok(())
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a complete listing document.
pub fn render_listing(page: &ListingPage, config: &IndexConfig) -> Markup {
    let title = format!("Index of {}", page.directory.display());
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                h1 { (title) }
                hr;
                pre {
                    a href=(PARENT_LINK) { (PARENT_LINK) } "\n"
                    @for entry in &page.entries {
                        (entry_line(entry, config.name_column_width, config.date_column_width))
                    }
                }
                hr;
            }
        }
    }
}

/// One `<pre>` row: link, name padding, date, date padding, size.
fn entry_line(entry: &DirectoryEntry, name_width: usize, date_width: usize) -> Markup {
    let display = entry.display_name();
    let padding = column_padding(name_width, display.chars().count());
    let date = format!("{:<date_width$}", format_modified(entry.modified));

    html! {
        a href=(display) { (display) }
        (padding) (date) (format_size(entry.size)) "\n"
    }
}

// ============================================================================
// Column formatting
// ============================================================================

/// Spaces needed to reach `width` after `used` characters, never fewer
/// than one.
pub fn column_padding(width: usize, used: usize) -> String {
    " ".repeat(width.saturating_sub(used).max(1))
}

pub fn format_modified(time: SystemTime) -> String {
    format_timestamp(&DateTime::<Local>::from(time))
}

/// `DD-Mon-YYYY HH:MM`, e.g. `05-Mar-2024 09:07`.
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format(DATE_FORMAT).to_string()
}

pub fn format_size(size: Option<u64>) -> String {
    match size {
        Some(bytes) => bytes.to_string(),
        None => DIRECTORY_SIZE.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
