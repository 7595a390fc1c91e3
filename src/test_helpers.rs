//! Shared test utilities.
//!
//! Fixture builders, a fixed modification-time source, and helpers that
//! pull entry lines back out of rendered pages.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = build_tree(&[("docs/", ""), ("docs/guide.md", "# Guide"), ("B.txt", "b")]);
//! generate_fixed(tmp.path());
//!
//! assert_eq!(listed_names(&read_index(tmp.path())), vec!["docs/", "B.txt"]);
//! assert_every_directory_indexed(tmp.path());
//! ```

use std::fs::Metadata;
use std::io;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::config::IndexConfig;
use crate::generate::IndexGenerator;
use crate::scan::{ListingPage, MtimeSource};

/// 2023-11-14 22:13:20 UTC.
pub fn fixed_time() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(1_700_000_000)
}

/// Reports the same modification time for every entry.
pub struct FixedMtime(pub SystemTime);

impl MtimeSource for FixedMtime {
    fn modified(&self, _path: &Path, _metadata: &Metadata) -> io::Result<SystemTime> {
        Ok(self.0)
    }
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp tree. Paths ending in `/` become directories, everything
/// else a file with the given contents (parents created as needed).
pub fn build_tree(items: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (path, contents) in items {
        let full = tmp.path().join(path.trim_end_matches('/'));
        if path.ends_with('/') {
            std::fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&full, contents).unwrap();
        }
    }
    tmp
}

/// Run the generator over `root` with default config and [`fixed_time`].
pub fn generate_fixed(root: &Path) {
    let config = IndexConfig::default();
    let mtime = FixedMtime(fixed_time());
    IndexGenerator::new(&config, &mtime)
        .generate_index(root, &mut |_| {})
        .unwrap();
}

// =========================================================================
// Page inspection
// =========================================================================

pub fn entry_names(page: &ListingPage) -> Vec<&str> {
    page.entries.iter().map(|e| e.name.as_str()).collect()
}

/// Read `dir/index.html`. Panics with the path if it is missing.
pub fn read_index(dir: &Path) -> String {
    let path = dir.join("index.html");
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

/// Lines of the `<pre>` block after the parent link.
pub fn entry_lines(html: &str) -> Vec<&str> {
    let start = html.find("<pre>").expect("page has no <pre> block") + "<pre>".len();
    let end = html.find("</pre>").expect("page has unterminated <pre> block");
    let mut lines = html[start..end].lines();
    let parent = lines.next().expect("<pre> block is empty");
    assert_eq!(parent, r#"<a href="../">../</a>"#, "first line must be the parent link");
    lines.collect()
}

/// Link texts of all entry lines, in page order.
pub fn listed_names(html: &str) -> Vec<&str> {
    entry_lines(html)
        .into_iter()
        .map(|line| {
            let text_start = line.find('>').expect("entry line has no link") + 1;
            let text_end = line.find("</a>").expect("entry line has no closing </a>");
            &line[text_start..text_end]
        })
        .collect()
}

// =========================================================================
// Tree assertions
// =========================================================================

/// Every directory under `root` not hidden behind an excluded name has an
/// `index.html`; excluded directories have none.
pub fn assert_every_directory_indexed(root: &Path) {
    let config = IndexConfig::default();
    let walker = WalkDir::new(root).into_iter().filter_entry(|e| {
        e.depth() == 0 || !config.is_excluded(&e.file_name().to_string_lossy())
    });
    for entry in walker {
        let entry = entry.unwrap();
        if entry.file_type().is_dir() {
            assert!(
                entry.path().join("index.html").is_file(),
                "missing index.html in {}",
                entry.path().display()
            );
        }
    }

    for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy();
        if entry.depth() > 0 && entry.file_type().is_dir() && config.is_excluded(&name) {
            assert!(
                !entry.path().join("index.html").exists(),
                "excluded directory {} was indexed",
                entry.path().display()
            );
        }
    }
}
