//! Run configuration.
//!
//! A single [`IndexConfig`] is built once per invocation and passed by
//! reference to the generator. There is no config file: the binary always
//! runs with [`IndexConfig::default`], and tests construct variations
//! directly.
//!
//! ## Defaults
//!
//! ```text
//! excluded          = [".git", ".github", ".nojekyll", "index.html"]
//! output_file       = "index.html"
//! name_column_width = 50
//! date_column_width = 20
//! ```
//!
//! The output file name is always treated as excluded, even when a caller
//! builds an exclusion set that omits it, so a generated page never lists
//! itself.

use std::collections::BTreeSet;

/// Version-control metadata directory.
pub const VCS_DIR: &str = ".git";
/// CI configuration directory.
pub const CI_DIR: &str = ".github";
/// GitHub Pages marker that turns off Jekyll processing.
pub const NO_JEKYLL_MARKER: &str = ".nojekyll";
/// Name of the generated listing page.
pub const DEFAULT_OUTPUT_FILE: &str = "index.html";

/// Settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Base names never shown on a listing page and never descended into.
    pub excluded: BTreeSet<String>,
    /// File name of the page written into every directory.
    pub output_file: String,
    /// Fixed width of the `<pre>` name column. Longer names get one space.
    pub name_column_width: usize,
    /// Fixed width the date column is right-padded to.
    pub date_column_width: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            excluded: [VCS_DIR, CI_DIR, NO_JEKYLL_MARKER, DEFAULT_OUTPUT_FILE]
                .into_iter()
                .map(String::from)
                .collect(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            name_column_width: 50,
            date_column_width: 20,
        }
    }
}

impl IndexConfig {
    /// Whether an entry with this base name must be left out of listings.
    pub fn is_excluded(&self, name: &str) -> bool {
        name == self.output_file || self.excluded.contains(name)
    }
}
