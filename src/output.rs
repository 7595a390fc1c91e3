//! CLI progress output.
//!
//! Every directory produces a short block on stdout:
//!
//! ```text
//! Indexing ./docs
//!     Output: ./docs/index.html
//!     Generated index with 3 entries
//! ```
//!
//! and the run ends with:
//!
//! ```text
//! ==> Index generation complete: .
//! ```
//!
//! Format functions are pure (they return lines) so they can be tested
//! without capturing stdout; the `print_*` wrappers do the writing.

use crate::generate::IndexEvent;
use std::path::Path;

/// Lines for one generator event.
pub fn format_index_event(event: &IndexEvent) -> Vec<String> {
    match event {
        IndexEvent::Indexing { directory, output } => vec![
            format!("Indexing {}", directory.display()),
            format!("    Output: {}", output.display()),
        ],
        IndexEvent::Written { entries, .. } => {
            vec![format!("    Generated index with {}", entry_count(*entries))]
        }
    }
}

pub fn print_index_event(event: &IndexEvent) {
    for line in format_index_event(event) {
        println!("{}", line);
    }
}

pub fn format_completion(root: &Path) -> String {
    format!("==> Index generation complete: {}", root.display())
}

pub fn print_completion(root: &Path) {
    println!("{}", format_completion(root));
}

fn entry_count(n: usize) -> String {
    match n {
        0 => "no entries".to_string(),
        1 => "1 entry".to_string(),
        n => format!("{} entries", n),
    }
}
