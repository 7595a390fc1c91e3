//! # dir-index
//!
//! Generates static "Index of /dir" pages for a file tree, in the style of a
//! classic web-server directory listing. Every directory reachable from the
//! root gets its own `index.html` enumerating its immediate children.
//!
//! # Pipeline
//!
//! ```text
//! scan      directory  →  ListingPage   (read_dir + metadata, filtered, sorted)
//! generate  ListingPage →  index.html   (maud render, write, recurse)
//! output    IndexEvent  →  stdout       (progress lines)
//! ```
//!
//! Each run regenerates every page from a live scan; nothing is cached
//! between runs.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Exclusion set and column widths for a run |
//! | [`scan`] | Reads one directory into sorted [`scan::DirectoryEntry`] values |
//! | [`generate`] | Renders listing pages and walks the tree depth-first |
//! | [`output`] | CLI progress formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over String Templates
//!
//! Pages are rendered with [Maud](https://maud.lambda.xyz/). File names are
//! untrusted input, and maud escapes every interpolated value, so a file
//! called `<script>.txt` shows up as text instead of markup.
//!
//! ## Exclusions
//!
//! `.git`, `.github`, `.nojekyll` and the generated `index.html` itself are
//! never listed. Excluded directories are not descended into either, so
//! they never receive a page.
//!
//! ## Symlinked Directories
//!
//! A symlink to a directory is listed as a directory (`name/`) but is not
//! descended into, so link cycles cannot recurse forever. The linked
//! directory therefore gets no `index.html` of its own unless it is also
//! reachable through real directories.
//!
//! ## Fail Fast
//!
//! The first filesystem error ends the run. Pages written before the error
//! are left in place; rerunning regenerates everything.

pub mod config;
pub mod generate;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
