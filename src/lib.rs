//! Item manifest image patcher
//!
//! Reads a JSON item manifest, fills in a default image filename for every
//! entry whose `image` field is present but empty, and writes the result to
//! a new file. The derived filename is the entry's `item` identifier plus
//! `.png`. All other fields, unknown keys included, round-trip unmodified.
//!
//! The fill rule itself is a pure function over an in-memory document, so it
//! can be used (and tested) without touching a filesystem:
//!
//! ```
//! use serde_json::json;
//!
//! let mut doc = json!({"items": [
//!     {"item": "diamond_sword", "image": ""},
//!     {"item": "stone", "image": "stone.png"}
//! ]});
//!
//! let report = itemfix::patch_document(&mut doc);
//! assert_eq!(report.total_items, 2);
//! assert_eq!(report.changed(), 1);
//! assert_eq!(doc["items"][0]["image"], "diamond_sword.png");
//! ```
//!
//! The file-backed pipeline is `runner::run`, driven by a [`PatcherConfig`].

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod patcher;
pub use patcher::{patch_document, ImageChange, PatchReport, IMAGE_SUFFIX};

// File boundary adapters (the only filesystem-touching code)
pub mod io;
pub use io::{load_document, write_document};

// Pipeline composition and the console-facing Reporter seam
pub mod runner;
pub use runner::{run, Reporter};

/// Configuration for one patching run
///
/// The defaults mirror the conventional manifest filenames; both paths can
/// be overridden for arbitrary locations or test directories.
#[derive(Debug, Clone)]
pub struct PatcherConfig {
    /// Manifest to read
    pub input: PathBuf,
    /// Destination for the patched manifest (created or overwritten)
    pub output: PathBuf,
}

impl Default for PatcherConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data.json"),
            output: PathBuf::from("data_updated.json"),
        }
    }
}
