//! The fill rule: a single in-order pass over `items` that replaces empty
//! `image` fields with a filename derived from the entry's `item` identifier.
//!
//! This module is pure: it never touches the filesystem, so the one piece of
//! real logic can be tested without fixtures on disk.

use log::warn;
use serde_json::Value;

/// Extension appended to the item identifier when deriving a default image
pub const IMAGE_SUFFIX: &str = ".png";

/// A single image field that was filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageChange {
    /// The entry's `item` identifier
    pub item: String,
    /// The derived filename now stored in `image`
    pub image: String,
}

/// Outcome of one patching pass
#[derive(Debug, Clone, Default)]
pub struct PatchReport {
    /// Number of entries in `items` (0 when the key is absent)
    pub total_items: usize,
    /// Filled-in fields, in entry order
    pub changes: Vec<ImageChange>,
}

impl PatchReport {
    /// Number of entries whose `image` was filled in
    pub fn changed(&self) -> usize {
        self.changes.len()
    }
}

/// Fill in default images across the document's `items` array.
///
/// A document without an `items` array is left untouched and reported as
/// zero entries. Entry count and order are never altered.
pub fn patch_document(doc: &mut Value) -> PatchReport {
    let Some(items) = doc.get_mut("items").and_then(Value::as_array_mut) else {
        return PatchReport::default();
    };

    let mut report = PatchReport {
        total_items: items.len(),
        changes: Vec::new(),
    };
    for entry in items.iter_mut() {
        if let Some(change) = fill_default_image(entry) {
            report.changes.push(change);
        }
    }
    report
}

/// Apply the fill rule to one entry, returning the change if one was made.
///
/// Only an `image` that is present and exactly the empty string counts as
/// missing. A `null` or absent `image` is a different state and is left
/// alone.
fn fill_default_image(entry: &mut Value) -> Option<ImageChange> {
    if entry.get("image").and_then(Value::as_str) != Some("") {
        return None;
    }

    let item = match entry.get("item").and_then(Value::as_str) {
        Some(s) => s.to_owned(),
        None => {
            warn!("entry with empty image has no usable 'item' field, skipping");
            return None;
        }
    };

    let image = format!("{item}{IMAGE_SUFFIX}");
    entry["image"] = Value::String(image.clone());
    Some(ImageChange { item, image })
}
