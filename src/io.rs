//! File boundary: loading and persisting manifest documents.
//!
//! These adapters are the only code in the crate that touches the
//! filesystem. Handles are scoped to each function so they are released on
//! every exit path.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::{Error, Result};

/// Read and parse the manifest at `path`.
pub fn load_document(path: &Path) -> Result<Value> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Unexpected(e.to_string()),
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            Error::Unexpected(e.to_string())
        } else {
            Error::Format {
                path: path.to_path_buf(),
                msg: e.to_string(),
            }
        }
    })
}

/// Serialize `doc` to `path`, creating or overwriting the file.
///
/// Layout matches the manifest convention: UTF-8, 4-space indentation,
/// non-ASCII characters emitted literally.
pub fn write_document(path: &Path, doc: &Value) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        doc.serialize(&mut ser).map_err(|e| {
            if e.is_io() {
                Error::Io {
                    path: path.to_path_buf(),
                    source: e.into(),
                }
            } else {
                Error::Unexpected(e.to_string())
            }
        })?;
    }

    writer.flush().map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
