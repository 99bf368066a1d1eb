//! Per-entry metadata for the image-layer use case
//!
//! The tree itself is generic over its payload; this module provides the
//! concrete metadata an image-layer enumerator reports per path, used as the
//! payload type throughout the crate's tests and documentation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of filesystem object a layer entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    File,
    Directory,
    Symlink,
}

impl FileKind {
    pub fn is_file(self) -> bool {
        matches!(self, FileKind::File)
    }

    pub fn is_directory(self) -> bool {
        matches!(self, FileKind::Directory)
    }
}

/// Metadata attached to a single layer entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub kind: FileKind,

    /// Size in bytes as reported by the enumerator; zero for directories.
    pub size: u64,

    /// Unix permission bits, when the enumerator reports them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,

    /// Modification timestamp, when the enumerator reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

impl FileInfo {
    /// Metadata for a regular file of the given size.
    pub fn file(size: u64) -> Self {
        Self {
            kind: FileKind::File,
            size,
            mode: None,
            modified: None,
        }
    }

    /// Metadata for a directory entry.
    pub fn directory() -> Self {
        Self {
            kind: FileKind::Directory,
            size: 0,
            mode: None,
            modified: None,
        }
    }

    /// Metadata for a symbolic link entry.
    pub fn symlink() -> Self {
        Self {
            kind: FileKind::Symlink,
            size: 0,
            mode: None,
            modified: None,
        }
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = Some(modified);
        self
    }
}

impl fmt::Display for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.size)
    }
}
