//! Options accepted by the renderer and the storage layer

use serde::{Deserialize, Serialize};

/// Rendering configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Partition output into per-book sections with title/author headers
    pub group_by_book: bool,

    /// Reserved. Metadata lines are always rendered.
    pub include_metadata: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            group_by_book: true,
            include_metadata: true,
        }
    }
}

impl RenderOptions {
    /// Render entries one after another, without book headers
    pub fn flat() -> Self {
        Self {
            group_by_book: false,
            ..Self::default()
        }
    }

    pub fn with_group_by_book(mut self, group_by_book: bool) -> Self {
        self.group_by_book = group_by_book;
        self
    }
}

/// Options for writing a document through a storage provider
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WriteOptions {
    /// Replace an existing document instead of failing
    pub overwrite: bool,
}
