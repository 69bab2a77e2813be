//! Storage abstraction for reading exports and writing Markdown documents

use crate::error::StorageError;
use crate::types::WriteOptions;
use async_trait::async_trait;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

const MARKDOWN_EXTENSION: &str = ".md";

/// Abstract storage provider trait
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Read data from the given path
    async fn read(&self, path: &str) -> StorageResult<Vec<u8>>;

    /// Write data to the given path, replacing any existing data
    async fn write(&self, path: &str, data: Vec<u8>) -> StorageResult<()>;

    /// Check if a path exists
    async fn exists(&self, path: &str) -> StorageResult<bool>;
}

/// Local filesystem storage provider
pub struct LocalStorage {
    root: std::path::PathBuf,
}

impl LocalStorage {
    /// Create a new local storage provider with the given root directory
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Safely resolve a path, preventing path traversal attacks
    fn full_path(&self, path: &str) -> StorageResult<std::path::PathBuf> {
        use std::path::Component;

        let mut normalized = std::path::PathBuf::new();
        for component in std::path::Path::new(path).components() {
            match component {
                Component::Normal(c) => normalized.push(c),
                Component::CurDir => {}
                Component::ParentDir | Component::Prefix(_) | Component::RootDir => {
                    return Err(StorageError::BackendError(
                        "Path traversal attempt detected".to_string(),
                    ));
                }
            }
        }

        Ok(self.root.join(normalized))
    }
}

fn io_error(path: &str, e: std::io::Error) -> StorageError {
    match e.kind() {
        std::io::ErrorKind::NotFound => StorageError::NotFound(path.to_string()),
        std::io::ErrorKind::PermissionDenied => StorageError::PermissionDenied(path.to_string()),
        _ => StorageError::BackendError(e.to_string()),
    }
}

#[async_trait]
impl StorageProvider for LocalStorage {
    async fn read(&self, path: &str) -> StorageResult<Vec<u8>> {
        let full_path = self.full_path(path)?;
        tokio::fs::read(full_path)
            .await
            .map_err(|e| io_error(path, e))
    }

    async fn write(&self, path: &str, data: Vec<u8>) -> StorageResult<()> {
        let full_path = self.full_path(path)?;
        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(path, e))?;
        }
        tokio::fs::write(full_path, data)
            .await
            .map_err(|e| io_error(path, e))
    }

    async fn exists(&self, path: &str) -> StorageResult<bool> {
        let full_path = self.full_path(path)?;
        tokio::fs::try_exists(full_path)
            .await
            .map_err(|e| io_error(path, e))
    }
}

/// In-memory storage provider (for testing)
#[derive(Default)]
pub struct MemoryStorage {
    data: std::sync::RwLock<std::collections::HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StorageError {
        StorageError::BackendError("memory storage lock poisoned".to_string())
    }
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn read(&self, path: &str) -> StorageResult<Vec<u8>> {
        self.data
            .read()
            .map_err(|_| Self::poisoned())?
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(path.to_string()))
    }

    async fn write(&self, path: &str, data: Vec<u8>) -> StorageResult<()> {
        self.data
            .write()
            .map_err(|_| Self::poisoned())?
            .insert(path.to_string(), data);
        Ok(())
    }

    async fn exists(&self, path: &str) -> StorageResult<bool> {
        Ok(self
            .data
            .read()
            .map_err(|_| Self::poisoned())?
            .contains_key(path))
    }
}

/// Read a source file as text, replacing invalid UTF-8
pub async fn read_text(storage: &dyn StorageProvider, path: &str) -> StorageResult<String> {
    let data = storage.read(path).await?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Write a Markdown document and return the path it was written to.
///
/// The path gets a `.md` extension if it lacks one. An existing document is
/// only replaced when `options.overwrite` is set.
pub async fn write_markdown(
    storage: &dyn StorageProvider,
    path: &str,
    content: &str,
    options: WriteOptions,
) -> StorageResult<String> {
    let path = if path.ends_with(MARKDOWN_EXTENSION) {
        path.to_string()
    } else {
        format!("{}{}", path, MARKDOWN_EXTENSION)
    };

    if !options.overwrite && storage.exists(&path).await? {
        return Err(StorageError::AlreadyExists(path));
    }

    storage.write(&path, content.as_bytes().to_vec()).await?;
    tracing::debug!("Wrote {} bytes to {}", content.len(), path);
    Ok(path)
}

/// Find a Markdown path that is not in use yet.
///
/// Returns `<base>.md` if free, otherwise `<base> 1.md`, `<base> 2.md`, ...
pub async fn unique_path(storage: &dyn StorageProvider, base: &str) -> StorageResult<String> {
    let base = base.strip_suffix(MARKDOWN_EXTENSION).unwrap_or(base);
    let mut path = format!("{}{}", base, MARKDOWN_EXTENSION);
    let mut counter = 1;

    while storage.exists(&path).await? {
        path = format!("{} {}{}", base, counter, MARKDOWN_EXTENSION);
        counter += 1;
    }

    Ok(path)
}

/// Name used when a title leaves nothing usable as a file name
pub const UNTITLED: &str = "Untitled";

/// Replace characters that are not allowed in file names with `-`.
///
/// A name that ends up empty or made only of dots becomes [`UNTITLED`].
pub fn sanitize_filename(name: &str) -> String {
    let sanitized = name
        .chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c => c,
        })
        .collect::<String>();
    let sanitized = sanitized.trim();

    if sanitized.chars().all(|c| c == '.') {
        UNTITLED.to_string()
    } else {
        sanitized.to_string()
    }
}

/// Join a folder and a file name with `/`, skipping an empty folder
pub fn join_path(folder: &str, name: &str) -> String {
    let folder = folder.trim_end_matches('/');
    if folder.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", folder, name)
    }
}
