//! Source loaders
//!
//! Decouples file validation from the OS file system so that the API can be
//! driven from memory in tests and embedders.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// Reads raw source bytes for a path.
pub trait SourceLoader: Send + Sync {
    /// Read the whole file in a single call (no streaming).
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Native OS file system loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeLoader;

impl SourceLoader for NativeLoader {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// An in-memory loader.
///
/// # Example
/// ```
/// use brack_api::{MemoryLoader, SourceLoader};
/// use std::path::Path;
///
/// let loader = MemoryLoader::with_files([("main.brack", "(print 1)")]);
/// assert_eq!(loader.read_file(Path::new("main.brack")).unwrap(), b"(print 1)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader pre-populated with files.
    pub fn with_files<I, S, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: AsRef<str>,
        C: AsRef<[u8]>,
    {
        let mut loader = Self::new();
        for (path, content) in files {
            loader.insert(path.as_ref(), content);
        }
        loader
    }

    pub fn insert(&mut self, path: impl AsRef<str>, content: impl AsRef<[u8]>) {
        self.files
            .insert(normalize(path.as_ref()), content.as_ref().to_vec());
    }
}

impl SourceLoader for MemoryLoader {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        let key = normalize(&path.to_string_lossy());
        self.files.get(&key).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{key}: not found"))
        })
    }
}

/// Uses forward slashes consistently for cross-platform compatibility.
fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}
