//! Filesystem blob store
//!
//! ## Layout
//!
//! Each blob path maps to one file under the root directory, with `/`
//! separating directories: `applications/ada` lives at
//! `<root>/applications/ada`.
//!
//! ## File Format
//!
//! ```text
//! <content type>\n
//! <payload bytes>
//! ```
//!
//! ## Atomic Replace
//!
//! `put` writes to a hidden temp file in the target directory, optionally
//! fsyncs it, then renames it over the target. Readers see either the old
//! blob or the new one, never a torn write. Hidden files (leading `.`) are
//! never reported by `list`.

use crate::blob::{Blob, BlobStore};
use admissions_core::{Error, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Blob store rooted at a directory
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
    fsync: bool,
}

impl FsBlobStore {
    /// Open (creating if needed) a store rooted at `root`
    ///
    /// With `fsync` set, every `put` is flushed to disk before it returns.
    pub fn open(root: impl AsRef<Path>, fsync: bool) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)
            .map_err(|e| Error::storage(root.display().to_string(), e))?;
        debug!(root = %root.display(), fsync, "opened filesystem blob store");
        Ok(FsBlobStore { root, fsync })
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether writes are fsynced
    pub fn fsync(&self) -> bool {
        self.fsync
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let valid = !path.is_empty()
            && path
                .split('/')
                .all(|seg| !seg.is_empty() && !seg.starts_with('.') && !seg.contains('\\'));
        if !valid {
            return Err(Error::storage(path, "invalid blob path"));
        }

        let mut resolved = self.root.clone();
        for segment in path.split('/') {
            resolved.push(segment);
        }
        Ok(resolved)
    }

    fn decode(path: &str, raw: Vec<u8>) -> Result<Blob> {
        let split = raw
            .iter()
            .position(|b| *b == b'\n')
            .ok_or_else(|| Error::storage(path, "blob file is missing its header"))?;
        let content_type = std::str::from_utf8(&raw[..split])
            .map_err(|e| Error::storage(path, e))?
            .to_string();
        Ok(Blob::new(raw[split + 1..].to_vec(), content_type))
    }

    fn write_atomic(&self, target: &Path, bytes: &[u8], content_type: &str) -> io::Result<()> {
        let dir = target
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "blob has no parent"))?;
        fs::create_dir_all(dir)?;

        let tmp = dir.join(format!(".tmp-{}", Uuid::new_v4()));

        let result = (|| {
            let mut file = File::create(&tmp)?;
            file.write_all(content_type.as_bytes())?;
            file.write_all(b"\n")?;
            file.write_all(bytes)?;
            if self.fsync {
                file.sync_all()?;
            }
            fs::rename(&tmp, target)
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp);
            return result;
        }

        if self.fsync {
            sync_dir(dir);
        }
        Ok(())
    }

    fn collect(&self, dir: &Path, rel: &str, out: &mut Vec<String>) -> io::Result<()> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e),
        };

        for entry in entries {
            let entry = entry?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(_) => continue,
            };
            if name.starts_with('.') {
                continue;
            }
            let child = if rel.is_empty() {
                name
            } else {
                format!("{}/{}", rel, name)
            };
            if entry.file_type()?.is_dir() {
                self.collect(&entry.path(), &child, out)?;
            } else {
                out.push(child);
            }
        }
        Ok(())
    }
}

#[cfg(unix)]
fn sync_dir(dir: &Path) {
    if let Err(e) = File::open(dir).and_then(|d| d.sync_all()) {
        warn!(dir = %dir.display(), error = %e, "directory fsync failed");
    }
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) {}

impl BlobStore for FsBlobStore {
    fn get(&self, path: &str) -> Result<Option<Blob>> {
        let file = self.resolve(path)?;
        match fs::read(&file) {
            Ok(raw) => Self::decode(path, raw).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::storage(path, e)),
        }
    }

    fn put(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        if content_type.contains('\n') {
            return Err(Error::storage(path, "content type must be a single line"));
        }
        let file = self.resolve(path)?;
        self.write_atomic(&file, &bytes, content_type)
            .map_err(|e| Error::storage(path, e))
    }

    fn delete(&self, path: &str) -> Result<bool> {
        let file = self.resolve(path)?;
        match fs::remove_file(&file) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::storage(path, e)),
        }
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let mut paths = Vec::new();
        self.collect(&self.root, "", &mut paths)
            .map_err(|e| Error::storage(prefix, e))?;
        paths.retain(|p| p.starts_with(prefix));
        paths.sort();
        Ok(paths)
    }

    fn backend_name(&self) -> &'static str {
        "filesystem"
    }
}
