//! # File Store
//!
//! Thin wrappers over the five filesystem primitives the menu needs, all
//! scoped to one directory. Each call does exactly one operation with no
//! retry; failures come back as an [`FsError`] for the caller to report.
//!
//! Paths are built as `<root>/<name>` by plain concatenation. Nothing stops a
//! name like `../notes.txt` from reaching outside the root; such names are
//! only logged.

use log::{debug, warn};
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// The directory the program works in, relative to the current directory.
pub const FILES_DIR: &str = "./files";

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum FsError {
    List(io::Error),
    Read(io::Error),
    Write(io::Error),
    Remove(io::Error),
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::List(e) => write!(f, "could not list directory: {e}"),
            FsError::Read(e) => write!(f, "could not read file: {e}"),
            FsError::Write(e) => write!(f, "could not write file: {e}"),
            FsError::Remove(e) => write!(f, "could not remove file: {e}"),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.io_error())
    }
}

impl FsError {
    /// The underlying OS error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            FsError::List(e) | FsError::Read(e) | FsError::Write(e) | FsError::Remove(e) => e,
        }
    }
}

// ============================================================================
// Store
// ============================================================================

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(FILES_DIR)
    }
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn root_exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Resolves `name` against the root as `<root>/<name>`.
    ///
    /// Concatenation rather than `Path::join`, so an absolute `name` still
    /// lands under the root instead of replacing it.
    pub fn path_for(&self, name: &str) -> PathBuf {
        let mut path = OsString::from(self.root.as_os_str());
        path.push("/");
        path.push(name);
        let path = PathBuf::from(path);
        if climbs_out(name) {
            warn!("{} resolves outside {}", name, self.root.display());
        }
        path
    }

    /// Names of the root's entries, sorted.
    pub fn list(&self) -> Result<Vec<String>, FsError> {
        debug!("Listing {}", self.root.display());
        let mut names = fs::read_dir(&self.root)
            .map_err(FsError::List)?
            .map(|entry| {
                entry
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .map_err(FsError::List)
            })
            .collect::<Result<Vec<_>, _>>()?;
        names.sort();
        Ok(names)
    }

    /// Contents decoded as UTF-8; invalid sequences become U+FFFD.
    pub fn read(&self, name: &str) -> Result<String, FsError> {
        let path = self.path_for(name);
        debug!("Reading {}", path.display());
        let bytes = fs::read(&path).map_err(FsError::Read)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Creates the file or replaces its entire contents.
    pub fn write(&self, name: &str, contents: &str) -> Result<(), FsError> {
        let path = self.path_for(name);
        debug!("Writing {} bytes to {}", contents.len(), path.display());
        fs::write(&path, contents).map_err(FsError::Write)
    }

    /// Whether anything currently exists at the name. Errors count as absent.
    pub fn exists(&self, name: &str) -> bool {
        let path = self.path_for(name);
        match path.try_exists() {
            Ok(found) => found,
            Err(e) => {
                debug!("Existence check failed for {}: {}", path.display(), e);
                false
            }
        }
    }

    /// Removes a single file. Directories are not removed.
    pub fn remove(&self, name: &str) -> Result<(), FsError> {
        let path = self.path_for(name);
        debug!("Removing {}", path.display());
        fs::remove_file(&path).map_err(FsError::Remove)
    }
}

/// True when the `..` components of `name` outnumber the directories before them.
fn climbs_out(name: &str) -> bool {
    let mut depth: i32 = 0;
    for component in Path::new(name).components() {
        match component {
            Component::ParentDir => depth -= 1,
            Component::Normal(_) => depth += 1,
            _ => {}
        }
        if depth < 0 {
            return true;
        }
    }
    false
}
