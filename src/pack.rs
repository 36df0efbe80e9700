//! Copies static assets into the output tree: the skin's `static/`
//! directory and the posts' `res/` directory. A missing source directory is
//! skipped; a failed copy is an error.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// A directory to copy and where to copy it.
#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Copies each resource that exists. Returns the resources that were
/// skipped because their source directory is missing.
pub fn pack(resources: &[Resource]) -> Result<Vec<PathBuf>> {
    let mut skipped = Vec::new();
    for resource in resources {
        if !resource.source.is_dir() {
            warn!("{} not found, skipping", resource.source.display());
            skipped.push(resource.source.clone());
            continue;
        }
        copy_dir(&resource.source, &resource.destination)?;
    }
    Ok(skipped)
}

/// Recursively copies `src` into `dst`, creating directories as needed and
/// overwriting files that already exist.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    for result in WalkDir::new(src).sort_by(|a, b| a.file_name().cmp(b.file_name())) {
        let entry = result?;
        // strip_prefix() can't fail; every entry is below `src`
        let relative = match entry.path().strip_prefix(src) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|err| Error::Io {
                path: target.clone(),
                err,
            })?;
        } else {
            debug!("copying {} -> {}", entry.path().display(), target.display());
            fs::copy(entry.path(), &target).map_err(|err| Error::Io {
                path: target.clone(),
                err,
            })?;
        }
    }
    Ok(())
}

/// The result of packing resources.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error copying resources.
#[derive(Debug)]
pub enum Error {
    /// Returned when a file or directory can't be written.
    Io { path: PathBuf, err: io::Error },

    /// Returned when the source tree can't be walked.
    WalkDir(walkdir::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io { path, err } => write!(f, "Copying to '{}': {}", path.display(), err),
            Error::WalkDir(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { path: _, err } => Some(err),
            Error::WalkDir(err) => Some(err),
        }
    }
}

impl From<walkdir::Error> for Error {
    /// Converts a [`walkdir::Error`] into an [`Error`]. It allows us to use
    /// the `?` operator while walking a source tree.
    fn from(err: walkdir::Error) -> Error {
        Error::WalkDir(err)
    }
}
