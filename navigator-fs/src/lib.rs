//! Capability-scoped file access for the navigator tools.
//!
//! Paths are UTF-8 (`camino`). Each operation opens a `cap-std` directory
//! handle at the path's anchor (the root for absolute paths, the working
//! directory otherwise) and resolves the remainder beneath it.
#![forbid(unsafe_code)]

use std::io::{self, Read};

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path for reading using ambient authority.
///
/// # Errors
/// Propagates the I/O error raised while opening the file.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read an entire UTF-8 text file into memory.
///
/// # Errors
/// Fails when the file cannot be opened or is not valid UTF-8.
pub fn read_utf8_to_string(path: &Utf8Path) -> io::Result<String> {
    let mut contents = String::new();
    open_utf8_file(path)?.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Return whether `path` exists and is a regular file.
///
/// # Errors
/// Returns the underlying error, including [`io::ErrorKind::NotFound`] when
/// nothing exists at `path`.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, relative) = anchor(path)?;
    if relative.as_str().is_empty() {
        return Ok(false);
    }
    dir.metadata(&relative).map(|meta| meta.is_file())
}

/// Create every missing directory above `path`.
///
/// # Errors
/// Propagates failures to open the anchor or create a directory.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let (dir, relative) = anchor(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    dir.create_dir_all(&relative)
}

/// Create or truncate the file at `path`, creating parent directories first.
///
/// # Errors
/// Propagates failures to create the parents or the file itself.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, relative) = anchor(path)?;
    if relative.as_str().is_empty() {
        return Err(io::Error::other(format!("{path} does not name a file")));
    }
    dir.create(&relative)
}

/// Split `path` into a directory handle for its anchor and the remainder.
fn anchor(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let mut base = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir => base.push(component),
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir | Utf8Component::Normal(_) => relative.push(component),
        }
    }
    if base.as_str().is_empty() {
        base.push(".");
    }
    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((dir, relative))
}
