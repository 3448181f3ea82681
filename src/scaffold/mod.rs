//! Scaffold module
//!
//! Creates the report directory and writes the rendered template into it,
//! copying the configured preamble alongside when it exists.

pub mod template;

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use filetime::FileTime;

use crate::display::print_status;
use crate::error::{NameKind, Result, ScaffoldError};
use crate::validate::is_invalid;

/// Paths produced by one successful run
#[derive(Debug, Clone, PartialEq)]
pub struct Scaffold {
    pub dir: PathBuf,
    pub file: PathBuf,
    pub preamble: Option<PathBuf>,
}

/// Create `cwd/name` and return its normalized path.
///
/// Exactly one directory is created; its parent must exist. Names that do
/// not resolve to a direct child of `cwd` (`""`, `.`, `..`) are rejected.
/// An existing directory is never reused. `force` is accepted but has no
/// effect yet.
pub fn create_dir(cwd: &Path, name: &str, force: bool) -> Result<PathBuf> {
    if is_invalid(name) {
        return Err(ScaffoldError::InvalidName {
            kind: NameKind::Directory,
            name: name.to_string(),
        });
    }

    let parent = normalize(cwd);
    let new_full_path = normalize(&cwd.join(name));
    if new_full_path.parent() != Some(parent.as_path()) {
        return Err(ScaffoldError::InvalidName {
            kind: NameKind::Directory,
            name: name.to_string(),
        });
    }

    if force {
        tracing::warn!("--force is not implemented; existing directories are never overwritten");
    }

    fs::create_dir(&new_full_path).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => ScaffoldError::AlreadyExists(new_full_path.clone()),
        _ => ScaffoldError::Io(e),
    })?;

    print_status("created the directory", &new_full_path);
    Ok(new_full_path)
}

/// Render the template into `dir_path/filename` and copy the preamble.
///
/// A missing or undefined preamble only prints a notice. The template file
/// is overwritten if it already exists.
pub fn create_file(
    dir_path: &Path,
    filename: &str,
    title: &str,
    author: &str,
    preamble: Option<&Path>,
) -> Result<Scaffold> {
    let filepath = dir_path.join(filename);
    let formatted = template::render(title, author);

    let copied = match preamble {
        Some(source) if source.is_file() => Some(copy_preserving(source, dir_path)?),
        _ => {
            println!("preamble is not found (or undefined).");
            None
        }
    };

    fs::write(&filepath, formatted)?;
    print_status("created the file", &filepath);

    Ok(Scaffold {
        dir: dir_path.to_path_buf(),
        file: filepath,
        preamble: copied,
    })
}

/// Copy `source` into `dir` under its own file name, keeping permissions
/// and access/modification times.
fn copy_preserving(source: &Path, dir: &Path) -> Result<PathBuf> {
    let file_name = source.file_name().ok_or_else(|| {
        ScaffoldError::Config(format!("Invalid preamble path: '{}'", source.display()))
    })?;
    let dest = dir.join(file_name);

    // fs::copy carries the permission bits over
    fs::copy(source, &dest)?;

    // Set by path: the copy may already be read-only
    let metadata = fs::metadata(source)?;
    filetime::set_file_times(
        &dest,
        FileTime::from_last_access_time(&metadata),
        FileTime::from_last_modification_time(&metadata),
    )?;

    tracing::debug!(from = %source.display(), to = %dest.display(), "copied preamble");
    Ok(dest)
}

/// Lexically normalize a path, resolving `.` and `..` components
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
