use std::path::{Path, PathBuf};

use crate::config;
use crate::error::{NameKind, Result, ScaffoldError};
use crate::prompt::Confirm;
use crate::scaffold::{self, Scaffold};
use crate::validate::is_invalid;

/// One invocation of the tool, as given on the command line
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub dir_name: String,
    pub filename: Option<String>,
    pub title: String,
    pub force: bool,
}

impl ScaffoldRequest {
    /// File name of the template: `<filename>.tex`, or `<dir_name>.tex`
    /// when none was given
    pub fn tex_filename(&self) -> Result<String> {
        match &self.filename {
            None => Ok(format!("{}.tex", self.dir_name)),
            Some(name) if is_invalid(name) => Err(ScaffoldError::InvalidName {
                kind: NameKind::File,
                name: name.clone(),
            }),
            Some(name) => Ok(format!("{}.tex", name)),
        }
    }
}

/// Create the report directory in `cwd` and fill it
pub fn run(
    request: &ScaffoldRequest,
    cwd: &Path,
    config_path: &Path,
    confirm: &mut dyn Confirm,
) -> Result<Scaffold> {
    let config = config::get_config(config_path, confirm)?;
    let author = config.author_name();

    let filename = request.tex_filename()?;
    let dir = scaffold::create_dir(cwd, &request.dir_name, request.force)?;

    scaffold::create_file(
        &dir,
        &filename,
        &request.title,
        &author,
        config.preamble_path(),
    )
}

/// Settings file to use: the explicit one, or `~/.texdirmakerrc`
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => config::default_path(),
    }
}
