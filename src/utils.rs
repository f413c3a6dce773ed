use std::fs::create_dir_all;
use std::path::{Component, Path, PathBuf, absolute};

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, file_operation_error, generic_error};

/// Expands a leading `~` to the home folder
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(tilde(path).into_owned())
}

/// Makes `path` absolute against the current folder
///
/// The filesystem is not touched, so the path need not exist. `.`
/// components are dropped, which lines `.` and `./site` up with the paths
/// the glob walker reports.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    absolute(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "resolve"))
}

/// Checks whether any component of `path` below `root` is hidden
///
/// Components of `root` itself are not considered, so a site living in a
/// hidden folder is still walked.
pub fn has_hidden_component(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .any(|component| match component {
            Component::Normal(name) => name.to_str().is_some_and(|n| n.starts_with('.')),
            _ => false,
        })
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir()).map_err(|e| {
            file_operation_error(e, folder.config_dir().to_path_buf(), "create directory")
        })?;
    }
    Ok(folder)
}
