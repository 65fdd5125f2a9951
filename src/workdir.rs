//! Working-directory normalization.
//!
//! The bootstrap is launched from the project's `scripts/` directory but every
//! later step uses paths relative to the project root, so the process working
//! directory moves there first. The move goes through the [`WorkingDir`] trait
//! so tests can observe it without changing the test process's directory.

use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::error::{Result, SetupError};
use crate::shell::resolve_against;

/// Access to the process working directory.
pub trait WorkingDir {
    /// The current working directory.
    fn current(&self) -> Result<PathBuf>;

    /// Change the working directory.
    fn set(&mut self, path: &Path) -> Result<()>;
}

/// The real process working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessWorkingDir;

impl WorkingDir for ProcessWorkingDir {
    fn current(&self) -> Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }

    fn set(&mut self, path: &Path) -> Result<()> {
        std::env::set_current_dir(path)?;
        Ok(())
    }
}

/// In-memory working directory that records every change.
#[derive(Debug, Clone)]
pub struct FixedWorkingDir {
    current: PathBuf,
    changes: Vec<PathBuf>,
}

impl FixedWorkingDir {
    /// Start at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            current: path.into(),
            changes: Vec::new(),
        }
    }

    /// Every directory passed to `set`, in order.
    pub fn changes(&self) -> &[PathBuf] {
        &self.changes
    }
}

impl WorkingDir for FixedWorkingDir {
    fn current(&self) -> Result<PathBuf> {
        Ok(self.current.clone())
    }

    fn set(&mut self, path: &Path) -> Result<()> {
        self.current = path.to_path_buf();
        self.changes.push(path.to_path_buf());
        Ok(())
    }
}

/// Resolve the project root for a bootstrap started in `start_dir`.
///
/// An explicit `root` wins over `root_offset`; both are relative to
/// `start_dir` unless absolute. The result is canonical.
pub fn resolve_project_root(start_dir: &Path, project: &ProjectConfig) -> Result<PathBuf> {
    let candidate = match &project.root {
        Some(root) => resolve_against(start_dir, root),
        None => start_dir.join(&project.root_offset),
    };

    if !candidate.is_dir() {
        return Err(SetupError::ProjectRootNotFound { path: candidate });
    }

    candidate
        .canonicalize()
        .map_err(|_| SetupError::ProjectRootNotFound { path: candidate })
}

/// Move the working directory to the project root and return the root.
pub fn normalize(
    workdir: &mut dyn WorkingDir,
    start_dir: &Path,
    project: &ProjectConfig,
) -> Result<PathBuf> {
    let root = resolve_project_root(start_dir, project)?;
    workdir.set(&root)?;
    tracing::debug!("Working directory set to {}", root.display());
    Ok(root)
}

/// Whether `path` looks like the project root, judged by `marker` existing
/// beneath it.
pub fn is_project_root(path: &Path, marker: &Path) -> bool {
    path.join(marker).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn layout() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("scripts")).unwrap();
        fs::create_dir_all(temp.path().join("vendor")).unwrap();
        temp
    }

    #[test]
    fn default_offset_goes_one_level_up() {
        let temp = layout();
        let start = temp.path().join("scripts");
        let mut workdir = FixedWorkingDir::new(&start);

        let root = normalize(&mut workdir, &start, &ProjectConfig::default()).unwrap();

        assert_eq!(root, temp.path().canonicalize().unwrap());
        assert_eq!(workdir.current().unwrap(), root);
        assert_eq!(workdir.changes().len(), 1);
        assert!(is_project_root(&root, Path::new("vendor")));
    }

    #[test]
    fn explicit_root_overrides_offset() {
        let temp = layout();
        let project = ProjectConfig {
            root_offset: PathBuf::from("does-not-matter"),
            root: Some(temp.path().to_path_buf()),
        };

        let root = resolve_project_root(Path::new("/"), &project).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn relative_root_resolves_against_start_dir() {
        let temp = layout();
        let project = ProjectConfig {
            root: Some(PathBuf::from("..")),
            ..Default::default()
        };

        let root = resolve_project_root(&temp.path().join("scripts"), &project).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn missing_root_fails_without_changing_directory() {
        let temp = TempDir::new().unwrap();
        let project = ProjectConfig {
            root: Some(temp.path().join("missing")),
            ..Default::default()
        };
        let mut workdir = FixedWorkingDir::new(temp.path());

        let err = normalize(&mut workdir, temp.path(), &project).unwrap_err();

        assert!(matches!(err, SetupError::ProjectRootNotFound { .. }));
        assert!(workdir.changes().is_empty());
    }

    #[test]
    fn is_project_root_requires_marker() {
        let temp = TempDir::new().unwrap();
        assert!(!is_project_root(temp.path(), Path::new("vendor")));
    }
}
