//! Resolved run configuration.
//!
//! All paths are derived once from the parsed arguments and never change
//! afterwards; the handlers only read from this.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Project name used when `--name` is not given.
pub const DEFAULT_PROJECT_NAME: &str = "base";

/// Virtual environment directory, relative to the target root.
pub const VENV_DIR: &str = ".venv";

/// Manifest file written from the installer's freeze output.
pub const MANIFEST_FILE: &str = "requirements.txt";

/// File the project generator leaves behind; its presence means a project
/// has already been generated in the target root.
pub const PROJECT_MARKER: &str = "manage.py";

#[derive(Debug, Clone, Serialize)]
pub struct ProjectConfig {
    /// Name passed to the project generator.
    pub project_name: String,
    /// Directory every artifact is placed in.
    pub root: PathBuf,
    /// Virtual environment location inside the root.
    pub venv_path: PathBuf,
    /// Interpreter inside the venv, used for pip and the generator.
    pub python_path: PathBuf,
}

impl ProjectConfig {
    pub fn new(project_name: String, root: PathBuf) -> Self {
        let venv_path = root.join(VENV_DIR);
        let python_path = venv_interpreter(&venv_path);
        Self {
            project_name,
            root,
            venv_path,
            python_path,
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn marker_path(&self) -> PathBuf {
        self.root.join(PROJECT_MARKER)
    }
}

/// Interpreter path inside a venv. The only platform-dependent branch in
/// the crate lives here.
pub fn venv_interpreter(venv_path: &Path) -> PathBuf {
    if cfg!(windows) {
        venv_path.join("Scripts").join("python.exe")
    } else {
        venv_path.join("bin").join("python")
    }
}

/// System launcher used to create the venv itself.
pub fn system_python() -> &'static str {
    if cfg!(windows) { "python" } else { "python3" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_derive_from_root() {
        let config = ProjectConfig::new("base".to_string(), PathBuf::from("/tmp/work"));
        assert_eq!(config.venv_path, PathBuf::from("/tmp/work/.venv"));
        assert_eq!(config.manifest_path(), PathBuf::from("/tmp/work/requirements.txt"));
        assert_eq!(config.marker_path(), PathBuf::from("/tmp/work/manage.py"));
    }

    #[cfg(unix)]
    #[test]
    fn test_interpreter_path_unix() {
        let config = ProjectConfig::new("base".to_string(), PathBuf::from("/tmp/work"));
        assert_eq!(config.python_path, PathBuf::from("/tmp/work/.venv/bin/python"));
        assert_eq!(system_python(), "python3");
    }

    #[cfg(windows)]
    #[test]
    fn test_interpreter_path_windows() {
        let config = ProjectConfig::new("base".to_string(), PathBuf::from("work"));
        assert!(config.python_path.ends_with("Scripts\\python.exe"));
        assert_eq!(system_python(), "python");
    }
}
