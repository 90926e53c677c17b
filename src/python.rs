//! Shell-outs to the Python toolchain: venv creation, pip installs, the
//! freeze snapshot and the project generator.
//!
//! Every call blocks until the external command exits. Nothing here is
//! rolled back on failure; a run interrupted midway leaves partial state
//! on disk.

use std::fs::File;
use std::process::{Command, Stdio};

use colored::Colorize;
use tracing::{debug, warn};

use crate::config::{self, ProjectConfig};
use crate::error::{Result, SproutError};

/// Handle over the virtual environment described by a [`ProjectConfig`].
pub struct PythonEnv<'a> {
    config: &'a ProjectConfig,
}

impl<'a> PythonEnv<'a> {
    pub fn new(config: &'a ProjectConfig) -> Self {
        Self { config }
    }

    /// Creates the venv. Hard error if one already exists; re-running the
    /// bootstrap in the same directory is a user error.
    pub fn create(&self) -> Result<()> {
        if self.config.venv_path.is_dir() {
            return Err(SproutError::EnvExists(self.config.venv_path.clone()));
        }

        let launcher = config::system_python();
        run_checked(
            Command::new(launcher)
                .args(["-m", "venv"])
                .arg(&self.config.venv_path),
            launcher,
        )?;

        println!(
            "  {} virtual environment at {}",
            "Created".green(),
            self.config.venv_path.display()
        );
        Ok(())
    }

    /// Installs packages one at a time, in list order. A failed install is
    /// reported and skipped; the run continues with the next package.
    pub fn install(&self, packages: &[String]) -> Result<()> {
        for package in packages {
            debug!(%package, "installing");
            let status = Command::new(&self.config.python_path)
                .args(["-m", "pip", "install"])
                .arg(package)
                .status()
                .map_err(|source| SproutError::Launch {
                    command: self.config.python_path.display().to_string(),
                    source,
                })?;

            if status.success() {
                println!("  {} {}", "Installed".green(), package.cyan());
            } else {
                warn!(%package, %status, "install failed");
                println!("  {} {} ({})", "Failed".red(), package.cyan(), status);
            }
        }
        Ok(())
    }

    /// Writes the installer's freeze output to the manifest, replacing any
    /// existing file. A freeze failure aborts the run.
    pub fn freeze(&self) -> Result<()> {
        let manifest = self.config.manifest_path();
        let file = File::create(&manifest)?;
        run_checked(
            Command::new(&self.config.python_path)
                .args(["-m", "pip", "freeze"])
                .stdout(Stdio::from(file)),
            "pip freeze",
        )?;

        println!("  {} {}", "Wrote".green(), manifest.display());
        Ok(())
    }

    /// Runs the project generator, unless the marker file shows a project
    /// was already generated here.
    pub fn start_project(&self) -> Result<()> {
        if self.config.marker_path().is_file() {
            println!(
                "  {} {} already exists, skipping project generation",
                "Notice".yellow(),
                config::PROJECT_MARKER
            );
            return Ok(());
        }

        run_checked(
            Command::new(&self.config.python_path)
                .args(["-m", "django", "startproject"])
                .arg(&self.config.project_name)
                .arg(&self.config.root),
            "django startproject",
        )?;

        println!(
            "  {} '{}' project",
            "Generated".green(),
            self.config.project_name.cyan()
        );
        Ok(())
    }
}

fn run_checked(command: &mut Command, label: &str) -> Result<()> {
    debug!(?command, "running");
    let status = command.status().map_err(|source| SproutError::Launch {
        command: label.to_string(),
        source,
    })?;
    if !status.success() {
        return Err(SproutError::CommandFailed(label.to_string(), status));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use tempfile::TempDir;

    #[test]
    fn test_create_rejects_existing_env() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join(".venv")).unwrap();

        let config = ProjectConfig::new("base".to_string(), temp_dir.path().to_path_buf());
        let env = PythonEnv::new(&config);

        let err = env.create().unwrap_err();
        assert!(matches!(err, SproutError::EnvExists(_)));
    }

    #[test]
    fn test_start_project_skips_when_marker_present() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("manage.py"), "").unwrap();

        let config = ProjectConfig::new("base".to_string(), temp_dir.path().to_path_buf());
        let env = PythonEnv::new(&config);

        // No interpreter exists in this temp dir; succeeding proves the
        // marker check short-circuits before any spawn.
        assert!(env.start_project().is_ok());
    }
}
