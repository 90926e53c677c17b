use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SproutError {
    #[error("'{0}' is not in the default packages. Perhaps you made a typo.")]
    UnknownPackage(String),

    #[error(
        "'{0}' is not a valid project name. A valid name contains only letters, digits and underscores, and does not start with a digit."
    )]
    InvalidProjectName(String),

    #[error("The '{0}' project already exists in this directory.")]
    ProjectNameTaken(String),

    #[error("Directory name '{0}' contains forbidden characters (/ \\ : * ? \" < > |).")]
    ForbiddenDirectoryName(String),

    #[error("The '{0}' directory already exists.")]
    DirectoryTaken(String),

    #[error("A virtual environment already exists at {0}")]
    EnvExists(PathBuf),

    #[error("Failed to launch '{command}': {source}")]
    Launch {
        command: String,
        source: std::io::Error,
    },

    #[error("'{0}' exited with {1}")]
    CommandFailed(String, std::process::ExitStatus),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SproutError>;
