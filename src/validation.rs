//! Input validation for project and directory names.

use std::path::Path;

use crate::error::{Result, SproutError};

/// Characters that cannot appear in a target directory name.
pub const FORBIDDEN_DIR_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Validates the project name passed to the generator.
///
/// The name must be a valid identifier and must not collide with an
/// existing directory under the target root.
pub fn validate_project_name(name: &str, root: &Path) -> Result<()> {
    if !is_identifier(name) {
        return Err(SproutError::InvalidProjectName(name.to_string()));
    }
    if root.join(name).is_dir() {
        return Err(SproutError::ProjectNameTaken(name.to_string()));
    }
    Ok(())
}

/// Validates a target directory name: no reserved filesystem characters,
/// no pre-existing directory of the same name.
pub fn validate_directory_name(name: &str, cwd: &Path) -> Result<()> {
    if name.chars().any(|c| FORBIDDEN_DIR_CHARS.contains(&c)) {
        return Err(SproutError::ForbiddenDirectoryName(name.to_string()));
    }
    if cwd.join(name).is_dir() {
        return Err(SproutError::DirectoryTaken(name.to_string()));
    }
    Ok(())
}

/// Letters, digits and underscores; first character must not be a digit.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
