//! Default package set and install-list resolution.

use crate::error::{Result, SproutError};

/// Packages installed by a plain run, in install order.
pub const DEFAULT_PACKAGES: &[&str] = &[
    "django",
    "djangorestframework",
    "psycopg2-binary",
    "django-cors-headers",
    "django-filter",
];

/// Checks every removal candidate against the default set.
///
/// Fails on the first unknown name; nothing is removed partially.
pub fn validate_removals(removals: &[String]) -> Result<()> {
    for name in removals {
        if !DEFAULT_PACKAGES.contains(&name.as_str()) {
            return Err(SproutError::UnknownPackage(name.clone()));
        }
    }
    Ok(())
}

/// Final install list: defaults minus removals, plus additions, in order.
///
/// Additions are not checked against any registry and may duplicate a
/// default; the installer tolerates both.
pub fn resolve(removals: &[String], additions: &[String]) -> Result<Vec<String>> {
    validate_removals(removals)?;

    let mut packages: Vec<String> = DEFAULT_PACKAGES
        .iter()
        .map(|p| p.to_string())
        .filter(|p| !removals.contains(p))
        .collect();
    packages.extend(additions.iter().cloned());
    Ok(packages)
}
