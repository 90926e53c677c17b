use anyhow::Result;
use colored::Colorize;

use crate::packages::DEFAULT_PACKAGES;

pub fn handle_list(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&DEFAULT_PACKAGES)?);
    } else {
        println!("Default packages:");
        for package in DEFAULT_PACKAGES {
            println!("  - {}", package.cyan());
        }
    }
    Ok(())
}
