use anyhow::Result;
use colored::Colorize;

use crate::cli::registry::COMMANDS;

pub fn handle_help() -> Result<()> {
    println!("Available commands:");
    for command in COMMANDS {
        println!("  {}: {}", command.name.cyan(), command.description);
        println!("    example: {}", command.example.dimmed());
    }
    Ok(())
}
