pub mod commands;
pub mod handlers;
pub mod registry;

pub use commands::{Cli, Commands};
