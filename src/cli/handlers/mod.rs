mod bootstrap;
mod help;
mod list;

pub use bootstrap::{BootstrapParams, handle_bootstrap};
pub use help::handle_help;
pub use list::handle_list;
