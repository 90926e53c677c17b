//! # Sprout - bootstrap Django REST API projects from the command line
//!
//! Sprout scaffolds a new backend-API project in four sequential steps:
//! it creates a virtual environment, installs the framework packages,
//! snapshots the installed set to `requirements.txt`, and runs the Django
//! project generator.
//!
//! ## Quick Start
//!
//! ```bash
//! # Scaffold with the defaults (project 'base', current directory)
//! sprout
//!
//! # Custom project name in a fresh directory
//! sprout --name core --dir blog_api
//!
//! # Trim and extend the package set
//! sprout --remove django-filter --add django-allauth
//!
//! # Inspect without touching anything
//! sprout list
//! sprout --dry-run
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Resolved run configuration (paths, project name)
//! - [`error`]: Error types and result aliases
//! - [`packages`]: Default package set and install-list resolution
//! - [`python`]: Shell-outs to the Python toolchain
//! - [`validation`]: Project and directory name validation

/// Command-line interface definitions using clap.
pub mod cli;

/// Resolved run configuration.
///
/// Built once from the parsed arguments, immutable afterwards.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `SproutError` enum and `Result<T>` type alias.
pub mod error;

pub mod logging;

/// Default package set and install-list resolution.
pub mod packages;

/// Shell-outs to the Python toolchain.
///
/// Venv creation, pip installs, the freeze snapshot and the project
/// generator.
pub mod python;

/// Input validation utilities.
///
/// Validates project names and target directory names before anything
/// touches the disk.
pub mod validation;
