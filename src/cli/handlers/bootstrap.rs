use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use crate::config::{DEFAULT_PROJECT_NAME, ProjectConfig};
use crate::packages;
use crate::python::PythonEnv;
use crate::validation;

/// Parameters for a bootstrap run.
pub struct BootstrapParams {
    pub remove: Vec<String>,
    pub add: Vec<String>,
    pub name: Option<String>,
    pub dir: Option<String>,
    pub dry_run: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct Plan<'a> {
    #[serde(flatten)]
    config: &'a ProjectConfig,
    packages: &'a [String],
}

pub fn handle_bootstrap(params: BootstrapParams) -> Result<()> {
    let cwd = std::env::current_dir()?;

    // All validation happens before any side effect; the first invalid
    // input aborts the whole run.
    let packages = packages::resolve(&params.remove, &params.add)?;

    let root = match params.dir {
        Some(ref dir) => {
            validation::validate_directory_name(dir, &cwd)?;
            cwd.join(dir)
        }
        None => cwd,
    };

    let project_name = params
        .name
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());
    validation::validate_project_name(&project_name, &root)?;

    let config = ProjectConfig::new(project_name, root);

    if params.dry_run {
        print_plan(&config, &packages, params.json)?;
        return Ok(());
    }

    info!(
        project = %config.project_name,
        root = %config.root.display(),
        "starting bootstrap"
    );

    std::fs::create_dir_all(&config.root)?;
    let env = PythonEnv::new(&config);

    println!("\n{}", "1. Virtual environment:".bold());
    env.create()?;

    println!("\n{}", "2. Installing packages:".bold());
    env.install(&packages)?;

    println!("\n{}", "3. Creating requirements file:".bold());
    env.freeze()?;

    println!("\n{}", "4. Starting Django project:".bold());
    env.start_project()?;

    println!(
        "\n{} '{}' in {}",
        "Bootstrapped".green(),
        config.project_name.cyan(),
        config.root.display()
    );
    Ok(())
}

fn print_plan(config: &ProjectConfig, packages: &[String], json: bool) -> Result<()> {
    if json {
        let plan = Plan { config, packages };
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("{}", "Dry run, nothing will be executed.".yellow());
    println!("Project name: {}", config.project_name.cyan());
    println!("Target root:  {}", config.root.display());
    println!("Environment:  {}", config.venv_path.display());
    println!("Interpreter:  {}", config.python_path.display());
    println!("Packages (install order):");
    for package in packages {
        println!("  - {}", package.cyan());
    }
    Ok(())
}
