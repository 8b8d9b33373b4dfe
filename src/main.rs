//! cini's main application entry point.
//! Resolves the command-line arguments and generates the project skeleton.

use cini::{
    cli::{resolve_config, wants_verbose},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::{scaffold, Processor},
};

/// Main application entry point.
fn main() {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    init_logger(wants_verbose(args.as_slice()));

    if let Err(err) = run(&args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the arguments into a configuration
/// 2. Resolves the project directory against the working directory
/// 3. Creates directories and files, running `git init` when requested
fn run(args: &[String]) -> Result<()> {
    let config = resolve_config(args)?;
    let cwd = std::env::current_dir()?;

    let layout = scaffold(&config, &cwd, &Processor::new())?;

    println!(
        "Project '{}' initialized successfully at {}",
        layout.name,
        layout.root.display()
    );
    Ok(())
}
