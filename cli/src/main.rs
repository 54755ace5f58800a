//! # pkguse Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point of the `pkguse` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Computing the default log path from the privilege level
//! - Routing execution to the command handler
//! - Printing the result and choosing the exit code
//!
//! ## Exit codes
//!
//! - `0`: the output was saved
//! - `1`: usage error (unknown output mode, missing source, bad output name)
//! - `2`: any other failure (config, logging, filesystem)
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! pkguse --help
//!
//! # Save the system package.use as a category directory
//! pkguse -v save /etc/portage/package.use --output-as dir
//! ```
//!
use clap::{CommandFactory, Parser, Subcommand};

mod commands; // Command handlers (save)
mod common; // Shared utilities (fs, system)
mod core; // Core infrastructure (config, errors, logging)
mod usefile; // package.use parsing, migration and saving

use crate::common::system::{self, Privilege};
use crate::core::error::{exit_code_for, PkgUseError, EXIT_OK};
use crate::core::logging;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "pkguse",
    about = "Collect package.use entries and save them as a file or a per-category directory",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase stderr log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Config file to load instead of the user config.
    #[arg(long, env = "PKGUSE_CONFIG", global = true, value_name = "PATH")]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Collect a package.use file or directory and save it under the temp root.
    #[command(alias = "s")]
    Save(commands::save::SaveArgs),
}

/// Help text printed after a usage error.
fn usage_text(subcommand: &str) -> String {
    let mut cmd = Cli::command();
    cmd.build();
    cmd.find_subcommand_mut(subcommand)
        .map(|sub| sub.render_help())
        .unwrap_or_else(|| cmd.render_help())
        .to_string()
}

fn main() {
    let cli = Cli::parse();

    let program = system::program_name();
    let ctx = commands::save::RunContext {
        default_log: logging::default_log_path(Privilege::current(), &program),
        program,
        verbose: cli.verbose,
        config: cli.config,
    };

    let (subcommand, result) = match cli.command {
        Commands::Save(args) => ("save", commands::save::handle_save(args, &ctx)),
    };

    match result {
        Ok(saved) => {
            tracing::debug!("Saved to {:?}", saved.path);
            println!("{}", saved.message);
            std::process::exit(EXIT_OK);
        }
        Err(e) => {
            // The only error record of the run; the cause chain goes on one line.
            tracing::error!("Command execution failed: {:#}", e);
            let is_usage = e
                .downcast_ref::<PkgUseError>()
                .is_some_and(PkgUseError::is_usage);
            if is_usage {
                println!("{}", e);
                println!("{}", usage_text(subcommand));
            } else {
                eprintln!("Error: {:#}", e);
            }
            std::process::exit(exit_code_for(&e));
        }
    }
}
