//! CI support tools for the operator build pipeline.
//!
//! `ci env-file` writes the `environment` file for containerized build
//! steps; `ci reap-disks` deletes cloud disks with no attached users in the
//! project named by `GCLOUD_PROJECT`. Both operate on the current working
//! directory.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ci::envfile::write_env_file;
use ci::exit_codes;
use ci::io::gcloud::GcloudCli;
use ci::io::sources::WorkspaceResolver;
use ci::logging;
use ci::reap::{ReapOutcome, project_from_env, run_reap};

#[derive(Parser)]
#[command(name = "ci", version, about = "CI support tools for the build pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the `environment` file from credential files and process env.
    EnvFile,
    /// Delete cloud disks that have no attached users.
    ReapDisks,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("resolve working directory")?;
    match cli.command {
        Command::EnvFile => {
            let resolver = WorkspaceResolver::new(&cwd);
            write_env_file(&cwd, &resolver)?;
        }
        Command::ReapDisks => {
            let project = project_from_env()?;
            match run_reap(&cwd, &GcloudCli, &project)? {
                ReapOutcome::Empty => println!("No unused disks deleted"),
                ReapOutcome::Deleted(count) => println!("{count} unused disks deleted"),
                ReapOutcome::Unparseable(raw) => println!("{raw}"),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_file() {
        let cli = Cli::parse_from(["ci", "env-file"]);
        assert!(matches!(cli.command, Command::EnvFile));
    }

    #[test]
    fn parse_reap_disks() {
        let cli = Cli::parse_from(["ci", "reap-disks"]);
        assert!(matches!(cli.command, Command::ReapDisks));
    }
}
