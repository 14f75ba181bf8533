use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use xdgfind::Resolver;
use xdgfind_core::{LogicalRoot, LookupError, ResolveError};

#[derive(Debug, Parser)]
#[command(name = "xdgfind", about = "Resolve XDG base directories and locate files in them")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the resolved base directory for a root.
    Dir {
        /// One of config, data, cache, state.
        root: LogicalRoot,
    },
    /// Print the path of a file that exists beneath a root.
    Find {
        /// One of config, data, cache, state.
        root: LogicalRoot,
        #[arg(required = true, num_args = 1..)]
        segments: Vec<PathBuf>,
    },
    /// Print every resolved base directory.
    List {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode json output: {0}")]
    Json(#[from] serde_json::Error),
}

/// One row of `list` output.
#[derive(Debug, Serialize)]
struct RootEntry {
    root: LogicalRoot,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl RootEntry {
    fn new(root: LogicalRoot, result: Result<PathBuf, ResolveError>) -> Self {
        match result {
            Ok(path) => Self {
                root,
                path: Some(path.display().to_string()),
                error: None,
            },
            Err(err) => Self {
                root,
                path: None,
                error: Some(err.to_string()),
            },
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("xdgfind: {err}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let resolver = Resolver::native();
    debug!(?resolver, "starting xdgfind");

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Dir { root } => {
            let path = resolver.resolve(root)?;
            writeln!(stdout, "{}", path.display())?;
        }
        Command::Find { root, segments } => {
            let path = resolver.find(root, &segments)?;
            writeln!(stdout, "{}", path.display())?;
        }
        Command::List { json } => {
            let entries: Vec<_> = resolver
                .resolve_all()
                .into_iter()
                .map(|(root, result)| RootEntry::new(root, result))
                .collect();
            if json {
                serde_json::to_writer_pretty(&mut stdout, &entries)?;
                writeln!(stdout)?;
            } else {
                for entry in entries {
                    let value = entry.path.or(entry.error).unwrap_or_default();
                    writeln!(stdout, "{}\t{value}", entry.root)?;
                }
            }
        }
    }

    Ok(())
}
