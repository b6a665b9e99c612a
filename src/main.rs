use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bst_set::command::Command;
use bst_set::{iterative, recursive, OrderedSet};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, Level};

#[derive(Parser, Debug)]
#[command(name = "bst-set")]
#[command(about = "Run add/contains/remove scripts against an unbalanced BST.", long_about = None)]
struct Cli {
    /// Script to run, one command per line. Reads stdin when omitted or `-`.
    script: Option<PathBuf>,
    /// Which tree implementation to drive.
    #[arg(long, value_enum, default_value_t = Variant::Iterative)]
    variant: Variant,
    /// More logging on stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Variant {
    /// Recursive descent. Stack depth follows tree height.
    Recursive,
    /// Loops only. Safe for degenerate trees.
    Iterative,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let input: Box<dyn BufRead> = match &cli.script {
        None => Box::new(io::stdin().lock()),
        Some(path) if path.as_os_str() == "-" => Box::new(io::stdin().lock()),
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
    };

    let mut set: Box<dyn OrderedSet> = match cli.variant {
        Variant::Recursive => Box::new(recursive::Tree::new()),
        Variant::Iterative => Box::new(iterative::Tree::new()),
    };
    info!(variant = ?cli.variant, "running script");

    let mut out = BufWriter::new(io::stdout().lock());
    let mut commands = 0usize;
    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read line {line_no}"))?;
        let Some(command) =
            Command::parse_line(&line).with_context(|| format!("line {line_no}: `{line}`"))?
        else {
            continue;
        };

        let reply = command.apply(set.as_mut());
        debug!(line = line_no, ?command, %reply, "applied");
        writeln!(out, "{reply}")?;
        commands += 1;
    }
    out.flush()?;

    info!(commands, len = set.len(), height = set.height(), "done");
    Ok(())
}
