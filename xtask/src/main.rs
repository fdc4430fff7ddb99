//! Development tasks: `cargo xtask man [--out-dir DIR]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use mediastrip::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for mediastrip and its subcommands
    Man {
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = Cli::command();
    let name = cmd.get_name().to_string();

    write_man(&cmd, &out_dir.join(format!("{}.1", name)))?;
    for sub in cmd.get_subcommands() {
        write_man(sub, &out_dir.join(format!("{}-{}.1", name, sub.get_name())))?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

fn write_man(cmd: &clap::Command, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    Man::new(cmd.clone()).render(&mut buffer)?;
    fs::write(path, buffer).with_context(|| format!("Failed to write {}", path.display()))
}
