use anyhow::Result;
use clap::Parser;

use mediastrip::cli::{Cli, Commands, ConfigCommands};
use mediastrip::report::Reporter;
use mediastrip::theme::{color_enabled, Theme};
use mediastrip::Config;

mod commands;

fn main() {
    let cli = Cli::parse();
    let no_color = cli.no_color;

    if let Err(e) = run(cli) {
        let theme = Theme::for_output(!no_color && color_enabled());
        eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut reporter = Reporter::stdout(cli.no_color);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Targeted {
            file,
            lines,
            dry_run,
        } => {
            let config = Config::load(config_path)?;
            let args = commands::targeted::Args {
                file,
                lines,
                dry_run,
            };
            commands::targeted::handle(args, &config, &mut reporter)
        }
        Commands::Blanket {
            root,
            subdirs,
            ext,
            no_backup,
            max_blank_lines,
            dry_run,
        } => {
            let config = Config::load(config_path)?;
            let args = commands::blanket::Args {
                root,
                subdirs,
                ext,
                no_backup,
                max_blank_lines,
                dry_run,
            };
            commands::blanket::handle(args, &config, &mut reporter)
        }
        Commands::Compact {
            files,
            max_blank_lines,
            dry_run,
        } => {
            let config = Config::load(config_path)?;
            let max = max_blank_lines.unwrap_or(config.blanket.max_blank_lines);
            commands::compact::handle(&files, max, dry_run, &mut reporter)
        }
        Commands::Locate { file, json } => commands::locate::handle(&file, json, &mut reporter),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(config_path),
            ConfigCommands::Init { force } => {
                commands::config::handle_init(config_path, force, &mut reporter)
            }
        },
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}
