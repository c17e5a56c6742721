mod app;
mod catalog;
mod config;
mod flags;
mod input;
mod player;
mod playlist;
mod shell;

use anyhow::Context;
use catalog::{Catalog, VideoLibrary};
use clap::{Parser, Subcommand};
use shell::{Mode, Shell};
use std::io::{BufReader, IsTerminal};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "reel", version, about = "In-memory video library and playlist shell")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog file to use instead of the configured one.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print results as JSON lines instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read commands from stdin (default).
    Shell,
    /// Execute commands from a script file, one per line.
    Run { script: PathBuf },
    /// Print every video in the catalog (headless).
    Videos,
    /// Manage the configured catalog file.
    Catalog {
        #[command(subcommand)]
        cmd: CatalogCommand,
    },
}

#[derive(Debug, Subcommand)]
enum CatalogCommand {
    /// Check a catalog file and store it in the config.
    Set { path: PathBuf },
    /// Go back to the bundled sample videos.
    Clear,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(cfg.log.max_level()?)
        .with_writer(std::io::stderr)
        .init();

    let catalog_path = cli.catalog.clone().or_else(|| cfg.catalog.path.clone());

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            let app = app::App::new(open_catalog(catalog_path.as_deref())?, cfg.session.random_seed);
            let stdin = std::io::stdin();
            // Piped input behaves like a script: no prompt, no follow-up questions.
            let mode = if stdin.is_terminal() {
                Mode::Interactive
            } else {
                Mode::Script
            };
            Shell::new(app, stdin.lock(), std::io::stdout().lock(), mode)
                .with_prompt(cfg.shell.prompt.clone())
                .with_json(cli.json)
                .run()?;
        }
        Command::Run { script } => {
            let app = app::App::new(open_catalog(catalog_path.as_deref())?, cfg.session.random_seed);
            let file = std::fs::File::open(&script)
                .with_context(|| format!("open {}", script.display()))?;
            Shell::new(app, BufReader::new(file), std::io::stdout().lock(), Mode::Script)
                .with_json(cli.json)
                .run()?;
        }
        Command::Videos => {
            let lib = open_catalog(catalog_path.as_deref())?;
            print_videos(lib.as_ref(), cli.json)?;
        }
        Command::Catalog { cmd } => {
            let mut cfg = cfg;
            match cmd {
                CatalogCommand::Set { path } => {
                    let lib = catalog::loader::load(&path)?;
                    let path = path
                        .canonicalize()
                        .with_context(|| format!("resolve {}", path.display()))?;
                    println!("Catalog {} has {} videos.", path.display(), lib.len());
                    cfg.catalog.path = Some(path);
                }
                CatalogCommand::Clear => {
                    cfg.catalog.path = None;
                }
            }
            config::save(&cfg, cli.config.as_deref()).context("save config")?;
            println!("Updated catalog in config.");
        }
    }

    Ok(())
}

fn open_catalog(path: Option<&Path>) -> anyhow::Result<Box<dyn Catalog>> {
    let lib = match path {
        Some(p) => catalog::loader::load(p)?,
        None => VideoLibrary::bundled(),
    };
    if lib.is_empty() {
        tracing::warn!("catalog has no videos");
    }
    Ok(Box::new(lib))
}

fn print_videos(catalog: &dyn Catalog, json: bool) -> anyhow::Result<()> {
    let videos = catalog::sorted_by_title(catalog);
    if json {
        println!("{}", serde_json::to_string_pretty(&videos)?);
        return Ok(());
    }
    for (i, v) in videos.iter().enumerate() {
        println!("{:02}. {}", i + 1, shell::render::video(v));
    }
    Ok(())
}
