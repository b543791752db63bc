mod session;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use app_settings::{AppSettings, CollectionKind};
use catalog::{seed, source, CatalogStore};
use clap::{Parser, Subcommand, ValueEnum};
use core_types::Taxonomy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use session::{render, Session};

#[derive(Parser)]
#[command(name = "showroom")]
#[command(about = "Browse the studio portfolio and bespoke furniture catalogue", long_about = None)]
#[command(version)]
struct Cli {
    /// Catalog to browse; defaults to the saved setting.
    #[arg(long, value_enum, global = true)]
    collection: Option<CollectionArg>,

    /// JSON catalog to use instead of the built-in one.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true)]
    log_filter: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Interactive filter and lightbox session (default).
    Browse,
    /// Print the filter chips with their item counts.
    Categories,
    /// Print the catalog as JSON.
    Export,
    /// Store the given --collection, --catalog and --log-filter as defaults.
    SaveSettings,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CollectionArg {
    Portfolio,
    Furniture,
}

impl From<CollectionArg> for CollectionKind {
    fn from(value: CollectionArg) -> Self {
        match value {
            CollectionArg::Portfolio => CollectionKind::Portfolio,
            CollectionArg::Furniture => CollectionKind::Furniture,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let (settings, settings_error) = match AppSettings::load() {
        Ok(settings) => (settings, None),
        Err(err) => (AppSettings::default(), Some(err)),
    };

    init_tracing(cli.log_filter.as_deref().or(settings.log_filter.as_deref()));
    if let Some(err) = settings_error {
        warn!("Failed to load settings, using defaults: {err}");
    }

    if let Err(err) = run(cli, settings) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(fallback: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or("info")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli, mut settings: AppSettings) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Browse);
    let collection = cli
        .collection
        .map(CollectionKind::from)
        .unwrap_or(settings.collection);
    let catalog_file = cli.catalog.clone().or_else(|| settings.get_catalog_file());

    if let Commands::SaveSettings = command {
        settings.collection = collection;
        if let Some(path) = cli.catalog {
            settings.set_catalog_file(path);
        }
        if cli.log_filter.is_some() {
            settings.log_filter = cli.log_filter;
        }
        settings.save().context("failed to save settings")?;
        info!(collection = ?settings.collection, "settings saved");
        return Ok(());
    }

    match collection {
        CollectionKind::Portfolio => {
            let store = load_store(catalog_file.as_deref(), seed::portfolio)?;
            dispatch(&store, command)
        }
        CollectionKind::Furniture => {
            let store = load_store(catalog_file.as_deref(), seed::furniture)?;
            dispatch(&store, command)
        }
    }
}

fn load_store<C>(
    file: Option<&Path>,
    builtin: fn() -> catalog::Result<CatalogStore<C>>,
) -> Result<CatalogStore<C>>
where
    C: Taxonomy + DeserializeOwned,
{
    match file {
        Some(path) => source::load_json(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => builtin().context("built-in catalog is invalid"),
    }
}

fn dispatch<C>(store: &CatalogStore<C>, command: Commands) -> Result<()>
where
    C: Taxonomy + Serialize,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Browse => {
            let stdin = io::stdin();
            Session::new(store).run(stdin.lock(), &mut out)?;
        }
        Commands::Categories => {
            let session = Session::new(store);
            render::chips(&mut out, &session.controller().filter_chips())?;
        }
        Commands::Export => {
            let payload = source::to_json_string(store).context("failed to export catalog")?;
            writeln!(out, "{payload}")?;
        }
        Commands::SaveSettings => {}
    }
    Ok(())
}
