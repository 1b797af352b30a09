use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use groupiecli::{
    cli::{self, Catalog},
    config, error,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List artists from the catalogue
    Artists(ArtistsOptions),

    /// Show one artist with members and concerts
    Artist(ArtistOptions),

    /// Labeled search suggestions for a query
    Suggest(SuggestOptions),

    /// Some helper information about the loaded catalogue
    Info,

    /// Serve the catalogue as JSON over HTTP
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsOptions {
    /// Search name, members, first album, creation year and locations
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistOptions {
    /// Artist id as numbered by the provider
    pub id: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct SuggestOptions {
    pub query: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let catalog = match Catalog::from_env() {
        Ok(catalog) => catalog,
        Err(e) => error!("Cannot set up the catalogue provider. Err: {}", e),
    };

    match cli.command {
        Command::Artists(opt) => cli::list_artists(&catalog, opt.search).await,
        Command::Artist(opt) => cli::show_artist(&catalog, opt.id).await,
        Command::Suggest(opt) => cli::suggest(&catalog, opt.query).await,
        Command::Info => cli::info(&catalog).await,
        Command::Serve => cli::serve(&catalog).await,
        Command::Completions(_) => {}
    }
}
