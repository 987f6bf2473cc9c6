use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotjson::{cli, config, warning};

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
#[command(args_conflicts_with_subcommands = true)] // export flags only apply without a subcommand
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    #[clap(flatten)]
    export: ExportOptions,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the playlist ID a URL, URI or ID resolves to
    Resolve(ResolveOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ExportOptions {
    /// Playlist URL, URI or ID; prompted for when omitted
    playlist: Option<String>,

    /// Credentials file [default: api-config.json]
    #[clap(long)]
    config: Option<PathBuf>,

    /// Directory the playlist file is written to
    #[clap(long, default_value = ".")]
    output_dir: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveOptions {
    input: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env() {
        warning!("Cannot load .env file. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Resolve(opt)) => cli::resolve(&opt.input),
        Some(Command::Completions(opt)) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
        None => {
            cli::export(
                cli.export.config,
                cli.export.playlist,
                cli.export.output_dir,
            )
            .await
        }
    }
}
