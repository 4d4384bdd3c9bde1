use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use notspotify::{cli, config, error, warning};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the web front end and lookup proxy
    Serve(ServeOptions),

    /// Request a client-credentials token and show its metadata
    Token,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, overrides SERVER_ADDRESS
    #[clap(long)]
    pub addr: Option<String>,

    /// Additional mount prefix for all routes, overrides NOTSPOTIFY_MOUNT_PREFIX
    #[clap(long)]
    pub prefix: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("notspotify=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    match config::load_env().await {
        Ok(Some(_)) => {}
        Ok(None) => warning!("No .env file found, using the process environment only."),
        Err(e) => error!("Cannot load environment. Err: {}", e),
    }

    let config = match config::Config::from_env() {
        Ok(c) => c,
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };

    init_tracing();

    match cli.command {
        Command::Serve(opt) => {
            let mut config = config;
            if let Some(addr) = opt.addr {
                config.server_addr = addr;
            }
            if opt.prefix.is_some() {
                config = config.with_mount_prefix(opt.prefix.as_deref());
            }
            cli::serve(config).await
        }
        Command::Token => cli::token(config).await,
        Command::Completions(_) => {}
    }
}
