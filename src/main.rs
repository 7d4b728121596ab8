use anyhow::Result;
use clap::{Parser, Subcommand};
use memoa::{config, server};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "memoa", version, about = "Memoa personal note-taking service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API server
    Serve {
        /// Path to a config file (defaults to ~/.memoa/config.toml)
        #[arg(long)]
        config: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config: path } => {
            let config = match path {
                Some(path) => config::MemoaConfig::load_from(path)?,
                None => config::MemoaConfig::load()?,
            };

            let filter = EnvFilter::try_new(&config.server.log_level)
                .unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();

            server::serve(config).await?;
        }
    }

    Ok(())
}
