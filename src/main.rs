use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// novatech - marketing site and contact relay
#[derive(Parser)]
#[command(name = "novatech")]
#[command(about = "NovaTech landing page and contact form relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Check that the configured email provider has everything it needs
    CheckEmail,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = novatech::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    novatech::observability::init(&config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::CheckEmail => cli::email::check(&config),
    }
}
