use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use apidocs_core::{
    env_parse_with_default, DEFAULT_HOST, DEFAULT_PORT, GITHUB_PAGES_BASE_PATH, HOST_ENV, PORT_ENV,
};

mod commands;

#[derive(Parser)]
#[command(name = "apidocs")]
#[command(about = "Static API reference site: serve it or export it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the site over HTTP
    Serve {
        /// Defaults to $APIDOCS_PORT, then 3000
        #[arg(short, long)]
        port: Option<u16>,
        /// Defaults to $APIDOCS_HOST, then 127.0.0.1
        #[arg(short = 'H', long)]
        host: Option<String>,
    },
    /// Write every page as static HTML into a directory
    Export {
        out_dir: PathBuf,
        /// Link prefix, e.g. /Api_Documentation_Template; defaults to $APIDOCS_BASE_PATH
        #[arg(short, long)]
        base_path: Option<String>,
        /// Shorthand for --base-path /Api_Documentation_Template
        #[arg(long, conflicts_with = "base_path")]
        github_pages: bool,
    },
    /// Print the endpoint catalog as JSON
    List,
    /// Print one endpoint as JSON
    Show { id: String },
    /// Print the grouped sidebar view for a query as JSON
    Search { query: Option<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => {
            let port = port.unwrap_or_else(|| env_parse_with_default(PORT_ENV, DEFAULT_PORT));
            let host = host
                .unwrap_or_else(|| env_parse_with_default(HOST_ENV, DEFAULT_HOST.to_owned()));
            commands::serve::run(port, host).await?;
        },
        Commands::Export { out_dir, base_path, github_pages } => {
            let base_path =
                if github_pages { Some(GITHUB_PAGES_BASE_PATH.to_owned()) } else { base_path };
            commands::export::run(&out_dir, base_path)?;
        },
        Commands::List => commands::inspect::run_list()?,
        Commands::Show { id } => commands::inspect::run_show(&id)?,
        Commands::Search { query } => commands::inspect::run_search(query)?,
    }

    Ok(())
}
