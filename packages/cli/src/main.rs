use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;

use bookshelf_cli::{init_tracing, run_server, Config};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Bookshelf - a small JSON API for book records")]
#[command(version)]
struct Cli {
    /// Port to listen on (overrides BOOKSHELF_PORT)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    port: Option<u16>,

    /// Address to bind (overrides BOOKSHELF_HOST)
    #[arg(long)]
    host: Option<IpAddr>,

    /// SQLite database file (overrides BOOKSHELF_DATABASE_PATH)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging (overrides BOOKSHELF_DEBUG)
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn apply(self, mut config: Config) -> Config {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(database) = self.database {
            config.database_path = database;
        }
        if self.debug {
            config.debug = true;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(Config::from_env()?);

    init_tracing(&config);

    run_server(config).await
}
