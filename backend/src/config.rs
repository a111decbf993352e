use clap::Parser;
use std::path::PathBuf;

/// Server settings, from command-line flags or the matching environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-server", version, about = "Box office dashboard over an SQLite catalog")]
pub struct Config {
    /// SQLite database file holding the catalog table.
    #[arg(long, env = "CATALOG_DB", default_value = "people.db")]
    pub database: PathBuf,

    /// Name of the catalog table.
    #[arg(long, env = "CATALOG_TABLE", default_value = "etl_movie_data")]
    pub table: String,

    /// DDL script run by the init-db action.
    #[arg(long, env = "CATALOG_SCHEMA", default_value = "schema.sql")]
    pub schema: PathBuf,

    /// CSV file loaded by the run-etl action.
    #[arg(long, env = "CATALOG_INGEST_SOURCE", default_value = "movies.csv")]
    pub ingest_source: PathBuf,

    /// Prefix for the top box office figure.
    #[arg(long, env = "CATALOG_CURRENCY", default_value = "₹")]
    pub currency: String,

    #[arg(long, env = "CATALOG_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "CATALOG_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Open the dashboard in the default browser once the server is up.
    #[arg(long, env = "CATALOG_OPEN_BROWSER")]
    pub open_browser: bool,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
