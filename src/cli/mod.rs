use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api;
use crate::application::LedgerService;

/// Partio - Shared Bill Splitting Ledger
#[derive(Parser)]
#[command(name = "partio")]
#[command(about = "A shared bill splitting ledger served over an HTTP API")]
#[command(version)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    pub listen: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8090)]
    pub port: u16,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        // One ledger for the whole process; workers share it through Data.
        let service = web::Data::new(LedgerService::new());

        info!("listening on {}:{}", self.listen, self.port);
        HttpServer::new(move || App::new().app_data(service.clone()).service(api::routes()))
            .bind((self.listen.as_str(), self.port))
            .with_context(|| format!("Failed to bind {}:{}", self.listen, self.port))?
            .run()
            .await
            .context("Server error")
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
