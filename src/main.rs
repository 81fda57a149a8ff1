use dotenv::dotenv;
use rolodex_store::prelude::run_app;
use std::process::exit;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // .env values feed the clap env fallbacks, so load them first
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_app().await {
        eprintln!("Error: {e}");
        exit(1);
    }
}
