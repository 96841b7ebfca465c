use authgate::cli::{Cli, run};
use authgate::logging::init_logging;
use clap::Parser;
use dotenvy::dotenv;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
