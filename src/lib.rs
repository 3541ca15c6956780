pub mod app;
pub mod cli;
pub mod client;
pub mod history;
pub mod models;

use cli::Args;
use log::info;
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Chat Service URL: {}", args.chat_base_url);
    info!("Request Timeout: {}s", args.request_timeout_secs);
    info!("Greeting Banner: {}", !args.no_banner);
    info!("-------------------------");

    app::run(args).await
}
