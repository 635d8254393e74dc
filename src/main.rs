use clap::Parser;
use quote_server::{api::YahooApi, config::ServerConfig, server, services::QuoteService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = ServerConfig::parse();

    let api = YahooApi::new(&config.provider_url, config.timeout())?;
    let service = QuoteService::new(api);

    server::run_server(config.socket_addr(), service).await
}
