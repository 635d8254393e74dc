use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use clap::Parser;

use crate::api::yahoo::BASE_URL;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "quote-server",
    version,
    about = "Serves normalized extended-hours quotes over HTTP"
)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind
    #[arg(long, short, default_value_t = 5000)]
    pub port: u16,

    /// Timeout in seconds for each provider request
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Base URL of the market-data provider
    #[arg(long, default_value = BASE_URL)]
    pub provider_url: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
