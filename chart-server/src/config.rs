//! Server configuration from command-line arguments and environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Default port for the chart server.
pub const DEFAULT_PORT: u16 = 3000;

/// Command-line arguments for chart-svg.
#[derive(Debug, Clone, Parser)]
#[command(name = "chart-svg")]
#[command(about = "Render SVG charts from URL query parameters")]
#[command(version)]
pub struct CliArgs {
    /// Address to bind to
    #[arg(long, env = "CHART_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "CHART_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory with static files served at `/`
    #[arg(long, env = "CHART_PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Static file directory.
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from("public"),
        }
    }
}

impl ServerConfig {
    /// Socket address to bind.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl From<CliArgs> for ServerConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            public_dir: args.public_dir,
        }
    }
}
