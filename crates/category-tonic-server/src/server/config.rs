use anyhow::{Context, bail};
use clap::Parser;
use std::net::SocketAddr;

pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:50051";
pub const DEFAULT_STREAM_BUFFER_SIZE: usize = 16;

/// Runtime configuration for the `category-tonic-server` binary.
///
/// All values are parsed from CLI arguments or environment variables (a `.env`
/// file in the working directory is loaded first).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "category-tonic-server",
    version,
    about = "A gRPC service for creating and reading categories"
)]
pub struct CliArgs {
    /// Address to listen on (TCP or Unix socket path; use --uds for Unix
    /// socket).
    ///
    /// Example: "0.0.0.0:50051" or "/tmp/category.sock"
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from(DEFAULT_SERVER_ADDR))]
    pub server_addr: String,

    /// Listen on a Unix socket instead of TCP. If set, `SERVER_ADDR` must be a
    /// file path.
    #[arg(short, long, default_value_t = false)]
    pub uds: bool,

    /// Number of replies the bidirectional stream may buffer before it waits
    /// for the client to read.
    ///
    /// Environment variable: `STREAM_BUFFER_SIZE`
    #[arg(long, env = "STREAM_BUFFER_SIZE", default_value_t = DEFAULT_STREAM_BUFFER_SIZE)]
    pub stream_buffer_size: usize,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: String,
    pub uds: bool,
    pub stream_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDR.to_string(),
            uds: false,
            stream_buffer_size: DEFAULT_STREAM_BUFFER_SIZE,
        }
    }
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.stream_buffer_size == 0 {
            bail!("STREAM_BUFFER_SIZE must be greater than 0");
        }

        if !args.uds {
            args.server_addr
                .parse::<SocketAddr>()
                .with_context(|| format!("invalid SERVER_ADDR `{}`", args.server_addr))?;
        }

        Ok(Self {
            server_addr: args.server_addr,
            uds: args.uds,
            stream_buffer_size: args.stream_buffer_size,
        })
    }
}
