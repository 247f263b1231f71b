use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use clap::Args;
use colsort_core::{DEFAULT_SORT_PARAM, DEFAULT_STORE_CAPACITY, SortParams};

/// Listener and request-parsing settings.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Query parameter carrying the requested sort column
    #[arg(long, env = "COLSORT_SORT_PARAM", default_value = DEFAULT_SORT_PARAM)]
    pub sort_param: String,

    /// Upper bound on stored (session, view) sort slots
    #[arg(long, env = "COLSORT_MAX_SESSIONS", default_value_t = DEFAULT_STORE_CAPACITY)]
    pub max_sort_sessions: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub sort_params: SortParams,
    pub max_sort_sessions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            sort_params: SortParams::default(),
            max_sort_sessions: DEFAULT_STORE_CAPACITY,
        }
    }
}

impl From<ServeArgs> for Config {
    fn from(args: ServeArgs) -> Self {
        let sort_param = args.sort_param.trim();
        Self {
            server_host: args.host,
            server_port: args.port,
            sort_params: if sort_param.is_empty() {
                SortParams::default()
            } else {
                SortParams::new(sort_param)
            },
            max_sort_sessions: args.max_sort_sessions,
        }
    }
}

impl Config {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .server_host
            .parse()
            .with_context(|| format!("invalid SERVER_HOST {:?}", self.server_host))?;
        Ok(SocketAddr::new(ip, self.server_port))
    }
}
