use std::{
    env,
    net::{AddrParseError, SocketAddr},
    time::Duration,
};

use clap::Parser;

pub const DEFAULT_NODE_URL: &str = "http://bob.nem.ninja:7778";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "xem-dashboard", version, about = "Mock XEM ledger dashboard")]
pub struct Args {
    /// Address to bind (env DASHBOARD_BIND)
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on (env DASHBOARD_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Seconds a lookup result stays cached (env LOOKUP_CACHE_TTL)
    #[arg(long)]
    pub cache_ttl: Option<f32>,

    /// Node URL shown in the session (env XEM_NODE_URL)
    #[arg(long)]
    pub node_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: String,
    pub port: u16,
    pub cache_ttl: Duration,
    pub node_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 7000,
            cache_ttl: Duration::from_secs(60),
            node_url: DEFAULT_NODE_URL.to_string(),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn env_or_string(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Negative or NaN disables caching; a positive overflow caps at `Duration::MAX`.
fn ttl_from_secs(secs: f32) -> Duration {
    match Duration::try_from_secs_f32(secs) {
        Ok(ttl) => ttl,
        Err(_) if secs > 0.0 => Duration::MAX,
        Err(_) => Duration::ZERO,
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Self {
            bind: env_or_string("DASHBOARD_BIND", &defaults.bind),
            port: env_or("DASHBOARD_PORT", defaults.port),
            cache_ttl: ttl_from_secs(env_or("LOOKUP_CACHE_TTL", defaults.cache_ttl.as_secs_f32())),
            node_url: env_or_string("XEM_NODE_URL", &defaults.node_url),
        }
    }

    /// Command-line flags win over the environment.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(bind) = &args.bind {
            self.bind = bind.clone();
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(ttl) = args.cache_ttl {
            self.cache_ttl = ttl_from_secs(ttl);
        }
        if let Some(url) = &args.node_url {
            self.node_url = url.clone();
        }
        self
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.bind, self.port).parse()
    }
}
