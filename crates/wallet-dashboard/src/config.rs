//! Process configuration, read from environment variables with the same
//! defaults as the original stdlib dashboard server.

use std::env;
use std::path::PathBuf;

/// Everything the dashboard needs to talk to the daemon and to itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub rpc_host: String,
    pub rpc_port: u16,
    pub rpc_user: String,
    pub rpc_password: String,
    pub rpc_cookie: PathBuf,
    pub dashboard_port: u16,
    pub wallet_name: String,
    pub static_dir: PathBuf,
}

fn home_dir() -> PathBuf {
    env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."))
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    /// Reads the environment table, falling back to the original dashboard's
    /// defaults (regtest RPC on `127.0.0.1:19443`, dashboard on `5000`).
    pub fn from_env() -> Self {
        let rpc_cookie = env::var("RPC_COOKIE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home_dir().join(".croncoin/regtest/.cookie"));
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home_dir().join("html"));

        Config {
            rpc_host: env_or("RPC_HOST", "127.0.0.1"),
            rpc_port: env_or("RPC_PORT", "19443").parse().unwrap_or(19443),
            rpc_user: env_or("RPC_USER", ""),
            rpc_password: env_or("RPC_PASSWORD", ""),
            rpc_cookie,
            dashboard_port: env_or("DASHBOARD_PORT", "5000").parse().unwrap_or(5000),
            wallet_name: env_or("WALLET_NAME", "default"),
            static_dir,
        }
    }

    /// Base URL for JSON-RPC calls, including the per-wallet path segment.
    pub fn rpc_url(&self) -> String {
        if self.wallet_name.is_empty() {
            format!("http://{}:{}", self.rpc_host, self.rpc_port)
        } else {
            format!("http://{}:{}/wallet/{}", self.rpc_host, self.rpc_port, self.wallet_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_url_includes_wallet_path() {
        let config = Config {
            rpc_host: "127.0.0.1".into(),
            rpc_port: 19443,
            rpc_user: String::new(),
            rpc_password: String::new(),
            rpc_cookie: PathBuf::from("/dev/null"),
            dashboard_port: 5000,
            wallet_name: "default".into(),
            static_dir: PathBuf::from("."),
        };
        assert_eq!(config.rpc_url(), "http://127.0.0.1:19443/wallet/default");
    }

    #[test]
    fn rpc_url_omits_wallet_path_when_empty() {
        let config = Config {
            rpc_host: "127.0.0.1".into(),
            rpc_port: 19443,
            rpc_user: String::new(),
            rpc_password: String::new(),
            rpc_cookie: PathBuf::from("/dev/null"),
            dashboard_port: 5000,
            wallet_name: String::new(),
            static_dir: PathBuf::from("."),
        };
        assert_eq!(config.rpc_url(), "http://127.0.0.1:19443");
    }
}
