//! Storefront listener settings.

use clap::Args;

/// Where the storefront JSON API listens.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Interface to bind
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, env = "SERVER_PORT", default_value = "8698")]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// `host:port`, with IPv6 literals bracketed.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str) -> ServerRuntimeConfig {
        ServerRuntimeConfig {
            host: host.to_string(),
            port: 8698,
        }
    }

    #[test]
    fn ipv4_socket_addr() {
        assert_eq!(config("0.0.0.0").socket_addr(), "0.0.0.0:8698");
    }

    #[test]
    fn ipv6_socket_addr_is_bracketed() {
        assert_eq!(config("::").socket_addr(), "[::]:8698");
        assert_eq!(config("[::1]").socket_addr(), "[::1]:8698");
    }
}
