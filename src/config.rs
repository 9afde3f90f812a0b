// Configuration module
// Every setting is fixed in code: the server reads no config files,
// environment variables, or command-line flags.

use std::net::SocketAddr;

/// Address the listener binds (all interfaces).
const HOST: &str = "0.0.0.0";
/// Port the listener binds.
const PORT: u16 = 3000;
/// Directory served, relative to the process working directory.
const WEB_ROOT: &str = "web";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

/// Listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads; `None` uses one per CPU core.
    pub workers: Option<usize>,
}

/// Served content settings.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub root: String,
    /// Files tried, in order, when a directory is requested.
    pub index_files: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            workers: None,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: WEB_ROOT.to_string(),
            index_files: vec!["index.html".to_string(), "index.htm".to_string()],
        }
    }
}

impl Config {
    /// Socket address the listener binds.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_served_site() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site.root, "web");
        assert_eq!(config.site.index_files, ["index.html", "index.htm"]);
    }

    #[test]
    fn socket_addr_covers_all_interfaces() {
        let addr = Config::default().socket_addr().unwrap();
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn bad_host_is_reported() {
        let mut config = Config::default();
        config.server.host = "not an address".to_string();
        assert!(config.socket_addr().is_err());
    }
}
