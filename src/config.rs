use std::net::SocketAddr;

/// Runtime configuration for the job-order server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub listen_addr: SocketAddr,
    /// Lower the default log filter to debug-level output
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            // SAFETY: This is a hardcoded valid address that will always parse
            listen_addr: "127.0.0.1:5000"
                .parse()
                .expect("default listen address is valid"),
            debug: false,
        }
    }
}

impl ServerConfig {
    pub fn new(listen_addr: SocketAddr) -> Self {
        Self {
            listen_addr,
            ..Default::default()
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_default() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.listen_addr.to_string(), "127.0.0.1:5000");
        assert!(!cfg.debug);
    }

    #[test]
    fn server_config_new() {
        let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
        let cfg = ServerConfig::new(addr);
        assert_eq!(cfg.listen_addr, addr);
        assert!(!cfg.debug);
    }

    #[test]
    fn server_config_with_debug() {
        let cfg = ServerConfig::default().with_debug(true);
        assert!(cfg.debug);
    }
}
