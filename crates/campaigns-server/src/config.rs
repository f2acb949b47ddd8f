use anyhow::Context;

pub const DEFAULT_CLASSIFIER_ENDPOINT: &str =
    "https://ngkc0vhbrl.execute-api.eu-west-1.amazonaws.com/api/";
pub const DEFAULT_CLASSIFIER_TARGET_URL: &str = "https://arabic.cnn.com/";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Root used to derive campaign `uri`s.
    pub public_base_url: String,
    pub classifier_endpoint: String,
    pub classifier_target_url: String,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("SERVER_PORT is not a valid port: {raw}"))?,
            None => 8080,
        };
        let public_base_url =
            lookup("PUBLIC_BASE_URL").unwrap_or_else(|| format!("http://{host}:{port}"));

        Ok(Self {
            host,
            port,
            public_base_url,
            classifier_endpoint: lookup("CLASSIFIER_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_CLASSIFIER_ENDPOINT.to_string()),
            classifier_target_url: lookup("CLASSIFIER_TARGET_URL")
                .unwrap_or_else(|| DEFAULT_CLASSIFIER_TARGET_URL.to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
        assert_eq!(cfg.public_base_url, "http://0.0.0.0:8080");
        assert_eq!(cfg.classifier_endpoint, DEFAULT_CLASSIFIER_ENDPOINT);
        assert_eq!(cfg.classifier_target_url, DEFAULT_CLASSIFIER_TARGET_URL);
    }

    #[test]
    fn base_url_follows_host_and_port_unless_overridden() {
        let cfg = config(&[("SERVER_HOST", "127.0.0.1"), ("SERVER_PORT", "9000")]).unwrap();
        assert_eq!(cfg.public_base_url, "http://127.0.0.1:9000");

        let cfg = config(&[("PUBLIC_BASE_URL", "https://campaigns.example.com")]).unwrap();
        assert_eq!(cfg.public_base_url, "https://campaigns.example.com");
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = config(&[("SERVER_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));
    }
}
