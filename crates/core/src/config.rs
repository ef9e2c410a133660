use serde::Deserialize;

/// Application version reported by the health endpoint
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Operating environment (development, staging, production)
    #[serde(default = "default_env")]
    pub env: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_env() -> String {
    "development".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            env: default_env(),
        }
    }
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        let config = envy::from_env::<Config>()?;
        tracing::debug!("Loaded configuration for {} environment", config.env);
        Ok(config)
    }

    /// Builds a config from explicit key/value pairs, using the same rules as `from_env`
    #[cfg(test)]
    pub(crate) fn from_vars<I>(vars: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, Config>(vars)?)
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
