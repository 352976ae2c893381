use crate::error::{AgriError, Result};
use crate::models::Language;
use dialoguer::{Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub default_language: Language,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
    /// Directory holding the static web frontend, served at `/`
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    5001
}

fn default_body_limit() -> usize {
    64 * 1024
}

/// Accepts a number or a string so `port: ${AGRIASSIST_PORT}` works after substitution.
fn deserialize_port<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u16),
        Text(String),
    }

    match Port::deserialize(deserializer)? {
        Port::Number(p) => Ok(p),
        Port::Text(s) => s.trim().parse::<u16>().map_err(|_| {
            D::Error::custom(format!(
                "invalid port '{}' - ensure AGRIASSIST_PORT environment variable is set",
                s
            ))
        }),
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
            body_limit_bytes: default_body_limit(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Record every advisory request and response in SQLite
    #[serde(default)]
    pub enabled: bool,
    /// Database file; defaults to `<data_dir>/queries.db`
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of a running backend, used by `--remote`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5001".into()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load from an explicit path, or search the standard locations. A
    /// missing explicit path is an error; finding nothing in the standard
    /// locations yields the built-in defaults.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) if !p.exists() => {
                return Err(AgriError::Config(format!(
                    "Config file not found at {:?}. Run `agriassist init` to set up.",
                    p
                )));
            }
            Some(p) => Some(p.to_path_buf()),
            None => Self::find_config_path(),
        };

        let Some(config_path) = config_path else {
            tracing::info!("No config file found, using defaults");
            return Ok(Self::default());
        };

        tracing::debug!(path = %config_path.display(), "Loading config");

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AgriError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&config_str)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content);

        serde_yaml::from_str(&content)
            .map_err(|e| AgriError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Try XDG config directory
        dirs::config_dir()
            .map(|dir| dir.join("agriassist").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/agriassist/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgriError::Config("Cannot determine config directory".into()))?
            .join("agriassist");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        let input_err = |e: dialoguer::Error| AgriError::Config(format!("Input error: {}", e));

        println!();
        println!("Let's set up the agriculture assistant!");
        println!();

        // --- Server ---
        println!("API server");
        let host: String = Input::new()
            .with_prompt("  Bind host")
            .default(default_host())
            .interact_text()
            .map_err(input_err)?;

        let port: u16 = Input::new()
            .with_prompt("  Port")
            .default(default_port())
            .interact_text()
            .map_err(input_err)?;

        let static_dir: String = Input::new()
            .with_prompt("  Static frontend directory (blank to skip)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(input_err)?;

        println!();

        // --- Storage ---
        println!("Query log");
        let enabled = Confirm::new()
            .with_prompt("  Record requests in a local SQLite log?")
            .default(false)
            .interact()
            .map_err(input_err)?;

        println!();

        // --- Client ---
        println!("Remote backend (used by --remote)");
        let base_url: String = Input::new()
            .with_prompt("  Base URL")
            .default(default_base_url())
            .interact_text()
            .map_err(input_err)?;

        let codes: Vec<&str> = Language::all().iter().map(|l| l.as_str()).collect();
        let lang_idx = Select::new()
            .with_prompt("  Default language")
            .items(&codes)
            .default(0)
            .interact()
            .map_err(input_err)?;

        println!();

        let config = Config {
            server: ServerConfig {
                host,
                port,
                static_dir: (!static_dir.is_empty()).then(|| PathBuf::from(static_dir)),
                body_limit_bytes: default_body_limit(),
            },
            storage: StorageConfig {
                enabled,
                path: None,
            },
            client: ClientConfig { base_url },
            default_language: Language::all()[lang_idx],
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)?;

        // Write with a header comment
        let content = format!(
            "# Agriculture Assistant Configuration\n# Generated by `agriassist init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return content.to_string(),
        };

        // Unset variables are left as-is
        re.replace_all(content, |cap: &regex_lite::Captures| {
            std::env::var(&cap[1]).unwrap_or_else(|_| cap[0].to_string())
        })
        .into_owned()
    }

    pub fn data_dir(data_dir_override: Option<&Path>) -> Result<PathBuf> {
        // CLI override takes priority
        if let Some(dir) = data_dir_override {
            return Ok(dir.to_path_buf());
        }

        // Then check env var
        if let Ok(dir) = std::env::var("AGRIASSIST_DATA_DIR") {
            return Ok(PathBuf::from(dir));
        }

        // Use XDG data directory
        let data_dir = dirs::data_dir()
            .ok_or_else(|| AgriError::Config("Cannot determine data directory".into()))?
            .join("agriassist");
        Ok(data_dir)
    }

    /// Query log location: configured path, else `<data_dir>/queries.db`.
    pub fn db_path(&self, data_dir_override: Option<&Path>) -> Result<PathBuf> {
        match &self.storage.path {
            Some(p) => Ok(p.clone()),
            None => Ok(Self::data_dir(data_dir_override)?.join("queries.db")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.storage.enabled);
        assert_eq!(config.client.base_url, "http://localhost:5001");
        assert_eq!(config.default_language, Language::En);
    }

    #[test]
    fn parses_full_document() {
        let yaml = r#"
server:
  host: 127.0.0.1
  port: 8080
  static_dir: ./public
storage:
  enabled: true
  path: /tmp/agri.db
client:
  base_url: http://10.0.0.5:5001
default_language: mr
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.server.static_dir, Some(PathBuf::from("./public")));
        assert!(config.storage.enabled);
        assert_eq!(config.client.base_url, "http://10.0.0.5:5001");
        assert_eq!(config.default_language, Language::Mr);
        assert_eq!(
            config.db_path(None).unwrap(),
            PathBuf::from("/tmp/agri.db")
        );
    }

    #[test]
    fn substitutes_environment_variables() {
        std::env::set_var("AGRIASSIST_TEST_PORT", "9090");
        let config = Config::from_yaml("server:\n  port: \"${AGRIASSIST_TEST_PORT}\"\n").unwrap();
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn unset_variable_is_left_in_place() {
        let out = Config::substitute_env_vars("url: ${AGRIASSIST_SURELY_UNSET_VAR}");
        assert_eq!(out, "url: ${AGRIASSIST_SURELY_UNSET_VAR}");
    }

    #[test]
    fn bad_port_names_the_variable() {
        let err = Config::from_yaml("server:\n  port: \"${AGRIASSIST_PORT_MISSING}\"\n")
            .unwrap_err()
            .to_string();
        assert!(err.contains("AGRIASSIST_PORT"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let result = Config::load(Some(Path::new("/definitely/not/here.yaml")));
        assert!(matches!(result, Err(AgriError::Config(_))));
    }

    #[test]
    fn db_path_uses_data_dir_override() {
        let config = Config::default();
        let path = config.db_path(Some(Path::new("/var/lib/agri"))).unwrap();
        assert_eq!(path, PathBuf::from("/var/lib/agri/queries.db"));
    }
}
