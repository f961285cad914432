use serde::Deserialize;

pub const API_KEY_VAR: &str = "GOOGLE_SHEETS_API_KEY";
pub const SPREADSHEET_ID_VAR: &str = "GOOGLE_SHEETS_SPREADSHEET_ID";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub sheets: SheetsConfig,
    pub server: ServerConfig,
    /// Filled from the environment, never from config.toml
    #[serde(skip)]
    pub credentials: Credentials,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SheetsConfig {
    pub api_base_url: String,
    pub cache_ttl_ms: u64,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Default, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub spreadsheet_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("spreadsheet_id", &self.spreadsheet_id)
            .finish()
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[sheets]
api_base_url = "https://sheets.googleapis.com/v4/spreadsheets"
cache_ttl_ms = 30000
request_timeout_secs = 30

[server]
host = "0.0.0.0"
port = 3000
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Credentials are read from the environment afterwards.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_file_config()?;
    config.credentials = credentials_from(|name| std::env::var(name).ok());
    Ok(config)
}

fn load_file_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Missing variables become empty strings: the service still starts and
/// the sheets simply read as empty.
fn credentials_from(lookup: impl Fn(&str) -> Option<String>) -> Credentials {
    let read = |name: &str| match lookup(name) {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => {
            tracing::warn!("{} is not set", name);
            String::new()
        }
    };
    Credentials {
        api_key: read(API_KEY_VAR),
        spreadsheet_id: read(SPREADSHEET_ID_VAR),
    }
}
