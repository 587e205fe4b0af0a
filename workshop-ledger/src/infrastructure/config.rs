use serde::Deserialize;

use super::telemetry::TelemetryConfig;

#[derive(Default, Deserialize, Clone, Debug)]
pub struct LedgerConfig {
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub db: DatabaseConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct HostConfig {
    #[serde(default = "HostConfig::default_address")]
    pub bind_address: String,
    #[serde(default = "HostConfig::default_port")]
    pub bind_port: u16,
}

impl HostConfig {
    fn default_address() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_address: Self::default_address(),
            bind_port: Self::default_port(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseConfig {
    #[serde(default = "DatabaseConfig::default_url")]
    pub url: String,
    /// Run pending migrations before serving.
    #[serde(default = "DatabaseConfig::default_auto_migrate")]
    pub auto_migrate: bool,
}

impl DatabaseConfig {
    fn default_url() -> String {
        "sqlite://payroll.db?mode=rwc".to_string()
    }

    fn default_auto_migrate() -> bool {
        true
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            auto_migrate: Self::default_auto_migrate(),
        }
    }
}

/// Layers `config.yaml`, any yaml file named on the command line and `LEDGER__*`
/// environment variables, later sources winning.
pub fn build_config() -> anyhow::Result<LedgerConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = config::Config::builder().add_source(
        config::File::with_name("config")
            .required(false)
            .format(config::FileFormat::Yaml),
    );
    for arg in args {
        if arg.ends_with("yaml") || arg.ends_with("yml") {
            config = config.add_source(
                config::File::from(std::path::Path::new(arg.as_str()))
                    .format(config::FileFormat::Yaml)
                    .required(false),
            );
        }
    }
    config = config.add_source(
        config::Environment::with_prefix("LEDGER")
            .separator("__")
            .try_parsing(true),
    );
    Ok(config.build()?.try_deserialize::<LedgerConfig>()?)
}
