use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::shared::file::SourceFile;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

/// Where the delimited source files live and how they are split
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub dir: String,
    pub delimiter: String,
    pub customers: String,
    pub products: String,
    pub invoices: String,
    pub sales: String,
}

impl DataConfig {
    fn source(&self, file_name: &str) -> SourceFile {
        SourceFile::new(Path::new(&self.dir).join(file_name), &self.delimiter)
    }

    pub fn customers_source(&self) -> SourceFile {
        self.source(&self.customers)
    }

    pub fn products_source(&self) -> SourceFile {
        self.source(&self.products)
    }

    pub fn invoices_source(&self) -> SourceFile {
        self.source(&self.invoices)
    }

    pub fn sales_source(&self) -> SourceFile {
        self.source(&self.sales)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r##"
[server]
port = 3000

[database]
path = "target/db/sales.db"

[data]
dir = "datos"
delimiter = "#$%#"
customers = "customers.txt"
products = "products.txt"
invoices = "invoices.txt"
sales = "sales.txt"
"##;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Current working directory
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    for config_path in candidate_config_paths() {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            return Ok(config);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn candidate_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("config.toml"));
        }
    }
    paths.push(PathBuf::from("config.toml"));
    paths
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));
    resolve_path(&config.database.path, exe_dir.as_deref())
}

fn resolve_path(path: &str, base: Option<&Path>) -> PathBuf {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }
    match base {
        Some(base) => base.join(candidate),
        None => candidate.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/sales.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.data.delimiter, "#$%#");
    }

    #[test]
    fn test_server_section_is_optional() {
        let config: Config = toml::from_str(
            r##"
            [database]
            path = "db.sqlite"

            [data]
            dir = "/srv/data"
            delimiter = ";"
            customers = "c.txt"
            products = "p.txt"
            invoices = "i.txt"
            sales = "s.txt"
            "##,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.data.invoices_source().path,
            PathBuf::from("/srv/data/i.txt")
        );
        assert_eq!(config.data.sales_source().delimiter, ";");
    }

    #[test]
    fn test_resolve_path() {
        let base = Path::new("/opt/app");
        assert_eq!(
            resolve_path("/var/db.sqlite", Some(base)),
            PathBuf::from("/var/db.sqlite")
        );
        assert_eq!(
            resolve_path("db/app.db", Some(base)),
            PathBuf::from("/opt/app/db/app.db")
        );
        assert_eq!(resolve_path("db/app.db", None), PathBuf::from("db/app.db"));
    }
}
