use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8081, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

/// Startup demo data.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self { Self { enabled: true } }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_true() -> bool { true }

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl AppConfig {
    /// Load `config.toml` (or `$CONFIG_PATH`). Only a missing file falls back to
    /// environment variables (`SERVER_HOST`, `SERVER_PORT`, `DATABASE_URL`,
    /// `SEED_ENABLED`); a file that fails to parse is an error.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_vars(&config_path(), env_var)
    }

    fn load_or_vars(path: &str, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = match load_from_file(path) {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => Self::from_vars(&var),
            Err(e) => return Err(e.context(format!("invalid config file {path}"))),
        };
        cfg.server.normalize()?;
        cfg.database.fill_url_from(&var);
        cfg.database.validate()?;
        Ok(cfg)
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut seed = SeedConfig::default();
        if let Some(v) = var("SEED_ENABLED") {
            seed.enabled = !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off");
        }
        let mut database = DatabaseConfig::default();
        database.fill_url_from(&var);
        Self { server: ServerConfig::from_vars(&var), database, seed }
    }
}

impl ServerConfig {
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let host = var("SERVER_HOST").unwrap_or(defaults.host);
        let port = var("SERVER_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let worker_threads = var("TOKIO_WORKER_THREADS")
            .and_then(|v| v.parse::<usize>().ok())
            .or(defaults.worker_threads);
        Self { host, port, worker_threads }
    }

    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    /// An empty `url` is taken from `DATABASE_URL`.
    fn fill_url_from(&mut self, var: impl Fn(&str) -> Option<String>) {
        if self.url.trim().is_empty() {
            if let Some(url) = var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.trim_start().to_lowercase().starts_with("sqlite:")
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or the DATABASE_URL env var"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || self.is_sqlite()) {
            return Err(anyhow!("database.url must start with postgresql://, postgres:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            worker_threads = 2

            [database]
            url = "postgres://u:p@localhost:5432/quickhelp"
            max_connections = 20

            [seed]
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.database.max_connections, 20);
        assert_eq!(cfg.database.min_connections, 2);
        assert!(!cfg.seed.enabled);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.port, 8081);
        assert!(cfg.seed.enabled);
        assert_eq!(cfg.database.acquire_timeout_secs, 30);
    }

    #[test]
    fn validate_accepts_sqlite_and_postgres() {
        let mut db = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
        assert!(db.validate().is_ok());
        assert!(db.is_sqlite());
        db.url = "postgresql://localhost/quickhelp".into();
        assert!(db.validate().is_ok());
        assert!(!db.is_sqlite());
    }

    #[test]
    fn validate_rejects_bad_database_settings() {
        let db = DatabaseConfig { url: "mysql://localhost/x".into(), ..Default::default() };
        assert!(db.validate().is_err());

        let db = DatabaseConfig { url: "sqlite::memory:".into(), min_connections: 5, max_connections: 1, ..Default::default() };
        assert!(db.validate().is_err());

        let db = DatabaseConfig { url: "sqlite::memory:".into(), acquire_timeout_secs: 0, ..Default::default() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn normalize_fills_host_and_threads() {
        let mut s = ServerConfig { host: "  ".into(), port: 8080, worker_threads: Some(0) };
        s.normalize().unwrap();
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.worker_threads, Some(4));

        let mut s = ServerConfig { host: "h".into(), port: 0, worker_threads: None };
        assert!(s.normalize().is_err());
    }

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |k: &str| pairs.iter().find(|(name, _)| *name == k).map(|(_, v)| v.to_string())
    }

    fn temp_config(name: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(format!("quickhelp-{}-{name}.toml", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn env_fallbacks_fill_server_database_and_seed() {
        let cfg = AppConfig::from_vars(vars(&[
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "9090"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("SEED_ENABLED", "false"),
        ]));
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9090");
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert!(!cfg.seed.enabled);

        let cfg = AppConfig::from_vars(vars(&[("SERVER_PORT", "not-a-port"), ("SEED_ENABLED", "yes")]));
        assert_eq!(cfg.server.port, 8081);
        assert!(cfg.database.url.is_empty());
        assert!(cfg.seed.enabled);
    }

    #[test]
    fn missing_file_falls_back_to_env() {
        let path = std::env::temp_dir().join("quickhelp-no-such-config.toml");
        let cfg = AppConfig::load_or_vars(
            &path.to_string_lossy(),
            vars(&[("SERVER_PORT", "9191"), ("DATABASE_URL", "postgres://localhost/quickhelp")]),
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9191);
        assert_eq!(cfg.database.url, "postgres://localhost/quickhelp");
    }

    #[test]
    fn broken_file_is_an_error_not_a_fallback() {
        let path = temp_config("broken", "[server]\nport = \"not a number\"\n");
        let err = AppConfig::load_or_vars(&path, vars(&[("DATABASE_URL", "sqlite::memory:")])).unwrap_err();
        assert!(err.to_string().contains("invalid config file"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn file_without_url_takes_database_url_from_env() {
        let path = temp_config("no-url", "[seed]\nenabled = false\n");
        let cfg = AppConfig::load_or_vars(&path, vars(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();
        assert!(cfg.database.is_sqlite());
        assert!(!cfg.seed.enabled);
        std::fs::remove_file(&path).ok();
    }
}
