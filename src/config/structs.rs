use serde::{Deserialize, Serialize};

/// 静态配置（从 TOML 与环境变量加载，启动时使用）
///
/// 包含：
/// - server: 服务器地址、端口、CPU 数量
/// - database: 数据库连接配置
/// - logging: 日志配置
/// - links: 链接默认值与校验规则
/// - cors: 跨域配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：LINKSHELF，分隔符：__
    /// 示例：LINKSHELF__SERVER__PORT=9999
    pub fn load() -> Self {
        Self::load_from("config.toml")
    }

    pub fn load_from(path: &str) -> Self {
        use config::{Config, Environment, File};

        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("LINKSHELF")
                    .separator("__")
                    .try_parsing(true),
            );

        // 日志系统此时尚未初始化，只能写 stderr
        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => {
                    if std::path::Path::new(path).exists() {
                        eprintln!("[INFO] Configuration loaded from: {}", path);
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
}

/// 数据库连接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_database_pool_size")]
    pub pool_size: u32,
    #[serde(default = "default_database_timeout")]
    pub timeout: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// Defaults and validation rules applied to inbound links.
///
/// The top-level fields govern the form pages and the CLI; `[links.api]`
/// governs the JSON API, which accepts bare `{url}` bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Folder assigned when a link arrives without one. Empty means "leave unset".
    #[serde(default = "default_folder")]
    pub default_folder: String,
    #[serde(default = "default_require_title")]
    pub require_title: bool,
    #[serde(default)]
    pub api: ApiLinksConfig,
}

/// Link rules for the JSON API (`[links.api]`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiLinksConfig {
    #[serde(default)]
    pub default_folder: String,
    #[serde(default)]
    pub require_title: bool,
}

/// 跨域配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_cors_enabled")]
    pub enabled: bool,
    #[serde(default = "default_cors_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

// ============================================================
// Default value functions
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    5040
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_database_url() -> String {
    "sqlite://links.db?mode=rwc".to_string()
}

fn default_database_pool_size() -> u32 {
    10
}

fn default_database_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

fn default_folder() -> String {
    "root".to_string()
}

fn default_require_title() -> bool {
    true
}

fn default_cors_enabled() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_cors_max_age() -> u64 {
    3600
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cpu_count: default_cpu_count(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            pool_size: default_database_pool_size(),
            timeout: default_database_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            default_folder: default_folder(),
            require_title: default_require_title(),
            api: ApiLinksConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: default_cors_enabled(),
            allowed_origins: default_cors_origins(),
            max_age: default_cors_max_age(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StaticConfig::default();
        assert_eq!(config.server.port, 5040);
        assert_eq!(config.links.default_folder, "root");
        assert!(config.links.require_title);
        assert_eq!(config.cors.allowed_origins, vec!["*".to_string()]);
    }

    #[test]
    fn test_saved_config_roundtrips_through_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        StaticConfig::default().save_to_file(&path).unwrap();
        let sample = std::fs::read_to_string(&path).unwrap();
        assert!(sample.contains("[links]"));
        assert!(sample.contains("[links.api]"));

        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed.database.database_url, default_database_url());
        assert_eq!(parsed.links.default_folder, "root");
        assert!(!parsed.links.api.require_title);
    }

    #[test]
    fn test_api_link_rules_default_to_permissive() {
        let config = StaticConfig::default();
        assert!(config.links.api.default_folder.is_empty());
        assert!(!config.links.api.require_title);

        let parsed: StaticConfig = toml::from_str(
            r#"
            [links.api]
            require_title = true
            "#,
        )
        .unwrap();
        assert!(parsed.links.api.require_title);
        assert!(parsed.links.require_title);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: StaticConfig = toml::from_str(
            r#"
            [links]
            require_title = false
            "#,
        )
        .unwrap();
        assert!(!parsed.links.require_title);
        assert_eq!(parsed.links.default_folder, "root");
        assert_eq!(parsed.server.host, "127.0.0.1");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("linkshelf.toml");
        std::fs::write(&path, "[server]\nport = 9191\n").unwrap();

        let config = StaticConfig::load_from(path.to_str().unwrap());
        assert_eq!(config.server.port, 9191);
    }
}
