/// Subscriber settings resolved from configuration and the process env.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Fallback filter directive when `RUST_LOG` is unset.
    pub default_filter: String,
}

pub const DEFAULT_FILTER: &str = "info,paperlens=debug,tower_http=debug";

impl TracingConfig {
    pub fn new(environment: impl Into<String>, json_format: bool, level: Option<&str>) -> Self {
        let json_format = json_format
            || std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false);

        let default_filter = match level.map(str::trim).filter(|l| !l.is_empty()) {
            Some(level) => format!("{level},tower_http=debug"),
            None => DEFAULT_FILTER.to_string(),
        };

        Self {
            environment: environment.into(),
            json_format,
            default_filter,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        Self::new(environment, false, None)
    }
}
