use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIVISION_SCALE: i64 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Fractional digits kept by a division when the request omits `scale`
    pub default_division_scale: i64,
    /// Log every completed calculation (otherwise calculations are not observed)
    pub trace_calculations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            default_division_scale: DEFAULT_DIVISION_SCALE,
            trace_calculations: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a config from any variable source; unparsable values fall back to defaults
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            port: parse_or("PORT", var("PORT"), defaults.port),
            default_division_scale: parse_or(
                "DEFAULT_DIVISION_SCALE",
                var("DEFAULT_DIVISION_SCALE"),
                defaults.default_division_scale,
            ),
            trace_calculations: parse_or(
                "TRACE_CALCULATIONS",
                var("TRACE_CALCULATIONS"),
                defaults.trace_calculations,
            ),
        }
    }
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value {:?} for {}, using {}", raw, key, default);
            default
        }),
        None => default,
    }
}
