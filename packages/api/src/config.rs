//! Backend selection from environment variables.

/// Default pool size for direct Postgres connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Which note backend the server talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    /// Hosted PostgREST endpoint authenticated with the anonymous key.
    Rest { url: String, anon_key: String },
    /// Direct Postgres connection pool.
    Postgres { url: String, max_connections: u32 },
    /// Process-local store; everything is lost on restart.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

impl BackendConfig {
    /// Read the backend settings from the process environment (and `.env`).
    ///
    /// `SUPABASE_URL` + `SUPABASE_ANON_KEY` select the hosted backend,
    /// otherwise `DATABASE_URL` selects direct Postgres, otherwise notes are
    /// kept in memory.
    #[cfg(feature = "server")]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(url) = var("SUPABASE_URL") {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid {
                    name: "SUPABASE_URL",
                    value: url,
                });
            }
            let anon_key = var("SUPABASE_ANON_KEY").ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;
            return Ok(Self::Rest {
                url: url.trim_end_matches('/').to_string(),
                anon_key,
            });
        }

        if let Some(url) = var("DATABASE_URL") {
            let max_connections = match var("DATABASE_MAX_CONNECTIONS") {
                Some(raw) => raw
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or(ConfigError::Invalid {
                        name: "DATABASE_MAX_CONNECTIONS",
                        value: raw,
                    })?,
                None => DEFAULT_MAX_CONNECTIONS,
            };
            return Ok(Self::Postgres { url, max_connections });
        }

        Ok(Self::Memory)
    }

    /// Short name for log lines. Never includes credentials.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rest { .. } => "postgrest",
            Self::Postgres { .. } => "postgres",
            Self::Memory => "memory",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_rest_backend_from_url_and_key() {
        let config = BackendConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://abc.supabase.co/"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("DATABASE_URL", "postgres://ignored"),
        ]))
        .unwrap();
        assert_eq!(
            config,
            BackendConfig::Rest {
                url: "https://abc.supabase.co".to_string(),
                anon_key: "anon".to_string(),
            }
        );
        assert_eq!(config.kind(), "postgrest");
    }

    #[test]
    fn test_rest_backend_requires_key() {
        let err = BackendConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "   "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("SUPABASE_ANON_KEY"));
    }

    #[test]
    fn test_rest_url_must_be_http() {
        let err = BackendConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "SUPABASE_URL", .. }));
    }

    #[test]
    fn test_postgres_backend_with_default_pool_size() {
        let config =
            BackendConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/notes")]))
                .unwrap();
        assert_eq!(
            config,
            BackendConfig::Postgres {
                url: "postgres://localhost/notes".to_string(),
                max_connections: DEFAULT_MAX_CONNECTIONS,
            }
        );
    }

    #[test]
    fn test_postgres_pool_size_must_be_positive() {
        let err = BackendConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/notes"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "DATABASE_MAX_CONNECTIONS", .. }));
    }

    #[test]
    fn test_memory_when_nothing_is_set() {
        assert_eq!(
            BackendConfig::from_lookup(lookup(&[])).unwrap(),
            BackendConfig::Memory
        );
    }
}
