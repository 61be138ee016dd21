use std::env;

pub const DEV_SECRET: &str = "development-secret-change-me";
pub const SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_port: u16,
    pub frontend_urls: Vec<String>,
    pub database_url: String,
    pub db_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expires_secs: i64,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_port = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);
        let frontend_urls = lookup("FRONTEND_URLS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().trim_end_matches('/').to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_else(|| {
                vec![
                    "http://localhost:5173".to_string(),
                    "http://localhost:5174".to_string(),
                ]
            });
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => {
                let user = lookup("DB_USER").unwrap_or_else(|| "jobhive".into());
                let pass = lookup("DB_PASS").unwrap_or_else(|| "jobhive".into());
                let host = lookup("DB_HOST").unwrap_or_else(|| "localhost:5432".into());
                let name = lookup("DB_NAME").unwrap_or_else(|| "jobHive".into());
                format!("postgres://{user}:{pass}@{host}/{name}")
            }
        };
        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);
        let jwt_secret = lookup("ACCESS_TOKEN_SECRET").unwrap_or_else(|| DEV_SECRET.into());
        let jwt_expires_secs = lookup("JWT_EXPIRES_SECS")
            .and_then(|s| s.parse().ok())
            .filter(|secs: &i64| *secs > 0)
            .unwrap_or(SESSION_TTL_SECS);
        let is_production = matches!(
            lookup("NODE_ENV").or_else(|| lookup("RUST_ENV")).as_deref(),
            Some("production") | Some("prod")
        );

        if is_production {
            if jwt_secret == DEV_SECRET || jwt_secret.len() < 16 {
                anyhow::bail!("ACCESS_TOKEN_SECRET must be set to a strong secret in production");
            }
            if frontend_urls.iter().any(|u| !u.starts_with("http")) {
                anyhow::bail!(
                    "FRONTEND_URLS must list full origins in production (e.g., https://jobs.example.com)"
                );
            }
        }

        Ok(Self {
            api_port,
            frontend_urls,
            database_url,
            db_max_connections,
            jwt_secret,
            jwt_expires_secs,
            is_production,
        })
    }
}
