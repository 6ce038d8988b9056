/// Deployment environment, controlling which job runner is selected.
///
/// The mock-completion fallback exists only in [`Development`]; a
/// production deployment must never synthesize results.
///
/// [`Development`]: Environment::Development
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse from the `APP_ENV` value. Anything other than
    /// `production` (case-insensitive) is treated as development.
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Deployment environment (default: development).
    pub environment: Environment,
    /// GitHub token used to trigger the proof workflow. Optional at
    /// startup; a missing token fails each dispatch, not the process.
    pub github_pat: Option<String>,
    /// `owner/repo` whose `repository_dispatch` endpoint runs the
    /// proving workflow.
    pub github_dispatch_repo: String,
    /// Delay before a mock proof materializes in development.
    pub mock_proof_delay_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                     |
    /// |-------------------------|-----------------------------|
    /// | `HOST`                  | `0.0.0.0`                   |
    /// | `PORT`                  | `3000`                      |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`     |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                        |
    /// | `APP_ENV`               | `development`               |
    /// | `GITHUB_PAT`            | (unset)                     |
    /// | `GITHUB_DISPATCH_REPO`  | `TheOnma/TrackFlow-App-Sp1` |
    /// | `MOCK_PROOF_DELAY_SECS` | `15`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let environment = Environment::parse(
            &std::env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
        );

        let github_pat = std::env::var("GITHUB_PAT").ok().filter(|s| !s.is_empty());

        let github_dispatch_repo = std::env::var("GITHUB_DISPATCH_REPO")
            .unwrap_or_else(|_| "TheOnma/TrackFlow-App-Sp1".into());

        let mock_proof_delay_secs: u64 = std::env::var("MOCK_PROOF_DELAY_SECS")
            .unwrap_or_else(|_| "15".into())
            .parse()
            .expect("MOCK_PROOF_DELAY_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            environment,
            github_pat,
            github_dispatch_repo,
            mock_proof_delay_secs,
        }
    }
}
