//! # Environment validation
//!
//! Required configuration is split into two disjoint sets that are validated
//! once, at process start:
//!
//! | Set | Variables |
//! |-----|-----------|
//! | [`ServerEnv`] | `NODE_ENV`, `DATABASE_URL`, `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET` |
//! | [`PublicEnv`] | `NEXT_PUBLIC_APP_URL` |
//!
//! Values are read through the `config` crate's [`Environment`] source, so keys
//! arrive lowercased (`DATABASE_URL` becomes `database_url`). Every problem in a
//! set is collected before failing, so one run reports all missing variables.
//! The server set is checked first and a failure there stops validation.

use std::fmt;

use config::{Config, Environment};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

/// Runtime mode taken from `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeEnv {
    #[default]
    Development,
    Test,
    Production,
}

impl NodeEnv {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "development" => Some(Self::Development),
            "test" => Some(Self::Test),
            "production" => Some(Self::Production),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

/// A single invalid or missing variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvIssue {
    pub var: &'static str,
    pub message: String,
}

impl EnvIssue {
    fn new(var: &'static str, message: impl Into<String>) -> Self {
        Self {
            var,
            message: message.into(),
        }
    }
}

impl fmt::Display for EnvIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.var, self.message)
    }
}

fn render_issues(issues: &[EnvIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("\n  - {issue}"))
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("Invalid server environment variables:{}", render_issues(.0))]
    Server(Vec<EnvIssue>),
    #[error("Invalid public environment variables:{}", render_issues(.0))]
    Public(Vec<EnvIssue>),
    #[error("Failed to read environment: {0}")]
    Source(#[from] config::ConfigError),
}

impl EnvError {
    /// Issues carried by a validation failure; empty for source errors.
    pub fn issues(&self) -> &[EnvIssue] {
        match self {
            Self::Server(issues) | Self::Public(issues) => issues,
            Self::Source(_) => &[],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawServerEnv {
    node_env: Option<String>,
    database_url: Option<String>,
    google_client_id: Option<String>,
    google_client_secret: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPublicEnv {
    next_public_app_url: Option<String>,
}

type VarMap = config::Map<String, String>;

fn read<T: DeserializeOwned>(vars: Option<VarMap>) -> Result<T, EnvError> {
    let config = Config::builder()
        .add_source(Environment::default().source(vars))
        .build()?;
    Ok(config.try_deserialize()?)
}

fn collect_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> VarMap
where
    K: Into<String>,
    V: Into<String>,
{
    vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

fn required(var: &'static str, value: Option<String>, issues: &mut Vec<EnvIssue>) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => {
            issues.push(EnvIssue::new(var, format!("{var} is required")));
            String::new()
        }
    }
}

/// OAuth client credentials for Google.
#[derive(Clone)]
pub struct GoogleCredentials {
    pub client_id: String,
    client_secret: String,
}

impl GoogleCredentials {
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for GoogleCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .finish()
    }
}

/// Variables only the server may see.
#[derive(Clone)]
pub struct ServerEnv {
    pub node_env: NodeEnv,
    database_url: String,
    pub google: GoogleCredentials,
}

impl fmt::Debug for ServerEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerEnv")
            .field("node_env", &self.node_env)
            .field("database_url", &"[redacted]")
            .field("google", &self.google)
            .finish()
    }
}

impl ServerEnv {
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Validate the server set from an explicit list of variables.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Result<Self, EnvError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::load(Some(collect_vars(vars)))
    }

    fn load(vars: Option<VarMap>) -> Result<Self, EnvError> {
        let raw: RawServerEnv = read(vars)?;
        let mut issues = Vec::new();

        let node_env = match raw.node_env.as_deref() {
            None | Some("") => NodeEnv::default(),
            Some(value) => NodeEnv::parse(value).unwrap_or_else(|| {
                issues.push(EnvIssue::new(
                    "NODE_ENV",
                    "NODE_ENV must be one of development, test, production",
                ));
                NodeEnv::default()
            }),
        };
        let database_url = required("DATABASE_URL", raw.database_url, &mut issues);
        let client_id = required("GOOGLE_CLIENT_ID", raw.google_client_id, &mut issues);
        let client_secret = required("GOOGLE_CLIENT_SECRET", raw.google_client_secret, &mut issues);

        if !issues.is_empty() {
            return Err(EnvError::Server(issues));
        }

        Ok(Self {
            node_env,
            database_url,
            google: GoogleCredentials {
                client_id,
                client_secret,
            },
        })
    }
}

/// Variables that are safe to expose to the browser.
#[derive(Debug, Clone)]
pub struct PublicEnv {
    pub app_url: Url,
}

impl PublicEnv {
    /// Validate the public set from an explicit list of variables.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Result<Self, EnvError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::load(Some(collect_vars(vars)))
    }

    fn load(vars: Option<VarMap>) -> Result<Self, EnvError> {
        let raw: RawPublicEnv = read(vars)?;

        match raw.next_public_app_url.as_deref().map(Url::parse) {
            Some(Ok(app_url)) => Ok(Self { app_url }),
            _ => Err(EnvError::Public(vec![EnvIssue::new(
                "NEXT_PUBLIC_APP_URL",
                "NEXT_PUBLIC_APP_URL must be a URL",
            )])),
        }
    }
}

/// Both validated sets.
#[derive(Debug, Clone)]
pub struct Env {
    pub server: ServerEnv,
    pub public: PublicEnv,
}

impl Env {
    /// Validate the process environment.
    pub fn from_process() -> Result<Self, EnvError> {
        Ok(Self {
            server: ServerEnv::load(None)?,
            public: PublicEnv::load(None)?,
        })
    }

    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Result<Self, EnvError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let vars = collect_vars(vars);
        Ok(Self {
            server: ServerEnv::load(Some(vars.clone()))?,
            public: PublicEnv::load(Some(vars))?,
        })
    }

    /// Session cookies are only marked `Secure` when the app is served over https
    /// or runs in production.
    pub fn secure_cookies(&self) -> bool {
        self.public.app_url.scheme() == "https" || self.server.node_env == NodeEnv::Production
    }
}
